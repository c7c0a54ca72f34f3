use atomrange_core::catalog::{events_by_category, historical_event, BOMB_TYPES};
use atomrange_core::enums::{BlastZoneType, DensitySource, EventCategory};
use atomrange_core::types::WindConfig;
use atomrange_sim::wind::simulated_weather;
use atomrange_sim::{SimulationRequest, Simulator};

#[test]
fn hiroshima_replay() {
    let event = historical_event("hiroshima").unwrap();
    let bomb = event.bomb().unwrap();
    let req = SimulationRequest::for_bomb(bomb.id, event.location.lat, event.location.lon).unwrap();

    let mut sim = Simulator::default();
    let report = sim.run(&req).unwrap();

    assert_eq!(report.blast.fireball, 0.27);
    assert_eq!(report.blast.light_blast, 3.7);
    assert_eq!(report.blast.thermal, 10.62);
    assert!(report.aggregate.fatalities > 0);
    assert!(report.aggregate.injuries > report.aggregate.fatalities);
}

#[test]
fn every_catalog_weapon_runs() {
    let mut sim = Simulator::default();
    for bomb in BOMB_TYPES {
        let req = SimulationRequest::for_bomb(bomb.id, 51.5074, -0.1278)
            .unwrap()
            .with_wind(WindConfig::new(270.0, 30.0));
        let report = sim.run(&req).unwrap();

        let radii: Vec<f64> = report.zones.iter().map(|z| z.radius_km).collect();
        let thermal = report.zone(BlastZoneType::Thermal).unwrap().radius_km;
        assert!(
            radii.iter().all(|&r| r <= thermal),
            "{}: thermal should bound every zone, got {radii:?}",
            bomb.id
        );
        let fallout = report.fallout.as_ref().unwrap();
        assert_eq!(fallout.wind_direction_name, "West");
        assert!(fallout.pattern.width < fallout.pattern.length);
    }
    assert_eq!(sim.runs(), BOMB_TYPES.len() as u64);
}

#[test]
fn bigger_weapons_do_more_damage() {
    let mut sim = Simulator::default();
    let mut last_fatalities = 0;
    let mut bombs: Vec<_> = BOMB_TYPES.iter().collect();
    bombs.sort_by(|a, b| a.yield_kt.total_cmp(&b.yield_kt));

    for bomb in bombs {
        let req = SimulationRequest::for_bomb(bomb.id, 40.7128, -74.0060).unwrap();
        let report = sim.run(&req).unwrap();
        assert!(
            report.aggregate.fatalities > last_fatalities,
            "{} should kill more than the previous weapon",
            bomb.id
        );
        last_fatalities = report.aggregate.fatalities;
    }
}

#[test]
fn simulated_weather_drives_fallout() {
    let (lat, lon) = (55.7558, 37.6173);
    let weather = simulated_weather(lat, lon).unwrap();
    let req = SimulationRequest::new(100.0, lat, lon).with_wind(weather.to_wind());

    let report = Simulator::default().run(&req).unwrap();
    let fallout = report.fallout.unwrap();
    assert_eq!(fallout.pattern.wind_direction, weather.wind_direction);
    assert_eq!(fallout.pattern.wind_speed, weather.wind_speed);
    assert!(report.request.wind.unwrap().real_time);
}

#[test]
fn open_ocean_falls_back_to_global_average() {
    let mut sim = Simulator::default();
    let report = sim
        .run(&SimulationRequest::new(15_000.0, 11.5, 165.4).with_country("Atlantis"))
        .unwrap();
    assert_eq!(report.density.source, DensitySource::Global);
    assert_eq!(report.density.name, "Global Average");
}

#[test]
fn test_events_replay_cleanly() {
    let mut sim = Simulator::default();
    for event in events_by_category(EventCategory::Test) {
        let bomb = event.bomb().unwrap();
        let req =
            SimulationRequest::for_bomb(bomb.id, event.location.lat, event.location.lon).unwrap();
        assert!(sim.run(&req).is_ok(), "{} failed to replay", event.id);
    }
}
