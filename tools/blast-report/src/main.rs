//! blast-report: run one detonation scenario and print the report as JSON.
//!
//! Usage:
//!   blast-report report --bomb little-boy --center 34.3853,132.4553 --wind 90,20
//!   blast-report report --yield 300 --center 48.8566,2.3522 --simulated-weather
//!   blast-report bombs
//!   blast-report events

use std::path::PathBuf;
use std::process;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use atomrange_core::catalog::{BOMB_TYPES, HISTORICAL_EVENTS};
use atomrange_core::types::WindConfig;
use atomrange_sim::wind::simulated_weather;
use atomrange_sim::{ModelConfig, SimulationRequest, Simulator};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "report" => cmd_report(&args[2..]),
        "bombs" => print_json(&BOMB_TYPES),
        "events" => print_json(&HISTORICAL_EVENTS),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "blast-report: nuclear detonation effects estimator\n\
         \n\
         Commands:\n\
         \n\
         report    Estimate blast, casualties and fallout for one detonation\n\
         \n\
           --yield <kt>           Yield in kilotons\n\
           --bomb <id>            Catalog weapon instead of --yield\n\
           --center <lat,lon>     Ground zero coordinates\n\
           --country <name>       Country hint for density lookup (optional)\n\
           --wind <dir,speed>     Wind bearing (deg) and speed (km/h) (optional)\n\
           --simulated-weather    Derive wind from the location (optional)\n\
           --seed <N>             RNG seed (optional, default: 42)\n\
           --config <path>        JSON model config (optional)\n\
         \n\
         bombs     List the weapon catalog\n\
         events    List the historical events\n\
         \n\
         Examples:\n\
         \n\
           blast-report report --bomb little-boy --center 34.3853,132.4553 --wind 90,20\n\
           blast-report report --yield 300 --center 48.8566,2.3522 --simulated-weather\n\
         \n\
         Set RUST_LOG=debug for step-by-step diagnostics.\n"
    );
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

fn parse_pair(value: &str) -> Option<(f64, f64)> {
    let (a, b) = value.split_once(',')?;
    Some((a.trim().parse().ok()?, b.trim().parse().ok()?))
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {message}");
    process::exit(1);
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => fail(format!("serializing output: {e}")),
    }
}

// --- Report command ---

fn cmd_report(args: &[String]) {
    let (lat, lon) = match flag_value(args, "--center").map(parse_pair) {
        Some(Some(c)) => c,
        Some(None) => fail("--center expects <lat,lon>"),
        None => fail("--center <lat,lon> is required"),
    };

    let mut request = match (flag_value(args, "--bomb"), flag_value(args, "--yield")) {
        (Some(_), Some(_)) => fail("--bomb and --yield are mutually exclusive"),
        (Some(id), None) => SimulationRequest::for_bomb(id, lat, lon).unwrap_or_else(|e| fail(e)),
        (None, Some(y)) => match y.parse::<f64>() {
            Ok(yield_kt) => SimulationRequest::new(yield_kt, lat, lon),
            Err(_) => fail(format!("--yield expects a number, got {y:?}")),
        },
        (None, None) => fail("one of --yield <kt> or --bomb <id> is required"),
    };

    if let Some(country) = flag_value(args, "--country") {
        request = request.with_country(country);
    }

    let wind = flag_value(args, "--wind");
    if wind.is_some() && has_flag(args, "--simulated-weather") {
        warn!("--wind given, ignoring --simulated-weather");
    }
    if let Some(value) = wind {
        let (direction, speed) = parse_pair(value).unwrap_or_else(|| fail("--wind expects <dir,speed>"));
        request = request.with_wind(WindConfig::new(direction, speed));
    } else if has_flag(args, "--simulated-weather") {
        let weather = simulated_weather(lat, lon).unwrap_or_else(|e| fail(e));
        info!(
            speed = weather.wind_speed,
            direction = weather.wind_direction,
            "{}",
            weather.description
        );
        request = request.with_wind(weather.to_wind());
    } else {
        warn!("No wind given, fallout will not be computed");
    }

    let mut config = match flag_value(args, "--config") {
        Some(path) => ModelConfig::load(&PathBuf::from(path)).unwrap_or_else(|e| fail(e)),
        None => ModelConfig::default(),
    };
    if let Some(seed) = flag_value(args, "--seed") {
        config.seed = seed
            .parse()
            .unwrap_or_else(|_| fail(format!("--seed expects an integer, got {seed:?}")));
    }

    let mut sim = Simulator::new(config).unwrap_or_else(|e| fail(e));
    let report = sim.run(&request).unwrap_or_else(|e| fail(e));
    print_json(&report);
}
