//! Static reference data: the bomb catalog and historical detonations.
//!
//! Both tables are immutable for the lifetime of the process.

use serde::Serialize;

use crate::enums::EventCategory;

/// A selectable weapon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BombType {
    pub id: &'static str,
    pub name: &'static str,
    pub yield_kt: f64,
    pub description: &'static str,
}

/// Weapons offered by the simulator.
pub static BOMB_TYPES: &[BombType] = &[
    BombType {
        id: "little-boy",
        name: "Little Boy",
        yield_kt: 15.0,
        description: "Uranium gun-type bomb dropped on Hiroshima (6 August 1945)",
    },
    BombType {
        id: "fat-man",
        name: "Fat Man",
        yield_kt: 21.0,
        description: "Plutonium implosion bomb dropped on Nagasaki (9 August 1945)",
    },
    BombType {
        id: "tsar-bomba",
        name: "Tsar Bomba",
        yield_kt: 50_000.0,
        description: "Largest thermonuclear device ever detonated (1961)",
    },
    BombType {
        id: "w87",
        name: "W87",
        yield_kt: 300.0,
        description: "Modern US thermonuclear warhead",
    },
    BombType {
        id: "castle-bravo",
        name: "Castle Bravo",
        yield_kt: 15_000.0,
        description: "Largest US nuclear test (1954)",
    },
];

/// Little Boy.
pub fn default_bomb() -> &'static BombType {
    &BOMB_TYPES[0]
}

pub fn bomb_by_id(id: &str) -> Option<&'static BombType> {
    BOMB_TYPES.iter().find(|b| b.id == id)
}

/// Where a historical detonation happened.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EventLocation {
    pub lat: f64,
    pub lon: f64,
    pub city: &'static str,
    pub country: &'static str,
}

/// Reported deaths; `total` includes long-term effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventCasualties {
    pub immediate: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalEvent {
    pub id: &'static str,
    pub name: &'static str,
    /// ISO 8601 date.
    pub date: &'static str,
    pub location: EventLocation,
    /// Key into [`BOMB_TYPES`].
    pub bomb_id: &'static str,
    pub casualties: EventCasualties,
    pub category: EventCategory,
    pub description: &'static str,
}

impl HistoricalEvent {
    /// The catalog entry for the weapon used.
    pub fn bomb(&self) -> Option<&'static BombType> {
        bomb_by_id(self.bomb_id)
    }
}

pub static HISTORICAL_EVENTS: &[HistoricalEvent] = &[
    HistoricalEvent {
        id: "hiroshima",
        name: "Hiroshima Bombing",
        date: "1945-08-06",
        location: EventLocation {
            lat: 34.3853,
            lon: 132.4553,
            city: "Hiroshima",
            country: "Japan",
        },
        bomb_id: "little-boy",
        casualties: EventCasualties {
            immediate: 70_000,
            total: 140_000,
        },
        category: EventCategory::Warfare,
        description: "First use of an atomic bomb in war. Airburst at about 600 m at 08:15 local \
                      time; roughly 70,000 killed at once and 140,000 by the end of 1945.",
    },
    HistoricalEvent {
        id: "nagasaki",
        name: "Nagasaki Bombing",
        date: "1945-08-09",
        location: EventLocation {
            lat: 32.7503,
            lon: 129.8779,
            city: "Nagasaki",
            country: "Japan",
        },
        bomb_id: "fat-man",
        casualties: EventCasualties {
            immediate: 40_000,
            total: 80_000,
        },
        category: EventCategory::Warfare,
        description: "Second and last wartime use, at 11:02 local time. Hilly terrain shielded \
                      parts of the city; about 40,000 killed at once and 80,000 in total.",
    },
    HistoricalEvent {
        id: "castle-bravo",
        name: "Castle Bravo Test",
        date: "1954-03-01",
        location: EventLocation {
            lat: 11.6920,
            lon: 165.2719,
            city: "Bikini Atoll",
            country: "Marshall Islands",
        },
        bomb_id: "castle-bravo",
        casualties: EventCasualties {
            immediate: 0,
            total: 0,
        },
        category: EventCategory::Test,
        description: "Largest US test at 15 Mt, 2.5 times the predicted yield. Fallout reached \
                      inhabited atolls and a Japanese fishing boat.",
    },
    HistoricalEvent {
        id: "tsar-bomba",
        name: "Tsar Bomba Test",
        date: "1961-10-30",
        location: EventLocation {
            lat: 73.4822,
            lon: 54.5854,
            city: "Novaya Zemlya",
            country: "Soviet Union",
        },
        bomb_id: "tsar-bomba",
        casualties: EventCasualties {
            immediate: 0,
            total: 0,
        },
        category: EventCategory::Test,
        description: "Largest device ever detonated, 50 Mt from a 100 Mt design. The fireball \
                      was about 8 km across and the cloud rose to 64 km.",
    },
];

pub fn historical_event(id: &str) -> Option<&'static HistoricalEvent> {
    HISTORICAL_EVENTS.iter().find(|e| e.id == id)
}

pub fn events_by_category(category: EventCategory) -> Vec<&'static HistoricalEvent> {
    HISTORICAL_EVENTS
        .iter()
        .filter(|e| e.category == category)
        .collect()
}
