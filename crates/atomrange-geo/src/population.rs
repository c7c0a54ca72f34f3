//! Static population density table.
//!
//! Densities in people/km², compiled from UN World Urbanization Prospects,
//! World Bank open data and municipal statistics. City entries carry a
//! coverage radius; country entries are fallbacks keyed by name.

/// What a table entry describes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntryKind {
    /// A metropolitan area matched by distance from its centroid.
    City { name: &'static str, radius_km: f64 },
    /// A national average matched by country name.
    Country,
}

/// One row of the density table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopulationEntry {
    pub country: &'static str,
    /// People per km².
    pub density: f64,
    /// Centroid latitude (degrees).
    pub lat: f64,
    /// Centroid longitude (degrees).
    pub lon: f64,
    pub kind: EntryKind,
}

impl PopulationEntry {
    /// City name and coverage radius, if this is a city entry.
    pub fn city(&self) -> Option<(&'static str, f64)> {
        match self.kind {
            EntryKind::City { name, radius_km } => Some((name, radius_km)),
            EntryKind::Country => None,
        }
    }

    /// `"<city>, <country>"` for cities, the country name otherwise.
    pub fn display_name(&self) -> String {
        match self.kind {
            EntryKind::City { name, .. } => format!("{name}, {}", self.country),
            EntryKind::Country => self.country.to_string(),
        }
    }
}

const fn city(
    name: &'static str,
    country: &'static str,
    density: f64,
    lat: f64,
    lon: f64,
    radius_km: f64,
) -> PopulationEntry {
    PopulationEntry {
        country,
        density,
        lat,
        lon,
        kind: EntryKind::City { name, radius_km },
    }
}

const fn country(country: &'static str, density: f64, lat: f64, lon: f64) -> PopulationEntry {
    PopulationEntry {
        country,
        density,
        lat,
        lon,
        kind: EntryKind::Country,
    }
}

/// Cities first, then countries. Order matters: it breaks distance ties.
static POPULATION_TABLE: &[PopulationEntry] = &[
    // Cities
    city("Manila", "Philippines", 46178.0, 14.5995, 120.9842, 25.0),
    city("Mumbai", "India", 31700.0, 19.0760, 72.8777, 35.0),
    city("Dhaka", "Bangladesh", 29069.0, 23.8103, 90.4125, 30.0),
    city("Karachi", "Pakistan", 24000.0, 24.8607, 67.0011, 40.0),
    city("Hong Kong", "China", 17311.0, 22.3193, 114.1694, 20.0),
    city("Singapore", "Singapore", 8358.0, 1.3521, 103.8198, 25.0),
    city("Jakarta", "Indonesia", 15342.0, -6.2088, 106.8456, 30.0),
    city("Seoul", "South Korea", 16000.0, 37.5665, 126.9780, 35.0),
    city("Tokyo", "Japan", 6158.0, 35.6762, 139.6503, 50.0),
    city("Shanghai", "China", 3800.0, 31.2304, 121.4737, 45.0),
    city("Beijing", "China", 1300.0, 39.9042, 116.4074, 50.0),
    city("Bangkok", "Thailand", 5300.0, 13.7563, 100.5018, 30.0),
    city("Taipei", "Taiwan", 9575.0, 25.0330, 121.5654, 20.0),
    city("Kuala Lumpur", "Malaysia", 8157.0, 3.1390, 101.6869, 25.0),
    city("Ho Chi Minh City", "Vietnam", 4363.0, 10.8231, 106.6297, 25.0),
    city("Delhi", "India", 29259.0, 28.7041, 77.1025, 40.0),
    city("Bangalore", "India", 11371.0, 12.9716, 77.5946, 30.0),
    city("Kolkata", "India", 24252.0, 22.5726, 88.3639, 25.0),
    city("Chennai", "India", 26553.0, 13.0827, 80.2707, 25.0),
    city("Cairo", "Egypt", 19376.0, 30.0444, 31.2357, 35.0),
    city("Tehran", "Iran", 11800.0, 35.6892, 51.3890, 35.0),
    city("Istanbul", "Turkey", 2976.0, 41.0082, 28.9784, 40.0),
    city("Dubai", "UAE", 762.0, 25.2048, 55.2708, 30.0),
    city("Riyadh", "Saudi Arabia", 2200.0, 24.7136, 46.6753, 35.0),
    city("Paris", "France", 21498.0, 48.8566, 2.3522, 30.0),
    city("London", "United Kingdom", 5701.0, 51.5074, -0.1278, 40.0),
    city("Madrid", "Spain", 5400.0, 40.4168, -3.7038, 30.0),
    city("Barcelona", "Spain", 16000.0, 41.3851, 2.1734, 25.0),
    city("Rome", "Italy", 2232.0, 41.9028, 12.4964, 30.0),
    city("Berlin", "Germany", 4100.0, 52.5200, 13.4050, 35.0),
    city("Moscow", "Russia", 4900.0, 55.7558, 37.6173, 40.0),
    city("Amsterdam", "Netherlands", 5135.0, 52.3676, 4.9041, 20.0),
    city("Brussels", "Belgium", 7400.0, 50.8503, 4.3517, 20.0),
    city("New York", "USA", 10715.0, 40.7128, -74.0060, 40.0),
    city("Los Angeles", "USA", 3206.0, 34.0522, -118.2437, 45.0),
    city("Chicago", "USA", 4572.0, 41.8781, -87.6298, 35.0),
    city("San Francisco", "USA", 7174.0, 37.7749, -122.4194, 25.0),
    city("Mexico City", "Mexico", 6000.0, 19.4326, -99.1332, 40.0),
    city("São Paulo", "Brazil", 7821.0, -23.5505, -46.6333, 40.0),
    city("Buenos Aires", "Argentina", 14000.0, -34.6037, -58.3816, 35.0),
    city("Rio de Janeiro", "Brazil", 5265.0, -22.9068, -43.1729, 30.0),
    city("Toronto", "Canada", 4266.0, 43.6532, -79.3832, 30.0),
    city("Lima", "Peru", 3200.0, -12.0464, -77.0428, 30.0),
    city("Bogotá", "Colombia", 4300.0, 4.7110, -74.0721, 30.0),
    city("Lagos", "Nigeria", 13123.0, 6.5244, 3.3792, 30.0),
    city("Kinshasa", "DR Congo", 12691.0, -4.4419, 15.2663, 25.0),
    city("Johannesburg", "South Africa", 2364.0, -26.2041, 28.0473, 35.0),
    city("Nairobi", "Kenya", 4509.0, -1.2864, 36.8172, 25.0),
    city("Sydney", "Australia", 433.0, -33.8688, 151.2093, 40.0),
    city("Melbourne", "Australia", 508.0, -37.8136, 144.9631, 35.0),
    city("Auckland", "New Zealand", 360.0, -36.8485, 174.7633, 30.0),
    // Countries
    country("Singapore", 8358.0, 1.3521, 103.8198),
    country("Bangladesh", 1265.0, 23.685, 90.3563),
    country("Taiwan", 673.0, 23.5, 121.0),
    country("South Korea", 527.0, 36.5, 127.5),
    country("Philippines", 368.0, 12.8797, 121.774),
    country("India", 464.0, 20.5937, 78.9629),
    country("Japan", 347.0, 36.2048, 138.2529),
    country("Vietnam", 314.0, 14.0583, 108.2772),
    country("Pakistan", 287.0, 30.3753, 69.3451),
    country("China", 153.0, 35.8617, 104.1954),
    country("Indonesia", 151.0, -2.5, 118.0),
    country("Thailand", 137.0, 15.8700, 100.9925),
    country("Malaysia", 99.0, 4.2105, 101.9758),
    country("Bahrain", 2239.0, 26.0667, 50.5577),
    country("Lebanon", 667.0, 33.8547, 35.8623),
    country("Israel", 400.0, 31.0461, 34.8516),
    country("Kuwait", 254.0, 29.3117, 47.4818),
    country("UAE", 118.0, 23.4241, 53.8478),
    country("Turkey", 110.0, 38.9637, 35.2433),
    country("Iran", 52.0, 32.4279, 53.6880),
    country("Saudi Arabia", 16.0, 23.8859, 45.0792),
    country("Monaco", 26337.0, 43.7384, 7.4246),
    country("Netherlands", 508.0, 52.1326, 5.2913),
    country("Belgium", 383.0, 50.5039, 4.4699),
    country("United Kingdom", 281.0, 55.3781, -3.4360),
    country("Germany", 240.0, 51.1657, 10.4515),
    country("Italy", 206.0, 41.8719, 12.5674),
    country("Switzerland", 219.0, 46.8182, 8.2275),
    country("France", 119.0, 46.2276, 2.2137),
    country("Spain", 94.0, 40.4637, -3.7492),
    country("Poland", 124.0, 51.9194, 19.1451),
    country("Russia", 9.0, 61.5240, 105.3188),
    country("USA", 36.0, 37.0902, -95.7129),
    country("Mexico", 66.0, 23.6345, -102.5528),
    country("Brazil", 25.0, -14.2350, -51.9253),
    country("Colombia", 46.0, 4.5709, -74.2973),
    country("Argentina", 17.0, -38.4161, -63.6167),
    country("Canada", 4.0, 56.1304, -106.3468),
    country("Peru", 26.0, -9.1900, -75.0152),
    country("Chile", 26.0, -35.6751, -71.5430),
    country("Nigeria", 226.0, 9.0820, 8.6753),
    country("Egypt", 103.0, 26.8206, 30.8025),
    country("Kenya", 94.0, -0.0236, 37.9062),
    country("South Africa", 49.0, -30.5595, 22.9375),
    country("DR Congo", 40.0, -4.0383, 21.7587),
    country("Ethiopia", 115.0, 9.1450, 40.4897),
    country("Australia", 3.0, -25.2744, 133.7751),
    country("New Zealand", 19.0, -40.9006, 174.8860),
];

/// The built-in density table.
pub fn population_table() -> &'static [PopulationEntry] {
    POPULATION_TABLE
}
