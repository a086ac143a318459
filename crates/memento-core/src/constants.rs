use chrono_tz::Tz;

/// Weeks in a calendar year. Leap-year drift is ignored by convention.
pub const WEEKS_PER_YEAR: u32 = 52;

/// Logical surface width.
pub const DISPLAY_WIDTH: f64 = 800.0;

/// Logical surface height.
pub const DISPLAY_HEIGHT: f64 = 480.0;

/// Civil timezone used for special-day matching and date entry.
pub const CIVIL_ZONE: Tz = chrono_tz::America::New_York;

/// Golden ratio: (1 + √5) / 2
pub const PHI: f64 = 1.618_033_988_749_895;

/// Default birthdate when no config is available.
pub const DEFAULT_BIRTHDATE: &str = "1987-08-17";

/// Default expected lifespan in years.
pub const DEFAULT_LIFESPAN: u32 = 80;

/// Longest lifespan a render accepts. Keeps a frame to a few thousand markers.
pub const MAX_LIFESPAN: u32 = 150;
