use std::time::Duration;

/// Seed data compiled into the crate, used unless the builder is pointed
/// at another source.
pub const DEFAULT_CATALOG_JSON: &str = include_str!("../data/catalog.json");

/// How long a simulated scan shows its "scanning" state before resolving.
pub const DEFAULT_SCAN_DELAY: Duration = Duration::from_millis(2000);

/// Lowest personalized score a product can receive.
pub const SCORE_FLOOR: f64 = 0.1;

/// Highest personalized score a product can receive.
pub const SCORE_CEILING: f64 = 5.0;

/// Number of products shown on the home screen's quick access grid.
pub const QUICK_ACCESS_LIMIT: usize = 4;

// Scoring rule constants. Kept as-is for compatibility with existing scores.
pub const SUGAR_MARKERS: [&str; 3] = ["sugar", "syrup", "fructose"];
pub const SUGAR_PENALTY: f64 = 0.5;
pub const SODIUM_THRESHOLD_MG: i64 = 200;
pub const SODIUM_PENALTY: f64 = 0.3;
pub const PLANT_BONUS: f64 = 0.1;
pub const MEAT_MARKER: &str = "meat";
