pub mod config;
pub mod errors;
pub mod extract;
pub mod intent;
pub mod route;

pub use errors::{ApplicationError, InterfaceError};
pub use extract::{extract_part_number, DigitRunExtractor, UNKNOWN_PART};
pub use intent::{Intent, IntentClassifier};
pub use route::CostRoute;
