pub mod classify;
pub mod models;
pub mod parser;
mod progress;
pub mod schedule;

pub use classify::{Gender, Phase};
pub use models::*;
pub use parser::{parse_file, ParsedGame};
pub use progress::FetchProgress;
