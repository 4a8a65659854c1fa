pub mod settings;

pub use settings::{AppConfig, QuerySettings, SourceSettings};
