pub mod captured;
pub mod config;
pub mod schema;

pub use captured::CapturedService;
pub use config::DevServicesConfig;
pub use schema::{ConfigField, ConfigItem, ConfigKind, DEFAULT_PREFIX, SCHEMA};
