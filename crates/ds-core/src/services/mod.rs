pub mod config_loader;
pub mod ports;
pub mod reuse;
pub mod state;
