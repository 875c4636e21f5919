pub mod config;

pub use config::WatchConfig;
