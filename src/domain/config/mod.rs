//! Configuration value objects

mod app_config;
mod client_config;
mod duration;

pub use app_config::AppConfig;
pub use client_config::{
    ClientConfig, DEFAULT_HOST, DEFAULT_PORT, HOST_ENV, PORT_ENV,
};
pub use duration::{Duration, DEFAULT_TIMEOUT_SECS};
