//! Configuration loading from .env / environment variables.

pub mod app_config;

pub use app_config::AppConfig;
