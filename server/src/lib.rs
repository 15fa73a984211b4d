//! BotMarket: OTP-login bot marketplace server.

pub mod app;
pub mod auth;
pub mod background;
pub mod bootstrap;
pub mod config;
pub mod server;
pub mod services;

pub use bootstrap::init_foundation;
