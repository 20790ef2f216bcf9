//! Infrastructure layer - External service implementations

pub mod embedding;
pub mod generator;
pub mod history;
pub mod http_client;
pub mod index;
pub mod logging;
pub mod services;
