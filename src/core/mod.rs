// src/core/mod.rs
//! Configuration and transport shared by the coordinators

pub mod config_manager;
pub mod service_client;

pub use config_manager::{ClientConfig, ConfigManager, ResponseOrdering};
pub use service_client::{ServiceClient, ServiceError};
