pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod notification;
pub mod render;
pub mod service;

pub use error::{AppError, Result};
pub use service::{Service, SERVICE_TYPE};
