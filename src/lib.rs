pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod pages;
pub mod util;
pub mod validation;

pub use client::{ApiClient, Resource};
pub use config::Config;
pub use error::ApiError;
