pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod service;
pub mod store;

pub use config::ServiceConfig;
pub use error::StoreError;
pub use service::EstateService;
