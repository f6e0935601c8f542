#![forbid(unsafe_code)]

pub mod http;
pub mod resource;

pub use http::{ApiConfig, ApiConfigError, DEFAULT_ORIGIN, HttpItemsApi, ITEMS_PATH, ORIGIN_ENV};
pub use resource::{ApiCall, ApiError, InMemoryItemsApi, ItemsApi};
