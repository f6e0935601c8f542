#![forbid(unsafe_code)]

pub mod app_services;
pub mod controller;
pub mod error;
pub mod sync_service;

pub use app_services::AppServices;
pub use controller::{ItemsController, StateHandle};
pub use error::{AppServicesError, SyncError};
pub use sync_service::ItemSyncService;
