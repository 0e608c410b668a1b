//! Core library for the `weather-dash` terminal dashboard.
//!
//! This crate defines:
//! - Location search against a weather provider
//! - Display-time unit conversion and formatting
//! - The saved-locations (bookmark) store over pluggable key-value storage
//! - The dashboard view-state machine tying them together
//! - Configuration & credentials handling
//!
//! It is used by `weather-dash-cli`, but can also be driven by other frontends.

pub mod bookmarks;
pub mod config;
pub mod dashboard;
pub mod display;
pub mod model;
pub mod provider;
pub mod storage;
pub mod units;

pub use bookmarks::{BookmarkStore, SAVED_LOCATIONS_KEY, SavedLocations};
pub use config::Config;
pub use dashboard::{Dashboard, SearchTicket, View};
pub use model::{LocationId, LocationWeather};
pub use provider::{LocationSearch, SearchError, SearchErrorKind, search_locations};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
