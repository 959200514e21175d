//! Common library for the vehicle route playback system.
//!
//! This crate provides shared functionality across the route proxy and the
//! route viewer, including the waypoint data model, date-range selectors,
//! configuration management, error handling and telemetry utilities.

// Waypoints, headings and route geometry
pub mod waypoint;
pub use waypoint::{Waypoint, DEFAULT_CENTER};

// Symbolic date-range selectors
pub mod selector;
pub use selector::RangeSelector;

// Configuration management
pub mod config;
pub use config::Config;

// Error handling types
pub mod error;
pub use error::{Result, RouteError};

// Telemetry and observability
pub mod telemetry;

pub use telemetry::init_tracing;
