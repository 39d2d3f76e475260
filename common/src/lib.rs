//! Shared model and the framework-free core of the leads dashboard.
//!
//! The frontend drives [`dashboard::Dashboard`] from yew messages; the
//! backend uses the model and request types to serve the same shapes.

pub mod api;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod debounce;
pub mod detail;
pub mod error;
pub mod feedback;
pub mod model;
pub mod requests;
pub mod stats;
pub mod table;
pub mod view_model;
