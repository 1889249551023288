//! Adapters for external services.

pub mod geocoder;
