//! HTTP server for Vitrine

pub mod http;

pub use http::{run, AppState};
