//! Shared types for Vitrine

mod error;

pub use error::{Result, VitrineError};
