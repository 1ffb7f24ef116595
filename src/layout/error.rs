//! Error types for the layout engine

use thiserror::Error;

/// Errors that can occur while placing shapes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Requested size has a non-positive dimension
    #[error("shape size must be positive, got {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    /// Two shapes of kinds that cannot be compared were tested for intersection
    #[error("cannot test intersection of '{expected}' with '{found}'")]
    UnsupportedShapeKind {
        expected: &'static str,
        found: &'static str,
    },

    /// The spiral search hit its configured step limit without finding a free spot
    #[error("no free position found after {steps} spiral steps")]
    SearchExhausted { steps: usize },

    /// A spiral step in the layout configuration is zero, negative or not finite
    #[error("layout setting '{field}' must be a finite number greater than zero")]
    InvalidConfig { field: &'static str },
}

impl LayoutError {
    /// Create an invalid size error
    pub fn invalid_size(width: i32, height: i32) -> Self {
        Self::InvalidSize { width, height }
    }

    /// Create an unsupported shape kind error
    pub fn unsupported_kind(expected: &'static str, found: &'static str) -> Self {
        Self::UnsupportedShapeKind { expected, found }
    }

    /// Create a search exhausted error
    pub fn search_exhausted(steps: usize) -> Self {
        Self::SearchExhausted { steps }
    }

    /// Create an invalid config error
    pub fn invalid_config(field: &'static str) -> Self {
        Self::InvalidConfig { field }
    }
}
