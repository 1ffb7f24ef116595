//! Top-level error type for the cloud pipeline

use thiserror::Error;

use crate::layout::LayoutError;
use crate::preset::PresetError;

/// Errors that can occur while generating or rendering a cloud
#[derive(Debug, Error)]
pub enum CloudError {
    /// Error while placing a shape
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Error while loading or sampling a preset
    #[error("preset error: {0}")]
    Preset(#[from] PresetError),

    /// Error writing rendered output
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_error_conversion() {
        let err: CloudError = LayoutError::invalid_size(0, 1).into();
        assert!(matches!(err, CloudError::Layout(LayoutError::InvalidSize { .. })));
        assert!(err.to_string().starts_with("layout error:"));
    }

    #[test]
    fn test_preset_error_conversion() {
        let err: CloudError = PresetError::EmptyRange { field: "long" }.into();
        assert_eq!(err.to_string(), "preset error: Size range 'long' is empty");
    }
}
