//! Configuration for the cloud layouter

use serde::Deserialize;

use super::error::LayoutError;

/// Configuration options for shape placement
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Angle increment per spiral step, in radians
    pub angle_step: f64,

    /// Radius growth per radian of spiral angle
    pub radius_step: f64,

    /// Upper bound on spiral points tried per placement (unbounded when `None`)
    pub max_search_steps: Option<usize>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            angle_step: 0.1,
            radius_step: 0.5,
            max_search_steps: None,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the spiral angle step
    pub fn with_angle_step(mut self, step: f64) -> Self {
        self.angle_step = step;
        self
    }

    /// Set the spiral radius step
    pub fn with_radius_step(mut self, step: f64) -> Self {
        self.radius_step = step;
        self
    }

    /// Limit how many spiral points a single placement may try
    pub fn with_max_search_steps(mut self, steps: usize) -> Self {
        self.max_search_steps = Some(steps);
        self
    }

    /// Check that both spiral steps are finite and positive
    ///
    /// A zero or NaN step keeps the spiral on its center, so a search
    /// without `max_search_steps` would never finish.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let steps = [
            ("angle_step", self.angle_step),
            ("radius_step", self.radius_step),
        ];
        for (field, value) in steps {
            if !(value.is_finite() && value > 0.0) {
                return Err(LayoutError::invalid_config(field));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.angle_step, 0.1);
        assert_eq!(config.radius_step, 0.5);
        assert_eq!(config.max_search_steps, None);
    }

    #[test]
    fn test_builder_pattern() {
        let config = LayoutConfig::new()
            .with_angle_step(0.05)
            .with_radius_step(1.0)
            .with_max_search_steps(10_000);

        assert_eq!(config.angle_step, 0.05);
        assert_eq!(config.radius_step, 1.0);
        assert_eq!(config.max_search_steps, Some(10_000));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: LayoutConfig = toml::from_str("radius_step = 0.25").expect("Should parse");
        assert_eq!(config.angle_step, 0.1);
        assert_eq!(config.radius_step, 0.25);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(LayoutConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_degenerate_steps_rejected() {
        let cases = [
            (LayoutConfig::new().with_angle_step(0.0), "angle_step"),
            (LayoutConfig::new().with_angle_step(-0.1), "angle_step"),
            (LayoutConfig::new().with_angle_step(f64::NAN), "angle_step"),
            (LayoutConfig::new().with_radius_step(0.0), "radius_step"),
            (LayoutConfig::new().with_radius_step(f64::INFINITY), "radius_step"),
        ];
        for (config, field) in cases {
            assert_eq!(
                config.validate(),
                Err(LayoutError::invalid_config(field)),
                "{:?}",
                config
            );
        }
    }
}
