//! Sampling configuration and grid helpers
//!
//! # Design
//!
//! `SamplingConfiguration` says HOW finely the parameter domain is cut,
//! while the surface says WHAT is being integrated.

use crate::error::{Result, StripError};

// =================================================================================================
// Sampling Configuration
// =================================================================================================

/// Step counts used by the integrators
///
/// - `angular_steps`: number of cells along u (the `n` of a strip)
/// - `width_steps`: number of cells along v (`floor(n/5)`, clamped to 1 for strips)
///
/// # Example
///
/// ```rust
/// use mobius_rs::integration::SamplingConfiguration;
///
/// let config = SamplingConfiguration::new(100, 20);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.cell_count(), 2000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingConfiguration {
    /// Number of steps along u
    pub angular_steps: usize,

    /// Number of steps along v
    pub width_steps: usize,
}

impl SamplingConfiguration {
    /// Create a configuration from explicit step counts
    pub fn new(angular_steps: usize, width_steps: usize) -> Self {
        Self { angular_steps, width_steps }
    }

    /// Builder pattern: set angular steps
    pub fn angular_steps(mut self, steps: usize) -> Self {
        self.angular_steps = steps;
        self
    }

    /// Builder pattern: set width steps
    pub fn width_steps(mut self, steps: usize) -> Self {
        self.width_steps = steps;
        self
    }

    /// Number of grid cells visited by the area integrator
    pub fn cell_count(&self) -> usize {
        self.angular_steps * self.width_steps
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.angular_steps == 0 {
            return Err(StripError::invalid_param(
                "angular_steps",
                self.angular_steps,
                "must be at least 1",
            ));
        }
        if self.width_steps == 0 {
            return Err(StripError::invalid_param(
                "width_steps",
                self.width_steps,
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

// =================================================================================================
// Helper Functions
// =================================================================================================

/// `count` evenly spaced values over `[start, end]`, both ends included
///
/// The last value is pinned to `end` exactly. With `count == 1` the result
/// holds only `start`; with `count == 0` it is empty.
///
/// # Example
///
/// ```rust
/// use mobius_rs::integration::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(linspace(-0.5, 0.5, 1), vec![-0.5]);
/// ```
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
            values[count - 1] = end;
            values
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
