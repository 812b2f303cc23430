//! Helper functions for integration tests

/// Relative error |approx − exact| / |exact|
pub fn relative_error(approx: f64, exact: f64) -> f64 {
    if exact.abs() < 1e-12 {
        approx.abs()
    } else {
        (approx - exact).abs() / exact.abs()
    }
}

/// |value − reference| for every value of a resolution sweep
pub fn gaps_to_reference(values: &[f64], reference: f64) -> Vec<f64> {
    values.iter().map(|v| (v - reference).abs()).collect()
}

/// Assert each entry is strictly below the previous one
pub fn assert_strictly_decreasing(values: &[f64], message: &str) {
    for (i, pair) in values.windows(2).enumerate() {
        assert!(
            pair[1] < pair[0],
            "{}: entry {} ({:e}) is not below entry {} ({:e})",
            message, i + 1, pair[1], i, pair[0]
        );
    }
}
