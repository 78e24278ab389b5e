//! Statistical hypothesis tests
//!
//! - Independent two-sample t-test with variance-homogeneity-aware
//!   degrees-of-freedom selection
//! - Levene's test for equality of variances
//! - Pearson correlation


/// Result of the independent two-sample t-test
#[derive(Debug, Clone)]
pub struct TTestResult {
    /// t statistic
    pub t_statistic: f64,
    /// Degrees of freedom (fractional on the unequal-variance path)
    pub df: f64,
    /// Sample variance of group 1
    pub variance1: f64,
    /// Sample variance of group 2
    pub variance2: f64,
    /// Whether the pooled (equal-variance) formula was selected
    pub equal_variances: bool,
    /// Group 1 sample size
    pub n1: usize,
    /// Group 2 sample size
    pub n2: usize,
    /// Set when the group sizes differ by more than the configured threshold
    pub size_imbalance: bool,
    /// Test method/name
    pub method: String,
}

/// Result of Levene's test for variance homogeneity
#[derive(Debug, Clone)]
pub struct LeveneResult {
    /// F statistic on the absolute deviations from the group medians
    pub statistic: f64,
    /// p-value from the F distribution
    pub p_value: f64,
    /// Between-groups degrees of freedom
    pub df_between: usize,
    /// Within-groups degrees of freedom
    pub df_within: usize,
}

impl LeveneResult {
    /// Decision rule: variances are treated as homogeneous when the p-value
    /// exceeds `alpha`.
    pub fn is_homogeneous(&self, alpha: f64) -> bool {
        self.p_value > alpha
    }
}

/// Filter NaN values from a slice
fn filter_nan(data: &[f64]) -> Vec<f64> {
    data.iter().copied().filter(|x| !x.is_nan()).collect()
}
