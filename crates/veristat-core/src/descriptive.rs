//! Descriptive statistics for a single sample
//!
//! Provides the validated `Sample` container and the derived moments
//! (mean, sample variance, standard deviation) used by the test modules.

use crate::errors::{StatsError, StatsResult};

/// An immutable, ordered sequence of observations, at least two values long.
///
/// The length invariant is enforced at construction; there is no mutation
/// API, so every quantity derived from a `Sample` stays consistent with its
/// contents.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    values: Vec<f64>,
}

impl Sample {
    /// Create a sample from raw observations.
    ///
    /// # Errors
    /// `StatsError::InvalidSampleSize` when fewer than 2 values are given.
    pub fn new(values: Vec<f64>) -> StatsResult<Self> {
        if values.len() < 2 {
            return Err(StatsError::InvalidSampleSize { n: values.len() });
        }
        Ok(Self { values })
    }

    /// The observations, in input order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of observations (always >= 2).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Derived moments for one sample.
///
/// Quantities are re-derived from the owned sample on every call rather
/// than cached.
#[derive(Debug, Clone)]
pub struct SampleStatistics {
    sample: Sample,
}

impl SampleStatistics {
    /// Wrap raw observations, enforcing the 2-element minimum.
    pub fn new(values: Vec<f64>) -> StatsResult<Self> {
        Ok(Self {
            sample: Sample::new(values)?,
        })
    }

    pub fn from_sample(sample: Sample) -> Self {
        Self { sample }
    }

    pub fn sample(&self) -> &Sample {
        &self.sample
    }

    /// Number of observations
    pub fn n(&self) -> usize {
        self.sample.len()
    }

    /// Arithmetic mean
    pub fn mean(&self) -> f64 {
        let values = self.sample.values();
        values.iter().sum::<f64>() / values.len() as f64
    }

    /// Sample variance (Bessel's correction, divides by n - 1)
    pub fn variance(&self) -> f64 {
        let values = self.sample.values();
        let mean = self.mean();
        values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64
    }

    /// Sample standard deviation
    pub fn standard_deviation(&self) -> f64 {
        self.variance().sqrt()
    }
}
