//! Single-pass sample statistics used by the dataset and analysis layers.

use serde::{Deserialize, Serialize};

/// Round to two decimal places, the precision used in all reports.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Summary statistics for one numeric sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

/// Statistics accumulator over a sample of f64 values.
///
/// Mean and variance come from Welford's online algorithm in a single
/// pass; percentiles are exact (linear interpolation over the sorted
/// sample) since the dataset is fully materialized in memory.
#[derive(Debug, Clone, Default)]
pub struct SampleStats {
    count: usize,
    mean: f64,
    m2: f64,
    min: f64,
    max: f64,
    values: Vec<f64>,
    sorted: bool,
}

impl SampleStats {
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            values: Vec::new(),
            sorted: true,
        }
    }

    /// Build from an iterator of values.
    pub fn collect(values: impl IntoIterator<Item = f64>) -> Self {
        let mut stats = Self::new();
        for value in values {
            stats.add(value);
        }
        stats
    }

    /// Add a value.
    pub fn add(&mut self, value: f64) {
        self.count += 1;

        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;

        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }

        self.values.push(value);
        self.sorted = false;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample variance (n-1 denominator).
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    /// Sample standard deviation.
    pub fn std(&self) -> f64 {
        self.variance().sqrt()
    }

    pub fn min(&self) -> f64 {
        if self.count == 0 { 0.0 } else { self.min }
    }

    pub fn max(&self) -> f64 {
        if self.count == 0 { 0.0 } else { self.max }
    }

    /// Exact percentile with linear interpolation between ranks.
    pub fn percentile(&mut self, p: f64) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.ensure_sorted();

        let rank = (p / 100.0).clamp(0.0, 1.0) * (self.values.len() - 1) as f64;
        let lo = rank.floor() as usize;
        let hi = rank.ceil() as usize;
        if lo == hi {
            self.values[lo]
        } else {
            let weight = rank - lo as f64;
            self.values[lo] * (1.0 - weight) + self.values[hi] * weight
        }
    }

    pub fn median(&mut self) -> f64 {
        self.percentile(50.0)
    }

    /// Rounded summary of the sample.
    pub fn summary(&mut self) -> NumericSummary {
        NumericSummary {
            mean: round2(self.mean()),
            median: round2(self.median()),
            std: round2(self.std()),
            min: round2(self.min()),
            max: round2(self.max()),
            count: self.count,
        }
    }

    fn ensure_sorted(&mut self) {
        if !self.sorted {
            self.values
                .sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            self.sorted = true;
        }
    }
}
