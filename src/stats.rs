/// Summary statistics over per-trial percolation thresholds
///
/// All functions are pure over a sample slice. The single-sample case is a
/// legitimate input: sample standard deviation is undefined there, reported
/// as NaN rather than a divide-by-zero, and the confidence interval
/// degenerates to a point at the mean.

/// Arithmetic mean. Zero for an empty slice.
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Sample standard deviation (Bessel-corrected, divides by n - 1)
///
/// NaN when fewer than two samples are given.
pub fn stddev(samples: &[f64]) -> f64 {
    if samples.len() < 2 {
        return f64::NAN;
    }
    let m = mean(samples);
    let sum_sq: f64 = samples.iter().map(|x| (x - m) * (x - m)).sum();
    (sum_sq / (samples.len() - 1) as f64).sqrt()
}

/// Low endpoint of the 95% confidence interval under a normal approximation
pub fn confidence_lo(samples: &[f64]) -> f64 {
    mean(samples) - half_interval(samples)
}

/// High endpoint of the 95% confidence interval under a normal approximation
pub fn confidence_hi(samples: &[f64]) -> f64 {
    mean(samples) + half_interval(samples)
}

fn half_interval(samples: &[f64]) -> f64 {
    // With one sample the deviation is undefined; treat the interval as a
    // single point instead of propagating NaN into the bounds
    if samples.len() < 2 {
        return 0.0;
    }
    1.96 * stddev(samples) / (samples.len() as f64).sqrt()
}
