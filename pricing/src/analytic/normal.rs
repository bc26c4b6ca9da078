use probability::distribution::{Continuous, Distribution, Gaussian};

fn standard_normal() -> Gaussian {
    Gaussian::new(0.0, 1.0)
}

/// Cumulative distribution function of N(0, 1).
pub fn cdf(x: f64) -> f64 {
    standard_normal().distribution(x)
}

/// Probability density function of N(0, 1).
pub fn pdf(x: f64) -> f64 {
    standard_normal().density(x)
}
