//! Arrival-time generation.

use std::str::FromStr;

use {Error, Result};

mod synthetic;

pub use self::synthetic::{generate, Synthetic};

/// A model of request arrivals.
pub trait Traffic {
    /// Generate a sorted sequence of arrival times in milliseconds.
    fn generate(&mut self) -> Result<Vec<u64>>;
}

/// The distribution of arrival times.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pattern {
    /// Arrivals spaced evenly over the time span.
    Uniform,
    /// A Poisson process with exponential interarrivals.
    Poisson,
    /// Independent draws over the time span.
    Random,
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(id: &str) -> Result<Self> {
        match &*id.to_lowercase() {
            "uniform" => Ok(Pattern::Uniform),
            "poisson" => Ok(Pattern::Poisson),
            "random" => Ok(Pattern::Random),
            _ => raise!("the pattern {:?} is unknown", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use traffic::Pattern;

    #[test]
    fn pattern_from_str() {
        assert_eq!("Poisson".parse::<Pattern>().unwrap(), Pattern::Poisson);
        assert!("bursty".parse::<Pattern>().is_err());
    }
}
