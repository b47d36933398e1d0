use probability::distribution::{Exponential, Sample, Uniform};

use traffic::{Pattern, Traffic};
use {Config, Result, Source};

/// A model with synthetically distributed arrivals.
pub struct Synthetic {
    rate: u64,
    pattern: Pattern,
    duration: u64,
    source: Source,
}

impl Synthetic {
    /// Create a model.
    pub fn new(config: &Config, source: &Source) -> Result<Synthetic> {
        let rate = match config.get::<i64>("rate") {
            Some(&rate) if rate < 0 => raise!("the arrival rate should be nonnegative"),
            Some(&rate) => rate as u64,
            _ => 1,
        };
        let pattern = match config.get::<String>("pattern") {
            Some(pattern) => try!(pattern.parse()),
            _ => Pattern::Uniform,
        };
        let duration = match config.get::<i64>("duration") {
            Some(&duration) if duration < 0 => raise!("the time span should be nonnegative"),
            Some(&duration) => duration as u64,
            _ => 10,
        };
        Ok(Synthetic {
            rate: rate,
            pattern: pattern,
            duration: duration,
            source: source.clone(),
        })
    }
}

impl Traffic for Synthetic {
    fn generate(&mut self) -> Result<Vec<u64>> {
        info!(target: "Traffic", "Generating {} arrivals over {} seconds...",
              self.rate * self.duration, self.duration);
        Ok(generate(self.rate, self.pattern, self.duration, &mut self.source))
    }
}

/// Generate a sorted sequence of arrival times in milliseconds.
///
/// The sequence contains `rate * duration` times, with `rate` in requests per
/// second and `duration` in seconds.
pub fn generate(rate: u64, pattern: Pattern, duration: u64, source: &mut Source) -> Vec<u64> {
    let total = rate * duration;
    let span = 1000 * duration;
    if total == 0 {
        return vec![];
    }
    let mut times = match pattern {
        Pattern::Uniform => uniform(total, span),
        Pattern::Poisson => poisson(rate, total, source),
        Pattern::Random => random(total, span, source),
    };
    times.sort();
    times
}

fn uniform(total: u64, span: u64) -> Vec<u64> {
    let interval = span as f64 / total as f64;
    // Rounding might push the last time to the end of the span; cap at span - 1.
    (0..total).map(|i| ((i as f64 * interval).round() as u64).min(span - 1)).collect()
}

fn poisson(rate: u64, total: u64, source: &mut Source) -> Vec<u64> {
    let distribution = Exponential::new(rate as f64 / 1000.0);
    let mut times = Vec::with_capacity(total as usize);
    let mut time: f64 = 0.0;
    for _ in 0..total {
        times.push(time.round() as u64);
        // The times are allowed to run past the nominal span; truncating them
        // would distort the tail of the distribution.
        time += distribution.sample(source);
    }
    times
}

fn random(total: u64, span: u64, source: &mut Source) -> Vec<u64> {
    let distribution = Uniform::new(0.0, span as f64);
    (0..total).map(|_| (distribution.sample(source) as u64).min(span - 1)).collect()
}

#[cfg(test)]
mod tests {
    use assert;
    use probability::source;

    use traffic::Pattern;

    #[test]
    fn generate_uniform() {
        let mut source = source::default(42);
        assert_eq!(super::generate(2, Pattern::Uniform, 1, &mut source), vec![0, 500]);
        assert_eq!(super::generate(1, Pattern::Uniform, 2, &mut source), vec![0, 1000]);
        assert_eq!(super::generate(2, Pattern::Uniform, 3, &mut source),
                   vec![0, 500, 1000, 1500, 2000, 2500]);
    }

    #[test]
    fn generate_empty() {
        let mut source = source::default(42);
        for &pattern in &[Pattern::Uniform, Pattern::Poisson, Pattern::Random] {
            assert!(super::generate(0, pattern, 10, &mut source).is_empty());
            assert!(super::generate(10, pattern, 0, &mut source).is_empty());
        }
    }

    #[test]
    fn generate_random() {
        let mut source = source::default(42);
        let times = super::generate(20, Pattern::Random, 5, &mut source);
        assert_eq!(times.len(), 100);
        assert!(times.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(times.iter().all(|&time| time < 5000));
    }

    #[test]
    fn generate_poisson() {
        let mut source = source::default(42);
        let times = super::generate(10, Pattern::Poisson, 500, &mut source);
        assert_eq!(times.len(), 5000);
        assert_eq!(times[0], 0);
        assert!(times.windows(2).all(|pair| pair[0] <= pair[1]));
        let mean = times.last().map(|&last| last as f64 / 4999.0).unwrap();
        assert::close(&[mean], &[100.0], 10.0);
    }

    #[test]
    fn generate_deterministic() {
        let mut one = source::default(69);
        let mut other = source::default(69);
        for &pattern in &[Pattern::Poisson, Pattern::Random] {
            assert_eq!(super::generate(10, pattern, 10, &mut one),
                       super::generate(10, pattern, 10, &mut other));
        }
    }
}
