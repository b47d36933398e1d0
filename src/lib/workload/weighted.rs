use probability::distribution::{Sample, Uniform};
use probability::source;

use workload::{self, Dataset, Ordering, Request, Workload};
use {Config, Result, Source};

/// The default seed of the random ordering.
const SEED: u64 = 88;

/// A model that draws request content from ratio-weighted datasets.
pub struct Weighted {
    model: String,
    ordering: Ordering,
    message: String,
    seed: u64,
    datasets: Vec<Dataset>,
}

impl Weighted {
    /// Create a model.
    pub fn new(config: &Config) -> Result<Weighted> {
        let model = some!(config.get::<String>("model"), "a model name is required").to_string();
        let ordering = match config.get::<String>("ordering") {
            Some(ordering) => Ordering::from(&**ordering),
            _ => Ordering::Random,
        };
        let message = match config.get::<String>("message") {
            Some(message) => message.to_string(),
            _ => workload::DEFAULT_MESSAGE.to_string(),
        };
        let seed = match config.get::<i64>("seed") {
            Some(&seed) if seed > 0 => seed as u64,
            _ => SEED,
        };
        let datasets = match config.forest("datasets") {
            Some(ref configs) => {
                let (datasets, errors) = workload::collect(configs);
                if !errors.is_empty() {
                    warn!(target: "Workload", "Skipped {} datasets.", errors.len());
                }
                datasets
            },
            _ => vec![],
        };
        Ok(Weighted {
            model: model,
            ordering: ordering,
            message: message,
            seed: seed,
            datasets: datasets,
        })
    }
}

impl Workload for Weighted {
    fn generate(&mut self, count: usize) -> Result<Vec<Request>> {
        info!(target: "Workload", "Generating {} requests...", count);
        generate(&self.model, count, &self.datasets, self.ordering, &self.message, self.seed)
    }
}

/// Generate a sequence of requests, drawing content from ratio-weighted
/// datasets.
///
/// Each dataset is given a share of `count` proportional to its ratio, capped
/// at the number of samples it has; any shortfall is compensated with requests
/// carrying the default message so that `count` requests are produced in
/// total. The requests are arranged according to the ordering: a random
/// permutation seeded with `seed`, or a round-robin interleaving in which each
/// dataset contributes `ratio` consecutive samples per bucket.
pub fn generate(model: &str, count: usize, datasets: &[Dataset], ordering: Ordering,
                message: &str, seed: u64) -> Result<Vec<Request>> {
    if datasets.is_empty() {
        return Ok(vec![Request::new(model, message); count]);
    }

    let total_ratio = datasets.iter().fold(0, |sum, dataset| sum + dataset.ratio);
    if total_ratio == 0 {
        raise!("the total selection ratio should be positive");
    }

    let mut allocation = vec![];
    let mut left = count as i64;
    for dataset in datasets {
        let share = (count as f64 * dataset.ratio as f64 / total_ratio as f64).round() as usize;
        let share = ::std::cmp::min(share, dataset.length);
        left -= share as i64;
        for (i, sample) in dataset.samples[..share].iter().enumerate() {
            allocation.push((i / dataset.ratio as usize, sample));
        }
        info!(target: "Workload", "Selected {} samples from {:?} with {} requests left.",
              share, dataset.name, left);
    }

    match ordering {
        Ordering::Random => shuffle(&mut allocation, &mut source::default(seed)),
        Ordering::RoundRobin => allocation.sort_by_key(|&(bucket, _)| bucket),
    }

    let mut requests = allocation.iter()
                                 .map(|&(_, sample)| Request::new(model, sample))
                                 .collect::<Vec<_>>();
    for _ in 0..left {
        requests.push(Request::new(model, message));
    }

    Ok(requests)
}

fn shuffle<T>(values: &mut [T], source: &mut Source) {
    for i in (1..values.len()).rev() {
        let distribution = Uniform::new(0.0, (i + 1) as f64);
        let j = distribution.sample(source) as usize;
        values.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use workload::{Dataset, Ordering};

    #[test]
    fn generate_default() {
        let requests = super::generate("llama", 4, &[], Ordering::RoundRobin, "ping", 88).unwrap();
        assert_eq!(requests.len(), 4);
        for request in &requests {
            assert_eq!(request.model, "llama");
            assert_eq!(request.content(), "ping");
            assert!(request.stream);
        }
    }

    #[test]
    fn generate_round_robin() {
        let datasets = [dataset("a", 1, 10), dataset("b", 3, 10)];
        let requests = super::generate("llama", 8, &datasets, Ordering::RoundRobin,
                                       "ping", 88).unwrap();
        let contents = requests.iter().map(|request| request.content()).collect::<Vec<_>>();
        assert_eq!(contents, vec!["a0", "b0", "b1", "b2", "a1", "b3", "b4", "b5"]);
    }

    #[test]
    fn generate_shortfall() {
        let datasets = [dataset("a", 1, 3)];
        let requests = super::generate("llama", 5, &datasets, Ordering::RoundRobin,
                                       "ping", 88).unwrap();
        let contents = requests.iter().map(|request| request.content()).collect::<Vec<_>>();
        assert_eq!(contents, vec!["a0", "a1", "a2", "ping", "ping"]);
    }

    #[test]
    fn generate_random() {
        let datasets = [dataset("a", 1, 10), dataset("b", 3, 10)];
        let one = super::generate("llama", 8, &datasets, Ordering::Random, "ping", 88).unwrap();
        let other = super::generate("llama", 8, &datasets, Ordering::Random, "ping", 88).unwrap();
        assert_eq!(one, other);

        let mut one = one.iter().map(|request| request.content()).collect::<Vec<_>>();
        let round = super::generate("llama", 8, &datasets, Ordering::RoundRobin,
                                    "ping", 88).unwrap();
        let mut other = round.iter().map(|request| request.content()).collect::<Vec<_>>();
        one.sort();
        other.sort();
        assert_eq!(one, other);
    }

    fn dataset(name: &str, ratio: u64, count: usize) -> Dataset {
        let samples = (0..count).map(|i| format!("{}{}", name, i)).collect();
        Dataset::new(name, samples, ratio).unwrap()
    }
}
