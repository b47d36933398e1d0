//! Request generation.

use Result;

mod dataset;
mod request;
mod weighted;

pub use self::dataset::{collect, Content, Dataset};
pub use self::request::{Message, Request};
pub use self::weighted::{generate, Weighted};

/// The default content of a request.
pub const DEFAULT_MESSAGE: &'static str = "Tell me a story.";

/// A model of request content.
pub trait Workload {
    /// Generate a sequence of requests of a given length.
    fn generate(&mut self, usize) -> Result<Vec<Request>>;
}

/// The arrangement of requests drawn from multiple datasets.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Ordering {
    /// A reproducible random permutation.
    Random,
    /// An interleaving of datasets by bucket.
    RoundRobin,
}

impl<'l> From<&'l str> for Ordering {
    /// Map an ordering token; anything but "random" means round-robin.
    fn from(id: &'l str) -> Self {
        match &*id.to_lowercase() {
            "random" => Ordering::Random,
            _ => Ordering::RoundRobin,
        }
    }
}

#[cfg(test)]
mod tests {
    use workload::Ordering;

    #[test]
    fn ordering_from() {
        assert_eq!(Ordering::from("random"), Ordering::Random);
        assert_eq!(Ordering::from("original"), Ordering::RoundRobin);
        assert_eq!(Ordering::from("round-robin"), Ordering::RoundRobin);
    }
}
