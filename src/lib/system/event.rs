use std::fmt;

use workload::Request;

/// A dispatch of a request at a point in time.
#[derive(Clone, Debug)]
pub struct Event {
    /// The time in milliseconds.
    pub time: u64,
    /// The request.
    pub request: Request,
}

impl Event {
    /// Create an event.
    #[inline]
    pub fn new(time: u64, request: Request) -> Event {
        Event { time: time, request: request }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{:>8} ms - {}", self.time, &self.request)
    }
}
