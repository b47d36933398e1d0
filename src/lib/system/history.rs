use system::Event;

/// Statistics about a dispatch plan.
#[derive(Clone, Copy, Debug, Default)]
pub struct History {
    /// The number of planned requests.
    pub planned: usize,
    /// The number of dispatched requests.
    pub dispatched: usize,
}

impl History {
    /// Take into account an event.
    #[inline]
    pub fn count(&mut self, _: &Event) {
        self.dispatched += 1;
    }
}
