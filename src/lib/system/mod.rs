//! Workload assembly.

use std::collections::VecDeque;

use traffic::Traffic;
use workload::Workload;
use {Outcome, Result};

mod event;
mod history;

pub use self::event::Event;
pub use self::history::History;

/// A complete system.
pub struct System<T, W> where T: Traffic, W: Workload {
    traffic: T,
    workload: W,
    assembled: bool,
    history: History,
    queue: VecDeque<Event>,
}

impl<T, W> System<T, W> where T: Traffic, W: Workload {
    /// Create a system.
    pub fn new(traffic: T, workload: W) -> Result<System<T, W>> {
        Ok(System {
            traffic: traffic,
            workload: workload,
            assembled: false,
            history: History::default(),
            queue: VecDeque::new(),
        })
    }

    /// Advance to the next dispatch.
    pub fn next(&mut self) -> Outcome<Event> {
        try!(self.assemble());
        let event = match self.queue.pop_front() {
            Some(event) => event,
            _ => return Ok(None),
        };
        self.history.count(&event);
        Ok(Some(event))
    }

    /// Return the history.
    #[inline(always)]
    pub fn history(&self) -> &History {
        &self.history
    }

    fn assemble(&mut self) -> Result<()> {
        if self.assembled {
            return Ok(());
        }
        let times = try!(self.traffic.generate());
        let requests = try!(self.workload.generate(times.len()));
        self.history.planned = times.len();
        self.queue.extend(times.into_iter()
                               .zip(requests)
                               .map(|(time, request)| Event::new(time, request)));
        self.assembled = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use traffic::Traffic;
    use workload::{Request, Workload};
    use Result;

    struct Steady;

    struct Echo;

    impl Traffic for Steady {
        fn generate(&mut self) -> Result<Vec<u64>> {
            Ok(vec![0, 250, 500, 750])
        }
    }

    impl Workload for Echo {
        fn generate(&mut self, count: usize) -> Result<Vec<Request>> {
            Ok((0..count).map(|i| Request::new("llama", &format!("{}", i))).collect())
        }
    }

    #[test]
    fn next() {
        let mut system = super::System::new(Steady, Echo).unwrap();
        let mut events = vec![];
        while let Some(event) = system.next().unwrap() {
            events.push(event);
        }
        assert_eq!(events.iter().map(|event| event.time).collect::<Vec<_>>(),
                   vec![0, 250, 500, 750]);
        assert_eq!(events[2].request.content(), "2");
        assert_eq!(system.history().planned, 4);
        assert_eq!(system.history().dispatched, 4);
    }
}
