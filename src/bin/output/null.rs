use output::Output;
use {Event, Result};

pub struct Null;

impl Output for Null {
    fn next(&mut self, _: &Event) -> Result<()> {
        Ok(())
    }
}
