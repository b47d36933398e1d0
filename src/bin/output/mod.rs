use {Event, Result};

mod database;
mod null;

use self::database::Database;
use self::null::Null;

pub trait Output {
    fn next(&mut self, &Event) -> Result<()>;
}

pub fn new(output: Option<String>) -> Result<Box<Output>> {
    Ok(match output {
        Some(output) => Box::new(try!(Database::new(output))),
        _ => Box::new(Null),
    })
}
