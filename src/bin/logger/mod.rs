use log::{self, Level};

mod terminal;

use self::terminal::Terminal;

static LOGGER: Terminal = Terminal;

#[allow(unused_must_use)]
pub fn setup(level: Level) {
    log::set_logger(&LOGGER);
    log::set_max_level(level.to_level_filter());
}
