use log::{self, Level, Log, Metadata, Record};
use term;

pub struct Terminal;

impl Log for Terminal {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    #[allow(unused_must_use)]
    fn log(&self, record: &Record) {
        use std::io::Write;

        if self.enabled(record.metadata()) {
            if let Some(mut output) = term::stdout() {
                if record.metadata().level() < Level::Info {
                    output.fg(term::color::RED);
                } else {
                    output.fg(term::color::GREEN);
                }
                write!(output, "{:>12}", record.target());
                output.reset();
                writeln!(output, " {}", record.args());
            }
        }
    }

    fn flush(&self) {
    }
}
