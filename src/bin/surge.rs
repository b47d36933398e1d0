#[macro_use]
extern crate log;

extern crate arguments;
extern crate configuration;
extern crate probability;
extern crate sql;
extern crate sqlite;
extern crate surge;
extern crate term;

use configuration::format::TOML;
use log::Level;
use surge::{traffic, workload};

pub use surge::{Config, Error, Result};
pub use surge::system::Event;

pub type System = surge::system::System<traffic::Synthetic, workload::Weighted>;

const USAGE: &'static str = "
Usage: surge [options]

Options:
    --config <path>          Configuration file (required).
    --output <path>          Output database for the dispatch plan.

    --verbose                Display progress information.
    --help                   Display this message.
";

macro_rules! raise(
    ($message:expr) => (return Err(::surge::Error::new($message)));
);

macro_rules! ok(
    ($result:expr) => (match $result {
        Ok(result) => result,
        Err(error) => raise!(error),
    });
);

macro_rules! some(
    ($option:expr, $($arg:tt)*) => (match $option {
        Some(value) => value,
        _ => raise!($($arg)*),
    });
);

mod logger;
mod output;

use output::Output;

fn main() {
    start().unwrap_or_else(|error| fail(error));
}

fn start() -> Result<()> {
    let arguments = ok!(arguments::parse(std::env::args()));

    if arguments.get::<bool>("help").unwrap_or(false) {
        help();
    }

    if arguments.get::<bool>("verbose").unwrap_or(false) {
        logger::setup(Level::Info);
    } else {
        logger::setup(Level::Warn);
    }

    let config = ok!(TOML::open(some!(arguments.get::<String>("config"),
                                      "a configuration file is required")));

    let mut system = try!(construct_system(&config));
    let mut output = try!(output::new(arguments.get::<String>("output")));

    let start = std::time::Instant::now();
    while let Some(event) = try!(system.next()) {
        info!(target: "Surge", "{} | {:4} left", event,
              system.history().planned - system.history().dispatched);
        try!(output.next(&event));
    }
    let elapsed = start.elapsed();

    info!(target: "Surge", "Planned {} requests in {:.2} seconds.",
          system.history().dispatched,
          elapsed.as_secs() as f64 + elapsed.subsec_nanos() as f64 * 1e-9);

    Ok(())
}

fn construct_system(config: &Config) -> Result<System> {
    let source = {
        let seed = match config.get::<i64>("seed") {
            Some(&seed) if seed > 0 => seed as u64,
            _ => ok!(std::time::SystemTime::now()
                         .duration_since(std::time::UNIX_EPOCH)).as_secs(),
        };
        probability::source::default(seed)
    };

    macro_rules! branch(
        ($name:expr) => (config.branch($name).unwrap_or_else(|| Config::new()));
    );

    let traffic = try!(traffic::Synthetic::new(&branch!("traffic"), &source));
    let workload = try!(workload::Weighted::new(&branch!("workload")));

    System::new(traffic, workload)
}

fn help() -> ! {
    println!("{}", USAGE.trim());
    std::process::exit(0);
}

#[allow(unused_must_use)]
fn fail(error: Error) -> ! {
    use std::io::Write;
    if let Some(mut output) = term::stderr() {
        output.fg(term::color::RED);
        output.write_all(format!("Error: {}.\n", error).as_bytes());
    }
    std::process::exit(1);
}
