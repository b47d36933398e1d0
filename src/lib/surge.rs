//! Tool for generating synthetic request workloads.

#[cfg(test)]
extern crate assert;

#[macro_use]
extern crate log;

extern crate configuration;
extern crate probability;
extern crate sql;
extern crate sqlite;

#[macro_use]
mod macros;

mod result;

pub mod system;
pub mod traffic;
pub mod workload;

pub use result::{Error, Result};

/// An outcome.
pub type Outcome<T> = Result<Option<T>>;

/// A configuration.
pub type Config = configuration::Tree;

/// A source of randomness.
pub type Source = probability::source::Default;
