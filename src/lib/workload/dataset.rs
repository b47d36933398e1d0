use sqlite::{Connection, State};
use std::rc::Rc;

use {Config, Error, Result};

/// A named source of sample content.
#[derive(Clone, Debug)]
pub struct Dataset(Rc<Content>);

deref! { Dataset::0 => Content }

/// The content of a dataset.
#[derive(Clone, Debug)]
pub struct Content {
    /// The name.
    pub name: String,
    /// The samples, whose order is significant.
    pub samples: Vec<String>,
    /// The selection ratio relative to other datasets.
    pub ratio: u64,
    /// The number of samples.
    pub length: usize,
}

impl Dataset {
    /// Create a dataset.
    pub fn new<T: ToString>(name: T, samples: Vec<String>, ratio: u64) -> Result<Dataset> {
        if ratio < 1 {
            raise!("the selection ratio should be positive");
        }
        let length = samples.len();
        Ok(Dataset(Rc::new(Content {
            name: name.to_string(),
            samples: samples,
            ratio: ratio,
            length: length,
        })))
    }

    /// Load a dataset from a database.
    pub fn load(config: &Config) -> Result<Dataset> {
        let path = path!(config, "a dataset database");
        let name = match config.get::<String>("name") {
            Some(name) => name.to_string(),
            _ => path.file_stem().unwrap().to_str().unwrap().to_string(),
        };
        let table = match config.get::<String>("table") {
            Some(table) => table.to_string(),
            _ => "samples".to_string(),
        };
        let column = some!(config.get::<String>("column"),
                           "a sample column is required for {:?}", name);
        let ratio = match config.get::<i64>("ratio") {
            Some(&ratio) if ratio < 1 => raise!("the ratio of {:?} should be positive", name),
            Some(&ratio) => ratio as u64,
            _ => 1,
        };

        info!(target: "Workload", "Reading {:?}...", &path);
        let samples = try!(read_samples(&ok!(Connection::open(&path)), &table, column));
        if samples.is_empty() {
            raise!("found no samples in {:?}", name);
        }
        info!(target: "Workload", "Read {} samples with selection ratio {}.",
              samples.len(), ratio);

        Dataset::new(name, samples, ratio)
    }
}

/// Load the datasets described by a collection of configurations, skipping and
/// reporting those that cannot be read.
pub fn collect(configs: &[Config]) -> (Vec<Dataset>, Vec<Error>) {
    let mut datasets = vec![];
    let mut errors = vec![];
    for config in configs {
        match Dataset::load(config) {
            Ok(dataset) => datasets.push(dataset),
            Err(error) => {
                error!(target: "Workload", "Skipping a dataset ({}).", error);
                errors.push(error);
            },
        }
    }
    (datasets, errors)
}

fn read_samples(backend: &Connection, table: &str, column: &str) -> Result<Vec<String>> {
    use sql::prelude::{select_from, Statement};

    let mut statement = ok!(backend.prepare(ok!(select_from(table).column(column).compile())));
    let mut samples = vec![];
    while State::Row == ok!(statement.next()) {
        if let Ok(value) = statement.read::<String>(0) {
            if !value.is_empty() {
                samples.push(value);
            }
        }
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use sqlite::Connection;

    use workload::Dataset;

    #[test]
    fn new() {
        let dataset = Dataset::new("foo", vec!["bar".to_string()], 2).unwrap();
        assert_eq!(dataset.length, 1);
        assert!(Dataset::new("foo", vec!["bar".to_string()], 0).is_err());
    }

    #[test]
    fn read_samples() {
        let backend = open();
        let samples = super::read_samples(&backend, "samples", "content").unwrap();
        assert_eq!(samples, vec!["How high is the sky?", "How deep is the sea?"]);
    }

    #[test]
    fn read_samples_missing_column() {
        let backend = open();
        assert!(super::read_samples(&backend, "samples", "absent").is_err());
    }

    fn open() -> Connection {
        let backend = Connection::open(":memory:").unwrap();
        backend.execute("CREATE TABLE samples (content TEXT)").unwrap();
        backend.execute("INSERT INTO samples (content) VALUES \
                         ('How high is the sky?'), (NULL), ('How deep is the sea?')").unwrap();
        backend
    }
}
