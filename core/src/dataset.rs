use crate::movie::MovieRecord;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Raw CSV row. Column names are the dataset's external contract.
#[derive(Debug, Deserialize)]
struct CsvRow {
    movies_name: String,
    #[serde(default)]
    genre: Option<String>,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    year: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    rating_10: Option<f64>,
}

impl From<CsvRow> for MovieRecord {
    fn from(row: CsvRow) -> Self {
        MovieRecord::new(row.movies_name, row.genre, row.language, row.year, row.rating_10)
    }
}

/// Read movie records from any CSV source with a header row.
pub fn read_movies<R: Read>(reader: R) -> Result<Vec<MovieRecord>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).flexible(true).from_reader(reader);
    let mut movies = Vec::new();
    for (line, row) in rdr.deserialize::<CsvRow>().enumerate() {
        let row = row.with_context(|| format!("malformed record at data row {}", line + 1))?;
        movies.push(MovieRecord::from(row));
    }
    Ok(movies)
}

pub fn load_movies<P: AsRef<Path>>(path: P) -> Result<Vec<MovieRecord>> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("opening dataset {}", path.display()))?;
    let movies = read_movies(f).with_context(|| format!("reading dataset {}", path.display()))?;
    tracing::info!(path = %path.display(), num_movies = movies.len(), "loaded dataset");
    Ok(movies)
}
