// Adapters layer: concrete point readers and skyline writers.

pub mod csv_source;
pub mod text;
pub mod writer;

use crate::domain::model::{InputFormat, Point};
use crate::domain::ports::PointSource;
use crate::utils::error::{Result, SkylineError};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

pub use csv_source::CsvPointSource;
pub use text::TextPointSource;
pub use writer::{DestinationWriter, SkylineWriter};

/// Opens an input file, reporting a missing file as `FileNotFoundError`.
pub fn open_input<P: AsRef<Path>>(path: P) -> Result<BufReader<File>> {
    let path = path.as_ref();
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(SkylineError::FileNotFoundError {
            path: path.display().to_string(),
        }),
        Err(e) => Err(SkylineError::IoError(e)),
    }
}

/// Picks the reader for `format` over the file at `path`.
pub fn source_for_path(path: &str, format: InputFormat) -> Result<Box<dyn PointSource>> {
    let reader = open_input(path)?;
    tracing::debug!("Opened input '{}' as {:?}", path, format);
    Ok(match format {
        InputFormat::Text => Box::new(TextPointSource::new(reader)),
        InputFormat::Csv => Box::new(CsvPointSource::new(reader)),
    })
}

impl PointSource for Box<dyn PointSource> {
    fn read_points(&mut self) -> Result<Vec<Point>> {
        (**self).read_points()
    }
}
