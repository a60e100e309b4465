use crate::domain::model::Point;
use crate::domain::ports::PointSource;
use crate::utils::error::Result;
use std::io::Read;

/// Reads `x,y` rows. A leading `x,y` header row is detected and skipped.
pub struct CsvPointSource<R: Read> {
    reader: R,
}

impl<R: Read> CsvPointSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read> PointSource for CsvPointSource<R> {
    fn read_points(&mut self) -> Result<Vec<Point>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(&mut self.reader);

        let mut points = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            if index == 0 && is_header(&record) {
                tracing::debug!("Skipping CSV header row");
                continue;
            }
            let point: Point = record.deserialize(None)?;
            points.push(point);
        }

        tracing::debug!("Parsed {} points from CSV input", points.len());
        Ok(points)
    }
}

fn is_header(record: &csv::StringRecord) -> bool {
    matches!(
        (record.get(0), record.get(1)),
        (Some(x), Some(y)) if x.eq_ignore_ascii_case("x") && y.eq_ignore_ascii_case("y")
    )
}
