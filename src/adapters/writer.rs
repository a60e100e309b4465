use crate::domain::model::{OutputFormat, SkylineReport};
use crate::domain::ports::SkylineSink;
use crate::utils::error::Result;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Renders a skyline report in one of the supported output formats.
pub struct SkylineWriter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> SkylineWriter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Sink bound to stdout or a file path. The file is only created when a
/// report arrives, so an earlier failure leaves any existing output alone.
#[derive(Debug, Clone)]
pub struct DestinationWriter {
    path: Option<PathBuf>,
    format: OutputFormat,
}

impl DestinationWriter {
    /// Writes to `path` when given, stdout otherwise.
    pub fn new(path: Option<&str>, format: OutputFormat) -> Self {
        Self {
            path: path.map(PathBuf::from),
            format,
        }
    }

    fn open(&self) -> Result<Box<dyn Write>> {
        Ok(match &self.path {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        fs::create_dir_all(parent)?;
                    }
                }
                Box::new(BufWriter::new(File::create(path)?))
            }
            None => Box::new(BufWriter::new(io::stdout().lock())),
        })
    }
}

impl SkylineSink for DestinationWriter {
    fn write_skyline(&mut self, report: &SkylineReport) -> Result<()> {
        let out = self.open()?;
        SkylineWriter::new(out, self.format).write_skyline(report)
    }
}

impl<W: Write> SkylineSink for SkylineWriter<W> {
    fn write_skyline(&mut self, report: &SkylineReport) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                for point in &report.skyline {
                    writeln!(self.out, "{}", point)?;
                }
            }
            OutputFormat::Csv => {
                let mut writer = csv::Writer::from_writer(&mut self.out);
                for point in &report.skyline {
                    writer.serialize(point)?;
                }
                writer.flush()?;
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut self.out, report)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }
}
