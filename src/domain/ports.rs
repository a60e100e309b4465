use crate::domain::model::{InputFormat, OutputFormat, Point, SkylineReport, SkylineStrategy};
use crate::utils::error::Result;

/// Where the engine gets its input points from.
pub trait PointSource {
    fn read_points(&mut self) -> Result<Vec<Point>>;
}

/// Where the engine writes the finished skyline.
pub trait SkylineSink {
    fn write_skyline(&mut self, report: &SkylineReport) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> Option<&str>;
    fn input_format(&self) -> InputFormat;
    fn output_format(&self) -> OutputFormat;
    fn output_path(&self) -> Option<&str>;
    fn strategy(&self) -> SkylineStrategy;
    fn y_floor(&self) -> Option<i64>;
    fn verify(&self) -> bool;
    fn monitoring_enabled(&self) -> bool;
}
