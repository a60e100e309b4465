pub mod builder;
pub mod engine;
pub mod verify;

pub use crate::domain::model::{Point, SkylineReport, SkylineStrategy};
pub use crate::domain::ports::{ConfigProvider, PointSource, SkylineSink};
pub use crate::utils::error::Result;
