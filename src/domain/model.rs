use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable point with integer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// `self` dominates `other` when it is no worse on both axes and
    /// strictly better on at least one. Equal points never dominate each other.
    #[inline]
    pub fn dominates(&self, other: &Point) -> bool {
        (self.x < other.x && self.y <= other.y) || (self.x <= other.x && self.y < other.y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

// 與原本的主控台輸出格式一致：x 與 y 之間三個空格
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}   {}", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkylineStrategy {
    #[default]
    Recursive,
    Iterative,
}

impl SkylineStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkylineStrategy::Recursive => "recursive",
            SkylineStrategy::Iterative => "iterative",
        }
    }
}

impl std::str::FromStr for SkylineStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "recursive" => Ok(SkylineStrategy::Recursive),
            "iterative" => Ok(SkylineStrategy::Iterative),
            other => Err(format!("unknown strategy '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Point count followed by that many whitespace separated integer pairs.
    #[default]
    Text,
    Csv,
}

impl InputFormat {
    /// `.csv` files are read as CSV, everything else as count-prefixed text.
    pub fn infer(path: &str) -> Self {
        match std::path::Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
        {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => InputFormat::Csv,
            _ => InputFormat::Text,
        }
    }
}

impl std::str::FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(InputFormat::Text),
            "csv" => Ok(InputFormat::Csv),
            other => Err(format!("unknown input format '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkylineReport {
    pub input_count: usize,
    pub skyline: Vec<Point>,
    pub strategy: SkylineStrategy,
    pub elapsed_ms: u64,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominates_strictly_better_on_one_axis() {
        assert!(Point::new(1, 1).dominates(&Point::new(2, 2)));
        assert!(Point::new(1, 2).dominates(&Point::new(2, 2)));
        assert!(Point::new(2, 1).dominates(&Point::new(2, 2)));
        assert!(!Point::new(2, 2).dominates(&Point::new(1, 1)));
    }

    #[test]
    fn test_dominates_is_irreflexive() {
        let p = Point::new(-4, 7);
        assert!(!p.dominates(&p));
        assert!(!p.dominates(&Point::new(-4, 7)));
    }

    #[test]
    fn test_incomparable_points() {
        let a = Point::new(1, 5);
        let b = Point::new(5, 1);
        assert!(!a.dominates(&b));
        assert!(!b.dominates(&a));
    }

    #[test]
    fn test_display_uses_three_spaces() {
        assert_eq!(Point::new(3, -1).to_string(), "3   -1");
    }

    #[test]
    fn test_input_format_inference() {
        assert_eq!(InputFormat::infer("points.CSV"), InputFormat::Csv);
        assert_eq!(InputFormat::infer("points.txt"), InputFormat::Text);
        assert_eq!(InputFormat::infer("points"), InputFormat::Text);
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!(
            "Iterative".parse::<SkylineStrategy>().unwrap(),
            SkylineStrategy::Iterative
        );
        assert!("parallel".parse::<SkylineStrategy>().is_err());
    }
}
