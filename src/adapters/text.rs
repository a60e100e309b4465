use crate::domain::model::Point;
use crate::domain::ports::PointSource;
use crate::utils::error::{Result, SkylineError};
use std::io::Read;

/// Reads a point count followed by that many `x y` integer pairs.
///
/// Tokens are whitespace separated and may wrap across lines freely.
pub struct TextPointSource<R: Read> {
    reader: R,
}

impl<R: Read> TextPointSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

struct Tokens<'a> {
    inner: Box<dyn Iterator<Item = (usize, &'a str)> + 'a>,
    last_line: usize,
}

impl<'a> Tokens<'a> {
    fn new(content: &'a str) -> Self {
        let inner = content
            .lines()
            .enumerate()
            .flat_map(|(idx, line)| line.split_whitespace().map(move |tok| (idx + 1, tok)));
        Self {
            inner: Box::new(inner),
            last_line: 1,
        }
    }

    fn next_int(&mut self, what: &str) -> Result<Option<i64>> {
        let Some((line, token)) = self.inner.next() else {
            return Ok(None);
        };
        self.last_line = line;
        token
            .parse::<i64>()
            .map(Some)
            .map_err(|_| SkylineError::ParseError {
                line,
                message: format!("expected integer {}, found '{}'", what, token),
            })
    }
}

impl<R: Read> PointSource for TextPointSource<R> {
    fn read_points(&mut self) -> Result<Vec<Point>> {
        let mut content = String::new();
        self.reader.read_to_string(&mut content)?;

        let mut tokens = Tokens::new(&content);

        let count = tokens
            .next_int("point count")?
            .ok_or_else(|| SkylineError::ParseError {
                line: 1,
                message: "missing point count".to_string(),
            })?;
        let count = usize::try_from(count).map_err(|_| SkylineError::ParseError {
            line: tokens.last_line,
            message: format!("point count must not be negative, found {}", count),
        })?;

        let mut points = Vec::with_capacity(count.min(1 << 20));
        for index in 0..count {
            let x = tokens.next_int("x coordinate")?;
            let y = tokens.next_int("y coordinate")?;
            match (x, y) {
                (Some(x), Some(y)) => points.push(Point::new(x, y)),
                _ => {
                    return Err(SkylineError::ParseError {
                        line: tokens.last_line,
                        message: format!(
                            "expected {} points, input ends after {}",
                            count, index
                        ),
                    })
                }
            }
        }

        let trailing = tokens.inner.count();
        if trailing > 0 {
            tracing::warn!(
                "Ignoring {} token(s) after the declared {} points",
                trailing,
                count
            );
        }

        tracing::debug!("Parsed {} points from text input", points.len());
        Ok(points)
    }
}
