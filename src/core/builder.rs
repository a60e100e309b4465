use crate::domain::model::{Point, SkylineStrategy};

/// Divide-and-conquer skyline construction.
///
/// Sub-skylines live as index ranges inside one backing buffer: a solved
/// range keeps its skyline compacted at the front, and a merge compacts the
/// two halves toward the front of the parent range. No sub-lists are copied.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkylineBuilder {
    strategy: SkylineStrategy,
    y_floor: Option<i64>,
}

#[derive(Debug, Clone, Copy)]
enum Task {
    Solve { start: usize, end: usize },
    Merge { start: usize, mid: usize, end: usize },
}

impl SkylineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(mut self, strategy: SkylineStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Stop the threshold scan as soon as a left-hand y equals `floor`.
    ///
    /// Only valid when no input point has `y < floor`; callers are expected
    /// to check that first (see `utils::validation::validate_y_floor`).
    pub fn with_y_floor(mut self, floor: i64) -> Self {
        self.y_floor = Some(floor);
        self
    }

    pub fn strategy(&self) -> SkylineStrategy {
        self.strategy
    }

    pub fn y_floor(&self) -> Option<i64> {
        self.y_floor
    }

    /// Stable sort by x; points sharing an x stay adjacent, lowest y first.
    pub fn sort(points: &mut [Point]) {
        points.sort_by_key(|p| (p.x, p.y));
    }

    /// Sort, drop exact duplicates, then solve.
    pub fn build(&self, mut points: Vec<Point>) -> Vec<Point> {
        let input_count = points.len();
        Self::sort(&mut points);
        points.dedup();

        tracing::debug!(
            "Building skyline: {} points ({} distinct), strategy={}",
            input_count,
            points.len(),
            self.strategy.as_str()
        );

        self.solve(points)
    }

    /// Computes the skyline of points already sorted ascending by x.
    pub fn solve(&self, mut points: Vec<Point>) -> Vec<Point> {
        let len = match self.strategy {
            SkylineStrategy::Recursive => self.solve_range(&mut points),
            SkylineStrategy::Iterative => self.solve_with_stack(&mut points),
        };
        points.truncate(len);
        points
    }

    /// Merges two skylines where every x in `left` is <= every x in `right`.
    pub fn merge(&self, mut left: Vec<Point>, right: Vec<Point>) -> Vec<Point> {
        let left_len = left.len();
        let right_len = right.len();
        left.extend(right);
        let len = self.merge_in_place(&mut left, left_len, left_len, right_len);
        left.truncate(len);
        left
    }

    fn solve_range(&self, buf: &mut [Point]) -> usize {
        if buf.len() <= 2 {
            return Self::solve_base(buf);
        }

        let mid = buf.len() / 2;
        let (left, right) = buf.split_at_mut(mid);
        let left_len = self.solve_range(left);
        let right_len = self.solve_range(right);

        self.merge_in_place(buf, left_len, mid, right_len)
    }

    fn solve_with_stack(&self, buf: &mut [Point]) -> usize {
        if buf.is_empty() {
            return 0;
        }

        let mut tasks = vec![Task::Solve {
            start: 0,
            end: buf.len(),
        }];
        let mut pending: Vec<usize> = Vec::new();

        while let Some(task) = tasks.pop() {
            match task {
                Task::Solve { start, end } if end - start <= 2 => {
                    pending.push(Self::solve_base(&mut buf[start..end]));
                }
                Task::Solve { start, end } => {
                    let mid = start + (end - start) / 2;
                    // 左半邊最後入堆疊，所以最先處理
                    tasks.push(Task::Merge { start, mid, end });
                    tasks.push(Task::Solve { start: mid, end });
                    tasks.push(Task::Solve { start, end: mid });
                }
                Task::Merge { start, mid, end } => {
                    debug_assert!(pending.len() >= 2);
                    let right_len = pending.pop().unwrap_or_default();
                    let left_len = pending.pop().unwrap_or_default();
                    let merged =
                        self.merge_in_place(&mut buf[start..end], left_len, mid - start, right_len);
                    pending.push(merged);
                }
            }
        }

        pending.pop().unwrap_or_default()
    }

    fn solve_base(buf: &mut [Point]) -> usize {
        match buf {
            [] => 0,
            [_] => 1,
            [first, second] => {
                if first.dominates(second) {
                    1
                } else if second.dominates(first) {
                    *first = *second;
                    1
                } else {
                    2
                }
            }
            _ => unreachable!("solve_base called with more than two points"),
        }
    }

    /// Left skyline at `buf[..left_len]`, right skyline at
    /// `buf[mid..mid + right_len]`. The merged skyline is written to the
    /// front of `buf` and its length returned. The write cursor never passes
    /// the read cursor.
    fn merge_in_place(
        &self,
        buf: &mut [Point],
        left_len: usize,
        mid: usize,
        right_len: usize,
    ) -> usize {
        debug_assert!(left_len <= mid && mid + right_len <= buf.len());

        if left_len == 0 {
            buf.copy_within(mid..mid + right_len, 0);
            return right_len;
        }

        // 同一個 x 只保留 y 最小的點
        let mut kept = 1;
        for read in 1..left_len {
            let candidate = buf[read];
            if buf[kept - 1].x == candidate.x {
                if candidate.y < buf[kept - 1].y {
                    buf[kept - 1] = candidate;
                }
            } else {
                buf[kept] = candidate;
                kept += 1;
            }
        }

        let threshold = self.min_y(&buf[..kept]);

        let mut len = kept;
        let mut at_boundary = true;
        for read in mid..mid + right_len {
            let candidate = buf[read];
            if candidate.y >= threshold {
                continue;
            }

            // The first survivor sits below every left y, so any left tail
            // point sharing its x is dominated by it.
            if at_boundary {
                while len > 0 && buf[len - 1].x == candidate.x {
                    len -= 1;
                }
                at_boundary = false;
            }

            buf[len] = candidate;
            len += 1;
        }

        len
    }

    fn min_y(&self, left: &[Point]) -> i64 {
        let mut min = i64::MAX;
        for p in left {
            if p.y < min {
                min = p.y;
                if self.y_floor == Some(min) {
                    break;
                }
            }
        }
        min
    }
}
