//! Quadratic reference checks for skyline results.

use crate::domain::model::Point;
use std::collections::HashSet;

/// O(n²) skyline, x-sorted and without duplicates.
pub fn brute_force(points: &[Point]) -> Vec<Point> {
    let mut skyline: Vec<Point> = points
        .iter()
        .filter(|p| !points.iter().any(|q| q.dominates(p)))
        .copied()
        .collect();
    skyline.sort_by_key(|p| (p.x, p.y));
    skyline.dedup();
    skyline
}

/// Describes the first way `skyline` fails to be the skyline of `input`.
pub fn find_violation(input: &[Point], skyline: &[Point]) -> Option<String> {
    if let Some(pair) = skyline.windows(2).find(|w| w[0].x > w[1].x) {
        return Some(format!(
            "skyline is not x-ascending: ({}, {}) precedes ({}, {})",
            pair[0].x, pair[0].y, pair[1].x, pair[1].y
        ));
    }

    for a in skyline {
        if let Some(b) = skyline.iter().find(|b| a.dominates(b)) {
            return Some(format!(
                "({}, {}) dominates ({}, {}) inside the skyline",
                a.x, a.y, b.x, b.y
            ));
        }
    }

    let inputs: HashSet<Point> = input.iter().copied().collect();
    if let Some(stray) = skyline.iter().find(|p| !inputs.contains(*p)) {
        return Some(format!(
            "({}, {}) is not an input point",
            stray.x, stray.y
        ));
    }

    let members: HashSet<Point> = skyline.iter().copied().collect();
    for p in input {
        if !members.contains(p) && !skyline.iter().any(|k| k.dominates(p)) {
            return Some(format!(
                "({}, {}) was dropped but nothing in the skyline dominates it",
                p.x, p.y
            ));
        }
    }

    None
}

pub fn is_skyline_of(input: &[Point], skyline: &[Point]) -> bool {
    find_violation(input, skyline).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brute_force_examples() {
        let input = vec![
            Point::new(1, 4),
            Point::new(5, 5),
            Point::new(4, 1),
            Point::new(2, 3),
            Point::new(3, 2),
        ];
        assert_eq!(
            brute_force(&input),
            vec![
                Point::new(1, 4),
                Point::new(2, 3),
                Point::new(3, 2),
                Point::new(4, 1)
            ]
        );
        assert!(brute_force(&[]).is_empty());
    }

    #[test]
    fn test_detects_dominated_member() {
        let input = vec![Point::new(1, 1), Point::new(2, 2)];
        let violation = find_violation(&input, &input).unwrap();
        assert!(violation.contains("dominates"));
    }

    #[test]
    fn test_detects_missing_point() {
        let input = vec![Point::new(1, 5), Point::new(5, 1)];
        let violation = find_violation(&input, &[Point::new(1, 5)]).unwrap();
        assert!(violation.contains("(5, 1)"));
    }

    #[test]
    fn test_detects_unsorted_and_stray_points() {
        let input = vec![Point::new(1, 5), Point::new(5, 1)];
        assert!(find_violation(&input, &[Point::new(5, 1), Point::new(1, 5)]).is_some());
        assert!(find_violation(&input, &[Point::new(0, 0)]).is_some());
    }

    #[test]
    fn test_accepts_valid_skyline() {
        let input = vec![Point::new(3, 1), Point::new(3, 5), Point::new(1, 2)];
        assert!(is_skyline_of(&input, &[Point::new(1, 2), Point::new(3, 1)]));
    }
}
