//! 2D point type shared by the pointer stream and the follower.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Position on the page surface, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
}

impl Point {
    /// Origin of the surface.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Creates a new point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to another point
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Moves `factor` of the way toward `target`.
    #[must_use]
    pub fn approach(self, target: Self, factor: f64) -> Self {
        Self::new(
            self.x + (target.x - self.x) * factor,
            self.y + (target.y - self.y) * factor,
        )
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// Error returned when a point literal is not `X,Y`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsePointError(String);

impl fmt::Display for ParsePointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected `X,Y`, got `{}`", self.0)
    }
}

impl std::error::Error for ParsePointError {}

impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePointError(s.to_string());
        let (x, y) = s.split_once(',').ok_or_else(err)?;
        let x: f64 = x.trim().parse().map_err(|_| err())?;
        let y: f64 = y.trim().parse().map_err(|_| err())?;
        if x.is_finite() && y.is_finite() {
            Ok(Self::new(x, y))
        } else {
            Err(err())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approach_covers_fraction() {
        let p = Point::ORIGIN.approach(Point::new(100.0, -40.0), 0.25);
        assert_eq!(p, Point::new(25.0, -10.0));
    }

    #[test]
    fn test_distance() {
        assert!((Point::new(3.0, 4.0).distance(Point::ORIGIN) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_parse() {
        assert_eq!("12.5, -3".parse::<Point>(), Ok(Point::new(12.5, -3.0)));
        assert!("12.5".parse::<Point>().is_err());
        assert!("a,b".parse::<Point>().is_err());
        assert!("inf,0".parse::<Point>().is_err());
    }
}
