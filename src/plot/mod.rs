/// Plot construction: scaling, axes, labels, points, and the scatter plot
/// that sequences them into a [`Scene`](crate::scene::Scene).
///
/// ```text
///   Catalog ──(EntityKind)──► DataSet
///                               │
///        ┌──────────────────────┼───────────────────┐
///        ▼                      ▼                   ▼
///   axis::draw_axis     points::plot_points   labels::place_label
///        │                      │                   │
///        └──────── scale::scale (log, 0..100) ──────┘
/// ```

pub mod axis;
pub mod error;
pub mod labels;
pub mod points;
pub mod scale;
pub mod scatter;

use std::fmt;

use glam::Vec3;

pub use error::PlotError;
pub use scatter::{scatter_plot, PlotReport};

/// Raw values above this are drawn on a log scale; values at or below it are
/// drawn as-is. Matches [`scale::AXIS_SPAN`] so small magnitudes already fit
/// the axis without rescaling.
pub const LOG_SCALE_THRESHOLD: f64 = 100.0;

// ---------------------------------------------------------------------------
// Axis
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// AxisSelection
// ---------------------------------------------------------------------------

/// One to three attribute names; the n-th name goes on the n-th axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisSelection(Vec<String>);

impl AxisSelection {
    pub fn new<I, S>(names: I) -> Result<Self, PlotError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() || names.len() > 3 {
            return Err(PlotError::AxisCount(names.len()));
        }
        Ok(AxisSelection(names))
    }

    /// `(axis, attribute)` pairs in axis order.
    pub fn iter(&self) -> impl Iterator<Item = (Axis, &str)> {
        Axis::ALL.into_iter().zip(self.0.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_size_is_checked() {
        assert_eq!(
            AxisSelection::new(Vec::<String>::new()),
            Err(PlotError::AxisCount(0))
        );
        assert_eq!(
            AxisSelection::new(["a", "b", "c", "d"]),
            Err(PlotError::AxisCount(4))
        );
        let sel = AxisSelection::new(["age", "movies"]).unwrap();
        let pairs: Vec<_> = sel.iter().collect();
        assert_eq!(pairs, vec![(Axis::X, "age"), (Axis::Y, "movies")]);
    }
}
