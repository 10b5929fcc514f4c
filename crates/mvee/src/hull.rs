//! Planar convex hull (Andrew's monotone chain).
//!
//! Purpose
//! - Reduce an arbitrary point set to the CCW vertex cycle of its convex hull,
//!   which is the only part of the input the MVEE depends on.
//! - Deterministic: points are ordered lexicographically by `(x, y)` with a
//!   total order, so duplicate x-coordinates never change the output.
//!
//! Contract
//! - Purely combinatorial. Collinear inputs produce a 2-vertex "hull" without
//!   area; rejecting those is the solver's job.

use std::cmp::Ordering;

use nalgebra::Vector2;

use crate::cfg::MIN_HULL_POINTS;
use crate::error::{Degeneracy, MveeError};

pub type Point2 = Vector2<f64>;

/// Orientation of `o → a → b`: `> 0` for a left (CCW) turn, `0` if collinear.
#[inline]
pub fn cross(o: Point2, a: Point2, b: Point2) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

#[inline]
fn lex_cmp(a: &Point2, b: &Point2) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}

/// Growing chain with the monotone-chain push rule.
struct Chain {
    pts: Vec<Point2>,
}

impl Chain {
    fn with_capacity(n: usize) -> Self {
        Self {
            pts: Vec::with_capacity(n),
        }
    }

    /// Pop the tail while it makes a non-left turn towards `p`, then push `p`.
    fn push_convex(&mut self, p: Point2) {
        while let [.., a, b] = self.pts[..] {
            if cross(a, b, p) > 0.0 {
                break;
            }
            self.pts.pop();
        }
        self.pts.push(p);
    }

    /// Chain without its final point (shared with the other chain's start).
    fn into_open(mut self) -> Vec<Point2> {
        self.pts.pop();
        self.pts
    }
}

/// Convex hull vertices in counter-clockwise order, starting at the
/// lexicographically smallest point.
///
/// Invariants (for hulls with ≥ 3 vertices):
/// - Vertices are distinct and every consecutive triple turns strictly left.
/// - Every originating point lies inside or on the boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexHull {
    vertices: Vec<Point2>,
}

impl ConvexHull {
    /// Build the hull of `points`. The input slice is only read.
    ///
    /// Errors
    /// - `NonFinite` if any coordinate is NaN or infinite.
    /// - `TooFewPoints` if fewer than 3 distinct points remain.
    pub fn from_points(points: &[Point2]) -> Result<Self, MveeError> {
        if let Some(index) = points
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(Degeneracy::NonFinite { index }.into());
        }
        // `+ 0.0` folds -0.0 into +0.0 so equal points sort adjacently.
        let mut pts: Vec<Point2> = points
            .iter()
            .map(|p| Point2::new(p.x + 0.0, p.y + 0.0))
            .collect();
        pts.sort_by(lex_cmp);
        pts.dedup();
        if pts.len() < MIN_HULL_POINTS {
            return Err(Degeneracy::TooFewPoints {
                got: pts.len(),
                need: MIN_HULL_POINTS,
            }
            .into());
        }

        let mut lower = Chain::with_capacity(pts.len());
        for p in &pts {
            lower.push_convex(*p);
        }
        let mut upper = Chain::with_capacity(pts.len());
        for p in pts.iter().rev() {
            upper.push_convex(*p);
        }
        let mut vertices = lower.into_open();
        vertices.extend(upper.into_open());
        tracing::trace!(input = points.len(), hull = vertices.len(), "convex hull");
        Ok(Self { vertices })
    }

    #[inline]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Point2> {
        self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Shoelace area; non-negative for the CCW order produced here.
    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        let twice: f64 = (0..n)
            .map(|k| {
                let p = self.vertices[k];
                let q = self.vertices[(k + 1) % n];
                p.x * q.y - p.y * q.x
            })
            .sum();
        0.5 * twice
    }

    /// True if `p` is inside or within `eps` (in cross-product units) of every edge.
    pub fn contains_eps(&self, p: Point2, eps: f64) -> bool {
        let n = self.vertices.len();
        (0..n).all(|k| cross(self.vertices[k], self.vertices[(k + 1) % n], p) >= -eps)
    }

    /// Every cyclic triple turns strictly left.
    pub fn is_strictly_convex(&self) -> bool {
        let n = self.vertices.len();
        n >= 3
            && (0..n).all(|k| {
                cross(
                    self.vertices[k],
                    self.vertices[(k + 1) % n],
                    self.vertices[(k + 2) % n],
                ) > 0.0
            })
    }
}
