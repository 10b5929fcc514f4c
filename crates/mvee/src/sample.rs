//! Seeded Gaussian point clouds on a rectangular canvas.
//!
//! Model
//! - Coordinates are drawn independently from `N(w/2, (w/6)²)` and
//!   `N(h/2, (h/6)²)`, then clamped to `[0, w] × [0, h]`.
//! - Determinism: the same `(n, canvas, seed)` always yields the same points.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use crate::error::MveeError;
use crate::hull::Point2;

/// Canvas extent in drawing units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasCfg {
    pub width: f64,
    pub height: f64,
}

impl Default for CanvasCfg {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
        }
    }
}

impl CanvasCfg {
    fn validate(&self) -> Result<(), MveeError> {
        for (field, value) in [("width", self.width), ("height", self.height)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(MveeError::InvalidConfig { field, value });
            }
        }
        Ok(())
    }
}

/// Draw `n` clamped Gaussian points centred on the canvas.
pub fn sample_canvas_points(
    n: usize,
    canvas: &CanvasCfg,
    seed: u64,
) -> Result<Vec<Point2>, MveeError> {
    canvas.validate()?;
    let invalid = |field: &'static str, value: f64| MveeError::InvalidConfig { field, value };
    let nx = Normal::new(canvas.width / 2.0, canvas.width / 6.0)
        .map_err(|_| invalid("width", canvas.width))?;
    let ny = Normal::new(canvas.height / 2.0, canvas.height / 6.0)
        .map_err(|_| invalid("height", canvas.height))?;
    let mut rng = StdRng::seed_from_u64(seed);
    Ok((0..n)
        .map(|_| {
            let x: f64 = nx.sample(&mut rng);
            let y: f64 = ny.sample(&mut rng);
            Point2::new(x.clamp(0.0, canvas.width), y.clamp(0.0, canvas.height))
        })
        .collect())
}
