//! JSON result document for one fit.

use mvee::{Fit, MveeCfg, Point2};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FitReport {
    pub points: usize,
    pub hull: Vec<[f64; 2]>,
    pub center: [f64; 2],
    pub rx: f64,
    pub ry: f64,
    pub rotation_rad: f64,
    pub rotation_deg: f64,
    pub area: f64,
    pub converged: bool,
    pub iterations: usize,
    pub tol: f64,
    pub max_iterations: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary: Option<Vec<[f64; 2]>>,
}

#[inline]
fn xy(p: &Point2) -> [f64; 2] {
    [p.x, p.y]
}

impl FitReport {
    pub fn new(fit: &Fit, points: usize, cfg: &MveeCfg, boundary: Option<usize>) -> Self {
        let e = &fit.ellipse;
        Self {
            points,
            hull: fit.hull.vertices().iter().map(xy).collect(),
            center: xy(&e.center),
            rx: e.rx,
            ry: e.ry,
            rotation_rad: e.rotation,
            rotation_deg: e.rotation_degrees(),
            area: e.area(),
            converged: fit.converged,
            iterations: fit.iterations,
            tol: cfg.tol,
            max_iterations: cfg.max_iterations,
            boundary: boundary.map(|n| e.boundary(n).iter().map(xy).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn square_report_fields() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
            Point2::new(5.0, 5.0),
        ];
        let cfg = MveeCfg::default();
        let fit = mvee::fit(&pts, &cfg).unwrap();
        let report = FitReport::new(&fit, pts.len(), &cfg, None);
        let v: Value = serde_json::to_value(&report).unwrap();
        assert_eq!(v["points"], 5);
        assert_eq!(v["hull"].as_array().unwrap().len(), 4);
        assert!((v["rx"].as_f64().unwrap() - 50f64.sqrt()).abs() < 1e-6);
        assert!(v.get("boundary").is_none());

        let with_boundary = FitReport::new(&fit, pts.len(), &cfg, Some(8));
        assert_eq!(with_boundary.boundary.map(|b| b.len()), Some(8));
    }
}
