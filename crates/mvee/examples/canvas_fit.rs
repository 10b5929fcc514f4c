//! Fit the MVEE of random canvas clouds and print the ellipse parameters.
//!
//! Usage:
//!   cargo run -p mvee --example canvas_fit -- [count] [seed]
//!
//! Prints hull size, centre, semi-axes, rotation (degrees) and convergence.

use mvee::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let count: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(200);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);

    let canvas = CanvasCfg::default();
    let pts = match sample_canvas_points(count, &canvas, seed) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("sampling failed: {e}");
            return;
        }
    };
    match fit(&pts, &MveeCfg::default()) {
        Ok(f) => {
            let e = f.ellipse;
            println!(
                "points={count} hull={} center=({:.2}, {:.2}) rx={:.2} ry={:.2} rot={:.2}° converged={} iters={}",
                f.hull.len(),
                e.center.x,
                e.center.y,
                e.rx,
                e.ry,
                e.rotation_degrees(),
                f.converged,
                f.iterations
            );
        }
        Err(e) => eprintln!("no ellipse: {e}"),
    }
}
