//! Print the hull of a seeded cloud for a quick visual sanity check.
//!
//! Usage:
//!   cargo run -p quickhull2 --example interior_cloud -- [square-interior|disk|circle] [seed]
//!
//! Prints the hull vertices (leftmost first) and the enclosed area.

use quickhull2::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let family = match args.next().as_deref().unwrap_or("square-interior") {
        "square-interior" => CloudFamily::SquareWithInterior,
        "disk" => CloudFamily::Disk,
        "circle" => CloudFamily::Circle,
        other => {
            eprintln!("usage: interior_cloud [square-interior|disk|circle] [seed] (got {other})");
            return;
        }
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);
    let cfg = CloudCfg {
        family,
        count: 40,
        ..CloudCfg::default()
    };
    let points = match sample(cfg, ReplayToken::new(seed)) {
        Ok(points) => points,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    match compute_hull(&points) {
        Ok(hull) => {
            println!("{} points -> {} hull vertices", points.len(), hull.len());
            for p in &hull {
                println!("  {p}");
            }
            println!("area = {:.3}", hull.area());
        }
        Err(e) => eprintln!("{e}"),
    }
}
