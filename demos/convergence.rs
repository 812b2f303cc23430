//! Resolution study for the two integrated quantities
//!
//! Area ≈ Σᵢ Σⱼ |∂r/∂u × ∂r/∂v|(uᵢ, vⱼ)·Δu·Δv
//! Edge ≈ Σᵢ |r(uᵢ₊₁, w/2) − r(uᵢ, w/2)|
//!
//! Both converge as O(1/n²): doubling n divides the gap to the
//! reference value by about four.

use mobius_rs::strip::MobiusStrip;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let (radius, width) = (2.0, 1.0);

    // Reference values at a fine resolution
    let reference = MobiusStrip::new(radius, width, 1600)?;
    let ref_area = reference.surface_area()?;
    let ref_edge = reference.edge_length()?;

    println!("Möbius strip R = {radius}, w = {width}");
    println!("Reference (n = 1600): area = {ref_area:.6}, edge = {ref_edge:.6}");
    println!();
    println!("{:>6} {:>8} {:>12} {:>12} {:>12} {:>12}", "n", "n/5", "area", "|Δarea|", "edge", "|Δedge|");

    let mut previous: Option<(f64, f64)> = None;

    for n in [20, 50, 100, 200, 400] {
        let strip = MobiusStrip::new(radius, width, n)?;
        let area = strip.surface_area()?;
        let edge = strip.edge_length()?;

        let area_gap = (area - ref_area).abs();
        let edge_gap = (edge - ref_edge).abs();

        print!(
            "{:>6} {:>8} {:>12.6} {:>12.3e} {:>12.6} {:>12.3e}",
            n,
            strip.parameters().width_resolution(),
            area,
            area_gap,
            edge,
            edge_gap
        );

        if let Some((prev_area_gap, prev_edge_gap)) = previous {
            print!("   ratios {:.2} / {:.2}", prev_area_gap / area_gap, prev_edge_gap / edge_gap);
        }
        println!();

        previous = Some((area_gap, edge_gap));
    }

    println!();
    println!("{}", MobiusStrip::new(radius, width, 100)?.summary()?);

    Ok(())
}
