//! Planar walkthrough — exercises every entity and query with fixed inputs.
//!
//! Usage:
//! ```text
//! cargo run --example walkthrough
//! RUST_LOG=planar=debug cargo run --example walkthrough   # show fallback branches
//! ```

use planar::geometry::{Circle, Line, Point, Triangle};
use planar::math::TOLERANCE;
use planar::operations::query::{
    find_foot_of_perpendicular, intersect_circles, intersect_line_circle, intersect_lines,
    verify_pythagorean_theorem,
};

fn main() -> planar::Result<()> {
    // Default: WARN for everything, INFO for planar.
    // Override with RUST_LOG env var (e.g. RUST_LOG=planar=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("walkthrough=info".parse().unwrap_or_default())
        .add_directive("planar=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 0.0);
    let c = Point::new(3.0, 4.0);
    println!("Points: {a} {b} {c}");
    println!("Distance A-B: {}", a.distance_to(b));
    println!("Distance B-C: {}", b.distance_to(c));
    println!(
        "Triangle ABC is right? {}",
        verify_pythagorean_theorem(a, b, c, TOLERANCE)
    );

    let l1 = Line::try_from_points(a, c, TOLERANCE)?;
    let l2 = Line::try_from_points(b, Point::new(0.0, 4.0), TOLERANCE)?;
    println!("Line l1: {l1}");
    println!("Line l2: {l2}");
    println!("Intersection l1 & l2: {}", intersect_lines(l1, l2, TOLERANCE));

    let q = Point::new(1.0, 2.0);
    let foot = find_foot_of_perpendicular(q, l1, TOLERANCE);
    println!("Foot of perpendicular from {q} to {l1} is {foot}");

    let c1 = Circle::try_new(Point::new(0.0, 0.0), 5.0)?;
    let c2 = Circle::try_new(Point::new(8.0, 0.0), 5.0)?;
    println!(
        "Circle-Circle intersection: {}",
        intersect_circles(c1, c2, TOLERANCE)
    );

    let axis = Line::from_points(Point::new(-6.0, 0.0), Point::new(6.0, 0.0));
    let circ = Circle::try_new(Point::new(0.0, 1.0), 2.0)?;
    println!(
        "Line-Circle intersection: {}",
        intersect_line_circle(axis, circ, TOLERANCE)
    );

    let tri = Triangle::try_new(a, b, c, TOLERANCE)?;
    println!("Triangle sides: {:?}", tri.side_lengths());
    println!("Perimeter: {}", tri.perimeter());
    println!("Area: {}", tri.area());
    println!("Type: {}", tri.triangle_type(TOLERANCE));

    println!();
    println!("Transformations:");
    let p = Point::new(1.0, 1.0);
    println!("P original: {p}");
    println!("P translated by (2,3): {}", p.translate(2.0, 3.0));
    println!("P scaled by 2 about origin: {}", p.scale_uniform(2.0, Point::ORIGIN));
    println!("P rotated 90 deg about origin: {}", p.rotate(90.0, Point::ORIGIN));
    println!(
        "Triangle rotated 90 deg: {}",
        tri.rotate(90.0, Point::ORIGIN)
    );

    tracing::info!(eps = TOLERANCE, "walkthrough finished");
    Ok(())
}
