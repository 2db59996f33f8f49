use ellipse_detector::prelude::*;
use std::f64::consts::TAU;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    // Demo: rasterize a few ellipses into a blank mask and run the detector
    let (w, h) = (320usize, 240usize);
    let mut mask = EdgeMask::new(w, h);
    draw_ellipse(&mut mask, (80.0, 70.0), 40.0, 25.0, 0.0);
    draw_ellipse(&mut mask, (220.0, 80.0), 45.0, 30.0, 0.6);
    draw_ellipse(&mut mask, (150.0, 180.0), 35.0, 35.0, 0.0);

    let mut params = DetectorParams::default();
    params.hough = params.hough.with_threshold(20).with_bin_size(1.0);
    let detector = EllipseDetector::new(params)?;
    let report = detector.process(&mask, Label::Unknown);

    println!(
        "segments={} ellipses={} latency_ms={:.3}",
        report.segment_count(),
        report.ellipses.len(),
        report.timings.total_ms
    );
    for e in &report.ellipses {
        println!(
            "  center=({:.1}, {:.1}) a={:.1} b={:.1} orientation={:.3} votes={}",
            e.center.x, e.center.y, e.a, e.b, e.orientation, e.votes
        );
    }
    for (name, value) in report.features.iter() {
        println!("  {name}: {value:.4}");
    }
    Ok(())
}

fn draw_ellipse(mask: &mut EdgeMask, center: (f64, f64), a: f64, b: f64, theta: f64) {
    let (s, c) = theta.sin_cos();
    for i in 0..1440 {
        let t = i as f64 * TAU / 1440.0;
        let (u, v) = (a * t.cos(), b * t.sin());
        let x = center.0 + u * c - v * s;
        let y = center.1 + u * s + v * c;
        mask.set_checked(x.round() as i64, y.round() as i64, true);
    }
}
