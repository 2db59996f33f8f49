use ellipse_detector::config::detect::{self, DetectToolConfig};
use ellipse_detector::image::io::{load_edge_mask, save_overlay, write_json_file};
use ellipse_detector::{DetectionReport, EllipseDetector};
use std::env;
use std::path::{Path, PathBuf};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = parse_config_path()?;
    let config = detect::load_config(&config_path)?;

    let mask = load_edge_mask(&config.input, config.edge_threshold)?;
    let detector = EllipseDetector::new(config.detector_params())?;
    let report = detector.process(&mask, config.label);

    print_text_summary(&config, &report);

    write_json_file(&config.output.report_json, &report)?;
    println!("JSON report written to {}", config.output.report_json.display());

    if let Some(path) = &config.output.overlay_image {
        save_overlay(&mask, &report.ellipses, config.output.boundary_samples, path)?;
        println!("Overlay written to {}", path.display());
    }

    Ok(())
}

fn print_text_summary(config: &DetectToolConfig, report: &DetectionReport) {
    println!(
        "input={} size={}x{} edge_pixels={}",
        config.input.display(),
        report.input.width,
        report.input.height,
        report.input.edge_pixels
    );
    println!(
        "segments={} ellipses={} failed={} latency_ms={:.3}",
        report.segment_count(),
        report.ellipses.len(),
        report.failed_segments().count(),
        report.timings.total_ms
    );
    for stage in &report.timings.stages {
        println!("  {:<14} {:>9.3} ms", stage.label, stage.elapsed_ms);
    }
    println!("label={}", report.features.label());
    for (name, value) in report.features.iter() {
        println!("  {name:<18} {value:.6}");
    }
}

fn parse_config_path() -> Result<PathBuf, String> {
    let mut args = env::args();
    let program = args
        .next()
        .unwrap_or_else(|| "detect_ellipses".to_string());
    match (args.next(), args.next()) {
        (Some(path), None) if path != "-h" && path != "--help" => {
            Ok(Path::new(&path).to_path_buf())
        }
        _ => Err(usage(&program)),
    }
}

fn usage(program: &str) -> String {
    format!("Usage: {program} <config.json>")
}
