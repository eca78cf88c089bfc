use anyhow::Result;

use cricket_dashboard::config::DashboardConfig;
use cricket_dashboard::{generator, init_tracing, pipeline};

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    init_tracing();

    let cfg = DashboardConfig::from_env();
    let player = std::env::args()
        .nth(1)
        .unwrap_or_else(|| cfg.default_player.clone());

    println!("Generating mock data...");
    let records = generator::generate(&player);

    let report = pipeline::write_outputs(&records, &cfg, |line| println!("{line}"))?;
    tracing::info!(
        player = %report.player,
        records = report.records,
        total_runs = report.summary.total_runs,
        years = report.summary.yearly.len(),
        csv = %report.csv_path.display(),
        html = %report.html_path.display(),
        xlsx = report.xlsx_path.as_ref().map(|p| p.display().to_string()).unwrap_or_default(),
        "dashboard run complete"
    );

    Ok(())
}
