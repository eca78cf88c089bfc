use std::path::PathBuf;

use anyhow::{Result, bail};

use cricket_dashboard::config::DashboardConfig;
use cricket_dashboard::dashboard::{self, ProfileCard};
use cricket_dashboard::export;
use cricket_dashboard::init_tracing;
use cricket_dashboard::pipeline::display_path;
use cricket_dashboard::summary::CareerSummary;

// Rebuilds the dashboard from a previously written export, without
// generating new data. Usage: render_csv [CSV] [HTML]
fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    init_tracing();

    let cfg = DashboardConfig::from_env();
    let mut args = std::env::args().skip(1);
    let csv_path = args.next().map(PathBuf::from).unwrap_or(cfg.csv_path);
    let html_path = args.next().map(PathBuf::from).unwrap_or(cfg.html_path);

    let rows = export::read_csv(&csv_path)?;
    let Some(first) = rows.first() else {
        bail!("no rows in {}", csv_path.display());
    };

    let summary = CareerSummary::from_lines(&rows);
    let html = dashboard::render_dashboard(&summary, &ProfileCard::from_row(first));
    dashboard::write_dashboard(&html_path, &html)?;

    println!("Rows: {}", rows.len());
    println!("Player: {}", first.player_name);
    println!("Dashboard saved to {}", display_path(&html_path).display());
    Ok(())
}
