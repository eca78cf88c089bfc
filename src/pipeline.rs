use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::DashboardConfig;
use crate::dashboard::{self, ProfileCard};
use crate::export;
use crate::generator::MatchRecord;
use crate::summary::CareerSummary;

pub struct RunReport {
    pub player: String,
    pub records: usize,
    pub csv_path: PathBuf,
    pub html_path: PathBuf,
    pub xlsx_path: Option<PathBuf>,
    pub summary: CareerSummary,
}

/// Writes every artifact for an already generated series: the csv export,
/// the optional workbook, then the dashboard. Progress lines go through
/// `on_progress`.
pub fn write_outputs(
    records: &[MatchRecord],
    cfg: &DashboardConfig,
    mut on_progress: impl FnMut(&str),
) -> Result<RunReport> {
    export::write_csv(&cfg.csv_path, records)?;
    on_progress(&format!(
        "Player data saved to {}",
        display_path(&cfg.csv_path).display()
    ));

    let summary = CareerSummary::from_records(records);

    if let Some(xlsx_path) = &cfg.xlsx_path {
        export::write_xlsx(xlsx_path, records, &summary)?;
        on_progress(&format!(
            "Workbook saved to {}",
            display_path(xlsx_path).display()
        ));
    }

    on_progress("Creating interactive dashboard...");
    let player = records
        .first()
        .map(|r| r.player_name().to_string())
        .unwrap_or_else(|| cfg.default_player.clone());
    let card = match records.first() {
        Some(record) => ProfileCard::from_profile(&record.profile),
        None => ProfileCard {
            name: player.clone(),
            playing_role: String::new(),
            nationality: String::new(),
            batting_style: String::new(),
            bowling_style: String::new(),
            biography: String::new(),
            image_url: None,
        },
    };
    let html = dashboard::render_dashboard(&summary, &card);
    dashboard::write_dashboard(&cfg.html_path, &html)?;
    on_progress(&format!(
        "Dashboard saved to {}",
        display_path(&cfg.html_path).display()
    ));

    Ok(RunReport {
        player,
        records: records.len(),
        csv_path: cfg.csv_path.clone(),
        html_path: cfg.html_path.clone(),
        xlsx_path: cfg.xlsx_path.clone(),
        summary,
    })
}

/// Absolute form of `path` for messages; falls back to the path as given.
pub fn display_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
