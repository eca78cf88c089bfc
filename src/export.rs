use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Workbook, Worksheet};
use serde::{Deserialize, Deserializer, Serialize};

use crate::generator::MatchRecord;
use crate::summary::{CareerSummary, StatLine};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const COLUMNS: [&str; 21] = [
    "Match Date",
    "Year",
    "Format",
    "Opposition",
    "Venue",
    "Runs",
    "Balls Faced",
    "Batting Strike Rate",
    "Wickets",
    "Overs Bowled",
    "Runs Conceded",
    "Economy",
    "Bowling Strike Rate",
    "Result",
    "Player Name",
    "DOB",
    "Nationality",
    "Playing Role",
    "Batting Style",
    "Bowling Style",
    "Biography",
];

/// One flattened line of the export: match stats followed by the repeated
/// profile fields. Numeric columns read back leniently, anything unparseable
/// becomes 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    #[serde(rename = "Match Date")]
    pub match_date: String,
    #[serde(rename = "Year", deserialize_with = "lenient_i32")]
    pub year: i32,
    #[serde(rename = "Format")]
    pub format: String,
    #[serde(rename = "Opposition")]
    pub opposition: String,
    #[serde(rename = "Venue")]
    pub venue: String,
    #[serde(rename = "Runs", deserialize_with = "lenient_u32")]
    pub runs: u32,
    #[serde(rename = "Balls Faced", deserialize_with = "lenient_u32")]
    pub balls_faced: u32,
    #[serde(rename = "Batting Strike Rate", deserialize_with = "lenient_f64")]
    pub batting_strike_rate: f64,
    #[serde(rename = "Wickets", deserialize_with = "lenient_u32")]
    pub wickets: u32,
    #[serde(rename = "Overs Bowled", deserialize_with = "lenient_f64")]
    pub overs_bowled: f64,
    #[serde(rename = "Runs Conceded", deserialize_with = "lenient_u32")]
    pub runs_conceded: u32,
    #[serde(rename = "Economy", deserialize_with = "lenient_f64")]
    pub economy: f64,
    #[serde(rename = "Bowling Strike Rate", deserialize_with = "lenient_f64")]
    pub bowling_strike_rate: f64,
    #[serde(rename = "Result")]
    pub result: String,
    #[serde(rename = "Player Name")]
    pub player_name: String,
    #[serde(rename = "DOB")]
    pub dob: String,
    #[serde(rename = "Nationality")]
    pub nationality: String,
    #[serde(rename = "Playing Role")]
    pub playing_role: String,
    #[serde(rename = "Batting Style")]
    pub batting_style: String,
    #[serde(rename = "Bowling Style")]
    pub bowling_style: String,
    #[serde(rename = "Biography")]
    pub biography: String,
}

impl ExportRow {
    pub fn from_record(record: &MatchRecord) -> Self {
        let profile = &record.profile;
        Self {
            match_date: record.date.format(DATE_FORMAT).to_string(),
            year: record.year,
            format: record.format.clone(),
            opposition: record.opposition.clone(),
            venue: record.venue.as_str().to_string(),
            runs: record.batting.runs,
            balls_faced: record.batting.balls_faced,
            batting_strike_rate: finite_or_zero(record.batting.strike_rate),
            wickets: record.bowling.wickets,
            overs_bowled: finite_or_zero(record.bowling.overs),
            runs_conceded: record.bowling.runs_conceded,
            economy: finite_or_zero(record.bowling.economy),
            bowling_strike_rate: finite_or_zero(record.bowling.strike_rate),
            result: record.result.as_str().to_string(),
            player_name: profile.name.clone(),
            dob: profile.dob.format(DATE_FORMAT).to_string(),
            nationality: profile.nationality.clone(),
            playing_role: profile.playing_role.clone(),
            batting_style: profile.batting_style.clone(),
            bowling_style: profile.bowling_style.clone(),
            biography: profile.biography.clone(),
        }
    }
}

impl StatLine for ExportRow {
    fn year(&self) -> i32 {
        self.year
    }
    fn runs(&self) -> u32 {
        self.runs
    }
    fn balls_faced(&self) -> u32 {
        self.balls_faced
    }
    fn wickets(&self) -> u32 {
        self.wickets
    }
}

pub fn write_csv(path: &Path, records: &[MatchRecord]) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed creating csv at {}", path.display()))?;
    for record in records {
        writer
            .serialize(ExportRow::from_record(record))
            .with_context(|| format!("write csv row for {}", record.date))?;
    }
    writer
        .flush()
        .with_context(|| format!("failed flushing csv to {}", path.display()))?;
    tracing::info!(path = %path.display(), rows = records.len(), "csv export written");
    Ok(records.len())
}

pub fn read_csv(path: &Path) -> Result<Vec<ExportRow>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed opening csv at {}", path.display()))?;
    let mut rows = Vec::new();
    for (idx, row) in reader.deserialize::<ExportRow>().enumerate() {
        rows.push(row.with_context(|| format!("parse csv row {}", idx + 1))?);
    }
    Ok(rows)
}

pub fn write_xlsx(path: &Path, records: &[MatchRecord], summary: &CareerSummary) -> Result<()> {
    let mut workbook = Workbook::new();
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Matches")?;
        write_header(sheet, &COLUMNS)?;
        for (idx, record) in records.iter().enumerate() {
            write_match_row(sheet, idx as u32 + 1, &ExportRow::from_record(record))?;
        }
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Yearly")?;
        write_header(sheet, &["Year", "Total Runs", "Total Wickets"])?;
        for (idx, year) in summary.yearly.iter().enumerate() {
            let row = idx as u32 + 1;
            sheet.write_number(row, 0, year.year as f64)?;
            sheet.write_number(row, 1, year.total_runs as f64)?;
            sheet.write_number(row, 2, year.total_wickets as f64)?;
        }
    }

    workbook
        .save(path)
        .with_context(|| format!("failed writing workbook to {}", path.display()))?;
    tracing::info!(path = %path.display(), rows = records.len(), "xlsx export written");
    Ok(())
}

enum Cell<'a> {
    Text(&'a str),
    Number(f64),
}

fn write_header(sheet: &mut Worksheet, columns: &[&str]) -> Result<()> {
    for (col, title) in columns.iter().enumerate() {
        sheet
            .write_string(0, col as u16, *title)
            .with_context(|| format!("write header cell {col}"))?;
    }
    Ok(())
}

fn write_match_row(sheet: &mut Worksheet, row_idx: u32, row: &ExportRow) -> Result<()> {
    let cells = [
        Cell::Text(&row.match_date),
        Cell::Number(row.year as f64),
        Cell::Text(&row.format),
        Cell::Text(&row.opposition),
        Cell::Text(&row.venue),
        Cell::Number(row.runs as f64),
        Cell::Number(row.balls_faced as f64),
        Cell::Number(row.batting_strike_rate),
        Cell::Number(row.wickets as f64),
        Cell::Number(row.overs_bowled),
        Cell::Number(row.runs_conceded as f64),
        Cell::Number(row.economy),
        Cell::Number(row.bowling_strike_rate),
        Cell::Text(&row.result),
        Cell::Text(&row.player_name),
        Cell::Text(&row.dob),
        Cell::Text(&row.nationality),
        Cell::Text(&row.playing_role),
        Cell::Text(&row.batting_style),
        Cell::Text(&row.bowling_style),
        Cell::Text(&row.biography),
    ];
    for (col_idx, cell) in cells.iter().enumerate() {
        let col = col_idx as u16;
        let written = match cell {
            Cell::Text(value) => sheet.write_string(row_idx, col, *value),
            Cell::Number(value) => sheet.write_number(row_idx, col, *value),
        };
        written.with_context(|| format!("write cell ({row_idx},{col_idx})"))?;
    }
    Ok(())
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

fn coerce_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .map(finite_or_zero)
        .unwrap_or(0.0)
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Ok(coerce_number(&raw))
}

fn lenient_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Ok(coerce_number(&raw).max(0.0).min(u32::MAX as f64) as u32)
}

fn lenient_i32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Ok(coerce_number(&raw) as i32)
}
