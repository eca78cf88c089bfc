use std::f64::consts::PI;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::export::ExportRow;
use crate::profile::{self, SubjectProfile};
use crate::summary::CareerSummary;

pub const TITLE: &str = "PROFESSIONAL CAREER OVERVIEW";

const BACKGROUND: &str = "#000000";
const TEXT: &str = "#FFFFFF";
const GRID: &str = "#333333";
const ACCENT: &str = "#E50914";
const ACCENT_LIGHT: &str = "#F5575E";
const FONT: &str = "Segoe UI, Helvetica, Arial, sans-serif";

const GRID_RGB: [u8; 3] = [0x33, 0x33, 0x33];
const ACCENT_RGB: [u8; 3] = [0xE5, 0x09, 0x14];

/// Gauge label, axis range and how the value is printed.
struct GaugeSpec {
    label: &'static str,
    min: f64,
    max: f64,
    decimals: usize,
}

const BATTING_AVG_GAUGE: GaugeSpec = GaugeSpec {
    label: "Batting Avg",
    min: 0.0,
    max: 60.0,
    decimals: 1,
};
const STRIKE_RATE_GAUGE: GaugeSpec = GaugeSpec {
    label: "Strike Rate",
    min: 50.0,
    max: 200.0,
    decimals: 1,
};
const FIFTIES_GAUGE: GaugeSpec = GaugeSpec {
    label: "50s",
    min: 0.0,
    max: 20.0,
    decimals: 0,
};

/// What the profile panel shows about the player.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileCard {
    pub name: String,
    pub playing_role: String,
    pub nationality: String,
    pub batting_style: String,
    pub bowling_style: String,
    pub biography: String,
    pub image_url: Option<String>,
}

impl ProfileCard {
    pub fn from_profile(profile: &SubjectProfile) -> Self {
        Self {
            name: profile.name.clone(),
            playing_role: profile.playing_role.clone(),
            nationality: profile.nationality.clone(),
            batting_style: profile.batting_style.clone(),
            bowling_style: profile.bowling_style.clone(),
            biography: profile.biography.clone(),
            image_url: profile.image_url.clone(),
        }
    }

    pub fn from_row(row: &ExportRow) -> Self {
        Self {
            name: row.player_name.clone(),
            playing_role: row.playing_role.clone(),
            nationality: row.nationality.clone(),
            batting_style: row.batting_style.clone(),
            bowling_style: row.bowling_style.clone(),
            biography: row.biography.clone(),
            image_url: profile::image_url_for(&row.player_name).map(str::to_string),
        }
    }
}

pub fn render_dashboard(summary: &CareerSummary, card: &ProfileCard) -> String {
    // Embedded copy of the numbers behind the charts; "</" is escaped so the
    // JSON cannot close the script element early.
    let data_json = serde_json::to_string(summary)
        .unwrap_or_else(|_| "{}".to_string())
        .replace("</", "<\\/");

    let kpis = [
        ("Total Runs", summary.total_runs.to_string()),
        ("Highest Score", summary.highest_score.to_string()),
        ("Matches Played", summary.matches_played.to_string()),
    ]
    .iter()
    .map(|(label, value)| {
        format!(
            "<div class=\"tile kpi\"><div class=\"kpi-title\">{label}</div><div class=\"kpi-value\">{value}</div></div>"
        )
    })
    .collect::<String>();

    let gauges = [
        gauge_svg(&BATTING_AVG_GAUGE, summary.batting_average),
        gauge_svg(&STRIKE_RATE_GAUGE, summary.strike_rate),
        gauge_svg(&FIFTIES_GAUGE, summary.half_centuries as f64),
    ]
    .iter()
    .map(|svg| format!("<div class=\"tile gauge\">{svg}</div>"))
    .collect::<String>();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{name} | Career Overview</title>
<style>
body {{ margin: 0; background: {BACKGROUND}; color: {TEXT}; font-family: {FONT}; }}
h1 {{ text-align: center; margin: 24px 0 16px; letter-spacing: 0.08em; }}
.grid {{ display: grid; grid-template-columns: 1fr 1fr 1fr 1fr; gap: 24px; padding: 0 40px 40px; }}
.profile {{ grid-row: span 2; text-align: center; }}
.profile img {{ width: 130px; border-radius: 50%; }}
.profile .name {{ font-size: 1.5em; font-weight: bold; margin-top: 16px; }}
.profile .role {{ font-size: 1.1em; color: {ACCENT}; }}
.profile .meta {{ color: #BBBBBB; margin-top: 12px; font-size: 0.9em; }}
.profile .bio {{ margin-top: 12px; font-size: 0.85em; line-height: 1.4; text-align: left; }}
.tile {{ text-align: center; }}
.kpi-title, .chart-title {{ font-size: 16px; }}
.kpi-value {{ font-size: 50px; color: {ACCENT}; }}
.chart {{ grid-column: span 4; }}
.chart rect.bar:hover {{ fill: {ACCENT_LIGHT}; }}
</style>
</head>
<body>
<h1>{TITLE}</h1>
<div class="grid">
{profile}
{kpis}
{gauges}
<div class="tile chart"><div class="chart-title">Yearly Performance</div>
{bars}
</div>
</div>
<script type="application/json" id="career-summary">{data_json}</script>
</body>
</html>
"#,
        name = escape_html(&card.name),
        profile = profile_html(card),
        bars = yearly_bars_svg(summary),
    )
}

pub fn write_dashboard(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html)
        .with_context(|| format!("failed writing dashboard to {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = html.len(), "dashboard written");
    Ok(())
}

fn profile_html(card: &ProfileCard) -> String {
    let image = card
        .image_url
        .as_deref()
        .map(|url| {
            format!(
                "<img src=\"{}\" alt=\"{}\"><br>",
                escape_html(url),
                escape_html(&card.name)
            )
        })
        .unwrap_or_default();
    format!(
        "<div class=\"tile profile\">{image}<div class=\"name\">{}</div><div class=\"role\">{}</div>\
<div class=\"meta\">{} &middot; {} &middot; {}</div><div class=\"bio\">{}</div></div>",
        escape_html(&card.name),
        escape_html(&card.playing_role),
        escape_html(&card.nationality),
        escape_html(&card.batting_style),
        escape_html(&card.bowling_style),
        escape_html(&card.biography),
    )
}

fn gauge_svg(spec: &GaugeSpec, value: f64) -> String {
    const CX: f64 = 100.0;
    const CY: f64 = 100.0;
    const R: f64 = 80.0;

    let span = spec.max - spec.min;
    let frac = if span > 0.0 && value.is_finite() {
        ((value - spec.min) / span).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let angle = PI - frac * PI;
    let end_x = CX + R * angle.cos();
    let end_y = CY - R * angle.sin();

    let value_arc = if frac > 0.0 {
        format!(
            "<path d=\"M {:.2} {CY:.2} A {R} {R} 0 0 1 {end_x:.2} {end_y:.2}\" fill=\"none\" stroke=\"{ACCENT}\" stroke-width=\"18\"/>",
            CX - R
        )
    } else {
        String::new()
    };
    let shown = if value.is_finite() { value } else { 0.0 };

    format!(
        "<svg class=\"gauge\" viewBox=\"0 0 200 150\" width=\"220\" height=\"165\" role=\"img\">\
<title>{label}: {shown:.prec$}</title>\
<text x=\"{CX}\" y=\"14\" text-anchor=\"middle\" fill=\"{TEXT}\" font-size=\"18\">{label}</text>\
<path d=\"M {:.2} {CY:.2} A {R} {R} 0 0 1 {:.2} {CY:.2}\" fill=\"none\" stroke=\"{GRID}\" stroke-width=\"18\"/>\
{value_arc}\
<text x=\"{CX}\" y=\"{CY}\" text-anchor=\"middle\" fill=\"{TEXT}\" font-size=\"28\">{shown:.prec$}</text>\
<text x=\"{:.2}\" y=\"125\" text-anchor=\"middle\" fill=\"{TEXT}\" font-size=\"11\">{min}</text>\
<text x=\"{:.2}\" y=\"125\" text-anchor=\"middle\" fill=\"{TEXT}\" font-size=\"11\">{max}</text>\
</svg>",
        CX - R,
        CX + R,
        CX - R,
        CX + R,
        label = spec.label,
        prec = spec.decimals,
        min = spec.min,
        max = spec.max,
    )
}

fn yearly_bars_svg(summary: &CareerSummary) -> String {
    const WIDTH: f64 = 1000.0;
    const HEIGHT: f64 = 320.0;
    const TOP: f64 = 30.0;
    const BOTTOM: f64 = 40.0;
    const LEFT: f64 = 50.0;
    const RIGHT: f64 = 20.0;

    let plot_w = WIDTH - LEFT - RIGHT;
    let plot_h = HEIGHT - TOP - BOTTOM;
    let base_y = TOP + plot_h;
    let max_runs = summary
        .yearly
        .iter()
        .map(|y| y.total_runs)
        .max()
        .unwrap_or(0)
        .max(1) as f64;

    let mut parts = Vec::new();
    for tick in 0..=4 {
        let frac = tick as f64 / 4.0;
        let y = base_y - frac * plot_h;
        parts.push(format!(
            "<line x1=\"{LEFT}\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\" stroke=\"{GRID}\"/>\
<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" fill=\"{TEXT}\" font-size=\"11\">{:.0}</text>",
            LEFT + plot_w,
            LEFT - 6.0,
            y + 4.0,
            max_runs * frac
        ));
    }

    let slots = summary.yearly.len().max(1) as f64;
    let slot_w = plot_w / slots;
    let bar_w = slot_w * 0.6;
    for (idx, year) in summary.yearly.iter().enumerate() {
        let frac = year.total_runs as f64 / max_runs;
        let bar_h = frac * plot_h;
        let x = LEFT + slot_w * idx as f64 + (slot_w - bar_w) / 2.0;
        let y = base_y - bar_h;
        let center = x + bar_w / 2.0;
        parts.push(format!(
            "<g><rect class=\"bar\" x=\"{x:.1}\" y=\"{y:.1}\" width=\"{bar_w:.1}\" height=\"{bar_h:.1}\" fill=\"{fill}\">\
<title>{year}: {runs} runs, {wickets} wickets</title></rect>\
<text x=\"{center:.1}\" y=\"{:.1}\" text-anchor=\"middle\" fill=\"{TEXT}\" font-size=\"12\">{runs}</text>\
<text x=\"{center:.1}\" y=\"{:.1}\" text-anchor=\"middle\" fill=\"{TEXT}\" font-size=\"12\">{year}</text></g>",
            y - 6.0,
            base_y + 18.0,
            fill = mix_colour(GRID_RGB, ACCENT_RGB, frac),
            year = year.year,
            runs = year.total_runs,
            wickets = year.total_wickets,
        ));
    }

    format!(
        "<svg class=\"bars\" viewBox=\"0 0 {WIDTH} {HEIGHT}\" width=\"100%\" role=\"img\">{}</svg>",
        parts.join("")
    )
}

fn mix_colour(from: [u8; 3], to: [u8; 3], t: f64) -> String {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let channel = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    format!(
        "#{:02X}{:02X}{:02X}",
        channel(from[0], to[0]),
        channel(from[1], to[1]),
        channel(from[2], to[2])
    )
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
