use std::sync::Arc;

use chrono::{Datelike, Duration as ChronoDuration, Local, NaiveDate};
use rand::Rng;
use rand::distributions::WeightedIndex;
use rand::seq::SliceRandom;
use rand_distr::{Distribution, Normal};

use crate::profile::{FORMAT_TEST, SubjectProfile};

pub const SERIES_LEN: usize = 100;

pub const OPPOSITION_TEAMS: [&str; 8] = [
    "Australia",
    "England",
    "South Africa",
    "New Zealand",
    "Pakistan",
    "Sri Lanka",
    "West Indies",
    "Bangladesh",
];

const BAT_PROBABILITY: f64 = 0.9;
const BOWL_PROBABILITY: f64 = 0.3;
const WICKET_WEIGHTS: [f64; 3] = [0.8, 0.15, 0.05];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Venue {
    Home,
    Away,
}

impl Venue {
    pub fn as_str(self) -> &'static str {
        match self {
            Venue::Home => "Home",
            Venue::Away => "Away",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Won,
    Lost,
}

impl MatchResult {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchResult::Won => "Won",
            MatchResult::Lost => "Lost",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BattingLine {
    pub runs: u32,
    pub balls_faced: u32,
    pub strike_rate: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BowlingLine {
    pub overs: f64,
    pub runs_conceded: u32,
    pub wickets: u32,
    pub economy: f64,
    pub strike_rate: f64,
}

/// One synthesized match. The subject profile is shared by every record of a
/// series.
#[derive(Debug, Clone)]
pub struct MatchRecord {
    pub date: NaiveDate,
    pub year: i32,
    pub format: String,
    pub opposition: String,
    pub venue: Venue,
    pub batting: BattingLine,
    pub bowling: BowlingLine,
    pub result: MatchResult,
    pub profile: Arc<SubjectProfile>,
}

impl MatchRecord {
    pub fn player_name(&self) -> &str {
        &self.profile.name
    }
}

/// Generates a mock career for `subject_name` ending today, using the thread
/// local random source.
pub fn generate(subject_name: &str) -> Vec<MatchRecord> {
    let today = Local::now().date_naive();
    generate_with(subject_name, today, &mut rand::thread_rng())
}

pub fn generate_with<R: Rng + ?Sized>(
    subject_name: &str,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<MatchRecord> {
    let profile = Arc::new(SubjectProfile::lookup(subject_name, today));
    let runs_dist = Normal::new(profile.runs.mean, profile.runs.std_dev).ok();
    let wickets_dist = WeightedIndex::new(WICKET_WEIGHTS).ok();

    let records = series_dates(profile.career_start, profile.career_end, SERIES_LEN)
        .into_iter()
        .map(|date| {
            let format = profile
                .formats
                .choose(rng)
                .cloned()
                .unwrap_or_else(|| FORMAT_TEST.to_string());
            let opposition = OPPOSITION_TEAMS
                .choose(rng)
                .copied()
                .unwrap_or(OPPOSITION_TEAMS[0])
                .to_string();
            let venue = if rng.gen_bool(0.5) {
                Venue::Home
            } else {
                Venue::Away
            };
            let is_test = format == FORMAT_TEST;

            let batting = if rng.gen_bool(BAT_PROBABILITY) {
                sample_batting(&profile, runs_dist.as_ref(), is_test, rng)
            } else {
                BattingLine::default()
            };

            let bowling = if rng.gen_bool(BOWL_PROBABILITY) {
                sample_bowling(wickets_dist.as_ref(), is_test, rng)
            } else {
                BowlingLine::default()
            };

            let result = if rng.gen_bool(0.5) {
                MatchResult::Won
            } else {
                MatchResult::Lost
            };

            MatchRecord {
                date,
                year: date.year(),
                format,
                opposition,
                venue,
                batting,
                bowling,
                result,
                profile: Arc::clone(&profile),
            }
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        player = %profile.name,
        records = records.len(),
        start = %profile.career_start,
        end = %profile.career_end,
        "generated mock series"
    );
    records
}

fn sample_batting<R: Rng + ?Sized>(
    profile: &SubjectProfile,
    runs_dist: Option<&Normal<f64>>,
    is_test: bool,
    rng: &mut R,
) -> BattingLine {
    let balls_faced: u32 = if is_test {
        rng.gen_range(20..150)
    } else {
        rng.gen_range(5..60)
    };

    let draw = runs_dist
        .map(|dist| dist.sample(rng))
        .unwrap_or(profile.runs.mean);
    let mut runs = draw.max(0.0) as u32;
    if let Some(boost) = profile.runs.fifty_boost
        && runs > 50
        && rng.gen_bool(boost.clamp(0.0, 1.0))
    {
        runs = rng.gen_range(50..85);
    }

    BattingLine {
        runs,
        balls_faced,
        strike_rate: rate(runs as f64 * 100.0, balls_faced as f64),
    }
}

fn sample_bowling<R: Rng + ?Sized>(
    wickets_dist: Option<&WeightedIndex<f64>>,
    is_test: bool,
    rng: &mut R,
) -> BowlingLine {
    let raw_overs = if is_test {
        rng.gen_range(5.0..15.0)
    } else {
        rng.gen_range(1.0..4.0)
    };
    let overs = (raw_overs * 10.0_f64).round() / 10.0;

    let low = (overs * 4.0) as u32;
    let high = (overs * 10.0) as u32;
    let runs_conceded = if high > low {
        rng.gen_range(low..high)
    } else {
        low
    };

    let wickets = wickets_dist.map(|dist| dist.sample(rng) as u32).unwrap_or(0);

    BowlingLine {
        overs,
        runs_conceded,
        wickets,
        economy: rate(runs_conceded as f64, overs),
        strike_rate: rate(overs * 6.0, wickets as f64),
    }
}

/// Division that yields 0 for a zero denominator.
pub fn rate(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// `count` dates evenly spaced from `start` to `end` inclusive. Offsets are
/// computed in seconds and truncated to the calendar day, so short spans
/// repeat dates.
pub fn series_dates(start: NaiveDate, end: NaiveDate, count: usize) -> Vec<NaiveDate> {
    let end = end.max(start);
    if count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![start];
    }

    let span_secs = (end - start).num_seconds();
    let steps = (count - 1) as i64;
    (0..count as i64)
        .map(|idx| {
            let offset = span_secs * idx / steps;
            start + ChronoDuration::seconds(offset)
        })
        .collect()
}
