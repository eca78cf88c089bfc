use std::collections::BTreeMap;

use serde::Serialize;

use crate::generator::{MatchRecord, rate};

/// The columns the career summary needs from a per-match row.
pub trait StatLine {
    fn year(&self) -> i32;
    fn runs(&self) -> u32;
    fn balls_faced(&self) -> u32;
    fn wickets(&self) -> u32;
}

impl StatLine for MatchRecord {
    fn year(&self) -> i32 {
        self.year
    }
    fn runs(&self) -> u32 {
        self.batting.runs
    }
    fn balls_faced(&self) -> u32 {
        self.batting.balls_faced
    }
    fn wickets(&self) -> u32 {
        self.bowling.wickets
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyPerformance {
    pub year: i32,
    pub total_runs: u64,
    pub total_wickets: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerSummary {
    pub total_runs: u64,
    pub total_wickets: u64,
    pub matches_played: usize,
    pub highest_score: u32,
    pub batting_average: f64,
    pub strike_rate: f64,
    pub half_centuries: usize,
    pub centuries: usize,
    pub yearly: Vec<YearlyPerformance>,
}

impl CareerSummary {
    pub fn from_records(records: &[MatchRecord]) -> Self {
        Self::from_lines(records)
    }

    pub fn from_lines<T: StatLine>(lines: &[T]) -> Self {
        let mut total_runs = 0u64;
        let mut total_wickets = 0u64;
        let mut total_balls = 0u64;
        let mut innings = 0usize;
        let mut highest_score = 0u32;
        let mut half_centuries = 0usize;
        let mut centuries = 0usize;
        let mut by_year: BTreeMap<i32, (u64, u64)> = BTreeMap::new();

        for line in lines {
            let runs = line.runs();
            total_runs += runs as u64;
            total_wickets += line.wickets() as u64;
            total_balls += line.balls_faced() as u64;
            if line.balls_faced() > 0 {
                innings += 1;
            }
            highest_score = highest_score.max(runs);
            if runs >= 100 {
                centuries += 1;
            } else if runs >= 50 {
                half_centuries += 1;
            }

            let entry = by_year.entry(line.year()).or_insert((0, 0));
            entry.0 += runs as u64;
            entry.1 += line.wickets() as u64;
        }

        let yearly = by_year
            .into_iter()
            .map(|(year, (total_runs, total_wickets))| YearlyPerformance {
                year,
                total_runs,
                total_wickets,
            })
            .collect();

        Self {
            total_runs,
            total_wickets,
            matches_played: lines.len(),
            highest_score,
            batting_average: rate(total_runs as f64, innings as f64),
            strike_rate: rate(total_runs as f64 * 100.0, total_balls as f64),
            half_centuries,
            centuries,
            yearly,
        }
    }
}
