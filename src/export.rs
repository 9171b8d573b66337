use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Workbook, Worksheet};
use serde::Serialize;
use tracing::info;

use crate::batting::{BattingRow, batting_stats};
use crate::bowling::{BowlingRow, bowling_stats};
use crate::dataset::Dataset;
use crate::match_stats::{
    SeasonCount, SeasonWinner, TossImpact, VenueRow, matches_by_season, season_winners,
    toss_impact, venue_stats,
};
use crate::summary::DatasetSummary;
use crate::team_stats::{TeamRow, team_stats};

/// Every engine table computed once, ready to be written out.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    pub summary: DatasetSummary,
    pub batting: Vec<BattingRow>,
    pub bowling: Vec<BowlingRow>,
    pub teams: Vec<TeamRow>,
    pub venues: Vec<VenueRow>,
    pub seasons: Vec<SeasonCount>,
    pub season_winners: Vec<SeasonWinner>,
    /// Absent when there are no matches.
    pub toss_impact: Option<TossImpact>,
}

impl StatsReport {
    /// `limit` caps the batting and bowling tables.
    pub fn build(data: &Dataset, limit: Option<usize>) -> Self {
        let mut batting = batting_stats(&data.deliveries, None);
        let mut bowling = bowling_stats(&data.deliveries, None);
        if let Some(n) = limit {
            batting.truncate(n);
            bowling.truncate(n);
        }
        Self {
            summary: DatasetSummary::compute(data),
            batting,
            bowling,
            teams: team_stats(&data.matches),
            venues: venue_stats(&data.matches),
            seasons: matches_by_season(&data.matches),
            season_winners: season_winners(&data.matches),
            toss_impact: toss_impact(&data.matches).ok(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Xlsx,
    Json,
}

impl ExportFormat {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "xlsx" | "excel" => Some(ExportFormat::Xlsx),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Json => "json",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub sheets: usize,
    pub rows: usize,
}

pub struct ExportProgress {
    pub current: usize,
    pub total: usize,
    pub message: String,
}

enum Cell {
    Text(String),
    Number(f64),
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<usize> for Cell {
    fn from(value: usize) -> Self {
        Cell::Number(value as f64)
    }
}

impl From<u64> for Cell {
    fn from(value: u64) -> Self {
        Cell::Number(value as f64)
    }
}

struct Sheet {
    name: &'static str,
    rows: Vec<Vec<Cell>>,
}

pub fn export(path: &Path, format: ExportFormat, report: &StatsReport) -> Result<ExportSummary> {
    match format {
        ExportFormat::Xlsx => export_xlsx_with_progress(path, report, |_| {}),
        ExportFormat::Json => export_json(path, report),
    }
}

pub fn export_json(path: &Path, report: &StatsReport) -> Result<ExportSummary> {
    let json = serde_json::to_string_pretty(report).context("serialize stats report")?;
    fs::write(path, json).with_context(|| format!("failed writing {}", path.display()))?;
    info!(path = %path.display(), "wrote json report");
    Ok(ExportSummary {
        sheets: 1,
        rows: report_rows(report),
    })
}

pub fn export_xlsx_with_progress(
    path: &Path,
    report: &StatsReport,
    mut on_progress: impl FnMut(ExportProgress),
) -> Result<ExportSummary> {
    let sheets = build_sheets(report);
    let total = sheets.len();
    let mut workbook = Workbook::new();
    let mut rows = 0usize;

    for (idx, sheet) in sheets.iter().enumerate() {
        on_progress(ExportProgress {
            current: idx,
            total,
            message: format!("Writing {}", sheet.name),
        });
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet.name)?;
        write_rows(worksheet, &sheet.rows)?;
        rows += sheet.rows.len().saturating_sub(1);
    }

    workbook
        .save(path)
        .with_context(|| format!("failed writing workbook to {}", path.display()))?;
    on_progress(ExportProgress {
        current: total,
        total,
        message: format!("Saved {}", path.display()),
    });
    info!(path = %path.display(), sheets = total, rows, "wrote workbook");

    Ok(ExportSummary {
        sheets: total,
        rows,
    })
}

fn report_rows(report: &StatsReport) -> usize {
    report.batting.len()
        + report.bowling.len()
        + report.teams.len()
        + report.venues.len()
        + report.seasons.len()
        + report.season_winners.len()
}

fn build_sheets(report: &StatsReport) -> Vec<Sheet> {
    let mut batting = vec![header(&[
        "Player",
        "Innings",
        "Total Runs",
        "Average",
        "Strike Rate",
        "Balls Faced",
        "Fours",
        "Sixes",
    ])];
    batting.extend(report.batting.iter().map(|r| {
        vec![
            Cell::from(r.player.as_str()),
            r.innings.into(),
            r.total_runs.into(),
            r.average.into(),
            r.strike_rate.into(),
            r.balls_faced.into(),
            r.fours.into(),
            r.sixes.into(),
        ]
    }));

    let mut bowling = vec![header(&[
        "Player",
        "Matches",
        "Wickets",
        "Runs Conceded",
        "Overs",
        "Economy",
        "Average",
    ])];
    bowling.extend(report.bowling.iter().map(|r| {
        vec![
            Cell::from(r.player.as_str()),
            r.matches.into(),
            r.wickets.into(),
            r.runs_conceded.into(),
            r.overs.into(),
            r.economy.into(),
            r.average.into(),
        ]
    }));

    let mut teams = vec![header(&["Team", "Matches Played", "Wins", "Losses", "Win %"])];
    teams.extend(report.teams.iter().map(|r| {
        vec![
            Cell::from(r.team.as_str()),
            r.matches_played.into(),
            r.wins.into(),
            r.losses().into(),
            r.win_percentage.into(),
        ]
    }));

    let mut venues = vec![header(&["Venue", "Matches Played"])];
    venues.extend(
        report
            .venues
            .iter()
            .map(|r| vec![Cell::from(r.venue.as_str()), r.matches_played.into()]),
    );

    let mut seasons = vec![header(&["Season", "Matches"])];
    seasons.extend(
        report
            .seasons
            .iter()
            .map(|r| vec![Cell::from(r.season.as_str()), r.matches.into()]),
    );

    let mut champions = vec![header(&["Season", "Winner", "Venue"])];
    champions.extend(report.season_winners.iter().map(|r| {
        vec![
            Cell::from(r.season.as_str()),
            Cell::from(r.winner.clone().unwrap_or_else(|| "No result".to_string())),
            Cell::from(r.venue.as_str()),
        ]
    }));

    let s = &report.summary;
    let mut overview = vec![header(&["Metric", "Value"])];
    overview.push(vec!["Matches".into(), s.total_matches.into()]);
    overview.push(vec!["Seasons".into(), s.seasons.into()]);
    overview.push(vec!["Teams".into(), s.teams.into()]);
    overview.push(vec!["Venues".into(), s.venues.into()]);
    overview.push(vec!["Players".into(), s.players.into()]);
    overview.push(vec!["Deliveries".into(), s.total_deliveries.into()]);
    overview.push(vec!["Runs".into(), s.total_runs.into()]);
    overview.push(vec!["Wickets".into(), s.total_wickets.into()]);
    if let Some(toss) = &report.toss_impact {
        overview.push(vec![
            "Toss winner won match".into(),
            toss.toss_winner_won_match.into(),
        ]);
        overview.push(vec!["Toss win %".into(), toss.win_percentage.into()]);
    }

    vec![
        Sheet {
            name: "Overview",
            rows: overview,
        },
        Sheet {
            name: "Batting",
            rows: batting,
        },
        Sheet {
            name: "Bowling",
            rows: bowling,
        },
        Sheet {
            name: "Teams",
            rows: teams,
        },
        Sheet {
            name: "Venues",
            rows: venues,
        },
        Sheet {
            name: "Seasons",
            rows: seasons,
        },
        Sheet {
            name: "Champions",
            rows: champions,
        },
    ]
}

fn header(titles: &[&str]) -> Vec<Cell> {
    titles.iter().map(|t| Cell::from(*t)).collect()
}

fn write_rows(worksheet: &mut Worksheet, rows: &[Vec<Cell>]) -> Result<()> {
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            let (r, c) = (row_idx as u32, col_idx as u16);
            let written = match value {
                Cell::Text(text) => worksheet.write_string(r, c, text),
                Cell::Number(n) => worksheet.write_number(r, c, *n),
            };
            written.with_context(|| format!("write cell ({row_idx},{col_idx})"))?;
        }
    }
    Ok(())
}
