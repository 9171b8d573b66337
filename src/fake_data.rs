use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Duration as ChronoDuration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::dataset::{Dataset, deliveries_path, matches_path};
use crate::records::{DeliveryRecord, ExtrasType, MatchRecord};

const TEAMS: &[(&str, &str)] = &[
    ("Chennai Chargers", "CHE"),
    ("Mumbai Mariners", "MUM"),
    ("Kolkata Knights", "KOL"),
    ("Delhi Daredevils", "DEL"),
    ("Bangalore Blasters", "BLR"),
    ("Hyderabad Hawks", "HYD"),
    ("Punjab Panthers", "PUN"),
    ("Rajasthan Royals", "RAJ"),
];

const VENUES: &[&str] = &[
    "MA Chidambaram Stadium",
    "Wankhede Stadium",
    "Eden Gardens",
    "Arun Jaitley Stadium",
    "M Chinnaswamy Stadium",
    "Rajiv Gandhi International Stadium",
    "Punjab Cricket Association Stadium",
    "Sawai Mansingh Stadium",
];

const SURNAMES: &[&str] = &[
    "Sharma", "Kumar", "Patel", "Singh", "Rao", "Iyer", "Khan", "Das", "Nair", "Gill", "Pandya",
];

const OVERS: u32 = 20;
const BOWLERS_USED: usize = 5;

#[derive(Debug, Clone, Copy)]
pub struct FakeConfig {
    pub seasons: usize,
    pub first_year: i32,
    pub seed: u64,
}

impl Default for FakeConfig {
    fn default() -> Self {
        Self {
            seasons: 3,
            first_year: 2008,
            seed: 7,
        }
    }
}

/// A synthetic league: every pair meets twice per season, then the top two
/// sides by wins play a final on the season's last date.
pub fn generate(cfg: FakeConfig) -> Dataset {
    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let squads: Vec<Vec<String>> = TEAMS
        .iter()
        .map(|(_, code)| {
            SURNAMES
                .iter()
                .map(|surname| format!("{code} {surname}"))
                .collect()
        })
        .collect();

    let mut data = Dataset::default();
    let mut next_id = 1u64;

    for offset in 0..cfg.seasons {
        let year = cfg.first_year + offset as i32;
        let season = year.to_string();
        let Some(mut date) = NaiveDate::from_ymd_opt(year, 4, 1) else {
            continue;
        };
        let mut wins = vec![0usize; TEAMS.len()];

        for leg in 0..2 {
            for a in 0..TEAMS.len() {
                for b in (a + 1)..TEAMS.len() {
                    let (home, away) = if leg == 0 { (a, b) } else { (b, a) };
                    if let Some(winner) =
                        play_match(&mut rng, &mut data, next_id, &season, date, home, away, &squads)
                    {
                        wins[winner] += 1;
                    }
                    next_id += 1;
                    date += ChronoDuration::days(1);
                }
            }
        }

        let mut standings: Vec<usize> = (0..TEAMS.len()).collect();
        standings.sort_by(|x, y| wins[*y].cmp(&wins[*x]));
        play_match(
            &mut rng,
            &mut data,
            next_id,
            &season,
            date + ChronoDuration::days(2),
            standings[0],
            standings[1],
            &squads,
        );
        next_id += 1;
    }

    data
}

#[allow(clippy::too_many_arguments)]
fn play_match(
    rng: &mut StdRng,
    data: &mut Dataset,
    match_id: u64,
    season: &str,
    date: NaiveDate,
    home: usize,
    away: usize,
    squads: &[Vec<String>],
) -> Option<usize> {
    let (home_name, _) = TEAMS[home];
    let (away_name, _) = TEAMS[away];
    let toss = if rng.gen_bool(0.5) { home } else { away };
    let bat_first = if rng.gen_bool(0.5) {
        toss
    } else if toss == home {
        away
    } else {
        home
    };
    let chase = if bat_first == home { away } else { home };

    let first = simulate_innings(
        rng,
        match_id,
        1,
        &squads[bat_first],
        &squads[chase],
        None,
        &mut data.deliveries,
    );
    let second = simulate_innings(
        rng,
        match_id,
        2,
        &squads[chase],
        &squads[bat_first],
        Some(first + 1),
        &mut data.deliveries,
    );

    let winner = match second.cmp(&first) {
        std::cmp::Ordering::Greater => Some(chase),
        std::cmp::Ordering::Less => Some(bat_first),
        std::cmp::Ordering::Equal => None,
    };

    let mut record = MatchRecord::new(
        match_id,
        season,
        date,
        VENUES[home % VENUES.len()],
        home_name,
        away_name,
    )
    .toss_to(TEAMS[toss].0);
    record.toss_decision = Some(if toss == bat_first { "bat" } else { "field" }.to_string());
    match winner {
        Some(idx) => {
            record = record.won_by(TEAMS[idx].0);
            record.result = Some(if idx == chase { "wickets" } else { "runs" }.to_string());
            record.result_margin = Some(f64::from(first.abs_diff(second)));
        }
        None => record.result = Some("tie".to_string()),
    }
    data.matches.push(record);
    winner
}

fn simulate_innings(
    rng: &mut StdRng,
    match_id: u64,
    inning: u8,
    batting: &[String],
    bowling: &[String],
    target: Option<u32>,
    out: &mut Vec<DeliveryRecord>,
) -> u32 {
    let attack = &bowling[bowling.len() - BOWLERS_USED..];
    let (mut striker, mut non_striker, mut next_in) = (0usize, 1usize, 2usize);
    let mut total = 0u32;

    for over in 0..OVERS {
        let bowler = &attack[over as usize % BOWLERS_USED];
        let mut legal = 0;
        let mut ball = 0;
        while legal < 6 {
            ball += 1;
            let roll: f64 = rng.r#gen();
            let (extras, extra_runs) = if roll < 0.03 {
                (ExtrasType::Wides, 1)
            } else if roll < 0.04 {
                (ExtrasType::NoBalls, 1)
            } else if roll < 0.06 {
                (ExtrasType::LegByes, rng.gen_range(1..=2))
            } else if roll < 0.07 {
                (ExtrasType::Byes, 1)
            } else {
                (ExtrasType::None, 0)
            };
            let is_wicket = extras == ExtrasType::None && rng.gen_bool(0.045);
            let batsman_runs = match extras {
                ExtrasType::None | ExtrasType::NoBalls if !is_wicket => sample_runs(rng),
                _ => 0,
            };

            let mut delivery = DeliveryRecord::ball(
                match_id,
                batting[striker].as_str(),
                bowler.as_str(),
                batsman_runs,
            )
            .with_extras(extras, extra_runs)
            .in_innings(inning);
            delivery.over = Some(over);
            delivery.ball = Some(ball);
            if is_wicket {
                delivery = delivery.wicket();
            }
            total += delivery.total_runs;
            out.push(delivery);

            if extras != ExtrasType::Wides && extras != ExtrasType::NoBalls {
                legal += 1;
            }
            if is_wicket {
                if next_in >= batting.len() {
                    return total;
                }
                striker = next_in;
                next_in += 1;
            } else if (batsman_runs + extra_runs) % 2 == 1 {
                std::mem::swap(&mut striker, &mut non_striker);
            }
            if target.is_some_and(|t| total >= t) {
                return total;
            }
        }
        std::mem::swap(&mut striker, &mut non_striker);
    }
    total
}

fn sample_runs(rng: &mut StdRng) -> u32 {
    match rng.gen_range(0..100) {
        0..=34 => 0,
        35..=69 => 1,
        70..=79 => 2,
        80..=81 => 3,
        82..=93 => 4,
        _ => 6,
    }
}

/// Write both tables as CSV into `dir`, creating it if needed.
pub fn write_dataset(dir: &Path, data: &Dataset) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;

    let path = matches_path(dir);
    let mut writer =
        csv::Writer::from_path(&path).with_context(|| format!("open {}", path.display()))?;
    for m in &data.matches {
        writer.serialize(m).context("write match row")?;
    }
    writer.flush().context("flush matches")?;

    let path = deliveries_path(dir);
    let mut writer =
        csv::Writer::from_path(&path).with_context(|| format!("open {}", path.display()))?;
    for d in &data.deliveries {
        writer.serialize(d).context("write delivery row")?;
    }
    writer.flush().context("flush deliveries")?;

    info!(
        dir = %dir.display(),
        matches = data.matches.len(),
        deliveries = data.deliveries.len(),
        "wrote sample dataset"
    );
    Ok(())
}
