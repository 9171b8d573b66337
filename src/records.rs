use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Columns `matches.csv` must carry. Anything else in the header is ignored.
pub const MATCH_COLUMNS: &[&str] = &[
    "id",
    "season",
    "date",
    "venue",
    "team1",
    "team2",
    "toss_winner",
    "winner",
];

/// Columns `deliveries.csv` must carry.
pub const DELIVERY_COLUMNS: &[&str] = &[
    "match_id",
    "inning",
    "batter",
    "bowler",
    "batsman_runs",
    "total_runs",
    "extras_type",
    "is_wicket",
];

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: u64,
    #[serde(deserialize_with = "de_text")]
    pub season: String,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub city: Option<String>,
    #[serde(deserialize_with = "de_date", serialize_with = "ser_date")]
    pub date: NaiveDate,
    pub venue: String,
    pub team1: String,
    pub team2: String,
    pub toss_winner: String,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub toss_decision: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub winner: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub result: Option<String>,
    #[serde(default, deserialize_with = "de_opt_number")]
    pub result_margin: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub player_of_match: Option<String>,
}

impl MatchRecord {
    pub fn new(
        id: u64,
        season: impl Into<String>,
        date: NaiveDate,
        venue: impl Into<String>,
        team1: impl Into<String>,
        team2: impl Into<String>,
    ) -> Self {
        let team1 = team1.into();
        Self {
            id,
            season: season.into(),
            city: None,
            date,
            venue: venue.into(),
            toss_winner: team1.clone(),
            team1,
            team2: team2.into(),
            toss_decision: None,
            winner: None,
            result: None,
            result_margin: None,
            player_of_match: None,
        }
    }

    pub fn won_by(mut self, team: impl Into<String>) -> Self {
        self.winner = Some(team.into());
        self
    }

    pub fn toss_to(mut self, team: impl Into<String>) -> Self {
        self.toss_winner = team.into();
        self
    }

    pub fn involves(&self, team: &str) -> bool {
        self.team1 == team || self.team2 == team
    }

    pub fn is_between(&self, a: &str, b: &str) -> bool {
        (self.team1 == a && self.team2 == b) || (self.team1 == b && self.team2 == a)
    }

    pub fn winner_is(&self, team: &str) -> bool {
        self.winner.as_deref() == Some(team)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRecord {
    pub match_id: u64,
    pub inning: u8,
    #[serde(default, deserialize_with = "de_opt_count")]
    pub over: Option<u32>,
    #[serde(default, deserialize_with = "de_opt_count")]
    pub ball: Option<u32>,
    pub batter: String,
    pub bowler: String,
    pub batsman_runs: u32,
    #[serde(default)]
    pub extra_runs: u32,
    pub total_runs: u32,
    pub extras_type: ExtrasType,
    #[serde(deserialize_with = "de_flag", serialize_with = "ser_flag")]
    pub is_wicket: bool,
}

impl DeliveryRecord {
    /// A legal ball with no extras.
    pub fn ball(
        match_id: u64,
        batter: impl Into<String>,
        bowler: impl Into<String>,
        batsman_runs: u32,
    ) -> Self {
        Self {
            match_id,
            inning: 1,
            over: None,
            ball: None,
            batter: batter.into(),
            bowler: bowler.into(),
            batsman_runs,
            extra_runs: 0,
            total_runs: batsman_runs,
            extras_type: ExtrasType::None,
            is_wicket: false,
        }
    }

    pub fn with_extras(mut self, kind: ExtrasType, extra_runs: u32) -> Self {
        self.extras_type = kind;
        self.extra_runs = extra_runs;
        self.total_runs = self.batsman_runs + extra_runs;
        self
    }

    pub fn wicket(mut self) -> Self {
        self.is_wicket = true;
        self
    }

    pub fn in_innings(mut self, inning: u8) -> Self {
        self.inning = inning;
        self
    }

    /// Counts toward the batter's balls faced.
    pub fn is_ball_faced(&self) -> bool {
        self.extras_type != ExtrasType::Wides
    }

    /// Counts toward the bowler's over tally.
    pub fn is_legal(&self) -> bool {
        !matches!(self.extras_type, ExtrasType::Wides | ExtrasType::NoBalls)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExtrasType {
    #[default]
    None,
    Wides,
    NoBalls,
    LegByes,
    Byes,
    Penalty,
}

impl ExtrasType {
    pub fn as_str(self) -> &'static str {
        match self {
            ExtrasType::None => "",
            ExtrasType::Wides => "wides",
            ExtrasType::NoBalls => "noballs",
            ExtrasType::LegByes => "legbyes",
            ExtrasType::Byes => "byes",
            ExtrasType::Penalty => "penalty",
        }
    }
}

impl fmt::Display for ExtrasType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtrasType::None => write!(f, "none"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

impl FromStr for ExtrasType {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let s = raw.trim();
        if is_missing(s) || s.eq_ignore_ascii_case("none") {
            return Ok(ExtrasType::None);
        }
        match s.to_ascii_lowercase().as_str() {
            "wides" | "wide" => Ok(ExtrasType::Wides),
            "noballs" | "noball" => Ok(ExtrasType::NoBalls),
            "legbyes" | "legbye" => Ok(ExtrasType::LegByes),
            "byes" | "bye" => Ok(ExtrasType::Byes),
            "penalty" => Ok(ExtrasType::Penalty),
            _ => Err(format!("unknown extras_type `{s}`")),
        }
    }
}

impl Serialize for ExtrasType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ExtrasType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        raw.parse().map_err(serde::de::Error::custom)
    }
}

pub fn parse_match_date(raw: &str) -> Option<NaiveDate> {
    let cleaned = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(cleaned, fmt).ok())
}

// pandas-style exports write "NA"/"nan" for missing cells.
fn is_missing(s: &str) -> bool {
    s.is_empty() || s.eq_ignore_ascii_case("na") || s.eq_ignore_ascii_case("nan")
}

fn de_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().to_string())
}

fn de_opt_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .map(|s| s.trim().to_string())
        .filter(|s| !is_missing(s)))
}

fn de_opt_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let s = raw.trim();
    if is_missing(s) {
        return Ok(None);
    }
    s.parse::<f64>()
        .map(Some)
        .map_err(|_| serde::de::Error::custom(format!("invalid number `{s}`")))
}

fn de_opt_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let value = de_opt_number(deserializer)?;
    match value {
        Some(n) if n >= 0.0 && n.fract() == 0.0 && n <= f64::from(u32::MAX) => Ok(Some(n as u32)),
        Some(n) => Err(serde::de::Error::custom(format!("invalid count `{n}`"))),
        None => Ok(None),
    }
}

fn de_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_match_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date `{}`", raw.trim())))
}

fn ser_date<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format("%Y-%m-%d"))
}

fn de_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "1.0" | "true" => Ok(true),
        "0" | "0.0" | "false" | "" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "invalid is_wicket flag `{other}`"
        ))),
    }
}

fn ser_flag<S: Serializer>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*flag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extras_type_parses_missing_markers_as_none() {
        for raw in ["", "NA", "nan", "None", "  "] {
            assert_eq!(raw.parse::<ExtrasType>(), Ok(ExtrasType::None), "{raw:?}");
        }
        assert_eq!("noballs".parse::<ExtrasType>(), Ok(ExtrasType::NoBalls));
        assert!("overthrow".parse::<ExtrasType>().is_err());
    }

    #[test]
    fn match_dates_accept_common_formats() {
        let expected = NaiveDate::from_ymd_opt(2008, 4, 18);
        assert_eq!(parse_match_date("2008-04-18"), expected);
        assert_eq!(parse_match_date("18/04/2008"), expected);
        assert_eq!(parse_match_date("18-04-2008"), expected);
        assert_eq!(parse_match_date("April 18"), None);
    }

    #[test]
    fn legal_and_faced_flags_follow_extras() {
        let wide = DeliveryRecord::ball(1, "A", "B", 0).with_extras(ExtrasType::Wides, 1);
        assert!(!wide.is_ball_faced());
        assert!(!wide.is_legal());

        let no_ball = DeliveryRecord::ball(1, "A", "B", 4).with_extras(ExtrasType::NoBalls, 1);
        assert!(no_ball.is_ball_faced());
        assert!(!no_ball.is_legal());
        assert_eq!(no_ball.total_runs, 5);

        let leg_bye = DeliveryRecord::ball(1, "A", "B", 0).with_extras(ExtrasType::LegByes, 1);
        assert!(leg_bye.is_ball_faced());
        assert!(leg_bye.is_legal());
    }
}
