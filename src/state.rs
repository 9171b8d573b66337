use std::collections::VecDeque;

use crate::batting::{BattingRow, batting_stats};
use crate::bowling::{BowlingRow, bowling_stats};
use crate::compare::{MAX_COMPARE, MIN_COMPARE, PlayerComparison, compare_players};
use crate::config::AppConfig;
use crate::dataset::Dataset;
use crate::listings::{all_players, all_teams};
use crate::match_stats::{
    SeasonCount, SeasonWinner, TossImpact, VenueRow, matches_by_season, season_winners,
    toss_impact, venue_stats,
};
use crate::summary::DatasetSummary;
use crate::team_stats::{
    HeadToHead, SeasonPerformanceRow, TeamRow, head_to_head, team_performance_by_season,
    team_stats,
};

const MAX_LOGS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Players,
    Teams,
    Insights,
    Compare,
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::Home,
        Screen::Players,
        Screen::Teams,
        Screen::Insights,
        Screen::Compare,
    ];

    pub fn from_digit(c: char) -> Option<Screen> {
        let idx = c.to_digit(10)?.checked_sub(1)? as usize;
        Self::ALL.get(idx).copied()
    }
}

/// Which top table the Players page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerPanel {
    Batting,
    Bowling,
}

/// Which list j/k moves on the Teams page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamFocus {
    Team,
    Opponent,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: Screen,
    pub help_overlay: bool,
    pub logs: VecDeque<String>,

    pub top_n: usize,
    pub player_top_n: usize,
    pub venue_rows: usize,

    pub summary: Option<DatasetSummary>,
    pub batting: Vec<BattingRow>,
    pub bowling: Vec<BowlingRow>,
    pub teams: Vec<TeamRow>,
    pub venues: Vec<VenueRow>,
    pub seasons: Vec<SeasonCount>,
    pub champions: Vec<SeasonWinner>,
    pub toss: Option<TossImpact>,
    pub players: Vec<String>,
    pub team_names: Vec<String>,

    pub player_selected: usize,
    pub player_panel: PlayerPanel,
    pub player_batting: Option<BattingRow>,
    pub player_bowling: Option<BowlingRow>,

    pub team_focus: TeamFocus,
    pub team_selected: usize,
    pub opponent_selected: usize,
    pub team_seasons: Vec<SeasonPerformanceRow>,
    /// `None` while the same team is picked on both sides.
    pub head_to_head: Option<HeadToHead>,

    pub insights_scroll: usize,

    pub compare_cursor: usize,
    pub compare_selection: Vec<String>,
    pub comparison: Option<PlayerComparison>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl AppState {
    pub fn new(cfg: &AppConfig) -> Self {
        Self {
            screen: Screen::Home,
            help_overlay: false,
            logs: VecDeque::with_capacity(MAX_LOGS),
            top_n: cfg.top_n,
            player_top_n: cfg.player_top_n,
            venue_rows: cfg.venue_rows,
            summary: None,
            batting: Vec::new(),
            bowling: Vec::new(),
            teams: Vec::new(),
            venues: Vec::new(),
            seasons: Vec::new(),
            champions: Vec::new(),
            toss: None,
            players: Vec::new(),
            team_names: Vec::new(),
            player_selected: 0,
            player_panel: PlayerPanel::Batting,
            player_batting: None,
            player_bowling: None,
            team_focus: TeamFocus::Team,
            team_selected: 0,
            opponent_selected: 1,
            team_seasons: Vec::new(),
            head_to_head: None,
            insights_scroll: 0,
            compare_cursor: 0,
            compare_selection: Vec::new(),
            comparison: None,
        }
    }

    /// Compute every table the pages read, then the per-selection views.
    pub fn load(&mut self, data: &Dataset) {
        self.summary = Some(DatasetSummary::compute(data));
        self.batting = batting_stats(&data.deliveries, None);
        self.bowling = bowling_stats(&data.deliveries, None);
        self.teams = team_stats(&data.matches);
        self.venues = venue_stats(&data.matches);
        self.seasons = matches_by_season(&data.matches);
        self.champions = season_winners(&data.matches);
        self.toss = toss_impact(&data.matches).ok();
        self.players = all_players(&data.deliveries);
        self.team_names = all_teams(&data.matches);

        self.player_selected = 0;
        self.team_selected = 0;
        self.opponent_selected = if self.team_names.len() > 1 { 1 } else { 0 };
        self.compare_cursor = 0;
        self.compare_selection.clear();
        self.comparison = None;

        self.refresh_player(data);
        self.refresh_teams(data);
        self.push_log(format!(
            "Loaded {} matches, {} deliveries",
            data.matches.len(),
            data.deliveries.len()
        ));
    }

    pub fn has_data(&self) -> bool {
        self.summary.is_some()
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }

    pub fn selected_player(&self) -> Option<&str> {
        self.players.get(self.player_selected).map(String::as_str)
    }

    pub fn selected_team(&self) -> Option<&str> {
        self.team_names.get(self.team_selected).map(String::as_str)
    }

    pub fn selected_opponent(&self) -> Option<&str> {
        self.team_names
            .get(self.opponent_selected)
            .map(String::as_str)
    }

    /// Overall record of the selected team, from the cached team table.
    pub fn selected_team_row(&self) -> Option<&TeamRow> {
        let team = self.selected_team()?;
        self.teams.iter().find(|row| row.team == team)
    }

    pub fn cycle_focus(&mut self) {
        match self.screen {
            Screen::Players => {
                self.player_panel = match self.player_panel {
                    PlayerPanel::Batting => PlayerPanel::Bowling,
                    PlayerPanel::Bowling => PlayerPanel::Batting,
                };
            }
            Screen::Teams => {
                self.team_focus = match self.team_focus {
                    TeamFocus::Team => TeamFocus::Opponent,
                    TeamFocus::Opponent => TeamFocus::Team,
                };
            }
            _ => {}
        }
    }

    pub fn select_next(&mut self, data: &Dataset) {
        self.step_selection(data, true);
    }

    pub fn select_prev(&mut self, data: &Dataset) {
        self.step_selection(data, false);
    }

    fn step_selection(&mut self, data: &Dataset, forward: bool) {
        match self.screen {
            Screen::Home => {}
            Screen::Players => {
                self.player_selected = wrap(self.player_selected, self.players.len(), forward);
                self.refresh_player(data);
            }
            Screen::Teams => {
                let total = self.team_names.len();
                match self.team_focus {
                    TeamFocus::Team => self.team_selected = wrap(self.team_selected, total, forward),
                    TeamFocus::Opponent => {
                        self.opponent_selected = wrap(self.opponent_selected, total, forward)
                    }
                }
                self.refresh_teams(data);
            }
            Screen::Insights => {
                let total = self.venues.len().min(self.venue_rows);
                self.insights_scroll = wrap(self.insights_scroll, total, forward);
            }
            Screen::Compare => {
                self.compare_cursor = wrap(self.compare_cursor, self.players.len(), forward);
            }
        }
    }

    /// Add or remove the player under the Compare cursor. Selections past the
    /// limit are refused with a log line.
    pub fn toggle_compare(&mut self, data: &Dataset) {
        let Some(name) = self.players.get(self.compare_cursor).cloned() else {
            return;
        };
        if let Some(pos) = self.compare_selection.iter().position(|p| *p == name) {
            self.compare_selection.remove(pos);
        } else if self.compare_selection.len() >= MAX_COMPARE {
            self.push_log(format!("Compare holds at most {MAX_COMPARE} players"));
            return;
        } else {
            self.compare_selection.push(name);
        }
        self.refresh_comparison(data);
    }

    pub fn refresh_player(&mut self, data: &Dataset) {
        let Some(player) = self.selected_player().map(str::to_string) else {
            self.player_batting = None;
            self.player_bowling = None;
            return;
        };
        self.player_batting = batting_stats(&data.deliveries, Some(&player))
            .into_iter()
            .next();
        self.player_bowling = bowling_stats(&data.deliveries, Some(&player))
            .into_iter()
            .next();
    }

    pub fn refresh_teams(&mut self, data: &Dataset) {
        let team = self.selected_team().map(str::to_string);
        let opponent = self.selected_opponent().map(str::to_string);
        self.team_seasons = team
            .as_deref()
            .map(|t| team_performance_by_season(&data.matches, t))
            .unwrap_or_default();
        self.head_to_head = match (team.as_deref(), opponent.as_deref()) {
            (Some(a), Some(b)) if a != b => Some(head_to_head(&data.matches, a, b)),
            _ => None,
        };
    }

    fn refresh_comparison(&mut self, data: &Dataset) {
        self.comparison = if self.compare_selection.len() >= MIN_COMPARE {
            match compare_players(&data.deliveries, &self.compare_selection) {
                Ok(cmp) => Some(cmp),
                Err(err) => {
                    self.push_log(err.to_string());
                    None
                }
            }
        } else {
            None
        };
    }
}

fn wrap(current: usize, total: usize, forward: bool) -> usize {
    if total == 0 {
        return 0;
    }
    if forward {
        (current + 1) % total
    } else if current == 0 {
        total - 1
    } else {
        current - 1
    }
}

pub fn screen_label(screen: Screen) -> &'static str {
    match screen {
        Screen::Home => "Home",
        Screen::Players => "Players",
        Screen::Teams => "Teams",
        Screen::Insights => "Match Insights",
        Screen::Compare => "Compare Players",
    }
}

pub fn panel_label(panel: PlayerPanel) -> &'static str {
    match panel {
        PlayerPanel::Batting => "Batting",
        PlayerPanel::Bowling => "Bowling",
    }
}
