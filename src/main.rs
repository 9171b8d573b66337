use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, Paragraph};
use tracing::{error, info};

use cricket_terminal::config::{AppConfig, init_file_logging};
use cricket_terminal::dataset::{Dataset, deliveries_path, matches_path, shared_dataset};
use cricket_terminal::export::{StatsReport, export_xlsx_with_progress};
use cricket_terminal::state::{AppState, PlayerPanel, Screen, TeamFocus, panel_label, screen_label};

const EXPORT_FILE: &str = "cricket_stats.xlsx";

struct App {
    state: AppState,
    data: Option<&'static Dataset>,
    data_dir: PathBuf,
    load_error: Option<String>,
    should_quit: bool,
}

impl App {
    fn new(cfg: &AppConfig) -> Self {
        let mut state = AppState::new(cfg);
        let (data, load_error) = match shared_dataset(&cfg.data_dir) {
            Ok(Some(data)) => {
                state.load(data);
                (Some(data), None)
            }
            Ok(None) => (None, None),
            Err(err) => {
                error!(%err, "dataset failed to load");
                (None, Some(err.to_string()))
            }
        };
        Self {
            state,
            data,
            data_dir: cfg.data_dir.clone(),
            load_error,
            should_quit: false,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.state.help_overlay = !self.state.help_overlay,
            KeyCode::Esc => self.state.help_overlay = false,
            _ => {}
        }
        let Some(data) = self.data else {
            return;
        };
        match key.code {
            KeyCode::Char(c @ '1'..='5') => {
                if let Some(screen) = Screen::from_digit(c) {
                    self.state.screen = screen;
                }
            }
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next(data),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev(data),
            KeyCode::Tab => self.state.cycle_focus(),
            KeyCode::Char(' ') if self.state.screen == Screen::Compare => {
                self.state.toggle_compare(data)
            }
            KeyCode::Char('e') => self.export(data),
            _ => {}
        }
    }

    fn export(&mut self, data: &Dataset) {
        let path = self.data_dir.join(EXPORT_FILE);
        let report = StatsReport::build(data, None);
        let result = export_xlsx_with_progress(&path, &report, |progress| {
            self.state.push_log(format!(
                "[EXPORT {}/{}] {}",
                progress.current, progress.total, progress.message
            ));
        });
        match result {
            Ok(summary) => self.state.push_log(format!(
                "[INFO] Exported {} sheets, {} rows",
                summary.sheets, summary.rows
            )),
            Err(err) => {
                error!(error = %err, "export failed");
                self.state.push_log(format!("[WARN] Export failed: {err:#}"));
            }
        }
    }
}

fn main() -> Result<()> {
    let cfg = AppConfig::from_env();
    if let Some(path) = &cfg.log_file {
        init_file_logging(path)?;
    }
    info!(data_dir = %cfg.data_dir.display(), "starting");
    let mut app = App::new(&cfg);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.on_key(key);
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let header = Paragraph::new(header_text(&app.state))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    if app.data.is_none() {
        render_missing_data(frame, chunks[1], app);
    } else {
        match app.state.screen {
            Screen::Home => render_home(frame, chunks[1], &app.state),
            Screen::Players => render_players(frame, chunks[1], &app.state),
            Screen::Teams => render_teams(frame, chunks[1], &app.state),
            Screen::Insights => render_insights(frame, chunks[1], &app.state),
            Screen::Compare => render_compare(frame, chunks[1], &app.state),
        }
    }

    let console = Paragraph::new(console_text(&app.state))
        .block(Block::default().title("Console").borders(Borders::ALL));
    frame.render_widget(console, chunks[2]);

    let footer = Paragraph::new(footer_text(&app.state)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[3]);

    if app.state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn header_text(state: &AppState) -> String {
    let tabs = Screen::ALL
        .iter()
        .enumerate()
        .map(|(idx, screen)| {
            if *screen == state.screen {
                format!("[{} {}]", idx + 1, screen_label(*screen))
            } else {
                format!(" {} {} ", idx + 1, screen_label(*screen))
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    let line1 = format!("  (o)  CRICKET TERMINAL | {}", screen_label(state.screen));
    let line2 = format!("  /|\\  {tabs}");
    format!("{line1}\n{line2}")
}

fn footer_text(state: &AppState) -> String {
    match state.screen {
        Screen::Home => "1-5 Pages | e Export | ? Help | q Quit".to_string(),
        Screen::Players => {
            "1-5 Pages | j/k/↑/↓ Player | Tab Batting/Bowling | e Export | ? Help | q Quit"
                .to_string()
        }
        Screen::Teams => {
            "1-5 Pages | j/k/↑/↓ Move | Tab Team/Opponent | e Export | ? Help | q Quit".to_string()
        }
        Screen::Insights => "1-5 Pages | j/k/↑/↓ Venues | e Export | ? Help | q Quit".to_string(),
        Screen::Compare => {
            "1-5 Pages | j/k/↑/↓ Move | Space Select | e Export | ? Help | q Quit".to_string()
        }
    }
}

fn render_missing_data(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = Vec::new();
    match &app.load_error {
        Some(err) => {
            lines.push("Data files could not be read.".to_string());
            lines.push(String::new());
            lines.push(err.clone());
        }
        None => {
            lines.push("Data files not found. Expected:".to_string());
            lines.push(String::new());
            lines.push(format!("  {}", matches_path(&app.data_dir).display()));
            lines.push(format!("  {}", deliveries_path(&app.data_dir).display()));
            lines.push(String::new());
            lines.push("Set CRICKET_DATA_DIR, or run `sample_data` to generate a dataset.".to_string());
        }
    }
    let body = Paragraph::new(lines.join("\n"))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().title("No data").borders(Borders::ALL));
    frame.render_widget(body, area);
}

fn render_home(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Min(8),
            Constraint::Length(12),
        ])
        .split(area);

    let quick = Paragraph::new(quick_stats_text(state))
        .block(Block::default().title("Quick Stats").borders(Borders::ALL));
    frame.render_widget(quick, rows[0]);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let scorers: Vec<(String, u64)> = state
        .batting
        .iter()
        .take(state.top_n)
        .map(|r| (r.player.clone(), r.total_runs))
        .collect();
    frame.render_widget(
        ranking_chart(
            format!("Top {} Run Scorers", state.top_n),
            &scorers,
            Color::Green,
        ),
        charts[0],
    );

    let takers: Vec<(String, u64)> = state
        .bowling
        .iter()
        .take(state.top_n)
        .map(|r| (r.player.clone(), r.wickets as u64))
        .collect();
    frame.render_widget(
        ranking_chart(
            format!("Top {} Wicket Takers", state.top_n),
            &takers,
            Color::Red,
        ),
        charts[1],
    );

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[2]);
    frame.render_widget(season_chart(state), bottom[0]);

    let champions = Paragraph::new(champions_text(state, bottom[1].height as usize))
        .block(Block::default().title("Season Champions").borders(Borders::ALL));
    frame.render_widget(champions, bottom[1]);
}

fn quick_stats_text(state: &AppState) -> String {
    let Some(s) = &state.summary else {
        return "No data".to_string();
    };
    let range = match (&s.first_season, &s.last_season) {
        (Some(first), Some(last)) => format!("{first} - {last}"),
        _ => "-".to_string(),
    };
    [
        format!(
            "Matches: {:<8} Seasons: {:<5} ({range})",
            s.total_matches, s.seasons
        ),
        format!(
            "Teams: {:<10} Venues: {:<6} Players: {}",
            s.teams, s.venues, s.players
        ),
        format!(
            "Deliveries: {:<5} Runs: {:<8} Wickets: {}",
            s.total_deliveries, s.total_runs, s.total_wickets
        ),
        match &state.toss {
            Some(toss) => format!(
                "Toss winner won the match {} of {} times ({:.2}%)",
                toss.toss_winner_won_match, toss.total_matches, toss.win_percentage
            ),
            None => "Toss impact: no matches".to_string(),
        },
    ]
    .join("\n")
}

fn ranking_chart(title: String, rows: &[(String, u64)], color: Color) -> BarChart<'static> {
    let bars: Vec<Bar<'static>> = rows
        .iter()
        .map(|(name, value)| {
            Bar::default()
                .value(*value)
                .label(Line::from(fit(name, 18)))
                .text_value(value.to_string())
                .style(Style::default().fg(color))
        })
        .collect();
    BarChart::default()
        .block(Block::default().title(title).borders(Borders::ALL))
        .data(BarGroup::default().bars(&bars))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
}

fn season_chart(state: &AppState) -> BarChart<'static> {
    let bars: Vec<Bar<'static>> = state
        .seasons
        .iter()
        .map(|row| {
            Bar::default()
                .value(row.matches as u64)
                .label(Line::from(fit(&row.season, 7)))
                .style(Style::default().fg(Color::Cyan))
        })
        .collect();
    BarChart::default()
        .block(
            Block::default()
                .title("Matches per Season")
                .borders(Borders::ALL),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(7)
        .bar_gap(1)
}

fn champions_text(state: &AppState, height: usize) -> String {
    if state.champions.is_empty() {
        return "No seasons".to_string();
    }
    let visible = height.saturating_sub(2).max(1);
    state
        .champions
        .iter()
        .rev()
        .take(visible)
        .map(|row| {
            format!(
                "{:<8} {}",
                row.season,
                row.winner.as_deref().unwrap_or("No result")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_players(frame: &mut Frame, area: Rect, state: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(40)])
        .split(area);

    let list = Paragraph::new(list_text(
        &state.players,
        state.player_selected,
        columns[0].height.saturating_sub(2) as usize,
        |_| "",
    ))
    .block(
        Block::default()
            .title(format!("Players ({})", state.players.len()))
            .borders(Borders::ALL),
    );
    frame.render_widget(list, columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(4)])
        .split(columns[1]);
    let metrics = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(right[0]);

    let batting = Paragraph::new(player_batting_text(state))
        .block(Block::default().title("Batting").borders(Borders::ALL));
    frame.render_widget(batting, metrics[0]);
    let bowling = Paragraph::new(player_bowling_text(state))
        .block(Block::default().title("Bowling").borders(Borders::ALL));
    frame.render_widget(bowling, metrics[1]);

    let (title, text) = match state.player_panel {
        PlayerPanel::Batting => (
            format!("Top {} Batters", state.player_top_n),
            batting_table_text(&state.batting[..state.batting.len().min(state.player_top_n)]),
        ),
        PlayerPanel::Bowling => (
            format!("Top {} Bowlers", state.player_top_n),
            bowling_table_text(&state.bowling[..state.bowling.len().min(state.player_top_n)]),
        ),
    };
    let table = Paragraph::new(text).block(
        Block::default()
            .title(format!("{title} [Tab: {}]", panel_label(state.player_panel)))
            .borders(Borders::ALL),
    );
    frame.render_widget(table, right[1]);
}

fn player_batting_text(state: &AppState) -> String {
    match &state.player_batting {
        Some(r) => [
            format!("Innings:      {}", r.innings),
            format!("Runs:         {}", r.total_runs),
            format!("Average:      {:.2}", r.average),
            format!("Strike rate:  {:.2}", r.strike_rate),
            format!("Balls faced:  {}", r.balls_faced),
            format!("4s / 6s:      {} / {}", r.fours, r.sixes),
        ]
        .join("\n"),
        None => "No batting statistics".to_string(),
    }
}

fn player_bowling_text(state: &AppState) -> String {
    match &state.player_bowling {
        Some(r) => [
            format!("Matches:       {}", r.matches),
            format!("Wickets:       {}", r.wickets),
            format!("Runs conceded: {}", r.runs_conceded),
            format!("Overs:         {:.1}", r.overs),
            format!("Economy:       {:.2}", r.economy),
            format!("Average:       {:.2}", r.average),
        ]
        .join("\n"),
        None => "No bowling statistics".to_string(),
    }
}

fn batting_table_text(rows: &[cricket_terminal::batting::BattingRow]) -> String {
    if rows.is_empty() {
        return "No batting statistics".to_string();
    }
    let mut lines = vec![format!(
        "{:<22} {:>4} {:>6} {:>7} {:>7} {:>4} {:>4}",
        "Player", "Inn", "Runs", "Avg", "SR", "4s", "6s"
    )];
    lines.extend(rows.iter().map(|r| {
        format!(
            "{:<22} {:>4} {:>6} {:>7.2} {:>7.2} {:>4} {:>4}",
            fit(&r.player, 22),
            r.innings,
            r.total_runs,
            r.average,
            r.strike_rate,
            r.fours,
            r.sixes
        )
    }));
    lines.join("\n")
}

fn bowling_table_text(rows: &[cricket_terminal::bowling::BowlingRow]) -> String {
    if rows.is_empty() {
        return "No bowling statistics".to_string();
    }
    let mut lines = vec![format!(
        "{:<22} {:>4} {:>4} {:>6} {:>6} {:>6} {:>7}",
        "Player", "M", "Wkts", "Runs", "Overs", "Econ", "Avg"
    )];
    lines.extend(rows.iter().map(|r| {
        format!(
            "{:<22} {:>4} {:>4} {:>6} {:>6.1} {:>6.2} {:>7.2}",
            fit(&r.player, 22),
            r.matches,
            r.wickets,
            r.runs_conceded,
            r.overs,
            r.economy,
            r.average
        )
    }));
    lines.join("\n")
}

fn render_teams(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(12)])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(28),
            Constraint::Length(28),
            Constraint::Min(30),
        ])
        .split(rows[0]);

    let visible = columns[0].height.saturating_sub(2) as usize;
    let focused = Style::default().fg(Color::Yellow);
    let team_block = Block::default().title("Team").borders(Borders::ALL);
    let opponent_block = Block::default().title("Opponent").borders(Borders::ALL);
    let (team_block, opponent_block) = match state.team_focus {
        TeamFocus::Team => (team_block.border_style(focused), opponent_block),
        TeamFocus::Opponent => (team_block, opponent_block.border_style(focused)),
    };
    frame.render_widget(
        Paragraph::new(list_text(
            &state.team_names,
            state.team_selected,
            visible,
            |_| "",
        ))
        .block(team_block),
        columns[0],
    );
    frame.render_widget(
        Paragraph::new(list_text(
            &state.team_names,
            state.opponent_selected,
            visible,
            |_| "",
        ))
        .block(opponent_block),
        columns[1],
    );

    let detail = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Min(4),
            Constraint::Length(6),
        ])
        .split(columns[2]);

    let record = match state.selected_team_row() {
        Some(r) => format!(
            "Played: {}\nWon: {}   Lost: {}\nWin %: {:.2}",
            r.matches_played,
            r.wins,
            r.losses(),
            r.win_percentage
        ),
        None => "No team selected".to_string(),
    };
    frame.render_widget(
        Paragraph::new(record).block(
            Block::default()
                .title(state.selected_team().unwrap_or("Overall Record").to_string())
                .borders(Borders::ALL),
        ),
        detail[0],
    );

    let mut season_lines = vec![format!(
        "{:<10} {:>7} {:>5} {:>7}",
        "Season", "Matches", "Wins", "Win %"
    )];
    season_lines.extend(state.team_seasons.iter().map(|r| {
        format!(
            "{:<10} {:>7} {:>5} {:>7.2}",
            r.season, r.matches, r.wins, r.win_rate
        )
    }));
    frame.render_widget(
        Paragraph::new(season_lines.join("\n")).block(
            Block::default()
                .title("Season Performance")
                .borders(Borders::ALL),
        ),
        detail[1],
    );

    let h2h = match &state.head_to_head {
        Some(h) => format!(
            "Matches: {}\n{}: {}\n{}: {}\nTies / no result: {}",
            h.total_matches, h.team1, h.team1_wins, h.team2, h.team2_wins, h.ties
        ),
        None => "Pick two different teams".to_string(),
    };
    frame.render_widget(
        Paragraph::new(h2h).block(Block::default().title("Head to Head").borders(Borders::ALL)),
        detail[2],
    );

    let mut table = vec![format!(
        "{:<30} {:>7} {:>5} {:>6} {:>7}",
        "Team", "Played", "Won", "Lost", "Win %"
    )];
    table.extend(state.teams.iter().map(|r| {
        format!(
            "{:<30} {:>7} {:>5} {:>6} {:>7.2}",
            fit(&r.team, 30),
            r.matches_played,
            r.wins,
            r.losses(),
            r.win_percentage
        )
    }));
    frame.render_widget(
        Paragraph::new(table.join("\n"))
            .block(Block::default().title("All Teams").borders(Borders::ALL)),
        rows[1],
    );
}

fn render_insights(frame: &mut Frame, area: Rect, state: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(4)])
        .split(columns[0]);

    let toss = match &state.toss {
        Some(t) => format!(
            "Matches: {}\nToss winner also won: {}\nWin %: {:.2}",
            t.total_matches, t.toss_winner_won_match, t.win_percentage
        ),
        None => "No matches".to_string(),
    };
    frame.render_widget(
        Paragraph::new(toss).block(Block::default().title("Toss Impact").borders(Borders::ALL)),
        left[0],
    );

    let venues = &state.venues[..state.venues.len().min(state.venue_rows)];
    let venue_area = left[1];
    let visible = venue_area.height.saturating_sub(3) as usize;
    let (start, end) = visible_range(state.insights_scroll, venues.len(), visible);
    let mut lines = vec![format!("  {:<44} {:>7}", "Venue", "Matches")];
    for idx in start..end {
        let prefix = if idx == state.insights_scroll { "> " } else { "  " };
        lines.push(format!(
            "{prefix}{:<44} {:>7}",
            fit(&venues[idx].venue, 44),
            venues[idx].matches_played
        ));
    }
    frame.render_widget(
        Paragraph::new(lines.join("\n")).block(
            Block::default()
                .title(format!("Top {} Venues", state.venue_rows))
                .borders(Borders::ALL),
        ),
        venue_area,
    );

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[1]);
    frame.render_widget(season_chart(state), right[0]);

    let mut champions = vec![format!("{:<8} {:<24} {}", "Season", "Winner", "Venue")];
    champions.extend(state.champions.iter().map(|r| {
        format!(
            "{:<8} {:<24} {}",
            r.season,
            fit(r.winner.as_deref().unwrap_or("No result"), 24),
            r.venue
        )
    }));
    frame.render_widget(
        Paragraph::new(champions.join("\n")).block(
            Block::default()
                .title("Season Winners (last match)")
                .borders(Borders::ALL),
        ),
        right[1],
    );
}

fn render_compare(frame: &mut Frame, area: Rect, state: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(32), Constraint::Min(40)])
        .split(area);

    let list = Paragraph::new(list_text(
        &state.players,
        state.compare_cursor,
        columns[0].height.saturating_sub(2) as usize,
        |name| {
            if state.compare_selection.iter().any(|p| p == name) {
                "[x] "
            } else {
                "[ ] "
            }
        },
    ))
    .block(
        Block::default()
            .title(format!(
                "Select players ({}/5)",
                state.compare_selection.len()
            ))
            .borders(Borders::ALL),
    );
    frame.render_widget(list, columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[1]);

    let (batting, bowling) = match &state.comparison {
        Some(cmp) => (
            batting_table_text(&cmp.batting),
            bowling_table_text(&cmp.bowling),
        ),
        None => {
            let hint = "Select 2 to 5 players with Space".to_string();
            (hint.clone(), hint)
        }
    };
    frame.render_widget(
        Paragraph::new(batting).block(
            Block::default()
                .title("Batting Comparison")
                .borders(Borders::ALL),
        ),
        right[0],
    );
    frame.render_widget(
        Paragraph::new(bowling).block(
            Block::default()
                .title("Bowling Comparison")
                .borders(Borders::ALL),
        ),
        right[1],
    );
}

fn list_text<'a>(
    items: &'a [String],
    selected: usize,
    visible: usize,
    marker: impl Fn(&'a str) -> &'static str,
) -> Text<'a> {
    if items.is_empty() {
        return Text::from("Nothing to show");
    }
    let (start, end) = visible_range(selected, items.len(), visible.max(1));
    let lines: Vec<Line> = (start..end)
        .map(|idx| {
            let name = items[idx].as_str();
            let text = format!("{}{}", marker(name), name);
            if idx == selected {
                Line::styled(
                    format!("> {text}"),
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Line::raw(format!("  {text}"))
            }
        })
        .collect();
    Text::from(lines)
}

fn visible_range(selected: usize, total: usize, visible: usize) -> (usize, usize) {
    if total == 0 {
        return (0, 0);
    }
    if total <= visible {
        return (0, total);
    }

    let mut start = selected.saturating_sub(visible / 2);
    if start + visible > total {
        start = total - visible;
    }
    (start, start + visible)
}

fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn console_text(state: &AppState) -> String {
    if state.logs.is_empty() {
        return "No messages yet".to_string();
    }
    let skip = state.logs.len().saturating_sub(3);
    state
        .logs
        .iter()
        .skip(skip)
        .cloned()
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "Cricket Terminal - Help",
        "",
        "Global:",
        "  1-5          Home / Players / Teams / Insights / Compare",
        "  e            Export all tables to xlsx",
        "  ?            Toggle help",
        "  q            Quit",
        "",
        "Lists:",
        "  j/k or ↑/↓   Move selection",
        "  Tab          Players: batting/bowling table",
        "               Teams: team/opponent list",
        "  Space        Compare: toggle player (max 5)",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
