//! Ratatui-based terminal UI.
//!
//! Shows the statistics, the graded results table, a grade-distribution bar
//! chart, and the pass/fail split for one Record Set. Keys:
//! `s` load sample, `r` reload file, `e` export, `↑/↓` scroll, `q` quit.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{BarChart, Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use crate::app::pipeline::{Analysis, run_analysis};
use crate::cli::TuiArgs;
use crate::config::Settings;
use crate::data::sample_records;
use crate::domain::{GradeDistribution, RecordSet};
use crate::error::AppError;
use crate::io::export::write_results_csv;
use crate::io::ingest::load_records_csv;
use crate::report::fmt_marks;

/// Start the TUI.
pub fn run(args: &TuiArgs, settings: Settings) -> Result<(), AppError> {
    let mut app = App::new(args.file.clone(), settings);

    let _guard = TerminalGuard::new()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    settings: Settings,
    file: Option<PathBuf>,
    source: String,
    analysis: Option<Analysis>,
    scroll: usize,
    status: String,
}

impl App {
    fn new(file: Option<PathBuf>, settings: Settings) -> Self {
        let mut app = Self {
            settings,
            file,
            source: String::new(),
            analysis: None,
            scroll: 0,
            status: String::new(),
        };
        match app.file.clone() {
            Some(path) => app.load_file(&path),
            None => app.load_sample(),
        }
        app
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(4, format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the app should quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down => {
                let rows = self.analysis.as_ref().map(|a| a.grades.len()).unwrap_or(0);
                if self.scroll + 1 < rows {
                    self.scroll += 1;
                }
            }
            KeyCode::Char('s') => self.load_sample(),
            KeyCode::Char('r') => match self.file.clone() {
                Some(path) => self.load_file(&path),
                None => self.status = "No file to reload (started without --file).".to_string(),
            },
            KeyCode::Char('e') => self.export(),
            _ => {}
        }
        false
    }

    fn load_sample(&mut self) {
        self.set_records(sample_records(), "sample".to_string());
        self.status = "Loaded sample data.".to_string();
    }

    fn load_file(&mut self, path: &Path) {
        match load_records_csv(path) {
            Ok(ingested) => {
                self.set_records(ingested.records, path.display().to_string());
                self.status = format!(
                    "Loaded {} rows ({} skipped).",
                    ingested.rows_read,
                    ingested.skipped.len()
                );
            }
            Err(err) => {
                tracing::warn!(error = %err, "csv load failed");
                self.set_records(RecordSet::new(), path.display().to_string());
                self.status = err.to_string();
            }
        }
    }

    fn set_records(&mut self, records: RecordSet, source: String) {
        self.analysis = run_analysis(&records);
        self.source = source;
        self.scroll = 0;
    }

    fn export(&mut self) {
        let Some(analysis) = &self.analysis else {
            self.status = "Nothing to export.".to_string();
            return;
        };
        let path = timestamped_export_path(&self.settings.export_path, Local::now().naive_local());
        self.status = match write_results_csv(&path, &analysis.grades) {
            Ok(()) => format!("Exported results to {}", path.display()),
            Err(err) => err.to_string(),
        };
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("gradebook", Style::default().fg(Color::Cyan)),
            Span::raw(format!(" | source: {}", self.source)),
        ]));
        lines.push(Line::from(Span::styled(
            stats_line(self.analysis.as_ref()),
            Style::default().fg(Color::Gray),
        )));

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let Some(analysis) = &self.analysis else {
            let msg = Paragraph::new(crate::report::NO_DATA_MESSAGE)
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default().title("Results").borders(Borders::ALL));
            frame.render_widget(msg, area);
            return;
        };

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(8)])
            .split(columns[1]);

        self.draw_table(frame, columns[0], analysis);
        draw_distribution(frame, right[0], &analysis.distribution);
        draw_pass_fail(frame, right[1], analysis);
    }

    fn draw_table(&self, frame: &mut ratatui::Frame<'_>, area: Rect, analysis: &Analysis) {
        let header = Row::new(vec!["Name", "Marks", "Grade"])
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        let rows = analysis.grades.iter().skip(self.scroll).map(|g| {
            let style = if g.score >= crate::domain::PASS_THRESHOLD {
                Style::default()
            } else {
                Style::default().fg(Color::Red)
            };
            Row::new(vec![
                Cell::from(g.name.clone()),
                Cell::from(fmt_marks(g.score)),
                Cell::from(g.grade.as_str()),
            ])
            .style(style)
        });

        let table = Table::new(
            rows,
            [Constraint::Min(10), Constraint::Length(8), Constraint::Length(5)],
        )
        .header(header)
        .block(Block::default().title("Results").borders(Borders::ALL));
        frame.render_widget(table, area);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ scroll  s sample  r reload  e export  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn draw_distribution(frame: &mut ratatui::Frame<'_>, area: Rect, dist: &GradeDistribution) {
    let bars = distribution_bars(dist);
    let chart = BarChart::default()
        .block(Block::default().title("Grade distribution").borders(Borders::ALL))
        .data(bars.as_slice())
        .bar_width(5)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));
    frame.render_widget(chart, area);
}

fn draw_pass_fail(frame: &mut ratatui::Frame<'_>, area: Rect, analysis: &Analysis) {
    let pf = &analysis.pass_fail;
    let lines = vec![
        Line::from(Span::styled(
            format!("Passed: {}", pf.passed.len()),
            Style::default().fg(Color::Green),
        )),
        Line::from(pf.passed.join(", ")),
        Line::from(Span::styled(
            format!("Failed: {}", pf.failed.len()),
            Style::default().fg(Color::Red),
        )),
        Line::from(pf.failed.join(", ")),
    ];
    let p = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Pass / Fail").borders(Borders::ALL));
    frame.render_widget(p, area);
}

fn stats_line(analysis: Option<&Analysis>) -> String {
    let Some(analysis) = analysis else {
        return "n=0".to_string();
    };
    let s = &analysis.statistics;
    let fmt_opt = |v: Option<f64>| v.map(|v| format!("{v:.2}")).unwrap_or_else(|| "N/A".to_string());
    let fmt_ext = |e: Option<&crate::domain::Extreme>| {
        e.map(|e| format!("{} ({})", fmt_marks(e.value), e.names.join(", ")))
            .unwrap_or_else(|| "N/A".to_string())
    };
    format!(
        "n={} | mean={} | median={} | max={} | min={}",
        s.count,
        fmt_opt(s.mean),
        fmt_opt(s.median),
        fmt_ext(s.max.as_ref()),
        fmt_ext(s.min.as_ref()),
    )
}

fn distribution_bars(dist: &GradeDistribution) -> Vec<(&'static str, u64)> {
    dist.iter().map(|(g, c)| (g.as_str(), c as u64)).collect()
}

/// `results.csv` + 2026-01-02 03:04:05 -> `results_20260102_030405.csv`,
/// kept next to the configured export path.
fn timestamped_export_path(base: &Path, now: NaiveDateTime) -> PathBuf {
    let stem = base
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("results");
    base.with_file_name(format!("{stem}_{}.csv", now.format("%Y%m%d_%H%M%S")))
}
