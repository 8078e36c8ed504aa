mod preview;
mod staging;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use quizmark_config::Config;
use quizmark_engine::{QuestionParser, QuestionParsingResult};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
};

use preview::QuestionRow;

struct App {
    result: QuestionParsingResult,
    rows: Vec<QuestionRow>,
    list_state: ListState,
    show_issues: bool,
}

impl App {
    fn new(result: QuestionParsingResult) -> Self {
        let rows = preview::question_rows(&result);
        let mut list_state = ListState::default();
        if !rows.is_empty() {
            list_state.select(Some(0));
        }

        Self {
            result,
            // Nothing to browse, so open on the reasons
            show_issues: rows.is_empty(),
            rows,
            list_state,
        }
    }

    fn next_question(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.rows.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn previous_question(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.rows.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    fn toggle_issues(&mut self) {
        self.show_issues = !self.show_issues;
    }

    fn detail(&self) -> Vec<String> {
        self.list_state
            .selected()
            .and_then(|i| self.rows.get(i))
            .and_then(|row| preview::question_at(&self.result, row))
            .map(preview::detail_lines)
            .unwrap_or_default()
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("quizmark-cli");

    let (input, json) = match args.as_slice() {
        [_, path] => (PathBuf::from(path), false),
        [_, path, flag] if flag == "--json" => (PathBuf::from(path), true),
        _ => {
            eprintln!("Usage: {program} <questions.txt> [--json]");
            process::exit(1);
        }
    };

    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Fix or remove {}", Config::config_path().display());
            process::exit(1);
        }
    };

    let text = std::fs::read_to_string(&input)
        .with_context(|| format!("Failed to read question bank {}", input.display()))?;

    let mut result = QuestionParser::new(config.media.clone()).parse(&text);
    let staged = staging::stage_media(&mut result, &staging::search_dirs(&config, &input));
    info!(
        "Staged {staged} of {} media files",
        result.statistics.total_media_files
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(result);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_question(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_question(),
                KeyCode::Char('e') => app.toggle_issues(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(rows[0]);

    // Question list panel
    let items: Vec<ListItem> = app
        .rows
        .iter()
        .map(|row| {
            let indent = "  ".repeat(row.depth);
            ListItem::new(vec![Line::from(vec![Span::raw(format!(
                "{indent}{}",
                row.title
            ))])])
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Questions"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(list, chunks[0], &mut app.list_state);

    // Detail or issues panel
    let (title, lines) = if app.show_issues {
        ("Errors & warnings", preview::issue_lines(&app.result))
    } else {
        ("Question", app.detail())
    };

    let text: Vec<Line> = if lines.is_empty() {
        let empty = if app.show_issues {
            "No errors or warnings"
        } else {
            "No questions found. Press e to see why"
        };
        vec![Line::from(empty)]
    } else {
        lines.into_iter().map(|l| Line::from(vec![Span::raw(l)])).collect()
    };

    let content = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: true });

    f.render_widget(content, chunks[1]);

    // Status and instructions
    let status = vec![
        Line::from(preview::status_line(&app.result)),
        Line::from(vec![
            Span::raw("q: Quit | "),
            Span::raw("↑/k: Previous | "),
            Span::raw("↓/j: Next | "),
            Span::raw("e: Errors & warnings"),
        ]),
    ];

    f.render_widget(Paragraph::new(status).block(Block::default()), rows[1]);
}
