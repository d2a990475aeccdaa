use anyhow::Result;
use chrono::{Local, Utc};
use cr_check_config::Config;
use cr_check_formatter::{
    AnalysisResult, Audience, FormattedReports, Taxonomy, export, io,
};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
};
use std::{env, io::stdout, path::PathBuf, process};

mod render;

struct App {
    analysis: AnalysisResult,
    reports: FormattedReports,
    active: Audience,
    scroll: u16,
    export_dir: PathBuf,
    status: Option<String>,
}

impl App {
    fn new(analysis: AnalysisResult, taxonomy: &Taxonomy, export_dir: PathBuf) -> Self {
        let reports = analysis.format_reports(taxonomy);
        Self {
            analysis,
            reports,
            active: Audience::Comprehensive,
            scroll: 0,
            export_dir,
            status: None,
        }
    }

    fn next_tab(&mut self) {
        self.active = self.active.next();
        self.scroll = 0;
    }

    fn previous_tab(&mut self) {
        self.active = self.active.previous();
        self.scroll = 0;
    }

    fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    fn export(&mut self) {
        let path = self
            .export_dir
            .join(export::file_name(Utc::now().timestamp_millis()));
        let text = export::render_text(&self.analysis, &generated_at());
        self.status = Some(match io::write_export(&path, &text) {
            Ok(()) => format!("Exported to {}", path.display()),
            Err(e) => {
                log::error!("export failed: {e}");
                format!("Export failed: {e}")
            }
        });
    }
}

fn generated_at() -> String {
    Local::now().format("%Y년 %-m월 %-d일 %H:%M").to_string()
}

fn usage(program: &str) -> ! {
    eprintln!("Usage: {program} <analysis.json> [--export <path>]");
    process::exit(1);
}

fn load_config() -> Config {
    let config_path = Config::config_path();
    match Config::load() {
        Ok(Some(config)) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        Ok(None) => {
            log::info!(
                "No config file at {}, using built-in taxonomy",
                config_path.display()
            );
            Config::default()
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    }
}

fn build_taxonomy(config: &Config) -> Taxonomy {
    match Taxonomy::from_patterns(&config.citation_patterns, config.heading_triggers.clone()) {
        Ok(taxonomy) => taxonomy,
        Err(e) => {
            eprintln!(
                "Error: Invalid citation pattern in '{}': {e}",
                Config::config_path().display()
            );
            process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("cr-check-cli");

    let (analysis_path, export_path) = match args.as_slice() {
        [_, path] => (PathBuf::from(path), None),
        [_, path, flag, out] if flag == "--export" => {
            (PathBuf::from(path), Some(PathBuf::from(out)))
        }
        _ => usage(program),
    };

    let analysis = match io::load_analysis(&analysis_path) {
        Ok(analysis) => analysis,
        Err(e) => {
            eprintln!(
                "Error: Could not load analysis '{}': {e}",
                analysis_path.display()
            );
            process::exit(1);
        }
    };

    if let Some(out) = export_path {
        let text = export::render_text(&analysis, &generated_at());
        io::write_export(&out, &text)?;
        println!("Exported to {}", out.display());
        return Ok(());
    }

    let config = load_config();
    let taxonomy = build_taxonomy(&config);
    let mut app = App::new(analysis, &taxonomy, config.export_dir());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
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

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => app.next_tab(),
                KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => app.previous_tab(),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
                KeyCode::Char('e') => app.export(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(f.area());

    // Article panel
    let info = &app.analysis.article_info;
    let article = Paragraph::new(vec![
        Line::from(Span::styled(
            info.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            info.url.clone(),
            Style::default().fg(Color::Yellow),
        )),
    ])
    .block(Block::default().borders(Borders::ALL).title("Article"));
    f.render_widget(article, chunks[0]);

    // Audience tabs
    let titles: Vec<Line> = Audience::ALL
        .iter()
        .map(|a| Line::from(a.label()))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.active.index())
        .block(Block::default().borders(Borders::ALL).title("Reports"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));
    f.render_widget(tabs, chunks[1]);

    // Report body
    let mut body = vec![Line::from(Span::styled(
        app.active.description(),
        Style::default().fg(Color::DarkGray),
    ))];
    body.push(Line::default());
    body.extend(render::report_lines(app.reports.get(app.active)));

    let content = Paragraph::new(body)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(app.active.short_label()),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    f.render_widget(content, chunks[2]);

    // Instructions / status
    let help_text = match &app.status {
        Some(status) => Line::from(Span::raw(status.clone())),
        None => Line::from(vec![
            Span::raw("q: Quit | "),
            Span::raw("Tab/→: Next report | "),
            Span::raw("←: Previous | "),
            Span::raw("↑/↓: Scroll | "),
            Span::raw("e: Export text"),
        ]),
    };
    f.render_widget(Paragraph::new(help_text), chunks[3]);
}
