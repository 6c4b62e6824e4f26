//! fastscroll: section-aware fast scrolling for long documents.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use fastscroll::app_state::{Affordance, AppState};
use fastscroll::markers::MarkerPlan;
use fastscroll::section::SectionIndex;
use fastscroll::{config, formats, input, logging, ui};
use ratatui::crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "fastscroll")]
#[command(about = "Section-aware fast scrolling for long documents", long_about = None)]
struct Args {
    /// Files or directories to view
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Load section markers from a JSON file instead of document headings
    #[arg(long, value_name = "FILE")]
    markers: Option<PathBuf>,

    /// Print the section markers as JSON and exit
    #[arg(long)]
    print_markers: bool,

    /// Navigation affordance to show
    #[arg(long, value_enum)]
    affordance: Option<Affordance>,

    /// File extensions to match
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,

    /// Write logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Log level when `RUST_LOG` is unset
    #[arg(long, default_value = "info")]
    log_level: tracing::Level,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    if let Some(log_file) = &args.log_file {
        logging::init_to_file(log_file, args.log_level)?;
    }
    let mut cfg = config::Config::load();

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions = args.ext;
    }
    let affordance = match args.affordance {
        Some(affordance) => affordance,
        None => cfg.affordance.parse().unwrap_or_else(|err: String| {
            warn!(%err, "falling back to dots");
            Affordance::Dots
        }),
    };

    let paths = input::find_documents(args.paths, &cfg.file_extensions)?;
    if paths.is_empty() {
        eprintln!("No matching files found");
        return Ok(());
    }

    let format = formats::markdown::MarkdownFormat;
    let mut documents = Vec::new();
    for path in &paths {
        match input::load_document(path, &format) {
            Ok(document) => documents.push(document),
            Err(err) => warn!(path = %path.display(), %err, "skipping unreadable document"),
        }
    }
    let document = input::Document::merge(documents);

    let plan = match &args.markers {
        Some(path) => MarkerPlan::load(path)?,
        None => MarkerPlan::from_headings(&document.headings, cfg.max_heading_level),
    };

    if args.print_markers {
        println!("{}", plan.to_json().map_err(io::Error::other)?);
        return Ok(());
    }

    let markers = plan.into_markers().map_err(io::Error::other)?;
    let sections = SectionIndex::from_markers(markers).map_err(io::Error::other)?;
    if sections.is_empty() {
        eprintln!("No sections found in documents");
        return Ok(());
    }
    info!(
        rows = document.rows.len(),
        sections = sections.len(),
        "loaded documents"
    );

    let app = AppState::new(document.rows, sections, affordance, &cfg);
    run_tui(app, &cfg)
}

fn run_tui(mut app: AppState, cfg: &config::Config) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, cfg);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    cfg: &config::Config,
) -> io::Result<()> {
    let start = Instant::now();
    let tick = Duration::from_millis(cfg.tick_ms.max(1));

    loop {
        app.tick(elapsed_ms(start));
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(tick)? {
            continue;
        }
        let now = elapsed_ms(start);
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-1, now),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_by(1, now),
                KeyCode::PageUp => app.page(false, now),
                KeyCode::PageDown => app.page(true, now),
                KeyCode::Home => app.scroll_by(isize::MIN, now),
                KeyCode::End => app.scroll_by(isize::MAX, now),
                KeyCode::Char('n') => app.jump_section(true, now),
                KeyCode::Char('p') => app.jump_section(false, now),
                KeyCode::Tab => {
                    app.affordance = app.affordance.next();
                    app.message = None;
                }
                _ => {}
            },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    app.on_mouse_down(mouse.column, mouse.row, now);
                }
                MouseEventKind::Drag(MouseButton::Left) => app.on_mouse_drag(mouse.row, now),
                MouseEventKind::Up(MouseButton::Left) => app.on_mouse_up(mouse.row, now),
                MouseEventKind::ScrollDown => app.on_wheel(mouse.column, mouse.row, true, now),
                MouseEventKind::ScrollUp => app.on_wheel(mouse.column, mouse.row, false, now),
                _ => {}
            },
            _ => {}
        }
    }
}
