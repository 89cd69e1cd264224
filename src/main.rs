//! tocsync: a floating table of contents for markdown documents.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use ratatui::crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tocsync::{app_state, config, input, navigation, ui};

const FRAME: Duration = Duration::from_millis(50);

#[derive(Parser)]
#[command(name = "tocsync")]
#[command(about = "Floating table of contents for markdown documents", long_about = None)]
struct Args {
    /// Files or directories to show
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Starting location; its fragment route becomes the link base path
    #[arg(long)]
    location: Option<String>,

    /// Print the panel model of each document as JSON instead of starting the viewer
    #[arg(long)]
    json: bool,

    /// File extensions to match
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,
}

#[derive(Serialize)]
struct PanelDump {
    document: String,
    location: String,
    panel: Option<navigation::PanelModel>,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut cfg = config::Config::load();

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions = args.ext;
    }

    let paths = input::find_documents(args.paths, &cfg.file_extensions)?;

    if paths.is_empty() {
        eprintln!("No matching files found");
        return Ok(());
    }

    let mut documents = Vec::new();
    for path in &paths {
        match input::load_document(path) {
            Ok(document) => documents.push(document),
            Err(e) => log::warn!("skipping {}: {e}", path.display()),
        }
    }

    if documents.is_empty() {
        eprintln!("No documents could be loaded");
        return Ok(());
    }

    if args.json {
        let dumps: Vec<PanelDump> = documents
            .iter_mut()
            .map(|document| {
                let location = args
                    .location
                    .clone()
                    .unwrap_or_else(|| app_state::route_for(document));
                let panel =
                    navigation::panel_for_document(document, &location, &cfg.fallback_title);
                PanelDump {
                    document: document.name.clone(),
                    location,
                    panel,
                }
            })
            .collect();
        let json = serde_json::to_string_pretty(&dumps).map_err(io::Error::other)?;
        println!("{json}");
        return Ok(());
    }

    let state = app_state::AppState::new(documents, &cfg, args.location);
    run_tui(state)
}

fn run_tui(mut app: app_state::AppState) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

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

    app.controller.teardown();
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut app_state::AppState,
) -> io::Result<()> {
    let mut last = Instant::now();
    loop {
        let now = Instant::now();
        app.controller.tick(now - last);
        last = now;

        let size = terminal.size()?;
        let (viewport, _) = ui::layout(ratatui::layout::Rect::new(0, 0, size.width, size.height));
        app.resize(viewport);
        app.sync();

        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(FRAME)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                let page = isize::try_from(app.viewport.height.max(1)).unwrap_or(1);
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-1),
                    KeyCode::Down | KeyCode::Char('j') => app.scroll_by(1),
                    KeyCode::PageUp => app.scroll_by(-page),
                    KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_by(page),
                    KeyCode::Home => app.scroll_to(0),
                    KeyCode::End => app.scroll_to(usize::MAX),
                    KeyCode::Tab => app.next_document(),
                    KeyCode::BackTab => app.prev_document(),
                    KeyCode::Char('n') => app.select_next(),
                    KeyCode::Char('p') => app.select_prev(),
                    KeyCode::Enter => app.follow_selected(),
                    _ => {}
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => app.mouse_down(mouse.column, mouse.row),
                MouseEventKind::Drag(MouseButton::Left) => app.mouse_drag(mouse.column, mouse.row),
                MouseEventKind::Up(MouseButton::Left) => app.mouse_up(),
                MouseEventKind::ScrollDown => app.scroll_by(3),
                MouseEventKind::ScrollUp => app.scroll_by(-3),
                _ => {}
            },
            _ => {}
        }
    }
}
