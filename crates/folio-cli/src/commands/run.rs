use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

use folio_core::content::LinkTarget;
use folio_core::{AppConfig, Location};
use folio_tui::{
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event, Action},
    keymap::Keymap,
    load_theme,
    widgets::render_app,
    App,
};

pub async fn run(config: Arc<AppConfig>, route: &str) -> Result<()> {
    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);

    let location = Location::parse(route);
    info!("Opening {}", location);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Folio"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Load theme from config
    let theme = load_theme(&config.ui.theme);

    let mut app = App::new(config.clone(), theme, location);

    // Create event handler with animation FPS support
    let event_handler = EventHandler::with_animation_fps(
        config.ui.tick_rate_ms,
        config.ui.scroll.animation_fps,
    );

    let result = event_loop(&mut terminal, &mut app, &event_handler, &keymap);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
    keymap: &Keymap,
) -> Result<()> {
    // Checked at the end of each iteration to pick the next poll rate
    let mut needs_fast_update = false;

    loop {
        app.frame(Instant::now());

        terminal.draw(|frame| render_app(frame, app))?;

        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };

        if let Some(event) = event {
            let action = match event {
                AppEvent::Key(key) => handle_key_event(key, app, keymap),
                AppEvent::Mouse(mouse) => handle_mouse_event(mouse, app),
                // Layout is recomputed on the next draw
                AppEvent::Resize(_, _) | AppEvent::Tick => Action::None,
            };

            if action != Action::None {
                if let Some(target) = app.handle_action(action, Instant::now()) {
                    open_target(app, target);
                }
            }
        }

        needs_fast_update = app.needs_update();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Hand an outbound link to the system opener. Failures only reach the status bar.
fn open_target(app: &mut App, target: LinkTarget) {
    let opened = match target {
        LinkTarget::External(href) => open::that(href).map(|_| href.to_string()),
        LinkTarget::Asset(asset) => {
            let path = app.config.asset_path(asset);
            if path.exists() {
                open::that(&path).map(|_| path.display().to_string())
            } else {
                Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("{} not found", path.display()),
                ))
            }
        }
        LinkTarget::Anchor(_) => return,
    };

    match opened {
        Ok(what) => {
            info!("Opened {}", what);
            app.set_status(format!("Opened {}", what));
        }
        Err(e) => {
            warn!("Failed to open link: {}", e);
            app.set_error(format!("Failed to open link: {}", e));
        }
    }
}
