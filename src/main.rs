use vyapaar::app::{App, AppMessage};
use vyapaar::startup::{init_logging, AppConfig};
use vyapaar::ui;

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tokio::sync::mpsc;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const USAGE: &str = "\
Usage: vyapaar [OPTIONS]

Options:
  --width <COLS>  Lay out as if the terminal were COLS columns wide
  --log           Write logs to the cache directory (info level)
  --version       Print version and exit
  --help          Print this help and exit

Environment:
  VYAPAAR_BREAKPOINT, VYAPAAR_CELL_WIDTH, VYAPAAR_REPLY_DELAY_MS, VYAPAAR_LOG";

/// Command-line flags
#[derive(Debug, Default)]
struct CliArgs {
    log: bool,
    width_columns: Option<u16>,
}

fn parse_args() -> Result<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" => {
                println!("vyapaar {}", VERSION);
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            "--log" => parsed.log = true,
            "--width" => {
                let value = args
                    .next()
                    .ok_or_else(|| color_eyre::eyre::eyre!("--width needs a column count"))?;
                let columns = value
                    .parse::<u16>()
                    .map_err(|_| color_eyre::eyre::eyre!("invalid --width value: {}", value))?;
                parsed.width_columns = Some(columns);
            }
            other => {
                eprintln!("Ignoring unknown argument: {}", other);
            }
        }
    }
    Ok(parsed)
}

fn main() -> Result<()> {
    let args = parse_args()?;

    color_eyre::install()?;

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            let err = vyapaar::error::AppError::from(err);
            eprintln!("{}", err.user_message());
            AppConfig::default()
        }
    };

    if let Err(err) = init_logging(args.log) {
        eprintln!("{}", err.user_message());
    }
    tracing::info!("Starting vyapaar {}", VERSION);

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(config);
    if let Some(columns) = args.width_columns {
        app.force_width_columns(columns);
    }
    if let Ok(size) = terminal.size() {
        app.update_terminal_dimensions(size.width, size.height);
    }

    let result = runtime.block_on(run_app(&mut terminal, &mut app));

    // Pending replies must not outlive the runtime
    app.replies.cancel_all();
    restore_terminal(&mut terminal)?;

    if let Err(err) = &result {
        tracing::error!("Exited with error: {}", err);
    }
    result
}

/// Setup panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen, Show);
        original_hook(panic_info);
    }));
}

/// Restore terminal to normal mode
fn restore_terminal<B: ratatui::backend::Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            return Ok(());
        }

        let timeout = tokio::time::sleep(app.config.tick_interval());

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Resize(width, height))) => {
                        app.update_terminal_dimensions(width, height);
                    }
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Mouse(mouse))) => match mouse.kind {
                        MouseEventKind::Down(MouseButton::Left) => {
                            if let Some(action) = app.hit_registry.hit_test(mouse.column, mouse.row) {
                                app.handle_click(action);
                            }
                        }
                        MouseEventKind::Moved => {
                            if app.hit_registry.update_hover(mouse.column, mouse.row) {
                                app.mark_dirty();
                            }
                        }
                        _ => {}
                    },
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        tracing::warn!("Terminal event error: {}", err);
                    }
                    None => {
                        tracing::info!("Event stream closed");
                        return Ok(());
                    }
                }
            }

            Some(msg) = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(msg);
            }
        }
    }
}
