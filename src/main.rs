//! Graphdeck - a menu-driven terminal window for quick graphs.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use graphdeck::{
    app::{App, Mode, Theme},
    config::ExportLayoutConfig,
    curves::{self, CurveKind},
    custom::parse_custom,
    dialog::TextField,
    export,
    menu::MenuAction,
    plot::PlotRequest,
    ui,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "graphdeck", version)]
#[command(about = "A menu-driven terminal window for plotting curves and custom data", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    /// Image (png/jpg) or CSV file to open
    file: Option<PathBuf>,

    /// Enable logging to specified file
    #[arg(long, global = true)]
    log: Option<PathBuf>,

    /// Color theme
    #[arg(long, value_enum, default_value_t = Theme::GruvboxDark)]
    theme: Theme,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in curves
    List,

    /// Write a graph's data to a CSV file
    Export {
        #[command(flatten)]
        source: SourceArgs,

        /// Destination CSV file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Save a graph as a PNG or JPEG image
    Render {
        #[command(flatten)]
        source: SourceArgs,

        /// Destination image (.png, .jpg or .jpeg)
        #[arg(short, long)]
        output: PathBuf,

        /// Image width in pixels
        #[arg(long, default_value_t = 640)]
        width: u32,

        /// Image height in pixels
        #[arg(long, default_value_t = 480)]
        height: u32,
    },
}

#[derive(clap::Args, Debug)]
struct SourceArgs {
    /// Built-in curve
    #[arg(value_enum, conflicts_with_all = ["x", "y"])]
    curve: Option<CurveKind>,

    /// Comma-separated X values for a custom graph
    #[arg(long, requires = "y", allow_hyphen_values = true)]
    x: Option<String>,

    /// Comma-separated Y values for a custom graph
    #[arg(long, requires = "x", allow_hyphen_values = true)]
    y: Option<String>,
}

impl SourceArgs {
    fn resolve(&self) -> Result<PlotRequest> {
        match (self.curve, &self.x, &self.y) {
            (Some(kind), _, _) => Ok(curves::generate(kind)),
            (None, Some(x), Some(y)) => Ok(parse_custom(x, y)?),
            _ => bail!("Give a curve name or both --x and --y"),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        // Start each session with an empty log
        std::fs::File::create(log_path)?;
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Graphdeck");
    }

    if let Some(command) = args.command {
        return run_command(command);
    }

    // Validate path if provided
    if let Some(ref path) = args.file {
        if !path.exists() {
            eprintln!("Error: Path not found: {}", path.display());
            std::process::exit(1);
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(args.file, args.theme);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Graphdeck exited");
    }

    Ok(())
}

fn run_command(command: Command) -> Result<()> {
    match command {
        Command::List => {
            for kind in CurveKind::ALL {
                println!("{:<16}{}", kind.id(), kind.title());
            }
        },
        Command::Export { source, output } => {
            let request = source.resolve()?;
            export::write_csv(&output, request.x(), request.y())?;
            println!("Exported {} rows to {}", request.len(), output.display());
        },
        Command::Render {
            source,
            output,
            width,
            height,
        } => {
            let request = source.resolve()?;
            let layout = ExportLayoutConfig {
                width,
                height,
                ..ExportLayoutConfig::default()
            };
            export::save_plot(&request, &output, &layout)?;
            println!("Saved '{}' to {}", request.title(), output.display());
        },
    }
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            // Ctrl-C quits from anywhere
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(());
            }

            match app.mode() {
                // File browser mode
                Mode::FileBrowser => match key.code {
                    KeyCode::Esc | KeyCode::Char('q') => {
                        app.file_browser.close();
                        app.status = "Cancelled".to_string();
                    },
                    KeyCode::Up | KeyCode::Char('k') => app.file_browser.cursor_up(),
                    KeyCode::Down | KeyCode::Char('j') => app.file_browser.cursor_down(),
                    KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => app.browser_select(),
                    KeyCode::Char('h') | KeyCode::Left | KeyCode::Backspace => {
                        app.browser_parent()
                    },
                    KeyCode::Char('.') => app.toggle_hidden(),
                    _ => {},
                },

                // Path prompt mode
                Mode::PathPrompt => match key.code {
                    KeyCode::Esc => {
                        app.prompt.close();
                        app.status = "Cancelled".to_string();
                    },
                    KeyCode::Enter => app.submit_path(),
                    _ => edit_field(&mut app.prompt.field, key),
                },

                // Custom data dialog mode
                Mode::CustomInput => match key.code {
                    KeyCode::Esc => {
                        app.custom.close();
                        app.status = "Cancelled".to_string();
                    },
                    KeyCode::Enter => app.submit_custom(),
                    KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                        app.custom.toggle_focus()
                    },
                    _ => edit_field(app.custom.focused_mut(), key),
                },

                // Menu mode
                Mode::Menu => match key.code {
                    KeyCode::Esc | KeyCode::F(10) | KeyCode::Char('m') => app.menu.close(),
                    KeyCode::Left | KeyCode::Char('h') => app.menu.prev_menu(),
                    KeyCode::Right | KeyCode::Char('l') => app.menu.next_menu(),
                    KeyCode::Up | KeyCode::Char('k') => app.menu.cursor_up(),
                    KeyCode::Down | KeyCode::Char('j') => app.menu.cursor_down(),
                    KeyCode::Enter => app.activate_menu(),
                    KeyCode::Char('q') => return Ok(()),
                    _ => {},
                },

                // Normal mode
                Mode::Normal => match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

                    // Menu
                    (_, KeyCode::F(10)) | (KeyModifiers::NONE, KeyCode::Char('m')) => {
                        app.menu.open();
                    },

                    // Built-in curves
                    (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='8')) => {
                        let index = c as usize - '1' as usize;
                        app.apply(MenuAction::Plot(CurveKind::ALL[index]));
                    },

                    // Features
                    (KeyModifiers::NONE, KeyCode::Char('i')) => app.apply(MenuAction::Custom),
                    (KeyModifiers::NONE, KeyCode::Char('s')) => app.apply(MenuAction::Save),
                    (KeyModifiers::NONE, KeyCode::Char('e')) => app.apply(MenuAction::Export),
                    (KeyModifiers::NONE, KeyCode::Char('o')) => app.apply(MenuAction::OpenImage),
                    (_, KeyCode::Char('O')) => app.apply(MenuAction::OpenData),
                    (KeyModifiers::NONE, KeyCode::Char('x')) => app.apply(MenuAction::Reset),
                    (KeyModifiers::NONE, KeyCode::Char('c')) => app.cycle_color(),
                    (_, KeyCode::Char('T')) => app.cycle_theme(),
                    (_, KeyCode::Char('?')) => {
                        app.status = "Help: F10/m=menu, 1-8=graphs, i=custom, s=save, e=export, o=open image, O=open CSV, x=reset, c=color, y=copy, T=theme, q=quit".to_string();
                    },

                    // Clipboard
                    (KeyModifiers::NONE, KeyCode::Char('y')) => app.copy_data(),

                    // Escape - close overlays
                    (KeyModifiers::NONE, KeyCode::Esc) => app.close_overlay(),

                    _ => {},
                },
            }
        }
    }
}

/// Apply an editing key to a text field.
fn edit_field(field: &mut TextField, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            field.input(c)
        },
        KeyCode::Backspace => field.backspace(),
        KeyCode::Delete => field.delete(),
        KeyCode::Left => field.move_left(),
        KeyCode::Right => field.move_right(),
        KeyCode::Home => field.home(),
        KeyCode::End => field.end(),
        _ => {},
    }
}
