//! win32-screenshot CLI: capture windows and the desktop to PNG files
//!
//! Thin command-line wrapper over the library facade, useful for debugging
//! capture behavior without writing code.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "win32-screenshot")]
#[command(about = "Capture window and desktop screenshots to PNG")]
#[cfg_attr(not(windows), allow(dead_code))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg_attr(not(windows), allow(dead_code))]
enum Commands {
    /// Capture the currently focused window
    Foreground {
        /// Sub-rectangle to capture (left top right bottom)
        #[arg(long, num_args = 4, value_names = ["X1", "Y1", "X2", "Y2"])]
        area: Option<Vec<i32>>,
        /// Output file path (default: timestamped PNG in the working directory)
        #[arg(short, long)]
        out:  Option<PathBuf>,
    },
    /// Capture the visible screen
    Desktop {
        /// Sub-rectangle to capture (left top right bottom)
        #[arg(long, num_args = 4, value_names = ["X1", "Y1", "X2", "Y2"])]
        area: Option<Vec<i32>>,
        /// Output file path (default: timestamped PNG in the working directory)
        #[arg(short, long)]
        out:  Option<PathBuf>,
    },
    /// Capture the first window whose title matches the query
    Window {
        /// Title substring to search for (or a regex with --regex)
        query: String,
        /// Treat the query as a regex instead of a substring
        #[arg(long)]
        regex: bool,
        /// Seconds to wait after bringing the window to the foreground
        #[arg(long)]
        pause: Option<f64>,
        /// Sub-rectangle to capture (left top right bottom)
        #[arg(long, num_args = 4, value_names = ["X1", "Y1", "X2", "Y2"])]
        area:  Option<Vec<i32>>,
        /// Output file path (default: timestamped PNG in the working directory)
        #[arg(short, long)]
        out:   Option<PathBuf>,
    },
    /// Capture a window by its raw handle value
    Handle {
        /// Raw HWND value
        handle: isize,
        /// Seconds to wait after bringing the window to the foreground
        #[arg(long)]
        pause:  Option<f64>,
        /// Sub-rectangle to capture (left top right bottom)
        #[arg(long, num_args = 4, value_names = ["X1", "Y1", "X2", "Y2"])]
        area:   Option<Vec<i32>>,
        /// Output file path (default: timestamped PNG in the working directory)
        #[arg(short, long)]
        out:    Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Respects RUST_LOG; default level: info
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("win32_screenshot=info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    run(cli)
}

#[cfg(windows)]
fn run(cli: Cli) -> Result<()> {
    use std::time::Duration;

    use tracing::info;
    use win32_screenshot::{
        GdiProvider, Screenshot,
        model::{Rect, TitleQuery, WindowRef},
    };

    fn parse_area(area: Option<Vec<i32>>) -> Option<Rect> {
        area.map(|c| Rect::new(c[0], c[1], c[2], c[3]))
    }

    fn parse_pause(pause: Option<f64>) -> Option<Duration> {
        pause.map(Duration::from_secs_f64)
    }

    fn default_output() -> PathBuf {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        PathBuf::from(format!("screenshot_{timestamp}.png"))
    }

    let capture = Screenshot::new(GdiProvider::new());

    let (bitmap, out) = match cli.command {
        Commands::Foreground { area, out } => {
            let bitmap = match parse_area(area) {
                Some(rect) => capture.foreground_area(rect)?,
                None => capture.foreground()?,
            };
            (bitmap, out)
        }
        Commands::Desktop { area, out } => {
            let bitmap = match parse_area(area) {
                Some(rect) => capture.desktop_area(rect)?,
                None => capture.desktop()?,
            };
            (bitmap, out)
        }
        Commands::Window {
            query,
            regex,
            pause,
            area,
            out,
        } => {
            let query: TitleQuery = if regex {
                regex::Regex::new(&query)?.into()
            } else {
                query.into()
            };
            let pause = parse_pause(pause);
            let bitmap = match parse_area(area) {
                Some(rect) => capture.window_area(query, rect, pause)?,
                None => capture.window(query, pause)?,
            };
            (bitmap, out)
        }
        Commands::Handle {
            handle,
            pause,
            area,
            out,
        } => {
            let window = WindowRef::from_raw(handle);
            let pause = parse_pause(pause);
            let bitmap = match parse_area(area) {
                Some(rect) => capture.area_by_handle(window, rect, pause)?,
                None => capture.by_handle(window, pause)?,
            };
            (bitmap, out)
        }
    };

    let out = out.unwrap_or_else(default_output);
    bitmap.save(&out)?;

    let (width, height) = bitmap.dimensions();
    info!("Captured {}x{} image to {}", width, height, out.display());
    println!("{}", out.display());
    Ok(())
}

#[cfg(not(windows))]
fn run(_cli: Cli) -> Result<()> {
    anyhow::bail!("window capture requires Windows; this build only parses arguments")
}
