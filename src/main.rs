//! termdots - braille plots in the terminal
//!
//! Renders demo plots on a braille canvas. Every option not given on the command
//! line comes from `~/.termdots/config.toml`.
//!
//! # Quick Start
//!
//! ```text
//! termdots                   # All demos, sized to the terminal
//! termdots -d sine -m rgb    # Sine demo in true color
//! termdots -W 40 -H 10       # Fixed plot size
//! ```

use std::env;
use std::io::{self, Write};

use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use termdots::color::{ColorMode, Reset};
use termdots::config::Config;
use termdots::demo::{self, Demo, DemoOptions};

/// Version string from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Command line overrides
#[derive(Debug, Default)]
struct Args {
    width: Option<usize>,
    height: Option<usize>,
    mode: Option<ColorMode>,
    no_color: bool,
    color_only_reset: bool,
    demo: Option<Demo>,
}

fn print_version() {
    eprintln!("termdots {}", VERSION);
}

fn print_help() {
    eprintln!("termdots {} - Braille plots in the terminal", VERSION);
    eprintln!();
    eprintln!("Usage: termdots [OPTIONS]");
    eprintln!();
    eprintln!("Plot options:");
    eprintln!("  -d, --demo <NAME>       sine, house, markers, hist, image, braille,");
    eprintln!("                          all (default)");
    eprintln!("  -W, --width <N>         Plot width in characters (default: terminal width)");
    eprintln!("  -H, --height <N>        Plot height in characters (default: terminal height)");
    eprintln!();
    eprintln!("Color options:");
    eprintln!("  -m, --mode <MODE>       names (default), byte, rgb");
    eprintln!("  --no-color              Never emit escape sequences");
    eprintln!("  --color-only-reset      Reset colors only, keep other attributes");
    eprintln!();
    eprintln!("Other options:");
    eprintln!("  -v, --version           Show version");
    eprintln!("  -h, --help              Show this help");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  NO_COLOR                Disable colors when set to any value");
    eprintln!("  FORCE_COLOR             Force colors, unless 0, false or none");
    eprintln!("  RUST_LOG                Log filter, logs go to stderr");
    eprintln!();
    eprintln!("Configuration: ~/.termdots/config.toml");
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().collect();
    let mut parsed = Args::default();
    let mut i = 1;

    let value = |i: usize, name: &str| -> Result<String, String> {
        args.get(i).cloned().ok_or_else(|| format!("Missing {} argument", name))
    };

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-v" | "--version" => {
                print_version();
                std::process::exit(0);
            }
            "-W" | "--width" => {
                i += 1;
                parsed.width = Some(parse_size(&value(i, "width")?)?);
            }
            "-H" | "--height" => {
                i += 1;
                parsed.height = Some(parse_size(&value(i, "height")?)?);
            }
            "-m" | "--mode" => {
                i += 1;
                let mode = value(i, "mode")?;
                parsed.mode = Some(mode.parse().map_err(|e| format!("{}", e))?);
            }
            "-d" | "--demo" => {
                i += 1;
                parsed.demo = Some(value(i, "demo")?.parse()?);
            }
            "--no-color" => {
                parsed.no_color = true;
            }
            "--color-only-reset" => {
                parsed.color_only_reset = true;
            }
            arg => {
                return Err(format!("Unknown argument: {}. Use -h for help.", arg));
            }
        }
        i += 1;
    }

    Ok(parsed)
}

fn parse_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("Invalid size: {}", s)),
    }
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn main() -> anyhow::Result<()> {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    let mut config = Config::load();
    init_logging(&config);
    info!("termdots {} starting", VERSION);

    // Command line wins over the config file
    config.width = args.width.or(config.width);
    config.height = args.height.or(config.height);
    config.no_color |= args.no_color;
    if let Some(mode) = args.mode {
        config.color_mode = mode;
    }
    if args.color_only_reset {
        config.reset = Reset::ColorOnly;
    }
    debug!(?config, "Effective configuration");

    let (width, height) = config.plot_size();
    let options = DemoOptions {
        width,
        height,
        mode: config.color_mode,
        policy: config.color_policy(),
        line_separator: config.line_separator().to_string(),
    };

    let output = demo::render(args.demo.unwrap_or(Demo::All), &options)?;
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}{}", output, options.line_separator)?;
    stdout.flush()?;
    Ok(())
}
