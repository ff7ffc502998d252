//! themestore - inspect theme documents from the command line.
//!
//! Loads a multi-theme document (or a directory of theme files with
//! `--library`) and prints resolved values the way an application would
//! read them through the typed accessors.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use console::Style;
use themestore::{ThemeDefinition, ThemeLibrary, ThemeRegistry, ThemeSource, DEFAULT_THEME_NAME};
use tracing_subscriber::EnvFilter;

/// Inspect inheritable theme definitions
#[derive(Parser, Debug)]
#[command(name = "themestore")]
#[command(version)]
struct Args {
    /// Theme document mapping theme names to definitions (JSON or YAML)
    #[arg(short, long, required_unless_present = "library")]
    file: Option<PathBuf>,

    /// Directory of theme files, one theme per file
    #[arg(long, conflicts_with = "file")]
    library: Option<PathBuf>,

    /// Theme to inspect
    #[arg(short, long, default_value = DEFAULT_THEME_NAME)]
    theme: String,

    /// Log lookups (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the keys visible from the theme, including inherited ones
    Keys,
    /// Resolve one key
    Get {
        key: String,
        /// How to read the value
        #[arg(long = "as", value_enum, default_value = "string")]
        kind: Kind,
    },
    /// List the loaded themes and their parents
    Themes,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Kind {
    Bool,
    Integer,
    Number,
    Float,
    String,
    Color,
    Font,
    FontSystemSize,
    Image,
    Insets,
    Point,
    Size,
    Interval,
    TextCase,
    Animation,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let library = load_library(&args)?;
    match &args.command {
        Command::Themes => {
            for name in library.names() {
                let parent = library
                    .theme_named(name)
                    .and_then(|theme| theme.parent().map(|p| p.name().to_string()));
                match parent {
                    Some(parent) => println!("{} ({})", name, parent),
                    None => println!("{}", name),
                }
            }
        }
        Command::Keys => {
            let theme = theme(&library, &args.theme)?;
            for key in theme.keys() {
                println!("{}", key);
            }
        }
        Command::Get { key, kind } => {
            let theme = theme(&library, &args.theme)?;
            println!("{}", render(&theme, key, *kind));
        }
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_library(args: &Args) -> Result<ThemeLibrary> {
    let mut library = ThemeLibrary::new();
    if let Some(dir) = &args.library {
        let mut registry = ThemeRegistry::new();
        registry
            .add_dir(dir)
            .with_context(|| format!("failed to scan {}", dir.display()))?;
        library
            .load_registry(&registry)
            .with_context(|| format!("failed to load themes from {}", dir.display()))?;
    } else if let Some(file) = &args.file {
        let source = ThemeSource::from_path(file)
            .with_context(|| format!("failed to read {}", file.display()))?;
        library
            .load_document(&source)
            .with_context(|| format!("failed to load {}", file.display()))?;
    }
    Ok(library)
}

fn theme(library: &ThemeLibrary, name: &str) -> Result<std::sync::Arc<ThemeDefinition>> {
    match library.find(name) {
        Some(theme) => Ok(theme),
        None => bail!(
            "no theme named \"{}\" (available: {})",
            name,
            library.names().collect::<Vec<_>>().join(", ")
        ),
    }
}

fn render(theme: &ThemeDefinition, key: &str, kind: Kind) -> String {
    match kind {
        Kind::Bool => theme.boolean(key).to_string(),
        Kind::Integer => theme.integer(key).to_string(),
        Kind::Number => theme.number(key).to_string(),
        Kind::Float => theme.float_value(key).to_string(),
        Kind::String => theme.string(key),
        Kind::Color => {
            let color = theme.color(key);
            let swatch = Style::new().bg(color.to_console()).apply_to("    ");
            format!("{} {}", swatch, color)
        }
        Kind::Font => theme.font(key).to_string(),
        Kind::FontSystemSize => theme.font_with_system_size(key).to_string(),
        Kind::Image => match theme.image(key) {
            Some(image) => match &image.path {
                Some(path) => format!("{} ({})", image.name, path.display()),
                None => image.name,
            },
            None => "(none)".to_string(),
        },
        Kind::Insets => {
            let insets = theme.edge_insets(key);
            format!(
                "top {} left {} bottom {} right {}",
                insets.top, insets.left, insets.bottom, insets.right
            )
        }
        Kind::Point => {
            let point = theme.point(key);
            format!("({}, {})", point.x, point.y)
        }
        Kind::Size => {
            let size = theme.size(key);
            format!("{} x {}", size.width, size.height)
        }
        Kind::Interval => format!("{:?}", theme.time_interval(key)),
        Kind::TextCase => format!("{:?}", theme.text_case_transform(key)),
        Kind::Animation => {
            let animation = theme.animation(key);
            format!(
                "duration {:?} delay {:?} curve {:?}",
                animation.duration, animation.delay, animation.curve
            )
        }
    }
}
