//! yadop: documentation models from ngdoc-annotated JavaScript sources.
//!
//! Two input modes:
//!
//! - **scan mode** (default): `yadop --cwd src --pattern '**/*.js' -f markdown`
//! - **records mode**: `yadop --records comments.json`, where the file holds a
//!   JSON array of doctrine-style annotation records (`-` reads stdin)

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use yadop::processor::{Configuration, Processor};
use yadop::record::AnnotationRecord;
use yadop::render;

#[derive(Parser)]
#[command(
    name = "yadop",
    about = "Extract module/entity/method documentation from ngdoc comments"
)]
struct Cli {
    /// Read annotation records (JSON array) instead of scanning sources.
    /// Use "-" for stdin.
    #[arg(long, value_name = "FILE")]
    records: Option<PathBuf>,

    /// Directory the pattern is resolved against (default: current directory)
    #[arg(long)]
    cwd: Option<PathBuf>,

    /// Glob pattern of source files (default: **/*.js)
    #[arg(long)]
    pattern: Option<String>,

    /// Glob of files to skip, relative to --cwd. Can be given multiple times.
    #[arg(long)]
    ignore: Vec<String>,

    /// JSON config file with cwd, pattern and ignore keys.
    /// Command-line flags take precedence.
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Output format: json (default), markdown
    #[arg(short = 'f', long, default_value = "json")]
    format: String,

    /// Write to this file instead of stdout. A directory gets api.<ext> inside it.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short = 'v', long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let renderer = render::create_renderer(&cli.format)?;

    let records = match cli.records {
        Some(ref path) => read_records(path)?,
        None => Processor::new(configuration(&cli)?)?.process()?,
    };

    let modules = yadop::map(&records).context("failed to map documentation")?;
    info!(modules = modules.len(), "mapped");

    let output = renderer.render(&modules)?;
    let target = cli
        .output
        .as_deref()
        .map(|path| output_file(path, renderer.file_extension()));
    write_output(target.as_deref(), &output)
}

fn output_file(path: &Path, ext: &str) -> PathBuf {
    if path.is_dir() {
        path.join(format!("api.{}", ext))
    } else {
        path.to_path_buf()
    }
}

fn init_tracing(verbose: bool, quiet: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Defaults, then the config file, then command-line flags.
fn configuration(cli: &Cli) -> Result<Configuration> {
    let base = match cli.config {
        Some(ref path) => Configuration::load(path)?,
        None => Configuration::default(),
    };
    Ok(base.merge(Configuration {
        cwd: cli.cwd.clone(),
        pattern: cli.pattern.clone(),
        ignore: cli.ignore.clone(),
    }))
}

fn read_records(path: &Path) -> Result<Vec<AnnotationRecord>> {
    let (text, origin) = if path == Path::new("-") {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        (input, "stdin".to_string())
    } else {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        (text, path.display().to_string())
    };

    serde_json::from_str(&text).with_context(|| format!("invalid annotation records in {}", origin))
}

fn write_output(path: Option<&Path>, output: &str) -> Result<()> {
    let Some(path) = path else {
        print!("{}", output);
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory: {}", parent.display()))?;
    }
    fs::write(path, output).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "written");
    Ok(())
}
