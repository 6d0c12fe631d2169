use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use swup_core::config::{self, CONFIG_FILE_NAME, OutputFormat, SwupConfig};
use swup_core::render;
use swup_core::{Conversion, SourceOrigin, convert_value};
use swup_fetch::{DirectorySource, HttpSource};

#[derive(Parser)]
#[command(name = "swup", about = "Swagger 1.2 to Swagger 2.0 upgrader", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a Swagger 1.2 resource listing into one Swagger 2.0 document
    Convert {
        /// Resource listing URL (must end in `api-docs`)
        #[arg(short, long)]
        url: Option<String>,

        /// Read `api-docs.json` and declarations from this directory instead of fetching
        #[arg(long)]
        local: Option<PathBuf>,

        /// Output file, or `-` for stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long)]
        format: Option<FormatArg>,

        /// Spaces per indentation level (JSON only)
        #[arg(long)]
        indent: Option<usize>,
    },

    /// Initialize a new swup configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Yaml,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Yaml => OutputFormat::Yaml,
        }
    }
}

/// Settings for one `convert` run: command-line flags over the config file.
struct ConvertSettings {
    url: Option<String>,
    local: Option<PathBuf>,
    output: PathBuf,
    format: OutputFormat,
    indent: usize,
    timeout: Duration,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            url,
            local,
            output,
            format,
            indent,
        } => {
            let cfg = try_load_config()?.unwrap_or_default();
            let settings = ConvertSettings {
                url: url.or(cfg.url),
                local: local.or(cfg.local.map(PathBuf::from)),
                output: output.unwrap_or_else(|| PathBuf::from(&cfg.output)),
                format: format.map(OutputFormat::from).unwrap_or(cfg.format),
                indent: indent.unwrap_or(cfg.indent),
                timeout: Duration::from_secs(cfg.timeout_secs),
            };
            cmd_convert(settings)
        }

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "swup", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<SwupConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

/// Ask for the resource listing URL on stdin.
fn prompt_for_url() -> Result<String> {
    eprint!("Please enter the API documentation URL: ");
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read URL from stdin")?;
    Ok(line.trim().to_string())
}

fn cmd_convert(settings: ConvertSettings) -> Result<()> {
    let raw_url = match settings.url {
        Some(url) => url,
        None => prompt_for_url()?,
    };
    let origin = SourceOrigin::parse(&raw_url)?;

    eprintln!("Converting Swagger 1.2 to Swagger 2.0...");
    let conversion = match settings.local {
        Some(dir) => {
            let source = DirectorySource::new(dir);
            eprintln!("Reading API documentation from {}", source.root().display());
            let root = source
                .fetch_listing()
                .with_context(|| format!("failed to read {}", source.listing_path().display()))?;
            convert_value(root, &origin, &source)?
        }
        None => {
            let source = HttpSource::new(origin.clone(), settings.timeout)?;
            eprintln!("Fetching API documentation from {}", origin.as_str());
            let root = source
                .fetch_listing()
                .context("failed to fetch the resource listing")?;
            convert_value(root, &origin, &source)?
        }
    };

    report(&conversion);

    log::debug!(
        "rendering {:?} with indent {} to {}",
        settings.format,
        settings.indent,
        settings.output.display()
    );
    let content = render::render(&conversion.document, settings.format, settings.indent)?;
    write_output(&settings.output, &content)
}

fn report(conversion: &Conversion) {
    for skipped in &conversion.skipped {
        eprintln!("  warning: skipped {} ({})", skipped.path, skipped.reason);
    }
    let doc = &conversion.document;
    eprintln!(
        "  {} tags, {} paths, {} operations, {} definitions",
        doc.tags.len(),
        doc.paths.len(),
        doc.operation_count(),
        doc.definitions.len()
    );
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    if path == Path::new("-") {
        print!("{content}");
        return Ok(());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    eprintln!("Conversion complete! Wrote {}", path.display());
    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
