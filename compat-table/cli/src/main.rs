use clap::Parser;
use color_eyre::eyre::{Context, Result};
use compat_table::markdown::Pipeline;
use compat_table::{CompatOptions, CompatibilityExtension};
use compat_table_cli::Cli;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a stderr subscriber when `-v` is given.
///
/// `-v` shows blocks claimed and tables generated, `-vv` adds dialog
/// identifiers. `RUST_LOG` takes precedence over both.
fn init_tracing(verbose: u8) {
    if verbose == 0 {
        return;
    }

    let level = if verbose == 1 { "debug" } else { "trace" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,compat_table={level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).compact())
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = resolve_options(&cli)?;
    let source = load_source(cli.input.as_ref())?;

    let pipeline = Pipeline::new().with_extension(CompatibilityExtension::new(options));
    let fragment = pipeline.convert(&source);
    tracing::info!(bytes = fragment.len(), "Rendered document");

    let html = if cli.standalone {
        standalone_page(&fragment)
    } else {
        fragment
    };

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(html.as_bytes())
        .wrap_err("Failed to write HTML to stdout")?;
    stdout.flush()?;

    Ok(())
}

/// Loads options from `--config` (if given) and applies flag overrides.
fn resolve_options(cli: &Cli) -> Result<CompatOptions> {
    let mut options = match &cli.config {
        Some(path) => CompatOptions::from_path(path)
            .wrap_err_with(|| format!("Failed to load config from {:?}", path))?,
        None => CompatOptions::default(),
    };

    if let Some(icons) = cli.icons {
        options.icons = icons.into();
    }
    if let Some(path) = &cli.icon_path {
        options.icon_path = path.clone();
    }

    Ok(options)
}

/// Reads the input file, or stdin when no path (or "-") is given.
fn load_source(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read markdown from {:?}", path)),
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .wrap_err("Failed to read markdown from stdin")?;
            Ok(buffer)
        }
    }
}

fn standalone_page(fragment: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Compatibility</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        fragment
    )
}
