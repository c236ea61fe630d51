use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use station_index::directory::{Directory, DirectoryError, check_output_path};
use station_index::render::PageConfig;

#[derive(Parser, Debug)]
#[command(
    name = "station-index",
    version,
    about = "Render railway station records into an HTML directory"
)]
struct Args {
    /// Station record files (.txt); other files are skipped
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output HTML file
    #[arg(short, long)]
    output: PathBuf,

    /// Append the collected footnotes below the station list
    #[arg(long)]
    footnotes: bool,

    /// Also write the collected footnotes as JSON to this file
    #[arg(long)]
    footnotes_json: Option<PathBuf>,

    /// Page title
    #[arg(long)]
    title: Option<String>,

    /// Stylesheet href
    #[arg(long)]
    stylesheet: Option<String>,

    /// Show debug messages
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), DirectoryError> {
    // Refuse a bad output path before doing any work
    check_output_path(&args.output)?;

    let directory = Directory::load(args.inputs.as_slice())?;
    for err in directory.errors() {
        println!("{err}");
    }

    let mut config = PageConfig::default().with_footnotes(args.footnotes);
    if let Some(title) = &args.title {
        config = config.with_title(title);
    }
    if let Some(stylesheet) = &args.stylesheet {
        config = config.with_stylesheet(stylesheet);
    }

    let page = directory.write_page(&args.output, &config)?;

    if let Some(path) = &args.footnotes_json {
        std::fs::write(path, page.footnotes_json()?).map_err(|source| DirectoryError::Write {
            path: path.clone(),
            source,
        })?;
    }

    Ok(())
}
