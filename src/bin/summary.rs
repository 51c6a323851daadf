//! Print descriptive statistics for every column of a CSV file.
//!
//! Usage:
//!   summary [options] CSVFILE
//!   summary -h | --help | -V | --version

use anyhow::Result;
use clap::Parser;
use conflict_report::describe;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

const VERSION: &str = "0.1.1";

#[derive(Parser, Debug)]
#[command(
    name = "summary",
    about = "Analyse a CSV file and report basic statistics about its columns",
    disable_version_flag = true
)]
struct Args {
    /// CSV file with a header row
    #[arg(value_name = "CSVFILE", required_unless_present = "version")]
    csvfile: Option<PathBuf>,

    /// Provide more verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Print version and exit
    #[arg(short = 'V', long)]
    version: bool,
}

fn write_version<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", VERSION)?;
    out.flush()
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        write_version(&mut io::stdout().lock())?;
        return Ok(());
    }

    init_logging(args.verbose);

    // clap guarantees CSVFILE whenever --version is absent
    let Some(path) = args.csvfile else {
        anyhow::bail!("missing CSVFILE");
    };

    // render fully before touching stdout so a failure prints no partial table
    let mut buf = Vec::new();
    describe::report(&path, &mut buf)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(&buf)?;
    out.flush()?;

    info!(path = %path.display(), "summary written");
    Ok(())
}
