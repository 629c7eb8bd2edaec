//! Talent Map CLI: turn a people export into an interactive globe and org chart.

use clap::Parser;
use std::path::PathBuf;
use talent_map_cli::cli::generate_cmd::{self, GenerateOptions, DEFAULT_OUTPUT};
use talent_map_cli::cli::output::Styled;

#[derive(Parser)]
#[command(
    name = "talent-map",
    about = "Render a people export as a globe of locations with per-location org charts",
    version
)]
struct Cli {
    /// Comma- or tab-separated export. Reads standard input when omitted.
    input: Option<PathBuf>,

    /// Keep only rows whose company contains NAME (case-insensitive). Rows with no company are kept.
    #[arg(long, value_name = "NAME")]
    company: Option<String>,

    /// Where to write the HTML page.
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Print the run summary as JSON on stdout.
    #[arg(long)]
    json: bool,

    /// Suppress the summary.
    #[arg(short, long)]
    quiet: bool,

    /// List every location in the summary.
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.quiet {
        std::env::set_var("TALENT_MAP_QUIET", "1");
    }
    if cli.verbose {
        std::env::set_var("TALENT_MAP_VERBOSE", "1");
    }
    if cli.json {
        std::env::set_var("TALENT_MAP_JSON", "1");
    }
    if cli.no_color {
        std::env::set_var("TALENT_MAP_NO_COLOR", "1");
    }

    // Logs go to stderr so --json output on stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("talent_map=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let opts = GenerateOptions {
        input: cli.input,
        company: cli.company,
        output: cli.output,
    };

    if let Err(err) = generate_cmd::run(&opts) {
        eprintln!("{}", generate_cmd::failure_message(&Styled::new(), &err));
        std::process::exit(1);
    }
    Ok(())
}
