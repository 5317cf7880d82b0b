use clap::Parser;
use clap::Subcommand;
use git_testament::git_testament;
use git_testament::render_testament;

use satherapist::flagstat;

git_testament!(TESTAMENT);

#[derive(Subcommand)]
enum Subcommands {
    /// Parses the text output of `samtools flagstat` into a report.
    #[command(alias = "parseflagstat")]
    ParseFlagstat(flagstat::command::ParseFlagstatArgs),
}

#[derive(Parser)]
#[command(
    name = "satherapist",
    author,
    version = render_testament!(TESTAMENT),
    propagate_version = true,
    about = "Provides useful information about alignments."
)]
struct Cli {
    #[command(subcommand)]
    subcommand: Subcommands,

    /// Only errors are printed to the stderr stream.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// All available information, including debug information, is printed to
    /// stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut level = tracing::Level::INFO;
    if cli.quiet {
        level = tracing::Level::ERROR;
    } else if cli.verbose {
        level = tracing::Level::DEBUG;
    }

    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    match cli.subcommand {
        Subcommands::ParseFlagstat(args) => flagstat::command::parse(args)?,
    }

    Ok(())
}
