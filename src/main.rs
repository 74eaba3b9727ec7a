use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use std::process;

use bundle_size::cmd;
use bundle_size::config::ConfigLoader;
use bundle_size::report::SizeReporter;

/// Gzipped page bundle size reports
///
/// bundle-size measures the gzipped size of every page of a Next.js build and
/// renders a markdown comparison against a reference build for pull request
/// comments.
#[derive(Parser)]
#[command(name = "bundle-size", author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable emoji output (useful for CI/CD or accessibility)
    #[arg(long, global = true)]
    no_emoji: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Measure gzipped page sizes of a build
    Measure {
        /// Directory containing the build output directory
        #[arg(short, long, default_value = ".")]
        working_dir: PathBuf,

        /// Pages to measure: static, dynamic
        #[arg(short, long, default_value = "static")]
        kind: String,

        /// Write the snapshot to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Compare a snapshot against a reference snapshot
    Compare {
        /// Table title
        #[arg(short, long)]
        name: String,

        /// Reference snapshot (omit for a first build)
        #[arg(short, long)]
        reference: Option<PathBuf>,

        /// Current snapshot
        #[arg(short, long)]
        current: PathBuf,

        /// Minimum size change in bytes for a page to be reported
        /// (defaults to .bundle-size.toml in --working-dir, else 1000)
        #[arg(short, long)]
        threshold: Option<u64>,

        /// Directory holding .bundle-size.toml
        #[arg(short, long, default_value = ".")]
        working_dir: PathBuf,

        /// Output significant changes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render a single snapshot as a markdown table
    Show {
        /// Table title
        #[arg(short, long)]
        name: String,

        /// Snapshot file
        #[arg(value_name = "FILE")]
        snapshot: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    if cli.no_emoji {
        bundle_size::fmt::set_plain_symbols(true);
        console::set_colors_enabled(false);
    }

    let result = match &cli.command {
        Commands::Measure {
            working_dir,
            kind,
            out,
        } => cmd::cmd_measure(working_dir, kind, out.as_deref()),
        Commands::Compare {
            name,
            reference,
            current,
            threshold,
            working_dir,
            json,
        } => {
            let options = cmd::CompareOptions {
                name,
                reference: reference.as_deref(),
                current,
                json: *json,
            };
            let reporter = match threshold {
                Some(bytes) => Ok(SizeReporter::new(*bytes)),
                None => ConfigLoader::load(working_dir)
                    .map(|config| SizeReporter::from_config(&config)),
            };
            reporter.and_then(|reporter| cmd::cmd_compare(&options, reporter))
        }
        Commands::Show { name, snapshot } => cmd::cmd_show(name, snapshot),
        Commands::Completions { shell } => {
            cmd::cmd_completions(*shell, &mut Cli::command());
            Ok(())
        }
    };

    if let Err(e) = result {
        use bundle_size::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}
