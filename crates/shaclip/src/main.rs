mod cli;
mod context;
mod error;
mod output;
mod sinks;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use libshaclip_core::{resolve_and_copy, Resolution};
use libshaclip_git::GitQueries;

use cli::Cli;
use error::ShaclipError;

fn main() {
    let cli = Cli::parse();

    init_logging(&cli);

    if let Err(e) = run(&cli) {
        // A failed resolution was already reported through the
        // notification sink; anything else gets surfaced here.
        if !matches!(e, ShaclipError::ResolveFailed) {
            output::output_error(&cli, &e);
        }
        std::process::exit(e.exit_code());
    }
}

fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_env("SHACLIP_LOG")
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: &Cli) -> Result<(), ShaclipError> {
    let (host, args) = context::build_context(cli)?;
    let git = GitQueries::new(cli.repo.clone());
    let mut notifier = sinks::StderrNotifier;

    let resolution = if cli.no_copy {
        resolve_and_copy(&host, &args, &git, &mut sinks::NullClipboard, &mut notifier)
    } else {
        resolve_and_copy(&host, &args, &git, &mut sinks::SystemClipboard, &mut notifier)
    };

    match resolution {
        Resolution::Commit(commit) => {
            output::output_commit(cli, &commit, !cli.no_copy);
            Ok(())
        }
        // Nothing to resolve is not a user error; stay silent.
        Resolution::NoResult => Ok(()),
        Resolution::Failed => Err(ShaclipError::ResolveFailed),
    }
}
