use clap::Parser;
use miette::Result;
use pmo::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;
    init_tracing(global.quiet, global.verbose);

    match cli.command {
        Commands::Status(args) => pmo::cli::commands::status::run(args, &global),
        Commands::Report(cmd) => pmo::cli::commands::report::run(cmd, &global),
        Commands::Integrations(cmd) => pmo::cli::commands::integrations::run(cmd, &global),
        Commands::Roi(args) => pmo::cli::commands::classify::run_roi(args, &global),
        Commands::Due(args) => pmo::cli::commands::classify::run_due(args, &global),
        Commands::Completions(args) => pmo::cli::commands::completions::run(args),
    }
}

/// Diagnostics go to stderr; `PMO_LOG` overrides the level picked from flags.
fn init_tracing(quiet: bool, verbose: bool) {
    let default_level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_env("PMO_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
