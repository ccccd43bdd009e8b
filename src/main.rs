use clap::Parser;
use miette::Result;
use timberlist::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    // This is standard practice for CLI tools that output to stdout.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    // Install miette's fancy error handler for beautiful diagnostics
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

    match cli.command {
        Commands::Cutlist(args) => timberlist::cli::commands::cutlist::run(args, &global),
        Commands::Inspect(args) => timberlist::cli::commands::inspect::run(args, &global),
        Commands::Species(args) => timberlist::cli::commands::species::run(args, &global),
        Commands::Completions(args) => timberlist::cli::commands::completions::run(args),
    }
}
