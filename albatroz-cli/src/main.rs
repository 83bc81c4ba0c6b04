use albatroz_cli::cli::{Cli, Commands};
use albatroz_cli::commands::{add, init};
use albatroz_cli::project::CREATE_PROJECT_HINT;
use albatroz_cli::logging;
use clap::Parser;
use colored::Colorize;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help and version go to stdout with status 0; usage errors exit 1.
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    logging::init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Init(args) => init::run(&args.into()).map(|_| ()),
        Commands::Add {
            component,
            init: init_args,
        } => add::run(component.as_deref(), &init_args.into()).map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("{}", format!("Error: {e}").red());
        if e.is_environment() {
            eprintln!("  Run albatroz from the root of an Expo project.");
            eprintln!("  To create one: {}", CREATE_PROJECT_HINT.cyan());
        }
        std::process::exit(1);
    }
}
