use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use javaimports_cli::ParseError;

#[derive(Parser)]
#[command(
    name = "javaimports",
    version,
    about = "Add missing imports to a Java source file"
)]
struct Cli {
    /// The Java source file to fix
    file: Option<PathBuf>,

    /// Log progress and degraded-mode details to stderr
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(error) => {
            report(&error);
            1
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<i32> {
    let Some(file) = cli.file else {
        // No file is not an error: print usage and leave quietly.
        Cli::command().print_help()?;
        return Ok(0);
    };

    let fixed = javaimports_cli::fix_file(&file)?;
    print!("{fixed}");
    Ok(0)
}

fn report(error: &anyhow::Error) {
    // Parser diagnostics have a fixed per-line format of their own;
    // everything else renders as the context chain.
    if let Some(ParseError::Syntax(diagnostics)) = error.downcast_ref::<ParseError>() {
        for diagnostic in diagnostics {
            eprintln!("{diagnostic}");
        }
        return;
    }
    eprintln!("{error:#}");
}
