mod check;
mod generate;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use eyre::Result;
use generate::GenerateCommand;

/// Exit with a rendered miette report on library errors.
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T, E> UnwrapOrExit<T> for std::result::Result<T, Box<E>>
where
    E: miette::Diagnostic + Send + Sync + 'static,
{
    fn unwrap_or_exit(self) -> T {
        self.unwrap_or_else(|e| {
            eprintln!("{:?}", miette::Report::new(*e));
            std::process::exit(1)
        })
    }
}

#[derive(Parser)]
#[command(name = "graft")]
#[command(version)]
#[command(about = "Translate Go struct declarations into C++ headers")]
pub(crate) struct Cli {
    /// Only print errors and generated output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(self.quiet),
            Commands::Check(cmd) => cmd.run(self.quiet),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Translate Go sources into headers (or JSON)
    Generate(GenerateCommand),

    /// Parse and validate Go sources without generating
    Check(CheckCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_flags() {
        let cli = Cli::try_parse_from([
            "graft", "generate", "a.go", "-", "-t", "json", "-o", "out", "--dry-run",
        ])
        .unwrap();

        match cli.command {
            Commands::Generate(cmd) => {
                assert_eq!(cmd.inputs.len(), 2);
                assert_eq!(cmd.target, Some(graft_manifest::Target::Json));
                assert!(cmd.dry_run);
                assert!(!cmd.stdout);
            }
            Commands::Check(_) => panic!("expected generate"),
        }
    }

    #[test]
    fn test_dry_run_conflicts_with_stdout() {
        assert!(Cli::try_parse_from(["graft", "generate", "--dry-run", "--stdout"]).is_err());
    }
}
