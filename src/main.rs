use anyhow::Result;
use clap::{Parser, Subcommand};
use modelguard::areas::project::{DEFAULT_MODEL_NAME, Project, ProjectConfig};

#[derive(Parser)]
#[command(
    name = "modelguard",
    version = "0.1.0",
    about = "A migration safety checker for versioned entity models",
    long_about = "modelguard compares every adjacent pair of model version snapshots \
    and reports removed entities, removed fields, and changed field attributes. \
    Problems a maintainer has reviewed can be accepted by fingerprint, so only \
    new regressions fail the check.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "check",
        about = "Validate the whole version chain",
        long_about = "This command discovers the numbered version directories, diffs each \
        adjacent pair, and prints every problem whose fingerprint is not in the solved file. \
        It exits non-zero if any problem is unresolved."
    )]
    Check {
        #[arg(short, long, default_value = ".", help = "Directory holding the numbered version subdirectories")]
        directory: String,
        #[arg(short, long, default_value = DEFAULT_MODEL_NAME, help = "Model name, i.e. the stem of the .model files")]
        model: String,
        #[arg(long, help = "Path of the solved file (default: <directory>/solved.txt)")]
        solved: Option<String>,
        #[arg(short, long, help = "Also print resolved problems and clean migrations")]
        verbose: bool,
    },
    #[command(
        name = "accept",
        about = "Record the currently unresolved problems as reviewed",
        long_about = "This command appends the fingerprint of every currently unresolved \
        problem to the solved file, so subsequent checks treat them as accepted."
    )]
    Accept {
        #[arg(short, long, default_value = ".", help = "Directory holding the numbered version subdirectories")]
        directory: String,
        #[arg(short, long, default_value = DEFAULT_MODEL_NAME, help = "Model name, i.e. the stem of the .model files")]
        model: String,
        #[arg(long, help = "Path of the solved file (default: <directory>/solved.txt)")]
        solved: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Check {
            directory,
            model,
            solved,
            verbose,
        } => {
            let mut config = ProjectConfig::new(directory)
                .with_model_name(model.as_str())
                .with_verbose(*verbose);
            if let Some(solved) = solved {
                config = config.with_solved_file(solved);
            }

            let project = Project::new(config, Box::new(std::io::stdout()))?;
            let outcome = project.check()?;

            if !outcome.is_clean() {
                std::process::exit(1);
            }
        }
        Commands::Accept {
            directory,
            model,
            solved,
        } => {
            let mut config = ProjectConfig::new(directory).with_model_name(model.as_str());
            if let Some(solved) = solved {
                config = config.with_solved_file(solved);
            }

            let project = Project::new(config, Box::new(std::io::stdout()))?;
            project.accept()?;
        }
    }

    Ok(())
}
