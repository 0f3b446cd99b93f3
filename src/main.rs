use anyhow::Result;
use clap::{Parser, Subcommand};
use minigit::areas::repository::Repository;
use minigit::config::{LOG_ENV, RepositoryConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "minigit",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A minimal version control system",
    long_about = "A minimal version control system, written in Rust. \
    Content-addressed blobs and commits, branches, and a three-way merge \
    with conflict markers.",
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
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "add",
        about = "Stage files for the next commit",
        long_about = "This command stores the content of the given files as blobs and stages them. \
        Directories (including '.') are expanded to every file beneath them."
    )]
    Add {
        #[arg(index = 1, required = true, num_args = 1.., help = "Files or directories to stage")]
        paths: Vec<PathBuf>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command records the staged files as a new commit on top of HEAD."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "log",
        about = "Show commit history",
        long_about = "This command walks the parent chain from HEAD, newest commit first."
    )]
    Log,
    #[command(
        name = "branch",
        about = "Create or list branches",
        long_about = "With a name, this command creates a branch at the HEAD commit. \
        Without one, it lists every branch and marks the current one."
    )]
    Branch {
        #[arg(index = 1, help = "The name of the branch to create")]
        name: Option<String>,
    },
    #[command(
        name = "checkout",
        about = "Switch branches or detach HEAD at a commit",
        long_about = "This command points HEAD at a branch (or directly at a commit hash) \
        and replaces the working tree with that commit's files. \
        Files the target commit does not track are deleted."
    )]
    Checkout {
        #[arg(index = 1, help = "The branch name or commit hash")]
        target: String,
    },
    #[command(
        name = "merge",
        about = "Merge a branch into the current HEAD",
        long_about = "This command performs a three-way merge against the lowest common ancestor. \
        Clean merges are committed automatically; conflicts are left in the working tree with markers."
    )]
    Merge {
        #[arg(index = 1, help = "The branch to merge")]
        branch: String,
    },
    #[command(
        name = "diff",
        about = "Compare two files line by line",
        long_about = "This command compares two files position by position and prints every differing line."
    )]
    Diff {
        #[arg(index = 1)]
        file1: PathBuf,
        #[arg(index = 2)]
        file2: PathBuf,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn open_repository(path: Option<PathBuf>) -> Result<Repository> {
    let path = match path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    let config = RepositoryConfig::load_from_env()?;

    Ok(Repository::new(path, Box::new(std::io::stdout()), config)?)
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { path } => open_repository(path)?.init()?,
        Commands::Add { paths } => {
            let repository = open_repository(None)?;
            for path in paths {
                repository.add(path)?;
            }
        }
        Commands::Commit { message } => {
            open_repository(None)?.commit(&message)?;
        }
        Commands::Log => {
            open_repository(None)?.log()?;
        }
        Commands::Branch { name } => {
            open_repository(None)?.branch(name.as_deref())?;
        }
        Commands::Checkout { target } => {
            open_repository(None)?.checkout(&target)?;
        }
        // a conflicted merge is a normal outcome, reported on stdout
        Commands::Merge { branch } => {
            open_repository(None)?.merge(&branch)?;
        }
        Commands::Diff { file1, file2 } => {
            open_repository(None)?.diff(file1, file2)?;
        }
    }

    Ok(())
}
