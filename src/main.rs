use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use minus::Pager;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt};
use twig::areas::repository::Repository;
use twig::artifacts::core::PagerWriter;
use twig::artifacts::core::settings::Settings;
use twig::commands::porcelain::log::LogOptions;

#[derive(Parser)]
#[command(
    name = "twig",
    version = "0.1.0",
    about = "A minimal content-addressed version control system",
    long_about = "twig keeps snapshots in a content-addressed object store, tracks branches \
    as plain ref files and can merge or interactively rebase them.",
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
        long_about = "This command creates the .twig directory in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints the raw bytes stored under an object digest."
    )]
    CatFile {
        #[arg(short = 'p', long, help = "The object digest to print")]
        sha: String,
    },
    #[command(
        name = "hash-object",
        about = "Hash a file and optionally write it to the object store"
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object store")]
        write: bool,
        #[arg(index = 1)]
        file: String,
    },
    #[command(name = "add", about = "Stage files into the index")]
    Add {
        #[arg(index = 1, required = true, num_args = 1.., help = "Files or directories to stage")]
        paths: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command appends a commit to the checked-out branch with the specified message."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(name = "branch", about = "List or create branches")]
    Branch {
        #[command(subcommand)]
        action: BranchAction,
    },
    #[command(name = "checkout", about = "Switch to another branch")]
    Checkout {
        #[arg(index = 1, help = "The branch to check out")]
        branch: String,
    },
    #[command(
        name = "merge",
        about = "Merge a branch into the current branch",
        long_about = "This command records a two-parent merge commit on the current branch. \
        File contents are not reconciled."
    )]
    Merge {
        #[arg(index = 1, help = "The branch to merge")]
        branch: String,
    },
    #[command(
        name = "rebase",
        about = "Replay a branch on top of another",
        long_about = "This command asks for an action (pick, squash, edit, drop) for every commit \
        the source branch gained since it forked from the target, then replays them onto the \
        target's tip. A conflict pauses the rebase until --continue or --abort."
    )]
    Rebase {
        #[arg(
            index = 1,
            requires = "target",
            required_unless_present_any = ["continue_rebase", "abort", "status"],
            help = "The branch to rebase"
        )]
        source: Option<String>,
        #[arg(index = 2, help = "The branch to rebase onto")]
        target: Option<String>,
        #[arg(
            long = "continue",
            conflicts_with_all = ["source", "abort", "status"],
            help = "Resume a paused rebase"
        )]
        continue_rebase: bool,
        #[arg(long, conflicts_with_all = ["source", "status"], help = "Abandon a paused rebase")]
        abort: bool,
        #[arg(long, conflicts_with = "source", help = "Show whether a rebase is paused")]
        status: bool,
    },
    #[command(name = "status", about = "Show the working tree status")]
    Status,
    #[command(
        name = "diff",
        about = "Show changed files",
        long_about = "This command lists tracked files whose working copy differs from the index, \
        then the files staged since the last commit. Contents are not compared line by line."
    )]
    Diff,
    #[command(name = "log", about = "Show the commit history")]
    Log {
        #[arg(long, help = "Print each commit on a single line")]
        oneline: bool,
    },
}

#[derive(Subcommand)]
enum BranchAction {
    #[command(name = "list", about = "List branches, marking the current one")]
    List,
    #[command(name = "create", about = "Create a branch")]
    Create {
        #[arg(index = 1, help = "The name of the new branch")]
        name: String,
        #[arg(index = 2, help = "Branch name or commit hash to start from (defaults to HEAD)")]
        start: Option<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = Settings::load_from_env()?;
    let stdout_is_terminal = std::io::stdout().is_terminal();
    if settings.color_disabled || !stdout_is_terminal {
        colored::control::set_override(false);
    }

    let pwd = std::env::current_dir()?.to_string_lossy().into_owned();
    let open = |path: &str| -> anyhow::Result<Repository> {
        Ok(Repository::new(path, Box::new(std::io::stdout()))?.with_settings(settings.clone()))
    };

    match cli.command {
        Commands::Init { path } => open(path.as_deref().unwrap_or(&pwd))?.init().await,
        Commands::CatFile { sha } => open(&pwd)?.cat_file(&sha),
        Commands::HashObject { write, file } => open(&pwd)?.hash_object(&file, write),
        Commands::Add { paths } => open(&pwd)?.add(&paths).await,
        Commands::Commit { message } => open(&pwd)?.commit(&message),
        Commands::Branch { action } => match action {
            BranchAction::List => open(&pwd)?.list_branches(),
            BranchAction::Create { name, start } => {
                open(&pwd)?.create_branch(&name, start.as_deref())
            }
        },
        Commands::Checkout { branch } => open(&pwd)?.checkout(&branch),
        Commands::Merge { branch } => open(&pwd)?.merge(&branch),
        Commands::Rebase {
            source,
            target,
            continue_rebase,
            abort,
            status,
        } => {
            let mut repository = open(&pwd)?;
            match (source, target) {
                _ if continue_rebase => repository.rebase_continue(),
                _ if abort => repository.rebase_abort(),
                _ if status => repository.rebase_status(),
                (Some(source), Some(target)) => repository.rebase(&source, &target),
                _ => anyhow::bail!("rebase needs a source and a target branch"),
            }
        }
        Commands::Status => open(&pwd)?.status().await,
        Commands::Diff => open(&pwd)?.diff().await,
        Commands::Log { oneline } => {
            let opts = LogOptions { oneline };

            if stdout_is_terminal && !settings.pager_disabled {
                let pager = Pager::new();
                Repository::new(&pwd, Box::new(PagerWriter::new(pager.clone())))?
                    .with_settings(settings.clone())
                    .log(&opts)?;
                minus::page_all(pager)?;
                Ok(())
            } else {
                open(&pwd)?.log(&opts)
            }
        }
    }
}
