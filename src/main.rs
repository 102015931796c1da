use clap::Parser;
use clap::error::ErrorKind;
use git_premerge::areas::repository::Repository;
use git_premerge::artifacts::core::options::Options;
use git_premerge::artifacts::core::tag::Tag;
use git_premerge::artifacts::errors::{BackendError, ReconcileError};
use is_terminal::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "git-premerge",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Discard local changes that already match the branch you are about to merge",
    long_about = "Compares every modified tracked file and every untracked file with the \
    target branch. Files whose content is identical to the target are reverted (tracked) \
    or removed (untracked), so that a following merge or pull does not stop with \
    'Your local changes would be overwritten'. Files that differ are reported and left alone.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(short = 'p', long, help = "Only report what would be done")]
    pretend: bool,
    #[arg(long, help = "Print diagnostic tracing on stderr")]
    debug: bool,
    #[arg(
        index = 1,
        help = "The branch to compare against (defaults to the upstream of the current branch)"
    )]
    branch: Option<String>,
}

impl From<Cli> for Options {
    fn from(cli: Cli) -> Self {
        Options::new(cli.pretend, cli.debug, cli.branch)
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) if matches!(error.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = error.print();
            return ExitCode::SUCCESS;
        }
        Err(error) => {
            let usage = ReconcileError::Usage(error.render().to_string());
            eprint!("{usage}");
            return ExitCode::from(usage.exit_code());
        }
    };
    let options = Options::from(cli);

    init_tracing(options.debug);
    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match run(&options) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{} {}", Tag::Error, error);
            ExitCode::from(error.exit_code())
        }
    }
}

fn run(options: &Options) -> Result<(), ReconcileError> {
    let pwd = std::env::current_dir().map_err(BackendError::from)?;
    let repository = Repository::open(&pwd, Box::new(std::io::stdout()))?;

    let summary = repository.reconcile(options)?;
    tracing::debug!(?summary, "done");

    Ok(())
}

fn init_tracing(debug: bool) {
    let default_directive = if debug { "git_premerge=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}
