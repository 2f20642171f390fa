use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{error, LevelFilter};

use otpdb::business::operations;
use otpdb::shell::about::about_text;
use otpdb::{Database, Result, SeedDefaults, Seeder, Shell, TerminalPrompter, Translations};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Language of the UI text ("en" or "de").
    #[arg(short, long, default_value = "en", global = true)]
    lang: String,

    /// Log debug output. RUST_LOG takes precedence.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Without a command the interactive shell starts.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a database, seed defaults, then ask for companies and users.
    Create {
        /// Target file; ".db" is appended if missing.
        path: PathBuf,

        /// Skip the interactive company/user prompts.
        #[arg(long)]
        no_seed: bool,

        /// Name of the seeded default company.
        #[arg(long)]
        default_company: Option<String>,
    },

    /// Create a database holding only the default rows.
    CreateEmpty {
        /// Target file; ".db" is appended if missing.
        path: PathBuf,

        /// Name of the seeded default company.
        #[arg(long)]
        default_company: Option<String>,
    },

    /// Delete all rows of an existing database, keeping its tables.
    Clear {
        path: PathBuf,
    },

    /// Show information about this tool.
    About,
}

fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    pretty_env_logger::formatted_builder()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .init();
}

fn run(args: Args) -> Result<()> {
    let tr = Translations::for_language(&args.lang)?;

    let Some(command) = args.command else {
        let prompter = TerminalPrompter::new(io::stdin().lock(), io::stdout());
        return Shell::new(prompter, tr).run();
    };

    match command {
        Command::Create { path, no_seed, default_company } => {
            let defaults = default_company
                .as_deref()
                .map(SeedDefaults::with_company_name)
                .unwrap_or_else(SeedDefaults::populated);
            let path = operations::populate_new(&path, &defaults)?;
            println!("{}", tr.format("status_created", &[("path", path.display().to_string().as_str())]));

            if !no_seed {
                let db = Database::open(&path)?;
                let mut prompter = TerminalPrompter::new(io::stdin().lock(), io::stdout());
                Seeder::new(&db, &mut prompter, &tr).run()?;
            }
        }
        Command::CreateEmpty { path, default_company } => {
            let defaults = default_company
                .as_deref()
                .map(SeedDefaults::with_company_name)
                .unwrap_or_else(SeedDefaults::empty);
            let path = operations::create_empty(&path, &defaults)?;
            println!("{}", tr.format("status_empty_created", &[("path", path.display().to_string().as_str())]));
        }
        Command::Clear { path } => {
            operations::clear_existing(&path)?;
            println!("{}", tr.format("status_cleared", &[("path", path.display().to_string().as_str())]));
        }
        Command::About => {
            println!("{}", about_text(&tr));
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
