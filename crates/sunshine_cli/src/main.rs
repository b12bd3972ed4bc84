//! `sunshine` - the Daily Sunshine terminal page.
//!
//! # Responsibility
//! - Wire logging, storage, and core services into one interactive page.
//! - Map line input onto journal and compliment operations.
//!
//! # Invariants
//! - All journal and compliment state lives in `sunshine_core`; this binary
//!   only renders it.
//! - A corrupt stored journal is reported, never silently overwritten before
//!   the first successful mutation.

use clap::Parser;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use sunshine_core::db::{open_db, DbError};
use sunshine_core::{
    core_version, default_log_level, init_logging, AddOutcome, ComplimentService, DeleteOutcome,
    JournalError, JournalService, KeyValueStore, RepoError, SqliteKeyValueStore, SystemClock,
};

const APP_DIR_NAME: &str = "daily-sunshine";
const DB_FILE_NAME: &str = "sunshine.sqlite3";
const LOG_DIR_NAME: &str = "logs";

/// sunshine - your daily dose of positivity and gratitude
#[derive(Debug, Parser)]
#[command(name = "sunshine")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the journal database file
    #[arg(long, value_name = "FILE")]
    db: Option<PathBuf>,

    /// Directory for rolling log files
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

#[derive(Debug)]
enum CliError {
    DataDirUnavailable,
    NonUtf8Path(PathBuf),
    Logging(String),
    Db(DbError),
    Repo(RepoError),
    Journal(JournalError),
    Io(io::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DataDirUnavailable => {
                write!(f, "could not resolve a local data directory on this platform")
            }
            Self::NonUtf8Path(path) => write!(f, "path is not valid UTF-8: {}", path.display()),
            Self::Logging(message) => write!(f, "logging setup failed: {message}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::Journal(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::Journal(err) => Some(err),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for CliError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<RepoError> for CliError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<JournalError> for CliError {
    fn from(value: JournalError) -> Self {
        Self::Journal(value)
    }
}

impl From<io::Error> for CliError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// One parsed line of page input.
enum Command<'a> {
    Add(&'a str),
    Compliment,
    Delete(Option<usize>),
    Repaint,
    Help,
    Quit,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("sunshine: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let (db_path, log_dir) = resolve_paths(&cli)?;

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| default_log_level().to_string());
    let log_dir_text = log_dir
        .to_str()
        .ok_or_else(|| CliError::NonUtf8Path(log_dir.clone()))?;
    init_logging(&level, log_dir_text).map_err(CliError::Logging)?;
    info!(
        "event=page_start module=cli status=ok core_version={}",
        core_version()
    );

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let conn = open_db(&db_path)?;

    let mut journal = match JournalService::load(SqliteKeyValueStore::try_new(&conn)?) {
        Ok(journal) => journal,
        Err(JournalError::Corrupt { details }) => {
            println!("Your saved journal could not be read: {details}");
            println!("Starting with an empty page; the saved record is kept until your next entry.");
            JournalService::empty(SqliteKeyValueStore::try_new(&conn)?)
        }
        Err(err) => return Err(err.into()),
    };

    let mut display = ComplimentService::new();
    let mut rng = rand::thread_rng();

    println!("sunshine {}", core_version());
    render_page(&mut display, &journal);
    print_help();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        prompt()?;
        let Some(line) = lines.next() else { break };
        let line = line?;

        match parse_command(&line) {
            Command::Quit => break,
            Command::Help => {
                print_help();
                continue;
            }
            Command::Repaint => {}
            Command::Compliment => {
                display.activate(&mut rng);
            }
            Command::Delete(None) => println!("Usage: :d <number>"),
            Command::Delete(Some(position)) => match journal.delete_at(position - 1)? {
                DeleteOutcome::Deleted(_) => {}
                DeleteOutcome::IgnoredOutOfRange => println!("No note at position {position}."),
            },
            Command::Add(text) => match journal.add(text)? {
                AddOutcome::Added => println!("Added! 💖 Your gratitude has been saved"),
                AddOutcome::IgnoredBlank => {}
            },
        }

        render_page(&mut display, &journal);
    }

    Ok(())
}

fn resolve_paths(cli: &Cli) -> Result<(PathBuf, PathBuf), CliError> {
    if let (Some(db), Some(log_dir)) = (&cli.db, &cli.log_dir) {
        return Ok((db.clone(), log_dir.clone()));
    }

    let data_dir = dirs::data_local_dir()
        .ok_or(CliError::DataDirUnavailable)?
        .join(APP_DIR_NAME);
    let db_path = cli
        .db
        .clone()
        .unwrap_or_else(|| data_dir.join(DB_FILE_NAME));
    let log_dir = cli
        .log_dir
        .clone()
        .unwrap_or_else(|| data_dir.join(LOG_DIR_NAME));
    Ok((db_path, log_dir))
}

fn parse_command(line: &str) -> Command<'_> {
    let trimmed = line.trim();
    if let Some(rest) = trimmed.strip_prefix(':') {
        let mut parts = rest.split_whitespace();
        return match parts.next() {
            Some("c") => Command::Compliment,
            Some("d") => Command::Delete(
                parts
                    .next()
                    .and_then(|raw| raw.parse::<usize>().ok())
                    .filter(|&position| position >= 1),
            ),
            Some("l") => Command::Repaint,
            Some("q") => Command::Quit,
            _ => Command::Help,
        };
    }
    Command::Add(line)
}

fn render_page<S: KeyValueStore>(
    display: &mut ComplimentService<SystemClock>,
    journal: &JournalService<S>,
) {
    display.tick();

    println!();
    println!("☀️  Daily Sunshine");
    println!("Your daily dose of positivity and gratitude");
    println!();

    if let Some(compliment) = display.visible_compliment() {
        println!("✨ {compliment}");
        println!();
    }

    if journal.is_empty() {
        println!("No notes yet. Start your gratitude journey! 💝");
    } else {
        println!("Gratitude Journal");
        for (position, note) in journal.notes().iter().enumerate() {
            println!("  {:>2}. {note}", position + 1);
        }
    }
}

fn print_help() {
    println!();
    println!("Write down what you're grateful for and press Enter to add it.");
    println!("  :c        get your compliment");
    println!("  :d <n>    remove note n (✕)");
    println!("  :l        repaint the page");
    println!("  :q        quit");
}

fn prompt() -> Result<(), CliError> {
    let mut stdout = io::stdout();
    write!(stdout, "I'm grateful for... > ")?;
    stdout.flush()?;
    Ok(())
}
