//! Command line front end.
//!
//! # Responsibility
//! - Map subcommands onto to-do intents over a SQLite-backed slot.
//! - Run the built-in conformance catalog.
//!
//! Items are addressed by 1-based position in the unfiltered list.

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;
use todo_core::config::DEFAULT_DB_FILE_NAME;
use todo_core::{
    builtin_scenarios, init_logging, run_suite, Filter, Intent, ItemId, ModelDriver, Outcome,
    SlotRepository, SqliteSlotRepository, TodoConfig, TodoService, DEFAULT_SLOT_KEY,
};

#[derive(Parser)]
#[command(name = "todo", version, about = "To-do list over a persistent storage slot")]
struct Cli {
    /// SQLite database file holding the storage slot
    #[arg(long, env = "TODO_DB", default_value = DEFAULT_DB_FILE_NAME)]
    db: PathBuf,

    /// Storage slot key for the persisted snapshot
    #[arg(long, env = "TODO_SLOT_KEY", default_value = DEFAULT_SLOT_KEY)]
    slot_key: String,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, env = "TODO_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off without it
    #[arg(long, env = "TODO_LOG_DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check core linkage
    Ping,
    /// Add a new item
    Add {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// List items
    List {
        #[arg(long, default_value = "all", value_parser = parse_filter)]
        filter: Filter,
    },
    /// Flip the completed state of one item
    Toggle { position: usize },
    /// Mark every item completed, or active with --clear
    ToggleAll {
        #[arg(long)]
        clear: bool,
    },
    /// Replace an item's title; blank text deletes the item
    Edit {
        position: usize,
        #[arg(num_args = 0..)]
        text: Vec<String>,
    },
    /// Delete one item
    Delete { position: usize },
    /// Remove all completed items
    ClearCompleted,
    /// Run the built-in conformance scenarios against the in-process model
    Conformance,
}

fn parse_filter(value: &str) -> Result<Filter, String> {
    Filter::parse(value)
        .ok_or_else(|| format!("unknown filter `{value}`; expected all|active|completed"))
}

impl Cli {
    fn config(&self) -> TodoConfig {
        let defaults = TodoConfig::default();
        TodoConfig {
            slot_key: self.slot_key.clone(),
            db_path: Some(self.db.clone()),
            log_level: self.log_level.clone().unwrap_or(defaults.log_level),
            log_dir: self.log_dir.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();
    config.validate().map_err(|err| anyhow!(err))?;

    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir).map_err(|err| anyhow!(err))?;
    }

    match cli.command {
        Command::Ping => {
            println!("todo_core ping={}", todo_core::ping());
            println!("todo_core version={}", todo_core::core_version());
            Ok(())
        }
        Command::Conformance => run_conformance(&config),
        command => run_command(&config, command),
    }
}

fn run_conformance(config: &TodoConfig) -> Result<()> {
    let scenarios = builtin_scenarios();
    let report = run_suite(&scenarios, || ModelDriver::in_memory(&config.slot_key));

    for scenario in &report.reports {
        match &scenario.failure {
            None => println!("ok   {}", scenario.name),
            Some(failure) => println!(
                "FAIL {} (step {}): {}",
                scenario.name, failure.step, failure.message
            ),
        }
    }
    println!(
        "{} passed, {} failed",
        report.passed_count(),
        report.reports.len() - report.passed_count()
    );

    if !report.is_success() {
        bail!("conformance suite failed");
    }
    Ok(())
}

fn run_command(config: &TodoConfig, command: Command) -> Result<()> {
    let conn = config.open_db().with_context(|| match &config.db_path {
        Some(path) => format!("failed to open database `{}`", path.display()),
        None => "failed to open in-memory database".to_string(),
    })?;
    let mut service =
        TodoService::open(SqliteSlotRepository::new(&conn), config.slot_key.as_str());

    let intent = match command {
        Command::Add { text } => Intent::Add(text.join(" ")),
        Command::List { filter } => {
            service.apply(Intent::SetFilter(filter))?;
            print_list(&service);
            return Ok(());
        }
        Command::Toggle { position } => Intent::ToggleOne(item_at(&service, position)?),
        Command::ToggleAll { clear } => Intent::ToggleAll(!clear),
        Command::Edit { position, text } => {
            let id = item_at(&service, position)?;
            service.apply(Intent::BeginEdit(id))?;
            Intent::EditCommit {
                id,
                text: text.join(" "),
            }
        }
        Command::Delete { position } => Intent::Destroy(item_at(&service, position)?),
        Command::ClearCompleted => Intent::ClearCompleted,
        Command::Ping | Command::Conformance => bail!("command does not operate on storage"),
    };

    let outcome = service.apply(intent)?;
    info!(
        "event=cli_command module=cli status=ok mutated={}",
        outcome.is_mutated()
    );
    if outcome == Outcome::Unchanged {
        println!("nothing changed");
    }
    print_list(&service);
    Ok(())
}

fn item_at<R: SlotRepository>(service: &TodoService<R>, position: usize) -> Result<ItemId> {
    position
        .checked_sub(1)
        .and_then(|index| service.items().get(index))
        .map(|item| item.id)
        .ok_or_else(|| {
            anyhow!(
                "no item at position {position} ({} items)",
                service.items().len()
            )
        })
}

fn print_list<R: SlotRepository>(service: &TodoService<R>) {
    let view = service.view();
    if !view.show_main {
        println!("(no items)");
        return;
    }
    for row in &view.items {
        let position = service.store().position(row.id).map_or(0, |index| index + 1);
        let mark = if row.completed { "x" } else { " " };
        println!("[{mark}] {position}. {}", row.title);
    }
    let mut footer = format!("{} ({})", view.remaining_label, view.filter);
    if view.show_clear_completed {
        footer.push_str(&format!(", {} completed", view.completed_count));
    }
    println!("{footer}");
}
