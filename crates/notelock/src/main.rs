//! `notelock` - CLI for the PIN-gated note client
//!
//! This binary wires the configuration, store, and interactive shell
//! together and dispatches the management subcommands.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::{stdin, stdout};

use clap::Parser;

use notelock::cli::{run_shell, Cli, Command, ConfigCommand, PinCommand, ShellCommand};
use notelock::{init_logging, unlock, Config, Error, MemoryStore, NoteStore, Session, SqliteStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::Shell(shell_cmd) => handle_shell(&config, &shell_cmd).await,
        Command::Pin(pin_cmd) => handle_pin(&config, pin_cmd).await,
        Command::Status(status_cmd) => handle_status(&config, status_cmd.json).await,
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

fn open_store(config: &Config) -> anyhow::Result<SqliteStore> {
    Ok(SqliteStore::open(config.database_path())?)
}

async fn handle_shell(config: &Config, cmd: &ShellCommand) -> anyhow::Result<()> {
    let store: Box<dyn NoteStore> = if cmd.memory {
        Box::new(MemoryStore::new())
    } else {
        Box::new(open_store(config)?)
    };

    run_shell(store.as_ref(), config, stdin().lock(), stdout()).await?;
    Ok(())
}

async fn handle_pin(config: &Config, cmd: PinCommand) -> anyhow::Result<()> {
    let store = open_store(config)?;

    match cmd {
        PinCommand::Set { value } => {
            if value.len() != config.auth.pin_length {
                anyhow::bail!(
                    "PIN must be exactly {} characters (got {})",
                    config.auth.pin_length,
                    value.len()
                );
            }
            store.write_pin(&value).await?;
            println!("PIN set.");
        }
        PinCommand::Check { value } => {
            let mut session = Session::new();
            let outcome = unlock(&mut session, &store, &value).await;
            if !outcome.is_granted() {
                anyhow::bail!("{}", outcome.message());
            }
            println!("{}", outcome.message());
        }
    }
    Ok(())
}

async fn handle_status(config: &Config, json: bool) -> anyhow::Result<()> {
    let store = open_store(config)?;
    let note_count = store.list_notes().await?.len();
    let pin_set = match store.read_pin().await {
        Ok(_) => true,
        Err(Error::PinMissing) => false,
        Err(e) => return Err(e.into()),
    };

    if json {
        let status = serde_json::json!({
            "backend": store.name(),
            "database_path": config.database_path(),
            "notes": note_count,
            "pin_set": pin_set,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("notelock status");
        println!("---------------");
        println!("Backend:   {}", store.name());
        println!("Database:  {}", config.database_path().display());
        println!("Notes:     {note_count}");
        println!("PIN set:   {}", if pin_set { "yes" } else { "no" });
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Store]");
                println!("  Database path: {}", config.database_path().display());
                println!();
                println!("[Auth]");
                println!("  PIN length:    {}", config.auth.pin_length);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
