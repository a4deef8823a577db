//! `fitlog` — terminal client for the fitlog server.
//!
//! # Usage
//!
//! ```
//! fitlog create-user alice
//! fitlog users
//! fitlog add <user-id> "morning run" 30 --date 2024-01-15
//! fitlog log <user-id> --from 2024-01-01 --limit 10
//! ```

mod client;

use anyhow::Result;
use clap::{Parser, Subcommand};
use client::{ApiClient, ApiConfig};

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "fitlog", about = "Terminal client for the fitlog server")]
struct Args {
  /// Base URL of the fitlog server.
  #[arg(long, env = "FITLOG_URL", default_value = "http://localhost:3000")]
  url: String,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// List all users.
  Users,

  /// Create a user.
  CreateUser {
    username: String,
  },

  /// Log an exercise against a user.
  Add {
    user_id:     String,
    description: String,
    duration:    i64,
    /// Calendar date (`YYYY-MM-DD`); defaults to today.
    #[arg(long)]
    date:        Option<String>,
  },

  /// Show a user's exercise log.
  Log {
    user_id: String,
    /// Keep entries dated on or after this date.
    #[arg(long)]
    from:    Option<String>,
    /// Keep entries dated on or before this date.
    #[arg(long)]
    to:      Option<String>,
    /// Keep at most this many entries.
    #[arg(long)]
    limit:   Option<u32>,
  },
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();
  let client = ApiClient::new(ApiConfig { base_url: args.url })?;

  match args.command {
    Command::Users => {
      let users = client.list_users().await?;
      for user in users {
        println!("{}  {}", user.id, user.username);
      }
    }

    Command::CreateUser { username } => {
      let created = client.create_user(&username).await?;
      println!("{}  {}", created.id, created.username);
    }

    Command::Add { user_id, description, duration, date } => {
      let appended = client
        .add_exercise(&user_id, &description, duration, date.as_deref())
        .await?;
      println!(
        "{}: {} ({}) on {}",
        appended.username, appended.description, appended.duration,
        appended.date
      );
    }

    Command::Log { user_id, from, to, limit } => {
      let log = client
        .get_log(&user_id, from.as_deref(), to.as_deref(), limit)
        .await?;
      println!("{} — {} entries", log.username, log.count);
      for entry in log.log {
        println!("  {}  {} ({})", entry.date, entry.description, entry.duration);
      }
    }
  }

  Ok(())
}
