//! One module per subcommand. Each returns the JSON document it prints so
//! tests can inspect it without capturing stdout.

/// `ads` subcommand.
pub mod ads;
/// `login` and `logout` subcommands.
pub mod auth;
/// `delete` subcommand.
pub mod delete;
/// `flash` subcommand.
pub mod flash;
/// `list` subcommand.
pub mod list;
/// `show` subcommand.
pub mod show;

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

use crate::{cli::Commands, client::ContentClient};

/// Execute `command` and print its output.
pub async fn run(client: &ContentClient, command: Commands) -> Result<()> {
    let output = execute(client, command).await?;
    print_json(&output)
}

/// Execute `command` and return its output document.
pub async fn execute(client: &ContentClient, command: Commands) -> Result<Value> {
    match command {
        Commands::List {
            collection,
            page,
            per_page,
        } => list::run(client, collection, page, per_page).await,
        Commands::Show {
            category,
            slug,
            origin,
        } => show::run(client, category, &slug, &origin).await,
        Commands::Ads {
            page,
            shape,
        } => ads::run(client, &page, shape.map(Into::into)).await,
        Commands::Flash => flash::run(client).await,
        Commands::Login {
            username,
            password,
        } => auth::login(client, username, password).await,
        Commands::Logout {
            token,
        } => auth::logout(client, &token).await,
        Commands::Delete {
            collection,
            id,
            token,
        } => delete::run(client, collection, &id, &token).await,
    }
}

pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
