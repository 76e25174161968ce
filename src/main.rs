mod analytics;
mod cli;
mod config;
mod db;
mod directory;
mod error;
mod feed;
mod panel;
mod profile;
mod rating;
mod report;

use clap::Parser;
use cli::{BookmarkCommand, Cli, Command, EmployeeCommand};

use crate::feed::FeedFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Open local storage
    let db_path = config::db_path()?;
    let db = db::Database::open(&db_path)?;

    // Pick the employee source
    let sources = directory::build_source_registry(&config::api_url()?)?;
    let source = directory::select_source(&sources, &cli.source)?;
    tracing::debug!("Using employee source {}", source.name());
    let source = source.as_ref();

    match cli.command {
        Command::Feed {
            search,
            department,
            rating,
            limit,
            interactive,
        } => {
            let filter = FeedFilter {
                search: search.unwrap_or_default(),
                departments: department,
                ratings: rating,
            };
            cli::feed::feed(&db, source, filter, limit, interactive).await?;
        }
        Command::Employee { command } => match command {
            EmployeeCommand::Show { id } => cli::employee::show(&db, source, id).await?,
            EmployeeCommand::Promote { id } => cli::employee::promote(source, id).await?,
        },
        Command::Bookmark { command } => match command {
            BookmarkCommand::List => cli::bookmark::list_bookmarks(&db)?,
            BookmarkCommand::Add { id } => cli::bookmark::add_bookmark(&db, source, id).await?,
            BookmarkCommand::Remove { id } => cli::bookmark::remove_bookmark(&db, id)?,
            BookmarkCommand::Toggle { id } => {
                cli::bookmark::toggle_bookmark(&db, source, id).await?
            }
            BookmarkCommand::Clear => cli::bookmark::clear_bookmarks(&db)?,
            BookmarkCommand::Promote { id } => cli::bookmark::promote(&db, id)?,
            BookmarkCommand::Assign { id } => cli::bookmark::assign_to_project(&db, id)?,
        },
        Command::Analytics {
            format,
            output,
            limit,
            seed,
        } => {
            cli::analytics::analytics(&db, source, format, output.as_deref(), limit, seed).await?;
        }
        Command::Tabs { tab } => cli::panel::show_tab(source, tab).await?,
    }

    Ok(())
}
