use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode};
use weather_core::{
    BookmarkStore, Config, Dashboard, FileStore, LocationId, View, provider::provider_from_config,
};

use crate::{interactive, render};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-dash", version, about = "Weather lookup dashboard")]
pub struct Cli {
    /// Log debug output to stderr (overridden by RUST_LOG).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Interactive dashboard: search, inspect and bookmark locations (default).
    Dashboard,

    /// List locations matching a city name.
    Search {
        /// City name, e.g. "Paris" or "Paris,FR".
        city: String,
    },

    /// Show the detail view for one matching location.
    Show {
        /// City name.
        city: String,

        /// Which match to show, starting at 1.
        #[arg(long, default_value_t = 1)]
        index: usize,

        /// Bookmark the shown location.
        #[arg(long)]
        save: bool,
    },

    /// List saved locations.
    Saved,

    /// Remove a saved location by id.
    Remove {
        /// Location id as shown by `saved`.
        id: LocationId,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load()?;

        match self.command.unwrap_or(Command::Dashboard) {
            Command::Configure => configure(&mut config)?,
            Command::Dashboard => {
                if !config.is_configured() {
                    println!("No API key configured yet.");
                    configure(&mut config)?;
                }
                let mut dashboard = open_dashboard(&config)?;
                interactive::run(&mut dashboard).await?;
            }
            Command::Search { city } => {
                let mut dashboard = open_dashboard(&config)?;
                search(&mut dashboard, city).await?;
                if let View::Results(results) = dashboard.view() {
                    print!("{}", render::results(results));
                }
            }
            Command::Show { city, index, save } => {
                let mut dashboard = open_dashboard(&config)?;
                search(&mut dashboard, city).await?;
                let picked = index
                    .checked_sub(1)
                    .is_some_and(|i| dashboard.select_result(i));
                if !picked {
                    return Err(anyhow!("No match number {index} for this search"));
                }
                if save {
                    dashboard.save_selected();
                }
                if let Some(location) = dashboard.selected() {
                    print!(
                        "{}",
                        render::detail(location, dashboard.save_label().unwrap_or("Save"))
                    );
                }
            }
            Command::Saved => {
                let store = BookmarkStore::load(file_store(&config)?);
                print!("{}", render::saved_grid(store.saved()));
            }
            Command::Remove { id } => {
                let mut store = BookmarkStore::load(file_store(&config)?);
                if store
                    .remove(id)
                    .context("Failed to update saved locations")?
                {
                    println!("Removed location {id}.");
                } else {
                    println!("No saved location with id {id}.");
                }
            }
        }

        Ok(())
    }
}

fn configure(config: &mut Config) -> anyhow::Result<()> {
    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .with_help_message("Get one at https://openweathermap.org/api")
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

fn file_store(config: &Config) -> anyhow::Result<FileStore> {
    let path = config.storage_path()?;
    tracing::debug!(path = %path.display(), "using saved-locations storage");
    Ok(FileStore::new(path))
}

fn open_dashboard(config: &Config) -> anyhow::Result<Dashboard<FileStore>> {
    let provider = provider_from_config(config)?;
    let bookmarks = BookmarkStore::load(file_store(config)?);
    Ok(Dashboard::new(provider, bookmarks))
}

/// One-shot search; the banner text becomes the command's error.
async fn search(dashboard: &mut Dashboard<FileStore>, city: String) -> anyhow::Result<()> {
    dashboard.set_query(city);
    dashboard.submit_search().await;

    match dashboard.error_banner() {
        Some(banner) => Err(anyhow!(banner)),
        None => Ok(()),
    }
}
