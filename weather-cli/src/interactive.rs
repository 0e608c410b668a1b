use std::fmt;

use anyhow::Result;
use inquire::{InquireError, Select, Text};
use weather_core::{Dashboard, KeyValueStore, LocationId, View, display};

use crate::render;

enum Action {
    Search,
    Open(LocationId, String),
    Remove(LocationId, String),
    Pick(usize, String),
    NewSearch,
    Back,
    Save(&'static str),
    Quit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Search => f.write_str("Search for a city"),
            Action::Open(_, title) => write!(f, "Open {title}"),
            Action::Remove(_, title) => write!(f, "Remove {title}"),
            Action::Pick(_, row) => f.write_str(row),
            Action::NewSearch => f.write_str("Search again"),
            Action::Back => f.write_str("Back to Search"),
            Action::Save(label) => f.write_str(label),
            Action::Quit => f.write_str("Quit"),
        }
    }
}

/// Drive the dashboard until the user quits or cancels a prompt.
pub async fn run<S: KeyValueStore>(dashboard: &mut Dashboard<S>) -> Result<()> {
    loop {
        println!();
        if let Some(message) = dashboard.error_banner() {
            print!("{}", render::banner(&message));
        }

        let actions = match dashboard.view() {
            View::Search => {
                print!("{}", render::saved_grid(dashboard.saved()));
                search_actions(dashboard)
            }
            View::Results(results) => {
                print!("{}", render::results(results));
                let mut actions: Vec<_> = results
                    .iter()
                    .enumerate()
                    .map(|(i, location)| Action::Pick(i, display::result_row(location)))
                    .collect();
                actions.push(Action::NewSearch);
                actions.push(Action::Quit);
                actions
            }
            View::Detail(location) => {
                let label = dashboard.save_label().unwrap_or("Save");
                print!("{}", render::detail(location, label));
                vec![Action::Back, Action::Save(label), Action::Quit]
            }
        };

        let Some(action) = prompt(Select::new("What next?", actions).prompt())? else {
            return Ok(());
        };

        match action {
            Action::Search | Action::NewSearch => {
                let Some(query) = prompt(Text::new("City name:").prompt())? else {
                    return Ok(());
                };
                dashboard.set_query(query);
                println!("Searching...");
                dashboard.submit_search().await;
            }
            Action::Open(id, _) => {
                dashboard.open_saved(id);
            }
            Action::Remove(id, _) => {
                dashboard.remove_saved(id);
            }
            Action::Pick(index, _) => {
                dashboard.select_result(index);
            }
            Action::Back => {
                dashboard.back();
            }
            Action::Save(_) => {
                // "Saved" is a no-op inside the store.
                dashboard.save_selected();
            }
            Action::Quit => return Ok(()),
        }
    }
}

fn search_actions<S: KeyValueStore>(dashboard: &Dashboard<S>) -> Vec<Action> {
    let mut actions = vec![Action::Search];
    for location in dashboard.saved() {
        actions.push(Action::Open(location.id, location.display_name()));
    }
    for location in dashboard.saved() {
        actions.push(Action::Remove(location.id, location.display_name()));
    }
    actions.push(Action::Quit);
    actions
}

/// Treat Esc / Ctrl-C as leaving the dashboard.
fn prompt<T>(answer: Result<T, InquireError>) -> Result<Option<T>> {
    match answer {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
