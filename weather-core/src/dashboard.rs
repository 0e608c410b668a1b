//! View state and event handling for the weather dashboard.
//!
//! A search runs in two halves: [`Dashboard::begin_search`] validates the
//! query and issues a [`SearchTicket`], and [`Dashboard::complete_search`]
//! applies the provider's answer for that ticket. Any navigation or newer
//! search invalidates outstanding tickets, so a late answer cannot overwrite
//! the view the user has moved on to.

use crate::{
    bookmarks::{BookmarkStore, SavedLocations},
    display,
    model::{LocationId, LocationWeather},
    provider::{LocationSearch, SearchError, search_locations, validate_query},
    storage::KeyValueStore,
};

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Search,
    Results(Vec<LocationWeather>),
    Detail(LocationWeather),
}

/// Handle for one outstanding search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    query: String,
}

impl SearchTicket {
    /// The trimmed query to send to the provider.
    pub fn query(&self) -> &str {
        &self.query
    }
}

#[derive(Debug)]
pub struct Dashboard<S> {
    provider: Box<dyn LocationSearch>,
    bookmarks: BookmarkStore<S>,
    view: View,
    query: String,
    error: Option<SearchError>,
    is_loading: bool,
    generation: u64,
}

impl<S: KeyValueStore> Dashboard<S> {
    pub fn new(provider: Box<dyn LocationSearch>, bookmarks: BookmarkStore<S>) -> Self {
        Self {
            provider,
            bookmarks,
            view: View::Search,
            query: String::new(),
            error: None,
            is_loading: false,
            generation: 0,
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn error(&self) -> Option<&SearchError> {
        self.error.as_ref()
    }

    /// Text of the error banner, if one is shown.
    pub fn error_banner(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn saved(&self) -> &SavedLocations {
        self.bookmarks.saved()
    }

    pub fn bookmarks(&self) -> &BookmarkStore<S> {
        &self.bookmarks
    }

    /// The location shown in the detail view.
    pub fn selected(&self) -> Option<&LocationWeather> {
        match &self.view {
            View::Detail(location) => Some(location),
            _ => None,
        }
    }

    pub fn is_selected_saved(&self) -> bool {
        self.selected()
            .is_some_and(|location| self.bookmarks.contains(location.id))
    }

    /// "Save" / "Saved" while in the detail view.
    pub fn save_label(&self) -> Option<&'static str> {
        self.selected()
            .map(|_| display::save_label(self.is_selected_saved()))
    }

    /// Start a search for the current query.
    ///
    /// Returns `None` when nothing should be sent: a search is already in
    /// flight, the search box is not on screen, or the query is blank (the
    /// banner then shows the validation error).
    pub fn begin_search(&mut self) -> Option<SearchTicket> {
        if self.is_loading {
            tracing::debug!("search already in flight, ignoring submit");
            return None;
        }
        if matches!(self.view, View::Detail(_)) {
            return None;
        }

        let query = match validate_query(&self.query) {
            Ok(query) => query.to_string(),
            Err(err) => {
                self.error = Some(err);
                return None;
            }
        };

        self.error = None;
        self.is_loading = true;
        self.generation += 1;

        Some(SearchTicket {
            generation: self.generation,
            query,
        })
    }

    /// Apply a provider answer. Returns `false` if the ticket was superseded
    /// and the answer was dropped.
    pub fn complete_search(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<Vec<LocationWeather>, SearchError>,
    ) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(query = %ticket.query, "dropping superseded search response");
            return false;
        }

        self.is_loading = false;

        match outcome {
            Ok(results) if results.is_empty() => self.error = Some(SearchError::NoResults),
            Ok(results) => {
                self.error = None;
                self.view = View::Results(results);
            }
            Err(err) => {
                tracing::debug!(error = %err, "search failed");
                self.error = Some(err);
            }
        }
        true
    }

    /// Run a whole search against the injected provider.
    pub async fn submit_search(&mut self) {
        let Some(ticket) = self.begin_search() else {
            return;
        };
        let outcome = search_locations(self.provider.as_ref(), ticket.query()).await;
        self.complete_search(ticket, outcome);
    }

    /// Open the result at `index`; the rest of the list is discarded.
    pub fn select_result(&mut self, index: usize) -> bool {
        let View::Results(results) = &mut self.view else {
            return false;
        };
        if index >= results.len() {
            return false;
        }
        let location = results.swap_remove(index);
        self.show_detail(location);
        true
    }

    /// Open a bookmark card in the detail view.
    pub fn open_saved(&mut self, id: LocationId) -> bool {
        if matches!(self.view, View::Detail(_)) {
            return false;
        }
        let Some(location) = self.bookmarks.saved().get(id).cloned() else {
            return false;
        };
        self.show_detail(location);
        true
    }

    /// Leave the detail view for a fresh search screen.
    pub fn back(&mut self) -> bool {
        if !matches!(self.view, View::Detail(_)) {
            return false;
        }
        self.invalidate_pending();
        self.view = View::Search;
        self.query.clear();
        self.error = None;
        true
    }

    /// Bookmark the location in the detail view. No-op when already saved.
    pub fn save_selected(&mut self) -> bool {
        let Some(location) = self.selected().cloned() else {
            return false;
        };
        match self.bookmarks.add(location) {
            Ok(added) => added,
            Err(err) => {
                tracing::warn!(error = %err, "failed to persist saved locations");
                true
            }
        }
    }

    pub fn remove_saved(&mut self, id: LocationId) -> bool {
        match self.bookmarks.remove(id) {
            Ok(removed) => removed,
            Err(err) => {
                tracing::warn!(error = %err, "failed to persist saved locations");
                true
            }
        }
    }

    fn show_detail(&mut self, location: LocationWeather) {
        self.invalidate_pending();
        self.error = None;
        self.view = View::Detail(location);
    }

    fn invalidate_pending(&mut self) {
        self.generation += 1;
        self.is_loading = false;
    }
}
