use serde::{Deserialize, Serialize};

use crate::{
    model::{LocationId, LocationWeather},
    storage::{KeyValueStore, StorageError},
};

/// Storage key holding the serialized bookmark list.
pub const SAVED_LOCATIONS_KEY: &str = "saved_locations";

/// Ordered bookmark list, unique by location id.
///
/// Values are immutable snapshots: [`add`](Self::add) and
/// [`remove`](Self::remove) return a new set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<LocationWeather>", into = "Vec<LocationWeather>")]
pub struct SavedLocations(Vec<LocationWeather>);

impl SavedLocations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `location` unless its id is already saved. An existing entry is
    /// kept as is, even if `location` carries newer data.
    pub fn add(&self, location: LocationWeather) -> Self {
        if self.contains(location.id) {
            return self.clone();
        }
        let mut entries = self.0.clone();
        entries.push(location);
        Self(entries)
    }

    pub fn remove(&self, id: LocationId) -> Self {
        Self(self.0.iter().filter(|w| w.id != id).cloned().collect())
    }

    pub fn contains(&self, id: LocationId) -> bool {
        self.0.iter().any(|w| w.id == id)
    }

    pub fn get(&self, id: LocationId) -> Option<&LocationWeather> {
        self.0.iter().find(|w| w.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocationWeather> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Duplicate ids in stored data keep their first occurrence.
impl From<Vec<LocationWeather>> for SavedLocations {
    fn from(entries: Vec<LocationWeather>) -> Self {
        entries
            .into_iter()
            .fold(SavedLocations::new(), |set, w| set.add(w))
    }
}

impl From<SavedLocations> for Vec<LocationWeather> {
    fn from(set: SavedLocations) -> Self {
        set.0
    }
}

impl<'a> IntoIterator for &'a SavedLocations {
    type Item = &'a LocationWeather;
    type IntoIter = std::slice::Iter<'a, LocationWeather>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Bookmark list mirrored to a [`KeyValueStore`] under [`SAVED_LOCATIONS_KEY`].
#[derive(Debug)]
pub struct BookmarkStore<S> {
    storage: S,
    saved: SavedLocations,
}

impl<S: KeyValueStore> BookmarkStore<S> {
    /// Hydrate from storage. Missing, unreadable or malformed data yields an
    /// empty list.
    pub fn load(storage: S) -> Self {
        let saved = match storage.get(SAVED_LOCATIONS_KEY) {
            Ok(Some(raw)) => serde_json::from_str::<SavedLocations>(&raw).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "ignoring malformed saved locations");
                SavedLocations::new()
            }),
            Ok(None) => SavedLocations::new(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read saved locations");
                SavedLocations::new()
            }
        };

        tracing::debug!(count = saved.len(), "saved locations loaded");
        Self { storage, saved }
    }

    pub fn saved(&self) -> &SavedLocations {
        &self.saved
    }

    pub fn contains(&self, id: LocationId) -> bool {
        self.saved.contains(id)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Save `location`; returns `Ok(false)` when its id is already present.
    ///
    /// On a write error the in-memory list still holds the new entry.
    pub fn add(&mut self, location: LocationWeather) -> Result<bool, StorageError> {
        if self.saved.contains(location.id) {
            return Ok(false);
        }
        let id = location.id;
        self.saved = self.saved.add(location);
        tracing::info!(id, "location saved");
        self.persist()?;
        Ok(true)
    }

    /// Drop the bookmark with `id`; returns `Ok(false)` when nothing matched.
    pub fn remove(&mut self, id: LocationId) -> Result<bool, StorageError> {
        if !self.saved.contains(id) {
            return Ok(false);
        }
        self.saved = self.saved.remove(id);
        tracing::info!(id, "location removed");
        self.persist()?;
        Ok(true)
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.saved)?;
        self.storage.set(SAVED_LOCATIONS_KEY, &json)
    }
}
