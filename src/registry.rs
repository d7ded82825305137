// Registry: the in-memory restaurant list plus the store it is persisted
// to. Every successful mutation is followed by a full save.

use crate::error::{RegistryError, StoreError};
use crate::model::{title_case, Restaurant};
use crate::store::Store;
use tracing::{debug, info};

/// Owns the loaded records and the store backing them.
#[derive(Debug)]
pub struct Registry {
    store: Store,
    restaurants: Vec<Restaurant>,
}

impl Registry {
    /// Load the records from `store`. Corrupt data yields an empty registry.
    pub fn open(store: Store) -> Result<Self, StoreError> {
        let restaurants = store.load()?;
        debug!(path = %store.path().display(), count = restaurants.len(), "opened registry");
        Ok(Registry { store, restaurants })
    }

    /// Append a new inactive restaurant and persist the list.
    /// Names are not required to be unique; empty strings are accepted.
    pub fn register(&mut self, name: &str, category: &str) -> Result<Restaurant, StoreError> {
        let restaurant = Restaurant::new(name, category);
        self.restaurants.push(restaurant.clone());
        self.store.save(&self.restaurants)?;
        info!(name = %restaurant.name, category = %restaurant.category, "registered restaurant");
        Ok(restaurant)
    }

    /// All records in insertion order.
    pub fn list_all(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// Flip the active flag of the first restaurant named `name`
    /// (compared after title-casing) and persist the list.
    ///
    /// Returns `RegistryError::NotFound` without touching the file when
    /// nothing matches.
    pub fn toggle(&mut self, name: &str) -> Result<Restaurant, RegistryError> {
        let query = title_case(name);
        let restaurant = self
            .restaurants
            .iter_mut()
            .find(|r| r.name == query)
            .ok_or_else(|| RegistryError::NotFound(query.clone()))?;
        let active = restaurant.toggle();
        let updated = restaurant.clone();

        self.store.save(&self.restaurants)?;
        info!(name = %updated.name, active, "toggled restaurant");
        Ok(updated)
    }
}
