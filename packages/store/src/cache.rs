//! Cached entity lists keyed by [`EncodedId`].
//!
//! The UI stores keep plain `Vec`s in request order. These helpers are the only
//! way they mutate them, which keeps identifiers unique within a list.

use std::collections::HashSet;

use crate::models::{Comment, EncodedId, Ingredient, Recipe, Tag};

/// An entity addressable by its opaque identifier.
pub trait Keyed {
    fn key(&self) -> &EncodedId;
}

impl Keyed for Recipe {
    fn key(&self) -> &EncodedId {
        &self.encoded_id
    }
}

impl Keyed for Comment {
    fn key(&self) -> &EncodedId {
        &self.encoded_id
    }
}

impl Keyed for Tag {
    fn key(&self) -> &EncodedId {
        &self.encoded_id
    }
}

impl Keyed for Ingredient {
    fn key(&self) -> &EncodedId {
        &self.encoded_id
    }
}

/// What a mutation did to the cached list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheOutcome {
    Inserted,
    Merged,
    Removed(usize),
    /// No entry carried the identifier; the list is unchanged.
    Missing,
}

impl CacheOutcome {
    pub fn is_missing(self) -> bool {
        self == CacheOutcome::Missing
    }
}

/// A server payload together with what caching it did locally.
#[derive(Clone, Debug, PartialEq)]
pub struct Synced<T> {
    pub entity: T,
    pub cache: CacheOutcome,
}

/// Replace the list with `items`, dropping later duplicates.
pub fn replace_all<T: Keyed>(list: &mut Vec<T>, items: Vec<T>) {
    let mut seen = HashSet::new();
    list.clear();
    for item in items {
        if seen.insert(item.key().clone()) {
            list.push(item);
        }
    }
}

/// Append to the tail, or overwrite in place if the identifier is cached.
pub fn append<T: Keyed>(list: &mut Vec<T>, item: T) -> CacheOutcome {
    match list.iter_mut().find(|existing| existing.key() == item.key()) {
        Some(existing) => {
            *existing = item;
            CacheOutcome::Merged
        }
        None => {
            list.push(item);
            CacheOutcome::Inserted
        }
    }
}

/// Overwrite the entry with the same identifier, keeping its position.
pub fn merge<T: Keyed>(list: &mut [T], item: T) -> CacheOutcome {
    let key = item.key().clone();
    merge_with(list, &key, move |existing| *existing = item)
}

/// Patch the entry with `key` in place.
pub fn merge_with<T: Keyed>(
    list: &mut [T],
    key: &EncodedId,
    patch: impl FnOnce(&mut T),
) -> CacheOutcome {
    match list.iter_mut().find(|existing| existing.key() == key) {
        Some(existing) => {
            patch(existing);
            CacheOutcome::Merged
        }
        None => CacheOutcome::Missing,
    }
}

/// Remove every entry with `key`.
pub fn remove<T: Keyed>(list: &mut Vec<T>, key: &EncodedId) -> CacheOutcome {
    let before = list.len();
    list.retain(|existing| existing.key() != key);
    match before - list.len() {
        0 => CacheOutcome::Missing,
        n => CacheOutcome::Removed(n),
    }
}
