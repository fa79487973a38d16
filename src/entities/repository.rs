//! In-memory record store shared between the UI and background mutations.

use crate::entities::Record;
use anyhow::{anyhow, bail, Result};
use std::sync::{Arc, Mutex, MutexGuard};

/// A list of records behind a shared lock.
///
/// Clones share the same list, so a worker thread can apply a mutation that
/// the UI sees on its next snapshot.
#[derive(Debug)]
pub struct MockRepository<T> {
    items: Arc<Mutex<Vec<T>>>,
}

impl<T> Clone for MockRepository<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T: Record> MockRepository<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: Arc::new(Mutex::new(items)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<T>>> {
        self.items
            .lock()
            .map_err(|_| anyhow!("record store lock poisoned"))
    }

    /// Copy of the current records.
    pub fn snapshot(&self) -> Vec<T> {
        match self.items.lock() {
            Ok(items) => items.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends a record with the next free id (one past the largest) and
    /// returns that id.
    pub fn add(&self, mut item: T) -> Result<u32> {
        let mut items = self.lock()?;
        let last = items.iter().map(|existing| existing.id()).max().unwrap_or(0);
        let id = last
            .checked_add(1)
            .ok_or_else(|| anyhow!("record ids exhausted"))?;
        item.set_id(id);
        items.push(item);
        tracing::debug!(id, "record added");
        Ok(id)
    }

    /// Replaces the record with the same id.
    pub fn update(&self, item: T) -> Result<()> {
        let mut items = self.lock()?;
        let id = item.id();
        match items.iter_mut().find(|existing| existing.id() == id) {
            Some(slot) => {
                *slot = item;
                tracing::debug!(id, "record updated");
                Ok(())
            }
            None => bail!("no record with id {id}"),
        }
    }

    /// Removes the record with the given id.
    pub fn delete(&self, id: u32) -> Result<()> {
        let mut items = self.lock()?;
        let before = items.len();
        items.retain(|item| item.id() != id);
        if items.len() == before {
            bail!("no record with id {id}");
        }
        tracing::debug!(id, "record deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::product::Product;

    fn product(id: u32, name: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            price: 10.0,
            category: "Misc".to_string(),
            stock: 1,
        }
    }

    #[test]
    fn test_add_assigns_next_id() {
        let repo = MockRepository::new(vec![product(1, "a"), product(2, "b")]);
        let id = repo.add(product(0, "c")).unwrap();
        assert_eq!(id, 3);
        assert_eq!(repo.snapshot()[2].id, 3);
    }

    #[test]
    fn test_ids_stay_unique_after_delete() {
        let repo = MockRepository::new(vec![product(1, "a"), product(2, "b")]);
        repo.delete(1).unwrap();
        assert_eq!(repo.add(product(0, "c")).unwrap(), 3);
        let ids: Vec<u32> = repo.snapshot().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);

        // deleting one record leaves its neighbour alone
        repo.delete(2).unwrap();
        let rest = repo.snapshot();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].name, "c");
    }

    #[test]
    fn test_add_to_empty_store_starts_at_one() {
        let repo: MockRepository<Product> = MockRepository::new(Vec::new());
        assert_eq!(repo.add(product(0, "first")).unwrap(), 1);
    }

    #[test]
    fn test_update_replaces_by_id() {
        let repo = MockRepository::new(vec![product(1, "a"), product(2, "b")]);
        repo.update(product(2, "renamed")).unwrap();
        assert_eq!(repo.snapshot()[1].name, "renamed");
        assert!(repo.update(product(9, "x")).is_err());
    }

    #[test]
    fn test_delete_removes_by_id() {
        let repo = MockRepository::new(vec![product(1, "a"), product(2, "b")]);
        repo.delete(1).unwrap();
        assert_eq!(repo.len(), 1);
        assert!(repo.delete(1).is_err());
    }

    #[test]
    fn test_clones_share_records() {
        let repo = MockRepository::new(vec![product(1, "a")]);
        let worker = repo.clone();
        worker.delete(1).unwrap();
        assert!(repo.is_empty());
    }
}
