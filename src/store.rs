use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::models::User;

/// In-memory user store shared across axum handlers
///
/// Cloning is cheap and every clone points at the same map. Each operation
/// holds the lock for its full duration, so concurrent requests never observe
/// a half-applied mutation.
#[derive(Clone, Default)]
pub struct UserStore {
    inner: Arc<Mutex<BTreeMap<u64, User>>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn users(&self) -> MutexGuard<'_, BTreeMap<u64, User>> {
        // Mutations never panic halfway, so the map is consistent even if poisoned
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up a user by id
    pub fn get(&self, id: u64) -> Option<User> {
        self.users().get(&id).cloned()
    }

    /// Insert a new user
    ///
    /// Returns `None` without touching the existing record if `id` is taken.
    pub fn create(&self, id: u64, name: impl Into<String>) -> Option<User> {
        let mut users = self.users();
        if users.contains_key(&id) {
            return None;
        }
        let user = User {
            id,
            name: name.into(),
        };
        users.insert(id, user.clone());
        Some(user)
    }

    /// Rename an existing user in place
    ///
    /// Returns `None` if `id` is not present; nothing is inserted in that case.
    pub fn update(&self, id: u64, name: impl Into<String>) -> Option<User> {
        let mut users = self.users();
        let user = users.get_mut(&id)?;
        user.name = name.into();
        Some(user.clone())
    }

    /// Remove a user. Deleting an absent id is a no-op.
    pub fn delete(&self, id: u64) {
        if self.users().remove(&id).is_none() {
            tracing::debug!("Delete of absent user id: {}", id);
        }
    }

    /// Snapshot of every stored user, ordered by id
    pub fn list(&self) -> BTreeMap<u64, User> {
        self.users().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_then_get() {
        let store = UserStore::new();

        let created = store.create(7, "Ada").expect("fresh id should be created");
        assert_eq!(created, User { id: 7, name: "Ada".to_string() });

        let fetched = store.get(7).expect("created user should be readable");
        assert_eq!(fetched.name, "Ada");
    }

    #[test]
    fn test_get_missing_returns_none() {
        let store = UserStore::new();
        assert!(store.get(42).is_none());
    }

    #[test]
    fn test_create_conflict_keeps_first_name() {
        let store = UserStore::new();

        assert!(store.create(1, "first").is_some());
        assert!(store.create(1, "second").is_none(), "second create must conflict");

        assert_eq!(store.get(1).unwrap().name, "first");
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_update_existing() {
        let store = UserStore::new();
        store.create(5, "John");

        let updated = store.update(5, "Jane").expect("existing user should update");
        assert_eq!(updated.id, 5);
        assert_eq!(updated.name, "Jane");
        assert_eq!(store.get(5).unwrap().name, "Jane");
    }

    #[test]
    fn test_update_missing_does_not_insert() {
        let store = UserStore::new();

        assert!(store.update(9, "ghost").is_none());
        assert!(store.get(9).is_none());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_delete_existing_and_missing() {
        let store = UserStore::new();
        store.create(3, "x");

        store.delete(3);
        assert!(store.get(3).is_none());

        // Second delete is silent
        store.delete(3);
        store.delete(1000);
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_list_is_ordered_by_id() {
        let store = UserStore::new();
        store.create(30, "c");
        store.create(10, "a");
        store.create(20, "b");

        let ids: Vec<u64> = store.list().into_keys().collect();
        assert_eq!(ids, vec![10, 20, 30]);
    }

    #[test]
    fn test_clones_share_state() {
        let store = UserStore::new();
        let other = store.clone();

        store.create(1, "shared");
        assert_eq!(other.get(1).unwrap().name, "shared");
    }

    #[test]
    fn test_separate_stores_are_isolated() {
        let a = UserStore::new();
        let b = UserStore::new();

        a.create(1, "only in a");
        assert!(b.get(1).is_none());
    }

    #[test]
    fn test_concurrent_creates_single_winner() {
        let store = UserStore::new();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || store.create(99, format!("writer-{}", i)).is_some())
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();

        assert_eq!(winners, 1);
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<UserStore>();
    }
}
