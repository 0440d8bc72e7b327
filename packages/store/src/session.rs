//! # Session state — the signed-in user
//!
//! [`SessionState`] holds `Option<SessionUser>` in a [`StateCell`] and mirrors
//! it to storage on every assignment:
//!
//! | Value | Stored under the session key |
//! |-------|------------------------------|
//! | `Some(user)` | the user as JSON |
//! | `None` | `""` (the key stays present once touched) |
//!
//! On load, a missing key, an empty value and a record that does not decode
//! all mean "signed out". A corrupt record is logged and ignored rather than
//! failing startup.

use std::rc::Rc;

use api::SessionUser;

use crate::cell::{Derived, StateCell};
use crate::storage::{load_text, store_text, KeyValueStorage};

#[derive(Clone, Debug)]
pub struct SessionState {
    user: StateCell<Option<SessionUser>>,
    is_authenticated: Derived<bool>,
}

impl SessionState {
    /// Seed from the record under `key` and persist every later change to it.
    pub fn load(storage: Rc<dyn KeyValueStorage>, key: &str) -> Self {
        let user = StateCell::new(read_session(storage.as_ref(), key));

        let key = key.to_string();
        user.subscribe(move |value: &Option<SessionUser>| {
            write_session(storage.as_ref(), &key, value.as_ref())
        })
        .detach();

        let is_authenticated = user.map(Option::is_some);
        Self {
            user,
            is_authenticated,
        }
    }

    /// The observable user cell.
    pub fn user(&self) -> &StateCell<Option<SessionUser>> {
        &self.user
    }

    pub fn current(&self) -> Option<SessionUser> {
        self.user.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated.get()
    }

    /// Replace the cached user. No validation is done.
    pub fn set_user(&self, user: Option<SessionUser>) {
        self.user.set(user);
    }

    pub fn clear_user(&self) {
        self.set_user(None);
    }
}

fn read_session(storage: &dyn KeyValueStorage, key: &str) -> Option<SessionUser> {
    tracing::debug!("checking stored session under {key:?}");
    let text = load_text(storage, key)?;
    match serde_json::from_str::<Option<SessionUser>>(&text) {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!("ignoring unreadable session record under {key:?}: {e}");
            None
        }
    }
}

fn write_session(storage: &dyn KeyValueStorage, key: &str, user: Option<&SessionUser>) {
    let Some(user) = user else {
        store_text(storage, key, "");
        return;
    };
    match serde_json::to_string(user) {
        Ok(json) => store_text(storage, key, &json),
        Err(e) => tracing::warn!("failed to encode session for {key:?}: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::FailingStorage;
    use crate::{FileStorage, MemoryStorage, NoopStorage};

    const KEY: &str = "user";

    fn reload(storage: &MemoryStorage) -> SessionState {
        SessionState::load(Rc::new(storage.clone()), KEY)
    }

    fn dara() -> SessionUser {
        SessionUser::new(7, "Dara", "dara@x.com").with_profile_pic("https://cdn/dara.png")
    }

    #[test]
    fn test_fresh_storage_has_no_session() {
        let storage = MemoryStorage::new();
        let session = reload(&storage);
        assert_eq!(session.current(), None);
        assert!(!session.is_authenticated());
        // Loading alone writes nothing
        assert!(storage.is_empty());
    }

    #[test]
    fn test_set_user_survives_reload() {
        let storage = MemoryStorage::new();
        let session = reload(&storage);

        session.set_user(Some(dara()));
        assert!(session.is_authenticated());

        assert_eq!(reload(&storage).current(), Some(dara()));
    }

    #[test]
    fn test_clear_user_writes_tombstone() {
        let storage = MemoryStorage::new();
        let session = reload(&storage);
        session.set_user(Some(dara()));
        session.clear_user();

        assert_eq!(storage.get_item(KEY).unwrap().as_deref(), Some(""));
        assert!(!session.is_authenticated());
        assert_eq!(reload(&storage).current(), None);
    }

    #[test]
    fn test_set_user_is_idempotent() {
        let storage = MemoryStorage::new();
        let session = reload(&storage);

        session.set_user(Some(dara()));
        let once = storage.get_item(KEY).unwrap();
        session.set_user(Some(dara()));
        let twice = storage.get_item(KEY).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_equal_reassignment_is_persisted() {
        let storage = MemoryStorage::new();
        let session = reload(&storage);
        session.set_user(Some(dara()));

        // Someone else clobbers the record; re-setting the same user restores it
        storage.set_item(KEY, "").unwrap();
        session.set_user(Some(dara()));
        assert_eq!(reload(&storage).current(), Some(dara()));
    }

    #[test]
    fn test_prepopulated_record() {
        let storage =
            MemoryStorage::with_items([(KEY, r#"{"id":1,"name":"A","email":"a@x.com"}"#)]);
        assert_eq!(
            reload(&storage).current(),
            Some(SessionUser::new(1, "A", "a@x.com"))
        );
    }

    #[test]
    fn test_empty_record_is_no_session() {
        let storage = MemoryStorage::with_items([(KEY, "")]);
        assert_eq!(reload(&storage).current(), None);
    }

    #[test]
    fn test_corrupt_record_is_no_session() {
        for bad in ["{not json", r#"{"id":"one"}"#, "42", "null"] {
            let storage = MemoryStorage::with_items([(KEY, bad)]);
            assert_eq!(reload(&storage).current(), None, "record {bad:?}");
        }
    }

    #[test]
    fn test_subscribers_are_notified() {
        let storage = MemoryStorage::new();
        let session = reload(&storage);
        let seen = Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = session
            .user()
            .subscribe(move |u: &Option<SessionUser>| sink.borrow_mut().push(u.is_some()));

        session.set_user(Some(dara()));
        session.clear_user();
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn test_failing_storage_keeps_in_memory_session() {
        let session = SessionState::load(Rc::new(FailingStorage), KEY);
        assert_eq!(session.current(), None);

        session.set_user(Some(dara()));
        assert_eq!(session.current(), Some(dara()));
        assert!(session.is_authenticated());

        session.clear_user();
        assert_eq!(session.current(), None);
    }

    #[test]
    fn test_invalid_file_key_keeps_in_memory_session() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Rc::new(FileStorage::new(dir.path().to_path_buf()));

        let session = SessionState::load(storage.clone(), "a/b");
        session.set_user(Some(dara()));
        assert_eq!(session.current(), Some(dara()));
        assert_eq!(SessionState::load(storage, "a/b").current(), None);
    }

    #[test]
    fn test_noop_storage_never_restores() {
        let storage: Rc<dyn KeyValueStorage> = Rc::new(NoopStorage);
        let session = SessionState::load(Rc::clone(&storage), KEY);
        session.set_user(Some(dara()));
        assert_eq!(session.current(), Some(dara()));

        assert_eq!(SessionState::load(storage, KEY).current(), None);
    }
}
