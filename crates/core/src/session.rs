use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStorage;

/// Storage key mirroring the latest session-state value.
pub const USER_STORAGE_KEY: &str = "user";

/// Written when the identity provider reports no active session. Distinct
/// from an absent key, which means no state was ever mirrored (or an
/// explicit sign-out removed it).
const NULL_SENTINEL: &str = "null";

/// The identity provider's record of the authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Session {
    pub uid: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Mirror the latest session-state value into the persistent key: the
/// serialized session, or the literal `"null"` when none is active.
pub fn mirror_session(storage: &impl KeyValueStorage, session: Option<&Session>) {
    let payload = match session {
        Some(session) => match serde_json::to_string(session) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(error = %err, "session did not serialize, mirroring as signed out");
                NULL_SENTINEL.to_owned()
            }
        },
        None => NULL_SENTINEL.to_owned(),
    };
    if let Err(err) = storage.set(USER_STORAGE_KEY, &payload) {
        tracing::warn!(error = %err, "session mirror write failed");
    }
}

/// Remove the mirrored key entirely on explicit sign-out.
pub fn clear_session(storage: &impl KeyValueStorage) {
    storage.remove(USER_STORAGE_KEY);
}

/// Restore the typed session from storage. Anything absent, `"null"`, or
/// unparsable reads as signed out.
pub fn stored_session(storage: &impl KeyValueStorage) -> Option<Session> {
    let raw = storage.get(USER_STORAGE_KEY)?;
    serde_json::from_str::<Option<Session>>(&raw).ok().flatten()
}

/// Point-in-time login check derived from storage alone: true iff the key
/// holds parsable, non-null JSON.
///
/// This does not revalidate against the identity provider, so it can lag
/// provider-side session validity until the next mirrored change.
pub fn is_logged_in(storage: &impl KeyValueStorage) -> bool {
    match storage.get(USER_STORAGE_KEY) {
        Some(raw) => serde_json::from_str::<serde_json::Value>(&raw)
            .map(|value| !value.is_null())
            .unwrap_or(false),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn session() -> Session {
        Session {
            uid: "u-1".into(),
            email: "keeper@example.com".into(),
            display_name: None,
        }
    }

    #[test]
    fn logged_out_when_key_absent() {
        let storage = MemoryStorage::new();
        assert!(!is_logged_in(&storage));
        assert!(stored_session(&storage).is_none());
    }

    #[test]
    fn logged_out_when_key_holds_null_sentinel() {
        let storage = MemoryStorage::new();
        mirror_session(&storage, None);
        assert_eq!(storage.get(USER_STORAGE_KEY).as_deref(), Some("null"));
        assert!(!is_logged_in(&storage));
        assert!(stored_session(&storage).is_none());
    }

    #[test]
    fn logged_out_when_key_is_garbage() {
        let storage = MemoryStorage::new();
        storage.set(USER_STORAGE_KEY, "{not json").unwrap();
        assert!(!is_logged_in(&storage));
        assert!(stored_session(&storage).is_none());
    }

    #[test]
    fn logged_in_for_any_non_null_json() {
        let storage = MemoryStorage::new();
        storage.set(USER_STORAGE_KEY, r#"{"legacy":"record"}"#).unwrap();
        assert!(is_logged_in(&storage));
        // The legacy shape is not a typed session, but still counts as
        // logged in for the guard.
        assert!(stored_session(&storage).is_none());
    }

    #[test]
    fn mirror_writes_json_and_round_trips() {
        let storage = MemoryStorage::new();
        mirror_session(&storage, Some(&session()));
        assert!(is_logged_in(&storage));
        assert_eq!(stored_session(&storage), Some(session()));
    }

    #[test]
    fn clear_removes_the_key() {
        let storage = MemoryStorage::new();
        mirror_session(&storage, Some(&session()));
        clear_session(&storage);
        assert!(storage.get(USER_STORAGE_KEY).is_none());
        assert!(!is_logged_in(&storage));
    }
}
