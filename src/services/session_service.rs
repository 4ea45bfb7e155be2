use rand::RngCore;

use crate::session::SessionStore;

pub fn random_session_id() -> String {
    let mut b = [0u8; 16];
    rand::rngs::OsRng.fill_bytes(&mut b);
    hex::encode(b)
}

/// Create a new visitor session and return its id.
pub fn start_session(store: &SessionStore) -> String {
    let sid = random_session_id();
    store.insert(sid.clone());
    tracing::debug!(sessions = store.len(), "Started visitor session");
    sid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_hex_and_unique() {
        let a = random_session_id();
        let b = random_session_id();
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }
}
