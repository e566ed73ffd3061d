use super::*;
use std::time::Duration;

fn store_with(token: &str) -> Arc<MemoryTokenStore> {
    let store = Arc::new(MemoryTokenStore::new());
    store.save(Some(token));
    store
}

#[test]
fn test_hydrates_from_slot() {
    let session = Session::new(store_with("abc"));
    assert!(session.is_authenticated());
    assert_eq!(session.current_token().as_deref(), Some("abc"));

    let empty = Session::new(Arc::new(MemoryTokenStore::new()));
    assert_eq!(empty.state(), SessionState::Anonymous);
}

#[test]
fn test_set_token_writes_slot() {
    let store = Arc::new(MemoryTokenStore::new());
    let session = Session::new(store.clone());

    session.set_token(Some("t1"));
    assert_eq!(store.load().as_deref(), Some("t1"));
    assert!(session.is_authenticated());

    session.set_token(None);
    assert_eq!(store.load(), None);
    assert_eq!(session.state(), SessionState::Anonymous);
}

#[test]
fn test_empty_token_is_anonymous() {
    let store = Arc::new(MemoryTokenStore::new());
    let session = Session::new(store.clone());

    session.set_token(Some(""));
    assert!(!session.is_authenticated());
    assert_eq!(store.load(), None);
}

#[test]
fn test_external_change_reconciles() {
    let store = Arc::new(MemoryTokenStore::new());
    let tab_a = Session::new(store.clone());
    let tab_b = Session::new(store.clone());

    tab_a.set_token(Some("t1"));
    assert!(!tab_b.is_authenticated(), "no notification processed yet");

    assert!(tab_b.on_external_change());
    assert_eq!(tab_b.current_token().as_deref(), Some("t1"));

    // Nothing changed since the last read
    assert!(!tab_b.on_external_change());
}

#[test]
fn test_debug_redacts_token() {
    let session = Session::new(store_with("secret-token"));
    let printed = format!("{:?}", session);
    assert!(printed.contains("Authenticated"));
    assert!(!printed.contains("secret-token"));
}

#[tokio::test]
async fn test_follow_picks_up_logout_from_other_context() {
    let store = store_with("t1");
    let tab_a = Session::new(store.clone());
    let tab_b = Session::new(store.clone());
    let mut observed = tab_b.subscribe();
    let _follower = tab_b.follow(store.changes());

    tab_a.set_token(None);

    tokio::time::timeout(Duration::from_secs(1), observed.changed())
        .await
        .expect("no session change observed")
        .expect("session dropped");
    assert_eq!(*observed.borrow(), SessionState::Anonymous);
    assert!(!tab_b.is_authenticated());
}

#[test]
fn test_file_store_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join(TOKEN_SLOT);
    let store = FileTokenStore::new(&path);

    assert_eq!(store.load(), None);

    store.save(Some("t-file"));
    assert_eq!(store.load().as_deref(), Some("t-file"));
    assert_eq!(FileTokenStore::new(&path).load().as_deref(), Some("t-file"));

    store.save(None);
    assert!(!path.exists());
    // Removing an absent slot is not an error
    store.save(None);
    assert_eq!(store.load(), None);
}
