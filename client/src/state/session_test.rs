use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::net::testing::ScriptedTransport;
use crate::util::guard::{GuardDecision, guard_decision};
use crate::util::storage::MemoryStorage;

type TestStore = SessionStore<Rc<RefCell<Session>>, MemoryStorage, ScriptedTransport>;

fn store(storage: &MemoryStorage, transport: &ScriptedTransport) -> TestStore {
    SessionStore::new(
        Rc::new(RefCell::new(Session::Loading)),
        storage.clone(),
        transport.clone(),
        "http://api.test/api",
    )
}

fn ada() -> Identity {
    Identity { id: 1, name: "Ada".to_owned(), email: "ada@example.com".to_owned() }
}

fn persist_valid_pair(storage: &MemoryStorage) {
    storage.set(TOKEN_KEY, "tok-1");
    storage.set(USER_KEY, &serde_json::to_string(&ada()).expect("identity json"));
}

fn login_reply(transport: &ScriptedTransport, token: &str) {
    transport.reply(
        200,
        serde_json::json!({ "token": token, "user": { "id": 1, "name": "Ada", "email": "ada@example.com" } }),
    );
}

// =============================================================
// restore
// =============================================================

#[test]
fn session_starts_loading() {
    let s = store(&MemoryStorage::default(), &ScriptedTransport::default());
    assert_eq!(s.status(), SessionStatus::Loading);
}

#[test]
fn restore_valid_pair_is_authenticated() {
    let storage = MemoryStorage::default();
    persist_valid_pair(&storage);
    let s = store(&storage, &ScriptedTransport::default());

    assert_eq!(s.restore(), SessionStatus::Authenticated);
    assert_eq!(s.user(), Some(ada()));
    assert_eq!(s.session().token(), Some("tok-1"));
}

#[test]
fn restore_empty_storage_is_anonymous() {
    let s = store(&MemoryStorage::default(), &ScriptedTransport::default());
    assert_eq!(s.restore(), SessionStatus::Anonymous);
    assert_eq!(s.user(), None);
}

#[test]
fn restore_token_without_identity_is_anonymous_and_clears_leftovers() {
    let storage = MemoryStorage::default();
    storage.set(TOKEN_KEY, "tok-1");
    let s = store(&storage, &ScriptedTransport::default());

    assert_eq!(s.restore(), SessionStatus::Anonymous);
    assert!(storage.is_empty());
}

#[test]
fn restore_identity_without_token_is_anonymous() {
    let storage = MemoryStorage::default();
    storage.set(USER_KEY, &serde_json::to_string(&ada()).expect("identity json"));
    let s = store(&storage, &ScriptedTransport::default());

    assert_eq!(s.restore(), SessionStatus::Anonymous);
    assert!(storage.is_empty());
}

#[test]
fn restore_corrupted_values_is_anonymous() {
    let cases: [(&str, &str); 4] = [
        ("tok-1", "{not json"),
        ("tok-1", "\"just a string\""),
        ("tok-1", "{\"id\":\"one\",\"name\":\"Ada\",\"email\":\"a@b\"}"),
        ("   ", "{\"id\":1,\"name\":\"Ada\",\"email\":\"a@b\"}"),
    ];
    for (token, user) in cases {
        let storage = MemoryStorage::default();
        storage.set(TOKEN_KEY, token);
        storage.set(USER_KEY, user);
        let s = store(&storage, &ScriptedTransport::default());
        assert_eq!(s.restore(), SessionStatus::Anonymous, "token={token:?} user={user:?}");
    }
}

#[test]
fn restore_never_reenters_loading() {
    let storage = MemoryStorage::default();
    let s = store(&storage, &ScriptedTransport::default());
    assert_eq!(s.restore(), SessionStatus::Anonymous);

    persist_valid_pair(&storage);
    assert_eq!(s.restore(), SessionStatus::Anonymous);
    assert_ne!(s.status(), SessionStatus::Loading);
}

// =============================================================
// login / register
// =============================================================

#[test]
fn login_persists_and_survives_reload() {
    let storage = MemoryStorage::default();
    let transport = ScriptedTransport::default();
    login_reply(&transport, "fresh");
    let s = store(&storage, &transport);
    s.restore();

    let user = block_on(s.login("ada@example.com", "pw")).expect("login");

    assert_eq!(user, ada());
    assert_eq!(s.status(), SessionStatus::Authenticated);
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("fresh"));

    let reloaded = store(&storage, &ScriptedTransport::default());
    assert_eq!(reloaded.restore(), SessionStatus::Authenticated);
    assert_eq!(reloaded.user(), Some(user));
}

#[test]
fn login_sends_no_bearer() {
    let transport = ScriptedTransport::default();
    login_reply(&transport, "fresh");
    let s = store(&MemoryStorage::default(), &transport);
    s.restore();

    block_on(s.login("ada@example.com", "pw")).expect("login");

    assert_eq!(transport.last_request().bearer, None);
}

#[test]
fn login_bad_credentials_leaves_state_unchanged() {
    let storage = MemoryStorage::default();
    let transport = ScriptedTransport::default();
    transport.reply(401, serde_json::json!({ "error": "Invalid credentials" }));
    let s = store(&storage, &transport);
    s.restore();

    let err = block_on(s.login("ada@example.com", "wrong")).expect_err("rejected");

    assert_eq!(err, AuthError::Rejected("Invalid credentials".to_owned()));
    assert_eq!(s.status(), SessionStatus::Anonymous);
    assert!(storage.is_empty());
    assert_eq!(transport.requests().len(), 1);
}

#[test]
fn login_network_failure_is_surfaced() {
    let transport = ScriptedTransport::default();
    transport.fail(ApiError::Transport("offline".to_owned()));
    let s = store(&MemoryStorage::default(), &transport);
    s.restore();

    let err = block_on(s.login("ada@example.com", "pw")).expect_err("offline");

    assert_eq!(err.to_string(), "could not reach the server: offline");
    assert_eq!(s.status(), SessionStatus::Anonymous);
}

#[test]
fn login_without_token_is_rejected() {
    let storage = MemoryStorage::default();
    let transport = ScriptedTransport::default();
    login_reply(&transport, "");
    let s = store(&storage, &transport);
    s.restore();

    let err = block_on(s.login("ada@example.com", "pw")).expect_err("incomplete");

    assert_eq!(err, AuthError::IncompleteSession);
    assert_eq!(s.status(), SessionStatus::Anonymous);
    assert!(storage.is_empty());
}

#[test]
fn register_does_not_authenticate() {
    let storage = MemoryStorage::default();
    let transport = ScriptedTransport::default();
    transport.reply(201, serde_json::json!({ "message": "User registered successfully" }));
    let s = store(&storage, &transport);
    s.restore();

    block_on(s.register("Ada", "ada@example.com", "secret")).expect("register");

    assert_eq!(s.status(), SessionStatus::Anonymous);
    assert!(storage.is_empty());
}

#[test]
fn register_duplicate_email_surfaces_backend_message() {
    let transport = ScriptedTransport::default();
    transport.reply(400, serde_json::json!({ "error": "Email already exists" }));
    let s = store(&MemoryStorage::default(), &transport);

    let err = block_on(s.register("Ada", "ada@example.com", "secret")).expect_err("duplicate");

    assert_eq!(err.to_string(), "Email already exists");
}

// =============================================================
// logout / invalidation
// =============================================================

#[test]
fn logout_always_ends_anonymous_with_empty_storage() {
    for restore_first in [true, false] {
        let storage = MemoryStorage::default();
        persist_valid_pair(&storage);
        let s = store(&storage, &ScriptedTransport::default());
        if restore_first {
            assert_eq!(s.restore(), SessionStatus::Authenticated);
        }

        s.logout();

        assert_eq!(s.status(), SessionStatus::Anonymous);
        assert_eq!(storage.get(TOKEN_KEY), None);
        assert_eq!(storage.get(USER_KEY), None);
    }
}

#[test]
fn logout_twice_is_harmless() {
    let s = store(&MemoryStorage::default(), &ScriptedTransport::default());
    s.logout();
    s.logout();
    assert_eq!(s.status(), SessionStatus::Anonymous);
}

#[test]
fn api_attaches_session_token() {
    let storage = MemoryStorage::default();
    persist_valid_pair(&storage);
    let transport = ScriptedTransport::default();
    transport.reply(200, serde_json::json!([]));
    let s = store(&storage, &transport);
    s.restore();

    block_on(s.api().list_projects()).expect("projects");

    assert_eq!(transport.last_request().bearer.as_deref(), Some("tok-1"));
}

#[test]
fn unauthorized_response_clears_session_and_guard_redirects() {
    let storage = MemoryStorage::default();
    persist_valid_pair(&storage);
    let transport = ScriptedTransport::default();
    transport.reply(401, serde_json::json!({ "error": "token expired" }));
    let s = store(&storage, &transport);
    s.restore();
    assert_eq!(guard_decision(s.status(), "/dashboard"), GuardDecision::Render);

    let err = block_on(s.api().list_projects()).expect_err("401");

    assert!(err.is_session_expired());
    assert_eq!(s.status(), SessionStatus::Anonymous);
    assert!(storage.is_empty());
    assert_eq!(
        guard_decision(s.status(), "/dashboard"),
        GuardDecision::Redirect("/login?from=%2Fdashboard".to_owned())
    );
}

#[test]
fn late_unauthorized_after_logout_stays_anonymous() {
    let storage = MemoryStorage::default();
    persist_valid_pair(&storage);
    let transport = ScriptedTransport::default();
    transport.reply(401, serde_json::json!({}));
    let s = store(&storage, &transport);
    s.restore();
    let in_flight = s.api();

    s.logout();
    let err = block_on(in_flight.list_projects()).expect_err("401");

    assert_eq!(err, ApiError::Unauthorized);
    assert_eq!(s.status(), SessionStatus::Anonymous);
}

#[test]
fn late_unauthorized_for_old_token_keeps_newer_login() {
    let storage = MemoryStorage::default();
    persist_valid_pair(&storage);
    let transport = ScriptedTransport::default();
    let s = store(&storage, &transport);
    s.restore();
    let in_flight = s.api();

    s.logout();
    login_reply(&transport, "fresh");
    block_on(s.login("ada@example.com", "pw")).expect("login");
    transport.reply(401, serde_json::json!({ "error": "token expired" }));
    let err = block_on(in_flight.list_projects()).expect_err("401");

    assert_eq!(err, ApiError::Unauthorized);
    assert_eq!(transport.last_request().bearer.as_deref(), Some("tok-1"));
    assert_eq!(s.status(), SessionStatus::Authenticated);
    assert_eq!(s.session().token(), Some("fresh"));
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("fresh"));
    assert!(storage.get(USER_KEY).is_some());
}

#[test]
fn auth_error_from_api_error_maps_variants() {
    assert_eq!(
        AuthError::from(ApiError::Status { status: 400, message: "bad".to_owned() }),
        AuthError::Rejected("bad".to_owned())
    );
    assert_eq!(
        AuthError::from(ApiError::Decode("eof".to_owned())),
        AuthError::Unavailable("eof".to_owned())
    );
}
