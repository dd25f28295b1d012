use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::net::testing::ScriptedTransport;

fn client(transport: &ScriptedTransport) -> ApiClient<ScriptedTransport> {
    ApiClient::new("http://api.test/api/", transport.clone())
}

#[test]
fn url_joins_base_without_double_slash() {
    let transport = ScriptedTransport::default();
    assert_eq!(client(&transport).url("/projects"), "http://api.test/api/projects");
}

#[test]
fn get_attaches_bearer_when_present() {
    let transport = ScriptedTransport::default();
    transport.reply(200, serde_json::json!([]));
    let api = client(&transport).with_bearer(Some("tok-1".to_owned()));

    let rows: Vec<serde_json::Value> = block_on(api.get("/projects")).expect("rows");

    assert!(rows.is_empty());
    let request = transport.last_request();
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.bearer.as_deref(), Some("tok-1"));
    assert_eq!(request.body, None);
}

#[test]
fn post_sends_json_body_without_bearer_when_anonymous() {
    let transport = ScriptedTransport::default();
    transport.reply(201, serde_json::json!({ "project_id": 9 }));

    let created: serde_json::Value =
        block_on(client(&transport).post("/projects", &serde_json::json!({ "name": "P" }))).expect("created");

    assert_eq!(created["project_id"], 9);
    let request = transport.last_request();
    assert_eq!(request.bearer, None);
    assert_eq!(request.body, Some(serde_json::json!({ "name": "P" })));
}

#[test]
fn authenticated_401_fires_callback_and_maps_to_unauthorized() {
    let transport = ScriptedTransport::default();
    transport.reply(401, serde_json::json!({ "error": "token expired" }));
    let rejected = Rc::new(RefCell::new(Vec::new()));
    let rejected_in_callback = rejected.clone();
    let api = client(&transport)
        .with_bearer(Some("stale".to_owned()))
        .on_unauthorized(move |token| rejected_in_callback.borrow_mut().push(token.to_owned()));

    let err = block_on(api.delete("/projects/1")).expect_err("401");

    assert_eq!(err, ApiError::Unauthorized);
    assert!(err.is_session_expired());
    assert_eq!(*rejected.borrow(), vec!["stale".to_owned()]);
}

#[test]
fn anonymous_401_is_a_plain_status_error() {
    let transport = ScriptedTransport::default();
    transport.reply(401, serde_json::json!({ "error": "Invalid credentials" }));
    let fired = Rc::new(Cell::new(false));
    let fired_in_callback = fired.clone();
    let api = client(&transport).on_unauthorized(move |_| fired_in_callback.set(true));

    let err = block_on(api.post_unit("/login", &serde_json::json!({}))).expect_err("401");

    assert_eq!(err, ApiError::Status { status: 401, message: "Invalid credentials".to_owned() });
    assert!(!fired.get());
}

#[test]
fn non_json_error_body_falls_back_to_status_message() {
    let transport = ScriptedTransport::default();
    transport.reply_raw(500, "<html>boom</html>");

    let err = block_on(client(&transport).put("/tasks/3", &serde_json::json!({}))).expect_err("500");

    assert_eq!(err.to_string(), "request failed: 500");
}

#[test]
fn undecodable_success_body_is_a_decode_error() {
    let transport = ScriptedTransport::default();
    transport.reply_raw(200, "not json");

    let err = block_on(client(&transport).get::<Vec<u8>>("/users")).expect_err("decode");

    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn transport_errors_pass_through() {
    let transport = ScriptedTransport::default();
    transport.fail(ApiError::Transport("offline".to_owned()));

    let err = block_on(client(&transport).get::<serde_json::Value>("/notifications")).expect_err("offline");

    assert_eq!(err.to_string(), "network error: offline");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_transport_is_unavailable_outside_the_browser() {
    let request = ApiRequest { method: Method::Get, url: "/x".to_owned(), bearer: None, body: None };
    let err = block_on(HttpTransport.send(request)).expect_err("ssr");
    assert_eq!(err, ApiError::Transport("not available on server".to_owned()));
}

#[test]
fn user_message_hides_expired_sessions() {
    assert_eq!(ApiError::Unauthorized.user_message(), None);
    let err = ApiError::Status { status: 404, message: "Project not found".to_owned() };
    assert_eq!(err.user_message().as_deref(), Some("Project not found"));
    assert_eq!(
        ApiError::Transport("offline".to_owned()).user_message().as_deref(),
        Some("network error: offline")
    );
}
