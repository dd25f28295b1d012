use super::*;

#[test]
fn loading_waits_without_redirect() {
    assert_eq!(guard_decision(SessionStatus::Loading, "/dashboard"), GuardDecision::Wait);
}

#[test]
fn authenticated_renders_requested_view() {
    assert_eq!(guard_decision(SessionStatus::Authenticated, "/project/4"), GuardDecision::Render);
}

#[test]
fn anonymous_redirects_with_origin() {
    assert_eq!(
        guard_decision(SessionStatus::Anonymous, "/dashboard"),
        GuardDecision::Redirect("/login?from=%2Fdashboard".to_owned())
    );
}

#[test]
fn each_status_maps_to_exactly_one_decision() {
    for status in [SessionStatus::Loading, SessionStatus::Authenticated, SessionStatus::Anonymous] {
        let decision = guard_decision(status, "/my-tasks");
        assert_eq!(matches!(decision, GuardDecision::Wait), status == SessionStatus::Loading);
        assert_eq!(matches!(decision, GuardDecision::Render), status == SessionStatus::Authenticated);
        assert_eq!(matches!(decision, GuardDecision::Redirect(_)), status == SessionStatus::Anonymous);
    }
}

#[test]
fn redirect_encodes_query_in_origin() {
    assert_eq!(
        login_redirect_path("/project/4/edit-task/9?tab=todo"),
        "/login?from=%2Fproject%2F4%2Fedit-task%2F9%3Ftab%3Dtodo"
    );
}

#[test]
fn redirect_drops_unusable_origins() {
    assert_eq!(login_redirect_path("/login"), "/login");
    assert_eq!(login_redirect_path("/"), "/login");
    assert_eq!(login_redirect_path("https://evil.example"), "/login");
}

#[test]
fn post_login_returns_to_origin() {
    assert_eq!(post_login_target(Some("/dashboard")), "/dashboard");
    assert_eq!(post_login_target(Some("/project/4?tab=tasks")), "/project/4?tab=tasks");
}

#[test]
fn post_login_rejects_foreign_and_login_targets() {
    assert_eq!(post_login_target(None), DEFAULT_LANDING_PATH);
    assert_eq!(post_login_target(Some("//evil.example/x")), DEFAULT_LANDING_PATH);
    assert_eq!(post_login_target(Some("https://evil.example")), DEFAULT_LANDING_PATH);
    assert_eq!(post_login_target(Some("/\\evil.example")), DEFAULT_LANDING_PATH);
    assert_eq!(post_login_target(Some("/login?from=%2Fdashboard")), DEFAULT_LANDING_PATH);
}

#[test]
fn anonymous_dashboard_round_trip_lands_on_dashboard() {
    let GuardDecision::Redirect(to) = guard_decision(SessionStatus::Anonymous, "/dashboard") else {
        panic!("expected redirect");
    };
    let (_, query) = to.split_once('?').expect("query");
    let from = form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "from")
        .map(|(_, value)| value.into_owned());
    assert_eq!(post_login_target(from.as_deref()), "/dashboard");
}

#[test]
fn requested_location_joins_search() {
    assert_eq!(requested_location("/my-tasks", ""), "/my-tasks");
    assert_eq!(requested_location("/my-tasks", "?tab=todo"), "/my-tasks?tab=todo");
    assert_eq!(requested_location("/my-tasks", "tab=todo"), "/my-tasks?tab=todo");
}
