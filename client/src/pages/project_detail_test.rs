use super::*;
use crate::net::http::ApiError;

#[test]
fn expired_session_keeps_the_current_error_banner() {
    Owner::new().with(|| {
        let detail = Detail::new();

        detail.report(&ApiError::Status { status: 404, message: "Project not found".to_owned() });
        detail.report(&ApiError::Unauthorized);

        assert_eq!(detail.error.get_untracked().as_deref(), Some("Project not found"));
    });
}

#[test]
fn expired_session_does_not_raise_a_banner() {
    Owner::new().with(|| {
        let detail = Detail::new();

        detail.report(&ApiError::Unauthorized);

        assert_eq!(detail.error.get_untracked(), None);
    });
}
