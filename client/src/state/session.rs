//! Session store: the single authority on who is logged in.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionStore` is created by the root component and shared through
//! Leptos context. It is the only writer of the session value; route guards,
//! the navbar, and pages read it. Persistence goes through
//! `KeyValueStorage`, the network through `Transport`, so the whole lifecycle
//! runs in plain unit tests.
//!
//! LIFECYCLE
//! =========
//! `Loading -> {Authenticated, Anonymous}` on restore,
//! `Anonymous -> Authenticated` on login,
//! `Authenticated -> Anonymous` on logout or a 401 from any authenticated call.
//! `Loading` is only ever the initial state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use leptos::prelude::RwSignal;

use crate::net::http::{ApiClient, ApiError, HttpTransport, Transport};
use crate::net::types::Identity;
use crate::util::storage::{BrowserStorage, KeyValueStorage};

/// Storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "authToken";
/// Storage key holding the JSON-encoded identity.
pub const USER_KEY: &str = "user";

/// Current authentication state. Identity and token exist only together.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Loading,
    Anonymous,
    Authenticated { user: Identity, token: String },
}

/// Discriminant of [`Session`] without the payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Loading,
    Authenticated,
    Anonymous,
}

impl Session {
    pub fn status(&self) -> SessionStatus {
        match self {
            Self::Loading => SessionStatus::Loading,
            Self::Anonymous => SessionStatus::Anonymous,
            Self::Authenticated { .. } => SessionStatus::Authenticated,
        }
    }

    pub fn user(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated { user, .. } => Some(user),
            _ => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Authenticated { token, .. } => Some(token),
            _ => None,
        }
    }
}

/// Why a login or registration attempt failed. Shown to the user as-is.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("{0}")]
    Rejected(String),
    #[error("could not reach the server: {0}")]
    Unavailable(String),
    #[error("server returned an incomplete session")]
    IncompleteSession,
}

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status { message, .. } => Self::Rejected(message),
            ApiError::Unauthorized => Self::Rejected("Invalid credentials".to_owned()),
            ApiError::Transport(message) | ApiError::Decode(message) | ApiError::Encode(message) => {
                Self::Unavailable(message)
            }
        }
    }
}

/// Shared holder for the session value.
///
/// `current` may subscribe the caller to changes; `current_untracked` never
/// does. The store writes through `set_session`.
pub trait SessionCell {
    fn current(&self) -> Session;
    fn current_untracked(&self) -> Session;
    fn set_session(&self, session: Session);
}

impl SessionCell for RwSignal<Session> {
    fn current(&self) -> Session {
        leptos::prelude::Get::get(self)
    }

    fn current_untracked(&self) -> Session {
        leptos::prelude::GetUntracked::get_untracked(self)
    }

    fn set_session(&self, session: Session) {
        leptos::prelude::Set::set(self, session);
    }
}

impl SessionCell for Rc<RefCell<Session>> {
    fn current(&self) -> Session {
        self.borrow().clone()
    }

    fn current_untracked(&self) -> Session {
        self.borrow().clone()
    }

    fn set_session(&self, session: Session) {
        *self.borrow_mut() = session;
    }
}

/// Read a complete token + identity pair. Anything partial, blank, or
/// unparsable counts as absent.
pub fn read_persisted(storage: &impl KeyValueStorage) -> Option<(Identity, String)> {
    let token = storage.get(TOKEN_KEY).filter(|t| !t.trim().is_empty())?;
    let raw_user = storage.get(USER_KEY)?;
    let user = serde_json::from_str::<Identity>(&raw_user).ok()?;
    Some((user, token))
}

fn write_persisted(storage: &impl KeyValueStorage, user: &Identity, token: &str) {
    let Ok(raw_user) = serde_json::to_string(user) else {
        return;
    };
    storage.set(TOKEN_KEY, token);
    storage.set(USER_KEY, &raw_user);
}

fn clear_persisted(storage: &impl KeyValueStorage) {
    storage.remove(TOKEN_KEY);
    storage.remove(USER_KEY);
}

/// The store as wired into the running app.
pub type AppSession = SessionStore<RwSignal<Session>, BrowserStorage, HttpTransport>;

impl AppSession {
    /// Fresh `Loading` session backed by `localStorage` and `gloo-net`.
    pub fn browser() -> Self {
        Self::new(
            RwSignal::new(Session::Loading),
            BrowserStorage,
            HttpTransport,
            crate::config::api_base_url(),
        )
    }
}

/// Owner of the session value, its persisted copy, and the auth endpoints.
#[derive(Clone)]
pub struct SessionStore<C, S, T> {
    cell: C,
    storage: S,
    transport: T,
    api_base: Arc<str>,
}

impl<C, S, T> SessionStore<C, S, T>
where
    C: SessionCell + Clone + 'static,
    S: KeyValueStorage + Clone + 'static,
    T: Transport + Clone + 'static,
{
    pub fn new(cell: C, storage: S, transport: T, api_base: impl Into<Arc<str>>) -> Self {
        Self { cell, storage, transport, api_base: api_base.into() }
    }

    /// Current session; reactive readers re-run when it changes.
    pub fn session(&self) -> Session {
        self.cell.current()
    }

    pub fn status(&self) -> SessionStatus {
        self.cell.current().status()
    }

    pub fn user(&self) -> Option<Identity> {
        self.cell.current().user().cloned()
    }

    /// Resolve the startup `Loading` state from durable storage.
    ///
    /// The persisted token is trusted until the backend rejects it. Once the
    /// session has left `Loading` this is a no-op.
    pub fn restore(&self) -> SessionStatus {
        let current = self.cell.current_untracked();
        if current.status() != SessionStatus::Loading {
            return current.status();
        }

        let next = match read_persisted(&self.storage) {
            Some((user, token)) => Session::Authenticated { user, token },
            None => {
                clear_persisted(&self.storage);
                Session::Anonymous
            }
        };
        let status = next.status();
        leptos::logging::log!("session restored: {status:?}");
        self.cell.set_session(next);
        status
    }

    /// Authenticate and persist the returned token + identity.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] for rejected credentials, transport failures,
    /// or a response without a usable token. The session is left unchanged.
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let resp = self.anonymous_api().login(email, password).await?;
        if resp.token.trim().is_empty() {
            return Err(AuthError::IncompleteSession);
        }

        write_persisted(&self.storage, &resp.user, &resp.token);
        self.cell.set_session(Session::Authenticated { user: resp.user.clone(), token: resp.token });
        Ok(resp.user)
    }

    /// Create an account. The caller logs in separately.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] when the backend rejects the registration or
    /// cannot be reached.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<(), AuthError> {
        self.anonymous_api().register(name, email, password).await?;
        Ok(())
    }

    /// Forget the session in memory and in storage.
    pub fn logout(&self) {
        clear_persisted(&self.storage);
        self.cell.set_session(Session::Anonymous);
    }

    /// Global 401 hook. Clears like `logout`, but only while `rejected_token`
    /// is still the live token. A late 401 for a session that was already
    /// logged out or replaced by a newer login is ignored.
    pub fn invalidate(&self, rejected_token: &str) {
        if self.cell.current_untracked().token() != Some(rejected_token) {
            return;
        }
        leptos::logging::warn!("session rejected by the server; signing out");
        self.logout();
    }

    /// Client for authenticated endpoints. A 401 on any call made through it
    /// invalidates this store.
    pub fn api(&self) -> ApiClient<T> {
        let token = self.cell.current_untracked().token().map(str::to_owned);
        let store = self.clone();
        ApiClient::new(self.api_base.clone(), self.transport.clone())
            .with_bearer(token)
            .on_unauthorized(move |token| store.invalidate(token))
    }

    fn anonymous_api(&self) -> ApiClient<T> {
        ApiClient::new(self.api_base.clone(), self.transport.clone())
    }
}
