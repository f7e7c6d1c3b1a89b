//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router guard reads `is_authenticated` on every navigation; pages call
//! `login`/`register`/`logout` and read the token for authorized requests.
//! The store never touches the router.
//!
//! DESIGN
//! ======
//! `Session` is the single value that is both held in memory and persisted.
//! `Session::load`/`Session::save` are the only code that knows the storage
//! layout, and the store calls `save` at the one place it replaces the
//! session, so memory and storage change together.
//!
//! `SessionStore` is a `Copy` handle over arena-allocated reactive state. It
//! is created explicitly with `open` at startup, handed to components through
//! Leptos context, and released with `close`.
//!
//! TRADE-OFFS
//! ==========
//! Concurrent logins are not serialized: each applies its own reply when it
//! resolves, so the last reply wins. Other tabs writing the same
//! `localStorage` keys are not observed until the next `open`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use super::storage::{BrowserStorage, KeyValueStorage};
use crate::error::{ApiError, AuthFailure};
use crate::net::api::{self, Transport};
use crate::net::types::{AuthResponse, Credentials, RegisterRequest, UserProfile};

/// Storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the JSON-encoded [`UserProfile`].
pub const USER_KEY: &str = "user";

/// Shown when a failed login carries no server message.
pub const LOGIN_FAILED: &str = "Login failed";
/// Shown when a failed registration carries no server message.
pub const REGISTRATION_FAILED: &str = "Registration failed";

/// Token and profile of the signed-in user; both empty when signed out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Restore the session left in `storage`.
    ///
    /// An empty token counts as absent. A profile is only restored alongside
    /// a token, and an unparsable profile is dropped.
    pub fn load<S: KeyValueStorage + ?Sized>(storage: &S) -> Self {
        let token = storage.get(TOKEN_KEY).filter(|t| !t.is_empty());
        let user = if token.is_some() {
            storage
                .get(USER_KEY)
                .and_then(|raw| serde_json::from_str::<Option<UserProfile>>(&raw).ok())
                .flatten()
        } else {
            None
        };
        Self { token, user }
    }

    /// Write present fields and remove absent ones.
    pub fn save<S: KeyValueStorage + ?Sized>(&self, storage: &S) {
        match &self.token {
            Some(token) => storage.set(TOKEN_KEY, token),
            None => storage.remove(TOKEN_KEY),
        }
        match self.user.as_ref().and_then(|u| serde_json::to_string(u).ok()) {
            Some(raw) => storage.set(USER_KEY, &raw),
            None => storage.remove(USER_KEY),
        }
    }
}

/// Reactive session handle shared through context.
pub struct SessionStore<S: KeyValueStorage> {
    session: RwSignal<Session>,
    storage: StoredValue<S>,
}

impl<S: KeyValueStorage> Clone for SessionStore<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: KeyValueStorage> Copy for SessionStore<S> {}

impl<S: KeyValueStorage> SessionStore<S> {
    /// Create the store, restoring any session persisted in `storage`.
    pub fn open(storage: S) -> Self {
        let session = Session::load(&storage);
        log::debug!("session restored (authenticated: {})", session.is_authenticated());
        Self {
            session: RwSignal::new(session),
            storage: StoredValue::new(storage),
        }
    }

    /// Release the reactive state. The handle must not be used afterwards.
    pub fn close(self) {
        self.session.dispose();
        self.storage.dispose();
    }

    /// Current session (tracked).
    pub fn session(&self) -> Session {
        self.session.get()
    }

    /// Bearer token for authorized requests (tracked).
    pub fn token(&self) -> Option<String> {
        self.session.with(|s| s.token.clone())
    }

    /// Signed-in user's profile (tracked).
    pub fn user(&self) -> Option<UserProfile> {
        self.session.with(|s| s.user.clone())
    }

    /// True iff a token is present. Recomputed on every read and tracked, so
    /// effects and views re-run when the session changes.
    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }

    /// Memoized [`SessionStore::is_authenticated`]. Subscribers re-run only
    /// when the flag flips, not on every session replace.
    pub fn authenticated(&self) -> Memo<bool> {
        let store = *self;
        Memo::new(move |_| store.is_authenticated())
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthFailure`] with the server's `error` message, or
    /// `"Login failed"` when none was supplied. A reply with an empty token
    /// counts as a failure. The session is left as is.
    pub async fn login<T: Transport + ?Sized>(
        &self,
        transport: &T,
        email: &str,
        password: &str,
    ) -> Result<UserProfile, AuthFailure> {
        let credentials = Credentials {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let result = api::login(transport, &credentials).await;
        self.settle("login", result, LOGIN_FAILED)
    }

    /// Create an account and sign in with it.
    ///
    /// # Errors
    ///
    /// Same as [`SessionStore::login`], with `"Registration failed"` as the
    /// default message.
    pub async fn register<T: Transport + ?Sized>(
        &self,
        transport: &T,
        request: &RegisterRequest,
    ) -> Result<UserProfile, AuthFailure> {
        let result = api::register(transport, request).await;
        self.settle("register", result, REGISTRATION_FAILED)
    }

    /// Forget the session in memory and in storage. Local only.
    pub fn logout(&self) {
        self.replace(Session::default());
        log::info!("logged out");
    }

    fn settle(
        &self,
        action: &str,
        result: Result<AuthResponse, ApiError>,
        fallback: &str,
    ) -> Result<UserProfile, AuthFailure> {
        let result = result.and_then(|response| {
            if response.token.is_empty() {
                Err(ApiError::Parse("auth reply carried an empty token".to_owned()))
            } else {
                Ok(response)
            }
        });
        match result {
            Ok(response) => {
                let (token, user) = response.into_parts();
                self.replace(Session {
                    token: Some(token),
                    user: Some(user.clone()),
                });
                log::info!("{action} succeeded");
                Ok(user)
            }
            Err(err) => {
                log::warn!("{action} failed: {err}");
                Err(AuthFailure::from_api(&err, fallback))
            }
        }
    }

    fn replace(&self, session: Session) {
        self.storage.with_value(|storage| session.save(storage));
        self.session.set(session);
    }
}

/// Store backed by `window.localStorage`, as provided by the root component.
pub type BrowserSessionStore = SessionStore<BrowserStorage>;

/// Returns the session store from context, or opens one over
/// `localStorage` when rendered outside the root component.
pub fn use_session() -> BrowserSessionStore {
    use_context::<BrowserSessionStore>().unwrap_or_else(|| SessionStore::open(BrowserStorage))
}
