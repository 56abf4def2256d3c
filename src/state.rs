//! Implements the structs that hold the state of the server.

use std::{
    marker::{Send, Sync},
    sync::{Arc, Mutex},
};

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha512};
use time::Duration;

use crate::{auth::cookie::DEFAULT_COOKIE_DURATION, ledger::Ledger, stores::TransactionStore};

/// The state of the server.
pub struct AppState<S>
where
    S: TransactionStore + Send + Sync,
{
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,
    /// The duration for which cookies used for authentication are valid.
    pub cookie_duration: Duration,
    /// The bcrypt hash of the password that unlocks the app.
    pub password_hash: String,
    /// The shared transaction ledger.
    ///
    /// Handlers hold the lock across a whole mutate-then-refresh chain so
    /// concurrent mutations cannot interleave.
    pub ledger: Arc<Mutex<Ledger<S>>>,
}

impl<S> AppState<S>
where
    S: TransactionStore + Send + Sync,
{
    /// Create a new [AppState].
    pub fn new(cookie_secret: &str, password_hash: String, store: S) -> Self {
        Self {
            cookie_key: create_cookie_key(cookie_secret),
            cookie_duration: DEFAULT_COOKIE_DURATION,
            password_hash,
            ledger: Arc::new(Mutex::new(Ledger::new(store))),
        }
    }
}

// Implemented by hand so that the store type does not need to be Clone, the
// ledger is already behind an Arc.
impl<S> Clone for AppState<S>
where
    S: TransactionStore + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            cookie_key: self.cookie_key.clone(),
            cookie_duration: self.cookie_duration,
            password_hash: self.password_hash.clone(),
            ledger: self.ledger.clone(),
        }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl<S> FromRef<AppState<S>> for Key
where
    S: TransactionStore + Send + Sync,
{
    fn from_ref(state: &AppState<S>) -> Self {
        state.cookie_key.clone()
    }
}

/// Create a signing key for cookies from a `secret` string.
pub(crate) fn create_cookie_key(secret: &str) -> Key {
    let hash = Sha512::digest(secret);

    Key::from(&hash)
}

/// The state needed for the auth middleware and the log in endpoint.
#[derive(Clone)]
pub(crate) struct AuthState {
    /// The key to be used for signing and encrypting private cookies.
    pub(crate) cookie_key: Key,
    /// The duration for which cookies used for authentication are valid.
    pub(crate) cookie_duration: Duration,
    /// The bcrypt hash of the password that unlocks the app.
    pub(crate) password_hash: String,
}

impl<S> FromRef<AppState<S>> for AuthState
where
    S: TransactionStore + Send + Sync,
{
    fn from_ref(state: &AppState<S>) -> Self {
        Self {
            cookie_key: state.cookie_key.clone(),
            cookie_duration: state.cookie_duration,
            password_hash: state.password_hash.clone(),
        }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<AuthState> for Key {
    fn from_ref(state: &AuthState) -> Self {
        state.cookie_key.clone()
    }
}

/// The state needed for the transaction endpoints.
pub(crate) struct LedgerState<S>
where
    S: TransactionStore + Send + Sync,
{
    /// The shared transaction ledger.
    pub(crate) ledger: Arc<Mutex<Ledger<S>>>,
}

impl<S> Clone for LedgerState<S>
where
    S: TransactionStore + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            ledger: self.ledger.clone(),
        }
    }
}

impl<S> FromRef<AppState<S>> for LedgerState<S>
where
    S: TransactionStore + Send + Sync,
{
    fn from_ref(state: &AppState<S>) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}
