//! Browser session model shared by the dashboard `client` and `server`.
//!
//! This crate owns the authentication gate: the session value exposed to the
//! UI, the seam to the hosted auth backend, the provider state machine that
//! keeps the two in step, and the pure route-guard decisions. It has no UI or
//! HTTP dependencies so every transition can be exercised in plain unit tests.

pub mod backend;
pub mod channel;
pub mod guard;
pub mod identity;
pub mod provider;
pub mod state;

pub use backend::{AuthBackend, AuthCallback, AuthChange, AuthEvent, BackendError, SessionFuture, Subscription};
pub use channel::AuthChannel;
pub use guard::{GuardView, LOGIN_PATH, should_redirect_unauth};
pub use identity::UserIdentity;
pub use provider::{InitialFetch, SessionProvider, SessionStore};
pub use state::{AuthStatus, Session};
