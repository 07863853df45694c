//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each protected page is the same shell, `RequireAuth` > `NavLayout` >
//! `EntranceAnimation`, around one feature component from `components`.
//! `login` is the only unguarded page.

pub mod employee;
pub mod login;
pub mod purchase_approve;
pub mod purchase_email;
pub mod vendor;
