//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` wires the auth gate into the component tree; `nav` models the
//! sections of the navigation layout; `records` holds per-view table loads.

pub mod nav;
pub mod records;
pub mod session;
