//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `route_guard`, `nav_layout` and `entrance` make up the page shells; the
//! remaining modules are the feature views mounted inside them. Components
//! read the session and the backend client from Leptos context.

pub mod approval_main;
pub mod email_composer;
pub mod employee_main;
pub mod entrance;
pub mod nav_layout;
pub mod records_notice;
pub mod route_guard;
pub mod vendor_list;
