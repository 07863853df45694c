//! Networking modules for the hosted backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `config` carries the public backend settings, `hosted_auth` implements the
//! session seam against the auth service, `rest` queries tables, and `types`
//! defines the rows the feature components render.

pub mod config;
pub mod hosted_auth;
pub mod rest;
pub mod types;
