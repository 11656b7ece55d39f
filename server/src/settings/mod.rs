//! Settings HTTP surface
//!
//! - `/api/settings`: REST settings API over the `simpay_settings` option
//! - `/settings/{section}/{subsection}`: settings form for one subsection

pub mod handler;

// vim: ts=4
