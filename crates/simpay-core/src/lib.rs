//! Settings registry for Simple Pay.
//!
//! Feature modules register sections, subsections and settings into a
//! [`settings::SettingsRegistry`]; the frozen registry drives rendering, the
//! REST schema and persistence through [`settings::SettingsService`].

pub mod prelude;
pub mod register;
pub mod settings;

// vim: ts=4
