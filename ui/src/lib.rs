//! Shared UI crate for the Shams Levant Power site. All logic, content
//! tables and views live here; platform launchers stay thin.

pub mod components;
pub mod content;
pub mod core;
pub mod i18n;
pub mod nav;
pub mod views;

#[cfg(test)]
mod tests;
