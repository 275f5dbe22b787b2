//! Cross-cutting helpers shared by every view.

pub mod browser;
pub mod format;
pub mod lang;
pub mod timing;
