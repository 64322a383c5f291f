//! Pick a monitor and move a browser-automation window onto it.
//!
//! [`monitor`] enumerates displays and does the placement arithmetic,
//! [`session`] hands the user's choice from the UI to whoever waits on it,
//! and [`automation`] turns that choice into a WebDriver window move.

pub mod automation;
pub mod config;
pub mod error;
pub mod monitor;
pub mod session;
#[cfg(feature = "gui")]
pub mod ui;

pub use error::{Error, Result};
pub use session::SelectionSession;
