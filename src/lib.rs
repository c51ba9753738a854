pub mod actions;
pub mod error;
pub mod flows;
pub mod model;
pub mod panes;
pub mod remote;
pub mod session;
pub mod store;
pub mod tool;
pub mod tui;
pub mod tui_shell;
pub mod workspace;

pub use error::{Error, Result};
