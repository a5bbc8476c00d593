//! Interactive front end for the clinic registry

pub mod menu;
pub mod prompt;

pub use menu::{Menu, MenuChoice, describe};
pub use prompt::Prompt;
