//! NeuroDash Library
//!
//! Model catalog, console state and the Dioxus UI for the NeuroDash desktop
//! application.

pub mod app;
pub mod assistant;
pub mod catalog;
pub mod console;
pub mod route;
pub mod storage;
pub mod types;
pub mod ui;
