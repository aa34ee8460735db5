pub mod data;
pub mod entries;
pub mod filter;
pub mod gui;
pub mod launcher;
pub mod logging;
pub mod settings;
pub mod state;
