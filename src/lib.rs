// Day Layout Library
// Calendar day layout engine and drag-and-drop scheduling core

pub mod error;
pub mod models;
pub mod services;
pub mod utils;
