/// Screen modules for the browser
pub mod detail;
pub mod grid;
pub mod search;
pub mod settings;
