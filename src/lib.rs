pub mod app;
pub mod lyrics;
pub mod ui;
