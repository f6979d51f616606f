pub mod buttons;
pub mod directory;
pub mod popups;
