pub mod config;
pub mod external;
pub mod store;
pub mod ui;
