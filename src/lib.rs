pub mod api;
pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod rest_server;
pub mod utils {
    pub mod config;
    pub mod env;
    pub mod logging;
}

pub use application::ChoiceStore;
pub use error::{ChoiceError, Result};
