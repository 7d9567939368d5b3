pub mod random_choice_ui;
pub mod types;

pub use random_choice_ui::RandomChoiceApp;
pub use types::*;
