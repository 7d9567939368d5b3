pub mod choice;
pub mod selector;

pub use choice::{ChoiceRepository, normalize, normalize_non_empty};
pub use selector::{choose, choose_random};
