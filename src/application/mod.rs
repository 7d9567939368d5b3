pub mod choice_store;

pub use choice_store::{Appended, ChoiceStore};
