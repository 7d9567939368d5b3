pub mod opener;

pub use opener::{FileOpener, SystemOpener};
