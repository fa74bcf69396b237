pub mod engine;

pub use engine::{TranslationEngine, UNAVAILABLE};
