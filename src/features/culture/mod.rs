pub mod engine;

pub use engine::{CultureEngine, TYPE_PALETTE};
