pub mod culture;
pub mod dictionary;
pub mod translation;
