use crate::config::AppConfig;
use crate::data::loader;
use crate::data::models::{CulturalInfoEntry, DictionaryEntry};
use crate::features::culture::CultureEngine;
use crate::features::dictionary::DictionaryEngine;
use crate::features::translation::TranslationEngine;

/// Engines shared by every handler. The datasets behind them never change
/// after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub dictionary: DictionaryEngine,
    pub culture: CultureEngine,
    pub translation: TranslationEngine,
}

impl AppState {
    pub fn new(dictionary: Vec<DictionaryEntry>, culture: Vec<CulturalInfoEntry>) -> Self {
        let dictionary = DictionaryEngine::new(dictionary);
        Self {
            translation: TranslationEngine::new(dictionary.clone()),
            culture: CultureEngine::new(culture),
            dictionary,
        }
    }

    /// Loads both datasets once. Never fails: unusable files are replaced
    /// by the built-in samples.
    pub fn load(config: &AppConfig) -> Self {
        Self::new(
            loader::load_dictionary(&config.dictionary_path),
            loader::load_cultural_info(&config.culture_path),
        )
    }
}
