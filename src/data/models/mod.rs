pub mod culture_models;
pub mod dates;
pub mod dictionary_models;
pub mod translation_models;

pub use culture_models::{
    ApiResponse, CulturalInfoEntry, CulturalType, CultureFilter, CulturePage, Data,
    DataWithTotal, TypeCount, TypeDisplay,
};
pub use dictionary_models::{
    CategoryCounts, DictionaryEntry, DictionaryFilter, DictionaryPage, DictionaryStatistics,
    DifficultyHistogram, GrammaticalCategory, LanguageScope, Pagination, SortDirection,
    SortKey, SuggestionParams, WordLookupParams,
};
pub use translation_models::{
    TranslateRequest, TranslationDirection, TranslationResult, TranslationStatistics,
};
