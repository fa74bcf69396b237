use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// Grammatical category of a dictionary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrammaticalCategory {
    #[serde(rename = "sustantivo")]
    Noun,
    #[serde(rename = "verbo")]
    Verb,
    #[serde(rename = "adjetivo")]
    Adjective,
    #[serde(rename = "numeral")]
    Numeral,
}

impl GrammaticalCategory {
    pub const ALL: [GrammaticalCategory; 4] = [
        GrammaticalCategory::Noun,
        GrammaticalCategory::Verb,
        GrammaticalCategory::Adjective,
        GrammaticalCategory::Numeral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GrammaticalCategory::Noun => "sustantivo",
            GrammaticalCategory::Verb => "verbo",
            GrammaticalCategory::Adjective => "adjetivo",
            GrammaticalCategory::Numeral => "numeral",
        }
    }
}

/// A single Spanish/Triqui dictionary entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub id: u32,
    #[serde(rename = "palabraEspanol")]
    pub spanish: String,
    #[serde(rename = "palabraTriqui")]
    pub triqui: String,
    #[serde(rename = "pronunciacion", default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    #[serde(rename = "categoria")]
    pub category: GrammaticalCategory,
    #[serde(rename = "areaTematica")]
    pub topic_area: String,
    #[serde(rename = "definicion")]
    pub definition: String,
    #[serde(rename = "ejemploEspanol", default, skip_serializing_if = "Option::is_none")]
    pub example_spanish: Option<String>,
    #[serde(rename = "ejemploTriqui", default, skip_serializing_if = "Option::is_none")]
    pub example_triqui: Option<String>,
    #[serde(rename = "traduccionEjemplo", default, skip_serializing_if = "Option::is_none")]
    pub example_translation: Option<String>,
    #[serde(rename = "palabrasRelacionadas", default, skip_serializing_if = "Option::is_none")]
    pub related_words: Option<Vec<String>>,
    #[serde(rename = "notas", default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "nivelDificultad")]
    pub difficulty: u8,
    #[serde(rename = "fechaCreacion", with = "super::dates")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "variantesDialectales", default, skip_serializing_if = "Option::is_none")]
    pub dialect_variants: Option<Vec<String>>,
}

/// Which headwords a search term is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LanguageScope {
    #[serde(rename = "español")]
    Spanish,
    #[serde(rename = "triqui")]
    Triqui,
    #[default]
    #[serde(rename = "ambos")]
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "palabra-espanol")]
    Spanish,
    #[serde(rename = "palabra-triqui")]
    Triqui,
    #[serde(rename = "categoria")]
    Category,
    #[serde(rename = "nivel")]
    Difficulty,
    #[serde(rename = "fecha")]
    CreatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    20
}

/// Query parameters accepted by the paginated dictionary listing.
/// Also echoed back as `filtrosAplicados`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct DictionaryFilter {
    #[serde(rename = "busqueda", default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(rename = "categoria", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<GrammaticalCategory>,
    #[serde(rename = "areaTematica", default, skip_serializing_if = "Option::is_none")]
    pub topic_area: Option<String>,
    #[serde(rename = "nivelDificultad", default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 3, message = "nivelDificultad must be between 1 and 3"))]
    pub difficulty: Option<u8>,
    #[serde(rename = "pagina", default = "default_page")]
    #[validate(range(min = 1, message = "pagina must be at least 1"))]
    pub page: u32,
    #[serde(rename = "limite", default = "default_page_size")]
    #[validate(range(min = 1, max = 100, message = "limite must be between 1 and 100"))]
    pub page_size: u32,
    #[serde(rename = "idioma", default)]
    pub language: LanguageScope,
    #[serde(rename = "ordenarPor", default)]
    pub sort_by: SortKey,
    #[serde(rename = "direccion", default)]
    pub direction: SortDirection,
}

impl Default for DictionaryFilter {
    fn default() -> Self {
        Self {
            search: None,
            category: None,
            topic_area: None,
            difficulty: None,
            page: default_page(),
            page_size: default_page_size(),
            language: LanguageScope::default(),
            sort_by: SortKey::default(),
            direction: SortDirection::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    #[serde(rename = "paginaActual")]
    pub page: u32,
    #[serde(rename = "totalPaginas")]
    pub total_pages: u32,
    #[serde(rename = "totalElementos")]
    pub total: usize,
    #[serde(rename = "elementosPorPagina")]
    pub page_size: u32,
    #[serde(rename = "hayPaginaSiguiente")]
    pub has_next: bool,
    #[serde(rename = "hayPaginaAnterior")]
    pub has_previous: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DictionaryPage {
    #[serde(rename = "entradas")]
    pub entries: Vec<DictionaryEntry>,
    #[serde(rename = "paginacion")]
    pub pagination: Pagination,
    #[serde(rename = "filtrosAplicados")]
    pub applied_filter: DictionaryFilter,
}

/// Parameters for `/diccionario/buscar/{palabra}`
#[derive(Debug, Deserialize)]
pub struct WordLookupParams {
    #[serde(rename = "idioma")]
    pub language: Option<LanguageScope>,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionParams {
    #[serde(default)]
    pub q: String,
    #[serde(rename = "limite")]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DifficultyHistogram {
    #[serde(rename = "basico")]
    pub basic: usize,
    #[serde(rename = "intermedio")]
    pub intermediate: usize,
    #[serde(rename = "avanzado")]
    pub advanced: usize,
}

/// Entries per grammatical category. Fields serialize in category order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CategoryCounts {
    #[serde(rename = "sustantivo")]
    pub noun: usize,
    #[serde(rename = "verbo")]
    pub verb: usize,
    #[serde(rename = "adjetivo")]
    pub adjective: usize,
    #[serde(rename = "numeral")]
    pub numeral: usize,
}

impl CategoryCounts {
    pub fn add(&mut self, category: GrammaticalCategory) {
        match category {
            GrammaticalCategory::Noun => self.noun += 1,
            GrammaticalCategory::Verb => self.verb += 1,
            GrammaticalCategory::Adjective => self.adjective += 1,
            GrammaticalCategory::Numeral => self.numeral += 1,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DictionaryStatistics {
    #[serde(rename = "totalEntradas")]
    pub total: usize,
    #[serde(rename = "categorias")]
    pub by_category: CategoryCounts,
    #[serde(rename = "areasTematicas")]
    pub by_area: BTreeMap<String, usize>,
    #[serde(rename = "nivelesDificultad")]
    pub by_difficulty: DifficultyHistogram,
}
