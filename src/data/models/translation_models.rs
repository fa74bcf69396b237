use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::GrammaticalCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TranslationDirection {
    #[serde(rename = "español-triqui")]
    SpanishToTriqui,
    #[serde(rename = "triqui-español")]
    TriquiToSpanish,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TranslateRequest {
    #[serde(rename = "texto")]
    #[validate(length(min = 1, message = "texto must not be empty"))]
    pub text: String,
    #[serde(rename = "direccion")]
    pub direction: TranslationDirection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslationResult {
    #[serde(rename = "textoOriginal")]
    pub original: String,
    #[serde(rename = "textoTraducido")]
    pub translated: String,
    #[serde(rename = "direccion")]
    pub direction: TranslationDirection,
    #[serde(rename = "confianza")]
    pub confidence: u8,
    #[serde(rename = "alternativas")]
    pub alternatives: Vec<String>,
    #[serde(rename = "notas")]
    pub notes: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TranslationStatistics {
    #[serde(rename = "totalPalabras")]
    pub total_words: usize,
    #[serde(rename = "areasTemáticas")]
    pub topic_areas: Vec<String>,
    #[serde(rename = "categorías")]
    pub categories: Vec<GrammaticalCategory>,
    #[serde(rename = "ultimaActualización", serialize_with = "super::dates::serialize")]
    pub timestamp: DateTime<Utc>,
}
