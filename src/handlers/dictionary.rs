use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
};
use validator::Validate;

use crate::data::models::{
    DictionaryEntry, DictionaryFilter, DictionaryPage, DictionaryStatistics, GrammaticalCategory,
    SuggestionParams, WordLookupParams,
};
use crate::error::ApiError;
use crate::features::dictionary::DEFAULT_SUGGESTION_LIMIT;
use crate::state::AppState;

const MIN_SUGGESTION_CHARS: usize = 2;

// GET /diccionario
pub async fn list_entries(
    State(state): State<AppState>,
    filter: Result<Query<DictionaryFilter>, QueryRejection>,
) -> Result<Json<DictionaryPage>, ApiError> {
    let Query(filter) = filter?;
    filter.validate()?;
    log::debug!("Dictionary query: {:?}", filter);
    Ok(Json(state.dictionary.query(&filter)))
}

// GET /diccionario/todas
pub async fn all_entries(State(state): State<AppState>) -> Json<Vec<DictionaryEntry>> {
    Json(state.dictionary.all().to_vec())
}

pub async fn statistics(State(state): State<AppState>) -> Json<DictionaryStatistics> {
    Json(state.dictionary.statistics())
}

pub async fn categories(State(state): State<AppState>) -> Json<Vec<GrammaticalCategory>> {
    Json(state.dictionary.categories().to_vec())
}

pub async fn topic_areas(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.dictionary.topic_areas())
}

// GET /diccionario/sugerencias?q=ag&limite=5
pub async fn suggestions(
    State(state): State<AppState>,
    params: Result<Query<SuggestionParams>, QueryRejection>,
) -> Result<Json<Vec<String>>, ApiError> {
    let Query(params) = params?;
    if params.q.trim().chars().count() < MIN_SUGGESTION_CHARS {
        return Ok(Json(Vec::new()));
    }

    let limit = params.limit.unwrap_or(DEFAULT_SUGGESTION_LIMIT);
    Ok(Json(state.dictionary.suggest(&params.q, limit)))
}

// GET /diccionario/buscar/{palabra}
pub async fn lookup_word(
    State(state): State<AppState>,
    word: Result<Path<String>, PathRejection>,
    params: Result<Query<WordLookupParams>, QueryRejection>,
) -> Result<Json<Vec<DictionaryEntry>>, ApiError> {
    let Path(word) = word?;
    let Query(params) = params?;
    let entries = state.dictionary.lookup_word(&word, params.language);

    if entries.is_empty() {
        return Err(ApiError::NotFound(format!(
            "Palabra \"{}\" no encontrada en el diccionario",
            word
        )));
    }

    Ok(Json(entries))
}

// GET /diccionario/{id}
pub async fn get_entry(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
) -> Result<Json<DictionaryEntry>, ApiError> {
    let Path(id) = id?;
    state
        .dictionary
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Entrada con ID {} no encontrada", id)))
}
