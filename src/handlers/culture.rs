use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
};

use crate::data::models::{
    ApiResponse, CulturalInfoEntry, CulturalType, CultureFilter, CulturePage, Data,
    DataWithTotal, TypeCount, TypeDisplay,
};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_info(
    State(state): State<AppState>,
    filter: Result<Query<CultureFilter>, QueryRejection>,
) -> Result<Json<ApiResponse<CulturePage>>, ApiError> {
    let Query(filter) = filter?;
    log::debug!("Culture query: {:?}", filter);
    Ok(Json(ApiResponse::ok(
        "Información cultural obtenida exitosamente",
        state.culture.query(&filter),
    )))
}

pub async fn types(State(state): State<AppState>) -> Json<ApiResponse<Data<Vec<CulturalType>>>> {
    Json(ApiResponse::ok(
        "Tipos de información obtenidos exitosamente",
        Data {
            data: state.culture.types(),
        },
    ))
}

pub async fn type_config(
    State(state): State<AppState>,
) -> Json<ApiResponse<Data<BTreeMap<String, TypeDisplay>>>> {
    Json(ApiResponse::ok(
        "Configuración de tipos obtenida exitosamente",
        Data {
            data: state.culture.type_display_config(),
        },
    ))
}

pub async fn type_counts(State(state): State<AppState>) -> Json<ApiResponse<Data<Vec<TypeCount>>>> {
    Json(ApiResponse::ok(
        "Estadísticas de tipos obtenidas exitosamente",
        Data {
            data: state.culture.type_counts(),
        },
    ))
}

// GET /cultura/todo
pub async fn all_info(
    State(state): State<AppState>,
) -> Json<ApiResponse<DataWithTotal<CulturalInfoEntry>>> {
    let data = state.culture.all().to_vec();
    Json(ApiResponse::ok(
        "Información cultural obtenida exitosamente",
        DataWithTotal {
            total: data.len(),
            data,
        },
    ))
}

// GET /cultura/{id}
pub async fn get_info(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
) -> Result<Json<ApiResponse<Data<CulturalInfoEntry>>>, ApiError> {
    let Path(id) = id?;
    let entry = state
        .culture
        .get(id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound("Información cultural no encontrada".to_string()))?;

    Ok(Json(ApiResponse::ok(
        "Información cultural obtenida exitosamente",
        Data { data: entry },
    )))
}
