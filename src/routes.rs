use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers::{culture, dictionary, translation};
use crate::state::AppState;

pub fn app_router(state: AppState) -> Router {
    let dictionary_router = Router::new()
        .route("/", get(dictionary::list_entries))
        .route("/todas", get(dictionary::all_entries))
        .route("/estadisticas", get(dictionary::statistics))
        .route("/categorias", get(dictionary::categories))
        .route("/areas-tematicas", get(dictionary::topic_areas))
        .route("/sugerencias", get(dictionary::suggestions))
        .route("/buscar/{palabra}", get(dictionary::lookup_word))
        .route("/{id}", get(dictionary::get_entry));

    let culture_router = Router::new()
        .route("/", get(culture::list_info))
        .route("/tipos", get(culture::types))
        .route("/tipos/configuracion", get(culture::type_config))
        .route("/estadisticas", get(culture::type_counts))
        .route("/todo", get(culture::all_info))
        .route("/{id}", get(culture::get_info));

    let translation_router = Router::new()
        .route("/", post(translation::translate))
        .route("/estadisticas", get(translation::statistics));

    Router::new()
        .nest("/diccionario", dictionary_router)
        .nest("/cultura", culture_router)
        .nest("/traduccion", translation_router)
        .with_state(state)
}
