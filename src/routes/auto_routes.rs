//! Rutas de Autos
//!
//! Handlers finos: arman el controller desde el estado compartido y
//! delegan. La paginación entra por query string (`?skip=&limit=`).

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::AutoController;
use crate::dto::auto_dto::{
    AutoResponse, AutoWithVentasResponse, CreateAutoRequest, UpdateAutoRequest,
};
use crate::dto::PaginationParams;
use crate::repositories::{PgAutoRepository, PgVentaRepository};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_auto_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_auto))
        .route("/", get(get_all_autos))
        .route("/:id", get(get_auto_by_id))
        .route("/:id", put(update_auto))
        .route("/:id", delete(delete_auto))
        .route("/chasis/:numero_chasis", get(get_auto_by_chasis))
        .route("/:id/with-ventas", get(get_auto_with_ventas))
}

fn controller(state: &AppState) -> AutoController<PgAutoRepository, PgVentaRepository> {
    AutoController::new(
        PgAutoRepository::new(state.pool.clone()),
        PgVentaRepository::new(state.pool.clone()),
    )
}

async fn create_auto(
    State(state): State<AppState>,
    Json(request): Json<CreateAutoRequest>,
) -> Result<Json<AutoResponse>, AppError> {
    let response = controller(&state).create(request).await?;
    Ok(Json(response))
}

async fn get_all_autos(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<Vec<AutoResponse>>, AppError> {
    let response = controller(&state)
        .get_all(pagination.skip(), pagination.limit())
        .await?;
    Ok(Json(response))
}

async fn get_auto_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<AutoResponse>, AppError> {
    let response = controller(&state).get_by_id(id).await?;
    Ok(Json(response))
}

async fn get_auto_by_chasis(
    State(state): State<AppState>,
    Path(numero_chasis): Path<String>,
) -> Result<Json<AutoResponse>, AppError> {
    let response = controller(&state).get_by_chasis(&numero_chasis).await?;
    Ok(Json(response))
}

async fn update_auto(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateAutoRequest>,
) -> Result<Json<AutoResponse>, AppError> {
    let response = controller(&state).update(id, request).await?;
    Ok(Json(response))
}

async fn delete_auto(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    controller(&state).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_auto_with_ventas(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<AutoWithVentasResponse>, AppError> {
    let response = controller(&state).get_with_ventas(id).await?;
    Ok(Json(response))
}
