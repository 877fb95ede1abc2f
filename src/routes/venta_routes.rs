//! Rutas de Ventas
//!
//! Incluye las consultas relacionales: por auto y por fragmento del
//! nombre del comprador.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::VentaController;
use crate::dto::venta_dto::{
    CreateVentaRequest, UpdateVentaRequest, VentaResponse, VentaWithAutoResponse,
};
use crate::dto::PaginationParams;
use crate::repositories::{PgAutoRepository, PgVentaRepository};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_venta_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_venta))
        .route("/", get(get_all_ventas))
        .route("/:id", get(get_venta_by_id))
        .route("/:id", put(update_venta))
        .route("/:id", delete(delete_venta))
        .route("/auto/:auto_id", get(get_ventas_by_auto))
        .route("/comprador/:nombre", get(get_ventas_by_comprador))
        .route("/:id/with-auto", get(get_venta_with_auto))
}

fn controller(state: &AppState) -> VentaController<PgVentaRepository, PgAutoRepository> {
    VentaController::new(
        PgVentaRepository::new(state.pool.clone()),
        PgAutoRepository::new(state.pool.clone()),
    )
}

async fn create_venta(
    State(state): State<AppState>,
    Json(request): Json<CreateVentaRequest>,
) -> Result<Json<VentaResponse>, AppError> {
    let response = controller(&state).create(request).await?;
    Ok(Json(response))
}

async fn get_all_ventas(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<Vec<VentaResponse>>, AppError> {
    let response = controller(&state)
        .get_all(pagination.skip(), pagination.limit())
        .await?;
    Ok(Json(response))
}

async fn get_venta_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<VentaResponse>, AppError> {
    let response = controller(&state).get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_venta(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateVentaRequest>,
) -> Result<Json<VentaResponse>, AppError> {
    let response = controller(&state).update(id, request).await?;
    Ok(Json(response))
}

async fn delete_venta(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    controller(&state).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_ventas_by_auto(
    State(state): State<AppState>,
    Path(auto_id): Path<i32>,
) -> Result<Json<Vec<VentaResponse>>, AppError> {
    let response = controller(&state).get_by_auto(auto_id).await?;
    Ok(Json(response))
}

async fn get_ventas_by_comprador(
    State(state): State<AppState>,
    Path(nombre): Path<String>,
) -> Result<Json<Vec<VentaResponse>>, AppError> {
    let response = controller(&state).get_by_comprador(&nombre).await?;
    Ok(Json(response))
}

async fn get_venta_with_auto(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<VentaWithAutoResponse>, AppError> {
    let response = controller(&state).get_with_auto(id).await?;
    Ok(Json(response))
}
