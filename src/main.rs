mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod state;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Sistema de Gestión de Ventas de Autos");
    info!("========================================");

    let config = EnvironmentConfig::from_env();

    // Inicializar base de datos y schema
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };
    db_connection.create_schema().await?;

    let pool = db_connection.pool().clone();

    // CORS: orígenes explícitos si están configurados, permisivo en desarrollo
    let cors = if config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(&config.cors_origins)
    };

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let app_state = AppState::new(pool, config);

    let app = Router::new()
        .route("/", get(health_check))
        .nest("/autos", routes::auto_routes::create_auto_router())
        .nest("/ventas", routes::venta_routes::create_venta_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    / - Health check");
    info!("🚗 Endpoints - Autos:");
    info!("   POST   /autos - Crear auto");
    info!("   GET    /autos?skip=&limit= - Listar autos");
    info!("   GET    /autos/:id - Obtener auto");
    info!("   GET    /autos/chasis/:numero_chasis - Obtener auto por chasis");
    info!("   PUT    /autos/:id - Actualizar auto");
    info!("   DELETE /autos/:id - Eliminar auto");
    info!("   GET    /autos/:id/with-ventas - Auto con sus ventas");
    info!("💰 Endpoints - Ventas:");
    info!("   POST   /ventas - Registrar venta");
    info!("   GET    /ventas?skip=&limit= - Listar ventas");
    info!("   GET    /ventas/:id - Obtener venta");
    info!("   PUT    /ventas/:id - Actualizar venta");
    info!("   DELETE /ventas/:id - Eliminar venta");
    info!("   GET    /ventas/auto/:auto_id - Ventas de un auto");
    info!("   GET    /ventas/comprador/:nombre - Ventas por comprador");
    info!("   GET    /ventas/:id/with-auto - Venta con su auto");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Endpoint de health check
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "operational",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
