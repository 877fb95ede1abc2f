//! Modelo de Venta
//!
//! Mapea exactamente a la tabla `venta`. `auto_id` es una foreign key
//! nullable hacia `auto(id)` con ON DELETE SET NULL.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Venta principal - mapea exactamente a la tabla `venta`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Venta {
    pub id: i32,
    pub fecha_venta: DateTime<Utc>,
    pub monto: f64,
    pub comprador_nombre: String,
    pub auto_id: Option<i32>,
}
