//! Modelo de Auto
//!
//! Este módulo contiene el struct Auto que mapea exactamente a la tabla
//! `auto` del schema PostgreSQL con primary key `id` (SERIAL).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Auto principal - mapea exactamente a la tabla `auto`
///
/// `numero_chasis` es clave natural además del id surrogate: el schema
/// declara UNIQUE y los handlers hacen un pre-check antes de insertar.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Auto {
    pub id: i32,
    pub marca: String,
    pub modelo: String,
    #[serde(rename = "año")]
    pub anio: i32,
    pub numero_chasis: String,
}
