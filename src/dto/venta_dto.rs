//! DTOs de Venta
//!
//! El campo `auto_id` del update es `Option<Option<i32>>`: un `null`
//! explícito desvincula la venta del auto, un campo ausente no toca nada.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::auto_dto::AutoResponse;
use crate::models::venta::Venta;

/// Request para registrar una nueva venta
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVentaRequest {
    /// Si no se envía, se usa el instante de creación
    pub fecha_venta: Option<DateTime<Utc>>,

    pub monto: f64,

    #[validate(length(min = 1, max = 200))]
    pub comprador_nombre: String,

    pub auto_id: Option<i32>,
}

/// Request para actualizar una venta existente
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateVentaRequest {
    pub fecha_venta: Option<DateTime<Utc>>,

    pub monto: Option<f64>,

    #[validate(length(min = 1, max = 200))]
    pub comprador_nombre: Option<String>,

    #[serde(default, deserialize_with = "crate::dto::double_option")]
    pub auto_id: Option<Option<i32>>,
}

/// Response de venta para la API
#[derive(Debug, Serialize)]
pub struct VentaResponse {
    pub id: i32,
    pub fecha_venta: DateTime<Utc>,
    pub monto: f64,
    pub comprador_nombre: String,
    pub auto_id: Option<i32>,
}

/// Response de venta con el auto asociado (null si nunca se vinculó)
#[derive(Debug, Serialize)]
pub struct VentaWithAutoResponse {
    pub id: i32,
    pub fecha_venta: DateTime<Utc>,
    pub monto: f64,
    pub comprador_nombre: String,
    pub auto_id: Option<i32>,
    pub auto: Option<AutoResponse>,
}

impl From<Venta> for VentaResponse {
    fn from(venta: Venta) -> Self {
        Self {
            id: venta.id,
            fecha_venta: venta.fecha_venta,
            monto: venta.monto,
            comprador_nombre: venta.comprador_nombre,
            auto_id: venta.auto_id,
        }
    }
}

impl VentaWithAutoResponse {
    pub fn new(venta: Venta, auto: Option<AutoResponse>) -> Self {
        Self {
            id: venta.id,
            fecha_venta: venta.fecha_venta,
            monto: venta.monto,
            comprador_nombre: venta.comprador_nombre,
            auto_id: venta.auto_id,
            auto,
        }
    }
}
