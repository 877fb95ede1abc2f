//! DTOs de Auto
//!
//! Requests de creación/actualización parcial y responses, incluida la
//! proyección con ventas anidadas.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::venta_dto::VentaResponse;
use crate::models::auto::Auto;

/// Request para crear un nuevo auto
///
/// El límite inferior/superior de `año` se valida en el controller porque el
/// tope depende del año calendario actual.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAutoRequest {
    #[validate(length(min = 1, max = 100))]
    pub marca: String,

    #[validate(length(min = 1, max = 100))]
    pub modelo: String,

    #[serde(rename = "año")]
    pub anio: i32,

    #[validate(length(min = 1, max = 50))]
    pub numero_chasis: String,
}

/// Request para actualizar un auto existente
///
/// Actualización parcial: los campos ausentes conservan su valor previo.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAutoRequest {
    #[validate(length(min = 1, max = 100))]
    pub marca: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub modelo: Option<String>,

    #[serde(rename = "año")]
    pub anio: Option<i32>,

    #[validate(length(min = 1, max = 50))]
    pub numero_chasis: Option<String>,
}

/// Response de auto para la API
#[derive(Debug, Serialize)]
pub struct AutoResponse {
    pub id: i32,
    pub marca: String,
    pub modelo: String,
    #[serde(rename = "año")]
    pub anio: i32,
    pub numero_chasis: String,
}

/// Response de auto con sus ventas asociadas (join explícito en el handler)
#[derive(Debug, Serialize)]
pub struct AutoWithVentasResponse {
    pub id: i32,
    pub marca: String,
    pub modelo: String,
    #[serde(rename = "año")]
    pub anio: i32,
    pub numero_chasis: String,
    pub ventas: Vec<VentaResponse>,
}

impl From<Auto> for AutoResponse {
    fn from(auto: Auto) -> Self {
        Self {
            id: auto.id,
            marca: auto.marca,
            modelo: auto.modelo,
            anio: auto.anio,
            numero_chasis: auto.numero_chasis,
        }
    }
}

impl AutoWithVentasResponse {
    pub fn new(auto: Auto, ventas: Vec<VentaResponse>) -> Self {
        Self {
            id: auto.id,
            marca: auto.marca,
            modelo: auto.modelo,
            anio: auto.anio,
            numero_chasis: auto.numero_chasis,
            ventas,
        }
    }
}
