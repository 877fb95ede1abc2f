//! DTOs de la API
//!
//! Requests y responses serializables. Los nombres de campo en el wire
//! siguen el dominio en español (`marca`, `año`, `comprador_nombre`).

pub mod auto_dto;
pub mod venta_dto;

use serde::{Deserialize, Deserializer};

/// Parámetros de paginación para los listados
#[derive(Debug, Deserialize, Default)]
pub struct PaginationParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl PaginationParams {
    pub fn skip(&self) -> i64 {
        self.skip.unwrap_or(0)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(100)
    }
}

/// Deserializa distinguiendo "campo ausente" de "campo presente con null".
///
/// Con `#[serde(default)]` en un campo `Option<Option<T>>`: ausente => None,
/// `null` => Some(None), valor => Some(Some(v)).
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
