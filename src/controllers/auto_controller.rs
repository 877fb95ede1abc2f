//! Controller de Autos
//!
//! Genérico sobre los contratos de repositorio para poder testearlo con un
//! store en memoria. El repositorio de ventas solo participa en la
//! proyección with-ventas (el join lo hace el controller, no el store).

use chrono::{Datelike, Utc};
use validator::Validate;

use crate::dto::auto_dto::{
    AutoResponse, AutoWithVentasResponse, CreateAutoRequest, UpdateAutoRequest,
};
use crate::dto::venta_dto::VentaResponse;
use crate::repositories::{AutoRepository, VentaRepository};
use crate::utils::errors::{AppError, AppResult};

pub struct AutoController<A, V> {
    autos: A,
    ventas: V,
}

/// Cota del año de fabricación: [1900, año calendario actual].
///
/// El tope se recalcula en cada validación, no al arranque del proceso.
fn validar_anio(anio: i32) -> AppResult<()> {
    let tope = Utc::now().year();
    if anio < 1900 || anio > tope {
        return Err(AppError::BadRequest(format!(
            "El año debe estar entre 1900 y {}",
            tope
        )));
    }
    Ok(())
}

impl<A: AutoRepository, V: VentaRepository> AutoController<A, V> {
    pub fn new(autos: A, ventas: V) -> Self {
        Self { autos, ventas }
    }

    /// Crear un auto nuevo rechazando chasis duplicados.
    ///
    /// El pre-check con `get_by_chasis` no es atómico con el insert; el
    /// UNIQUE del schema cubre la carrera y el repositorio lo reporta
    /// como Conflict.
    pub async fn create(&self, request: CreateAutoRequest) -> AppResult<AutoResponse> {
        request.validate()?;
        validar_anio(request.anio)?;

        if self.autos.get_by_chasis(&request.numero_chasis).await?.is_some() {
            return Err(AppError::BadRequest(
                "Número de chasis ya registrado".to_string(),
            ));
        }

        let auto = self.autos.create(request).await?;
        Ok(AutoResponse::from(auto))
    }

    pub async fn get_by_id(&self, auto_id: i32) -> AppResult<AutoResponse> {
        let auto = self
            .autos
            .get_by_id(auto_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Auto no encontrado".to_string()))?;

        Ok(AutoResponse::from(auto))
    }

    pub async fn get_by_chasis(&self, numero_chasis: &str) -> AppResult<AutoResponse> {
        let auto = self
            .autos
            .get_by_chasis(numero_chasis)
            .await?
            .ok_or_else(|| AppError::NotFound("Auto no encontrado".to_string()))?;

        Ok(AutoResponse::from(auto))
    }

    pub async fn get_all(&self, skip: i64, limit: i64) -> AppResult<Vec<AutoResponse>> {
        let autos = self.autos.get_all(skip, limit).await?;
        Ok(autos.into_iter().map(AutoResponse::from).collect())
    }

    pub async fn update(
        &self,
        auto_id: i32,
        request: UpdateAutoRequest,
    ) -> AppResult<AutoResponse> {
        request.validate()?;
        if let Some(anio) = request.anio {
            validar_anio(anio)?;
        }

        let auto = self
            .autos
            .update(auto_id, request)
            .await?
            .ok_or_else(|| AppError::NotFound("Auto no encontrado".to_string()))?;

        Ok(AutoResponse::from(auto))
    }

    pub async fn delete(&self, auto_id: i32) -> AppResult<()> {
        if !self.autos.delete(auto_id).await? {
            return Err(AppError::NotFound("Auto no encontrado".to_string()));
        }
        Ok(())
    }

    /// Auto con sus ventas asociadas (join explícito vía `get_by_auto_id`)
    pub async fn get_with_ventas(&self, auto_id: i32) -> AppResult<AutoWithVentasResponse> {
        let auto = self
            .autos
            .get_by_id(auto_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Auto no encontrado".to_string()))?;

        let ventas = self.ventas.get_by_auto_id(auto_id).await?;
        let ventas = ventas.into_iter().map(VentaResponse::from).collect();

        Ok(AutoWithVentasResponse::new(auto, ventas))
    }
}
