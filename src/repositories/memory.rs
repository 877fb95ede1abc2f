//! Implementaciones en memoria de los repositorios, usadas por los tests
//! de controllers en lugar de un PostgreSQL real.
//!
//! Reproducen la semántica observable del store: ids seriales, orden de
//! inserción, UNIQUE de `numero_chasis` (reportado como Conflict, igual que
//! la traducción de la implementación PostgreSQL) y hard deletes. No emulan
//! el ON DELETE SET NULL de la foreign key.

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::dto::auto_dto::{CreateAutoRequest, UpdateAutoRequest};
use crate::dto::venta_dto::{CreateVentaRequest, UpdateVentaRequest};
use crate::models::auto::Auto;
use crate::models::venta::Venta;
use crate::repositories::{AutoRepository, VentaRepository};
use crate::utils::errors::{AppError, AppResult};

pub struct InMemoryAutoRepository {
    rows: Mutex<Vec<Auto>>,
    next_id: AtomicI32,
}

impl InMemoryAutoRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }
}

#[async_trait]
impl AutoRepository for InMemoryAutoRepository {
    async fn create(&self, auto: CreateAutoRequest) -> AppResult<Auto> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|a| a.numero_chasis == auto.numero_chasis) {
            return Err(AppError::Conflict(
                "Número de chasis ya registrado".to_string(),
            ));
        }

        let nuevo = Auto {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            marca: auto.marca,
            modelo: auto.modelo,
            anio: auto.anio,
            numero_chasis: auto.numero_chasis,
        };
        rows.push(nuevo.clone());
        Ok(nuevo)
    }

    async fn get_by_id(&self, auto_id: i32) -> AppResult<Option<Auto>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|a| a.id == auto_id).cloned())
    }

    async fn get_by_chasis(&self, numero_chasis: &str) -> AppResult<Option<Auto>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|a| a.numero_chasis == numero_chasis).cloned())
    }

    async fn get_all(&self, skip: i64, limit: i64) -> AppResult<Vec<Auto>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .skip(skip.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, auto_id: i32, cambios: UpdateAutoRequest) -> AppResult<Option<Auto>> {
        let mut rows = self.rows.lock().unwrap();

        // Igual que la implementación PostgreSQL: primero la ausencia,
        // después el UNIQUE de chasis
        if !rows.iter().any(|a| a.id == auto_id) {
            return Ok(None);
        }
        if let Some(chasis) = &cambios.numero_chasis {
            if rows
                .iter()
                .any(|a| a.id != auto_id && &a.numero_chasis == chasis)
            {
                return Err(AppError::Conflict(
                    "Número de chasis ya registrado".to_string(),
                ));
            }
        }

        let Some(auto) = rows.iter_mut().find(|a| a.id == auto_id) else {
            return Ok(None);
        };

        if let Some(marca) = cambios.marca {
            auto.marca = marca;
        }
        if let Some(modelo) = cambios.modelo {
            auto.modelo = modelo;
        }
        if let Some(anio) = cambios.anio {
            auto.anio = anio;
        }
        if let Some(numero_chasis) = cambios.numero_chasis {
            auto.numero_chasis = numero_chasis;
        }

        Ok(Some(auto.clone()))
    }

    async fn delete(&self, auto_id: i32) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let antes = rows.len();
        rows.retain(|a| a.id != auto_id);
        Ok(rows.len() < antes)
    }
}

pub struct InMemoryVentaRepository {
    rows: Mutex<Vec<Venta>>,
    next_id: AtomicI32,
}

impl InMemoryVentaRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }
}

#[async_trait]
impl VentaRepository for InMemoryVentaRepository {
    async fn create(&self, venta: CreateVentaRequest) -> AppResult<Venta> {
        let nueva = Venta {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            fecha_venta: venta.fecha_venta.unwrap_or_else(Utc::now),
            monto: venta.monto,
            comprador_nombre: venta.comprador_nombre,
            auto_id: venta.auto_id,
        };
        self.rows.lock().unwrap().push(nueva.clone());
        Ok(nueva)
    }

    async fn get_by_id(&self, venta_id: i32) -> AppResult<Option<Venta>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|v| v.id == venta_id).cloned())
    }

    async fn get_all(&self, skip: i64, limit: i64) -> AppResult<Vec<Venta>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .skip(skip.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        venta_id: i32,
        cambios: UpdateVentaRequest,
    ) -> AppResult<Option<Venta>> {
        let mut rows = self.rows.lock().unwrap();
        let Some(venta) = rows.iter_mut().find(|v| v.id == venta_id) else {
            return Ok(None);
        };

        if let Some(fecha_venta) = cambios.fecha_venta {
            venta.fecha_venta = fecha_venta;
        }
        if let Some(monto) = cambios.monto {
            venta.monto = monto;
        }
        if let Some(comprador_nombre) = cambios.comprador_nombre {
            venta.comprador_nombre = comprador_nombre;
        }
        if let Some(auto_id) = cambios.auto_id {
            venta.auto_id = auto_id;
        }

        Ok(Some(venta.clone()))
    }

    async fn delete(&self, venta_id: i32) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let antes = rows.len();
        rows.retain(|v| v.id != venta_id);
        Ok(rows.len() < antes)
    }

    async fn get_by_auto_id(&self, auto_id: i32) -> AppResult<Vec<Venta>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|v| v.auto_id == Some(auto_id))
            .cloned()
            .collect())
    }

    async fn get_by_comprador(&self, nombre: &str) -> AppResult<Vec<Venta>> {
        let fragmento = nombre.to_lowercase();
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|v| v.comprador_nombre.to_lowercase().contains(&fragmento))
            .cloned()
            .collect())
    }
}
