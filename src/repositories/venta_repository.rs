//! Repositorio de Venta
//!
//! Mismo contrato que el de Auto más las consultas relacionales:
//! ventas por auto y ventas por fragmento del nombre del comprador.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use crate::dto::venta_dto::{CreateVentaRequest, UpdateVentaRequest};
use crate::models::venta::Venta;
use crate::utils::errors::AppResult;

/// Contrato del repositorio de ventas
#[async_trait]
pub trait VentaRepository: Send + Sync {
    /// Inserta una venta nueva; `fecha_venta` ausente se completa con ahora
    async fn create(&self, venta: CreateVentaRequest) -> AppResult<Venta>;

    async fn get_by_id(&self, venta_id: i32) -> AppResult<Option<Venta>>;

    /// Página de ventas en orden de inserción (id ascendente)
    async fn get_all(&self, skip: i64, limit: i64) -> AppResult<Vec<Venta>>;

    /// Actualización parcial. `auto_id = Some(None)` desvincula la venta.
    async fn update(&self, venta_id: i32, cambios: UpdateVentaRequest)
        -> AppResult<Option<Venta>>;

    /// Hard delete. Devuelve false si el id no existe.
    async fn delete(&self, venta_id: i32) -> AppResult<bool>;

    /// Todas las ventas del auto indicado (posiblemente vacío)
    async fn get_by_auto_id(&self, auto_id: i32) -> AppResult<Vec<Venta>>;

    /// Substring match case-insensitive sobre el nombre del comprador
    async fn get_by_comprador(&self, nombre: &str) -> AppResult<Vec<Venta>>;
}

/// Implementación PostgreSQL del repositorio de ventas
pub struct PgVentaRepository {
    pool: PgPool,
}

impl PgVentaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VentaRepository for PgVentaRepository {
    async fn create(&self, venta: CreateVentaRequest) -> AppResult<Venta> {
        let venta = sqlx::query_as::<_, Venta>(
            r#"
            INSERT INTO venta (fecha_venta, monto, comprador_nombre, auto_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, fecha_venta, monto, comprador_nombre, auto_id
            "#,
        )
        .bind(venta.fecha_venta.unwrap_or_else(Utc::now))
        .bind(venta.monto)
        .bind(venta.comprador_nombre)
        .bind(venta.auto_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(venta)
    }

    async fn get_by_id(&self, venta_id: i32) -> AppResult<Option<Venta>> {
        let venta = sqlx::query_as::<_, Venta>(
            "SELECT id, fecha_venta, monto, comprador_nombre, auto_id FROM venta WHERE id = $1",
        )
        .bind(venta_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(venta)
    }

    async fn get_all(&self, skip: i64, limit: i64) -> AppResult<Vec<Venta>> {
        let ventas = sqlx::query_as::<_, Venta>(
            r#"
            SELECT id, fecha_venta, monto, comprador_nombre, auto_id
            FROM venta
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        Ok(ventas)
    }

    async fn update(
        &self,
        venta_id: i32,
        cambios: UpdateVentaRequest,
    ) -> AppResult<Option<Venta>> {
        let Some(actual) = self.get_by_id(venta_id).await? else {
            return Ok(None);
        };

        let venta = sqlx::query_as::<_, Venta>(
            r#"
            UPDATE venta
            SET fecha_venta = $2, monto = $3, comprador_nombre = $4, auto_id = $5
            WHERE id = $1
            RETURNING id, fecha_venta, monto, comprador_nombre, auto_id
            "#,
        )
        .bind(venta_id)
        .bind(cambios.fecha_venta.unwrap_or(actual.fecha_venta))
        .bind(cambios.monto.unwrap_or(actual.monto))
        .bind(cambios.comprador_nombre.unwrap_or(actual.comprador_nombre))
        .bind(cambios.auto_id.unwrap_or(actual.auto_id))
        .fetch_one(&self.pool)
        .await?;

        Ok(Some(venta))
    }

    async fn delete(&self, venta_id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM venta WHERE id = $1")
            .bind(venta_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn get_by_auto_id(&self, auto_id: i32) -> AppResult<Vec<Venta>> {
        let ventas = sqlx::query_as::<_, Venta>(
            "SELECT id, fecha_venta, monto, comprador_nombre, auto_id FROM venta WHERE auto_id = $1",
        )
        .bind(auto_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ventas)
    }

    async fn get_by_comprador(&self, nombre: &str) -> AppResult<Vec<Venta>> {
        let ventas = sqlx::query_as::<_, Venta>(
            r#"
            SELECT id, fecha_venta, monto, comprador_nombre, auto_id
            FROM venta
            WHERE comprador_nombre ILIKE $1
            "#,
        )
        .bind(format!("%{}%", nombre))
        .fetch_all(&self.pool)
        .await?;

        Ok(ventas)
    }
}
