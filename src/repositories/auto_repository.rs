//! Repositorio de Auto
//!
//! Contrato de acceso a datos para la tabla `auto` y su implementación
//! PostgreSQL. Las queries usan bind parameters en runtime para no requerir
//! una base de datos en tiempo de compilación.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::dto::auto_dto::{CreateAutoRequest, UpdateAutoRequest};
use crate::models::auto::Auto;
use crate::utils::errors::{AppError, AppResult};

/// Contrato del repositorio de autos
#[async_trait]
pub trait AutoRepository: Send + Sync {
    /// Inserta un auto nuevo; el store asigna el id
    async fn create(&self, auto: CreateAutoRequest) -> AppResult<Auto>;

    async fn get_by_id(&self, auto_id: i32) -> AppResult<Option<Auto>>;

    /// Búsqueda por clave natural; también se usa como pre-check de unicidad
    async fn get_by_chasis(&self, numero_chasis: &str) -> AppResult<Option<Auto>>;

    /// Página de autos en orden de inserción (id ascendente)
    async fn get_all(&self, skip: i64, limit: i64) -> AppResult<Vec<Auto>>;

    /// Actualización parcial: solo los campos presentes cambian.
    /// Devuelve None si el id no existe.
    async fn update(&self, auto_id: i32, cambios: UpdateAutoRequest) -> AppResult<Option<Auto>>;

    /// Hard delete. Devuelve false si el id no existe.
    async fn delete(&self, auto_id: i32) -> AppResult<bool>;
}

/// Implementación PostgreSQL del repositorio de autos
pub struct PgAutoRepository {
    pool: PgPool,
}

impl PgAutoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Traduce la violación del UNIQUE de `numero_chasis` a un conflicto de
/// dominio. Es el respaldo atómico del pre-check del controller: si dos
/// creates concurrentes pasan el pre-check, el perdedor termina acá.
pub(crate) fn map_chasis_violation(e: sqlx::Error) -> AppError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            AppError::Conflict("Número de chasis ya registrado".to_string())
        }
        _ => AppError::Database(e),
    }
}

#[async_trait]
impl AutoRepository for PgAutoRepository {
    async fn create(&self, auto: CreateAutoRequest) -> AppResult<Auto> {
        let auto = sqlx::query_as::<_, Auto>(
            r#"
            INSERT INTO auto (marca, modelo, anio, numero_chasis)
            VALUES ($1, $2, $3, $4)
            RETURNING id, marca, modelo, anio, numero_chasis
            "#,
        )
        .bind(auto.marca)
        .bind(auto.modelo)
        .bind(auto.anio)
        .bind(auto.numero_chasis)
        .fetch_one(&self.pool)
        .await
        .map_err(map_chasis_violation)?;

        Ok(auto)
    }

    async fn get_by_id(&self, auto_id: i32) -> AppResult<Option<Auto>> {
        let auto = sqlx::query_as::<_, Auto>(
            "SELECT id, marca, modelo, anio, numero_chasis FROM auto WHERE id = $1",
        )
        .bind(auto_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(auto)
    }

    async fn get_by_chasis(&self, numero_chasis: &str) -> AppResult<Option<Auto>> {
        let auto = sqlx::query_as::<_, Auto>(
            "SELECT id, marca, modelo, anio, numero_chasis FROM auto WHERE numero_chasis = $1",
        )
        .bind(numero_chasis)
        .fetch_optional(&self.pool)
        .await?;

        Ok(auto)
    }

    async fn get_all(&self, skip: i64, limit: i64) -> AppResult<Vec<Auto>> {
        let autos = sqlx::query_as::<_, Auto>(
            r#"
            SELECT id, marca, modelo, anio, numero_chasis
            FROM auto
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        Ok(autos)
    }

    async fn update(&self, auto_id: i32, cambios: UpdateAutoRequest) -> AppResult<Option<Auto>> {
        // Cargar el registro actual y mezclar solo los campos presentes
        let Some(actual) = self.get_by_id(auto_id).await? else {
            return Ok(None);
        };

        let auto = sqlx::query_as::<_, Auto>(
            r#"
            UPDATE auto
            SET marca = $2, modelo = $3, anio = $4, numero_chasis = $5
            WHERE id = $1
            RETURNING id, marca, modelo, anio, numero_chasis
            "#,
        )
        .bind(auto_id)
        .bind(cambios.marca.unwrap_or(actual.marca))
        .bind(cambios.modelo.unwrap_or(actual.modelo))
        .bind(cambios.anio.unwrap_or(actual.anio))
        .bind(cambios.numero_chasis.unwrap_or(actual.numero_chasis))
        .fetch_one(&self.pool)
        .await
        .map_err(map_chasis_violation)?;

        Ok(Some(auto))
    }

    async fn delete(&self, auto_id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM auto WHERE id = $1")
            .bind(auto_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
