//! Repositorios de acceso a datos
//!
//! Cada entidad expone su contrato como trait con una única implementación
//! concreta sobre PostgreSQL. Los tests sustituyen la implementación por
//! un store en memoria (`memory`).

pub mod auto_repository;
pub mod venta_repository;

#[cfg(test)]
pub mod memory;

pub use auto_repository::{AutoRepository, PgAutoRepository};
pub use venta_repository::{PgVentaRepository, VentaRepository};
