//! Controllers de la aplicación
//!
//! Reglas de negocio por entidad: pre-check de chasis, chequeo referencial
//! de `auto_id`, cota del año y traducción de ausencias a not-found.

pub mod auto_controller;
pub mod venta_controller;

pub use auto_controller::AutoController;
pub use venta_controller::VentaController;
