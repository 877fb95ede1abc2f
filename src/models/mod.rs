//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean exactamente
//! al schema PostgreSQL (tablas `auto` y `venta`).

pub mod auto;
pub mod venta;
