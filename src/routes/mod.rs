pub mod auto_routes;
pub mod venta_routes;
