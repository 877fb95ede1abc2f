//! Controller de Ventas
//!
//! El create hace el chequeo referencial contra el repositorio de autos
//! antes de insertar (check-then-act, igual que el pre-check de chasis).

use validator::Validate;

use crate::dto::auto_dto::AutoResponse;
use crate::dto::venta_dto::{
    CreateVentaRequest, UpdateVentaRequest, VentaResponse, VentaWithAutoResponse,
};
use crate::repositories::{AutoRepository, VentaRepository};
use crate::utils::errors::{AppError, AppResult};

pub struct VentaController<V, A> {
    ventas: V,
    autos: A,
}

impl<V: VentaRepository, A: AutoRepository> VentaController<V, A> {
    pub fn new(ventas: V, autos: A) -> Self {
        Self { ventas, autos }
    }

    /// Registrar una venta. Si trae `auto_id`, el auto referenciado tiene
    /// que existir; la venta sin auto vinculado es válida.
    pub async fn create(&self, request: CreateVentaRequest) -> AppResult<VentaResponse> {
        request.validate()?;

        if let Some(auto_id) = request.auto_id {
            if self.autos.get_by_id(auto_id).await?.is_none() {
                return Err(AppError::NotFound("Auto no encontrado".to_string()));
            }
        }

        let venta = self.ventas.create(request).await?;
        Ok(VentaResponse::from(venta))
    }

    pub async fn get_by_id(&self, venta_id: i32) -> AppResult<VentaResponse> {
        let venta = self
            .ventas
            .get_by_id(venta_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Venta no encontrada".to_string()))?;

        Ok(VentaResponse::from(venta))
    }

    pub async fn get_all(&self, skip: i64, limit: i64) -> AppResult<Vec<VentaResponse>> {
        let ventas = self.ventas.get_all(skip, limit).await?;
        Ok(ventas.into_iter().map(VentaResponse::from).collect())
    }

    pub async fn update(
        &self,
        venta_id: i32,
        request: UpdateVentaRequest,
    ) -> AppResult<VentaResponse> {
        request.validate()?;

        let venta = self
            .ventas
            .update(venta_id, request)
            .await?
            .ok_or_else(|| AppError::NotFound("Venta no encontrada".to_string()))?;

        Ok(VentaResponse::from(venta))
    }

    pub async fn delete(&self, venta_id: i32) -> AppResult<()> {
        if !self.ventas.delete(venta_id).await? {
            return Err(AppError::NotFound("Venta no encontrada".to_string()));
        }
        Ok(())
    }

    /// Ventas de un auto. Lista vacía si no tiene o si el auto no existe.
    pub async fn get_by_auto(&self, auto_id: i32) -> AppResult<Vec<VentaResponse>> {
        let ventas = self.ventas.get_by_auto_id(auto_id).await?;
        Ok(ventas.into_iter().map(VentaResponse::from).collect())
    }

    /// Ventas cuyo comprador contiene el fragmento, sin distinguir mayúsculas
    pub async fn get_by_comprador(&self, nombre: &str) -> AppResult<Vec<VentaResponse>> {
        let ventas = self.ventas.get_by_comprador(nombre).await?;
        Ok(ventas.into_iter().map(VentaResponse::from).collect())
    }

    /// Venta con su auto anidado (null si `auto_id` nunca se vinculó)
    pub async fn get_with_auto(&self, venta_id: i32) -> AppResult<VentaWithAutoResponse> {
        let venta = self
            .ventas
            .get_by_id(venta_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Venta no encontrada".to_string()))?;

        let auto = match venta.auto_id {
            Some(auto_id) => self.autos.get_by_id(auto_id).await?.map(AutoResponse::from),
            None => None,
        };

        Ok(VentaWithAutoResponse::new(venta, auto))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::auto_dto::CreateAutoRequest;
    use crate::repositories::memory::{InMemoryAutoRepository, InMemoryVentaRepository};

    async fn controller_con_auto() -> (
        VentaController<InMemoryVentaRepository, InMemoryAutoRepository>,
        i32,
    ) {
        let autos = InMemoryAutoRepository::new();
        let auto = autos
            .create(CreateAutoRequest {
                marca: "Toyota".to_string(),
                modelo: "Corolla".to_string(),
                anio: 2022,
                numero_chasis: "CHASIS456".to_string(),
            })
            .await
            .unwrap();

        (
            VentaController::new(InMemoryVentaRepository::new(), autos),
            auto.id,
        )
    }

    fn venta_request(auto_id: Option<i32>) -> CreateVentaRequest {
        CreateVentaRequest {
            fecha_venta: None,
            monto: 25000.0,
            comprador_nombre: "Juan Perez".to_string(),
            auto_id,
        }
    }

    #[tokio::test]
    async fn create_persiste_la_venta_vinculada_al_auto() {
        let (controller, auto_id) = controller_con_auto().await;

        let venta = controller.create(venta_request(Some(auto_id))).await.unwrap();

        assert_eq!(venta.id, 1);
        assert_eq!(venta.monto, 25000.0);
        assert_eq!(venta.comprador_nombre, "Juan Perez");
        assert_eq!(venta.auto_id, Some(auto_id));
    }

    #[tokio::test]
    async fn create_con_auto_inexistente_no_persiste_nada() {
        let (controller, _) = controller_con_auto().await;

        let err = controller.create(venta_request(Some(99))).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert!(controller.get_all(0, 100).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_sin_auto_id_es_valido() {
        let (controller, _) = controller_con_auto().await;

        let venta = controller.create(venta_request(None)).await.unwrap();

        assert_eq!(venta.auto_id, None);
    }

    #[tokio::test]
    async fn create_completa_fecha_venta_con_el_instante_actual() {
        let (controller, auto_id) = controller_con_auto().await;
        let antes = chrono::Utc::now();

        let venta = controller.create(venta_request(Some(auto_id))).await.unwrap();

        assert!(venta.fecha_venta >= antes);
        assert!(venta.fecha_venta <= chrono::Utc::now());
    }

    #[tokio::test]
    async fn update_parcial_no_toca_campos_ausentes() {
        let (controller, auto_id) = controller_con_auto().await;
        let venta = controller.create(venta_request(Some(auto_id))).await.unwrap();

        let actualizada = controller
            .update(
                venta.id,
                UpdateVentaRequest {
                    monto: Some(26500.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(actualizada.monto, 26500.0);
        assert_eq!(actualizada.comprador_nombre, "Juan Perez");
        assert_eq!(actualizada.auto_id, Some(auto_id));
        assert_eq!(actualizada.fecha_venta, venta.fecha_venta);
    }

    #[tokio::test]
    async fn update_con_null_explicito_desvincula_el_auto() {
        let (controller, auto_id) = controller_con_auto().await;
        let venta = controller.create(venta_request(Some(auto_id))).await.unwrap();

        let actualizada = controller
            .update(
                venta.id,
                UpdateVentaRequest {
                    auto_id: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(actualizada.auto_id, None);
    }

    #[tokio::test]
    async fn operaciones_sobre_venta_inexistente_son_not_found() {
        let (controller, _) = controller_con_auto().await;

        assert!(matches!(
            controller.get_by_id(99).await.unwrap_err(),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            controller
                .update(99, UpdateVentaRequest::default())
                .await
                .unwrap_err(),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            controller.delete(99).await.unwrap_err(),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            controller.get_with_auto(99).await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn delete_es_definitivo_y_no_idempotente() {
        let (controller, auto_id) = controller_con_auto().await;
        let venta = controller.create(venta_request(Some(auto_id))).await.unwrap();

        controller.delete(venta.id).await.unwrap();

        assert!(matches!(
            controller.get_by_id(venta.id).await.unwrap_err(),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            controller.delete(venta.id).await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn get_by_auto_devuelve_lista_posiblemente_vacia() {
        let (controller, auto_id) = controller_con_auto().await;

        assert!(controller.get_by_auto(auto_id).await.unwrap().is_empty());

        controller.create(venta_request(Some(auto_id))).await.unwrap();
        controller.create(venta_request(None)).await.unwrap();

        let del_auto = controller.get_by_auto(auto_id).await.unwrap();
        assert_eq!(del_auto.len(), 1);
        assert_eq!(del_auto[0].auto_id, Some(auto_id));
    }

    #[tokio::test]
    async fn get_by_comprador_es_substring_case_insensitive() {
        let (controller, auto_id) = controller_con_auto().await;
        controller.create(venta_request(Some(auto_id))).await.unwrap();

        let encontradas = controller.get_by_comprador("juan").await.unwrap();
        assert_eq!(encontradas.len(), 1);

        let por_fragmento = controller.get_by_comprador("PER").await.unwrap();
        assert_eq!(por_fragmento.len(), 1);

        assert!(controller.get_by_comprador("maria").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_with_auto_anida_el_auto_o_null() {
        let (controller, auto_id) = controller_con_auto().await;

        let vinculada = controller.create(venta_request(Some(auto_id))).await.unwrap();
        let con_auto = controller.get_with_auto(vinculada.id).await.unwrap();
        let auto = con_auto.auto.expect("la venta tiene auto vinculado");
        assert_eq!(auto.numero_chasis, "CHASIS456");

        let suelta = controller.create(venta_request(None)).await.unwrap();
        let sin_auto = controller.get_with_auto(suelta.id).await.unwrap();
        assert!(sin_auto.auto.is_none());
    }
}
