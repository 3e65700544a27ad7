use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

use application::service::{GetEquipmentService, ModifyEquipmentService};

use crate::controller::Controller;
use crate::error::{not_found, ErrorStatus};
use crate::handler::AppModule;
use crate::request::{
    CreateEquipmentRequest, DeleteEquipmentRequest, EquipmentTransformer, GetEquipmentRequest,
    UpdateEquipmentRequest,
};
use crate::response::{EquipmentPresenter, EquipmentResponse};

pub trait EquipmentRouter {
    fn route_equipment(self) -> Self;
}

impl EquipmentRouter for Router<AppModule> {
    fn route_equipment(self) -> Self {
        self.route(
            "/equipment",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), EquipmentPresenter)
                    .bypass(|| module.pgpool().get_all_equipment())
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule>,
                 Json(req): Json<CreateEquipmentRequest>| async move {
                    Controller::new(EquipmentTransformer, EquipmentPresenter)
                        .intake(req)
                        .handle(|dto| module.pgpool().create_equipment(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/equipment/for-rental",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), EquipmentPresenter)
                    .bypass(|| module.pgpool().get_equipment_instances())
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
        .route(
            "/equipment/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(EquipmentTransformer, EquipmentPresenter)
                        .intake(GetEquipmentRequest::new(id))
                        .handle(|dto| module.pgpool().get_equipment(dto))
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(EquipmentResponse::into_response)
                                .unwrap_or_else(|| not_found("Оборудование не найдено"))
                        })
                },
            )
            .put(
                |State(module): State<AppModule>,
                 Path(id): Path<Uuid>,
                 Json(req): Json<UpdateEquipmentRequest>| async move {
                    Controller::new(EquipmentTransformer, EquipmentPresenter)
                        .intake((id, req))
                        .handle(|dto| module.pgpool().update_equipment(dto))
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(EquipmentResponse::into_response)
                                .unwrap_or_else(|| not_found("Оборудование не найдено"))
                        })
                },
            )
            .delete(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(EquipmentTransformer, EquipmentPresenter)
                        .intake(DeleteEquipmentRequest::new(id))
                        .handle(|dto| module.pgpool().delete_equipment(dto))
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(IntoResponse::into_response)
                                .unwrap_or_else(|| not_found("Оборудование не найдено"))
                        })
                },
            ),
        )
    }
}
