use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

use application::service::{GetRentalService, ModifyRentalService};

use crate::controller::Controller;
use crate::error::{not_found, ErrorStatus};
use crate::handler::AppModule;
use crate::request::{
    CreateRentalRequest, DeleteRentalRequest, GetRentalRequest, GetRentalScheduleRequest,
    RentalTransformer, UpdateRentalRequest,
};
use crate::response::{RentalPresenter, RentalResponse};

pub trait RentalRouter {
    fn route_rental(self) -> Self;
}

impl RentalRouter for Router<AppModule> {
    fn route_rental(self) -> Self {
        self.route(
            "/rentals",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), RentalPresenter)
                    .bypass(|| module.pgpool().get_all_rentals())
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule>,
                 Json(req): Json<CreateRentalRequest>| async move {
                    Controller::new(RentalTransformer, RentalPresenter)
                        .intake(req)
                        .handle(|dto| module.pgpool().create_rental(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/rentals/gantt",
            get(
                |State(module): State<AppModule>,
                 Query(req): Query<GetRentalScheduleRequest>| async move {
                    Controller::new(RentalTransformer, RentalPresenter)
                        .intake(req)
                        .handle(|dto| module.pgpool().get_rental_schedule(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/rentals/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(RentalTransformer, RentalPresenter)
                        .intake(GetRentalRequest::new(id))
                        .handle(|dto| module.pgpool().get_rental(dto))
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(RentalResponse::into_response)
                                .unwrap_or_else(|| not_found("Аренда не найдена"))
                        })
                },
            )
            .put(
                |State(module): State<AppModule>,
                 Path(id): Path<Uuid>,
                 Json(req): Json<UpdateRentalRequest>| async move {
                    Controller::new(RentalTransformer, RentalPresenter)
                        .intake((id, req))
                        .handle(|dto| module.pgpool().update_rental(dto))
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(RentalResponse::into_response)
                                .unwrap_or_else(|| not_found("Аренда не найдена"))
                        })
                },
            )
            .delete(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(RentalTransformer, RentalPresenter)
                        .intake(DeleteRentalRequest::new(id))
                        .handle(|dto| module.pgpool().delete_rental(dto))
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(IntoResponse::into_response)
                                .unwrap_or_else(|| not_found("Аренда не найдена"))
                        })
                },
            ),
        )
    }
}
