use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

use application::service::{GetExpenseService, ModifyExpenseService};

use crate::controller::Controller;
use crate::error::{not_found, ErrorStatus};
use crate::handler::AppModule;
use crate::request::{
    CreateExpenseRequest, DeleteExpenseRequest, ExpenseTransformer, GetExpenseRequest,
    UpdateExpenseRequest,
};
use crate::response::{ExpensePresenter, ExpenseResponse};

pub trait ExpenseRouter {
    fn route_expense(self) -> Self;
}

impl ExpenseRouter for Router<AppModule> {
    fn route_expense(self) -> Self {
        self.route(
            "/expenses",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), ExpensePresenter)
                    .bypass(|| module.pgpool().get_all_expenses())
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule>,
                 Json(req): Json<CreateExpenseRequest>| async move {
                    Controller::new(ExpenseTransformer, ExpensePresenter)
                        .intake(req)
                        .handle(|dto| module.pgpool().create_expense(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/expenses/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(ExpenseTransformer, ExpensePresenter)
                        .intake(GetExpenseRequest::new(id))
                        .handle(|dto| module.pgpool().get_expense(dto))
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(ExpenseResponse::into_response)
                                .unwrap_or_else(|| not_found("Расход не найден"))
                        })
                },
            )
            .put(
                |State(module): State<AppModule>,
                 Path(id): Path<Uuid>,
                 Json(req): Json<UpdateExpenseRequest>| async move {
                    Controller::new(ExpenseTransformer, ExpensePresenter)
                        .intake((id, req))
                        .handle(|dto| module.pgpool().update_expense(dto))
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(ExpenseResponse::into_response)
                                .unwrap_or_else(|| not_found("Расход не найден"))
                        })
                },
            )
            .delete(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(ExpenseTransformer, ExpensePresenter)
                        .intake(DeleteExpenseRequest::new(id))
                        .handle(|dto| module.pgpool().delete_expense(dto))
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(IntoResponse::into_response)
                                .unwrap_or_else(|| not_found("Расход не найден"))
                        })
                },
            ),
        )
    }
}
