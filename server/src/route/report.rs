use axum::extract::{Query, State};
use axum::routing::get;
use axum::Router;

use application::service::ReportService;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{GetFinancialSummaryRequest, ReportTransformer};
use crate::response::ReportPresenter;

pub trait ReportRouter {
    fn route_report(self) -> Self;
}

impl ReportRouter for Router<AppModule> {
    fn route_report(self) -> Self {
        self.route(
            "/analytics/financial-summary",
            get(
                |State(module): State<AppModule>,
                 Query(req): Query<GetFinancialSummaryRequest>| async move {
                    Controller::new(ReportTransformer, ReportPresenter)
                        .intake(req)
                        .handle(|dto| module.pgpool().get_financial_summary(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/analytics/monthly-revenue",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), ReportPresenter)
                    .bypass(|| module.pgpool().get_monthly_revenue())
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
        .route(
            "/analytics/equipment-utilization",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), ReportPresenter)
                    .bypass(|| module.pgpool().get_equipment_utilization())
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
    }
}
