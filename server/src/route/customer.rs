use axum::extract::{Path, State};
use axum::routing::get;
use axum::Router;

use application::service::{GetCustomerService, GetRentalService};

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{GetCustomerRentalsRequest, RentalTransformer};
use crate::response::{CustomerPresenter, RentalPresenter};

pub trait CustomerRouter {
    fn route_customer(self) -> Self;
}

impl CustomerRouter for Router<AppModule> {
    fn route_customer(self) -> Self {
        self.route(
            "/customers",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), CustomerPresenter)
                    .bypass(|| module.pgpool().get_all_customers())
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
        .route(
            "/customers/:phone/rentals",
            get(
                |State(module): State<AppModule>, Path(phone): Path<String>| async move {
                    Controller::new(RentalTransformer, RentalPresenter)
                        .intake(GetCustomerRentalsRequest::new(phone))
                        .handle(|dto| module.pgpool().get_customer_rentals(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
