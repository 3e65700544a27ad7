use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use application::transfer::{EquipmentUtilizationDto, FinancialSummaryDto, MonthlyRevenueDto};

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
pub struct FinancialSummaryResponse {
    total_revenue: Decimal,
    rental_revenue: Decimal,
    delivery_revenue: Decimal,
    total_costs: Decimal,
    delivery_costs: Decimal,
    operational_expenses: Decimal,
    net_profit: Decimal,
    total_rentals: i64,
}

impl From<FinancialSummaryDto> for FinancialSummaryResponse {
    fn from(value: FinancialSummaryDto) -> Self {
        Self {
            total_revenue: value.total_revenue,
            rental_revenue: value.rental_revenue,
            delivery_revenue: value.delivery_revenue,
            total_costs: value.total_costs,
            delivery_costs: value.delivery_costs,
            operational_expenses: value.operational_expenses,
            net_profit: value.net_profit,
            total_rentals: value.total_rentals,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MonthlyRevenueResponse {
    year: i32,
    month: u8,
    month_name: &'static str,
    total_revenue: Decimal,
    rental_count: i64,
}

impl From<MonthlyRevenueDto> for MonthlyRevenueResponse {
    fn from(value: MonthlyRevenueDto) -> Self {
        Self {
            year: value.year,
            month: value.month,
            month_name: value.month_name,
            total_revenue: value.total_revenue,
            rental_count: value.rental_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EquipmentUtilizationResponse {
    id: Uuid,
    name: String,
    quantity: i32,
    total_rentals: i64,
    total_revenue: Decimal,
}

impl From<EquipmentUtilizationDto> for EquipmentUtilizationResponse {
    fn from(value: EquipmentUtilizationDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
            quantity: value.quantity,
            total_rentals: value.total_rentals,
            total_revenue: value.total_revenue,
        }
    }
}

pub struct ReportPresenter;

impl Exhaust<FinancialSummaryDto> for ReportPresenter {
    type To = axum::Json<FinancialSummaryResponse>;
    fn emit(&self, input: FinancialSummaryDto) -> Self::To {
        axum::Json(FinancialSummaryResponse::from(input))
    }
}

impl Exhaust<Vec<MonthlyRevenueDto>> for ReportPresenter {
    type To = axum::Json<Vec<MonthlyRevenueResponse>>;
    fn emit(&self, input: Vec<MonthlyRevenueDto>) -> Self::To {
        axum::Json(input.into_iter().map(MonthlyRevenueResponse::from).collect())
    }
}

impl Exhaust<Vec<EquipmentUtilizationDto>> for ReportPresenter {
    type To = axum::Json<Vec<EquipmentUtilizationResponse>>;
    fn emit(&self, input: Vec<EquipmentUtilizationDto>) -> Self::To {
        axum::Json(
            input
                .into_iter()
                .map(EquipmentUtilizationResponse::from)
                .collect(),
        )
    }
}
