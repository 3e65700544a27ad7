use rust_decimal::Decimal;
use uuid::Uuid;

use kernel::prelude::report::{EquipmentUtilization, FinancialSummary, MonthlyRevenue};

pub struct GetFinancialSummaryDto {
    pub year: Option<i32>,
    pub month: Option<u8>,
}

#[derive(Debug, Clone)]
pub struct FinancialSummaryDto {
    pub total_revenue: Decimal,
    pub rental_revenue: Decimal,
    pub delivery_revenue: Decimal,
    pub total_costs: Decimal,
    pub delivery_costs: Decimal,
    pub operational_expenses: Decimal,
    pub net_profit: Decimal,
    pub total_rentals: i64,
}

impl From<FinancialSummary> for FinancialSummaryDto {
    fn from(value: FinancialSummary) -> Self {
        Self {
            total_revenue: *value.total_revenue(),
            rental_revenue: *value.rental_revenue(),
            delivery_revenue: *value.delivery_revenue(),
            total_costs: *value.total_costs(),
            delivery_costs: *value.delivery_costs(),
            operational_expenses: *value.operational_expenses(),
            net_profit: *value.net_profit(),
            total_rentals: *value.total_rentals(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MonthlyRevenueDto {
    pub year: i32,
    pub month: u8,
    pub month_name: &'static str,
    pub total_revenue: Decimal,
    pub rental_count: i64,
}

impl From<MonthlyRevenue> for MonthlyRevenueDto {
    fn from(value: MonthlyRevenue) -> Self {
        Self {
            year: *value.year(),
            month: *value.month(),
            month_name: value.month_name(),
            total_revenue: *value.total_revenue(),
            rental_count: *value.rental_count(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EquipmentUtilizationDto {
    pub id: Uuid,
    pub name: String,
    pub quantity: i32,
    pub total_rentals: i64,
    pub total_revenue: Decimal,
}

impl From<EquipmentUtilization> for EquipmentUtilizationDto {
    fn from(value: EquipmentUtilization) -> Self {
        Self {
            id: *value.id().as_ref(),
            name: value.name().as_ref().clone(),
            quantity: *value.quantity().as_ref(),
            total_rentals: *value.total_rentals(),
            total_revenue: *value.total_revenue(),
        }
    }
}
