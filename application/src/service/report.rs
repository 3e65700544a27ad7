use kernel::interface::database::{
    DependOnDatabaseConnection, QueryDatabaseConnection, Transaction,
};
use kernel::interface::query::{
    DependOnEquipmentQuery, DependOnExpenseQuery, DependOnRentalQuery, EquipmentQuery,
    ExpenseQuery, RentalQuery,
};
use kernel::prelude::report::{EquipmentUtilization, FinancialSummary, MonthFilter, MonthlyRevenue};
use kernel::KernelError;

use crate::transfer::{
    EquipmentUtilizationDto, FinancialSummaryDto, GetFinancialSummaryDto, MonthlyRevenueDto,
};

#[async_trait::async_trait]
pub trait ReportService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnEquipmentQuery<Connection>
    + DependOnRentalQuery<Connection>
    + DependOnExpenseQuery<Connection>
{
    /// Revenue/cost totals, optionally narrowed to one calendar month. The
    /// filter applies only when both year and month are present.
    async fn get_financial_summary(
        &self,
        dto: GetFinancialSummaryDto,
    ) -> error_stack::Result<FinancialSummaryDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let rentals = self.rental_query().find_all(&mut connection).await?;
        let expenses = self.expense_query().find_all(&mut connection).await?;

        let filter = match (dto.year, dto.month) {
            (Some(year), Some(month)) => Some(MonthFilter::new(year, month)),
            _ => None,
        };
        let summary = FinancialSummary::calculate(&rentals, &expenses, filter);
        Ok(FinancialSummaryDto::from(summary))
    }

    async fn get_monthly_revenue(
        &self,
    ) -> error_stack::Result<Vec<MonthlyRevenueDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let rentals = self.rental_query().find_all(&mut connection).await?;
        Ok(MonthlyRevenue::collect(&rentals)
            .into_iter()
            .map(MonthlyRevenueDto::from)
            .collect())
    }

    /// Per-unit rental counts and attributed revenue, busiest units first.
    async fn get_equipment_utilization(
        &self,
    ) -> error_stack::Result<Vec<EquipmentUtilizationDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let equipment = self.equipment_query().find_all(&mut connection).await?;
        let rentals = self.rental_query().find_all(&mut connection).await?;
        Ok(EquipmentUtilization::collect(&equipment, &rentals)
            .into_iter()
            .map(EquipmentUtilizationDto::from)
            .collect())
    }
}

impl<Connection: Transaction + Send, T> ReportService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnEquipmentQuery<Connection>
        + DependOnRentalQuery<Connection>
        + DependOnExpenseQuery<Connection>
{
}
