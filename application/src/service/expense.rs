use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::database::{
    DependOnDatabaseConnection, QueryDatabaseConnection, Transaction,
};
use kernel::interface::query::{DependOnExpenseQuery, ExpenseQuery};
use kernel::interface::update::{DependOnExpenseModifier, ExpenseModifier};
use kernel::prelude::entity::{
    CreatedAt, DestructExpense, Expense, ExpenseAmount, ExpenseCategory, ExpenseDate,
    ExpenseDescription, ExpenseId, UpdatedAt,
};
use kernel::KernelError;

use crate::transfer::{
    CreateExpenseDto, DeleteExpenseDto, ExpenseDto, GetExpenseDto, UpdateExpenseDto,
};

#[async_trait::async_trait]
pub trait GetExpenseService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnExpenseQuery<Connection>
{
    async fn get_expense(
        &self,
        dto: GetExpenseDto,
    ) -> error_stack::Result<Option<ExpenseDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = ExpenseId::new(dto.id);
        let expense = self.expense_query().find_by_id(&mut connection, &id).await?;
        Ok(expense.map(ExpenseDto::from))
    }

    async fn get_all_expenses(&self) -> error_stack::Result<Vec<ExpenseDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let expenses = self.expense_query().find_all(&mut connection).await?;
        Ok(expenses.into_iter().map(ExpenseDto::from).collect())
    }
}

impl<Connection: Transaction + Send, T> GetExpenseService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnExpenseQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait ModifyExpenseService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnExpenseQuery<Connection>
    + DependOnExpenseModifier<Connection>
{
    async fn create_expense(
        &self,
        dto: CreateExpenseDto,
    ) -> error_stack::Result<Uuid, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let uuid = Uuid::new_v4();
        let now = OffsetDateTime::now_utc();
        let expense = Expense::new(
            ExpenseId::new(uuid),
            ExpenseDescription::new(dto.description),
            ExpenseAmount::new(dto.amount),
            ExpenseDate::new(dto.date),
            dto.category.map(ExpenseCategory::new),
            CreatedAt::new(now),
            UpdatedAt::new(now),
        );
        self.expense_modifier()
            .create(&mut connection, &expense)
            .await?;

        Ok(uuid)
    }

    async fn update_expense(
        &self,
        dto: UpdateExpenseDto,
    ) -> error_stack::Result<Option<ExpenseDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = ExpenseId::new(dto.id);
        let Some(expense) = self.expense_query().find_by_id(&mut connection, &id).await? else {
            return Ok(None);
        };

        let DestructExpense {
            id,
            description,
            amount,
            date,
            category,
            created_at,
            ..
        } = expense.into_destruct();
        let expense = Expense::new(
            id,
            dto.description
                .map(ExpenseDescription::new)
                .unwrap_or(description),
            dto.amount.map(ExpenseAmount::new).unwrap_or(amount),
            dto.date.map(ExpenseDate::new).unwrap_or(date),
            dto.category.map(ExpenseCategory::new).or(category),
            created_at,
            UpdatedAt::new(OffsetDateTime::now_utc()),
        );
        self.expense_modifier()
            .update(&mut connection, &expense)
            .await?;

        Ok(Some(ExpenseDto::from(expense)))
    }

    async fn delete_expense(
        &self,
        dto: DeleteExpenseDto,
    ) -> error_stack::Result<Option<()>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = ExpenseId::new(dto.id);
        if self
            .expense_query()
            .find_by_id(&mut connection, &id)
            .await?
            .is_none()
        {
            return Ok(None);
        }
        self.expense_modifier().delete(&mut connection, &id).await?;

        Ok(Some(()))
    }
}

impl<Connection: Transaction + Send, T> ModifyExpenseService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnExpenseQuery<Connection>
        + DependOnExpenseModifier<Connection>
{
}
