use rust_decimal::Decimal;
use sqlx::PgConnection;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use kernel::interface::query::ExpenseQuery;
use kernel::interface::update::ExpenseModifier;
use kernel::prelude::entity::{
    CreatedAt, Expense, ExpenseAmount, ExpenseCategory, ExpenseDate, ExpenseDescription,
    ExpenseId, UpdatedAt,
};
use kernel::KernelError;

use crate::database::PgTransaction;
use crate::error::ConvertError;

pub struct PostgresExpenseRepository;

#[async_trait::async_trait]
impl ExpenseQuery<PgTransaction> for PostgresExpenseRepository {
    async fn find_by_id(
        &self,
        con: &mut PgTransaction,
        id: &ExpenseId,
    ) -> error_stack::Result<Option<Expense>, KernelError> {
        PgExpenseInternal::find_by_id(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut PgTransaction,
    ) -> error_stack::Result<Vec<Expense>, KernelError> {
        PgExpenseInternal::find_all(con).await
    }
}

#[async_trait::async_trait]
impl ExpenseModifier<PgTransaction> for PostgresExpenseRepository {
    async fn create(
        &self,
        con: &mut PgTransaction,
        expense: &Expense,
    ) -> error_stack::Result<(), KernelError> {
        PgExpenseInternal::create(con, expense).await
    }

    async fn update(
        &self,
        con: &mut PgTransaction,
        expense: &Expense,
    ) -> error_stack::Result<(), KernelError> {
        PgExpenseInternal::update(con, expense).await
    }

    async fn delete(
        &self,
        con: &mut PgTransaction,
        id: &ExpenseId,
    ) -> error_stack::Result<(), KernelError> {
        PgExpenseInternal::delete(con, id).await
    }
}

#[derive(sqlx::FromRow)]
struct ExpenseRow {
    id: Uuid,
    description: String,
    amount: Decimal,
    date: Date,
    category: Option<String>,
    created_at: OffsetDateTime,
    updated_at: OffsetDateTime,
}

impl From<ExpenseRow> for Expense {
    fn from(row: ExpenseRow) -> Self {
        Expense::new(
            ExpenseId::new(row.id),
            ExpenseDescription::new(row.description),
            ExpenseAmount::new(row.amount),
            ExpenseDate::new(row.date),
            row.category.map(ExpenseCategory::new),
            CreatedAt::new(row.created_at),
            UpdatedAt::new(row.updated_at),
        )
    }
}

pub(in crate::database) struct PgExpenseInternal;

impl PgExpenseInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &ExpenseId,
    ) -> error_stack::Result<Option<Expense>, KernelError> {
        let row = sqlx::query_as::<_, ExpenseRow>(
            // language=postgresql
            r#"
            SELECT id, description, amount, date, category, created_at, updated_at
            FROM expenses
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Expense::from))
    }

    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<Expense>, KernelError> {
        let rows = sqlx::query_as::<_, ExpenseRow>(
            // language=postgresql
            r#"
            SELECT id, description, amount, date, category, created_at, updated_at
            FROM expenses
            ORDER BY date DESC, created_at DESC
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Expense::from).collect())
    }

    async fn create(
        con: &mut PgConnection,
        expense: &Expense,
    ) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO expenses (id, description, amount, date, category, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(expense.id().as_ref())
        .bind(expense.description().as_ref())
        .bind(expense.amount().amount())
        .bind(expense.date().as_ref())
        .bind(expense.category().as_ref().map(|c| c.as_ref()))
        .bind(expense.created_at().as_ref())
        .bind(expense.updated_at().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update(
        con: &mut PgConnection,
        expense: &Expense,
    ) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            UPDATE expenses
            SET description = $2, amount = $3, date = $4, category = $5, updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(expense.id().as_ref())
        .bind(expense.description().as_ref())
        .bind(expense.amount().amount())
        .bind(expense.date().as_ref())
        .bind(expense.category().as_ref().map(|c| c.as_ref()))
        .bind(expense.updated_at().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn delete(con: &mut PgConnection, id: &ExpenseId) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            DELETE FROM expenses
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use time::macros::{date, datetime};

    use kernel::interface::database::QueryDatabaseConnection;
    use kernel::interface::query::ExpenseQuery;
    use kernel::interface::update::ExpenseModifier;
    use kernel::prelude::entity::{
        CreatedAt, Expense, ExpenseAmount, ExpenseCategory, ExpenseDate, ExpenseDescription,
        ExpenseId, UpdatedAt,
    };
    use kernel::KernelError;

    use crate::database::PostgresDatabase;
    use crate::database::postgres::expense::PostgresExpenseRepository;

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;
        let id = ExpenseId::new(uuid::Uuid::new_v4());

        let now = datetime!(2024-02-10 8:00 UTC);
        let expense = Expense::new(
            id.clone(),
            ExpenseDescription::new("бензин".to_string()),
            ExpenseAmount::new(rust_decimal::Decimal::new(150050, 2)),
            ExpenseDate::new(date!(2024 - 02 - 10)),
            None,
            CreatedAt::new(now),
            UpdatedAt::new(now),
        );
        PostgresExpenseRepository.create(&mut con, &expense).await?;

        let found = PostgresExpenseRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(expense.clone()));

        let destruct = expense.into_destruct();
        let expense = Expense::new(
            destruct.id,
            destruct.description,
            destruct.amount,
            destruct.date,
            Some(ExpenseCategory::new("транспорт".to_string())),
            destruct.created_at,
            destruct.updated_at,
        );
        PostgresExpenseRepository.update(&mut con, &expense).await?;

        let found = PostgresExpenseRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(expense));

        PostgresExpenseRepository.delete(&mut con, &id).await?;
        let found = PostgresExpenseRepository.find_by_id(&mut con, &id).await?;
        assert!(found.is_none());

        Ok(())
    }
}
