use std::ops::{Deref, DerefMut};

use error_stack::{Report, ResultExt};
use sqlx::pool::PoolConnection;
use sqlx::{Error, PgConnection, Pool, Postgres};

use kernel::interface::database::{QueryDatabaseConnection, Transaction};
use kernel::interface::query::{
    DependOnCustomerQuery, DependOnEquipmentQuery, DependOnExpenseQuery, DependOnRentalQuery,
};
use kernel::interface::update::{
    DependOnEquipmentModifier, DependOnExpenseModifier, DependOnRentalModifier,
};
use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

pub use self::{customer::*, equipment::*, expense::*, rental::*};

mod customer;
mod equipment;
mod expense;
mod rental;

static POSTGRES_URL: &str = "POSTGRES_URL";

pub struct PostgresDatabase {
    pool: Pool<Postgres>,
}

impl PostgresDatabase {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(POSTGRES_URL)?;
        let pool = Pool::connect(&url).await.convert_error()?;
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .change_context_lazy(|| KernelError::Internal)?;
        tracing::debug!("postgres migrations applied");
        Ok(Self { pool })
    }
}

pub struct PgTransaction(PoolConnection<Postgres>);

impl Transaction for PgTransaction {}

impl Deref for PgTransaction {
    type Target = PgConnection;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PgTransaction {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[async_trait::async_trait]
impl QueryDatabaseConnection<PgTransaction> for PostgresDatabase {
    async fn transact(&self) -> error_stack::Result<PgTransaction, KernelError> {
        let con = self.pool.acquire().await.convert_error()?;
        Ok(PgTransaction(con))
    }
}

impl<T> ConvertError for Result<T, Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| match error {
            Error::PoolTimedOut => Report::from(error).change_context(KernelError::Timeout),
            _ => Report::from(error).change_context(KernelError::Internal),
        })
    }
}

impl DependOnEquipmentQuery<PgTransaction> for PostgresDatabase {
    type EquipmentQuery = PostgresEquipmentRepository;
    fn equipment_query(&self) -> &Self::EquipmentQuery {
        &PostgresEquipmentRepository
    }
}

impl DependOnEquipmentModifier<PgTransaction> for PostgresDatabase {
    type EquipmentModifier = PostgresEquipmentRepository;
    fn equipment_modifier(&self) -> &Self::EquipmentModifier {
        &PostgresEquipmentRepository
    }
}

impl DependOnRentalQuery<PgTransaction> for PostgresDatabase {
    type RentalQuery = PostgresRentalRepository;
    fn rental_query(&self) -> &Self::RentalQuery {
        &PostgresRentalRepository
    }
}

impl DependOnRentalModifier<PgTransaction> for PostgresDatabase {
    type RentalModifier = PostgresRentalRepository;
    fn rental_modifier(&self) -> &Self::RentalModifier {
        &PostgresRentalRepository
    }
}

impl DependOnExpenseQuery<PgTransaction> for PostgresDatabase {
    type ExpenseQuery = PostgresExpenseRepository;
    fn expense_query(&self) -> &Self::ExpenseQuery {
        &PostgresExpenseRepository
    }
}

impl DependOnExpenseModifier<PgTransaction> for PostgresDatabase {
    type ExpenseModifier = PostgresExpenseRepository;
    fn expense_modifier(&self) -> &Self::ExpenseModifier {
        &PostgresExpenseRepository
    }
}

impl DependOnCustomerQuery<PgTransaction> for PostgresDatabase {
    type CustomerQuery = PostgresCustomerRepository;
    fn customer_query(&self) -> &Self::CustomerQuery {
        &PostgresCustomerRepository
    }
}
