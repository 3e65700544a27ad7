use kernel::interface::database::{
    DependOnDatabaseConnection, QueryDatabaseConnection, Transaction,
};
use kernel::interface::query::{CustomerQuery, DependOnCustomerQuery};
use kernel::KernelError;

use crate::transfer::CustomerDto;

#[async_trait::async_trait]
pub trait GetCustomerService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnCustomerQuery<Connection>
{
    async fn get_all_customers(&self) -> error_stack::Result<Vec<CustomerDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let customers = self.customer_query().find_all(&mut connection).await?;
        Ok(customers.into_iter().map(CustomerDto::from).collect())
    }
}

impl<Connection: Transaction + Send, T> GetCustomerService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnCustomerQuery<Connection>
{
}
