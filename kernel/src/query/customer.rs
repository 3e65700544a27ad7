use crate::database::Transaction;
use crate::entity::Customer;
use crate::KernelError;

#[async_trait::async_trait]
pub trait CustomerQuery<Connection: Transaction>: Sync + Send + 'static {
    /// Rentals grouped by (name, phone), most frequent customer first.
    async fn find_all(
        &self,
        con: &mut Connection,
    ) -> error_stack::Result<Vec<Customer>, KernelError>;
}

pub trait DependOnCustomerQuery<Connection: Transaction>: Sync + Send + 'static {
    type CustomerQuery: CustomerQuery<Connection>;
    fn customer_query(&self) -> &Self::CustomerQuery;
}
