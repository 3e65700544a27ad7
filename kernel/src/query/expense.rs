use crate::database::Transaction;
use crate::entity::{Expense, ExpenseId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait ExpenseQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &ExpenseId,
    ) -> error_stack::Result<Option<Expense>, KernelError>;

    /// All expenses ordered by date descending.
    async fn find_all(
        &self,
        con: &mut Connection,
    ) -> error_stack::Result<Vec<Expense>, KernelError>;
}

pub trait DependOnExpenseQuery<Connection: Transaction>: Sync + Send + 'static {
    type ExpenseQuery: ExpenseQuery<Connection>;
    fn expense_query(&self) -> &Self::ExpenseQuery;
}
