use crate::database::Transaction;
use crate::entity::{Expense, ExpenseId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait ExpenseModifier<Connection: Transaction>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Connection,
        expense: &Expense,
    ) -> error_stack::Result<(), KernelError>;

    async fn update(
        &self,
        con: &mut Connection,
        expense: &Expense,
    ) -> error_stack::Result<(), KernelError>;

    async fn delete(
        &self,
        con: &mut Connection,
        id: &ExpenseId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnExpenseModifier<Connection: Transaction>: 'static + Sync + Send {
    type ExpenseModifier: ExpenseModifier<Connection>;
    fn expense_modifier(&self) -> &Self::ExpenseModifier;
}
