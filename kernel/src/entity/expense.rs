mod amount;
mod category;
mod date;
mod description;
mod id;

pub use self::{amount::*, category::*, date::*, description::*, id::*};
use crate::entity::common::{CreatedAt, UpdatedAt};
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Expense {
    id: ExpenseId,
    description: ExpenseDescription,
    amount: ExpenseAmount,
    date: ExpenseDate,
    category: Option<ExpenseCategory>,
    created_at: CreatedAt<Expense>,
    updated_at: UpdatedAt<Expense>,
}

impl Expense {
    pub fn new(
        id: ExpenseId,
        description: ExpenseDescription,
        amount: ExpenseAmount,
        date: ExpenseDate,
        category: Option<ExpenseCategory>,
        created_at: CreatedAt<Expense>,
        updated_at: UpdatedAt<Expense>,
    ) -> Self {
        Self {
            id,
            description,
            amount,
            date,
            category,
            created_at,
            updated_at,
        }
    }
}
