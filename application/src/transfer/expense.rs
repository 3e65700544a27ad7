use rust_decimal::Decimal;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use kernel::prelude::entity::{DestructExpense, Expense};

#[derive(Debug, Clone)]
pub struct ExpenseDto {
    pub id: Uuid,
    pub description: String,
    pub amount: Decimal,
    pub date: Date,
    pub category: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<Expense> for ExpenseDto {
    fn from(value: Expense) -> Self {
        let DestructExpense {
            id,
            description,
            amount,
            date,
            category,
            created_at,
            updated_at,
        } = value.into_destruct();
        Self {
            id: *id.as_ref(),
            description: description.as_ref().clone(),
            amount: amount.amount(),
            date: *date.as_ref(),
            category: category.map(|category| category.as_ref().clone()),
            created_at: *created_at.as_ref(),
            updated_at: *updated_at.as_ref(),
        }
    }
}

pub struct GetExpenseDto {
    pub id: Uuid,
}

pub struct CreateExpenseDto {
    pub description: String,
    pub amount: Decimal,
    pub date: Date,
    pub category: Option<String>,
}

pub struct UpdateExpenseDto {
    pub id: Uuid,
    pub description: Option<String>,
    pub amount: Option<Decimal>,
    pub date: Option<Date>,
    pub category: Option<String>,
}

pub struct DeleteExpenseDto {
    pub id: Uuid,
}
