use rust_decimal::Decimal;
use serde::Deserialize;
use time::Date;
use uuid::Uuid;

use application::transfer::{
    CreateExpenseDto, DeleteExpenseDto, GetExpenseDto, UpdateExpenseDto,
};

use crate::controller::Intake;

#[derive(Debug, Deserialize)]
pub struct CreateExpenseRequest {
    description: String,
    amount: Decimal,
    date: Date,
    category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateExpenseRequest {
    description: Option<String>,
    amount: Option<Decimal>,
    date: Option<Date>,
    category: Option<String>,
}

#[derive(Debug)]
pub struct GetExpenseRequest {
    id: Uuid,
}

impl GetExpenseRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteExpenseRequest {
    id: Uuid,
}

impl DeleteExpenseRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

pub struct ExpenseTransformer;

impl Intake<CreateExpenseRequest> for ExpenseTransformer {
    type To = CreateExpenseDto;
    fn emit(&self, input: CreateExpenseRequest) -> Self::To {
        CreateExpenseDto {
            description: input.description,
            amount: input.amount,
            date: input.date,
            category: input.category,
        }
    }
}

impl Intake<(Uuid, UpdateExpenseRequest)> for ExpenseTransformer {
    type To = UpdateExpenseDto;
    fn emit(&self, input: (Uuid, UpdateExpenseRequest)) -> Self::To {
        let (id, input) = input;
        UpdateExpenseDto {
            id,
            description: input.description,
            amount: input.amount,
            date: input.date,
            category: input.category,
        }
    }
}

impl Intake<GetExpenseRequest> for ExpenseTransformer {
    type To = GetExpenseDto;
    fn emit(&self, input: GetExpenseRequest) -> Self::To {
        GetExpenseDto { id: input.id }
    }
}

impl Intake<DeleteExpenseRequest> for ExpenseTransformer {
    type To = DeleteExpenseDto;
    fn emit(&self, input: DeleteExpenseRequest) -> Self::To {
        DeleteExpenseDto { id: input.id }
    }
}
