use time::OffsetDateTime;

use crate::database::Transaction;
use crate::entity::{CustomerPhone, Rental, RentalId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait RentalQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &RentalId,
    ) -> error_stack::Result<Option<Rental>, KernelError>;

    /// All rentals ordered by start date descending.
    async fn find_all(
        &self,
        con: &mut Connection,
    ) -> error_stack::Result<Vec<Rental>, KernelError>;

    /// Rentals of one customer, newest first.
    async fn find_by_customer_phone(
        &self,
        con: &mut Connection,
        phone: &CustomerPhone,
    ) -> error_stack::Result<Vec<Rental>, KernelError>;

    /// Rentals overlapping the given period, ordered by start date
    /// ascending.
    async fn find_overlapping(
        &self,
        con: &mut Connection,
        from: OffsetDateTime,
        to: OffsetDateTime,
    ) -> error_stack::Result<Vec<Rental>, KernelError>;
}

pub trait DependOnRentalQuery<Connection: Transaction>: Sync + Send + 'static {
    type RentalQuery: RentalQuery<Connection>;
    fn rental_query(&self) -> &Self::RentalQuery;
}
