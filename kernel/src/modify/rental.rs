use crate::database::Transaction;
use crate::entity::{Rental, RentalId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait RentalModifier<Connection: Transaction>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Connection,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError>;

    /// Replaces the stored row and its equipment items.
    async fn update(
        &self,
        con: &mut Connection,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError>;

    async fn delete(
        &self,
        con: &mut Connection,
        id: &RentalId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnRentalModifier<Connection: Transaction>: 'static + Sync + Send {
    type RentalModifier: RentalModifier<Connection>;
    fn rental_modifier(&self) -> &Self::RentalModifier;
}
