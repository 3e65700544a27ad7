use crate::database::Transaction;
use crate::entity::{Equipment, EquipmentId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait EquipmentQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &EquipmentId,
    ) -> error_stack::Result<Option<Equipment>, KernelError>;

    /// All equipment ordered by name.
    async fn find_all(
        &self,
        con: &mut Connection,
    ) -> error_stack::Result<Vec<Equipment>, KernelError>;
}

pub trait DependOnEquipmentQuery<Connection: Transaction>: Sync + Send + 'static {
    type EquipmentQuery: EquipmentQuery<Connection>;
    fn equipment_query(&self) -> &Self::EquipmentQuery;
}
