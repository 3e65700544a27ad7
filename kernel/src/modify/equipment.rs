use crate::database::Transaction;
use crate::entity::{Equipment, EquipmentId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait EquipmentModifier<Connection: Transaction>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Connection,
        equipment: &Equipment,
    ) -> error_stack::Result<(), KernelError>;

    async fn update(
        &self,
        con: &mut Connection,
        equipment: &Equipment,
    ) -> error_stack::Result<(), KernelError>;

    async fn delete(
        &self,
        con: &mut Connection,
        id: &EquipmentId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnEquipmentModifier<Connection: Transaction>: 'static + Sync + Send {
    type EquipmentModifier: EquipmentModifier<Connection>;
    fn equipment_modifier(&self) -> &Self::EquipmentModifier;
}
