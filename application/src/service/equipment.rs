use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::database::{
    DependOnDatabaseConnection, QueryDatabaseConnection, Transaction,
};
use kernel::interface::query::{DependOnEquipmentQuery, EquipmentQuery};
use kernel::interface::update::{DependOnEquipmentModifier, EquipmentModifier};
use kernel::prelude::entity::{
    CreatedAt, DestructEquipment, Equipment, EquipmentDescription, EquipmentId, EquipmentName,
    OwnedQuantity, Price, UpdatedAt,
};
use kernel::KernelError;

use crate::transfer::{
    CreateEquipmentDto, DeleteEquipmentDto, EquipmentDto, EquipmentInstanceDto, GetEquipmentDto,
    UpdateEquipmentDto,
};

#[async_trait::async_trait]
pub trait GetEquipmentService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnEquipmentQuery<Connection>
{
    async fn get_equipment(
        &self,
        dto: GetEquipmentDto,
    ) -> error_stack::Result<Option<EquipmentDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = EquipmentId::new(dto.id);
        let equipment = self
            .equipment_query()
            .find_by_id(&mut connection, &id)
            .await?;
        Ok(equipment.map(EquipmentDto::from))
    }

    async fn get_all_equipment(&self) -> error_stack::Result<Vec<EquipmentDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let equipment = self.equipment_query().find_all(&mut connection).await?;
        Ok(equipment.into_iter().map(EquipmentDto::from).collect())
    }

    /// Virtual per-unit expansion used by the rental form.
    async fn get_equipment_instances(
        &self,
    ) -> error_stack::Result<Vec<EquipmentInstanceDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let equipment = self.equipment_query().find_all(&mut connection).await?;
        Ok(equipment
            .iter()
            .flat_map(|equipment| {
                equipment
                    .instances()
                    .into_iter()
                    .map(|instance| {
                        let name =
                            instance.display_name(equipment.name(), equipment.quantity());
                        EquipmentInstanceDto::new(&instance, name)
                    })
                    .collect::<Vec<_>>()
            })
            .collect())
    }
}

impl<Connection: Transaction + Send, T> GetEquipmentService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnEquipmentQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait ModifyEquipmentService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnEquipmentQuery<Connection>
    + DependOnEquipmentModifier<Connection>
{
    async fn create_equipment(
        &self,
        dto: CreateEquipmentDto,
    ) -> error_stack::Result<Uuid, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let uuid = Uuid::new_v4();
        let now = OffsetDateTime::now_utc();
        let equipment = Equipment::new(
            EquipmentId::new(uuid),
            EquipmentName::new(dto.name),
            OwnedQuantity::new(dto.quantity),
            dto.description.map(EquipmentDescription::new),
            Price::new(dto.base_price),
            CreatedAt::new(now),
            UpdatedAt::new(now),
        );
        self.equipment_modifier()
            .create(&mut connection, &equipment)
            .await?;

        Ok(uuid)
    }

    async fn update_equipment(
        &self,
        dto: UpdateEquipmentDto,
    ) -> error_stack::Result<Option<EquipmentDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = EquipmentId::new(dto.id);
        let Some(equipment) = self
            .equipment_query()
            .find_by_id(&mut connection, &id)
            .await?
        else {
            return Ok(None);
        };

        let DestructEquipment {
            id,
            name,
            quantity,
            description,
            base_price,
            created_at,
            ..
        } = equipment.into_destruct();
        let equipment = Equipment::new(
            id,
            dto.name.map(EquipmentName::new).unwrap_or(name),
            dto.quantity.map(OwnedQuantity::new).unwrap_or(quantity),
            dto.description
                .map(EquipmentDescription::new)
                .or(description),
            dto.base_price.map(Price::new).unwrap_or(base_price),
            created_at,
            UpdatedAt::new(OffsetDateTime::now_utc()),
        );
        self.equipment_modifier()
            .update(&mut connection, &equipment)
            .await?;

        Ok(Some(EquipmentDto::from(equipment)))
    }

    async fn delete_equipment(
        &self,
        dto: DeleteEquipmentDto,
    ) -> error_stack::Result<Option<()>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = EquipmentId::new(dto.id);
        if self
            .equipment_query()
            .find_by_id(&mut connection, &id)
            .await?
            .is_none()
        {
            return Ok(None);
        }
        self.equipment_modifier()
            .delete(&mut connection, &id)
            .await?;

        Ok(Some(()))
    }
}

impl<Connection: Transaction + Send, T> ModifyEquipmentService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnEquipmentQuery<Connection>
        + DependOnEquipmentModifier<Connection>
{
}
