use rust_decimal::Decimal;
use sqlx::PgConnection;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::query::EquipmentQuery;
use kernel::interface::update::EquipmentModifier;
use kernel::prelude::entity::{
    CreatedAt, Equipment, EquipmentDescription, EquipmentId, EquipmentName, OwnedQuantity, Price,
    UpdatedAt,
};
use kernel::KernelError;

use crate::database::PgTransaction;
use crate::error::ConvertError;

pub struct PostgresEquipmentRepository;

#[async_trait::async_trait]
impl EquipmentQuery<PgTransaction> for PostgresEquipmentRepository {
    async fn find_by_id(
        &self,
        con: &mut PgTransaction,
        id: &EquipmentId,
    ) -> error_stack::Result<Option<Equipment>, KernelError> {
        PgEquipmentInternal::find_by_id(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut PgTransaction,
    ) -> error_stack::Result<Vec<Equipment>, KernelError> {
        PgEquipmentInternal::find_all(con).await
    }
}

#[async_trait::async_trait]
impl EquipmentModifier<PgTransaction> for PostgresEquipmentRepository {
    async fn create(
        &self,
        con: &mut PgTransaction,
        equipment: &Equipment,
    ) -> error_stack::Result<(), KernelError> {
        PgEquipmentInternal::create(con, equipment).await
    }

    async fn update(
        &self,
        con: &mut PgTransaction,
        equipment: &Equipment,
    ) -> error_stack::Result<(), KernelError> {
        PgEquipmentInternal::update(con, equipment).await
    }

    async fn delete(
        &self,
        con: &mut PgTransaction,
        id: &EquipmentId,
    ) -> error_stack::Result<(), KernelError> {
        PgEquipmentInternal::delete(con, id).await
    }
}

#[derive(sqlx::FromRow)]
struct EquipmentRow {
    id: Uuid,
    name: String,
    quantity: i32,
    description: Option<String>,
    base_price: Decimal,
    created_at: OffsetDateTime,
    updated_at: OffsetDateTime,
}

impl From<EquipmentRow> for Equipment {
    fn from(row: EquipmentRow) -> Self {
        Equipment::new(
            EquipmentId::new(row.id),
            EquipmentName::new(row.name),
            OwnedQuantity::new(row.quantity),
            row.description.map(EquipmentDescription::new),
            Price::new(row.base_price),
            CreatedAt::new(row.created_at),
            UpdatedAt::new(row.updated_at),
        )
    }
}

pub(in crate::database) struct PgEquipmentInternal;

impl PgEquipmentInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &EquipmentId,
    ) -> error_stack::Result<Option<Equipment>, KernelError> {
        let row = sqlx::query_as::<_, EquipmentRow>(
            // language=postgresql
            r#"
            SELECT id, name, quantity, description, base_price, created_at, updated_at
            FROM equipment
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Equipment::from))
    }

    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<Equipment>, KernelError> {
        let rows = sqlx::query_as::<_, EquipmentRow>(
            // language=postgresql
            r#"
            SELECT id, name, quantity, description, base_price, created_at, updated_at
            FROM equipment
            ORDER BY name
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Equipment::from).collect())
    }

    async fn create(
        con: &mut PgConnection,
        equipment: &Equipment,
    ) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO equipment (id, name, quantity, description, base_price, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(equipment.id().as_ref())
        .bind(equipment.name().as_ref())
        .bind(equipment.quantity().as_ref())
        .bind(equipment.description().as_ref().map(|d| d.as_ref()))
        .bind(equipment.base_price().amount())
        .bind(equipment.created_at().as_ref())
        .bind(equipment.updated_at().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update(
        con: &mut PgConnection,
        equipment: &Equipment,
    ) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            UPDATE equipment
            SET name = $2, quantity = $3, description = $4, base_price = $5, updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(equipment.id().as_ref())
        .bind(equipment.name().as_ref())
        .bind(equipment.quantity().as_ref())
        .bind(equipment.description().as_ref().map(|d| d.as_ref()))
        .bind(equipment.base_price().amount())
        .bind(equipment.updated_at().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn delete(
        con: &mut PgConnection,
        id: &EquipmentId,
    ) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            DELETE FROM equipment
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
