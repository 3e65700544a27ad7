use std::collections::HashMap;
use std::str::FromStr;

use error_stack::Report;
use rust_decimal::Decimal;
use sqlx::{Acquire, PgConnection};
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::query::RentalQuery;
use kernel::interface::update::RentalModifier;
use kernel::prelude::entity::{
    CreatedAt, CustomerName, CustomerPhone, DeliveryAddress, EndDate, EquipmentId,
    EquipmentInstance, InstanceNumber, NeedsDelivery, Price, Rental, RentalComment, RentalId,
    RentalSource, StartDate, StoredStatus, UpdatedAt,
};
use kernel::KernelError;

use crate::database::PgTransaction;
use crate::error::ConvertError;

pub struct PostgresRentalRepository;

#[async_trait::async_trait]
impl RentalQuery<PgTransaction> for PostgresRentalRepository {
    async fn find_by_id(
        &self,
        con: &mut PgTransaction,
        id: &RentalId,
    ) -> error_stack::Result<Option<Rental>, KernelError> {
        PgRentalInternal::find_by_id(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut PgTransaction,
    ) -> error_stack::Result<Vec<Rental>, KernelError> {
        PgRentalInternal::find_all(con).await
    }

    async fn find_by_customer_phone(
        &self,
        con: &mut PgTransaction,
        phone: &CustomerPhone,
    ) -> error_stack::Result<Vec<Rental>, KernelError> {
        PgRentalInternal::find_by_customer_phone(con, phone).await
    }

    async fn find_overlapping(
        &self,
        con: &mut PgTransaction,
        from: OffsetDateTime,
        to: OffsetDateTime,
    ) -> error_stack::Result<Vec<Rental>, KernelError> {
        PgRentalInternal::find_overlapping(con, from, to).await
    }
}

#[async_trait::async_trait]
impl RentalModifier<PgTransaction> for PostgresRentalRepository {
    async fn create(
        &self,
        con: &mut PgTransaction,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError> {
        PgRentalInternal::create(con, rental).await
    }

    async fn update(
        &self,
        con: &mut PgTransaction,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError> {
        PgRentalInternal::update(con, rental).await
    }

    async fn delete(
        &self,
        con: &mut PgTransaction,
        id: &RentalId,
    ) -> error_stack::Result<(), KernelError> {
        PgRentalInternal::delete(con, id).await
    }
}

#[derive(sqlx::FromRow)]
struct RentalRow {
    id: Uuid,
    start_date: OffsetDateTime,
    end_date: OffsetDateTime,
    customer_name: String,
    customer_phone: String,
    needs_delivery: bool,
    delivery_address: Option<String>,
    rental_price: Decimal,
    delivery_price: Decimal,
    delivery_costs: Decimal,
    source: String,
    comment: Option<String>,
    status: String,
    created_at: OffsetDateTime,
    updated_at: OffsetDateTime,
}

impl RentalRow {
    fn into_rental(
        self,
        items: Vec<EquipmentInstance>,
    ) -> error_stack::Result<Rental, KernelError> {
        let source = RentalSource::from_str(&self.source)
            .map_err(|message| Report::new(KernelError::Internal).attach_printable(message))?;
        let status = StoredStatus::from_str(&self.status)
            .map_err(|message| Report::new(KernelError::Internal).attach_printable(message))?;
        Ok(Rental::new(
            RentalId::new(self.id),
            items,
            StartDate::new(self.start_date),
            EndDate::new(self.end_date),
            CustomerName::new(self.customer_name),
            CustomerPhone::new(self.customer_phone),
            NeedsDelivery::new(self.needs_delivery),
            self.delivery_address.map(DeliveryAddress::new),
            Price::new(self.rental_price),
            Price::new(self.delivery_price),
            Price::new(self.delivery_costs),
            source,
            self.comment.map(RentalComment::new),
            status,
            CreatedAt::new(self.created_at),
            UpdatedAt::new(self.updated_at),
        ))
    }
}

#[derive(sqlx::FromRow)]
struct RentalItemRow {
    rental_id: Uuid,
    equipment_id: Uuid,
    instance_number: i32,
}

static SELECT_RENTAL: &str = r#"
    SELECT id, start_date, end_date, customer_name, customer_phone,
           needs_delivery, delivery_address, rental_price, delivery_price,
           delivery_costs, source, comment, status, created_at, updated_at
    FROM rentals
"#;

pub(in crate::database) struct PgRentalInternal;

impl PgRentalInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &RentalId,
    ) -> error_stack::Result<Option<Rental>, KernelError> {
        // language=postgresql
        let row = sqlx::query_as::<_, RentalRow>(&format!("{SELECT_RENTAL} WHERE id = $1"))
            .bind(id.as_ref())
            .fetch_optional(&mut *con)
            .await
            .convert_error()?;
        match row {
            None => Ok(None),
            Some(row) => {
                let mut items = Self::load_items(con, &[row.id]).await?;
                let items = items.remove(&row.id).unwrap_or_default();
                Ok(Some(row.into_rental(items)?))
            }
        }
    }

    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<Rental>, KernelError> {
        let rows = sqlx::query_as::<_, RentalRow>(&format!(
            "{SELECT_RENTAL} ORDER BY start_date DESC, created_at DESC"
        ))
        .fetch_all(&mut *con)
        .await
        .convert_error()?;
        Self::collect(con, rows).await
    }

    async fn find_by_customer_phone(
        con: &mut PgConnection,
        phone: &CustomerPhone,
    ) -> error_stack::Result<Vec<Rental>, KernelError> {
        let rows = sqlx::query_as::<_, RentalRow>(&format!(
            "{SELECT_RENTAL} WHERE customer_phone = $1 ORDER BY start_date DESC"
        ))
        .bind(phone.as_ref())
        .fetch_all(&mut *con)
        .await
        .convert_error()?;
        Self::collect(con, rows).await
    }

    async fn find_overlapping(
        con: &mut PgConnection,
        from: OffsetDateTime,
        to: OffsetDateTime,
    ) -> error_stack::Result<Vec<Rental>, KernelError> {
        let rows = sqlx::query_as::<_, RentalRow>(&format!(
            "{SELECT_RENTAL} WHERE start_date <= $2 AND end_date >= $1 ORDER BY start_date"
        ))
        .bind(from)
        .bind(to)
        .fetch_all(&mut *con)
        .await
        .convert_error()?;
        Self::collect(con, rows).await
    }

    async fn collect(
        con: &mut PgConnection,
        rows: Vec<RentalRow>,
    ) -> error_stack::Result<Vec<Rental>, KernelError> {
        let ids = rows.iter().map(|row| row.id).collect::<Vec<_>>();
        let mut items = Self::load_items(con, &ids).await?;
        rows.into_iter()
            .map(|row| {
                let items = items.remove(&row.id).unwrap_or_default();
                row.into_rental(items)
            })
            .collect()
    }

    async fn load_items(
        con: &mut PgConnection,
        rental_ids: &[Uuid],
    ) -> error_stack::Result<HashMap<Uuid, Vec<EquipmentInstance>>, KernelError> {
        let rows = sqlx::query_as::<_, RentalItemRow>(
            // language=postgresql
            r#"
            SELECT rental_id, equipment_id, instance_number
            FROM rental_items
            WHERE rental_id = ANY($1)
            ORDER BY equipment_id, instance_number
            "#,
        )
        .bind(rental_ids)
        .fetch_all(con)
        .await
        .convert_error()?;
        let mut grouped: HashMap<Uuid, Vec<EquipmentInstance>> = HashMap::new();
        for row in rows {
            grouped.entry(row.rental_id).or_default().push(
                EquipmentInstance::new(
                    EquipmentId::new(row.equipment_id),
                    InstanceNumber::new(row.instance_number),
                ),
            );
        }
        Ok(grouped)
    }

    async fn create(
        con: &mut PgConnection,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError> {
        let mut transaction = con.begin().await.convert_error()?;
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO rentals (id, start_date, end_date, customer_name, customer_phone,
                                 needs_delivery, delivery_address, rental_price, delivery_price,
                                 delivery_costs, source, comment, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            "#,
        )
        .bind(rental.id().as_ref())
        .bind(rental.start_date().as_ref())
        .bind(rental.end_date().as_ref())
        .bind(rental.customer_name().as_ref())
        .bind(rental.customer_phone().as_ref())
        .bind(rental.needs_delivery().as_ref())
        .bind(rental.delivery_address().as_ref().map(|a| a.as_ref()))
        .bind(rental.rental_price().amount())
        .bind(rental.delivery_price().amount())
        .bind(rental.delivery_costs().amount())
        .bind(rental.source().as_str())
        .bind(rental.comment().as_ref().map(|c| c.as_ref()))
        .bind(rental.status().as_str())
        .bind(rental.created_at().as_ref())
        .bind(rental.updated_at().as_ref())
        .execute(&mut *transaction)
        .await
        .convert_error()?;

        Self::insert_items(&mut transaction, rental).await?;
        transaction.commit().await.convert_error()?;
        Ok(())
    }

    async fn update(
        con: &mut PgConnection,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError> {
        let mut transaction = con.begin().await.convert_error()?;
        // language=postgresql
        sqlx::query(
            r#"
            UPDATE rentals
            SET start_date = $2, end_date = $3, customer_name = $4, customer_phone = $5,
                needs_delivery = $6, delivery_address = $7, rental_price = $8,
                delivery_price = $9, delivery_costs = $10, source = $11, comment = $12,
                status = $13, updated_at = $14
            WHERE id = $1
            "#,
        )
        .bind(rental.id().as_ref())
        .bind(rental.start_date().as_ref())
        .bind(rental.end_date().as_ref())
        .bind(rental.customer_name().as_ref())
        .bind(rental.customer_phone().as_ref())
        .bind(rental.needs_delivery().as_ref())
        .bind(rental.delivery_address().as_ref().map(|a| a.as_ref()))
        .bind(rental.rental_price().amount())
        .bind(rental.delivery_price().amount())
        .bind(rental.delivery_costs().amount())
        .bind(rental.source().as_str())
        .bind(rental.comment().as_ref().map(|c| c.as_ref()))
        .bind(rental.status().as_str())
        .bind(rental.updated_at().as_ref())
        .execute(&mut *transaction)
        .await
        .convert_error()?;

        // language=postgresql
        sqlx::query(
            r#"
            DELETE FROM rental_items
            WHERE rental_id = $1
            "#,
        )
        .bind(rental.id().as_ref())
        .execute(&mut *transaction)
        .await
        .convert_error()?;

        Self::insert_items(&mut transaction, rental).await?;
        transaction.commit().await.convert_error()?;
        Ok(())
    }

    async fn insert_items(
        con: &mut PgConnection,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError> {
        for item in rental.items() {
            // language=postgresql
            sqlx::query(
                r#"
                INSERT INTO rental_items (rental_id, equipment_id, instance_number)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(rental.id().as_ref())
            .bind(item.equipment_id().as_ref())
            .bind(item.instance_number().as_ref())
            .execute(&mut *con)
            .await
            .convert_error()?;
        }
        Ok(())
    }

    async fn delete(con: &mut PgConnection, id: &RentalId) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            DELETE FROM rentals
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

#[cfg(test)]
mod test {
    use time::macros::datetime;

    use kernel::interface::database::QueryDatabaseConnection;
    use kernel::interface::query::RentalQuery;
    use kernel::interface::update::{EquipmentModifier, RentalModifier};
    use kernel::prelude::entity::{
        CreatedAt, CustomerName, CustomerPhone, EndDate, Equipment, EquipmentId, EquipmentName,
        NeedsDelivery, OwnedQuantity, Price, Rental, RentalId, RentalSource, StartDate,
        StoredStatus, UpdatedAt,
    };
    use kernel::KernelError;

    use crate::database::PostgresDatabase;
    use crate::database::postgres::equipment::PostgresEquipmentRepository;
    use crate::database::postgres::rental::PostgresRentalRepository;

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;

        let now = datetime!(2024-03-01 9:00 UTC);
        let equipment = Equipment::new(
            EquipmentId::new(uuid::Uuid::new_v4()),
            EquipmentName::new("GoPro 13".to_string()),
            OwnedQuantity::new(2),
            None,
            Price::new(rust_decimal::Decimal::new(100000, 2)),
            CreatedAt::new(now),
            UpdatedAt::new(now),
        );
        PostgresEquipmentRepository
            .create(&mut con, &equipment)
            .await?;

        let id = RentalId::new(uuid::Uuid::new_v4());
        let rental = Rental::new(
            id.clone(),
            equipment.instances(),
            StartDate::new(datetime!(2024-03-02 10:00 UTC)),
            EndDate::new(datetime!(2024-03-04 10:00 UTC)),
            CustomerName::new("Анна".to_string()),
            CustomerPhone::new("+79990001122".to_string()),
            NeedsDelivery::new(false),
            None,
            Price::new(rust_decimal::Decimal::new(300000, 2)),
            Price::default(),
            Price::default(),
            RentalSource::Avito,
            None,
            StoredStatus::Pending,
            CreatedAt::new(now),
            UpdatedAt::new(now),
        );
        PostgresRentalRepository.create(&mut con, &rental).await?;

        let found = PostgresRentalRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(rental.clone()));

        let mut destruct = rental.into_destruct();
        destruct.status = StoredStatus::Completed;
        destruct.items.truncate(1);
        let rental = Rental::new(
            destruct.id,
            destruct.items,
            destruct.start_date,
            destruct.end_date,
            destruct.customer_name,
            destruct.customer_phone,
            destruct.needs_delivery,
            destruct.delivery_address,
            destruct.rental_price,
            destruct.delivery_price,
            destruct.delivery_costs,
            destruct.source,
            destruct.comment,
            destruct.status,
            destruct.created_at,
            destruct.updated_at,
        );
        PostgresRentalRepository.update(&mut con, &rental).await?;

        let found = PostgresRentalRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(rental.clone()));

        let by_phone = PostgresRentalRepository
            .find_by_customer_phone(&mut con, rental.customer_phone())
            .await?;
        assert!(by_phone.contains(&rental));

        // deleting the unit leaves rental history untouched
        PostgresEquipmentRepository
            .delete(&mut con, equipment.id())
            .await?;
        let found = PostgresRentalRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(rental.clone()));
        assert_eq!(found.unwrap().items(), rental.items());

        PostgresRentalRepository.delete(&mut con, &id).await?;
        let found = PostgresRentalRepository.find_by_id(&mut con, &id).await?;
        assert!(found.is_none());

        Ok(())
    }
}
