use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::database::{
    DependOnDatabaseConnection, QueryDatabaseConnection, Transaction,
};
use kernel::interface::query::{
    DependOnEquipmentQuery, DependOnRentalQuery, EquipmentQuery, RentalQuery,
};
use kernel::interface::update::{DependOnRentalModifier, RentalModifier};
use kernel::prelude::entity::{
    CreatedAt, CustomerName, CustomerPhone, DeliveryAddress, DestructRental, EndDate,
    EquipmentId, EquipmentInstance, InstanceNumber, NeedsDelivery, Price, Rental, RentalComment,
    RentalId, StartDate, StoredStatus, UpdatedAt,
};
use kernel::KernelError;

use crate::transfer::{
    CreateRentalDto, DeleteRentalDto, EquipmentNames, GetCustomerRentalsDto, GetRentalDto,
    NewRentalItemDto, RentalDto, RentalScheduleDto, UpdateRentalDto,
};

fn items_from_dto(items: Vec<NewRentalItemDto>) -> Vec<EquipmentInstance> {
    items
        .into_iter()
        .map(|item| {
            EquipmentInstance::new(
                EquipmentId::new(item.equipment_id),
                InstanceNumber::new(item.instance_number),
            )
        })
        .collect()
}

#[async_trait::async_trait]
pub trait GetRentalService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnRentalQuery<Connection>
    + DependOnEquipmentQuery<Connection>
{
    async fn get_rental(
        &self,
        dto: GetRentalDto,
    ) -> error_stack::Result<Option<RentalDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = RentalId::new(dto.id);
        let Some(rental) = self.rental_query().find_by_id(&mut connection, &id).await? else {
            return Ok(None);
        };

        let equipment = self.equipment_query().find_all(&mut connection).await?;
        let names = EquipmentNames::index(&equipment);
        Ok(Some(RentalDto::resolve(
            rental,
            &names,
            OffsetDateTime::now_utc(),
        )))
    }

    async fn get_all_rentals(&self) -> error_stack::Result<Vec<RentalDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let equipment = self.equipment_query().find_all(&mut connection).await?;
        let rentals = self.rental_query().find_all(&mut connection).await?;

        let names = EquipmentNames::index(&equipment);
        let now = OffsetDateTime::now_utc();
        Ok(rentals
            .into_iter()
            .map(|rental| RentalDto::resolve(rental, &names, now))
            .collect())
    }

    /// Rentals for the occupancy chart, oldest first. An incomplete period
    /// filter is treated as absent.
    async fn get_rental_schedule(
        &self,
        dto: RentalScheduleDto,
    ) -> error_stack::Result<Vec<RentalDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let rentals = match (dto.start_date, dto.end_date) {
            (Some(from), Some(to)) => {
                self.rental_query()
                    .find_overlapping(&mut connection, from, to)
                    .await?
            }
            _ => {
                let mut rentals = self.rental_query().find_all(&mut connection).await?;
                rentals.reverse();
                rentals
            }
        };

        let equipment = self.equipment_query().find_all(&mut connection).await?;
        let names = EquipmentNames::index(&equipment);
        let now = OffsetDateTime::now_utc();
        Ok(rentals
            .into_iter()
            .map(|rental| RentalDto::resolve(rental, &names, now))
            .collect())
    }

    async fn get_customer_rentals(
        &self,
        dto: GetCustomerRentalsDto,
    ) -> error_stack::Result<Vec<RentalDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let phone = CustomerPhone::new(dto.phone);
        let rentals = self
            .rental_query()
            .find_by_customer_phone(&mut connection, &phone)
            .await?;

        let equipment = self.equipment_query().find_all(&mut connection).await?;
        let names = EquipmentNames::index(&equipment);
        let now = OffsetDateTime::now_utc();
        Ok(rentals
            .into_iter()
            .map(|rental| RentalDto::resolve(rental, &names, now))
            .collect())
    }
}

impl<Connection: Transaction + Send, T> GetRentalService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnRentalQuery<Connection>
        + DependOnEquipmentQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait ModifyRentalService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnRentalQuery<Connection>
    + DependOnEquipmentQuery<Connection>
    + DependOnRentalModifier<Connection>
{
    async fn create_rental(&self, dto: CreateRentalDto) -> error_stack::Result<Uuid, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let uuid = Uuid::new_v4();
        let now = OffsetDateTime::now_utc();
        let rental = Rental::new(
            RentalId::new(uuid),
            items_from_dto(dto.items),
            StartDate::new(dto.start_date),
            EndDate::new(dto.end_date),
            CustomerName::new(dto.customer_name),
            CustomerPhone::new(dto.customer_phone),
            NeedsDelivery::new(dto.needs_delivery),
            dto.delivery_address.map(DeliveryAddress::new),
            Price::new(dto.rental_price),
            dto.delivery_price.map(Price::new).unwrap_or_default(),
            dto.delivery_costs.map(Price::new).unwrap_or_default(),
            dto.source,
            dto.comment.map(RentalComment::new),
            StoredStatus::Pending,
            CreatedAt::new(now),
            UpdatedAt::new(now),
        );
        self.rental_modifier()
            .create(&mut connection, &rental)
            .await?;

        Ok(uuid)
    }

    async fn update_rental(
        &self,
        dto: UpdateRentalDto,
    ) -> error_stack::Result<Option<RentalDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = RentalId::new(dto.id);
        let Some(rental) = self.rental_query().find_by_id(&mut connection, &id).await? else {
            return Ok(None);
        };

        let DestructRental {
            id,
            items,
            start_date,
            end_date,
            customer_name,
            customer_phone,
            needs_delivery,
            delivery_address,
            rental_price,
            delivery_price,
            delivery_costs,
            source,
            comment,
            status,
            created_at,
            ..
        } = rental.into_destruct();
        let rental = Rental::new(
            id,
            dto.items.map(items_from_dto).unwrap_or(items),
            dto.start_date.map(StartDate::new).unwrap_or(start_date),
            dto.end_date.map(EndDate::new).unwrap_or(end_date),
            dto.customer_name
                .map(CustomerName::new)
                .unwrap_or(customer_name),
            dto.customer_phone
                .map(CustomerPhone::new)
                .unwrap_or(customer_phone),
            dto.needs_delivery
                .map(NeedsDelivery::new)
                .unwrap_or(needs_delivery),
            dto.delivery_address
                .map(DeliveryAddress::new)
                .or(delivery_address),
            dto.rental_price.map(Price::new).unwrap_or(rental_price),
            dto.delivery_price.map(Price::new).unwrap_or(delivery_price),
            dto.delivery_costs.map(Price::new).unwrap_or(delivery_costs),
            dto.source.unwrap_or(source),
            dto.comment.map(RentalComment::new).or(comment),
            // Completion is terminal: a requested transition never leaves
            // `Completed`.
            dto.status
                .map(|requested| status.transition(requested))
                .unwrap_or(status),
            created_at,
            UpdatedAt::new(OffsetDateTime::now_utc()),
        );
        self.rental_modifier()
            .update(&mut connection, &rental)
            .await?;

        let equipment = self.equipment_query().find_all(&mut connection).await?;
        let names = EquipmentNames::index(&equipment);
        Ok(Some(RentalDto::resolve(
            rental,
            &names,
            OffsetDateTime::now_utc(),
        )))
    }

    async fn delete_rental(
        &self,
        dto: DeleteRentalDto,
    ) -> error_stack::Result<Option<()>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = RentalId::new(dto.id);
        if self
            .rental_query()
            .find_by_id(&mut connection, &id)
            .await?
            .is_none()
        {
            return Ok(None);
        }
        self.rental_modifier().delete(&mut connection, &id).await?;

        Ok(Some(()))
    }
}

impl<Connection: Transaction + Send, T> ModifyRentalService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnRentalQuery<Connection>
        + DependOnEquipmentQuery<Connection>
        + DependOnRentalModifier<Connection>
{
}
