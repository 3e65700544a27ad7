mod comment;
mod dates;
mod delivery;
mod id;
mod source;
mod status;

pub use self::{comment::*, dates::*, delivery::*, id::*, source::*, status::*};
use crate::entity::common::{CreatedAt, Price, UpdatedAt};
use crate::entity::customer::{CustomerName, CustomerPhone};
use crate::entity::equipment::EquipmentInstance;
use destructure::{Destructure, Mutation};
use time::OffsetDateTime;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Rental {
    id: RentalId,
    items: Vec<EquipmentInstance>,
    start_date: StartDate,
    end_date: EndDate,
    customer_name: CustomerName,
    customer_phone: CustomerPhone,
    needs_delivery: NeedsDelivery,
    delivery_address: Option<DeliveryAddress>,
    rental_price: Price,
    delivery_price: Price,
    delivery_costs: Price,
    source: RentalSource,
    comment: Option<RentalComment>,
    status: StoredStatus,
    created_at: CreatedAt<Rental>,
    updated_at: UpdatedAt<Rental>,
}

impl Rental {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: RentalId,
        items: Vec<EquipmentInstance>,
        start_date: StartDate,
        end_date: EndDate,
        customer_name: CustomerName,
        customer_phone: CustomerPhone,
        needs_delivery: NeedsDelivery,
        delivery_address: Option<DeliveryAddress>,
        rental_price: Price,
        delivery_price: Price,
        delivery_costs: Price,
        source: RentalSource,
        comment: Option<RentalComment>,
        status: StoredStatus,
        created_at: CreatedAt<Rental>,
        updated_at: UpdatedAt<Rental>,
    ) -> Self {
        Self {
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
            updated_at,
        }
    }

    /// Resolves the display status against the given instant. The stored
    /// status is the only durable state; everything else is recomputed on
    /// every read.
    pub fn status_at(&self, now: OffsetDateTime) -> RentalStatus {
        RentalStatus::resolve(&self.status, &self.start_date, &self.end_date, now)
    }
}
