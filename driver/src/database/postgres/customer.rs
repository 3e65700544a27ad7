use sqlx::PgConnection;

use kernel::interface::query::CustomerQuery;
use kernel::prelude::entity::{Customer, CustomerName, CustomerPhone, RentalCount};
use kernel::KernelError;

use crate::database::PgTransaction;
use crate::error::ConvertError;

pub struct PostgresCustomerRepository;

#[async_trait::async_trait]
impl CustomerQuery<PgTransaction> for PostgresCustomerRepository {
    async fn find_all(
        &self,
        con: &mut PgTransaction,
    ) -> error_stack::Result<Vec<Customer>, KernelError> {
        PgCustomerInternal::find_all(con).await
    }
}

#[derive(sqlx::FromRow)]
struct CustomerRow {
    customer_name: String,
    customer_phone: String,
    rental_count: i64,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer::new(
            CustomerName::new(row.customer_name),
            CustomerPhone::new(row.customer_phone),
            RentalCount::new(row.rental_count),
        )
    }
}

pub(in crate::database) struct PgCustomerInternal;

impl PgCustomerInternal {
    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<Customer>, KernelError> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            // language=postgresql
            r#"
            SELECT customer_name, customer_phone, COUNT(*) AS rental_count
            FROM rentals
            GROUP BY customer_name, customer_phone
            ORDER BY rental_count DESC, customer_name
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Customer::from).collect())
    }
}

#[cfg(test)]
mod test {
    use time::macros::datetime;

    use kernel::interface::database::QueryDatabaseConnection;
    use kernel::interface::query::CustomerQuery;
    use kernel::interface::update::RentalModifier;
    use kernel::prelude::entity::{
        CreatedAt, CustomerName, CustomerPhone, EndDate, NeedsDelivery, Price, Rental, RentalId,
        RentalSource, StartDate, StoredStatus, UpdatedAt,
    };
    use kernel::KernelError;

    use crate::database::PostgresDatabase;
    use crate::database::postgres::customer::PostgresCustomerRepository;
    use crate::database::postgres::rental::PostgresRentalRepository;

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;

        let phone = format!("+7999{}", &uuid::Uuid::new_v4().simple().to_string()[..7]);
        let now = datetime!(2024-04-01 9:00 UTC);
        let mut ids = Vec::new();
        for offset in 0..2 {
            let id = RentalId::new(uuid::Uuid::new_v4());
            let rental = Rental::new(
                id.clone(),
                Vec::new(),
                StartDate::new(now + time::Duration::days(offset)),
                EndDate::new(now + time::Duration::days(offset + 1)),
                CustomerName::new("Борис".to_string()),
                CustomerPhone::new(phone.clone()),
                NeedsDelivery::new(false),
                None,
                Price::new(rust_decimal::Decimal::new(50000, 2)),
                Price::default(),
                Price::default(),
                RentalSource::Website,
                None,
                StoredStatus::Pending,
                CreatedAt::new(now),
                UpdatedAt::new(now),
            );
            PostgresRentalRepository.create(&mut con, &rental).await?;
            ids.push(id);
        }

        let customers = PostgresCustomerRepository.find_all(&mut con).await?;
        let customer = customers
            .iter()
            .find(|customer| customer.phone().as_ref() == &phone)
            .expect("customer projection should include created rentals");
        assert_eq!(*customer.rental_count().as_ref(), 2);

        for id in &ids {
            PostgresRentalRepository.delete(&mut con, id).await?;
        }

        Ok(())
    }
}
