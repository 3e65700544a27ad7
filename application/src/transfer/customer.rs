use kernel::prelude::entity::Customer;

#[derive(Debug, Clone)]
pub struct CustomerDto {
    pub customer_name: String,
    pub customer_phone: String,
    pub rental_count: i64,
}

impl From<Customer> for CustomerDto {
    fn from(value: Customer) -> Self {
        Self {
            customer_name: value.name().as_ref().clone(),
            customer_phone: value.phone().as_ref().clone(),
            rental_count: *value.rental_count().as_ref(),
        }
    }
}
