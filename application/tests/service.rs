use std::sync::{Arc, Mutex};

use rust_decimal::Decimal;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use application::service::{
    GetCustomerService, GetEquipmentService, GetRentalService, ModifyRentalService, ReportService,
};
use application::transfer::{
    CreateRentalDto, DeleteRentalDto, GetFinancialSummaryDto, RentalScheduleDto, UpdateRentalDto,
};
use kernel::interface::database::{QueryDatabaseConnection, Transaction};
use kernel::interface::query::{
    CustomerQuery, DependOnCustomerQuery, DependOnEquipmentQuery, DependOnExpenseQuery,
    DependOnRentalQuery, EquipmentQuery, ExpenseQuery, RentalQuery,
};
use kernel::interface::update::{DependOnRentalModifier, RentalModifier};
use kernel::prelude::entity::{
    CreatedAt, Customer, CustomerName, CustomerPhone, EndDate, Equipment, EquipmentId,
    EquipmentInstance, EquipmentName, Expense, ExpenseId, NeedsDelivery, OwnedQuantity, Price,
    Rental, RentalCount, RentalId, RentalSource, RentalStatus, StartDate, StoredStatus, UpdatedAt,
};
use kernel::KernelError;

pub struct StubConnection;

impl Transaction for StubConnection {}

#[derive(Clone, Default)]
struct Store {
    equipment: Arc<Mutex<Vec<Equipment>>>,
    rentals: Arc<Mutex<Vec<Rental>>>,
    expenses: Arc<Mutex<Vec<Expense>>>,
}

struct StubEquipmentRepository(Store);
struct StubRentalRepository(Store);
struct StubExpenseRepository(Store);
struct StubCustomerRepository(Store);

#[async_trait::async_trait]
impl EquipmentQuery<StubConnection> for StubEquipmentRepository {
    async fn find_by_id(
        &self,
        _con: &mut StubConnection,
        id: &EquipmentId,
    ) -> error_stack::Result<Option<Equipment>, KernelError> {
        let equipment = self.0.equipment.lock().unwrap();
        Ok(equipment.iter().find(|e| e.id() == id).cloned())
    }

    async fn find_all(
        &self,
        _con: &mut StubConnection,
    ) -> error_stack::Result<Vec<Equipment>, KernelError> {
        Ok(self.0.equipment.lock().unwrap().clone())
    }
}

#[async_trait::async_trait]
impl RentalQuery<StubConnection> for StubRentalRepository {
    async fn find_by_id(
        &self,
        _con: &mut StubConnection,
        id: &RentalId,
    ) -> error_stack::Result<Option<Rental>, KernelError> {
        let rentals = self.0.rentals.lock().unwrap();
        Ok(rentals.iter().find(|r| r.id() == id).cloned())
    }

    async fn find_all(
        &self,
        _con: &mut StubConnection,
    ) -> error_stack::Result<Vec<Rental>, KernelError> {
        let mut rentals = self.0.rentals.lock().unwrap().clone();
        rentals.sort_by(|a, b| b.start_date().cmp(a.start_date()));
        Ok(rentals)
    }

    async fn find_by_customer_phone(
        &self,
        _con: &mut StubConnection,
        phone: &CustomerPhone,
    ) -> error_stack::Result<Vec<Rental>, KernelError> {
        let rentals = self.0.rentals.lock().unwrap();
        let mut found = rentals
            .iter()
            .filter(|r| r.customer_phone() == phone)
            .cloned()
            .collect::<Vec<_>>();
        found.sort_by(|a, b| b.start_date().cmp(a.start_date()));
        Ok(found)
    }

    async fn find_overlapping(
        &self,
        _con: &mut StubConnection,
        from: OffsetDateTime,
        to: OffsetDateTime,
    ) -> error_stack::Result<Vec<Rental>, KernelError> {
        let rentals = self.0.rentals.lock().unwrap();
        let mut found = rentals
            .iter()
            .filter(|r| *r.start_date().as_ref() <= to && *r.end_date().as_ref() >= from)
            .cloned()
            .collect::<Vec<_>>();
        found.sort_by(|a, b| a.start_date().cmp(b.start_date()));
        Ok(found)
    }
}

#[async_trait::async_trait]
impl RentalModifier<StubConnection> for StubRentalRepository {
    async fn create(
        &self,
        _con: &mut StubConnection,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError> {
        self.0.rentals.lock().unwrap().push(rental.clone());
        Ok(())
    }

    async fn update(
        &self,
        _con: &mut StubConnection,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError> {
        let mut rentals = self.0.rentals.lock().unwrap();
        if let Some(stored) = rentals.iter_mut().find(|r| r.id() == rental.id()) {
            *stored = rental.clone();
        }
        Ok(())
    }

    async fn delete(
        &self,
        _con: &mut StubConnection,
        id: &RentalId,
    ) -> error_stack::Result<(), KernelError> {
        self.0.rentals.lock().unwrap().retain(|r| r.id() != id);
        Ok(())
    }
}

#[async_trait::async_trait]
impl ExpenseQuery<StubConnection> for StubExpenseRepository {
    async fn find_by_id(
        &self,
        _con: &mut StubConnection,
        id: &ExpenseId,
    ) -> error_stack::Result<Option<Expense>, KernelError> {
        let expenses = self.0.expenses.lock().unwrap();
        Ok(expenses.iter().find(|e| e.id() == id).cloned())
    }

    async fn find_all(
        &self,
        _con: &mut StubConnection,
    ) -> error_stack::Result<Vec<Expense>, KernelError> {
        Ok(self.0.expenses.lock().unwrap().clone())
    }
}

#[async_trait::async_trait]
impl CustomerQuery<StubConnection> for StubCustomerRepository {
    async fn find_all(
        &self,
        _con: &mut StubConnection,
    ) -> error_stack::Result<Vec<Customer>, KernelError> {
        let rentals = self.0.rentals.lock().unwrap();
        let mut counts: Vec<(CustomerName, CustomerPhone, i64)> = Vec::new();
        for rental in rentals.iter() {
            match counts
                .iter_mut()
                .find(|(name, phone, _)| name == rental.customer_name() && phone == rental.customer_phone())
            {
                Some((_, _, count)) => *count += 1,
                None => counts.push((
                    rental.customer_name().clone(),
                    rental.customer_phone().clone(),
                    1,
                )),
            }
        }
        counts.sort_by(|a, b| b.2.cmp(&a.2));
        Ok(counts
            .into_iter()
            .map(|(name, phone, count)| Customer::new(name, phone, RentalCount::new(count)))
            .collect())
    }
}

struct StubDatabase {
    equipment: StubEquipmentRepository,
    rentals: StubRentalRepository,
    expenses: StubExpenseRepository,
    customers: StubCustomerRepository,
}

impl StubDatabase {
    fn new(store: Store) -> Self {
        Self {
            equipment: StubEquipmentRepository(store.clone()),
            rentals: StubRentalRepository(store.clone()),
            expenses: StubExpenseRepository(store.clone()),
            customers: StubCustomerRepository(store),
        }
    }
}

#[async_trait::async_trait]
impl QueryDatabaseConnection<StubConnection> for StubDatabase {
    async fn transact(&self) -> error_stack::Result<StubConnection, KernelError> {
        Ok(StubConnection)
    }
}

impl DependOnEquipmentQuery<StubConnection> for StubDatabase {
    type EquipmentQuery = StubEquipmentRepository;
    fn equipment_query(&self) -> &Self::EquipmentQuery {
        &self.equipment
    }
}

impl DependOnRentalQuery<StubConnection> for StubDatabase {
    type RentalQuery = StubRentalRepository;
    fn rental_query(&self) -> &Self::RentalQuery {
        &self.rentals
    }
}

impl DependOnRentalModifier<StubConnection> for StubDatabase {
    type RentalModifier = StubRentalRepository;
    fn rental_modifier(&self) -> &Self::RentalModifier {
        &self.rentals
    }
}

impl DependOnExpenseQuery<StubConnection> for StubDatabase {
    type ExpenseQuery = StubExpenseRepository;
    fn expense_query(&self) -> &Self::ExpenseQuery {
        &self.expenses
    }
}

impl DependOnCustomerQuery<StubConnection> for StubDatabase {
    type CustomerQuery = StubCustomerRepository;
    fn customer_query(&self) -> &Self::CustomerQuery {
        &self.customers
    }
}

fn equipment(name: &str, quantity: i32) -> Equipment {
    let now = OffsetDateTime::now_utc();
    Equipment::new(
        EquipmentId::new(Uuid::new_v4()),
        EquipmentName::new(name.to_string()),
        OwnedQuantity::new(quantity),
        None,
        Price::new(Decimal::new(100000, 2)),
        CreatedAt::new(now),
        UpdatedAt::new(now),
    )
}

#[allow(clippy::too_many_arguments)]
fn rental(
    items: Vec<EquipmentInstance>,
    start: OffsetDateTime,
    end: OffsetDateTime,
    status: StoredStatus,
    rental_price: i64,
    delivery_price: i64,
    delivery_costs: i64,
    phone: &str,
) -> Rental {
    let now = OffsetDateTime::now_utc();
    Rental::new(
        RentalId::new(Uuid::new_v4()),
        items,
        StartDate::new(start),
        EndDate::new(end),
        CustomerName::new("Иван".to_string()),
        CustomerPhone::new(phone.to_string()),
        NeedsDelivery::new(false),
        None,
        Price::new(rental_price),
        Price::new(delivery_price),
        Price::new(delivery_costs),
        RentalSource::Avito,
        None,
        status,
        CreatedAt::new(now),
        UpdatedAt::new(now),
    )
}

#[tokio::test]
async fn rental_listing_resolves_status_against_now() {
    let store = Store::default();
    let now = OffsetDateTime::now_utc();
    {
        let mut rentals = store.rentals.lock().unwrap();
        rentals.push(rental(
            Vec::new(),
            now - Duration::days(3),
            now - Duration::days(1),
            StoredStatus::Pending,
            1000,
            0,
            0,
            "+70000000001",
        ));
        rentals.push(rental(
            Vec::new(),
            now - Duration::hours(1),
            now + Duration::hours(1),
            StoredStatus::Pending,
            1000,
            0,
            0,
            "+70000000002",
        ));
        rentals.push(rental(
            Vec::new(),
            now + Duration::days(1),
            now + Duration::days(2),
            StoredStatus::Pending,
            1000,
            0,
            0,
            "+70000000003",
        ));
    }
    let db = StubDatabase::new(store);

    let rentals = db.get_all_rentals().await.unwrap();
    assert_eq!(rentals.len(), 3);
    let status_of = |phone: &str| {
        rentals
            .iter()
            .find(|r| r.customer_phone == phone)
            .unwrap()
            .status
    };
    assert_eq!(status_of("+70000000001"), RentalStatus::Overdue);
    assert_eq!(status_of("+70000000002"), RentalStatus::Active);
    assert_eq!(status_of("+70000000003"), RentalStatus::Pending);
}

#[tokio::test]
async fn completed_rental_never_reopens() {
    let store = Store::default();
    let now = OffsetDateTime::now_utc();
    let existing = rental(
        Vec::new(),
        now - Duration::days(2),
        now - Duration::days(1),
        StoredStatus::Completed,
        1000,
        0,
        0,
        "+70000000001",
    );
    let id = *existing.id().as_ref();
    store.rentals.lock().unwrap().push(existing);
    let db = StubDatabase::new(store.clone());

    let updated = db
        .update_rental(UpdateRentalDto {
            id,
            items: None,
            start_date: None,
            end_date: None,
            customer_name: None,
            customer_phone: None,
            needs_delivery: None,
            delivery_address: None,
            rental_price: None,
            delivery_price: None,
            delivery_costs: None,
            source: None,
            comment: None,
            status: Some(StoredStatus::Pending),
        })
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.status, RentalStatus::Completed);
    let stored = store.rentals.lock().unwrap();
    assert_eq!(*stored[0].status(), StoredStatus::Completed);
}

#[tokio::test]
async fn created_rental_starts_pending_with_default_prices() {
    let store = Store::default();
    let db = StubDatabase::new(store.clone());
    let now = OffsetDateTime::now_utc();

    db.create_rental(CreateRentalDto {
        items: Vec::new(),
        start_date: now + Duration::days(1),
        end_date: now + Duration::days(2),
        customer_name: "Иван".to_string(),
        customer_phone: "+70000000001".to_string(),
        needs_delivery: false,
        delivery_address: None,
        rental_price: Decimal::new(150000, 2),
        delivery_price: None,
        delivery_costs: None,
        source: RentalSource::Website,
        comment: None,
    })
    .await
    .unwrap();

    let stored = store.rentals.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(*stored[0].status(), StoredStatus::Pending);
    assert_eq!(stored[0].delivery_price().amount(), Decimal::ZERO);
    assert_eq!(stored[0].delivery_costs().amount(), Decimal::ZERO);
}

#[tokio::test]
async fn deleting_missing_rental_reports_absence() {
    let db = StubDatabase::new(Store::default());
    let result = db
        .delete_rental(DeleteRentalDto { id: Uuid::new_v4() })
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn schedule_without_full_period_lists_oldest_first() {
    let store = Store::default();
    let now = OffsetDateTime::now_utc();
    {
        let mut rentals = store.rentals.lock().unwrap();
        for offset in [3, 1, 2] {
            rentals.push(rental(
                Vec::new(),
                now + Duration::days(offset),
                now + Duration::days(offset + 1),
                StoredStatus::Pending,
                1000,
                0,
                0,
                "+70000000001",
            ));
        }
    }
    let db = StubDatabase::new(store);

    let schedule = db
        .get_rental_schedule(RentalScheduleDto {
            start_date: Some(now),
            end_date: None,
        })
        .await
        .unwrap();

    let starts = schedule.iter().map(|r| r.start_date).collect::<Vec<_>>();
    let mut sorted = starts.clone();
    sorted.sort();
    assert_eq!(starts, sorted);
}

#[tokio::test]
async fn schedule_with_period_keeps_overlapping_rentals_only() {
    let store = Store::default();
    let now = OffsetDateTime::now_utc();
    {
        let mut rentals = store.rentals.lock().unwrap();
        rentals.push(rental(
            Vec::new(),
            now + Duration::days(1),
            now + Duration::days(2),
            StoredStatus::Pending,
            1000,
            0,
            0,
            "+70000000001",
        ));
        rentals.push(rental(
            Vec::new(),
            now + Duration::days(10),
            now + Duration::days(11),
            StoredStatus::Pending,
            1000,
            0,
            0,
            "+70000000002",
        ));
    }
    let db = StubDatabase::new(store);

    let schedule = db
        .get_rental_schedule(RentalScheduleDto {
            start_date: Some(now),
            end_date: Some(now + Duration::days(3)),
        })
        .await
        .unwrap();

    assert_eq!(schedule.len(), 1);
    assert_eq!(schedule[0].customer_phone, "+70000000001");
}

#[tokio::test]
async fn rental_items_show_numbered_names_and_unknown_equipment() {
    let store = Store::default();
    let karcher = equipment("Karcher SC4", 2);
    let missing = EquipmentInstance::new(
        EquipmentId::new(Uuid::new_v4()),
        kernel::prelude::entity::InstanceNumber::new(1),
    );
    let now = OffsetDateTime::now_utc();
    {
        store.equipment.lock().unwrap().push(karcher.clone());
        let mut items = karcher.instances();
        items.push(missing);
        store.rentals.lock().unwrap().push(rental(
            items,
            now,
            now + Duration::days(1),
            StoredStatus::Pending,
            1000,
            0,
            0,
            "+70000000001",
        ));
    }
    let db = StubDatabase::new(store);

    let rentals = db.get_all_rentals().await.unwrap();
    let names = rentals[0]
        .equipment_list
        .iter()
        .map(|item| item.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        names,
        vec!["Karcher SC4 №1", "Karcher SC4 №2", "Неизвестное оборудование"]
    );
}

#[tokio::test]
async fn equipment_instances_expand_per_unit() {
    let store = Store::default();
    store
        .equipment
        .lock()
        .unwrap()
        .push(equipment("GoPro 13", 1));
    store
        .equipment
        .lock()
        .unwrap()
        .push(equipment("Karcher SC4", 2));
    let db = StubDatabase::new(store);

    let instances = db.get_equipment_instances().await.unwrap();
    let names = instances
        .iter()
        .map(|instance| instance.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["GoPro 13", "Karcher SC4 №1", "Karcher SC4 №2"]);
}

#[tokio::test]
async fn customers_are_grouped_by_rental_frequency() {
    let store = Store::default();
    let now = OffsetDateTime::now_utc();
    {
        let mut rentals = store.rentals.lock().unwrap();
        for _ in 0..2 {
            rentals.push(rental(
                Vec::new(),
                now,
                now + Duration::days(1),
                StoredStatus::Pending,
                1000,
                0,
                0,
                "+70000000001",
            ));
        }
        rentals.push(rental(
            Vec::new(),
            now,
            now + Duration::days(1),
            StoredStatus::Pending,
            1000,
            0,
            0,
            "+70000000002",
        ));
    }
    let db = StubDatabase::new(store);

    let customers = db.get_all_customers().await.unwrap();
    assert_eq!(customers.len(), 2);
    assert_eq!(customers[0].customer_phone, "+70000000001");
    assert_eq!(customers[0].rental_count, 2);
}

#[tokio::test]
async fn utilization_counts_each_rental_once_per_unit() {
    let store = Store::default();
    let camera = equipment("GoPro 13", 1);
    let karcher = equipment("Karcher SC4", 2);
    let now = OffsetDateTime::now_utc();
    {
        store.equipment.lock().unwrap().push(camera.clone());
        store.equipment.lock().unwrap().push(karcher.clone());
        let mut rentals = store.rentals.lock().unwrap();
        // both Karcher copies in one booking
        rentals.push(rental(
            karcher.instances(),
            now,
            now + Duration::days(1),
            StoredStatus::Pending,
            3000,
            0,
            0,
            "+70000000001",
        ));
        rentals.push(rental(
            camera.instances(),
            now,
            now + Duration::days(1),
            StoredStatus::Pending,
            1000,
            0,
            0,
            "+70000000002",
        ));
    }
    let db = StubDatabase::new(store);

    let utilization = db.get_equipment_utilization().await.unwrap();
    assert_eq!(utilization.len(), 2);
    assert_eq!(utilization[0].name, "Karcher SC4");
    assert_eq!(utilization[0].total_rentals, 1);
    assert_eq!(utilization[0].total_revenue, Decimal::from(3000));
    assert_eq!(utilization[1].name, "GoPro 13");
    assert_eq!(utilization[1].total_rentals, 1);
    assert_eq!(utilization[1].total_revenue, Decimal::from(1000));
}

#[tokio::test]
async fn summary_without_full_filter_covers_everything() {
    let store = Store::default();
    let now = OffsetDateTime::now_utc();
    {
        let mut rentals = store.rentals.lock().unwrap();
        rentals.push(rental(
            Vec::new(),
            now - Duration::days(40),
            now - Duration::days(39),
            StoredStatus::Completed,
            1000,
            200,
            50,
            "+70000000001",
        ));
        rentals.push(rental(
            Vec::new(),
            now,
            now + Duration::days(1),
            StoredStatus::Pending,
            500,
            0,
            0,
            "+70000000002",
        ));
    }
    let db = StubDatabase::new(store);

    // A month without a year cannot narrow anything down.
    let summary = db
        .get_financial_summary(GetFinancialSummaryDto {
            year: None,
            month: Some(3),
        })
        .await
        .unwrap();

    assert_eq!(summary.total_rentals, 2);
    assert_eq!(summary.rental_revenue, Decimal::from(1500));
    assert_eq!(summary.delivery_revenue, Decimal::from(200));
    assert_eq!(summary.total_revenue, Decimal::from(1700));
    assert_eq!(summary.delivery_costs, Decimal::from(50));
    assert_eq!(
        summary.net_profit,
        summary.total_revenue - summary.total_costs
    );
}
