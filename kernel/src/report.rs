use rust_decimal::Decimal;
use time::{Date, OffsetDateTime};
use vodca::References;

use crate::entity::{Equipment, EquipmentId, EquipmentName, Expense, OwnedQuantity, Rental};

static MONTH_NAMES: [&str; 12] = [
    "Январь",
    "Февраль",
    "Март",
    "Апрель",
    "Май",
    "Июнь",
    "Июль",
    "Август",
    "Сентябрь",
    "Октябрь",
    "Ноябрь",
    "Декабрь",
];

pub fn month_name(month: u8) -> &'static str {
    MONTH_NAMES
        .get(usize::from(month).wrapping_sub(1))
        .copied()
        .unwrap_or("")
}

/// Selects records whose date falls inside one calendar month.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct MonthFilter {
    year: i32,
    month: u8,
}

impl MonthFilter {
    pub fn new(year: i32, month: u8) -> Self {
        Self { year, month }
    }

    pub fn contains(&self, instant: &OffsetDateTime) -> bool {
        instant.year() == self.year && u8::from(instant.month()) == self.month
    }

    pub fn contains_date(&self, date: &Date) -> bool {
        date.year() == self.year && u8::from(date.month()) == self.month
    }
}

/// Revenue/cost totals over a window of rentals and expenses. Absence of
/// matching records yields all zeroes, never an error.
#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct FinancialSummary {
    total_revenue: Decimal,
    rental_revenue: Decimal,
    delivery_revenue: Decimal,
    total_costs: Decimal,
    delivery_costs: Decimal,
    operational_expenses: Decimal,
    net_profit: Decimal,
    total_rentals: i64,
}

impl FinancialSummary {
    pub fn calculate(rentals: &[Rental], expenses: &[Expense], filter: Option<MonthFilter>) -> Self {
        let mut rental_revenue = Decimal::ZERO;
        let mut delivery_revenue = Decimal::ZERO;
        let mut delivery_costs = Decimal::ZERO;
        let mut total_rentals = 0i64;
        for rental in rentals {
            if let Some(filter) = &filter {
                if !filter.contains(rental.start_date().as_ref()) {
                    continue;
                }
            }
            rental_revenue += rental.rental_price().amount();
            delivery_revenue += rental.delivery_price().amount();
            delivery_costs += rental.delivery_costs().amount();
            total_rentals += 1;
        }

        let operational_expenses = expenses
            .iter()
            .filter(|expense| match &filter {
                Some(filter) => filter.contains_date(expense.date().as_ref()),
                None => true,
            })
            .map(|expense| expense.amount().amount())
            .sum::<Decimal>();

        let total_revenue = rental_revenue + delivery_revenue;
        let total_costs = delivery_costs + operational_expenses;
        Self {
            total_revenue,
            rental_revenue,
            delivery_revenue,
            total_costs,
            delivery_costs,
            operational_expenses,
            net_profit: total_revenue - total_costs,
            total_rentals,
        }
    }
}

/// One month bucket of the revenue trend view.
#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct MonthlyRevenue {
    year: i32,
    month: u8,
    total_revenue: Decimal,
    rental_count: i64,
}

impl MonthlyRevenue {
    /// Buckets rentals by calendar month of their start date, newest month
    /// first.
    pub fn collect(rentals: &[Rental]) -> Vec<Self> {
        let mut buckets = std::collections::BTreeMap::<(i32, u8), (Decimal, i64)>::new();
        for rental in rentals {
            let start = rental.start_date().as_ref();
            let key = (start.year(), u8::from(start.month()));
            let bucket = buckets.entry(key).or_default();
            bucket.0 += rental.rental_price().amount() + rental.delivery_price().amount();
            bucket.1 += 1;
        }
        buckets
            .into_iter()
            .rev()
            .map(|((year, month), (total_revenue, rental_count))| Self {
                year,
                month,
                total_revenue,
                rental_count,
            })
            .collect()
    }

    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }
}

/// Demand view of one equipment unit: how many rentals included it and the
/// rental revenue those bookings brought in.
#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct EquipmentUtilization {
    id: EquipmentId,
    name: EquipmentName,
    quantity: OwnedQuantity,
    total_rentals: i64,
    total_revenue: Decimal,
}

impl EquipmentUtilization {
    /// Attributes each rental's price to every distinct unit among its
    /// items, once per rental. Units nothing ever rented stay in the list
    /// with zeroes; items pointing at deleted units are skipped. Highest
    /// revenue first.
    pub fn collect(equipment: &[Equipment], rentals: &[Rental]) -> Vec<Self> {
        let mut buckets = std::collections::HashMap::<&EquipmentId, (i64, Decimal)>::new();
        for rental in rentals {
            let mut counted = std::collections::HashSet::new();
            for item in rental.items() {
                if counted.insert(item.equipment_id()) {
                    let bucket = buckets.entry(item.equipment_id()).or_default();
                    bucket.0 += 1;
                    bucket.1 += rental.rental_price().amount();
                }
            }
        }
        let mut rows = equipment
            .iter()
            .map(|unit| {
                let (total_rentals, total_revenue) =
                    buckets.get(unit.id()).copied().unwrap_or_default();
                Self {
                    id: unit.id().clone(),
                    name: unit.name().clone(),
                    quantity: unit.quantity().clone(),
                    total_rentals,
                    total_revenue,
                }
            })
            .collect::<Vec<_>>();
        rows.sort_by(|a, b| b.total_revenue.cmp(&a.total_revenue));
        rows
    }
}
