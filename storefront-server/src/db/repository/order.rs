//! Order Repository

use chrono::Utc;
use shared::models::{Order, OrderStatus};

use super::{RepoError, RepoResult};
use crate::db::{LocalStore, keys};

#[derive(Clone)]
pub struct OrderRepository {
    store: LocalStore,
}

impl OrderRepository {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    /// All orders, newest first
    pub fn get_all(&self) -> RepoResult<Vec<Order>> {
        let mut orders: Vec<Order> = self.store.read(keys::ORDERS)?;
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }

    pub fn get_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let orders: Vec<Order> = self.store.read(keys::ORDERS)?;
        Ok(orders.into_iter().find(|o| o.id == id))
    }

    pub fn get_by_customer(&self, customer_id: &str) -> RepoResult<Vec<Order>> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|o| o.customer_id == customer_id)
            .collect())
    }

    /// Append an order; ids are unique
    pub fn add(&self, order: Order) -> RepoResult<Order> {
        let txn = self.store.begin_write()?;
        let mut orders: Vec<Order> = self.store.read_in(&txn, keys::ORDERS)?;
        if orders.iter().any(|o| o.id == order.id) {
            self.store.finish(txn, false)?;
            return Err(RepoError::Duplicate(format!("Order {} already exists", order.id)));
        }
        orders.push(order.clone());
        self.store.write_in(&txn, keys::ORDERS, &orders)?;
        self.store.finish(txn, true)?;

        tracing::info!(order_id = %order.id, order_number = %order.order_number, "Order stored");
        Ok(order)
    }

    /// Set an order's status and refresh `updated_at`
    ///
    /// Any transition is accepted. Returns `Ok(false)` for an unknown id.
    pub fn update_status(&self, id: &str, status: OrderStatus) -> RepoResult<bool> {
        let updated = self.store.update(keys::ORDERS, |orders: &mut Vec<Order>| {
            match orders.iter_mut().find(|o| o.id == id) {
                Some(order) => {
                    order.status = status;
                    order.updated_at = Utc::now();
                    (true, true)
                }
                None => (false, false),
            }
        })?;
        if updated {
            tracing::info!(order_id = %id, status = %status, "Order status changed");
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rust_decimal::Decimal;

    fn order(id: &str, customer_id: &str, minutes_ago: i64) -> Order {
        let at = Utc::now() - Duration::minutes(minutes_ago);
        Order {
            id: id.to_string(),
            order_number: format!("SE-{id}"),
            customer_id: customer_id.to_string(),
            customer_name: "Ana Ruiz".to_string(),
            customer_email: "ana@example.com".to_string(),
            customer_phone: "555-0100".to_string(),
            company_name: None,
            delivery_address: "12 Market St".to_string(),
            items: Vec::new(),
            subtotal: Decimal::ZERO,
            tax: Decimal::ZERO,
            total: Decimal::ZERO,
            status: OrderStatus::Pending,
            notes: None,
            created_at: at,
            updated_at: at,
        }
    }

    fn repo() -> OrderRepository {
        OrderRepository::new(LocalStore::open_in_memory().unwrap())
    }

    #[test]
    fn test_add_and_list_newest_first() {
        let repo = repo();
        repo.add(order("o1", "c1", 30)).unwrap();
        repo.add(order("o2", "c2", 10)).unwrap();
        repo.add(order("o3", "c1", 20)).unwrap();

        let ids: Vec<String> = repo.get_all().unwrap().into_iter().map(|o| o.id).collect();
        assert_eq!(ids, vec!["o2", "o3", "o1"]);

        let mine: Vec<String> = repo.get_by_customer("c1").unwrap().into_iter().map(|o| o.id).collect();
        assert_eq!(mine, vec!["o3", "o1"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let repo = repo();
        repo.add(order("o1", "c1", 0)).unwrap();
        assert!(matches!(repo.add(order("o1", "c1", 0)), Err(RepoError::Duplicate(_))));
        assert_eq!(repo.get_all().unwrap().len(), 1);
    }

    #[test]
    fn test_update_status() {
        let repo = repo();
        let stored = repo.add(order("o1", "c1", 60)).unwrap();

        assert!(repo.update_status("o1", OrderStatus::Shipped).unwrap());
        let reloaded = repo.get_by_id("o1").unwrap().unwrap();
        assert_eq!(reloaded.status, OrderStatus::Shipped);
        assert!(reloaded.updated_at > stored.updated_at);

        // Backwards transitions are allowed
        assert!(repo.update_status("o1", OrderStatus::Pending).unwrap());
        assert!(!repo.update_status("missing", OrderStatus::Cancelled).unwrap());
    }
}
