//! Customer Repository

use chrono::Utc;
use shared::models::{Customer, CustomerPatch};

use super::{RepoError, RepoResult};
use crate::db::{LocalStore, keys};

/// Contact details captured at checkout
#[derive(Debug, Clone)]
pub struct CustomerContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company_name: Option<String>,
    pub delivery_address: Option<String>,
}

#[derive(Clone)]
pub struct CustomerRepository {
    store: LocalStore,
}

impl CustomerRepository {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    pub fn get_all(&self) -> RepoResult<Vec<Customer>> {
        Ok(self.store.read(keys::CUSTOMERS)?)
    }

    pub fn get_by_id(&self, id: &str) -> RepoResult<Option<Customer>> {
        Ok(self.get_all()?.into_iter().find(|c| c.id == id))
    }

    /// Emails match case-insensitively
    pub fn find_by_email(&self, email: &str) -> RepoResult<Option<Customer>> {
        let wanted = email.trim();
        Ok(self
            .get_all()?
            .into_iter()
            .find(|c| c.email.eq_ignore_ascii_case(wanted)))
    }

    pub fn add(&self, customer: Customer) -> RepoResult<Customer> {
        let txn = self.store.begin_write()?;
        let mut customers: Vec<Customer> = self.store.read_in(&txn, keys::CUSTOMERS)?;
        if customers.iter().any(|c| c.id == customer.id || c.email.eq_ignore_ascii_case(&customer.email)) {
            self.store.finish(txn, false)?;
            return Err(RepoError::Duplicate(format!(
                "Customer '{}' already exists",
                customer.email
            )));
        }
        customers.push(customer.clone());
        self.store.write_in(&txn, keys::CUSTOMERS, &customers)?;
        self.store.finish(txn, true)?;
        Ok(customer)
    }

    /// Returns `Ok(false)` for an unknown id
    pub fn update(&self, id: &str, patch: CustomerPatch) -> RepoResult<bool> {
        Ok(self.store.update(keys::CUSTOMERS, |customers: &mut Vec<Customer>| {
            match customers.iter_mut().find(|c| c.id == id) {
                Some(customer) => {
                    let changed = customer.apply(patch);
                    if changed {
                        customer.updated_at = Utc::now();
                    }
                    (true, changed)
                }
                None => (false, false),
            }
        })?)
    }

    /// Match by email, refreshing contact details, or create a new customer
    pub fn upsert_by_email(&self, contact: CustomerContact) -> RepoResult<Customer> {
        let email = contact.email.trim().to_string();
        Ok(self.store.update(keys::CUSTOMERS, |customers: &mut Vec<Customer>| {
            let now = Utc::now();
            if let Some(existing) = customers.iter_mut().find(|c| c.email.eq_ignore_ascii_case(&email)) {
                let changed = existing.apply(CustomerPatch {
                    name: Some(contact.name),
                    phone: Some(contact.phone),
                    company_name: contact.company_name,
                    delivery_address: contact.delivery_address,
                });
                if changed {
                    existing.updated_at = now;
                }
                return (existing.clone(), changed);
            }

            let customer = Customer {
                id: uuid::Uuid::new_v4().to_string(),
                name: contact.name,
                email,
                phone: contact.phone,
                company_name: contact.company_name,
                delivery_address: contact.delivery_address,
                created_at: now,
                updated_at: now,
            };
            tracing::info!(customer_id = %customer.id, "Customer created");
            customers.push(customer.clone());
            (customer, true)
        })?)
    }
}
