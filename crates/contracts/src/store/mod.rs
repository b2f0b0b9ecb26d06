//! In-process record stores.
//!
//! The dashboard keeps all records in memory; these small repository types
//! own the collections and expose explicit state transitions instead of
//! letting pages swap whole lists in place. Reads hand out snapshots.

use thiserror::Error;

use crate::domain::{PanelAccess, Transaction, User};

#[derive(Debug, Error, PartialEq)]
pub enum DirectoryError {
    #[error("no user with id {0}")]
    UnknownUser(String),
    #[error("a user with email {0} already exists")]
    DuplicateEmail(String),
}

/// Repository for dashboard accounts. Every mutation validates first and
/// either applies atomically or returns an error leaving the directory
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn snapshot(&self) -> Vec<User> {
        self.users.clone()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
    }

    pub fn add(&mut self, user: User) -> Result<(), DirectoryError> {
        if self.find_by_email(&user.email).is_some() {
            return Err(DirectoryError::DuplicateEmail(user.email));
        }
        self.users.push(user);
        Ok(())
    }

    /// Replaces the stored record with the same id. The email must stay
    /// unique across the directory.
    pub fn update(&mut self, user: User) -> Result<(), DirectoryError> {
        if self
            .users
            .iter()
            .any(|u| u.id != user.id && u.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(DirectoryError::DuplicateEmail(user.email));
        }
        let slot = self
            .users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| DirectoryError::UnknownUser(user.id.clone()))?;
        *slot = user;
        Ok(())
    }

    pub fn set_active(&mut self, id: &str, active: bool) -> Result<(), DirectoryError> {
        self.get_mut(id)?.is_active = active;
        Ok(())
    }

    pub fn set_panel_access(
        &mut self,
        id: &str,
        access: PanelAccess,
    ) -> Result<(), DirectoryError> {
        self.get_mut(id)?.panel_access = access;
        Ok(())
    }

    pub fn set_brands(&mut self, id: &str, brands: Vec<String>) -> Result<(), DirectoryError> {
        self.get_mut(id)?.brands = brands;
        Ok(())
    }

    /// Appends a transaction and rolls its amount into the sales figures:
    /// credits count as paid, reducing the pending amount.
    pub fn record_transaction(
        &mut self,
        id: &str,
        transaction: Transaction,
    ) -> Result<(), DirectoryError> {
        use crate::domain::TransactionKind;

        let user = self.get_mut(id)?;
        if transaction.kind == TransactionKind::Credit {
            user.sales_data.paid_amount += transaction.amount;
            user.sales_data.pending_amount =
                (user.sales_data.pending_amount - transaction.amount).max(0.0);
            user.sales_data.last_payment_date = Some(transaction.date);
        }
        user.transactions.push(transaction);
        Ok(())
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut User, DirectoryError> {
        self.users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| DirectoryError::UnknownUser(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::{
        SalesData, TransactionKind, TransactionStatus, UserRole,
    };

    fn user(id: &str, email: &str) -> User {
        User {
            id: id.to_string(),
            name: "Test User".to_string(),
            email: email.to_string(),
            phone: "000".to_string(),
            role: UserRole::User,
            organization: "Acme".to_string(),
            is_active: true,
            created_at: Utc::now(),
            last_login: None,
            sales_data: SalesData {
                pending_amount: 500.0,
                ..SalesData::empty()
            },
            panel_access: PanelAccess::minimal(),
            brands: vec![],
            transactions: vec![],
            initial_payment: None,
        }
    }

    #[test]
    fn duplicate_email_is_rejected() {
        let mut dir = UserDirectory::new(vec![user("u1", "a@acme.in")]);
        let err = dir.add(user("u2", "A@ACME.IN")).unwrap_err();
        assert_eq!(err, DirectoryError::DuplicateEmail("A@ACME.IN".to_string()));
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn update_requires_known_id_and_unique_email() {
        let mut dir = UserDirectory::new(vec![user("u1", "a@acme.in"), user("u2", "b@acme.in")]);

        let mut changed = user("u1", "a@acme.in");
        changed.name = "Renamed".to_string();
        dir.update(changed).unwrap();
        assert_eq!(dir.get("u1").unwrap().name, "Renamed");

        let stolen_email = user("u2", "a@acme.in");
        assert!(matches!(
            dir.update(stolen_email),
            Err(DirectoryError::DuplicateEmail(_))
        ));

        assert!(matches!(
            dir.update(user("ghost", "c@acme.in")),
            Err(DirectoryError::UnknownUser(_))
        ));
    }

    #[test]
    fn credit_transaction_updates_sales_figures() {
        let mut dir = UserDirectory::new(vec![user("u1", "a@acme.in")]);
        let txn = Transaction {
            id: "t1".to_string(),
            date: Utc::now(),
            amount: 200.0,
            kind: TransactionKind::Credit,
            description: "Commission payout".to_string(),
            status: TransactionStatus::Completed,
            receive_amount: Some(200.0),
            balance_amount: None,
        };
        dir.record_transaction("u1", txn).unwrap();

        let u = dir.get("u1").unwrap();
        assert_eq!(u.transactions.len(), 1);
        assert_eq!(u.sales_data.paid_amount, 200.0);
        assert_eq!(u.sales_data.pending_amount, 300.0);
        assert!(u.sales_data.last_payment_date.is_some());
    }

    #[test]
    fn set_active_flips_only_the_flag() {
        let mut dir = UserDirectory::new(vec![user("u1", "a@acme.in")]);
        dir.set_active("u1", false).unwrap();
        let u = dir.get("u1").unwrap();
        assert!(!u.is_active);
        assert_eq!(u.email, "a@acme.in");
        assert!(dir.set_active("ghost", true).is_err());
    }
}
