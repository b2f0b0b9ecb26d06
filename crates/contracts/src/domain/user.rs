use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Dashboard account. Mutated only through [`crate::store::UserDirectory`]
/// transitions; pages receive cloned snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: UserRole,
    pub organization: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
    pub sales_data: SalesData,
    pub panel_access: PanelAccess,
    #[serde(default)]
    pub brands: Vec<String>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_payment: Option<f64>,
}

impl User {
    /// Primary brand for the market-intelligence view. Accounts without an
    /// assigned brand see the "Unknown Brand" placeholder.
    pub fn primary_brand(&self) -> &str {
        self.brands.first().map(String::as_str).unwrap_or("Unknown Brand")
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
}

impl UserRole {
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::User => "User",
        }
    }
}

/// Per-section visibility flags. A disabled flag hides the section from the
/// sidebar and blocks direct navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelAccess {
    pub dashboard: bool,
    pub contracts: bool,
    pub analytics: bool,
    pub settings: bool,
    pub sellers: bool,
}

impl PanelAccess {
    pub fn all() -> Self {
        Self {
            dashboard: true,
            contracts: true,
            analytics: true,
            settings: true,
            sellers: true,
        }
    }

    /// Default for newly created accounts: dashboard only.
    pub fn minimal() -> Self {
        Self {
            dashboard: true,
            contracts: false,
            analytics: false,
            settings: false,
            sellers: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesData {
    pub total_sales: f64,
    pub commission_rate: f64,
    pub paid_amount: f64,
    pub pending_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_payment_date: Option<DateTime<Utc>>,
}

impl SalesData {
    pub fn empty() -> Self {
        Self {
            total_sales: 0.0,
            commission_rate: 0.05,
            paid_amount: 0.0,
            pending_amount: 0.0,
            last_payment_date: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub date: DateTime<Utc>,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub description: String,
    pub status: TransactionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receive_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_amount: Option<f64>,
}

impl Transaction {
    /// Settlement state derived from status and outstanding balance.
    pub fn payment_status(&self) -> PaymentStatus {
        match self.status {
            TransactionStatus::Failed => PaymentStatus::Failed,
            TransactionStatus::Pending => PaymentStatus::Pending,
            TransactionStatus::Completed => {
                if self.balance_amount.unwrap_or(0.0) > 0.0 {
                    PaymentStatus::Partial
                } else {
                    PaymentStatus::Complete
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Credit,
    Debit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Failed,
    Pending,
    Partial,
    Complete,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Failed => "Failed",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Partial => "Partial",
            PaymentStatus::Complete => "Complete",
        }
    }
}

/// Outstanding balance on a payment, clamped at zero so an overpayment never
/// reports a negative balance.
pub fn balance_amount(total: f64, received: f64) -> f64 {
    (total - received).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(status: TransactionStatus, balance: Option<f64>) -> Transaction {
        Transaction {
            id: "txn1".to_string(),
            date: Utc::now(),
            amount: 500.0,
            kind: TransactionKind::Credit,
            description: "Commission payout".to_string(),
            status,
            receive_amount: None,
            balance_amount: balance,
        }
    }

    #[test]
    fn payment_status_follows_balance() {
        assert_eq!(
            txn(TransactionStatus::Failed, None).payment_status(),
            PaymentStatus::Failed
        );
        assert_eq!(
            txn(TransactionStatus::Pending, Some(100.0)).payment_status(),
            PaymentStatus::Pending
        );
        assert_eq!(
            txn(TransactionStatus::Completed, Some(100.0)).payment_status(),
            PaymentStatus::Partial
        );
        assert_eq!(
            txn(TransactionStatus::Completed, None).payment_status(),
            PaymentStatus::Complete
        );
    }

    #[test]
    fn balance_never_negative() {
        assert_eq!(balance_amount(1000.0, 400.0), 600.0);
        assert_eq!(balance_amount(1000.0, 1500.0), 0.0);
    }

    #[test]
    fn role_round_trips_lowercase() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
        let role: UserRole = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, UserRole::User);
    }
}
