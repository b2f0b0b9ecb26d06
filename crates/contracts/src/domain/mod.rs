pub mod contract;
pub mod order;
pub mod user;

pub use contract::{Buyer, Consignee, Contract, Product, Seller, SellerDetails};
pub use order::Order;
pub use user::{
    balance_amount, PanelAccess, PaymentStatus, SalesData, Transaction, TransactionKind,
    TransactionStatus, User, UserRole,
};
