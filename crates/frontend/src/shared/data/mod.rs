//! In-memory record store and the demo dataset backing it.
//!
//! There is no API layer: the store is seeded once from the demo records and
//! mutated only through its methods (manual entry appends a contract, admin
//! screens run user-directory transitions). Every page reads reactively.

pub(crate) mod demo;

use leptos::prelude::*;

use contracts::domain::{Contract, Order};
use contracts::store::UserDirectory;

#[derive(Clone, Copy)]
pub struct RecordStore {
    pub contracts: RwSignal<Vec<Contract>>,
    pub orders: RwSignal<Vec<Order>>,
    pub users: RwSignal<UserDirectory>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            contracts: RwSignal::new(demo::contracts()),
            orders: RwSignal::new(demo::orders()),
            users: RwSignal::new(UserDirectory::new(demo::users())),
        }
    }

    pub fn add_contract(&self, contract: Contract) {
        self.contracts.update(|list| list.push(contract));
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_store() -> RecordStore {
    use_context::<RecordStore>().expect("RecordStore not found in context")
}
