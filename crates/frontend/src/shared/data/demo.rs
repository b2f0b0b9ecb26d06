//! Demo dataset: a slice of GeM-style procurement records covering four
//! product categories, six brands and five buyer states, with both seller
//! representations present.

use chrono::{NaiveDate, TimeZone, Utc};
use once_cell::sync::Lazy;

use contracts::domain::{
    Buyer, Consignee, Contract, Order, PanelAccess, Product, SalesData, Seller, SellerDetails,
    Transaction, TransactionKind, TransactionStatus, User, UserRole,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid demo date")
}

fn buyer(name: &str, org: &str, address: &str, ministry: Option<&str>) -> Buyer {
    Buyer {
        buyer_name: name.to_string(),
        buyer_email: format!(
            "{}@gov.in",
            name.to_lowercase().replace(' ', ".")
        ),
        buyer_contact_number: "011-23456789".to_string(),
        buyer_address: address.to_string(),
        organization_name: org.to_string(),
        ministry: ministry.map(str::to_string),
        department: None,
    }
}

fn consignee(name: &str, address: &str) -> Consignee {
    Consignee {
        consignee_name: name.to_string(),
        consignee_email: format!(
            "{}@gov.in",
            name.to_lowercase().replace(' ', ".")
        ),
        consignee_contact_number: "011-98765432".to_string(),
        consignee_address: address.to_string(),
    }
}

fn detailed_seller(name: &str, address: &str, gst: &str, verified: bool) -> Seller {
    Seller::Detailed(SellerDetails {
        seller_name: name.to_string(),
        seller_email: format!(
            "sales@{}.in",
            name.to_lowercase().replace(' ', "")
        ),
        seller_contact_number: "080-44556677".to_string(),
        seller_address: address.to_string(),
        seller_gst_number: gst.to_string(),
        seller_verified_status: if verified { "Verified" } else { "Unverified" }.to_string(),
    })
}

#[allow(clippy::too_many_arguments)]
fn contract(
    number: &str,
    status: &str,
    contract_date: NaiveDate,
    procurement_type: &str,
    value: f64,
    brand: &str,
    bid_number: Option<&str>,
    buyer: Buyer,
    seller: Seller,
    product_name: &str,
    model: &str,
    quantity: u32,
    category: &str,
    catalogue_status: &str,
) -> Contract {
    let address = buyer.buyer_address.clone();
    let unit_price = value / quantity as f64;
    Contract {
        contract_number: number.to_string(),
        contract_status: status.to_string(),
        contract_date,
        procurement_type: procurement_type.to_string(),
        contract_value: value,
        brand: brand.to_string(),
        bid_number: bid_number.map(str::to_string),
        buyer,
        seller,
        consignee: consignee("Stores Section", &address),
        product: Product {
            product_name: product_name.to_string(),
            product_model: model.to_string(),
            quantity,
            unit_price,
            total_order_value: value,
            category_name: category.to_string(),
            catalogue_status: catalogue_status.to_string(),
        },
    }
}

static CONTRACTS: Lazy<Vec<Contract>> = Lazy::new(build_contracts);
static ORDERS: Lazy<Vec<Order>> = Lazy::new(build_orders);
static USERS: Lazy<Vec<User>> = Lazy::new(build_users);

pub fn contracts() -> Vec<Contract> {
    CONTRACTS.clone()
}

pub fn orders() -> Vec<Order> {
    ORDERS.clone()
}

pub fn users() -> Vec<User> {
    USERS.clone()
}

fn build_contracts() -> Vec<Contract> {
    const BLR: &str = "12 MG Road, Bengaluru, Karnataka, 560001";
    const MUM: &str = "45 Marine Drive, Mumbai, Maharashtra, 400020";
    const PUNE: &str = "9 FC Road, Pune, Maharashtra, 411004";
    const DEL: &str = "3 Rajpath Area, New Delhi, Delhi, 110001";
    const CHE: &str = "78 Anna Salai, Chennai, Tamil Nadu, 600002";
    const AHM: &str = "21 CG Road, Ahmedabad, Gujarat, 380009";

    vec![
        contract(
            "GEMC-511687770672395",
            "Completed",
            date(2025, 1, 14),
            "Direct Purchase",
            1_850_000.0,
            "TechNova",
            None,
            buyer("Suresh Kumar", "National Informatics Centre", DEL, Some("Ministry of Electronics and IT")),
            detailed_seller("Stellar Infotech", "4 Residency Rd, Bengaluru, Karnataka, 560025", "29AAACS1234F1Z5", true),
            "TechNova ProDesk Workstation",
            "PD-4200",
            25,
            "Desktop Computers",
            "Published",
        ),
        contract(
            "GEMC-511687770672418",
            "Completed",
            date(2025, 2, 3),
            "Bid",
            2_400_000.0,
            "Orbit",
            Some("GEM/2025/B/6259575"),
            buyer("Lakshmi Narayan", "Karnataka State Police", BLR, Some("Ministry of Home Affairs")),
            detailed_seller("Orbit Systems", "17 Infantry Rd, Bengaluru, Karnataka, 560001", "29AABCO9876K1Z2", true),
            "Orbit Titan Desktop",
            "TT-900",
            40,
            "Desktop Computers",
            "Published",
        ),
        contract(
            "GEMC-511687770672441",
            "In Progress",
            date(2025, 2, 21),
            "Direct Purchase",
            960_000.0,
            "TechNova",
            None,
            buyer("Meena Iyer", "Tamil Nadu e-Governance Agency", CHE, None),
            Seller::Named("Chennai Compute Traders".to_string()),
            "TechNova ProDesk Workstation",
            "PD-4200",
            12,
            "Desktop Computers",
            "Published",
        ),
        contract(
            "GEMC-511687770672466",
            "Completed",
            date(2025, 3, 8),
            "L1 Purchase",
            720_000.0,
            "Stellar",
            None,
            buyer("Amit Patel", "Gujarat Informatics Ltd", AHM, None),
            detailed_seller("Stellar Infotech", "4 Residency Rd, Bengaluru, Karnataka, 560025", "29AAACS1234F1Z5", true),
            "Stellar Edge Mini PC",
            "EM-110",
            18,
            "Desktop Computers",
            "Pending Approval",
        ),
        contract(
            "GEMC-511687770672489",
            "Cancelled",
            date(2025, 3, 27),
            "Bid",
            1_300_000.0,
            "Orbit",
            Some("GEM/2025/B/6259611"),
            buyer("Rajesh Singh", "Municipal Corporation of Greater Mumbai", MUM, None),
            Seller::Named("Westline Distributors".to_string()),
            "Orbit Titan Desktop",
            "TT-900",
            22,
            "Desktop Computers",
            "Published",
        ),
        contract(
            "GEMC-511687770672502",
            "Completed",
            date(2025, 1, 30),
            "Direct Purchase",
            540_000.0,
            "PrintLine",
            None,
            buyer("Suresh Kumar", "National Informatics Centre", DEL, Some("Ministry of Electronics and IT")),
            detailed_seller("PrintLine Solutions", "88 Nehru Place, New Delhi, Delhi, 110019", "07AACCP4567M1Z8", true),
            "PrintLine LaserJet Duplex",
            "LJ-2055",
            30,
            "Laser Printers",
            "Published",
        ),
        contract(
            "GEMC-511687770672525",
            "Completed",
            date(2025, 2, 17),
            "Direct Purchase",
            380_000.0,
            "Orbit",
            None,
            buyer("Meena Iyer", "Tamil Nadu e-Governance Agency", CHE, None),
            Seller::Named("Chennai Compute Traders".to_string()),
            "Orbit PagePro Laser",
            "PP-340",
            20,
            "Laser Printers",
            "Published",
        ),
        contract(
            "GEMC-511687770672548",
            "In Progress",
            date(2025, 4, 5),
            "Bid",
            820_000.0,
            "PrintLine",
            Some("GEM/2025/B/6259702"),
            buyer("Lakshmi Narayan", "Karnataka State Police", BLR, Some("Ministry of Home Affairs")),
            detailed_seller("PrintLine Solutions", "88 Nehru Place, New Delhi, Delhi, 110019", "07AACCP4567M1Z8", true),
            "PrintLine LaserJet Duplex",
            "LJ-2055",
            45,
            "Laser Printers",
            "Published",
        ),
        contract(
            "GEMC-511687770672571",
            "Completed",
            date(2025, 1, 22),
            "Direct Purchase",
            450_000.0,
            "ZenWorks",
            None,
            buyer("Rajesh Singh", "Municipal Corporation of Greater Mumbai", MUM, None),
            detailed_seller("ZenWorks Furniture", "5 Tilak Rd, Pune, Maharashtra, 411030", "27AADCZ2345Q1Z6", true),
            "ZenWorks Ergo Chair",
            "EC-77",
            150,
            "Office Chairs",
            "Published",
        ),
        contract(
            "GEMC-511687770672594",
            "Completed",
            date(2025, 3, 12),
            "L1 Purchase",
            275_000.0,
            "Furnio",
            None,
            buyer("Amit Patel", "Gujarat Informatics Ltd", AHM, None),
            Seller::Named("Ahmedabad Office Mart".to_string()),
            "Furnio TaskOne Chair",
            "TO-21",
            110,
            "Office Chairs",
            "Pending Approval",
        ),
        contract(
            "GEMC-511687770672617",
            "In Progress",
            date(2025, 4, 19),
            "Direct Purchase",
            310_000.0,
            "ZenWorks",
            None,
            buyer("Nisha Reddy", "Pune Smart City Development Corp", PUNE, None),
            detailed_seller("ZenWorks Furniture", "5 Tilak Rd, Pune, Maharashtra, 411030", "27AADCZ2345Q1Z6", true),
            "ZenWorks Ergo Chair",
            "EC-77",
            100,
            "Office Chairs",
            "Published",
        ),
        contract(
            "GEMC-511687770672640",
            "Completed",
            date(2025, 2, 26),
            "Bid",
            1_620_000.0,
            "CoolMax",
            Some("GEM/2025/B/6259648"),
            buyer("Suresh Kumar", "National Informatics Centre", DEL, Some("Ministry of Electronics and IT")),
            detailed_seller("CoolMax Climate", "12 Okhla Phase 2, New Delhi, Delhi, 110020", "07AAFCC8910R1Z3", true),
            "CoolMax Inverter Split AC",
            "IS-150",
            36,
            "Air Conditioners",
            "Published",
        ),
        contract(
            "GEMC-511687770672663",
            "Completed",
            date(2025, 3, 20),
            "Direct Purchase",
            880_000.0,
            "Frostair",
            None,
            buyer("Lakshmi Narayan", "Karnataka State Police", BLR, Some("Ministry of Home Affairs")),
            Seller::Named("Deccan Cooling House".to_string()),
            "Frostair Cassette AC",
            "CA-80",
            20,
            "Air Conditioners",
            "Published",
        ),
        contract(
            "GEMC-511687770672686",
            "In Progress",
            date(2025, 4, 28),
            "Direct Purchase",
            1_150_000.0,
            "CoolMax",
            None,
            buyer("Meena Iyer", "Tamil Nadu e-Governance Agency", CHE, None),
            detailed_seller("CoolMax Climate", "12 Okhla Phase 2, New Delhi, Delhi, 110020", "07AAFCC8910R1Z3", true),
            "CoolMax Inverter Split AC",
            "IS-150",
            26,
            "Air Conditioners",
            "Published",
        ),
        contract(
            "GEMC-511687770672709",
            "Completed",
            date(2025, 5, 6),
            "L1 Purchase",
            640_000.0,
            "TechNova",
            None,
            buyer("Nisha Reddy", "Pune Smart City Development Corp", PUNE, None),
            detailed_seller("Stellar Infotech", "4 Residency Rd, Bengaluru, Karnataka, 560025", "29AAACS1234F1Z5", true),
            "TechNova SlimLine Desktop",
            "SL-1100",
            10,
            "Desktop Computers",
            "Published",
        ),
        contract(
            "GEMC-511687770672732",
            "Completed",
            date(2025, 5, 18),
            "Bid",
            420_000.0,
            "Frostair",
            Some("GEM/2025/B/6259760"),
            buyer("Rajesh Singh", "Municipal Corporation of Greater Mumbai", MUM, None),
            Seller::Named("Deccan Cooling House".to_string()),
            "Frostair Window AC",
            "WA-40",
            15,
            "Air Conditioners",
            "Published",
        ),
    ]
}

fn order(
    id: &str,
    product: &str,
    quantity: u32,
    unit_price: f64,
    order_date: NaiveDate,
    status: &str,
    seller: &str,
    oem: &str,
) -> Order {
    Order {
        id: id.to_string(),
        product: product.to_string(),
        quantity,
        unit_price,
        total_price: unit_price * quantity as f64,
        order_date,
        status: status.to_string(),
        seller: seller.to_string(),
        oem: oem.to_string(),
    }
}

fn build_orders() -> Vec<Order> {
    vec![
        order("ORD-240101", "TechNova ProDesk Workstation", 5, 74_000.0, date(2025, 1, 18), "Delivered", "Stellar Infotech", "TechNova"),
        order("ORD-240102", "Orbit Titan Desktop", 8, 60_000.0, date(2025, 2, 7), "Delivered", "Orbit Systems", "Orbit"),
        order("ORD-240103", "PrintLine LaserJet Duplex", 12, 18_000.0, date(2025, 2, 14), "Shipped", "PrintLine Solutions", "PrintLine"),
        order("ORD-240104", "ZenWorks Ergo Chair", 40, 3_000.0, date(2025, 3, 2), "Delivered", "ZenWorks Furniture", "ZenWorks"),
        order("ORD-240105", "CoolMax Inverter Split AC", 6, 45_000.0, date(2025, 3, 25), "Pending", "CoolMax Climate", "CoolMax"),
        order("ORD-240106", "Frostair Cassette AC", 4, 44_000.0, date(2025, 4, 9), "Shipped", "Deccan Cooling House", "Frostair"),
        order("ORD-240107", "Furnio TaskOne Chair", 60, 2_500.0, date(2025, 4, 21), "Delivered", "Ahmedabad Office Mart", "Furnio"),
        order("ORD-240108", "Orbit PagePro Laser", 10, 19_000.0, date(2025, 5, 11), "Cancelled", "Chennai Compute Traders", "Orbit"),
    ]
}

fn build_users() -> Vec<User> {
    let created = Utc.with_ymd_and_hms(2024, 11, 4, 9, 30, 0).unwrap();
    vec![
        User {
            id: "usr-admin-01".to_string(),
            name: "Arjun Mehta".to_string(),
            email: "arjun@geminsight.in".to_string(),
            phone: "98450-11223".to_string(),
            role: UserRole::Admin,
            organization: "GeM Insight".to_string(),
            is_active: true,
            created_at: created,
            last_login: Some(Utc.with_ymd_and_hms(2025, 5, 20, 8, 15, 0).unwrap()),
            sales_data: SalesData::empty(),
            panel_access: PanelAccess::all(),
            brands: vec![],
            transactions: vec![],
            initial_payment: None,
        },
        User {
            id: "usr-oem-01".to_string(),
            name: "Priya Sharma".to_string(),
            email: "priya@technova.in".to_string(),
            phone: "98220-44556".to_string(),
            role: UserRole::User,
            organization: "TechNova Industries".to_string(),
            is_active: true,
            created_at: created,
            last_login: Some(Utc.with_ymd_and_hms(2025, 5, 19, 17, 2, 0).unwrap()),
            sales_data: SalesData {
                total_sales: 3_450_000.0,
                commission_rate: 0.04,
                paid_amount: 98_000.0,
                pending_amount: 40_000.0,
                last_payment_date: Some(Utc.with_ymd_and_hms(2025, 4, 30, 12, 0, 0).unwrap()),
            },
            panel_access: PanelAccess {
                dashboard: true,
                contracts: true,
                analytics: true,
                settings: true,
                sellers: true,
            },
            brands: vec!["TechNova".to_string()],
            transactions: vec![
                Transaction {
                    id: "txn-9001".to_string(),
                    date: Utc.with_ymd_and_hms(2025, 3, 31, 12, 0, 0).unwrap(),
                    amount: 60_000.0,
                    kind: TransactionKind::Credit,
                    description: "Q1 commission payout".to_string(),
                    status: TransactionStatus::Completed,
                    receive_amount: Some(60_000.0),
                    balance_amount: None,
                },
                Transaction {
                    id: "txn-9002".to_string(),
                    date: Utc.with_ymd_and_hms(2025, 4, 30, 12, 0, 0).unwrap(),
                    amount: 38_000.0,
                    kind: TransactionKind::Credit,
                    description: "April commission payout".to_string(),
                    status: TransactionStatus::Completed,
                    receive_amount: Some(30_000.0),
                    balance_amount: Some(8_000.0),
                },
            ],
            initial_payment: Some(25_000.0),
        },
        User {
            id: "usr-oem-02".to_string(),
            name: "Rahul Verma".to_string(),
            email: "rahul@coolmax.in".to_string(),
            phone: "97110-77889".to_string(),
            role: UserRole::User,
            organization: "CoolMax Climate".to_string(),
            is_active: true,
            created_at: created,
            last_login: None,
            sales_data: SalesData {
                total_sales: 2_770_000.0,
                commission_rate: 0.05,
                paid_amount: 0.0,
                pending_amount: 138_500.0,
                last_payment_date: None,
            },
            panel_access: PanelAccess {
                dashboard: true,
                contracts: true,
                analytics: false,
                settings: false,
                sellers: true,
            },
            brands: vec!["CoolMax".to_string()],
            transactions: vec![],
            initial_payment: None,
        },
    ]
}
