//! Demo records shown until a backend exists.

use super::alerts::{AlertItem, Severity};
use super::inventory::{InventoryItem, StockStatus};

fn product(name: &str, category: &str, quantity: u32, status: StockStatus, updated: &str) -> InventoryItem {
    InventoryItem {
        name: name.to_string(),
        category: category.to_string(),
        quantity,
        status,
        updated: updated.to_string(),
    }
}

pub fn inventory_items() -> Vec<InventoryItem> {
    vec![
        product("Wireless Mouse", "Electronics", 5, StockStatus::Low, "2 hours ago"),
        product("Ergonomic Chair", "Furniture", 45, StockStatus::Ok, "1 day ago"),
        product("Laptop Stand", "Accessories", 8, StockStatus::Low, "3 hours ago"),
        product("Keyboard Case", "Accessories", 156, StockStatus::Overstock, "5 hours ago"),
        product("USB Cable", "Electronics", 12, StockStatus::Low, "1 hour ago"),
        product("Monitor Arm", "Furniture", 34, StockStatus::Ok, "2 days ago"),
        product("Desk Lamp", "Lighting", 2, StockStatus::DeadStock, "1 week ago"),
        product("Notebook Pack", "Stationery", 89, StockStatus::Ok, "4 hours ago"),
    ]
}

fn alert(code: &str, kind: &str, product: &str, message: &str, severity: Severity, time: &str) -> AlertItem {
    AlertItem {
        code: code.to_string(),
        kind: kind.to_string(),
        product: product.to_string(),
        message: message.to_string(),
        severity,
        time: time.to_string(),
        resolved: false,
    }
}

pub fn alerts() -> Vec<AlertItem> {
    vec![
        alert(
            "a1",
            "Low Stock Warning",
            "Wireless Mouse",
            "Wireless Mouse stock has dropped below minimum threshold (5 units remaining).",
            Severity::Critical,
            "2 hours ago",
        ),
        alert(
            "a2",
            "Demand Spike Prediction",
            "Monitor Arms",
            "Monitor Arms expected to see 45% increase in demand over next 2 weeks.",
            Severity::Warning,
            "4 hours ago",
        ),
        alert(
            "a3",
            "Overstock Alert",
            "Keyboard Cases",
            "Keyboard Cases inventory is 3x above optimal level (156 units).",
            Severity::Warning,
            "5 hours ago",
        ),
        alert(
            "a4",
            "Low Stock Warning",
            "USB Cable",
            "USB Cable inventory below reorder point (12 units remaining).",
            Severity::Critical,
            "1 hour ago",
        ),
        alert(
            "a5",
            "Stock Mismatch Detected",
            "Desk Lamp",
            "Potential discrepancy in Desk Lamp count - physical audit recommended.",
            Severity::Critical,
            "6 hours ago",
        ),
    ]
}
