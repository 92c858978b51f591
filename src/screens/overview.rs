//! Dashboard and analytics view models.
//!
//! Values are fixed demo figures; the only interaction is the analytics
//! time-range selector.

/// A headline number with context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KpiCard {
    pub title: &'static str,
    pub value: &'static str,
    pub subtitle: &'static str,
    pub chip: &'static str,
}

const fn kpi(title: &'static str, value: &'static str, subtitle: &'static str, chip: &'static str) -> KpiCard {
    KpiCard {
        title,
        value,
        subtitle,
        chip,
    }
}

pub const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

pub const DASHBOARD_KPIS: [KpiCard; 8] = [
    kpi("Low stock items", "12", "+3 from last week", "Restock"),
    kpi("Overstock alerts", "5", "-2 from last week", "Review"),
    kpi("Dead stock items", "8", "No change", "Liquidate"),
    kpi("Predicted demand", "+18%", "Next 30 days", "Forecast"),
    kpi("Total revenue", "$91,000", "+12.5%", "Sales"),
    kpi("Orders processed", "1,247", "+8.2%", "Orders"),
    kpi("Items sold", "3,892", "+15.3%", "Volume"),
    kpi("Growth rate", "18.4%", "+3.1% vs last period", "Growth"),
];

/// Monthly unit sales
pub const SALES: [u64; 6] = [4200, 3800, 5200, 4600, 6000, 6500];

/// Share of stock by movement speed, in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockSplit {
    pub fast: u64,
    pub slow: u64,
    pub dead: u64,
}

pub const STOCK_SPLIT: StockSplit = StockSplit {
    fast: 58,
    slow: 32,
    dead: 10,
};

#[derive(Debug, Clone, Default)]
pub struct DashboardState;

impl DashboardState {
    pub fn kpis(&self) -> &'static [KpiCard] {
        &DASHBOARD_KPIS
    }

    pub fn sales(&self) -> impl Iterator<Item = (&'static str, u64)> {
        MONTHS.into_iter().zip(SALES)
    }

    pub fn stock_split(&self) -> StockSplit {
        STOCK_SPLIT
    }
}

pub const ANALYTICS_KPIS: [KpiCard; 4] = [
    kpi("Total revenue", "$91,000", "+12.5%", "Sales"),
    kpi("Orders processed", "1,247", "+8.2%", "Orders"),
    kpi("Items sold", "3,892", "+15.3%", "Volume"),
    kpi("Growth rate", "18.4%", "+3.1% vs last period", "Growth"),
];

pub const REVENUE: [u64; 6] = [12000, 11500, 15500, 15000, 18000, 19500];
pub const PROFIT: [u64; 6] = [9000, 8200, 10000, 9600, 12000, 13500];

pub const CATEGORY_REVENUE: [(&str, u64); 5] = [
    ("Electronics", 4200),
    ("Furniture", 3600),
    ("Accessories", 2800),
    ("Lighting", 1500),
    ("Stationery", 2400),
];

/// Selectable reporting windows
pub const RANGES: [&str; 4] = ["7D", "30D", "6M", "1Y"];

#[derive(Debug, Clone)]
pub struct AnalyticsState {
    range: usize,
}

impl Default for AnalyticsState {
    fn default() -> Self {
        Self { range: 2 }
    }
}

impl AnalyticsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn range(&self) -> &'static str {
        RANGES[self.range]
    }

    pub fn range_index(&self) -> usize {
        self.range
    }

    /// Select the next range and return the toast text.
    pub fn next_range(&mut self) -> String {
        self.range = (self.range + 1) % RANGES.len();
        self.range_message()
    }

    /// Select the previous range and return the toast text.
    pub fn prev_range(&mut self) -> String {
        self.range = (self.range + RANGES.len() - 1) % RANGES.len();
        self.range_message()
    }

    fn range_message(&self) -> String {
        format!("Time range changed to: {}", self.range())
    }

    pub fn kpis(&self) -> &'static [KpiCard] {
        &ANALYTICS_KPIS
    }

    pub fn revenue(&self) -> impl Iterator<Item = (&'static str, u64, u64)> {
        MONTHS
            .into_iter()
            .zip(REVENUE)
            .zip(PROFIT)
            .map(|((month, revenue), profit)| (month, revenue, profit))
    }

    pub fn categories(&self) -> &'static [(&'static str, u64)] {
        &CATEGORY_REVENUE
    }
}
