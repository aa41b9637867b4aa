/// Decimal precision for display (money and percentages)
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Months in a year, as used by the depreciation schedules
pub const MONTHS_PER_YEAR: i32 = 12;

/// Acceleration factor for the double-declining balance method
pub const DECLINING_BALANCE_FACTOR: u32 = 2;

/// Synthetic category id for records whose category is not in the supplied list
pub const UNCATEGORIZED_ID: &str = "__UNCATEGORIZED__";

/// Display name for the synthetic uncategorized bucket
pub const UNCATEGORIZED_NAME: &str = "Uncategorized";

/// Display color for the synthetic uncategorized bucket
pub const UNCATEGORIZED_COLOR: &str = "#878580";
