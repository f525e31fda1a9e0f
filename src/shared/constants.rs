/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// AGGREGATION CONSTANTS
// =============================================================================

/// Number of entries returned by the top-N dashboard rankings
pub const TOP_RANKING_SIZE: usize = 5;

/// Requests without a scheduled date count as overdue after this many days
pub const OVERDUE_AGE_DAYS: i64 = 7;

/// Number of calendar-month buckets in the monthly trend
pub const TREND_MONTHS: usize = 6;

/// Trailing window scanned for the monthly trend
pub const TREND_WINDOW_DAYS: i64 = 180;
