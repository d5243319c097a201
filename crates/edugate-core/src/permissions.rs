//! Permission token constants for the Edugate console.
//!
//! Tokens are opaque strings. There is no hierarchy among them except the
//! [`ALL`] wildcard, which satisfies every check. Using these constants instead
//! of string literals keeps the role mapping and the call sites in sync.
//!
//! # Example
//!
//! ```ignore
//! use edugate_core::permissions;
//!
//! if snapshot.has_any_permission(&[permissions::FEES, permissions::EXPENSES]) {
//!     // render the finance section
//! }
//! ```

/// Wildcard token. A permission set containing it satisfies every check.
pub const ALL: &str = "all";

// =============================================================================
// Student operations
// =============================================================================

/// Student records
pub const STUDENTS: &str = "students";
/// Student attendance
pub const ATTENDANCE: &str = "attendance";
/// Marksheet entry and printing
pub const MARKSHEETS: &str = "marksheets";
/// Examination schedules
pub const EXAMINATIONS: &str = "examinations";
/// Leaving and character certificates
pub const CERTIFICATES: &str = "certificates";
/// End-of-year class promotion
pub const PROMOTIONS: &str = "promotions";

// =============================================================================
// School structure and staffing
// =============================================================================

/// Staff records, salaries and advances
pub const STAFF: &str = "staff";
/// Staff attendance
pub const STAFF_ATTENDANCE: &str = "staff-attendance";
/// Classes and sections
pub const CLASSES: &str = "classes";
/// Timetable management
pub const TIMETABLE: &str = "timetable";

// =============================================================================
// Finance
// =============================================================================

/// Fee collection
pub const FEES: &str = "fees";
/// Expense ledger
pub const EXPENSES: &str = "expenses";
/// Fee subsidies and concessions
pub const SUBSIDIES: &str = "subsidies";
/// Financial reports
pub const FINANCIAL_REPORTS: &str = "financial-reports";

// =============================================================================
// Reports
// =============================================================================

/// Student reports
pub const STUDENT_REPORTS: &str = "student-reports";
/// Legacy alias kept for older report screens
pub const REPORTS: &str = "reports";

// =============================================================================
// Administration
// =============================================================================

/// User and role administration
pub const USERS: &str = "users";
/// System settings
pub const SETTINGS: &str = "settings";

/// Every concrete token used anywhere in the console, excluding [`ALL`].
pub const ALL_TOKENS: &[&str] = &[
    STUDENTS,
    ATTENDANCE,
    MARKSHEETS,
    EXAMINATIONS,
    CERTIFICATES,
    PROMOTIONS,
    STAFF,
    STAFF_ATTENDANCE,
    CLASSES,
    TIMETABLE,
    FEES,
    EXPENSES,
    SUBSIDIES,
    FINANCIAL_REPORTS,
    STUDENT_REPORTS,
    REPORTS,
    USERS,
    SETTINGS,
];

/// Tokens that grant visibility into school finances.
pub const FINANCIAL: &[&str] = &[FEES, EXPENSES, SUBSIDIES, FINANCIAL_REPORTS];

/// Returns true for the wildcard token.
pub fn is_wildcard(token: &str) -> bool {
    token == ALL
}
