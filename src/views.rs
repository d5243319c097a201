//! Console screens and the permission each one requires.

use std::fmt;
use std::str::FromStr;

use edugate_core::permissions;

/// Path of the login screen.
pub const LOGIN_PATH: &str = "/login";
/// Path of the "not allowed" screen.
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Dashboard,
    Students,
    Staff,
    Classes,
    Attendance,
    StaffAttendance,
    Fees,
    Expenses,
    Subsidies,
    Marksheets,
    Timetable,
    Examinations,
    Certificates,
    Promotions,
    FinancialReports,
    StudentReports,
    Users,
    Settings,
}

impl View {
    pub const ALL: [View; 18] = [
        View::Dashboard,
        View::Students,
        View::Staff,
        View::Classes,
        View::Attendance,
        View::StaffAttendance,
        View::Fees,
        View::Expenses,
        View::Subsidies,
        View::Marksheets,
        View::Timetable,
        View::Examinations,
        View::Certificates,
        View::Promotions,
        View::FinancialReports,
        View::StudentReports,
        View::Users,
        View::Settings,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            View::Dashboard => "/",
            View::Students => "/students",
            View::Staff => "/staff",
            View::Classes => "/classes",
            View::Attendance => "/attendance",
            View::StaffAttendance => "/staff-attendance",
            View::Fees => "/fees",
            View::Expenses => "/expenses",
            View::Subsidies => "/subsidies",
            View::Marksheets => "/marksheets",
            View::Timetable => "/timetable",
            View::Examinations => "/examinations",
            View::Certificates => "/certificates",
            View::Promotions => "/promotions",
            View::FinancialReports => "/financial-reports",
            View::StudentReports => "/student-reports",
            View::Users => "/users",
            View::Settings => "/settings",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Students => "Students",
            View::Staff => "Staff",
            View::Classes => "Classes",
            View::Attendance => "Attendance",
            View::StaffAttendance => "Staff Attendance",
            View::Fees => "Fees",
            View::Expenses => "Expenses",
            View::Subsidies => "Subsidies",
            View::Marksheets => "Marksheets",
            View::Timetable => "Timetable",
            View::Examinations => "Examinations",
            View::Certificates => "Certificates",
            View::Promotions => "Promotions",
            View::FinancialReports => "Financial Reports",
            View::StudentReports => "Student Reports",
            View::Users => "Users & Roles",
            View::Settings => "Settings",
        }
    }

    /// `None` means any signed-in user may open the view.
    pub fn required_permission(&self) -> Option<&'static str> {
        match self {
            View::Dashboard => None,
            View::Students => Some(permissions::STUDENTS),
            View::Staff => Some(permissions::STAFF),
            View::Classes => Some(permissions::CLASSES),
            View::Attendance => Some(permissions::ATTENDANCE),
            View::StaffAttendance => Some(permissions::STAFF_ATTENDANCE),
            View::Fees => Some(permissions::FEES),
            View::Expenses => Some(permissions::EXPENSES),
            View::Subsidies => Some(permissions::SUBSIDIES),
            View::Marksheets => Some(permissions::MARKSHEETS),
            View::Timetable => Some(permissions::TIMETABLE),
            View::Examinations => Some(permissions::EXAMINATIONS),
            View::Certificates => Some(permissions::CERTIFICATES),
            View::Promotions => Some(permissions::PROMOTIONS),
            View::FinancialReports => Some(permissions::FINANCIAL_REPORTS),
            View::StudentReports => Some(permissions::STUDENT_REPORTS),
            View::Users => Some(permissions::USERS),
            View::Settings => Some(permissions::SETTINGS),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for View {
    type Err = String;

    /// Accepts a route path with or without the leading slash, ignoring a
    /// trailing slash and case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().trim_matches('/').to_lowercase();
        View::ALL
            .into_iter()
            .find(|view| view.path().trim_start_matches('/') == normalized)
            .ok_or_else(|| format!("Unknown view: {}", s))
    }
}
