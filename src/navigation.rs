//! The console sidebar, filtered by the render gate.

use edugate_core::permissions;

use crate::access::evaluator::AccessSnapshot;
use crate::access::gate::GateSpec;
use crate::views::View;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSection {
    pub title: &'static str,
    pub entries: Vec<View>,
}

struct SectionDef {
    title: &'static str,
    gate: GateSpec,
    views: &'static [View],
}

fn sections() -> Vec<SectionDef> {
    vec![
        SectionDef {
            title: "Overview",
            gate: GateSpec::open(),
            views: &[View::Dashboard],
        },
        SectionDef {
            title: "Academics",
            gate: GateSpec::open(),
            views: &[
                View::Students,
                View::Classes,
                View::Attendance,
                View::Timetable,
                View::Marksheets,
                View::Examinations,
                View::Certificates,
                View::Promotions,
            ],
        },
        SectionDef {
            title: "Staff",
            gate: GateSpec::open(),
            views: &[View::Staff, View::StaffAttendance],
        },
        SectionDef {
            title: "Finance",
            gate: GateSpec::any_of(permissions::FINANCIAL).hidden(),
            views: &[View::Fees, View::Expenses, View::Subsidies],
        },
        SectionDef {
            title: "Reports",
            gate: GateSpec::any_of(&[
                permissions::REPORTS,
                permissions::STUDENT_REPORTS,
                permissions::FINANCIAL_REPORTS,
            ])
            .hidden(),
            views: &[View::StudentReports, View::FinancialReports],
        },
        SectionDef {
            title: "Administration",
            gate: GateSpec::open(),
            views: &[View::Users, View::Settings],
        },
    ]
}

fn entry_gate(view: View) -> GateSpec {
    match view.required_permission() {
        Some(token) => GateSpec::permission(token).hidden(),
        None => GateSpec::open(),
    }
}

/// Builds the sidebar for one render pass. Sections whose own gate fails, or
/// that end up with no visible entries, are left out.
pub fn menu(snapshot: &AccessSnapshot) -> Vec<MenuSection> {
    sections()
        .into_iter()
        .filter(|section| section.gate.evaluate(snapshot))
        .map(|section| MenuSection {
            title: section.title,
            entries: section
                .views
                .iter()
                .copied()
                .filter(|view| entry_gate(*view).evaluate(snapshot))
                .collect(),
        })
        .filter(|section| !section.entries.is_empty())
        .collect()
}
