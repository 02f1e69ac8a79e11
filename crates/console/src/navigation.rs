//! Sections of the console and the sidebar/router predicates over them.

use serde::{Deserialize, Serialize};
use tracing::debug;

use stayops_auth::{Permission, RoleGrants, Session, has_permission};

/// A gated section of the console, one per sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppSection {
    Dashboard,
    Rooms,
    Bookings,
    Guests,
    Staff,
    Tasks,
    Reports,
    Settings,
}

impl AppSection {
    /// Sidebar order.
    pub const ALL: [AppSection; 8] = [
        AppSection::Dashboard,
        AppSection::Rooms,
        AppSection::Bookings,
        AppSection::Guests,
        AppSection::Staff,
        AppSection::Tasks,
        AppSection::Reports,
        AppSection::Settings,
    ];

    /// The permission tag gating this section.
    pub fn tag(&self) -> &'static str {
        match self {
            AppSection::Dashboard => "dashboard",
            AppSection::Rooms => "rooms",
            AppSection::Bookings => "bookings",
            AppSection::Guests => "guests",
            AppSection::Staff => "staff",
            AppSection::Tasks => "tasks",
            AppSection::Reports => "reports",
            AppSection::Settings => "settings",
        }
    }

    pub fn permission(&self) -> Permission {
        Permission::new(self.tag())
    }

    /// Header title for the section.
    pub fn title(&self) -> &'static str {
        match self {
            AppSection::Dashboard => "Dashboard",
            AppSection::Rooms => "Room Management",
            AppSection::Bookings => "Booking Management",
            AppSection::Guests => "Guest Management",
            AppSection::Staff => "Staff Management",
            AppSection::Tasks => "Task Management",
            AppSection::Reports => "Reports & Analytics",
            AppSection::Settings => "Settings",
        }
    }

    /// Every section tag, for validating a grants table at startup.
    pub fn all_tags() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(AppSection::tag)
    }
}

impl core::fmt::Display for AppSection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.tag())
    }
}

/// The sidebar filter: sections the current session may open, in sidebar
/// order. Anonymous sessions see nothing.
pub fn visible_sections(session: &Session, grants: &RoleGrants) -> Vec<AppSection> {
    AppSection::ALL
        .into_iter()
        .filter(|section| has_permission(session, grants, &section.permission()))
        .collect()
}

/// Route a section request, falling back to the dashboard when the session
/// may not open the requested section (the original view switch defaulted the
/// same way).
pub fn route(requested: AppSection, session: &Session, grants: &RoleGrants) -> AppSection {
    if has_permission(session, grants, &requested.permission()) {
        requested
    } else {
        debug!(requested = %requested, "section denied, routing to dashboard");
        AppSection::Dashboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stayops_auth::{Principal, Role, SessionToken};
    use stayops_core::StaffId;

    fn session_for(role: Role) -> Session {
        Session::Authenticated {
            principal: Principal::new(StaffId::new(), "x@hotel.com", "Test Staff", role),
            token: SessionToken::generate(),
        }
    }

    #[test]
    fn anonymous_session_sees_no_sections() {
        assert!(visible_sections(&Session::Anonymous, &RoleGrants::standard()).is_empty());
    }

    #[test]
    fn admin_sees_every_section() {
        let sections = visible_sections(&session_for(Role::Admin), &RoleGrants::standard());
        assert_eq!(sections, AppSection::ALL.to_vec());
    }

    #[test]
    fn receptionist_sidebar_matches_their_grants() {
        let sections =
            visible_sections(&session_for(Role::Receptionist), &RoleGrants::standard());
        assert_eq!(
            sections,
            vec![
                AppSection::Dashboard,
                AppSection::Rooms,
                AppSection::Bookings,
                AppSection::Guests,
            ]
        );
    }

    #[test]
    fn housekeeping_sees_their_task_queue_but_no_bookings() {
        let sections =
            visible_sections(&session_for(Role::Housekeeping), &RoleGrants::standard());
        assert!(sections.contains(&AppSection::Tasks));
        assert!(!sections.contains(&AppSection::Bookings));
    }

    #[test]
    fn denied_section_routes_to_dashboard() {
        let grants = RoleGrants::standard();
        let session = session_for(Role::Receptionist);
        assert_eq!(
            route(AppSection::Reports, &session, &grants),
            AppSection::Dashboard
        );
        assert_eq!(
            route(AppSection::Bookings, &session, &grants),
            AppSection::Bookings
        );
    }

    #[test]
    fn section_tags_and_titles_are_distinct() {
        let tags: std::collections::BTreeSet<_> = AppSection::all_tags().collect();
        assert_eq!(tags.len(), AppSection::ALL.len());
    }
}
