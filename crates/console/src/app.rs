//! Console wiring: session lifecycle, policy validation and panel data.

use std::path::PathBuf;

use stayops_auth::{
    AccessExplanation, AuthError, Permission, Principal, RoleGrants, Session, SessionManager,
    SessionStore, StaffDirectory, explain_access,
};
use stayops_bookings::{Booking, BookingStatus};
use stayops_core::DomainResult;
use stayops_guests::Guest;
use stayops_housekeeping::{HousekeepingTask, TaskStatus};
use stayops_infra::JsonFileSessionStore;
use stayops_reports::{DashboardSnapshot, RecentBookingRow};
use stayops_rooms::{Room, RoomStatus};

use crate::navigation::{self, AppSection};

/// The assembled console: one session manager, one validated policy table,
/// and the per-panel sample datasets.
///
/// Every panel getter re-evaluates the permission gate and answers `None`
/// when the current session may not open that panel, so a front end cannot
/// reach data its sidebar would not show.
pub struct Console<S: SessionStore> {
    manager: SessionManager<S>,
    rooms: Vec<Room>,
    guests: Vec<Guest>,
    bookings: Vec<Booking>,
    tasks: Vec<HousekeepingTask>,
}

impl Console<JsonFileSessionStore> {
    /// Console persisting its session to a JSON file at `path`.
    pub fn file_backed(path: impl Into<PathBuf>) -> DomainResult<Self> {
        Self::new(JsonFileSessionStore::new(path))
    }
}

impl<S: SessionStore> Console<S> {
    /// Console with the stock directory and policy.
    pub fn new(store: S) -> DomainResult<Self> {
        Self::with_policy(StaffDirectory::sample(), RoleGrants::standard(), store)
    }

    /// Console with an explicit directory and policy table.
    ///
    /// The policy is validated against the known section tags here, once, so
    /// a grant naming a nonexistent section fails startup instead of silently
    /// never matching.
    pub fn with_policy(
        directory: StaffDirectory,
        grants: RoleGrants,
        store: S,
    ) -> DomainResult<Self> {
        grants.validate_tags(AppSection::all_tags())?;

        let rooms = Room::samples();
        let guests = Guest::samples();
        let guest_ids: Vec<_> = guests.iter().map(|g| g.id).collect();
        let room_ids: Vec<_> = rooms.iter().map(|r| r.id).collect();
        let bookings = Booking::samples_for(&guest_ids, &room_ids);
        let tasks = HousekeepingTask::samples_for(&room_ids);

        Ok(Self {
            manager: SessionManager::new(directory, grants, store),
            rooms,
            guests,
            bookings,
            tasks,
        })
    }

    /// Initialize logging and bring up a console restored from any persisted
    /// session. The usual host entry point.
    pub fn boot(store: S) -> DomainResult<Self> {
        stayops_observability::init();
        let mut console = Self::new(store)?;
        console.manager.restore();
        Ok(console)
    }

    pub fn session(&self) -> &Session {
        self.manager.session()
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<&Session, AuthError> {
        self.manager.login(email, password)
    }

    pub fn logout(&mut self) {
        self.manager.logout();
    }

    pub fn restore(&mut self) -> &Session {
        self.manager.restore()
    }

    pub fn has_permission(&self, permission: &Permission) -> bool {
        self.manager.has_permission(permission)
    }

    /// Why a section is (in)visible for the current session.
    pub fn explain_section(&self, section: AppSection) -> AccessExplanation {
        explain_access(
            self.manager.session(),
            self.manager.grants(),
            &section.permission(),
        )
    }

    /// Sidebar entries for the current session.
    pub fn visible_sections(&self) -> Vec<AppSection> {
        navigation::visible_sections(self.manager.session(), self.manager.grants())
    }

    /// Route a section request, falling back to the dashboard when denied.
    pub fn open(&self, requested: AppSection) -> AppSection {
        navigation::route(requested, self.manager.session(), self.manager.grants())
    }

    fn gate<T>(&self, section: AppSection, value: T) -> Option<T> {
        self.has_permission(&section.permission()).then_some(value)
    }

    /// Dashboard stat cards, if the dashboard is permitted.
    pub fn dashboard(&self) -> Option<DashboardSnapshot> {
        self.gate(
            AppSection::Dashboard,
            stayops_reports::snapshot(&self.rooms, &self.bookings),
        )
    }

    /// The dashboard's recent-bookings digest.
    pub fn recent_bookings(&self, limit: usize) -> Option<Vec<RecentBookingRow>> {
        self.gate(
            AppSection::Dashboard,
            stayops_reports::recent_bookings(&self.bookings, &self.guests, &self.rooms, limit),
        )
    }

    /// Rooms panel with its status dropdown.
    pub fn rooms(&self, status: Option<RoomStatus>) -> Option<Vec<&Room>> {
        self.gate(
            AppSection::Rooms,
            stayops_rooms::filter_by_status(&self.rooms, status),
        )
    }

    /// Guests panel with its search box.
    pub fn guests(&self, term: &str) -> Option<Vec<&Guest>> {
        self.gate(AppSection::Guests, stayops_guests::search(&self.guests, term))
    }

    /// Bookings panel with its status dropdown.
    pub fn bookings(&self, status: Option<BookingStatus>) -> Option<Vec<&Booking>> {
        self.gate(
            AppSection::Bookings,
            stayops_bookings::filter_by_status(&self.bookings, status),
        )
    }

    /// Tasks panel with its status dropdown.
    pub fn tasks(&self, status: Option<TaskStatus>) -> Option<Vec<&HousekeepingTask>> {
        self.gate(
            AppSection::Tasks,
            stayops_housekeeping::filter_by_status(&self.tasks, status),
        )
    }

    /// Staff panel: the directory listing.
    pub fn staff(&self) -> Option<Vec<&Principal>> {
        self.gate(AppSection::Staff, self.manager.directory().iter().collect())
    }
}
