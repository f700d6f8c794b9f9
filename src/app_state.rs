use crate::location_data::{Country, DatasetStatus};
use crate::user_model::{UserInput, UserRecord};

/// Root-owned session state: the user collection, the location dataset and
/// the shared UI flags. One instance lives behind the FFI pointer for the
/// whole session; everything is initialized fresh and nothing persists.
pub struct AppState {
    users: Vec<UserRecord>,
    countries: DatasetStatus,
    drawer_open: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            countries: DatasetStatus::Pending,
            drawer_open: true,
        }
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    /// Appends a new record with a generated id and returns it.
    pub fn add_user(&mut self, fields: UserInput) -> UserRecord {
        let record = UserRecord::new(fields);
        self.users.push(record.clone());
        record
    }

    /// Replaces the record with `id` wholesale, keeping its position.
    /// Returns `None` without mutating anything when the id is unknown.
    pub fn update_user(&mut self, id: &str, fields: UserInput) -> Option<&UserRecord> {
        let record = self.users.iter_mut().find(|u| u.id == id)?;
        record.fields = fields;
        Some(&*record)
    }

    /// Looks up a record by id. An empty id never matches.
    pub fn user_by_id(&self, id: &str) -> Option<&UserRecord> {
        if id.is_empty() {
            return None;
        }
        self.users.iter().find(|u| u.id == id)
    }

    /// Removes the record with `id`. Returns whether anything was removed;
    /// deleting an absent id is a no-op, so the call is idempotent.
    pub fn delete_user(&mut self, id: &str) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u.id != id);
        self.users.len() != before
    }

    pub fn set_countries(&mut self, data: Vec<Country>) {
        self.countries = DatasetStatus::Ready(data);
    }

    pub fn mark_countries_failed(&mut self) {
        self.countries = DatasetStatus::Failed;
    }

    pub fn countries_status(&self) -> &DatasetStatus {
        &self.countries
    }

    /// The dataset when loaded; `None` while pending and after a failed
    /// fetch, so resolver queries degrade to empty option lists.
    pub fn countries(&self) -> Option<&[Country]> {
        self.countries.data()
    }

    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub fn set_drawer_open(&mut self, open: bool) {
        self.drawer_open = open;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
