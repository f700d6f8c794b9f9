//! Cascading location lookups.
//!
//! Pure functions deriving each dropdown's valid options from the dataset and
//! the selections above it, plus the selection-change rule that clears
//! downstream levels. Every lookup short-circuits to an empty list on a
//! missing dataset, an empty selector or an unmatched name; none of them can
//! fail. Matching is exact string equality on `name`.

use serde::{Deserialize, Serialize};

use crate::location_data::{Country, District, SelectOption, State};

/// All country names as (label, value) option pairs, in dataset order.
pub fn countries_from_data(data: Option<&[Country]>) -> Vec<SelectOption> {
    match data {
        Some(countries) => countries
            .iter()
            .map(|c| SelectOption::from_name(&c.name))
            .collect(),
        None => Vec::new(),
    }
}

/// State options for the selected country, or empty when it does not resolve.
pub fn states_from_countries(data: Option<&[Country]>, country: &str) -> Vec<SelectOption> {
    match find_country(data, country) {
        Some(c) => c
            .states
            .iter()
            .map(|s| SelectOption::from_name(&s.name))
            .collect(),
        None => Vec::new(),
    }
}

/// District options for the selected country and state.
pub fn districts_from_state(
    data: Option<&[Country]>,
    country: &str,
    state: &str,
) -> Vec<SelectOption> {
    match find_state(data, country, state) {
        Some(s) => s
            .districts
            .iter()
            .map(|d| SelectOption::from_name(&d.name))
            .collect(),
        None => Vec::new(),
    }
}

/// City options for the selected country, state and district.
pub fn cities_from_district(
    data: Option<&[Country]>,
    country: &str,
    state: &str,
    district: &str,
) -> Vec<SelectOption> {
    match find_district(data, country, state, district) {
        Some(d) => d.cities.iter().map(|c| SelectOption::from_name(c)).collect(),
        None => Vec::new(),
    }
}

fn find_country<'a>(data: Option<&'a [Country]>, country: &str) -> Option<&'a Country> {
    if country.is_empty() {
        return None;
    }
    data?.iter().find(|c| c.name == country)
}

fn find_state<'a>(data: Option<&'a [Country]>, country: &str, state: &str) -> Option<&'a State> {
    if state.is_empty() {
        return None;
    }
    find_country(data, country)?.states.iter().find(|s| s.name == state)
}

fn find_district<'a>(
    data: Option<&'a [Country]>,
    country: &str,
    state: &str,
    district: &str,
) -> Option<&'a District> {
    if district.is_empty() {
        return None;
    }
    find_state(data, country, state)?
        .districts
        .iter()
        .find(|d| d.name == district)
}

/// One of the four cascade levels, ordered top-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionLevel {
    Country,
    State,
    District,
    City,
}

impl SelectionLevel {
    /// Parses the level names used on the FFI boundary.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "country" => Some(SelectionLevel::Country),
            "state" => Some(SelectionLevel::State),
            "district" => Some(SelectionLevel::District),
            "city" => Some(SelectionLevel::City),
            _ => None,
        }
    }
}

/// The current picks of the cascading picker. Empty string means unselected.
///
/// The only mutation path is [`LocationSelection::select`], which enforces the
/// clearing rule: a change at level L resets every level below L, so a stale
/// downstream pick can never coexist with its new upstream option list.
///
/// # Examples
///
/// ```rust
/// use user_directory_core::resolver::{LocationSelection, SelectionLevel};
///
/// let mut selection = LocationSelection::default();
/// selection.select(SelectionLevel::Country, "India");
/// selection.select(SelectionLevel::State, "Kerala");
/// selection.select(SelectionLevel::Country, "Nepal");
/// assert_eq!(selection.state, "");
/// ```
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct LocationSelection {
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub city: String,
}

impl LocationSelection {
    /// Applies a selection change, clearing all levels below the changed one.
    pub fn select(&mut self, level: SelectionLevel, value: &str) {
        match level {
            SelectionLevel::Country => {
                self.country = value.to_string();
                self.state.clear();
                self.district.clear();
                self.city.clear();
            }
            SelectionLevel::State => {
                self.state = value.to_string();
                self.district.clear();
                self.city.clear();
            }
            SelectionLevel::District => {
                self.district = value.to_string();
                self.city.clear();
            }
            SelectionLevel::City => {
                self.city = value.to_string();
            }
        }
    }
}
