//! # User Directory Core
//!
//! An in-memory user directory core designed for FFI (Foreign Function
//! Interface) integration with cross-platform admin UIs. The host renders the
//! views and performs network I/O; this crate owns the session state: the
//! user collection, the location reference dataset, the cascading location
//! resolver and the field-validation rules.
//!
//! ## Features
//!
//! - **In-memory store**: id-keyed CRUD over the session's user records,
//!   insertion order preserved for listing
//! - **Cascading lookups**: country → state → district → city option lists
//!   that degrade to empty instead of erroring
//! - **Cascade clearing**: changing a selection level resets everything below
//!   it, so stale picks never survive an upstream change
//! - **Schema-driven validation**: one pass, dotted field paths, inline-ready
//!   error messages
//! - **Safe error handling**: no `unwrap()` calls in production code; every
//!   FFI function returns a JSON `AppResponse` envelope
//!
//! ## Quick Start
//!
//! ```no_run
//! use user_directory_core::{create_app, add_user, get_all_users};
//! use std::ffi::CString;
//!
//! // Create the session state
//! let app = create_app();
//!
//! // Insert a record (the id is generated and returned in the response)
//! let json = CString::new(r#"{
//!     "name": {"firstName": "Jane", "lastName": "Doe"},
//!     "email": "jane@example.com", "phone": "9876543210",
//!     "profession": "Engineer", "country": "India", "state": "Kerala",
//!     "district": "Ernakulam", "city": "Kochi", "address": "12 Marine Drive"
//! }"#).unwrap();
//! let result = add_user(app, json.as_ptr());
//!
//! let listing = get_all_users(app);
//! ```
//!
//! ## FFI Functions
//!
//! This library exposes C-compatible functions for cross-language integration:
//!
//! - [`create_app`] / [`destroy_app`] - Session state lifecycle
//! - [`load_countries`] / [`countries_fetch_failed`] / [`countries_status`] -
//!   One-time dataset delivery
//! - [`get_countries`], [`get_states`], [`get_districts`], [`get_cities`] -
//!   Cascading option lists
//! - [`select_location`] - Selection change with downstream clearing
//! - [`validate_user`] - Field-rule validation of a form payload
//! - [`add_user`], [`get_user_by_id`], [`get_all_users`], [`update_user`],
//!   [`delete_user_by_id`] - Record CRUD
//! - [`set_drawer_open`] / [`is_drawer_open`] - Shared navigation drawer flag
//! - [`free_response`] - Reclaims strings returned by the functions above

pub mod app_state;
pub mod location_data;
pub mod resolver;
pub mod user_model;
pub mod validation;
mod app_response;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use log::{info, warn};

use crate::app_response::AppResponse;
use crate::app_state::AppState;
use crate::location_data::{Country, SelectOption};
use crate::resolver::{LocationSelection, SelectionLevel};
use crate::user_model::{UserInput, UserRecord};

/// Creates the session state: an empty user collection, a pending location
/// dataset and an open navigation drawer.
///
/// # Returns
///
/// Returns a pointer to the [`AppState`] instance. The caller owns it and
/// must release it with [`destroy_app`]; everything it holds is discarded at
/// that point, nothing is persisted.
///
/// # Examples
///
/// ```no_run
/// use user_directory_core::{create_app, destroy_app};
///
/// let app = create_app();
/// assert!(!app.is_null());
/// destroy_app(app);
/// ```
#[no_mangle]
pub extern "C" fn create_app() -> *mut AppState {
    info!("Initializing user directory session state");
    Box::into_raw(Box::new(AppState::new()))
}

/// Releases the session state created by [`create_app`].
///
/// # Safety
///
/// The pointer must have come from [`create_app`] and must not be used again
/// afterwards. A null pointer is ignored.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn destroy_app(state: *mut AppState) {
    if state.is_null() {
        warn!("Null state pointer passed to destroy_app");
        return;
    }
    drop(unsafe { Box::from_raw(state) });
    info!("Session state destroyed");
}

/// Delivers the location dataset fetched by the host from its `/countries`
/// endpoint.
///
/// The dataset is loaded once per session and treated as immutable
/// afterwards. A body that fails to parse marks the fetch as failed, which
/// the resolver treats the same as "no dataset": every option list comes back
/// empty.
///
/// # Parameters
///
/// * `state` - Pointer to the session state
/// * `json_ptr` - Null-terminated C string with the JSON country tree
///
/// # Returns
///
/// Returns a JSON-formatted C string containing the operation result.
/// The returned string must be freed with [`free_response`].
///
/// # JSON Format
///
/// Expected JSON structure:
/// ```json
/// [
///   {
///     "name": "India",
///     "states": [
///       {
///         "name": "Kerala",
///         "districts": [
///           { "name": "Ernakulam", "cities": ["Kochi", "Aluva"] }
///         ]
///       }
///     ]
///   }
/// ]
/// ```
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn load_countries(state: *mut AppState, json_ptr: *const c_char) -> *const c_char {
    let state = match unsafe { state.as_mut() } {
        Some(s) => s,
        None => {
            let error = AppResponse::BadRequest("Null state pointer".to_string());
            return response_to_c_string(&error);
        }
    };

    let json_str = match c_ptr_to_string(json_ptr, "JSON") {
        Ok(json) => json,
        Err(error_ptr) => return error_ptr,
    };

    let data: Vec<Country> = match serde_json::from_str(&json_str) {
        Ok(d) => d,
        Err(e) => {
            warn!("Location dataset body did not parse: {e}");
            state.mark_countries_failed();
            let error = AppResponse::SerializationError(format!("Invalid dataset JSON: {e}"));
            return response_to_c_string(&error);
        }
    };

    info!("Location dataset loaded: {} countries", data.len());
    state.set_countries(data);
    response_to_c_string(&AppResponse::success("Location dataset loaded"))
}

/// Records that the host's dataset fetch failed.
///
/// There is no retry; the dataset stays unavailable and every option list
/// stays empty until the session is torn down.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn countries_fetch_failed(state: *mut AppState) -> *const c_char {
    let state = match unsafe { state.as_mut() } {
        Some(s) => s,
        None => {
            let error = AppResponse::BadRequest("Null state pointer".to_string());
            return response_to_c_string(&error);
        }
    };

    warn!("Location dataset fetch reported as failed");
    state.mark_countries_failed();
    response_to_c_string(&AppResponse::success("Dataset fetch failure recorded"))
}

/// Reports the dataset fetch state: `pending`, `ready` or `failed`.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn countries_status(state: *mut AppState) -> *const c_char {
    let state = match unsafe { state.as_ref() } {
        Some(s) => s,
        None => {
            let error = AppResponse::BadRequest("Null state pointer".to_string());
            return response_to_c_string(&error);
        }
    };

    response_to_c_string(&AppResponse::success(state.countries_status().label()))
}

/// Lists all countries as `{label, value}` option pairs.
///
/// # Returns
///
/// `Ok` with a JSON option array; empty while the dataset is pending or after
/// a failed fetch. This function has no failure mode beyond a null pointer.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_countries(state: *mut AppState) -> *const c_char {
    let state = match unsafe { state.as_ref() } {
        Some(s) => s,
        None => {
            let error = AppResponse::BadRequest("Null state pointer".to_string());
            return response_to_c_string(&error);
        }
    };

    let options = resolver::countries_from_data(state.countries());
    options_response(&options)
}

/// Lists the state options for the selected country.
///
/// # Parameters
///
/// * `state` - Pointer to the session state
/// * `country` - Selected country name; empty or unmatched yields `[]`
///
/// # Returns
///
/// `Ok` with a JSON option array. Missing dataset, empty selector and
/// unmatched name all yield an empty array rather than an error.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_states(state: *mut AppState, country: *const c_char) -> *const c_char {
    let state = match unsafe { state.as_ref() } {
        Some(s) => s,
        None => {
            let error = AppResponse::BadRequest("Null state pointer".to_string());
            return response_to_c_string(&error);
        }
    };

    let country = match c_ptr_to_string(country, "country") {
        Ok(c) => c,
        Err(error_ptr) => return error_ptr,
    };

    let options = resolver::states_from_countries(state.countries(), &country);
    options_response(&options)
}

/// Lists the district options for the selected country and state.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_districts(
    state: *mut AppState,
    country: *const c_char,
    state_name: *const c_char,
) -> *const c_char {
    let state = match unsafe { state.as_ref() } {
        Some(s) => s,
        None => {
            let error = AppResponse::BadRequest("Null state pointer".to_string());
            return response_to_c_string(&error);
        }
    };

    let country = match c_ptr_to_string(country, "country") {
        Ok(c) => c,
        Err(error_ptr) => return error_ptr,
    };
    let state_name = match c_ptr_to_string(state_name, "state") {
        Ok(s) => s,
        Err(error_ptr) => return error_ptr,
    };

    let options = resolver::districts_from_state(state.countries(), &country, &state_name);
    options_response(&options)
}

/// Lists the city options for the selected country, state and district.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_cities(
    state: *mut AppState,
    country: *const c_char,
    state_name: *const c_char,
    district: *const c_char,
) -> *const c_char {
    let state = match unsafe { state.as_ref() } {
        Some(s) => s,
        None => {
            let error = AppResponse::BadRequest("Null state pointer".to_string());
            return response_to_c_string(&error);
        }
    };

    let country = match c_ptr_to_string(country, "country") {
        Ok(c) => c,
        Err(error_ptr) => return error_ptr,
    };
    let state_name = match c_ptr_to_string(state_name, "state") {
        Ok(s) => s,
        Err(error_ptr) => return error_ptr,
    };
    let district = match c_ptr_to_string(district, "district") {
        Ok(d) => d,
        Err(error_ptr) => return error_ptr,
    };

    let options =
        resolver::cities_from_district(state.countries(), &country, &state_name, &district);
    options_response(&options)
}

/// Applies a selection change to a cascading picker state, clearing every
/// level below the changed one.
///
/// This is the state-transition rule that keeps downstream picks consistent:
/// the host applies the returned selection before it re-queries the dependent
/// option lists, so a dropdown never shows a value its new option list does
/// not contain.
///
/// # Parameters
///
/// * `selection_ptr` - JSON of the current selection
///   (`{"country": ..., "state": ..., "district": ..., "city": ...}`;
///   missing keys read as unselected)
/// * `level_ptr` - The changed level: `country`, `state`, `district` or `city`
/// * `value_ptr` - The newly selected value
///
/// # Returns
///
/// `Ok` with the updated selection JSON, `BadRequest` for an unknown level,
/// or `SerializationError` for a malformed selection payload.
///
/// # Examples
///
/// ```no_run
/// use user_directory_core::select_location;
/// use std::ffi::CString;
///
/// let selection = CString::new(r#"{"country":"India","state":"Kerala","district":"Ernakulam","city":"Kochi"}"#).unwrap();
/// let level = CString::new("country").unwrap();
/// let value = CString::new("Nepal").unwrap();
///
/// // Result carries {"country":"Nepal","state":"","district":"","city":""}
/// let result = select_location(selection.as_ptr(), level.as_ptr(), value.as_ptr());
/// ```
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn select_location(
    selection_ptr: *const c_char,
    level_ptr: *const c_char,
    value_ptr: *const c_char,
) -> *const c_char {
    let selection_str = match c_ptr_to_string(selection_ptr, "selection") {
        Ok(s) => s,
        Err(error_ptr) => return error_ptr,
    };
    let level_str = match c_ptr_to_string(level_ptr, "level") {
        Ok(l) => l,
        Err(error_ptr) => return error_ptr,
    };
    let value = match c_ptr_to_string(value_ptr, "value") {
        Ok(v) => v,
        Err(error_ptr) => return error_ptr,
    };

    let mut selection: LocationSelection = match serde_json::from_str(&selection_str) {
        Ok(s) => s,
        Err(e) => {
            let error = AppResponse::SerializationError(format!("Invalid selection JSON: {e}"));
            return response_to_c_string(&error);
        }
    };

    let level = match SelectionLevel::parse(&level_str) {
        Some(l) => l,
        None => {
            let error = AppResponse::BadRequest(format!("Unknown selection level: {level_str}"));
            return response_to_c_string(&error);
        }
    };

    selection.select(level, &value);

    match serde_json::to_string(&selection) {
        Ok(json) => response_to_c_string(&AppResponse::Ok(json)),
        Err(e) => response_to_c_string(&AppResponse::from(e)),
    }
}

/// Runs the field-validation rules over a form payload.
///
/// # Parameters
///
/// * `json_ptr` - Null-terminated C string with a [`UserInput`] JSON payload
///
/// # Returns
///
/// `Ok("[]")` when every rule passes, or `ValidationError` carrying the JSON
/// list of `{field, message}` errors with dotted field paths
/// (`name.firstName`, ...). Payloads that do not deserialize at all come back
/// as `SerializationError`; an out-of-range `gender` or `bloodGroup` value
/// falls in that category because the enums reject it during parsing.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn validate_user(json_ptr: *const c_char) -> *const c_char {
    let json_str = match c_ptr_to_string(json_ptr, "JSON") {
        Ok(json) => json,
        Err(error_ptr) => return error_ptr,
    };

    let input: UserInput = match serde_json::from_str(&json_str) {
        Ok(i) => i,
        Err(e) => {
            let error = AppResponse::SerializationError(format!("Invalid JSON: {e}"));
            return response_to_c_string(&error);
        }
    };

    let errors = validation::validate_user(&input);
    match serde_json::to_string(&errors) {
        Ok(json) => {
            if errors.is_empty() {
                response_to_c_string(&AppResponse::Ok(json))
            } else {
                response_to_c_string(&AppResponse::ValidationError(json))
            }
        }
        Err(e) => response_to_c_string(&AppResponse::from(e)),
    }
}

/// Inserts a new user record.
///
/// The payload is the id-less field set handed over by the host form after
/// validation; the id is generated here (uuid v4) and returned with the
/// stored record. The record is appended, so listing order follows insertion
/// order.
///
/// # Parameters
///
/// * `state` - Pointer to the session state
/// * `json_ptr` - Null-terminated C string with a [`UserInput`] JSON payload
///
/// # Returns
///
/// `Ok` with the stored record JSON (`{id, ...fields}`), or
/// `SerializationError` for a payload that does not deserialize. The store
/// does not re-run field validation; that happened at the form boundary.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn add_user(state: *mut AppState, json_ptr: *const c_char) -> *const c_char {
    let state = match unsafe { state.as_mut() } {
        Some(s) => s,
        None => {
            let error = AppResponse::BadRequest("Null state pointer".to_string());
            return response_to_c_string(&error);
        }
    };

    let json_str = match c_ptr_to_string(json_ptr, "JSON") {
        Ok(json) => json,
        Err(error_ptr) => return error_ptr,
    };

    let input: UserInput = match serde_json::from_str(&json_str) {
        Ok(i) => i,
        Err(e) => {
            let error = AppResponse::SerializationError(format!("Invalid JSON: {e}"));
            return response_to_c_string(&error);
        }
    };

    let record = state.add_user(input);
    info!("User record added: {}", record.id);
    record_response(&record)
}

/// Replaces an existing user record wholesale.
///
/// The payload must carry the record id; every other field is overwritten
/// with the payload's values, so fields left out are lost rather than merged.
///
/// # Returns
///
/// `Ok` with the updated record JSON, or `NotFound` (store untouched) when no
/// record has the given id.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn update_user(state: *mut AppState, json_ptr: *const c_char) -> *const c_char {
    let state = match unsafe { state.as_mut() } {
        Some(s) => s,
        None => {
            let error = AppResponse::BadRequest("Null state pointer".to_string());
            return response_to_c_string(&error);
        }
    };

    let json_str = match c_ptr_to_string(json_ptr, "JSON") {
        Ok(json) => json,
        Err(error_ptr) => return error_ptr,
    };

    let record: UserRecord = match serde_json::from_str(&json_str) {
        Ok(r) => r,
        Err(e) => {
            let error = AppResponse::SerializationError(format!("Invalid JSON: {e}"));
            return response_to_c_string(&error);
        }
    };

    let id = record.id.clone();
    match state.update_user(&id, record.fields) {
        Some(updated) => {
            info!("User record updated: {}", updated.id);
            record_response(updated)
        }
        None => {
            let error = AppResponse::NotFound("User not found for update".to_string());
            response_to_c_string(&error)
        }
    }
}

/// Retrieves a user record by its id.
///
/// # Returns
///
/// `Ok` with the record JSON if found, or `NotFound` for an empty or unknown
/// id. The host's edit view renders its "User Not Found" state from the
/// latter instead of crashing.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_user_by_id(state: *mut AppState, id: *const c_char) -> *const c_char {
    let state = match unsafe { state.as_ref() } {
        Some(s) => s,
        None => {
            let error = AppResponse::BadRequest("Null state pointer".to_string());
            return response_to_c_string(&error);
        }
    };

    let id_str = match c_ptr_to_string(id, "id") {
        Ok(id) => id,
        Err(error_ptr) => return error_ptr,
    };

    match state.user_by_id(&id_str) {
        Some(record) => record_response(record),
        None => {
            let error = AppResponse::NotFound(format!("No user found with id: {id_str}"));
            response_to_c_string(&error)
        }
    }
}

/// Retrieves all user records in insertion order.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_all_users(state: *mut AppState) -> *const c_char {
    let state = match unsafe { state.as_ref() } {
        Some(s) => s,
        None => {
            let error = AppResponse::BadRequest("Null state pointer".to_string());
            return response_to_c_string(&error);
        }
    };

    match serde_json::to_string(state.users()) {
        Ok(json) => response_to_c_string(&AppResponse::Ok(json)),
        Err(e) => response_to_c_string(&AppResponse::from(e)),
    }
}

/// Deletes a user record by its id.
///
/// Deleting an id that is absent (including one already deleted) leaves the
/// store unchanged, so repeated calls are harmless.
///
/// # Returns
///
/// `Ok` on removal, `NotFound` when no record had the id.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn delete_user_by_id(state: *mut AppState, id: *const c_char) -> *const c_char {
    let state = match unsafe { state.as_mut() } {
        Some(s) => s,
        None => {
            let error = AppResponse::BadRequest("Null state pointer".to_string());
            return response_to_c_string(&error);
        }
    };

    let id_str = match c_ptr_to_string(id, "id") {
        Ok(id) => id,
        Err(error_ptr) => return error_ptr,
    };

    if state.delete_user(&id_str) {
        info!("User record deleted: {id_str}");
        response_to_c_string(&AppResponse::success("User deleted successfully"))
    } else {
        let not_found = AppResponse::NotFound(format!("No user found with id: {id_str}"));
        response_to_c_string(&not_found)
    }
}

/// Sets the shared navigation drawer flag.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn set_drawer_open(state: *mut AppState, open: bool) -> *const c_char {
    let state = match unsafe { state.as_mut() } {
        Some(s) => s,
        None => {
            let error = AppResponse::BadRequest("Null state pointer".to_string());
            return response_to_c_string(&error);
        }
    };

    state.set_drawer_open(open);
    response_to_c_string(&AppResponse::success(if open { "open" } else { "closed" }))
}

/// Reads the shared navigation drawer flag (`true`/`false`). The drawer
/// starts open.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn is_drawer_open(state: *mut AppState) -> *const c_char {
    let state = match unsafe { state.as_ref() } {
        Some(s) => s,
        None => {
            let error = AppResponse::BadRequest("Null state pointer".to_string());
            return response_to_c_string(&error);
        }
    };

    let open = if state.drawer_open() { "true" } else { "false" };
    response_to_c_string(&AppResponse::success(open))
}

/// Frees a response string returned by any function in this library.
///
/// # Safety
///
/// The pointer must have been returned by this library and must not be used
/// after this call. A null pointer is ignored.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn free_response(ptr: *mut c_char) {
    if ptr.is_null() {
        return;
    }
    drop(unsafe { CString::from_raw(ptr) });
}

/// Serializes a record into an `Ok` response C string.
fn record_response(record: &UserRecord) -> *const c_char {
    match serde_json::to_string(record) {
        Ok(json) => response_to_c_string(&AppResponse::Ok(json)),
        Err(e) => response_to_c_string(&AppResponse::from(e)),
    }
}

/// Serializes an option list into an `Ok` response C string.
fn options_response(options: &[SelectOption]) -> *const c_char {
    match serde_json::to_string(options) {
        Ok(json) => response_to_c_string(&AppResponse::Ok(json)),
        Err(e) => response_to_c_string(&AppResponse::from(e)),
    }
}

/// Converts an [`AppResponse`] to a C-compatible string.
///
/// Returns a null pointer if serialization or C string creation fails; the
/// caller frees the string with [`free_response`].
fn response_to_c_string(response: &AppResponse) -> *const c_char {
    let json = match serde_json::to_string(response) {
        Ok(j) => j,
        Err(e) => {
            warn!("Error serializing response: {e}");
            return std::ptr::null();
        }
    };

    match CString::new(json) {
        Ok(c_str) => c_str.into_raw(),
        Err(e) => {
            warn!("Error creating CString: {e}");
            std::ptr::null()
        }
    }
}

/// Converts a C string pointer to a Rust String.
///
/// Handles null pointers and invalid UTF-8 by returning a ready-to-send error
/// response pointer, so boundary functions can bail with `?`-like brevity.
fn c_ptr_to_string(ptr: *const c_char, field_name: &str) -> Result<String, *const c_char> {
    if ptr.is_null() {
        let error = AppResponse::BadRequest(format!("Null {field_name} pointer"));
        return Err(response_to_c_string(&error));
    }

    match unsafe { CStr::from_ptr(ptr).to_str() } {
        Ok(s) => Ok(s.to_string()),
        Err(e) => {
            let error = AppResponse::BadRequest(format!("Invalid UTF-8 in {field_name}: {e}"));
            Err(response_to_c_string(&error))
        }
    }
}
