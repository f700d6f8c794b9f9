//! Data model definitions for user profile records.
//!
//! The primary models are [`UserInput`], the id-less payload collected by the
//! host form, and [`UserRecord`], the stored shape that pairs a generated id
//! with those fields. JSON field names follow the host form's camelCase
//! convention so payloads cross the FFI boundary unchanged.

use serde::{Deserialize, Serialize};

/// Name fields of a user profile.
///
/// First and last name are required (3–20 characters); the middle name is
/// optional but, when present, carries the same length bounds. Limits are
/// enforced by [`crate::validation::validate_user`], not by deserialization.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonName {
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub last_name: String,
}

/// Gender selection offered by the host form.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Others,
}

/// The eight standard blood groups.
///
/// Serialized in their clinical notation (`A+`, `AB-`, ...), matching the
/// option values rendered by the host form.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
}

/// A user profile payload as collected by the host form, without an id.
///
/// This is the shape handed to `add_user` and wrapped (with an id) for
/// `update_user`. Optional fields deserialize from absent JSON keys; invalid
/// enum values for `gender` or `bloodGroup` are rejected by serde itself,
/// everything else is checked by [`crate::validation::validate_user`].
///
/// # Examples
///
/// ```rust
/// use user_directory_core::user_model::UserInput;
///
/// let json = r#"{
///     "name": {"firstName": "Jane", "lastName": "Doe"},
///     "gender": "female",
///     "email": "jane@example.com",
///     "phone": "9876543210",
///     "profession": "Engineer",
///     "country": "India",
///     "state": "Kerala",
///     "district": "Ernakulam",
///     "city": "Kochi",
///     "address": "12 Marine Drive"
/// }"#;
///
/// let input: UserInput = serde_json::from_str(json)?;
/// assert_eq!(input.name.first_name, "Jane");
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    pub name: PersonName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<BloodGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    pub email: String,
    pub phone: String,
    pub profession: String,
    pub country: String,
    pub state: String,
    pub district: String,
    pub city: String,
    pub address: String,
}

/// A stored user record: a generated id plus the submitted fields.
///
/// The flattened serialization means a record reads as `{"id": ..., ...fields}`
/// on the wire, exactly the shape the host list and edit views consume. The id
/// is assigned once at creation and never changes; updates replace every other
/// field wholesale.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct UserRecord {
    pub id: String,
    #[serde(flatten)]
    pub fields: UserInput,
}

impl UserRecord {
    /// Creates a record with a fresh uuid v4 id.
    pub fn new(fields: UserInput) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            fields,
        }
    }
}
