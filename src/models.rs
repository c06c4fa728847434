//! Data models for farm record keeping
//!
//! This module contains all data structures used throughout the application:
//! domain objects returned across the command surface (camelCase when
//! serialized), input structures for create and partial-update calls, and
//! the enumerations stored as TEXT columns.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Raised when a TEXT column holds a value outside an enumeration.
#[derive(Debug, Error)]
#[error("unrecognized {kind} value: {value}")]
pub struct EnumParseError {
    kind: &'static str,
    value: String,
}

/// Animal gender as stored in the gender column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    /// Intact male
    Male,
    /// Female
    Female,
    /// Castrated male
    Castrated,
    /// Not recorded
    Unknown,
}

impl Gender {
    /// Storage representation of the variant
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
            Self::Castrated => "CASTRATED",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl Default for Gender {
    fn default() -> Self {
        Self::Unknown
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MALE" => Ok(Self::Male),
            "FEMALE" => Ok(Self::Female),
            "CASTRATED" => Ok(Self::Castrated),
            "UNKNOWN" => Ok(Self::Unknown),
            other => Err(EnumParseError { kind: "gender", value: other.to_string() }),
        }
    }
}

impl ToSql for Gender {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Gender {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()
            .and_then(|s| s.parse().map_err(|e: EnumParseError| FromSqlError::Other(Box::new(e))))
    }
}

/// Health record type as stored in the record_type column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthRecordType {
    /// Insemination event; carries an expected delivery date
    Insemination,
    /// Deworming event
    Deworming,
}

impl HealthRecordType {
    /// Storage representation of the variant
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Insemination => "insemination",
            Self::Deworming => "deworming",
        }
    }
}

impl FromStr for HealthRecordType {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "insemination" => Ok(Self::Insemination),
            "deworming" => Ok(Self::Deworming),
            other => Err(EnumParseError { kind: "record_type", value: other.to_string() }),
        }
    }
}

impl ToSql for HealthRecordType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for HealthRecordType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()
            .and_then(|s| s.parse().map_err(|e: EnumParseError| FromSqlError::Other(Box::new(e))))
    }
}

/// Cashflow direction as stored in the transactions type column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money in
    Income,
    /// Money out
    Expense,
}

impl TransactionKind {
    /// Storage representation of the variant
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl FromStr for TransactionKind {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(EnumParseError { kind: "transaction type", value: other.to_string() }),
        }
    }
}

impl ToSql for TransactionKind {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for TransactionKind {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()
            .and_then(|s| s.parse().map_err(|e: EnumParseError| FromSqlError::Other(Box::new(e))))
    }
}

/// Tri-state field for partial updates on nullable columns.
///
/// A missing key keeps the stored value, an explicit JSON `null` clears it,
/// and a concrete value replaces it. Required columns use a plain `Option`
/// instead, where absence always means keep.
#[derive(Debug, Clone, PartialEq)]
pub enum Patch<T> {
    /// Field was absent from the update; keep the stored value
    Keep,
    /// Field was explicitly null; clear the stored value
    Clear,
    /// Replace the stored value
    Set(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Self::Keep
    }
}

impl<T> Patch<T> {
    /// Merge this patch with the currently stored value.
    #[must_use]
    pub fn resolve(self, current: Option<T>) -> Option<T> {
        match self {
            Self::Keep => current,
            Self::Clear => None,
            Self::Set(value) => Some(value),
        }
    }

    /// True if the field was absent from the update
    #[must_use]
    pub const fn is_keep(&self) -> bool {
        matches!(self, Self::Keep)
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Present-but-null arrives here as Option::None; a missing key never
        // reaches this impl and falls back to Default (Keep) via serde(default).
        Option::<T>::deserialize(deserializer).map(|value| match value {
            Some(v) => Self::Set(v),
            None => Self::Clear,
        })
    }
}

/// Application metadata singleton
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppInfo {
    /// Database primary key
    pub id: i64,
    /// Application name
    pub name: String,
    /// Application version string
    pub version: String,
    /// Application description
    pub description: Option<String>,
}

/// Abbreviated type information nested inside an Animal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalTypeRef {
    /// Type name
    pub name: String,
    /// Type description
    pub description: Option<String>,
}

/// A category of animal (cow, goat, sheep, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalType {
    /// Database primary key
    pub id: i64,
    /// Unique type name
    pub name: String,
    /// Free-form description
    pub description: Option<String>,
    /// Timestamp when the row was created
    pub created_at: NaiveDateTime,
    /// Timestamp of the last update
    pub updated_at: NaiveDateTime,
}

/// A single animal in the herd
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    /// Database primary key
    pub id: i64,
    /// Ear-tag or collar number
    pub tag_number: Option<String>,
    /// Animal name
    pub name: String,
    /// Breed
    pub breed: Option<String>,
    /// Sire breed
    pub father_breed: Option<String>,
    /// Dam breed
    pub mother_breed: Option<String>,
    /// Gender
    pub gender: Gender,
    /// Date of birth
    pub date_of_birth: Option<NaiveDate>,
    /// Weight in kilograms
    pub weight: Option<f64>,
    /// Height in centimeters
    pub height: Option<f64>,
    /// Date the animal was acquired
    pub acquisition_date: Option<NaiveDate>,
    /// Where the animal was acquired
    pub acquisition_location: Option<String>,
    /// Date the animal left the farm
    pub exit_date: Option<NaiveDate>,
    /// Why the animal left the farm
    pub exit_reason: Option<String>,
    /// Age in years
    pub age: Option<i64>,
    /// Foreign key to the animal type
    pub type_id: i64,
    /// Required description
    pub description: String,
    /// Opaque path key into the image store
    pub image: Option<String>,
    /// Related type details, present when the type row still exists
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub animal_type: Option<AnimalTypeRef>,
    /// Timestamp when the row was created
    pub created_at: NaiveDateTime,
    /// Timestamp of the last update
    pub updated_at: NaiveDateTime,
}

/// A document or image attached to an animal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalDocument {
    /// Database primary key
    pub id: i64,
    /// Foreign key to the animal
    pub animal_id: i64,
    /// Stored filename (opaque key into the file store)
    pub filename: String,
    /// Name the file had when uploaded
    pub original_name: String,
    /// Relative path under the managed directory
    pub file_path: Option<String>,
    /// File size in bytes
    pub file_size: Option<i64>,
    /// MIME type
    pub mime_type: Option<String>,
    /// Timestamp when the row was created
    pub created_at: NaiveDateTime,
}

/// A health event for an animal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecord {
    /// Database primary key
    pub id: i64,
    /// Foreign key to the animal
    pub animal_id: i64,
    /// Kind of event
    pub record_type: HealthRecordType,
    /// Date of the event
    pub date: NaiveDate,
    /// Expected delivery date, meaningful for insemination records
    pub expected_delivery_date: Option<NaiveDate>,
    /// Notes
    pub notes: Option<String>,
    /// Timestamp when the row was created
    pub created_at: NaiveDateTime,
    /// Timestamp of the last update
    pub updated_at: NaiveDateTime,
}

/// A cashflow transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Database primary key
    pub id: i64,
    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Transaction name
    pub name: String,
    /// Amount
    pub amount: f64,
    /// Transaction date
    pub date: NaiveDate,
    /// Timestamp when the row was created
    pub created_at: NaiveDateTime,
    /// Timestamp of the last update
    pub updated_at: NaiveDateTime,
}

/// A daily milk production record for one animal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilkRecord {
    /// Database primary key
    pub id: i64,
    /// Foreign key to the animal
    pub animal_id: i64,
    /// Production date
    pub date: NaiveDate,
    /// Morning yield
    pub morning_amount: f64,
    /// Evening yield
    pub evening_amount: f64,
    /// Stored total (morning + evening, recomputed at every write)
    pub total_amount: f64,
    /// Notes
    pub notes: Option<String>,
    /// Timestamp when the row was created
    pub created_at: NaiveDateTime,
    /// Timestamp of the last update
    pub updated_at: NaiveDateTime,
}

/// Per-type animal count, zero-filled for types without animals
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeCount {
    /// Foreign key of the counted type
    pub type_id: i64,
    /// Type name
    pub name: String,
    /// Number of animals of this type
    pub count: i64,
}

/// Cashflow totals computed on read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashflowSummary {
    /// Sum of income amounts
    pub total_income: f64,
    /// Sum of expense amounts
    pub total_expense: f64,
    /// total_income - total_expense
    pub balance: f64,
    /// Number of transaction rows
    pub transaction_count: i64,
}

/// Income and expense totals for one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCashflow {
    /// Calendar month, 1-12
    pub month: u32,
    /// Sum of income amounts in the month
    pub income: f64,
    /// Sum of expense amounts in the month
    pub expense: f64,
}

/// Milk production statistics computed on read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilkStats {
    /// Number of production records
    pub record_count: i64,
    /// Sum of total_amount over all records
    pub total_amount: f64,
    /// Average total_amount per record
    pub average_amount: f64,
    /// Sum of total_amount over the trailing seven days
    pub last_seven_days: f64,
}

/// A future insemination delivery or deworming event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingEvent {
    /// Health record the event derives from
    pub record_id: i64,
    /// Animal the event belongs to
    pub animal_id: i64,
    /// Animal name for display
    pub animal_name: String,
    /// Kind of event
    pub record_type: HealthRecordType,
    /// The delivery date for inseminations, the record date for dewormings
    pub event_date: NaiveDate,
    /// Notes from the record
    pub notes: Option<String>,
}

/// Schema state after the migration runner has finished
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaStatus {
    /// Highest applied migration version
    pub version: i64,
    /// True when a migration step failed and was rolled back
    pub degraded: bool,
    /// Human-readable failure descriptions, empty when healthy
    pub failures: Vec<String>,
}

/// Data for creating a new animal type
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAnimalType {
    /// Unique type name
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
}

/// Partial update for an animal type
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAnimalType {
    /// New type name, absent to keep
    #[serde(default)]
    pub name: Option<String>,
    /// Description patch
    #[serde(default)]
    pub description: Patch<String>,
}

/// Data for creating a new animal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAnimal {
    /// Ear-tag or collar number
    #[serde(default)]
    pub tag_number: Option<String>,
    /// Animal name
    pub name: String,
    /// Breed
    #[serde(default)]
    pub breed: Option<String>,
    /// Sire breed
    #[serde(default)]
    pub father_breed: Option<String>,
    /// Dam breed
    #[serde(default)]
    pub mother_breed: Option<String>,
    /// Gender, UNKNOWN when absent
    #[serde(default)]
    pub gender: Gender,
    /// Date of birth
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    /// Weight in kilograms
    #[serde(default)]
    pub weight: Option<f64>,
    /// Height in centimeters
    #[serde(default)]
    pub height: Option<f64>,
    /// Date the animal was acquired
    #[serde(default)]
    pub acquisition_date: Option<NaiveDate>,
    /// Where the animal was acquired
    #[serde(default)]
    pub acquisition_location: Option<String>,
    /// Date the animal left the farm
    #[serde(default)]
    pub exit_date: Option<NaiveDate>,
    /// Why the animal left the farm
    #[serde(default)]
    pub exit_reason: Option<String>,
    /// Age in years
    #[serde(default)]
    pub age: Option<i64>,
    /// Foreign key to the animal type
    pub type_id: i64,
    /// Required description
    pub description: String,
    /// Opaque path key into the image store
    #[serde(default)]
    pub image: Option<String>,
}

/// Partial update for an animal
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAnimal {
    /// Tag number patch
    #[serde(default)]
    pub tag_number: Patch<String>,
    /// New name, absent to keep
    #[serde(default)]
    pub name: Option<String>,
    /// Breed patch
    #[serde(default)]
    pub breed: Patch<String>,
    /// Sire breed patch
    #[serde(default)]
    pub father_breed: Patch<String>,
    /// Dam breed patch
    #[serde(default)]
    pub mother_breed: Patch<String>,
    /// New gender, absent to keep
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Date of birth patch
    #[serde(default)]
    pub date_of_birth: Patch<NaiveDate>,
    /// Weight patch
    #[serde(default)]
    pub weight: Patch<f64>,
    /// Height patch
    #[serde(default)]
    pub height: Patch<f64>,
    /// Acquisition date patch
    #[serde(default)]
    pub acquisition_date: Patch<NaiveDate>,
    /// Acquisition location patch
    #[serde(default)]
    pub acquisition_location: Patch<String>,
    /// Exit date patch
    #[serde(default)]
    pub exit_date: Patch<NaiveDate>,
    /// Exit reason patch
    #[serde(default)]
    pub exit_reason: Patch<String>,
    /// Age patch
    #[serde(default)]
    pub age: Patch<i64>,
    /// New type id, absent to keep
    #[serde(default)]
    pub type_id: Option<i64>,
    /// New description, absent to keep
    #[serde(default)]
    pub description: Option<String>,
    /// Image patch
    #[serde(default)]
    pub image: Patch<String>,
}

/// Data for attaching a new document to an animal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAnimalDocument {
    /// Foreign key to the animal
    pub animal_id: i64,
    /// Stored filename (opaque key into the file store)
    pub filename: String,
    /// Name the file had when uploaded
    pub original_name: String,
    /// Relative path under the managed directory
    #[serde(default)]
    pub file_path: Option<String>,
    /// File size in bytes
    #[serde(default)]
    pub file_size: Option<i64>,
    /// MIME type
    #[serde(default)]
    pub mime_type: Option<String>,
}

/// Partial update for an animal document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAnimalDocument {
    /// New stored filename, absent to keep
    #[serde(default)]
    pub filename: Option<String>,
    /// New original name, absent to keep
    #[serde(default)]
    pub original_name: Option<String>,
    /// Path patch
    #[serde(default)]
    pub file_path: Patch<String>,
    /// Size patch
    #[serde(default)]
    pub file_size: Patch<i64>,
    /// MIME type patch
    #[serde(default)]
    pub mime_type: Patch<String>,
}

/// Data for creating a new health record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHealthRecord {
    /// Foreign key to the animal
    pub animal_id: i64,
    /// Kind of event
    pub record_type: HealthRecordType,
    /// Date of the event
    pub date: NaiveDate,
    /// Expected delivery date, meaningful for insemination records
    #[serde(default)]
    pub expected_delivery_date: Option<NaiveDate>,
    /// Notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// Partial update for a health record
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHealthRecord {
    /// New record type, absent to keep
    #[serde(default)]
    pub record_type: Option<HealthRecordType>,
    /// New event date, absent to keep
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Expected delivery date patch
    #[serde(default)]
    pub expected_delivery_date: Patch<NaiveDate>,
    /// Notes patch
    #[serde(default)]
    pub notes: Patch<String>,
}

/// Data for creating a new cashflow transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Transaction name
    pub name: String,
    /// Amount
    pub amount: f64,
    /// Transaction date
    pub date: NaiveDate,
}

/// Partial update for a cashflow transaction
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransaction {
    /// New direction, absent to keep
    #[serde(rename = "type", default)]
    pub kind: Option<TransactionKind>,
    /// New name, absent to keep
    #[serde(default)]
    pub name: Option<String>,
    /// New amount, absent to keep
    #[serde(default)]
    pub amount: Option<f64>,
    /// New date, absent to keep
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Data for creating a new milk production record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMilkRecord {
    /// Foreign key to the animal
    pub animal_id: i64,
    /// Production date
    pub date: NaiveDate,
    /// Morning yield
    pub morning_amount: f64,
    /// Evening yield
    pub evening_amount: f64,
    /// Notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// Partial update for a milk production record
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMilkRecord {
    /// New date, absent to keep
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// New morning yield, absent to keep
    #[serde(default)]
    pub morning_amount: Option<f64>,
    /// New evening yield, absent to keep
    #[serde(default)]
    pub evening_amount: Option<f64>,
    /// Notes patch
    #[serde(default)]
    pub notes: Patch<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_distinguishes_absent_from_null() {
        let update: UpdateAnimalType = serde_json::from_str("{}").expect("empty update");
        assert!(update.description.is_keep());

        let update: UpdateAnimalType =
            serde_json::from_str(r#"{"description":null}"#).expect("null update");
        assert_eq!(update.description, Patch::Clear);

        let update: UpdateAnimalType =
            serde_json::from_str(r#"{"description":"dairy herd"}"#).expect("set update");
        assert_eq!(update.description, Patch::Set("dairy herd".to_string()));
    }

    #[test]
    fn gender_round_trips_through_storage_text() {
        for gender in [Gender::Male, Gender::Female, Gender::Castrated, Gender::Unknown] {
            assert_eq!(gender.as_str().parse::<Gender>().expect("parse"), gender);
        }
        assert!("HEIFER".parse::<Gender>().is_err());
    }

    #[test]
    fn animal_serializes_type_sub_object_only_when_joined() {
        let now = NaiveDate::from_ymd_opt(2024, 1, 1)
            .expect("date")
            .and_hms_opt(0, 0, 0)
            .expect("time");
        let mut animal = Animal {
            id: 1,
            tag_number: None,
            name: "Bessie".to_string(),
            breed: None,
            father_breed: None,
            mother_breed: None,
            gender: Gender::Female,
            date_of_birth: None,
            weight: None,
            height: None,
            acquisition_date: None,
            acquisition_location: None,
            exit_date: None,
            exit_reason: None,
            age: None,
            type_id: 1,
            description: "dairy".to_string(),
            image: None,
            animal_type: None,
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(&animal).expect("serialize");
        assert!(json.get("type").is_none());
        assert_eq!(json["tagNumber"], serde_json::Value::Null);

        animal.animal_type =
            Some(AnimalTypeRef { name: "Cow".to_string(), description: None });
        let json = serde_json::to_value(&animal).expect("serialize");
        assert_eq!(json["type"]["name"], "Cow");
    }
}
