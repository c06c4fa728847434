//! Database schema definitions
//!
//! This module provides constants for table and column names used with
//! rusqlite. Repository SQL is assembled from these so a column rename
//! stays a one-line change.

/// Application metadata table schema
pub mod app_info {
    /// Table name
    pub const TABLE: &str = "app_info";
    /// Primary key column
    pub const ID: &str = "id";
    /// Application name column
    pub const NAME: &str = "name";
    /// Application version column
    pub const VERSION: &str = "version";
    /// Application description column
    pub const DESCRIPTION: &str = "description";
}

/// Animal types table schema
pub mod animal_types {
    /// Table name
    pub const TABLE: &str = "animal_types";
    /// Primary key column
    pub const ID: &str = "id";
    /// Unique type name column
    pub const NAME: &str = "name";
    /// Free-form description column
    pub const DESCRIPTION: &str = "description";
    /// Creation timestamp column
    pub const CREATED_AT: &str = "created_at";
    /// Last-update timestamp column
    pub const UPDATED_AT: &str = "updated_at";
}

/// Animals table schema
pub mod animals {
    /// Table name
    pub const TABLE: &str = "animals";
    /// Primary key column
    pub const ID: &str = "id";
    /// Ear-tag or collar number column
    pub const TAG_NUMBER: &str = "tag_number";
    /// Animal name column
    pub const NAME: &str = "name";
    /// Breed column
    pub const BREED: &str = "breed";
    /// Sire breed column
    pub const FATHER_BREED: &str = "father_breed";
    /// Dam breed column
    pub const MOTHER_BREED: &str = "mother_breed";
    /// Gender column (MALE, FEMALE, CASTRATED, UNKNOWN)
    pub const GENDER: &str = "gender";
    /// Date of birth column
    pub const DATE_OF_BIRTH: &str = "date_of_birth";
    /// Weight in kilograms column
    pub const WEIGHT: &str = "weight";
    /// Height in centimeters column
    pub const HEIGHT: &str = "height";
    /// Acquisition date column
    pub const ACQUISITION_DATE: &str = "acquisition_date";
    /// Acquisition location column
    pub const ACQUISITION_LOCATION: &str = "acquisition_location";
    /// Exit date column
    pub const EXIT_DATE: &str = "exit_date";
    /// Exit reason column
    pub const EXIT_REASON: &str = "exit_reason";
    /// Age in years column (nullable; legacy files carried NOT NULL)
    pub const AGE: &str = "age";
    /// Foreign key to animal_types
    pub const TYPE_ID: &str = "type_id";
    /// Required description column
    pub const DESCRIPTION: &str = "description";
    /// Image path column (added by migration)
    pub const IMAGE: &str = "image";
    /// Creation timestamp column
    pub const CREATED_AT: &str = "created_at";
    /// Last-update timestamp column
    pub const UPDATED_AT: &str = "updated_at";
}

/// Animal documents table schema
pub mod animal_documents {
    /// Table name
    pub const TABLE: &str = "animal_documents";
    /// Primary key column
    pub const ID: &str = "id";
    /// Foreign key to animals
    pub const ANIMAL_ID: &str = "animal_id";
    /// Stored filename column (opaque key into the file store)
    pub const FILENAME: &str = "filename";
    /// Original upload name column
    pub const ORIGINAL_NAME: &str = "original_name";
    /// Relative path column
    pub const FILE_PATH: &str = "file_path";
    /// File size in bytes column
    pub const FILE_SIZE: &str = "file_size";
    /// MIME type column
    pub const MIME_TYPE: &str = "mime_type";
    /// Creation timestamp column
    pub const CREATED_AT: &str = "created_at";
}

/// Animal health records table schema
pub mod animal_health_records {
    /// Table name
    pub const TABLE: &str = "animal_health_records";
    /// Primary key column
    pub const ID: &str = "id";
    /// Foreign key to animals
    pub const ANIMAL_ID: &str = "animal_id";
    /// Record type column (insemination, deworming)
    pub const RECORD_TYPE: &str = "record_type";
    /// Event date column
    pub const DATE: &str = "date";
    /// Expected delivery date column (insemination only)
    pub const EXPECTED_DELIVERY_DATE: &str = "expected_delivery_date";
    /// Notes column
    pub const NOTES: &str = "notes";
    /// Creation timestamp column
    pub const CREATED_AT: &str = "created_at";
    /// Last-update timestamp column
    pub const UPDATED_AT: &str = "updated_at";
}

/// Cashflow transactions table schema
pub mod transactions {
    /// Table name
    pub const TABLE: &str = "transactions";
    /// Primary key column
    pub const ID: &str = "id";
    /// Transaction type column (income, expense)
    pub const TYPE: &str = "type";
    /// Transaction name column
    pub const NAME: &str = "name";
    /// Amount column
    pub const AMOUNT: &str = "amount";
    /// Transaction date column
    pub const DATE: &str = "date";
    /// Creation timestamp column
    pub const CREATED_AT: &str = "created_at";
    /// Last-update timestamp column
    pub const UPDATED_AT: &str = "updated_at";
}

/// Milk production table schema
pub mod milk_production {
    /// Table name
    pub const TABLE: &str = "milk_production";
    /// Primary key column
    pub const ID: &str = "id";
    /// Foreign key to animals
    pub const ANIMAL_ID: &str = "animal_id";
    /// Production date column
    pub const DATE: &str = "date";
    /// Morning yield column
    pub const MORNING_AMOUNT: &str = "morning_amount";
    /// Evening yield column
    pub const EVENING_AMOUNT: &str = "evening_amount";
    /// Stored total yield column (morning + evening, written on every change)
    pub const TOTAL_AMOUNT: &str = "total_amount";
    /// Notes column
    pub const NOTES: &str = "notes";
    /// Creation timestamp column
    pub const CREATED_AT: &str = "created_at";
    /// Last-update timestamp column
    pub const UPDATED_AT: &str = "updated_at";
}

/// Schema migrations marker table
pub mod schema_migrations {
    /// Table name
    pub const TABLE: &str = "schema_migrations";
    /// Applied migration version column
    pub const VERSION: &str = "version";
    /// Migration name column
    pub const NAME: &str = "name";
    /// Application timestamp column
    pub const APPLIED_AT: &str = "applied_at";
}
