//! Command surface
//!
//! One named procedure per repository operation, exposed as async methods
//! on [`App`] so the desktop shell can await them at its invocation
//! boundary; execution is synchronous underneath, serialized by the
//! storage engine. Arguments and results are plain serde data; absence is
//! `None`, and failures serialize to an [`ErrorResponse`] with a message
//! field.

use chrono::Local;
use serde::Serialize;
use tracing::instrument;

use crate::config::AppConfig;
use crate::db::Database;
use crate::error::{FarmError, Result};
use crate::logging::OperationTimer;
use crate::metrics;
use crate::models::{
    Animal, AnimalDocument, AnimalType, AppInfo, CashflowSummary, HealthRecord, MilkRecord,
    MilkStats, MonthlyCashflow, NewAnimal, NewAnimalDocument, NewAnimalType, NewHealthRecord,
    NewMilkRecord, NewTransaction, Patch, SchemaStatus, Transaction, TypeCount, UpcomingEvent,
    UpdateAnimal, UpdateAnimalDocument, UpdateAnimalType, UpdateHealthRecord, UpdateMilkRecord,
    UpdateTransaction,
};
use crate::repository::{animal_types, animals, app_info, cashflow, documents, health, milk};
use crate::validation::InputValidator;

pub use crate::repository::cashflow::TransactionFilter;

/// Wire shape of a failed procedure call
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Human-readable failure description
    pub message: String,
}

impl From<&FarmError> for ErrorResponse {
    fn from(err: &FarmError) -> Self {
        Self { message: err.to_string() }
    }
}

impl From<FarmError> for ErrorResponse {
    fn from(err: FarmError) -> Self {
        Self::from(&err)
    }
}

/// Application handle owning the database; each public method is one
/// remote-invocable procedure.
pub struct App {
    db: Database,
}

impl App {
    /// Open the configured database and bring its schema up to date.
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let db = Database::with_pool_size(&config.database_path(), config.database.max_connections)?;
        Ok(Self::with_database(db))
    }

    /// Wrap an already-opened database.
    #[must_use]
    pub fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Borrow the underlying storage handle.
    #[must_use]
    pub fn database(&self) -> &Database {
        &self.db
    }

    // ---- application metadata ----

    /// Current application metadata row.
    pub async fn get_app_info(&self) -> Result<Option<AppInfo>> {
        app_info::get(&self.db)
    }

    /// Schema state recorded by the migration runner at startup.
    pub async fn schema_status(&self) -> SchemaStatus {
        self.db.schema_status().clone()
    }

    // ---- animal types ----

    /// All animal types, ordered by name.
    #[instrument(skip(self))]
    pub async fn get_animal_types(&self) -> Result<Vec<AnimalType>> {
        self.timed("animal_types", "list", || animal_types::list(&self.db))
    }

    /// One animal type, or None when the id does not exist.
    pub async fn get_animal_type_by_id(&self, id: i64) -> Result<Option<AnimalType>> {
        self.timed("animal_types", "get", || animal_types::get_by_id(&self.db, id))
    }

    /// Create an animal type.
    #[instrument(skip(self, new_type))]
    pub async fn create_animal_type(&self, new_type: NewAnimalType) -> Result<AnimalType> {
        InputValidator::validate_name(&new_type.name)?;
        self.timed("animal_types", "create", || animal_types::create(&self.db, new_type))
    }

    /// Partially update an animal type.
    pub async fn update_animal_type(
        &self,
        id: i64,
        update: UpdateAnimalType,
    ) -> Result<Option<AnimalType>> {
        if let Some(name) = &update.name {
            InputValidator::validate_name(name)?;
        }
        self.timed("animal_types", "update", || animal_types::update(&self.db, id, update))
    }

    /// Delete an animal type; its animals are removed by the storage cascade.
    pub async fn delete_animal_type(&self, id: i64) -> Result<()> {
        self.timed("animal_types", "delete", || animal_types::delete(&self.db, id))
    }

    /// Animal counts per type, zero-filled.
    pub async fn get_animal_type_counts(&self) -> Result<Vec<TypeCount>> {
        self.timed("animal_types", "counts", || animal_types::counts(&self.db))
    }

    /// The type with the most animals, if any type exists.
    pub async fn get_most_common_animal_type(&self) -> Result<Option<TypeCount>> {
        self.timed("animal_types", "most_common", || animal_types::most_common(&self.db))
    }

    // ---- animals ----

    /// All animals with their type details.
    #[instrument(skip(self))]
    pub async fn get_animals(&self) -> Result<Vec<Animal>> {
        self.timed("animals", "list", || animals::list(&self.db))
    }

    /// The animals of one type.
    pub async fn get_animals_by_type(&self, type_id: i64) -> Result<Vec<Animal>> {
        self.timed("animals", "list_by_type", || animals::list_by_type(&self.db, type_id))
    }

    /// One animal, or None when the id does not exist.
    pub async fn get_animal_by_id(&self, id: i64) -> Result<Option<Animal>> {
        self.timed("animals", "get", || animals::get_by_id(&self.db, id))
    }

    /// Create an animal.
    #[instrument(skip(self, new_animal))]
    pub async fn create_animal(&self, new_animal: NewAnimal) -> Result<Animal> {
        InputValidator::validate_name(&new_animal.name)?;
        if let Some(tag) = &new_animal.tag_number {
            InputValidator::validate_tag_number(tag)?;
        }
        if let Some(weight) = new_animal.weight {
            InputValidator::validate_measurement("weight", weight)?;
        }
        if let Some(height) = new_animal.height {
            InputValidator::validate_measurement("height", height)?;
        }
        self.timed("animals", "create", || animals::create(&self.db, new_animal))
    }

    /// Partially update an animal.
    pub async fn update_animal(&self, id: i64, update: UpdateAnimal) -> Result<Option<Animal>> {
        if let Some(name) = &update.name {
            InputValidator::validate_name(name)?;
        }
        if let Patch::Set(tag) = &update.tag_number {
            InputValidator::validate_tag_number(tag)?;
        }
        if let Patch::Set(weight) = update.weight {
            InputValidator::validate_measurement("weight", weight)?;
        }
        if let Patch::Set(height) = update.height {
            InputValidator::validate_measurement("height", height)?;
        }
        self.timed("animals", "update", || animals::update(&self.db, id, update))
    }

    /// Delete an animal.
    pub async fn delete_animal(&self, id: i64) -> Result<()> {
        self.timed("animals", "delete", || animals::delete(&self.db, id))
    }

    // ---- cashflow ----

    /// Transactions matching the filter, newest first.
    pub async fn get_transactions(&self, filter: TransactionFilter) -> Result<Vec<Transaction>> {
        self.timed("transactions", "list", || cashflow::list(&self.db, &filter))
    }

    /// One transaction, or None when the id does not exist.
    pub async fn get_transaction_by_id(&self, id: i64) -> Result<Option<Transaction>> {
        self.timed("transactions", "get", || cashflow::get_by_id(&self.db, id))
    }

    /// Create a transaction.
    #[instrument(skip(self, new_transaction))]
    pub async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        InputValidator::validate_name(&new_transaction.name)?;
        InputValidator::validate_amount("amount", new_transaction.amount)?;
        self.timed("transactions", "create", || cashflow::create(&self.db, new_transaction))
    }

    /// Partially update a transaction.
    pub async fn update_transaction(
        &self,
        id: i64,
        update: UpdateTransaction,
    ) -> Result<Option<Transaction>> {
        if let Some(name) = &update.name {
            InputValidator::validate_name(name)?;
        }
        if let Some(amount) = update.amount {
            InputValidator::validate_amount("amount", amount)?;
        }
        self.timed("transactions", "update", || cashflow::update(&self.db, id, update))
    }

    /// Delete a transaction.
    pub async fn delete_transaction(&self, id: i64) -> Result<()> {
        self.timed("transactions", "delete", || cashflow::delete(&self.db, id))
    }

    /// Income, expense, balance and row count over all transactions.
    pub async fn get_cashflow_summary(&self) -> Result<CashflowSummary> {
        self.timed("transactions", "summary", || cashflow::summary(&self.db))
    }

    /// Per-month income and expense totals for one year.
    pub async fn get_monthly_cashflow(&self, year: i32) -> Result<Vec<MonthlyCashflow>> {
        self.timed("transactions", "monthly_stats", || cashflow::monthly_stats(&self.db, year))
    }

    // ---- documents ----

    /// The documents attached to one animal, oldest first.
    pub async fn get_animal_documents(&self, animal_id: i64) -> Result<Vec<AnimalDocument>> {
        self.timed("documents", "list", || documents::list_for_animal(&self.db, animal_id))
    }

    /// One document, or None when the id does not exist.
    pub async fn get_animal_document_by_id(&self, id: i64) -> Result<Option<AnimalDocument>> {
        self.timed("documents", "get", || documents::get_by_id(&self.db, id))
    }

    /// Record a document attachment; the file itself lives in the external
    /// file store and is referenced by the opaque filename key.
    pub async fn create_animal_document(
        &self,
        new_document: NewAnimalDocument,
    ) -> Result<AnimalDocument> {
        InputValidator::validate_filename(&new_document.filename)?;
        self.timed("documents", "create", || documents::create(&self.db, new_document))
    }

    /// Partially update a document attachment.
    pub async fn update_animal_document(
        &self,
        id: i64,
        update: UpdateAnimalDocument,
    ) -> Result<Option<AnimalDocument>> {
        if let Some(filename) = &update.filename {
            InputValidator::validate_filename(filename)?;
        }
        self.timed("documents", "update", || documents::update(&self.db, id, update))
    }

    /// Delete a document attachment row.
    pub async fn delete_animal_document(&self, id: i64) -> Result<()> {
        self.timed("documents", "delete", || documents::delete(&self.db, id))
    }

    // ---- health records ----

    /// The health records of one animal, newest first.
    pub async fn get_health_records(&self, animal_id: i64) -> Result<Vec<HealthRecord>> {
        self.timed("health_records", "list", || health::list_for_animal(&self.db, animal_id))
    }

    /// One health record, or None when the id does not exist.
    pub async fn get_health_record_by_id(&self, id: i64) -> Result<Option<HealthRecord>> {
        self.timed("health_records", "get", || health::get_by_id(&self.db, id))
    }

    /// Create a health record.
    #[instrument(skip(self, new_record))]
    pub async fn create_health_record(&self, new_record: NewHealthRecord) -> Result<HealthRecord> {
        self.timed("health_records", "create", || health::create(&self.db, new_record))
    }

    /// Partially update a health record.
    pub async fn update_health_record(
        &self,
        id: i64,
        update: UpdateHealthRecord,
    ) -> Result<Option<HealthRecord>> {
        self.timed("health_records", "update", || health::update(&self.db, id, update))
    }

    /// Delete a health record.
    pub async fn delete_health_record(&self, id: i64) -> Result<()> {
        self.timed("health_records", "delete", || health::delete(&self.db, id))
    }

    /// Future insemination deliveries and dewormings across the herd,
    /// soonest first, at most ten.
    pub async fn get_upcoming_events(&self) -> Result<Vec<UpcomingEvent>> {
        let today = Local::now().date_naive();
        self.timed("health_records", "upcoming", || health::upcoming_events(&self.db, today))
    }

    // ---- milk production ----

    /// All milk production records, newest date first.
    pub async fn get_milk_records(&self) -> Result<Vec<MilkRecord>> {
        self.timed("milk_production", "list", || milk::list(&self.db))
    }

    /// The milk production records of one animal, newest date first.
    pub async fn get_milk_records_for_animal(&self, animal_id: i64) -> Result<Vec<MilkRecord>> {
        self.timed("milk_production", "list_for_animal", || {
            milk::list_for_animal(&self.db, animal_id)
        })
    }

    /// One milk production record, or None when the id does not exist.
    pub async fn get_milk_record_by_id(&self, id: i64) -> Result<Option<MilkRecord>> {
        self.timed("milk_production", "get", || milk::get_by_id(&self.db, id))
    }

    /// Create a milk production record.
    #[instrument(skip(self, new_record))]
    pub async fn create_milk_record(&self, new_record: NewMilkRecord) -> Result<MilkRecord> {
        InputValidator::validate_amount("morning_amount", new_record.morning_amount)?;
        InputValidator::validate_amount("evening_amount", new_record.evening_amount)?;
        self.timed("milk_production", "create", || milk::create(&self.db, new_record))
    }

    /// Partially update a milk production record.
    pub async fn update_milk_record(
        &self,
        id: i64,
        update: UpdateMilkRecord,
    ) -> Result<Option<MilkRecord>> {
        if let Some(morning) = update.morning_amount {
            InputValidator::validate_amount("morning_amount", morning)?;
        }
        if let Some(evening) = update.evening_amount {
            InputValidator::validate_amount("evening_amount", evening)?;
        }
        self.timed("milk_production", "update", || milk::update(&self.db, id, update))
    }

    /// Delete a milk production record.
    pub async fn delete_milk_record(&self, id: i64) -> Result<()> {
        self.timed("milk_production", "delete", || milk::delete(&self.db, id))
    }

    /// Count, sum, average and trailing-7-day total over all records.
    pub async fn get_milk_stats(&self) -> Result<MilkStats> {
        let today = Local::now().date_naive();
        self.timed("milk_production", "stats", || milk::stats(&self.db, today))
    }

    fn timed<T>(
        &self,
        entity: &'static str,
        operation: &'static str,
        call: impl FnOnce() -> Result<T>,
    ) -> Result<T> {
        let timer = OperationTimer::new(&format!("{entity}.{operation}"));
        metrics::record_operation(entity, operation);

        let result = call();
        metrics::record_duration(entity, timer.elapsed());
        if result.is_err() {
            metrics::record_error(entity);
        }

        result
    }
}
