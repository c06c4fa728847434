//! Farmstead - Farm Record Keeping
//!
//! The data-access and schema-evolution layer of a SQLite-backed
//! farm-management desktop application.
//!
//! # Features
//!
//! - Typed repositories for animals, animal types, cashflow transactions,
//!   health records, milk production and document attachments
//! - Versioned in-place schema migrations, safe to run on every startup
//! - Partial updates that distinguish "field absent" from "field null"
//! - Aggregate reads: type counts, cashflow summaries, milk statistics,
//!   upcoming health events
//! - An async command surface for the desktop shell

/// Command surface invoked by the desktop shell
pub mod commands;
/// Configuration management
pub mod config;
/// Database connection handling
pub mod db;
/// Error types
pub mod error;
/// Logging setup and utilities
pub mod logging;
/// Metrics collection
pub mod metrics;
/// Schema migrations
pub mod migrations;
/// Data models and structures
pub mod models;
/// Repository pattern for data access
pub mod repository;
/// Database schema definitions
pub mod schema;
/// Input validation and sanitization
pub mod validation;

// Re-export key components for easier access
pub use commands::App;
pub use config::AppConfig;
pub use db::Database;
pub use error::{FarmError, Result};
pub use models::{
    Animal, AnimalDocument, AnimalType, CashflowSummary, Gender, HealthRecord, HealthRecordType,
    MilkRecord, Patch, Transaction, TransactionKind,
};
