//! Lead Management API Library
//!
//! This library provides the core functionality for the lead management
//! service: the lead record schema, the validation engine, the Postgres-backed
//! lead store, and the HTTP handlers that compose them.
//!
//! # Modules
//!
//! - `config`: Configuration management.
//! - `db`: Database connection and pool management.
//! - `db_storage`: Lead collection storage operations.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `models`: Lead record schema and enumerations.
//! - `validation`: Lead payload validation and normalization.

pub mod config;
pub mod db;
pub mod db_storage;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod validation;
