//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework, SeaORM for the user registry and
//! inspection records, and `object_store` for board documents and room images.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Submission pipeline and blob uploads
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, the parsed form and parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (lazy database handle, uploader)
//! - **Startup** (`startup`) - Database connection, migrations and tracing setup
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Util** (`util/`) - Request time budget
//!
//! # Request Flow
//!
//! 1. **Router** enforces the body limit and routes to the controller
//! 2. **Controller** starts the time budget and drains the multipart form
//! 3. **Service** validates the UDISE code, checks the registry, uploads files
//! 4. **Data** inserts the inspection record and converts it to a domain model
//! 5. **Controller** converts the domain model to a DTO and returns 201

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
