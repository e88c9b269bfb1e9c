//! Server-side request pipeline and business logic.
//!
//! This module contains the complete backend: routing, payload validation, persistence
//! of campgrounds and their reviews, server-rendered views and error normalization.
//! The backend uses Axum as the web framework, SeaORM for database operations and
//! `dioxus-ssr` for rendering pages.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, ID parsing, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic and transaction boundaries
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Schema** (`schema/`) - Declarative payload schemas and their validator
//! - **Error Layer** (`error/`) - Application error types and the error page response
//! - **Middleware** (`middleware/`) - Validated extractor, method override, panic handling
//! - **View** (`view/`) - HTML pages rendered from domain models
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Logger initialization and database migrations
//! - **Router** (`router`) - Route table, fallback, and the layered application service
//!
//! # Request Flow
//!
//! 1. **Method override** rewrites `POST ?_method=...` requests before routing
//! 2. **Router** matches method and path, or falls through to the not-found handler
//! 3. **Valid<T>** decodes and validates the payload against its schema
//! 4. **Controller** parses the path ID, converts DTOs to params, calls the service
//! 5. **Service** runs the operation, inside a transaction when it spans several writes
//! 6. **Data** queries the database and converts entities to domain models
//! 7. **Controller** renders a view or redirects; any `AppError` renders the error page

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod schema;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
pub mod view;
