//! Server-side API backend and business logic.
//!
//! This module contains the backend implementation for the visitor counter: HTTP
//! endpoints, business logic, data access, and the monthly rollover job. The backend
//! uses Axum as the web framework, SeaORM for database operations, and
//! tokio-cron-scheduler for the month-start trigger.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Counting, rollover, and marker issuance
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Typed access to the visit marker cookie
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Logging, database, migrations, CORS, and catch-up rollover
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Scheduler** (`scheduler/`) - Cron job that rolls the counter over each month
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to the controller
//! 2. **Middleware** reads or issues the visit marker cookie
//! 3. **Controller** calls the service and converts the result to a DTO
//! 4. **Service** performs catch-up rollover, then the atomic increment
//! 5. **Data** runs the upsert and converts entities to domain models

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
