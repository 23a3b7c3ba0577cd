//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-memory repository (tests, local runs without a database)
//! - `postgres` - PostgreSQL repository (sqlx, JSONB documents)
//! - `http` - REST API (axum)

pub mod http;
pub mod memory;
pub mod postgres;

pub use http::{build_router, OrganizeExamHandlers};
pub use memory::InMemoryOrganizeExamRepository;
pub use postgres::PostgresOrganizeExamRepository;
