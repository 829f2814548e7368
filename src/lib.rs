//! End-to-end test suite for the GoRest public API.
//!
//! GoRest (<https://gorest.co.in>) exposes user CRUD over REST under
//! `/public/v2/users` and over a single GraphQL endpoint under
//! `/public/v2/graphql`. This crate is the support library for the scenario
//! suite in `tests/`:
//!
//! - `config`: layered configuration (optional `gorest.toml`, environment
//!   overrides) holding the base URL and bearer token
//! - `client`: the pre-configured HTTP client every scenario shares
//! - `types`: user payloads and response shapes
//! - `graphql`: query/mutation document builders for the unified endpoint
//! - `testdata`: injectable uniqueness-suffix generation for created emails
//! - `scenario`: per-test context combining client and suffix source
//!
//! Scenarios run against the live API when a token is configured
//! (`GOREST_API_TOKEN`, optionally via `.env`) and skip otherwise. A
//! wiremock-backed mirror of the same call chains keeps the suite runnable
//! offline.

pub mod client;
pub mod config;
pub mod error;
pub mod graphql;
pub mod scenario;
pub mod testdata;
pub mod types;

// Re-export main types
pub use client::{ApiClient, ApiResponse};
pub use config::{Config, SecretToken};
pub use error::{ApiError, ConfigError};
pub use scenario::ScenarioContext;
