//! Application configuration, loaded from environment variables.
//!
//! - [`authz`]: which admin-override variant the authorization gate runs
//! - [`cors`]: allowed CORS origins
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`jwt`]: JWT signing secret and token lifetime

pub mod authz;
pub mod cors;
pub mod database;
pub mod jwt;
