//! # Gescom API
//!
//! A REST API built with Rust, Axum, and PostgreSQL for managing business
//! entities (users, services), with a string-based permission model layered
//! on top of roles.
//!
//! ## Authorization model
//!
//! Every guarded endpoint asks the [gescom_core] gate whether the caller may
//! perform the action, identified by a permission slug from the static
//! catalogue. A user's grants are persisted as a single `;`-delimited text
//! column and decoded fresh on every check. Holders of `ROLE_ADMIN` bypass
//! per-slug grants unless the deployment opts out via
//! `AUTHZ_ADMIN_OVERRIDE=false`.
//!
//! ## Architecture
//!
//! ```text
//! crates/gescom-core   # catalogue, permission set codec, gate (pure)
//! src/
//! ├── cli/             # create-admin bootstrap command
//! ├── config/          # env-based configuration (db, jwt, cors, authz)
//! ├── middleware/      # auth extractor and the permission check helper
//! ├── modules/         # feature modules
//! │   ├── auth/        # login
//! │   ├── users/       # user CRUD + permission toggles
//! │   └── services/    # service CRUD
//! └── utils/           # errors, jwt, password hashing
//! ```
//!
//! Each feature module follows a consistent structure: `model.rs` (entities
//! and DTOs), `service.rs` (business logic), `controller.rs` (HTTP
//! handlers), `router.rs` (routes).

pub mod cli;
pub mod config;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;

// Re-export the authorization core for convenience
pub use gescom_core;
