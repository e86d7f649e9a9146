//! # Gescom Core
//!
//! The authorization core of the Gescom API: a static catalogue of
//! permission slugs, a string-encoded per-user permission set, and the gate
//! that decides access before every guarded action.
//!
//! This crate is deliberately free of I/O and web types. It knows nothing
//! about HTTP, sessions, or the database; callers hand it anything that
//! satisfies [`AccessSubject`] and collect denial notices through a
//! [`NoticeSink`].
//!
//! - [`catalogue`]: the full registry of permission slugs, grouped by domain
//! - [`permission_set`]: decoding/encoding of the `;`-delimited permission string
//! - [`subject`]: the capability trait checked entities must expose
//! - [`notices`]: non-blocking user-facing notices emitted on denial
//! - [`gate`]: the allow/deny decision and the permission toggle
//!
//! # Example
//!
//! ```
//! use gescom_core::{AdminOverride, FlashBag, Gate, catalogue::slugs};
//! # use gescom_core::AccessSubject;
//! # struct Account { roles: Vec<String>, permissions: String }
//! # impl AccessSubject for Account {
//! #     fn roles(&self) -> &[String] { &self.roles }
//! #     fn raw_permissions(&self) -> &str { &self.permissions }
//! #     fn set_raw_permissions(&mut self, raw: String) { self.permissions = raw; }
//! # }
//!
//! let gate = Gate::new(AdminOverride::Enabled);
//! let account = Account {
//!     roles: vec!["ROLE_USER".to_string()],
//!     permissions: "USER_CONSULT;SERVICE_DELETE;".to_string(),
//! };
//!
//! let mut flash = FlashBag::new();
//! assert!(gate.is_allowed(&account, slugs::SERVICE_DELETE, &mut flash));
//! assert!(!gate.is_allowed(&account, slugs::USER_DELETE, &mut flash));
//! ```

pub mod catalogue;
pub mod gate;
pub mod notices;
pub mod permission_set;
pub mod subject;

// Re-export commonly used types at crate root
pub use catalogue::{CATALOGUE, PermissionCategory, PermissionEntry, is_known_slug, list_permissions};
pub use gate::{ACCESS_DENIED_NOTICE, AdminOverride, Gate, toggle_permission};
pub use notices::{FlashBag, Notice, NoticeLevel, NoticeSink};
pub use permission_set::PermissionSet;
pub use subject::{AccessSubject, ROLE_ADMIN, ROLE_USER};
