//! Authorization gate configuration.
//!
//! The gate has run in two variants: admins bypassing per-slug grants, or
//! admins subject to the same explicit grants as everyone else. Which one a
//! deployment gets is decided here, not in code paths scattered around the
//! app.

use std::env;

use gescom_core::{AdminOverride, Gate};

#[derive(Clone, Debug)]
pub struct AuthzConfig {
    pub admin_override: AdminOverride,
}

impl AuthzConfig {
    /// Reads `AUTHZ_ADMIN_OVERRIDE`. Anything but an explicit opt-out
    /// (`false`, `0`, `disabled`) keeps the historical behavior of letting
    /// `ROLE_ADMIN` through unconditionally.
    pub fn from_env() -> Self {
        let admin_override = match env::var("AUTHZ_ADMIN_OVERRIDE").ok().as_deref() {
            Some("false") | Some("0") | Some("disabled") => AdminOverride::Disabled,
            _ => AdminOverride::Enabled,
        };

        Self { admin_override }
    }

    pub fn gate(&self) -> Gate {
        Gate::new(self.admin_override)
    }
}

impl Default for AuthzConfig {
    fn default() -> Self {
        Self {
            admin_override: AdminOverride::Enabled,
        }
    }
}
