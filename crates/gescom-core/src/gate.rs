//! The authorization gate.
//!
//! Decides, for a (subject, slug) pair, whether access is granted. The
//! decision is infallible: malformed permission strings decode to the empty
//! set, unknown slugs are simply absent, and a denial is an expected
//! control-flow outcome, not an error.

use crate::notices::NoticeSink;
use crate::permission_set::PermissionSet;
use crate::subject::AccessSubject;

/// Message emitted to the user on every denied check.
pub const ACCESS_DENIED_NOTICE: &str = "Access to this page is not authorized";

/// Whether holders of `ROLE_ADMIN` bypass per-slug grants.
///
/// Two variants of the gate have been run in production: one lets admins
/// through unconditionally, the other makes them subject to the same
/// explicit grants as everyone else (so an admin with an empty permission
/// string is locked out). This materially changes security semantics, so it
/// is a deployment decision, not a hardcoded one. The default matches the
/// historical behavior: override enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminOverride {
    #[default]
    Enabled,
    Disabled,
}

/// The allow/deny decision logic, parameterized by the admin-override
/// variant. Cheap to copy and safe to share across concurrent requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gate {
    admin_override: AdminOverride,
}

impl Gate {
    pub fn new(admin_override: AdminOverride) -> Self {
        Self { admin_override }
    }

    pub fn admin_override(&self) -> AdminOverride {
        self.admin_override
    }

    /// Whether `subject` may perform the action guarded by `slug`.
    ///
    /// The subject's permission string is decoded fresh on every call —
    /// grants are never cached across requests. On denial, exactly one
    /// warning is pushed to `notices` before `false` is returned; callers
    /// must short-circuit on `false` without doing any side-effecting work.
    pub fn is_allowed<S>(&self, subject: &S, slug: &str, notices: &mut dyn NoticeSink) -> bool
    where
        S: AccessSubject + ?Sized,
    {
        let granted = PermissionSet::decode(subject.raw_permissions());

        let allowed = granted.contains(slug)
            || (self.admin_override == AdminOverride::Enabled && subject.is_admin());

        if !allowed {
            tracing::warn!(slug, "access denied");
            notices.add_warning(ACCESS_DENIED_NOTICE);
        }

        allowed
    }
}

/// Adds or removes one slug from the subject's permission set.
///
/// A pure read-modify-write on the in-memory subject: decode, apply, drop
/// empty tokens, re-encode, write the raw string back, and return it.
/// Persisting the returned value is the caller's responsibility. The slug is
/// not validated against the catalogue — unknown slugs are toggled
/// mechanically, by design.
pub fn toggle_permission<S>(subject: &mut S, slug: &str, grant: bool) -> String
where
    S: AccessSubject + ?Sized,
{
    let mut set = PermissionSet::decode(subject.raw_permissions());
    if grant {
        set.grant(slug);
    } else {
        set.revoke(slug);
    }
    let raw = set.encode();
    subject.set_raw_permissions(raw.clone());
    raw
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notices::FlashBag;
    use crate::subject::{ROLE_ADMIN, ROLE_USER};

    struct Account {
        roles: Vec<String>,
        permissions: String,
    }

    impl Account {
        fn new(roles: &[&str], permissions: &str) -> Self {
            Self {
                roles: roles.iter().map(|r| r.to_string()).collect(),
                permissions: permissions.to_string(),
            }
        }
    }

    impl AccessSubject for Account {
        fn roles(&self) -> &[String] {
            &self.roles
        }

        fn raw_permissions(&self) -> &str {
            &self.permissions
        }

        fn set_raw_permissions(&mut self, raw: String) {
            self.permissions = raw;
        }
    }

    #[test]
    fn member_slug_is_allowed() {
        let gate = Gate::default();
        let account = Account::new(&[ROLE_USER], "USER_CONSULT;SERVICE_DELETE;");
        let mut flash = FlashBag::new();

        assert!(gate.is_allowed(&account, "SERVICE_DELETE", &mut flash));
        assert!(flash.is_empty());
    }

    #[test]
    fn absent_slug_is_denied_with_one_notice() {
        let gate = Gate::default();
        let account = Account::new(&[ROLE_USER], "USER_CONSULT;SERVICE_DELETE;");
        let mut flash = FlashBag::new();

        assert!(!gate.is_allowed(&account, "USER_DELETE", &mut flash));
        assert_eq!(flash.notices().len(), 1);
        assert_eq!(flash.notices()[0].message, ACCESS_DENIED_NOTICE);
    }

    #[test]
    fn empty_and_malformed_strings_deny_without_error() {
        let gate = Gate::default();
        let mut flash = FlashBag::new();

        for raw in ["", ";", ";;"] {
            let account = Account::new(&[ROLE_USER], raw);
            assert!(!gate.is_allowed(&account, "USER_CONSULT", &mut flash));
        }
        assert_eq!(flash.notices().len(), 3);
    }

    #[test]
    fn unknown_slug_is_just_absent() {
        let gate = Gate::default();
        let account = Account::new(&[ROLE_USER], "USER_CONSULT");
        let mut flash = FlashBag::new();

        assert!(!gate.is_allowed(&account, "NOT_IN_ANY_CATALOGUE", &mut flash));
    }

    #[test]
    fn admin_override_enabled_bypasses_grants() {
        let gate = Gate::new(AdminOverride::Enabled);
        let admin = Account::new(&[ROLE_ADMIN], "");
        let mut flash = FlashBag::new();

        assert!(gate.is_allowed(&admin, "USER_DELETE", &mut flash));
        assert!(flash.is_empty());
    }

    #[test]
    fn admin_override_disabled_requires_explicit_grants() {
        let gate = Gate::new(AdminOverride::Disabled);
        let admin = Account::new(&[ROLE_ADMIN], "");
        let mut flash = FlashBag::new();

        assert!(!gate.is_allowed(&admin, "USER_DELETE", &mut flash));
        assert_eq!(flash.notices().len(), 1);

        let granted_admin = Account::new(&[ROLE_ADMIN], "USER_DELETE");
        assert!(gate.is_allowed(&granted_admin, "USER_DELETE", &mut flash));
    }

    #[test]
    fn toggle_grant_then_check() {
        let gate = Gate::new(AdminOverride::Disabled);
        let mut account = Account::new(&[ROLE_USER], "USER_CONSULT;SERVICE_DELETE;");
        let mut flash = FlashBag::new();

        let raw = toggle_permission(&mut account, "USER_DELETE", true);
        assert_eq!(account.raw_permissions(), raw);

        let decoded = PermissionSet::decode(&raw);
        assert_eq!(decoded.len(), 3);
        assert!(gate.is_allowed(&account, "USER_DELETE", &mut flash));
    }

    #[test]
    fn toggle_revoke_then_check() {
        let gate = Gate::new(AdminOverride::Disabled);
        let mut account = Account::new(&[ROLE_USER], "USER_CONSULT;SERVICE_DELETE");
        let mut flash = FlashBag::new();

        toggle_permission(&mut account, "SERVICE_DELETE", false);
        assert!(!gate.is_allowed(&account, "SERVICE_DELETE", &mut flash));
        assert!(gate.is_allowed(&account, "USER_CONSULT", &mut flash));
    }

    #[test]
    fn toggle_grant_is_idempotent() {
        let mut account = Account::new(&[ROLE_USER], "USER_CONSULT");
        let before = PermissionSet::decode(account.raw_permissions());

        let raw = toggle_permission(&mut account, "USER_CONSULT", true);
        assert_eq!(PermissionSet::decode(&raw), before);
    }

    #[test]
    fn toggle_cleans_stray_delimiters() {
        let mut account = Account::new(&[ROLE_USER], ";USER_CONSULT;;SERVICE_DELETE;");
        let raw = toggle_permission(&mut account, "USER_EXPORT", true);

        assert!(!raw.contains(";;"));
        assert!(!raw.starts_with(';'));
        assert!(!raw.ends_with(';'));
        assert_eq!(PermissionSet::decode(&raw).len(), 3);
    }

    #[test]
    fn toggle_accepts_unknown_slugs() {
        // The catalogue is advisory for the UI, not a validation gate.
        let mut account = Account::new(&[ROLE_USER], "");
        let raw = toggle_permission(&mut account, "LEGACY_SLUG", true);
        assert_eq!(raw, "LEGACY_SLUG");
    }
}
