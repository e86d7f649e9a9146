//! The capability interface of entities subject to permission checks.

/// Role label granting the admin override (when the gate has it enabled).
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";

/// Role label carried by every regular account.
pub const ROLE_USER: &str = "ROLE_USER";

/// Narrow view of an account as the gate and the toggle operation see it.
///
/// Anything exposing role labels and the raw permission string can be
/// checked; the core never depends on a concrete user type. The raw string
/// is read fresh on every check and only written back by
/// [`toggle_permission`](crate::gate::toggle_permission) — persisting the
/// updated value is the caller's job.
pub trait AccessSubject {
    /// Role labels held by the subject, e.g. `ROLE_ADMIN`, `ROLE_USER`.
    fn roles(&self) -> &[String];

    /// The persisted `;`-delimited permission string, verbatim.
    fn raw_permissions(&self) -> &str;

    /// Replaces the persisted permission string on the in-memory subject.
    fn set_raw_permissions(&mut self, raw: String);

    /// Whether the subject holds [`ROLE_ADMIN`].
    fn is_admin(&self) -> bool {
        self.roles().iter().any(|role| role == ROLE_ADMIN)
    }
}
