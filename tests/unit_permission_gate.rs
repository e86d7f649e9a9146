use chrono::Utc;
use gescom::modules::users::model::User;
use gescom_core::{
    ACCESS_DENIED_NOTICE, AccessSubject, AdminOverride, FlashBag, Gate, PermissionSet,
    ROLE_ADMIN, ROLE_USER, catalogue::slugs, toggle_permission,
};
use uuid::Uuid;

fn build_user(roles: &[&str], permissions: &str) -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        email: "test@example.com".to_string(),
        first_name: Some("Test".to_string()),
        name: Some("User".to_string()),
        phone: None,
        roles: roles.iter().map(|r| r.to_string()).collect(),
        status: 0,
        employee: false,
        permissions: permissions.to_string(),
        last_connection: None,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn user_model_exposes_the_subject_capabilities() {
    let mut user = build_user(&[ROLE_ADMIN, ROLE_USER], "USER_CONSULT;");

    assert!(user.is_admin());
    assert_eq!(user.raw_permissions(), "USER_CONSULT;");

    user.set_raw_permissions("SERVICE_CONSULT".to_string());
    assert_eq!(user.permissions, "SERVICE_CONSULT");
}

#[test]
fn granted_slug_allows_access() {
    let gate = Gate::new(AdminOverride::Enabled);
    let user = build_user(&[ROLE_USER], "USER_CONSULT;SERVICE_DELETE;");
    let mut flash = FlashBag::new();

    assert!(gate.is_allowed(&user, slugs::SERVICE_DELETE, &mut flash));
    assert!(flash.is_empty());
}

#[test]
fn missing_slug_denies_with_notice() {
    let gate = Gate::new(AdminOverride::Enabled);
    let user = build_user(&[ROLE_USER], "USER_CONSULT;SERVICE_DELETE;");
    let mut flash = FlashBag::new();

    assert!(!gate.is_allowed(&user, slugs::USER_DELETE, &mut flash));
    assert_eq!(flash.notices().len(), 1);
    assert_eq!(flash.notices()[0].message, ACCESS_DENIED_NOTICE);
}

#[test]
fn admin_with_empty_permissions_depends_on_override_variant() {
    let admin = build_user(&[ROLE_ADMIN], "");
    let mut flash = FlashBag::new();

    let permissive = Gate::new(AdminOverride::Enabled);
    assert!(permissive.is_allowed(&admin, slugs::INVOICE_DELETE, &mut flash));

    let strict = Gate::new(AdminOverride::Disabled);
    assert!(!strict.is_allowed(&admin, slugs::INVOICE_DELETE, &mut flash));
}

#[test]
fn membership_decides_regardless_of_role_when_override_disabled() {
    let gate = Gate::new(AdminOverride::Disabled);
    let mut flash = FlashBag::new();

    let admin = build_user(&[ROLE_ADMIN], "ORDER_CONSULT");
    assert!(gate.is_allowed(&admin, slugs::ORDER_CONSULT, &mut flash));
    assert!(!gate.is_allowed(&admin, slugs::ORDER_DELETE, &mut flash));
}

#[test]
fn toggle_then_check_round_trip() {
    let gate = Gate::new(AdminOverride::Disabled);
    let mut user = build_user(&[ROLE_USER], "USER_CONSULT;SERVICE_DELETE;");
    let mut flash = FlashBag::new();

    let raw = toggle_permission(&mut user, slugs::USER_DELETE, true);
    let decoded = PermissionSet::decode(&raw);
    assert!(decoded.contains("USER_CONSULT"));
    assert!(decoded.contains("SERVICE_DELETE"));
    assert!(decoded.contains("USER_DELETE"));
    assert!(gate.is_allowed(&user, slugs::USER_DELETE, &mut flash));

    toggle_permission(&mut user, slugs::USER_DELETE, false);
    assert!(!gate.is_allowed(&user, slugs::USER_DELETE, &mut flash));
}

#[test]
fn concurrent_toggles_are_last_writer_wins() {
    // Known race, accepted by design: two simultaneous read-modify-write
    // toggles on the same user do not serialize. Whichever raw string is
    // persisted last silently discards the other request's change.
    let base = "USER_CONSULT";

    let mut session_a = build_user(&[ROLE_USER], base);
    let mut session_b = build_user(&[ROLE_USER], base);

    let raw_a = toggle_permission(&mut session_a, slugs::USER_DELETE, true);
    let raw_b = toggle_permission(&mut session_b, slugs::SERVICE_EXPORT, true);

    // The "winning" write carries only its own toggle.
    assert!(PermissionSet::decode(&raw_a).contains("USER_DELETE"));
    assert!(!PermissionSet::decode(&raw_a).contains("SERVICE_EXPORT"));
    assert!(PermissionSet::decode(&raw_b).contains("SERVICE_EXPORT"));
    assert!(!PermissionSet::decode(&raw_b).contains("USER_DELETE"));
}
