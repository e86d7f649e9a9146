//! The permission catalogue.
//!
//! A static, ordered registry of every permission slug the application
//! knows, grouped by functional domain and paired with the label shown in
//! the permission-management UI. The taxonomy is part of the code surface,
//! not business data: it changes with deployments, never at runtime, so it
//! lives in a `const` table rather than a database table.
//!
//! Declaration order is meaningful — it drives presentation order in the
//! toggle UI, both for categories and for entries within a category.

use serde::Serialize;

/// One grantable permission: a stable slug plus its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PermissionEntry {
    pub slug: &'static str,
    pub label: &'static str,
}

/// A named group of permissions covering one functional domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PermissionCategory {
    pub name: &'static str,
    pub entries: &'static [PermissionEntry],
}

/// Permission slug constants.
///
/// Controllers reference these instead of spelling string literals, so a
/// renamed slug is a one-line change plus the compiler finding every caller.
pub mod slugs {
    // =========================================================================
    // Users
    // =========================================================================

    pub const USER_CONSULT: &str = "USER_CONSULT";
    pub const USER_CREATE_UPDATE: &str = "USER_CREATE_UPDATE";
    pub const USER_UPDATE_PWD: &str = "USER_UPDATE_PWD";
    pub const USER_DELETE: &str = "USER_DELETE";
    pub const USER_EXPORT: &str = "USER_EXPORT";
    pub const USER_PERMISSIONS: &str = "USER_PERMISSIONS";

    // =========================================================================
    // Services
    // =========================================================================

    pub const SERVICE_CONSULT: &str = "SERVICE_CONSULT";
    pub const SERVICE_CREATE_UPDATE: &str = "SERVICE_CREATE_UPDATE";
    pub const SERVICE_DELETE: &str = "SERVICE_DELETE";
    pub const SERVICE_EXPORT: &str = "SERVICE_EXPORT";

    // =========================================================================
    // Third parties and contacts
    // =========================================================================

    pub const TIER_CONSULT: &str = "TIER_CONSULT";
    pub const TIER_CREATE_UPDATE: &str = "TIER_CREATE_UPDATE";
    pub const TIER_DELETE: &str = "TIER_DELETE";
    pub const TIER_EXPORT: &str = "TIER_EXPORT";
    pub const CONTACT_CONSULT: &str = "CONTACT_CONSULT";
    pub const CONTACT_CREATE_UPDATE: &str = "CONTACT_CREATE_UPDATE";
    pub const CONTACT_DELETE: &str = "CONTACT_DELETE";
    pub const CONTACT_EXPORT: &str = "CONTACT_EXPORT";

    // =========================================================================
    // Orders
    // =========================================================================

    pub const ORDER_CONSULT: &str = "ORDER_CONSULT";
    pub const ORDER_CREATE_UPDATE: &str = "ORDER_CREATE_UPDATE";
    pub const ORDER_DELETE: &str = "ORDER_DELETE";
    pub const ORDER_EXPORT: &str = "ORDER_EXPORT";

    // =========================================================================
    // Invoices and credit notes
    // =========================================================================

    pub const INVOICE_CONSULT: &str = "INVOICE_CONSULT";
    pub const INVOICE_CREATE_UPDATE: &str = "INVOICE_CREATE_UPDATE";
    pub const INVOICE_PAYMENT: &str = "INVOICE_PAYMENT";
    pub const INVOICE_DELETE: &str = "INVOICE_DELETE";
    pub const INVOICE_EXPORT: &str = "INVOICE_EXPORT";
}

use slugs::*;

const fn entry(slug: &'static str, label: &'static str) -> PermissionEntry {
    PermissionEntry { slug, label }
}

/// The full catalogue, in presentation order.
pub const CATALOGUE: &[PermissionCategory] = &[
    PermissionCategory {
        name: "Utilisateurs",
        entries: &[
            entry(USER_CONSULT, "Consulter les utilisateur"),
            entry(USER_CREATE_UPDATE, "Créer / modifier les utilisateurs"),
            entry(USER_UPDATE_PWD, "Modifier les mots de passe"),
            entry(USER_DELETE, "Supprimer un utilisateur"),
            entry(USER_EXPORT, "Exporter un/des utilisateur"),
            entry(USER_PERMISSIONS, "Gérer les permissions"),
        ],
    },
    PermissionCategory {
        name: "Services",
        entries: &[
            entry(SERVICE_CONSULT, "Consulter les services"),
            entry(SERVICE_CREATE_UPDATE, "Créer/modifier les services"),
            entry(SERVICE_DELETE, "Supprimer les services"),
            entry(SERVICE_EXPORT, "Exporter les services"),
        ],
    },
    PermissionCategory {
        name: "Tiers",
        entries: &[
            entry(
                TIER_CONSULT,
                "Consulter les tiers (sociétés) liés à l'utilisateur",
            ),
            entry(
                TIER_CREATE_UPDATE,
                "Créer/modifier les tiers (sociétés) liés à l'utilisateur",
            ),
            entry(
                TIER_DELETE,
                "Supprimer les tiers (sociétés) liés à l'utilisateur",
            ),
            entry(TIER_EXPORT, "Exporter les tiers (sociétés)"),
            entry(CONTACT_CONSULT, "Consulter les contacts"),
            entry(CONTACT_CREATE_UPDATE, "Créer/modifier les contacts"),
            entry(CONTACT_DELETE, "Supprimer les contacts"),
            entry(CONTACT_EXPORT, "Exporter les contacts"),
        ],
    },
    PermissionCategory {
        name: "Commandes",
        entries: &[
            entry(ORDER_CONSULT, "Consulter les commandes clients"),
            entry(ORDER_CREATE_UPDATE, "Créer/modifier les commandes clients"),
            entry(ORDER_DELETE, "Supprimer les commandes clients"),
            entry(ORDER_EXPORT, "Exporter les commandes clients et attributs"),
        ],
    },
    PermissionCategory {
        name: "Factures et avoirs",
        entries: &[
            entry(INVOICE_CONSULT, "Lire les factures (et paiements) clients"),
            entry(INVOICE_CREATE_UPDATE, "Créer/modifier les factures clients"),
            entry(
                INVOICE_PAYMENT,
                "Émettre des paiements sur les factures clients",
            ),
            entry(INVOICE_DELETE, "Supprimer les factures clients"),
            entry(
                INVOICE_EXPORT,
                "Exporter les factures clients, attributs et règlements",
            ),
        ],
    },
];

/// Returns the full ordered catalogue of permission categories.
///
/// Pure and deterministic; the returned data never changes during the life
/// of the process.
pub fn list_permissions() -> &'static [PermissionCategory] {
    CATALOGUE
}

/// Whether a slug exists in the catalogue.
///
/// Advisory only: the gate treats unknown slugs as simply absent from every
/// permission set, and the toggle path accepts them mechanically.
pub fn is_known_slug(slug: &str) -> bool {
    CATALOGUE
        .iter()
        .flat_map(|category| category.entries)
        .any(|entry| entry.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn categories_are_in_declared_order() {
        let names: Vec<&str> = list_permissions().iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec![
                "Utilisateurs",
                "Services",
                "Tiers",
                "Commandes",
                "Factures et avoirs"
            ]
        );
    }

    #[test]
    fn users_category_has_six_entries() {
        let users = &list_permissions()[0];
        assert_eq!(users.name, "Utilisateurs");
        assert_eq!(users.entries.len(), 6);
        assert_eq!(users.entries[0].slug, slugs::USER_CONSULT);
        assert_eq!(users.entries[0].label, "Consulter les utilisateur");
    }

    #[test]
    fn catalogue_counts_match_declared_taxonomy() {
        let counts: Vec<usize> = CATALOGUE.iter().map(|c| c.entries.len()).collect();
        assert_eq!(counts, vec![6, 4, 8, 4, 5]);
    }

    #[test]
    fn slugs_are_unique_and_labels_non_empty() {
        let mut seen = HashSet::new();
        for category in CATALOGUE {
            for entry in category.entries {
                assert!(seen.insert(entry.slug), "duplicate slug {}", entry.slug);
                assert!(!entry.label.is_empty());
            }
        }
    }

    #[test]
    fn known_and_unknown_slugs() {
        assert!(is_known_slug("INVOICE_PAYMENT"));
        assert!(is_known_slug("USER_PERMISSIONS"));
        assert!(!is_known_slug("SERVICE_CREATE"));
        assert!(!is_known_slug(""));
    }
}
