//! Potential-amount derivation for newly created leads.
//!
//! A lead's monetary potential is the sum of the prices of the catalog items
//! selected on the creation form. The calculation runs against a snapshot of
//! the active catalog taken at creation time, so a later price change never
//! retroactively alters a stored lead's recorded value. Edits to an existing
//! lead never re-run this calculation; the stored amount is authoritative.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Catalog snapshot
// ---------------------------------------------------------------------------

/// Prices of the active catalog items relevant to one creation request.
///
/// Built from the `products` / `services` tables by the repository layer;
/// only active items are included, so a selected id that has since been
/// deactivated simply does not resolve.
#[derive(Debug, Clone, Default)]
pub struct CatalogPrices {
    pub products: HashMap<DbId, Decimal>,
    pub services: HashMap<DbId, Decimal>,
}

impl CatalogPrices {
    /// Build a snapshot from `(id, price)` rows.
    pub fn from_rows(products: Vec<(DbId, Decimal)>, services: Vec<(DbId, Decimal)>) -> Self {
        Self {
            products: products.into_iter().collect(),
            services: services.into_iter().collect(),
        }
    }

    /// Selected product ids that actually resolve in the snapshot.
    pub fn known_products(&self, selected: &[DbId]) -> Vec<DbId> {
        selected
            .iter()
            .copied()
            .filter(|id| self.products.contains_key(id))
            .collect()
    }

    /// Selected service ids that actually resolve in the snapshot.
    pub fn known_services(&self, selected: &[DbId]) -> Vec<DbId> {
        selected
            .iter()
            .copied()
            .filter(|id| self.services.contains_key(id))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Calculation
// ---------------------------------------------------------------------------

/// Sum the prices of the selected ids that resolve in the snapshot.
///
/// An id with no entry contributes exactly 0; it is skipped, not an error.
pub fn sum_selected(selected: &[DbId], prices: &HashMap<DbId, Decimal>) -> Decimal {
    selected.iter().filter_map(|id| prices.get(id)).sum()
}

/// Total potential amount for a selection of products and services.
///
/// `total = sum(price of selected products) + sum(price of selected services)`
pub fn potential_amount(
    selected_products: &[DbId],
    selected_services: &[DbId],
    catalog: &CatalogPrices,
) -> Decimal {
    sum_selected(selected_products, &catalog.products)
        + sum_selected(selected_services, &catalog.services)
}

/// Decide the amount to store for a new lead.
///
/// A positive computed total is authoritative. A computed total of zero
/// (nothing selected, or nothing resolved, or only zero-priced items) leaves
/// the manually entered amount in force, so leads without catalog items keep
/// their hand-typed value.
pub fn resolve_potential_amount(requested: Option<Decimal>, computed: Decimal) -> Decimal {
    if computed > Decimal::ZERO {
        computed
    } else {
        requested.unwrap_or(Decimal::ZERO)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: a snapshot with two products and one service.
    fn snapshot() -> CatalogPrices {
        CatalogPrices::from_rows(
            vec![
                (1, Decimal::new(2500_00, 2)),
                (2, Decimal::new(1200_00, 2)),
            ],
            vec![(10, Decimal::new(450_50, 2))],
        )
    }

    // -- sum_selected --

    #[test]
    fn sum_of_known_ids_is_exact() {
        let catalog = snapshot();
        let total = sum_selected(&[1, 2], &catalog.products);
        assert_eq!(total, Decimal::new(3700_00, 2));
    }

    #[test]
    fn unknown_ids_contribute_zero() {
        let catalog = snapshot();
        let total = sum_selected(&[1, 999], &catalog.products);
        assert_eq!(total, Decimal::new(2500_00, 2));
    }

    #[test]
    fn empty_selection_sums_to_zero() {
        let catalog = snapshot();
        assert_eq!(sum_selected(&[], &catalog.products), Decimal::ZERO);
    }

    #[test]
    fn all_unknown_ids_sum_to_zero() {
        let catalog = snapshot();
        assert_eq!(sum_selected(&[7, 8, 9], &catalog.products), Decimal::ZERO);
    }

    // -- potential_amount --

    #[test]
    fn two_products_no_services() {
        // Creation scenario: products priced 2500.00 and 1200.00, no services.
        let catalog = snapshot();
        let total = potential_amount(&[1, 2], &[], &catalog);
        assert_eq!(total, Decimal::new(3700_00, 2));
    }

    #[test]
    fn products_and_services_combine() {
        let catalog = snapshot();
        let total = potential_amount(&[2], &[10], &catalog);
        assert_eq!(total, Decimal::new(1650_50, 2));
    }

    #[test]
    fn product_id_is_not_looked_up_in_services() {
        // Id 1 exists only as a product; selecting it as a service adds nothing.
        let catalog = snapshot();
        let total = potential_amount(&[], &[1], &catalog);
        assert_eq!(total, Decimal::ZERO);
    }

    // -- resolve_potential_amount --

    #[test]
    fn computed_total_overrides_manual_amount() {
        let resolved =
            resolve_potential_amount(Some(Decimal::new(99_00, 2)), Decimal::new(3700_00, 2));
        assert_eq!(resolved, Decimal::new(3700_00, 2));
    }

    #[test]
    fn zero_computed_total_keeps_manual_amount() {
        let resolved = resolve_potential_amount(Some(Decimal::new(880_00, 2)), Decimal::ZERO);
        assert_eq!(resolved, Decimal::new(880_00, 2));
    }

    #[test]
    fn zero_computed_and_no_manual_amount_is_zero() {
        assert_eq!(resolve_potential_amount(None, Decimal::ZERO), Decimal::ZERO);
    }

    // -- known id filtering --

    #[test]
    fn known_products_drops_unresolved_ids() {
        let catalog = snapshot();
        assert_eq!(catalog.known_products(&[1, 42, 2]), vec![1, 2]);
        assert_eq!(catalog.known_services(&[10, 11]), vec![10]);
    }
}
