//! crates/styleconnect_core/src/catalog/mod.rs
//!
//! The static catalog and its lookup accessors.
//!
//! Lookups are linear scans over a few dozen records. Absence is reported as
//! `None` (or an empty list), never as an error, so callers can degrade to a
//! "not found" screen.

pub(crate) mod seed;

use crate::domain::{Booking, Category, Designer, SubSubcategory, Subcategory};

/// A leaf that references a designer the catalog does not contain.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Leaf '{leaf_id}' references unknown designer '{designer_id}'")]
pub struct DanglingDesigner {
    pub leaf_id: String,
    pub designer_id: String,
}

/// Human-readable names behind the ids stored in a booking.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDescription {
    pub designer_name: Option<String>,
    pub category_name: Option<String>,
    pub subcategory_name: Option<String>,
    pub sub_subcategory_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    designers: Vec<Designer>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>, designers: Vec<Designer>) -> Self {
        Self {
            categories,
            designers,
        }
    }

    /// The built-in marketplace catalog.
    pub fn seeded() -> Self {
        Self::new(seed::categories(), seed::designers())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn designers(&self) -> &[Designer] {
        &self.designers
    }

    pub fn designer_by_id(&self, id: &str) -> Option<&Designer> {
        self.designers.iter().find(|d| d.id == id)
    }

    pub fn category_by_id(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn subcategory_by_id(&self, category_id: &str, subcategory_id: &str) -> Option<&Subcategory> {
        self.category_by_id(category_id)?
            .subcategories
            .iter()
            .find(|s| s.id == subcategory_id)
    }

    pub fn sub_subcategory_by_id(
        &self,
        category_id: &str,
        subcategory_id: &str,
        sub_subcategory_id: &str,
    ) -> Option<&SubSubcategory> {
        self.subcategory_by_id(category_id, subcategory_id)?
            .sub_subcategories
            .iter()
            .find(|s| s.id == sub_subcategory_id)
    }

    /// Designers listed under a leaf, in catalog order. Empty when the leaf or any
    /// of its ancestors is missing.
    pub fn designers_for_leaf(
        &self,
        category_id: &str,
        subcategory_id: &str,
        sub_subcategory_id: &str,
    ) -> Vec<&Designer> {
        let Some(leaf) = self.sub_subcategory_by_id(category_id, subcategory_id, sub_subcategory_id)
        else {
            return Vec::new();
        };
        self.designers
            .iter()
            .filter(|d| leaf.designer_ids.contains(&d.id))
            .collect()
    }

    /// Checks that every leaf only references designers that exist.
    pub fn validate(&self) -> Result<(), DanglingDesigner> {
        for category in &self.categories {
            for sub in &category.subcategories {
                for leaf in &sub.sub_subcategories {
                    if let Some(missing) = leaf
                        .designer_ids
                        .iter()
                        .find(|id| self.designer_by_id(id).is_none())
                    {
                        return Err(DanglingDesigner {
                            leaf_id: leaf.id.clone(),
                            designer_id: missing.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    pub fn describe_booking(&self, booking: &Booking) -> BookingDescription {
        BookingDescription {
            designer_name: self.designer_by_id(&booking.designer_id).map(|d| d.name.clone()),
            category_name: self.category_by_id(&booking.category_id).map(|c| c.name.clone()),
            subcategory_name: self
                .subcategory_by_id(&booking.category_id, &booking.subcategory_id)
                .map(|s| s.name.clone()),
            sub_subcategory_name: self
                .sub_subcategory_by_id(
                    &booking.category_id,
                    &booking.subcategory_id,
                    &booking.sub_subcategory_id,
                )
                .map(|s| s.name.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BookingStatus, PaymentMethod};
    use chrono::Utc;

    #[test]
    fn seeded_catalog_has_no_dangling_references() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.designers().len(), 8);
        assert_eq!(catalog.categories().len(), 6);
        assert_eq!(catalog.validate(), Ok(()));
    }

    #[test]
    fn lookups_chain_through_the_tree() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.category_by_id("category-2").unwrap().name, "Eyewear");
        assert_eq!(
            catalog.subcategory_by_id("category-2", "subcategory-2-3").unwrap().name,
            "Safety"
        );
        assert_eq!(
            catalog
                .sub_subcategory_by_id("category-1", "subcategory-1-3", "subsubcategory-1-3-2")
                .unwrap()
                .name,
            "Oxfords"
        );
        assert_eq!(catalog.designer_by_id("designer-5").unwrap().name, "Daniel Kim");
    }

    #[test]
    fn missing_ancestor_short_circuits_to_none() {
        let catalog = Catalog::seeded();
        assert!(catalog.category_by_id("category-99").is_none());
        assert!(catalog.subcategory_by_id("category-99", "subcategory-1-1").is_none());
        // subcategory exists, but under a different category
        assert!(catalog.subcategory_by_id("category-2", "subcategory-1-1").is_none());
        assert!(catalog
            .sub_subcategory_by_id("category-1", "subcategory-9-9", "subsubcategory-1-1-1")
            .is_none());
        assert!(catalog.designer_by_id("designer-42").is_none());
    }

    #[test]
    fn designers_for_every_leaf_match_the_leaf_ids_in_catalog_order() {
        let catalog = Catalog::seeded();
        for category in catalog.categories() {
            for sub in &category.subcategories {
                for leaf in &sub.sub_subcategories {
                    let found = catalog.designers_for_leaf(&category.id, &sub.id, &leaf.id);
                    let expected: Vec<&Designer> = catalog
                        .designers()
                        .iter()
                        .filter(|d| leaf.designer_ids.contains(&d.id))
                        .collect();
                    assert_eq!(found, expected);
                    assert_eq!(found.len(), leaf.designer_ids.len());
                }
            }
        }
    }

    #[test]
    fn designers_for_missing_leaf_is_empty() {
        let catalog = Catalog::seeded();
        assert!(catalog
            .designers_for_leaf("category-1", "subcategory-1-1", "subsubcategory-1-1-9")
            .is_empty());
        assert!(catalog
            .designers_for_leaf("category-7", "subcategory-1-1", "subsubcategory-1-1-1")
            .is_empty());
    }

    #[test]
    fn designers_for_leaf_keeps_catalog_order_for_shared_leaves() {
        let mut categories = seed::categories();
        categories[0].subcategories[0].sub_subcategories[0].designer_ids =
            vec!["designer-3".into(), "designer-1".into()];
        let catalog = Catalog::new(categories, seed::designers());
        let ids: Vec<&str> = catalog
            .designers_for_leaf("category-1", "subcategory-1-1", "subsubcategory-1-1-1")
            .iter()
            .map(|d| d.id.as_str())
            .collect();
        assert_eq!(ids, vec!["designer-1", "designer-3"]);
    }

    #[test]
    fn validate_reports_the_first_dangling_reference() {
        let mut categories = seed::categories();
        categories[1].subcategories[0].sub_subcategories[1]
            .designer_ids
            .push("designer-404".into());
        let catalog = Catalog::new(categories, seed::designers());
        assert_eq!(
            catalog.validate(),
            Err(DanglingDesigner {
                leaf_id: "subsubcategory-2-1-2".into(),
                designer_id: "designer-404".into(),
            })
        );
    }

    #[test]
    fn describe_booking_resolves_names() {
        let catalog = Catalog::seeded();
        let booking = Booking {
            id: "booking-1".into(),
            user_id: "user-1".into(),
            designer_id: "designer-1".into(),
            category_id: "category-1".into(),
            subcategory_id: "subcategory-1-1".into(),
            sub_subcategory_id: "subsubcategory-1-1-2".into(),
            design_details: None,
            status: BookingStatus::Pending,
            date: Utc::now(),
            payment_method: PaymentMethod::PayPal,
        };
        let description = catalog.describe_booking(&booking);
        assert_eq!(description.designer_name.as_deref(), Some("Alex Johnson"));
        assert_eq!(description.category_name.as_deref(), Some("Footwear"));
        assert_eq!(description.subcategory_name.as_deref(), Some("Athletic"));
        assert_eq!(description.sub_subcategory_name.as_deref(), Some("Basketball"));
    }
}
