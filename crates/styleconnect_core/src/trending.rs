//! crates/styleconnect_core/src/trending.rs
//!
//! Featured listings shown on the public trending page. The listings are static and
//! only carry catalog ids; `Trending::resolve` joins them with the catalog and drops
//! entries whose designer or category no longer exists.

use serde::Serialize;

use crate::catalog::seed::PLACEHOLDER;
use crate::catalog::Catalog;
use crate::domain::Designer;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendingDesigner {
    pub designer: Designer,
    pub projects: u32,
    pub followers: u32,
    pub featured: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LatestProject {
    pub id: String,
    pub title: String,
    pub designer_id: String,
    pub designer_name: String,
    pub category: String,
    pub image: String,
    pub posted: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrendingCategory {
    pub category_id: String,
    pub name: String,
    pub growth: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trending {
    pub designers: Vec<TrendingDesigner>,
    pub projects: Vec<LatestProject>,
    pub categories: Vec<TrendingCategory>,
}

// (designer id, projects, followers, featured)
const DESIGNERS: &[(&str, u32, u32, bool)] = &[
    ("designer-1", 37, 1240, true),
    ("designer-3", 52, 890, false),
    ("designer-2", 41, 1560, true),
];

// (project id, title, designer id, posted)
const PROJECTS: &[(&str, &str, &str, &str)] = &[
    ("project-1", "Minimalist Running Shoe", "designer-1", "2 days ago"),
    ("project-2", "Fashion-Forward Sunglasses", "designer-3", "3 days ago"),
    ("project-3", "Urban Street Sneakers", "designer-2", "5 days ago"),
    ("project-4", "Eco-Friendly Casual Cap", "designer-5", "1 week ago"),
];

// (category id, growth)
const CATEGORIES: &[(&str, &str)] = &[
    ("category-1", "+12% this month"),
    ("category-2", "+8% this month"),
    ("category-3", "+5% this month"),
];

impl Trending {
    pub fn resolve(catalog: &Catalog) -> Self {
        let designers = DESIGNERS
            .iter()
            .filter_map(|&(id, projects, followers, featured)| {
                Some(TrendingDesigner {
                    designer: catalog.designer_by_id(id)?.clone(),
                    projects,
                    followers,
                    featured,
                })
            })
            .collect();

        let projects = PROJECTS
            .iter()
            .filter_map(|&(id, title, designer_id, posted)| {
                let designer = catalog.designer_by_id(designer_id)?;
                Some(LatestProject {
                    id: id.to_string(),
                    title: title.to_string(),
                    designer_id: designer.id.clone(),
                    designer_name: designer.name.clone(),
                    // a designer's first specialty names the category they work in
                    category: designer.specialties.first().cloned().unwrap_or_default(),
                    image: PLACEHOLDER.to_string(),
                    posted: posted.to_string(),
                })
            })
            .collect();

        let categories = CATEGORIES
            .iter()
            .filter_map(|&(id, growth)| {
                let category = catalog.category_by_id(id)?;
                Some(TrendingCategory {
                    category_id: category.id.clone(),
                    name: category.name.clone(),
                    growth: growth.to_string(),
                    image: category.image.clone(),
                })
            })
            .collect();

        Self {
            designers,
            projects,
            categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_every_listing_against_the_seeded_catalog() {
        let trending = Trending::resolve(&Catalog::seeded());
        assert_eq!(trending.designers.len(), 3);
        assert_eq!(trending.designers[0].designer.name, "Alex Johnson");
        assert!(trending.designers[2].featured);
        assert_eq!(trending.projects.len(), 4);
        assert_eq!(trending.projects[3].designer_name, "Daniel Kim");
        assert_eq!(trending.projects[3].category, "Headwear");
        assert!(trending.projects.iter().all(|p| p.image == PLACEHOLDER));
        assert_eq!(trending.categories.len(), 3);
        assert_eq!(trending.categories[1].name, "Eyewear");
    }

    #[test]
    fn entries_for_missing_catalog_records_are_dropped() {
        let catalog = Catalog::new(Vec::new(), Vec::new());
        let trending = Trending::resolve(&catalog);
        assert!(trending.designers.is_empty());
        assert!(trending.projects.is_empty());
        assert!(trending.categories.is_empty());
    }
}
