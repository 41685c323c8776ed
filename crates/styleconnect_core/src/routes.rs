//! crates/styleconnect_core/src/routes.rs
//!
//! The navigable screens and the guard in front of them. Protected screens redirect
//! to the login screen without an identity; screens whose path names a catalog entry
//! that does not exist resolve to a not-found outcome pointing back at the catalog.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::domain::Identity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "camelCase")]
pub enum Route {
    Home,
    Login,
    Register,
    About,
    Trending,
    Dashboard,
    Categories,
    #[serde(rename_all = "camelCase")]
    Subcategories { category_id: String },
    #[serde(rename_all = "camelCase")]
    SubSubcategories {
        category_id: String,
        subcategory_id: String,
    },
    #[serde(rename_all = "camelCase")]
    Designers {
        category_id: String,
        subcategory_id: String,
        sub_subcategory_id: String,
    },
    #[serde(rename_all = "camelCase")]
    DesignerProfile { designer_id: String },
    #[serde(rename_all = "camelCase")]
    BookDesigner { designer_id: String },
    NotFound,
}

impl Route {
    /// Parses a path. Unknown paths become `Route::NotFound`.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["about"] => Route::About,
            ["trending"] => Route::Trending,
            ["dashboard"] => Route::Dashboard,
            ["categories"] => Route::Categories,
            ["categories", c] => Route::Subcategories {
                category_id: c.to_string(),
            },
            ["categories", c, s] => Route::SubSubcategories {
                category_id: c.to_string(),
                subcategory_id: s.to_string(),
            },
            ["categories", c, s, ss] => Route::Designers {
                category_id: c.to_string(),
                subcategory_id: s.to_string(),
                sub_subcategory_id: ss.to_string(),
            },
            ["designer", d] => Route::DesignerProfile {
                designer_id: d.to_string(),
            },
            ["book", d] => Route::BookDesigner {
                designer_id: d.to_string(),
            },
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::About => "/about".to_string(),
            Route::Trending => "/trending".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Categories => "/categories".to_string(),
            Route::Subcategories { category_id } => format!("/categories/{}", category_id),
            Route::SubSubcategories {
                category_id,
                subcategory_id,
            } => format!("/categories/{}/{}", category_id, subcategory_id),
            Route::Designers {
                category_id,
                subcategory_id,
                sub_subcategory_id,
            } => format!(
                "/categories/{}/{}/{}",
                category_id, subcategory_id, sub_subcategory_id
            ),
            Route::DesignerProfile { designer_id } => format!("/designer/{}", designer_id),
            Route::BookDesigner { designer_id } => format!("/book/{}", designer_id),
            Route::NotFound => "/404".to_string(),
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(
            self,
            Route::Home
                | Route::Login
                | Route::Register
                | Route::About
                | Route::Trending
                | Route::NotFound
        )
    }

    /// Whether every catalog id in the route resolves.
    fn resolves_in(&self, catalog: &Catalog) -> bool {
        match self {
            Route::Subcategories { category_id } => catalog.category_by_id(category_id).is_some(),
            Route::SubSubcategories {
                category_id,
                subcategory_id,
            } => catalog
                .subcategory_by_id(category_id, subcategory_id)
                .is_some(),
            Route::Designers {
                category_id,
                subcategory_id,
                sub_subcategory_id,
            } => catalog
                .sub_subcategory_by_id(category_id, subcategory_id, sub_subcategory_id)
                .is_some(),
            Route::DesignerProfile { designer_id } | Route::BookDesigner { designer_id } => {
                catalog.designer_by_id(designer_id).is_some()
            }
            _ => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum Navigation {
    Render { route: Route },
    Redirect { to: String },
    NotFound { back: String },
}

/// Decides what a visit to `path` shows for the given identity.
pub fn navigate(path: &str, identity: Option<&Identity>, catalog: &Catalog) -> Navigation {
    let route = Route::parse(path);
    if route == Route::NotFound {
        return Navigation::NotFound {
            back: Route::Home.path(),
        };
    }
    if route.requires_auth() && identity.is_none() {
        return Navigation::Redirect {
            to: Route::Login.path(),
        };
    }
    if !route.resolves_in(catalog) {
        return Navigation::NotFound {
            back: Route::Categories.path(),
        };
    }
    Navigation::Render { route }
}
