//! services/api/src/web/catalog.rs
//!
//! Read-only catalog endpoints: the category tree and designer profiles.
//! Unknown ids answer 404 with a hint about where to go back to.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Serialize;
use std::sync::Arc;
use styleconnect_core::{Category, Designer, SubSubcategory, Subcategory};
use utoipa::ToSchema;

use crate::web::state::AppState;

//=========================================================================================
// Response Types
//=========================================================================================

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DesignerResponse {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub rating: f32,
    pub specialties: Vec<String>,
    pub description: String,
    pub price: u32,
    pub portfolio: Vec<String>,
}

impl From<&Designer> for DesignerResponse {
    fn from(d: &Designer) -> Self {
        Self {
            id: d.id.clone(),
            name: d.name.clone(),
            avatar: d.avatar.clone(),
            rating: d.rating,
            specialties: d.specialties.clone(),
            description: d.description.clone(),
            price: d.price,
            portfolio: d.portfolio.clone(),
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub image: Option<String>,
    pub subcategory_count: usize,
}

impl From<&Category> for CategorySummary {
    fn from(c: &Category) -> Self {
        Self {
            id: c.id.clone(),
            name: c.name.clone(),
            icon: c.icon.clone(),
            image: c.image.clone(),
            subcategory_count: c.subcategories.len(),
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubcategorySummary {
    pub id: String,
    pub name: String,
    pub image: Option<String>,
}

impl From<&Subcategory> for SubcategorySummary {
    fn from(s: &Subcategory) -> Self {
        Self {
            id: s.id.clone(),
            name: s.name.clone(),
            image: s.image.clone(),
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDetail {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub subcategories: Vec<SubcategorySummary>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeafSummary {
    pub id: String,
    pub name: String,
    pub image: Option<String>,
    pub designer_count: usize,
}

impl From<&SubSubcategory> for LeafSummary {
    fn from(l: &SubSubcategory) -> Self {
        Self {
            id: l.id.clone(),
            name: l.name.clone(),
            image: l.image.clone(),
            designer_count: l.designer_ids.len(),
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryDetail {
    pub category_id: String,
    pub category_name: String,
    pub id: String,
    pub name: String,
    pub sub_subcategories: Vec<LeafSummary>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeafDesigners {
    pub category_name: String,
    pub subcategory_name: String,
    pub id: String,
    pub name: String,
    pub designers: Vec<DesignerResponse>,
}

fn not_found(what: &str, id: &str) -> (StatusCode, String) {
    (
        StatusCode::NOT_FOUND,
        format!("{} '{}' not found. Back to /categories", what, id),
    )
}

//=========================================================================================
// Handlers
//=========================================================================================

/// GET /catalog/categories - All top-level categories
#[utoipa::path(
    get,
    path = "/catalog/categories",
    responses(
        (status = 200, description = "Category list", body = [CategorySummary]),
        (status = 401, description = "Not signed in")
    )
)]
pub async fn list_categories(State(state): State<Arc<AppState>>) -> Json<Vec<CategorySummary>> {
    Json(state.catalog.categories().iter().map(CategorySummary::from).collect())
}

/// GET /catalog/categories/{category_id} - One category and its subcategories
#[utoipa::path(
    get,
    path = "/catalog/categories/{category_id}",
    params(("category_id" = String, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category detail", body = CategoryDetail),
        (status = 401, description = "Not signed in"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<String>,
) -> Result<Json<CategoryDetail>, (StatusCode, String)> {
    let category = state
        .catalog
        .category_by_id(&category_id)
        .ok_or_else(|| not_found("Category", &category_id))?;

    Ok(Json(CategoryDetail {
        id: category.id.clone(),
        name: category.name.clone(),
        icon: category.icon.clone(),
        subcategories: category
            .subcategories
            .iter()
            .map(SubcategorySummary::from)
            .collect(),
    }))
}

/// GET /catalog/categories/{category_id}/{subcategory_id} - One subcategory and its leaves
#[utoipa::path(
    get,
    path = "/catalog/categories/{category_id}/{subcategory_id}",
    params(
        ("category_id" = String, Path, description = "Category id"),
        ("subcategory_id" = String, Path, description = "Subcategory id")
    ),
    responses(
        (status = 200, description = "Subcategory detail", body = SubcategoryDetail),
        (status = 401, description = "Not signed in"),
        (status = 404, description = "Category or subcategory not found")
    )
)]
pub async fn get_subcategory(
    State(state): State<Arc<AppState>>,
    Path((category_id, subcategory_id)): Path<(String, String)>,
) -> Result<Json<SubcategoryDetail>, (StatusCode, String)> {
    let category = state
        .catalog
        .category_by_id(&category_id)
        .ok_or_else(|| not_found("Category", &category_id))?;
    let sub = state
        .catalog
        .subcategory_by_id(&category_id, &subcategory_id)
        .ok_or_else(|| not_found("Subcategory", &subcategory_id))?;

    Ok(Json(SubcategoryDetail {
        category_id: category.id.clone(),
        category_name: category.name.clone(),
        id: sub.id.clone(),
        name: sub.name.clone(),
        sub_subcategories: sub.sub_subcategories.iter().map(LeafSummary::from).collect(),
    }))
}

/// GET /catalog/categories/{category_id}/{subcategory_id}/{sub_subcategory_id} - Designers for a leaf
#[utoipa::path(
    get,
    path = "/catalog/categories/{category_id}/{subcategory_id}/{sub_subcategory_id}",
    params(
        ("category_id" = String, Path, description = "Category id"),
        ("subcategory_id" = String, Path, description = "Subcategory id"),
        ("sub_subcategory_id" = String, Path, description = "Sub-subcategory id")
    ),
    responses(
        (status = 200, description = "Designers listed under the leaf", body = LeafDesigners),
        (status = 401, description = "Not signed in"),
        (status = 404, description = "Some part of the path does not resolve")
    )
)]
pub async fn list_leaf_designers(
    State(state): State<Arc<AppState>>,
    Path((category_id, subcategory_id, sub_subcategory_id)): Path<(String, String, String)>,
) -> Result<Json<LeafDesigners>, (StatusCode, String)> {
    let catalog = &state.catalog;
    let (Some(category), Some(sub), Some(leaf)) = (
        catalog.category_by_id(&category_id),
        catalog.subcategory_by_id(&category_id, &subcategory_id),
        catalog.sub_subcategory_by_id(&category_id, &subcategory_id, &sub_subcategory_id),
    ) else {
        return Err(not_found(
            "Category path",
            &format!("{}/{}/{}", category_id, subcategory_id, sub_subcategory_id),
        ));
    };

    Ok(Json(LeafDesigners {
        category_name: category.name.clone(),
        subcategory_name: sub.name.clone(),
        id: leaf.id.clone(),
        name: leaf.name.clone(),
        designers: catalog
            .designers_for_leaf(&category_id, &subcategory_id, &sub_subcategory_id)
            .into_iter()
            .map(DesignerResponse::from)
            .collect(),
    }))
}

/// GET /designers/{designer_id} - A designer's profile
#[utoipa::path(
    get,
    path = "/designers/{designer_id}",
    params(("designer_id" = String, Path, description = "Designer id")),
    responses(
        (status = 200, description = "Designer profile", body = DesignerResponse),
        (status = 401, description = "Not signed in"),
        (status = 404, description = "Designer not found")
    )
)]
pub async fn get_designer(
    State(state): State<Arc<AppState>>,
    Path(designer_id): Path<String>,
) -> Result<Json<DesignerResponse>, (StatusCode, String)> {
    state
        .catalog
        .designer_by_id(&designer_id)
        .map(|d| Json(DesignerResponse::from(d)))
        .ok_or_else(|| not_found("Designer", &designer_id))
}
