//! The built-in catalog: eight designers and a six-category taxonomy.

use crate::domain::{Category, Designer, SubSubcategory, Subcategory};

pub(crate) const PLACEHOLDER: &str = "/placeholder.svg";

fn designer(
    id: &str,
    name: &str,
    rating: f32,
    specialties: [&str; 3],
    description: &str,
    price: u32,
) -> Designer {
    Designer {
        id: id.to_string(),
        name: name.to_string(),
        avatar: PLACEHOLDER.to_string(),
        rating,
        specialties: specialties.iter().map(|s| s.to_string()).collect(),
        description: description.to_string(),
        price,
        portfolio: vec![PLACEHOLDER.to_string(); 3],
    }
}

/// Builds a subcategory whose leaves all point at a single designer, which is how
/// every branch of the built-in taxonomy is staffed.
fn subcategory(id: &str, name: &str, leaves: &[(&str, &str)], designer_id: &str) -> Subcategory {
    Subcategory {
        id: id.to_string(),
        name: name.to_string(),
        image: Some(PLACEHOLDER.to_string()),
        sub_subcategories: leaves
            .iter()
            .map(|(leaf_id, leaf_name)| SubSubcategory {
                id: leaf_id.to_string(),
                name: leaf_name.to_string(),
                image: Some(PLACEHOLDER.to_string()),
                designer_ids: vec![designer_id.to_string()],
            })
            .collect(),
    }
}

fn category(id: &str, name: &str, icon: &str, subcategories: Vec<Subcategory>) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        image: Some(PLACEHOLDER.to_string()),
        subcategories,
    }
}

pub fn designers() -> Vec<Designer> {
    vec![
        designer(
            "designer-1",
            "Alex Johnson",
            4.8,
            ["Footwear", "Athletic", "Running"],
            "Specializing in athletic footwear with 8+ years of experience in the industry.",
            150,
        ),
        designer(
            "designer-2",
            "Sophia Chen",
            4.9,
            ["Footwear", "Casual", "Sneakers"],
            "Creative sneaker designer with a focus on sustainable materials and modern aesthetics.",
            180,
        ),
        designer(
            "designer-3",
            "Marcus Williams",
            4.7,
            ["Eyewear", "Sunglasses", "Premium"],
            "Luxury eyewear designer with experience at top fashion houses.",
            200,
        ),
        designer(
            "designer-4",
            "Emma Rodriguez",
            4.6,
            ["Eyewear", "Prescription", "Modern"],
            "Specialized in prescription eyewear that combines functionality with style.",
            160,
        ),
        designer(
            "designer-5",
            "Daniel Kim",
            4.9,
            ["Headwear", "Caps", "Streetwear"],
            "Streetwear cap designer with a finger on the pulse of urban fashion trends.",
            130,
        ),
        designer(
            "designer-6",
            "Lisa Wang",
            4.8,
            ["Accessories", "Jewelry", "Modern"],
            "Contemporary jewelry designer specializing in minimalist and elegant pieces.",
            170,
        ),
        designer(
            "designer-7",
            "James Cooper",
            4.9,
            ["Outerwear", "Jackets", "Winter"],
            "Technical outerwear designer with experience in creating functional yet stylish performance apparel.",
            190,
        ),
        designer(
            "designer-8",
            "Taylor Smith",
            4.7,
            ["Apparel", "T-shirts", "Graphic"],
            "Graphic designer specializing in apparel prints with a distinctive urban aesthetic.",
            140,
        ),
    ]
}

pub fn categories() -> Vec<Category> {
    vec![
        category(
            "category-1",
            "Footwear",
            "shoe",
            vec![
                subcategory(
                    "subcategory-1-1",
                    "Athletic",
                    &[
                        ("subsubcategory-1-1-1", "Running"),
                        ("subsubcategory-1-1-2", "Basketball"),
                        ("subsubcategory-1-1-3", "Soccer"),
                    ],
                    "designer-1",
                ),
                subcategory(
                    "subcategory-1-2",
                    "Casual",
                    &[
                        ("subsubcategory-1-2-1", "Sneakers"),
                        ("subsubcategory-1-2-2", "Loafers"),
                        ("subsubcategory-1-2-3", "Slip-ons"),
                    ],
                    "designer-2",
                ),
                subcategory(
                    "subcategory-1-3",
                    "Formal",
                    &[
                        ("subsubcategory-1-3-1", "Dress Shoes"),
                        ("subsubcategory-1-3-2", "Oxfords"),
                    ],
                    "designer-2",
                ),
            ],
        ),
        category(
            "category-2",
            "Eyewear",
            "glasses",
            vec![
                subcategory(
                    "subcategory-2-1",
                    "Sunglasses",
                    &[
                        ("subsubcategory-2-1-1", "Premium"),
                        ("subsubcategory-2-1-2", "Sport"),
                        ("subsubcategory-2-1-3", "Fashion"),
                    ],
                    "designer-3",
                ),
                subcategory(
                    "subcategory-2-2",
                    "Prescription",
                    &[
                        ("subsubcategory-2-2-1", "Modern"),
                        ("subsubcategory-2-2-2", "Classic"),
                        ("subsubcategory-2-2-3", "Reading"),
                    ],
                    "designer-4",
                ),
                subcategory(
                    "subcategory-2-3",
                    "Safety",
                    &[
                        ("subsubcategory-2-3-1", "Industrial"),
                        ("subsubcategory-2-3-2", "Sports"),
                    ],
                    "designer-4",
                ),
            ],
        ),
        category(
            "category-3",
            "Headwear",
            "hat",
            vec![
                subcategory(
                    "subcategory-3-1",
                    "Caps",
                    &[
                        ("subsubcategory-3-1-1", "Streetwear"),
                        ("subsubcategory-3-1-2", "Sports"),
                        ("subsubcategory-3-1-3", "Vintage"),
                    ],
                    "designer-5",
                ),
                subcategory(
                    "subcategory-3-2",
                    "Hats",
                    &[
                        ("subsubcategory-3-2-1", "Formal"),
                        ("subsubcategory-3-2-2", "Casual"),
                        ("subsubcategory-3-2-3", "Winter"),
                    ],
                    "designer-5",
                ),
            ],
        ),
        category(
            "category-4",
            "Accessories",
            "bag",
            vec![
                subcategory(
                    "subcategory-4-1",
                    "Jewelry",
                    &[
                        ("subsubcategory-4-1-1", "Modern"),
                        ("subsubcategory-4-1-2", "Classic"),
                    ],
                    "designer-6",
                ),
                subcategory(
                    "subcategory-4-2",
                    "Bags",
                    &[
                        ("subsubcategory-4-2-1", "Handbags"),
                        ("subsubcategory-4-2-2", "Backpacks"),
                    ],
                    "designer-6",
                ),
            ],
        ),
        category(
            "category-5",
            "Outerwear",
            "shirt",
            vec![
                subcategory(
                    "subcategory-5-1",
                    "Jackets",
                    &[
                        ("subsubcategory-5-1-1", "Winter"),
                        ("subsubcategory-5-1-2", "Casual"),
                    ],
                    "designer-7",
                ),
                subcategory(
                    "subcategory-5-2",
                    "Coats",
                    &[
                        ("subsubcategory-5-2-1", "Formal"),
                        ("subsubcategory-5-2-2", "Raincoats"),
                    ],
                    "designer-7",
                ),
            ],
        ),
        category(
            "category-6",
            "Apparel",
            "shirt",
            vec![
                subcategory(
                    "subcategory-6-1",
                    "T-shirts",
                    &[
                        ("subsubcategory-6-1-1", "Graphic"),
                        ("subsubcategory-6-1-2", "Basic"),
                    ],
                    "designer-8",
                ),
                subcategory(
                    "subcategory-6-2",
                    "Pants",
                    &[
                        ("subsubcategory-6-2-1", "Jeans"),
                        ("subsubcategory-6-2-2", "Chinos"),
                    ],
                    "designer-8",
                ),
            ],
        ),
    ]
}
