use serde::{Deserialize, Serialize};

/// Tag that makes a product applicable to every skin type or weather
pub const ANY_TAG: &str = "all";

/// Catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub skin_types: Vec<String>,
    pub concerns: Vec<String>,
    pub ingredients: Vec<String>,
    pub description: String,
    pub weather_conditions: Vec<String>,
}

/// Product definition used to seed the catalog
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: &'static str,
    pub category: &'static str,
    pub skin_types: &'static [&'static str],
    pub concerns: &'static [&'static str],
    pub ingredients: &'static [&'static str],
    pub description: &'static str,
    pub weather_conditions: &'static [&'static str],
}

impl NewProduct {
    /// Materializes the definition with the given id
    pub fn into_product(&self, id: i32) -> Product {
        let owned = |tags: &[&str]| tags.iter().map(|t| t.to_string()).collect();
        Product {
            id,
            name: self.name.to_string(),
            category: self.category.to_string(),
            skin_types: owned(self.skin_types),
            concerns: owned(self.concerns),
            ingredients: owned(self.ingredients),
            description: self.description.to_string(),
            weather_conditions: owned(self.weather_conditions),
        }
    }
}

/// Reference catalog loaded at startup
pub const SEED_PRODUCTS: &[NewProduct] = &[
    NewProduct {
        name: "Gentle Foam Cleanser",
        category: "cleanse",
        skin_types: &["oily", "combination"],
        concerns: &["acne", "sensitive"],
        ingredients: &["Salicylic Acid", "Tea Tree Oil", "Aloe Vera"],
        description: "A gentle foaming cleanser that removes excess oil without stripping the skin",
        weather_conditions: &["humid", "hot"],
    },
    NewProduct {
        name: "Hydrating Cream Cleanser",
        category: "cleanse",
        skin_types: &["dry", "normal"],
        concerns: &["sensitive", "dryness"],
        ingredients: &["Ceramides", "Hyaluronic Acid", "Glycerin"],
        description: "A creamy cleanser that cleanses while maintaining skin's moisture barrier",
        weather_conditions: &["dry", "cold"],
    },
    NewProduct {
        name: "Hyaluronic Acid Toner",
        category: "tone",
        skin_types: &["all"],
        concerns: &["dryness", "sensitive"],
        ingredients: &["Hyaluronic Acid", "Panthenol", "Niacinamide"],
        description: "Alcohol-free hydrating toner suitable for all skin types",
        weather_conditions: &["all"],
    },
    NewProduct {
        name: "BHA Treatment",
        category: "treat",
        skin_types: &["oily", "combination"],
        concerns: &["acne"],
        ingredients: &["Salicylic Acid", "Niacinamide", "Green Tea"],
        description: "Unclogs pores and reduces breakouts",
        weather_conditions: &["humid"],
    },
    NewProduct {
        name: "Vitamin C Serum",
        category: "treat",
        skin_types: &["all"],
        concerns: &["aging", "pigmentation"],
        ingredients: &["Vitamin C", "Ferulic Acid", "Vitamin E"],
        description: "Brightens and protects against environmental damage",
        weather_conditions: &["all"],
    },
    NewProduct {
        name: "Light Gel Moisturizer",
        category: "moisturize",
        skin_types: &["oily", "combination"],
        concerns: &["acne", "sensitive"],
        ingredients: &["Niacinamide", "Hyaluronic Acid", "Aloe"],
        description: "Lightweight hydration that won't clog pores",
        weather_conditions: &["humid", "hot"],
    },
    NewProduct {
        name: "Rich Cream Moisturizer",
        category: "moisturize",
        skin_types: &["dry", "normal"],
        concerns: &["aging", "dryness"],
        ingredients: &["Ceramides", "Peptides", "Shea Butter"],
        description: "Rich moisturizer that provides lasting hydration",
        weather_conditions: &["dry", "cold"],
    },
    NewProduct {
        name: "Lightweight Sunscreen SPF 50",
        category: "protect",
        skin_types: &["oily", "combination"],
        concerns: &["sensitive", "aging"],
        ingredients: &["Zinc Oxide", "Titanium Dioxide"],
        description: "Non-greasy mineral sunscreen with high protection",
        weather_conditions: &["hot", "humid"],
    },
    NewProduct {
        name: "Moisturizing Sunscreen SPF 50",
        category: "protect",
        skin_types: &["dry", "normal"],
        concerns: &["aging", "dryness"],
        ingredients: &["Zinc Oxide", "Hyaluronic Acid", "Ceramides"],
        description: "Hydrating mineral sunscreen with high protection",
        weather_conditions: &["dry", "cold"],
    },
];
