use crate::shop::cart::NewCartItem;

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogApp {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price: u64, // whole dollars
    pub icon: &'static str,
    pub category: &'static str,
}

impl CatalogApp {
    pub fn to_cart_item(&self) -> NewCartItem {
        NewCartItem {
            id: self.id.to_string(),
            name: self.name.to_string(),
            price: self.price,
            image: self.icon.to_string(),
        }
    }
}

pub const SHOP_CATEGORIES: &[(&str, &str)] = &[
    ("all", "All Apps"),
    ("productivity", "Productivity"),
    ("health", "Health & Fitness"),
    ("finance", "Finance"),
    ("lifestyle", "Lifestyle"),
    ("social", "Social"),
];

pub const APPS: &[CatalogApp] = &[
    CatalogApp {
        id: "taskmaster",
        name: "TaskMaster Pro",
        description: "Source code for a complete task and project management app.",
        price: 49,
        icon: "fas fa-tasks",
        category: "productivity",
    },
    CatalogApp {
        id: "fittracker",
        name: "FitTracker",
        description: "Workout and nutrition tracking with social challenges.",
        price: 39,
        icon: "fas fa-dumbbell",
        category: "health",
    },
    CatalogApp {
        id: "stocktracker",
        name: "StockTracker",
        description: "Real-time portfolio tracking with price alerts.",
        price: 59,
        icon: "fas fa-chart-line",
        category: "finance",
    },
    CatalogApp {
        id: "recipebook",
        name: "RecipeBook",
        description: "Recipes, meal planning and shopping lists in one place.",
        price: 29,
        icon: "fas fa-utensils",
        category: "lifestyle",
    },
    CatalogApp {
        id: "chatapp",
        name: "SecureChat",
        description: "End-to-end encrypted messaging with group and video calls.",
        price: 79,
        icon: "fas fa-comments",
        category: "social",
    },
    CatalogApp {
        id: "photoeditor",
        name: "PhotoStudio",
        description: "Professional photo editing with AI enhancements.",
        price: 69,
        icon: "fas fa-camera",
        category: "lifestyle",
    },
];

const FALLBACK_FEATURES: &[&str] = &["Feature 1", "Feature 2", "Feature 3"];

pub fn find_app(id: &str) -> Option<&'static CatalogApp> {
    APPS.iter().find(|app| app.id == id)
}

pub fn app_matches(app: &CatalogApp, filter: &str) -> bool {
    filter == "all" || app.category == filter
}

/// Feature bullet list shown in the demo modal.
pub fn demo_features(app_id: &str) -> &'static [&'static str] {
    match app_id {
        "taskmaster" => &[
            "Task creation and management",
            "Team collaboration tools",
            "Time tracking functionality",
            "Project organization",
            "Deadline reminders",
            "Progress reporting",
        ],
        "fittracker" => &[
            "Workout tracking",
            "Nutrition planning",
            "Social fitness challenges",
            "Progress analytics",
            "Wearable device integration",
            "Custom workout plans",
        ],
        "stocktracker" => &[
            "Real-time stock prices",
            "Portfolio management",
            "Market analytics",
            "Price alerts",
            "Financial news integration",
            "Performance tracking",
        ],
        "recipebook" => &[
            "Recipe management",
            "Meal planning calendar",
            "Shopping list generation",
            "Cooking timers",
            "Nutritional information",
            "Recipe sharing",
        ],
        "chatapp" => &[
            "End-to-end encryption",
            "Group chat functionality",
            "File sharing",
            "Video calling",
            "Message reactions",
            "Custom themes",
        ],
        "photoeditor" => &[
            "Advanced photo filters",
            "AI-powered enhancements",
            "Batch processing",
            "Social media integration",
            "RAW image support",
            "Professional editing tools",
        ],
        _ => FALLBACK_FEATURES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_app_has_its_own_demo() {
        for app in APPS {
            let features = demo_features(app.id);
            assert_eq!(features.len(), 6, "{} should list six features", app.id);
        }
    }

    #[test]
    fn unknown_demo_falls_back_to_placeholders() {
        assert_eq!(
            demo_features("does-not-exist"),
            &["Feature 1", "Feature 2", "Feature 3"]
        );
    }

    #[test]
    fn category_filter() {
        let recipes = find_app("recipebook").unwrap();
        assert!(app_matches(recipes, "all"));
        assert!(app_matches(recipes, "lifestyle"));
        assert!(!app_matches(recipes, "finance"));
    }
}
