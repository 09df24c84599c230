use serde::{Deserialize, Deserializer};

use super::repo_types::Category;

/// Raw add/edit form submission. Numeric fields arrive as the text the
/// user typed and are parsed at the validation boundary, not by serde.
#[derive(Debug, Clone, Deserialize)]
pub struct FoodForm {
    pub name: String,
    pub calories: String,
    pub category: Category,
    #[serde(default)]
    pub description: String,
    pub protein: String,
    pub carbs: String,
    pub fats: String,
}

/// Category predicate for the catalog filter. "All Categories" is the
/// combo-box sentinel that admits everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn admits(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => *only == category,
        }
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw == "All Categories" {
            return Ok(CategoryFilter::All);
        }
        raw.parse::<Category>()
            .map(CategoryFilter::Only)
            .map_err(serde::de::Error::custom)
    }
}

/// Query parameters of the catalog listing. The defaults reproduce the
/// identity filter: empty search, every category, unbounded calories.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogFilter {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub category: CategoryFilter,
    #[serde(default = "unbounded_calories")]
    pub max_calories: i32,
}

fn unbounded_calories() -> i32 {
    i32::MAX
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: CategoryFilter::All,
            max_calories: unbounded_calories(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_filter_accepts_the_sentinel() {
        let filter: CategoryFilter = serde_json::from_str("\"All Categories\"").unwrap();
        assert_eq!(filter, CategoryFilter::All);
    }

    #[test]
    fn category_filter_accepts_each_concrete_category() {
        let filter: CategoryFilter = serde_json::from_str("\"Lunch\"").unwrap();
        assert_eq!(filter, CategoryFilter::Only(Category::Lunch));
    }

    #[test]
    fn category_filter_rejects_values_outside_the_set() {
        assert!(serde_json::from_str::<CategoryFilter>("\"Brunch\"").is_err());
    }

    #[test]
    fn missing_query_parameters_mean_the_identity_filter() {
        let filter: CatalogFilter = serde_json::from_str("{}").unwrap();
        assert_eq!(filter.search, "");
        assert_eq!(filter.category, CategoryFilter::All);
        assert_eq!(filter.max_calories, i32::MAX);
    }

    #[test]
    fn all_categories_admits_everything() {
        for category in [
            Category::Breakfast,
            Category::Lunch,
            Category::Dinner,
            Category::Snacks,
        ] {
            assert!(CategoryFilter::All.admits(category));
        }
        assert!(CategoryFilter::Only(Category::Dinner).admits(Category::Dinner));
        assert!(!CategoryFilter::Only(Category::Dinner).admits(Category::Lunch));
    }
}
