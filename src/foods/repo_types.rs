use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;

/// Meal categories offered by the food form. The set is closed; anything
/// else is rejected at the boundary, not by the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

#[derive(Debug, Error)]
#[error("unknown food category: {0}")]
pub struct ParseCategoryError(String);

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Breakfast => "Breakfast",
            Category::Lunch => "Lunch",
            Category::Dinner => "Dinner",
            Category::Snacks => "Snacks",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Breakfast" => Ok(Category::Breakfast),
            "Lunch" => Ok(Category::Lunch),
            "Dinner" => Ok(Category::Dinner),
            "Snacks" => Ok(Category::Snacks),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}

impl TryFrom<String> for Category {
    type Error = ParseCategoryError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One food-choices catalog entry. Ids are assigned by the table on insert
/// and never change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FoodRecord {
    pub id: i64,
    #[sqlx(rename = "food_name")]
    pub name: String,
    pub calories: i32,
    #[sqlx(try_from = "String")]
    pub category: Category,
    pub description: String,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// Validated field set for insert and update; everything but the id.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodFields {
    pub name: String,
    pub calories: i32,
    pub category: Category,
    pub description: String,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}
