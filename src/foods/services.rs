use crate::error::ApiError;

use super::dto::{CatalogFilter, FoodForm};
use super::repo_types::{FoodFields, FoodRecord};

/// Stable three-predicate filter over a loaded catalog: case-insensitive
/// substring search against name and description, exact category match,
/// inclusive calorie ceiling. Pure — no state survives between calls, and
/// the relative order of the input is preserved.
pub fn filter_catalog<'a>(
    catalog: &'a [FoodRecord],
    filter: &'a CatalogFilter,
) -> impl Iterator<Item = &'a FoodRecord> + 'a {
    let needle = filter.search.to_lowercase();
    catalog
        .iter()
        .filter(move |item| matches(item, &needle, filter))
}

fn matches(item: &FoodRecord, needle: &str, filter: &CatalogFilter) -> bool {
    let matches_search = needle.is_empty()
        || item.name.to_lowercase().contains(needle)
        || item.description.to_lowercase().contains(needle);
    let matches_category = filter.category.admits(item.category);
    let matches_calories = item.calories <= filter.max_calories;

    matches_search && matches_category && matches_calories
}

/// Checks a raw form the way the add/edit dialog does: name must be
/// present and every numeric field must parse without going negative.
/// All offending fields are reported at once, before anything touches
/// storage.
pub fn validate_food_form(form: &FoodForm) -> Result<FoodFields, ApiError> {
    let mut bad_fields = Vec::new();

    let name = form.name.trim();
    if name.is_empty() {
        bad_fields.push("name");
    }

    let calories = match form.calories.trim().parse::<i32>() {
        Ok(v) if v >= 0 => Some(v),
        _ => None,
    };
    if calories.is_none() {
        bad_fields.push("calories");
    }

    let protein = parse_grams(&form.protein);
    if protein.is_none() {
        bad_fields.push("protein");
    }
    let carbs = parse_grams(&form.carbs);
    if carbs.is_none() {
        bad_fields.push("carbs");
    }
    let fats = parse_grams(&form.fats);
    if fats.is_none() {
        bad_fields.push("fats");
    }

    match (calories, protein, carbs, fats) {
        (Some(calories), Some(protein), Some(carbs), Some(fats)) if bad_fields.is_empty() => {
            Ok(FoodFields {
                name: name.to_string(),
                calories,
                category: form.category,
                description: form.description.trim().to_string(),
                protein,
                carbs,
                fats,
            })
        }
        _ => Err(ApiError::Validation(bad_fields)),
    }
}

fn parse_grams(raw: &str) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v >= 0.0 && v.is_finite() => Some(v),
        _ => None,
    }
}

#[cfg(test)]
mod filter_tests {
    use super::*;
    use crate::foods::dto::CategoryFilter;
    use crate::foods::repo_types::Category;

    fn record(id: i64, name: &str, calories: i32, category: Category, description: &str) -> FoodRecord {
        FoodRecord {
            id,
            name: name.to_string(),
            calories,
            category,
            description: description.to_string(),
            protein: 10.0,
            carbs: 30.0,
            fats: 8.0,
        }
    }

    fn sample_catalog() -> Vec<FoodRecord> {
        vec![
            record(1, "Oatmeal", 250, Category::Breakfast, "Warm oats with berries"),
            record(2, "Burger", 800, Category::Lunch, "Beef patty on a bun"),
            record(3, "Grilled Chicken", 420, Category::Dinner, "Lean protein with veggies"),
            record(4, "Trail Mix", 300, Category::Snacks, "Nuts and dried fruit"),
        ]
    }

    fn apply(catalog: &[FoodRecord], filter: &CatalogFilter) -> Vec<i64> {
        filter_catalog(catalog, filter).map(|r| r.id).collect()
    }

    #[test]
    fn identity_filter_returns_the_catalog_unchanged_in_order() {
        let catalog = sample_catalog();
        let filter = CatalogFilter::default();
        assert_eq!(apply(&catalog, &filter), vec![1, 2, 3, 4]);
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let catalog = sample_catalog();
        let filter = CatalogFilter {
            search: "oat".to_string(),
            ..CatalogFilter::default()
        };
        assert_eq!(apply(&catalog, &filter), vec![1]);
    }

    #[test]
    fn search_matches_description_too() {
        let catalog = sample_catalog();
        let filter = CatalogFilter {
            search: "BUN".to_string(),
            ..CatalogFilter::default()
        };
        assert_eq!(apply(&catalog, &filter), vec![2]);
    }

    #[test]
    fn category_and_ceiling_combine_with_and() {
        // Burger is the only Lunch item but sits above the 500 kcal ceiling.
        let catalog = sample_catalog();
        let filter = CatalogFilter {
            category: CategoryFilter::Only(Category::Lunch),
            max_calories: 500,
            ..CatalogFilter::default()
        };
        assert_eq!(apply(&catalog, &filter), Vec::<i64>::new());
    }

    #[test]
    fn calorie_ceiling_is_inclusive() {
        let catalog = sample_catalog();
        let filter = CatalogFilter {
            max_calories: 250,
            ..CatalogFilter::default()
        };
        assert_eq!(apply(&catalog, &filter), vec![1]);
    }

    #[test]
    fn filter_is_stable_across_matching_records() {
        let catalog = sample_catalog();
        let filter = CatalogFilter {
            max_calories: 450,
            ..CatalogFilter::default()
        };
        assert_eq!(apply(&catalog, &filter), vec![1, 3, 4]);
    }

    #[test]
    fn reapplying_the_same_filter_yields_an_identical_result() {
        let catalog = sample_catalog();
        let filter = CatalogFilter {
            search: "n".to_string(),
            category: CategoryFilter::All,
            max_calories: 900,
        };
        assert_eq!(apply(&catalog, &filter), apply(&catalog, &filter));
    }

    #[test]
    fn filtering_does_not_mutate_the_catalog() {
        let catalog = sample_catalog();
        let filter = CatalogFilter {
            search: "oat".to_string(),
            ..CatalogFilter::default()
        };
        let _ = apply(&catalog, &filter);
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog[0].name, "Oatmeal");
    }

    #[test]
    fn empty_catalog_filters_to_empty() {
        let filter = CatalogFilter::default();
        assert_eq!(apply(&[], &filter), Vec::<i64>::new());
    }
}

#[cfg(test)]
mod validation_tests {
    use super::*;
    use crate::foods::repo_types::Category;

    fn form() -> FoodForm {
        FoodForm {
            name: "Oatmeal".to_string(),
            calories: "250".to_string(),
            category: Category::Breakfast,
            description: "Warm oats".to_string(),
            protein: "10".to_string(),
            carbs: "45.5".to_string(),
            fats: "5.0".to_string(),
        }
    }

    fn offending_fields(err: ApiError) -> Vec<&'static str> {
        match err {
            ApiError::Validation(fields) => fields,
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn well_formed_input_passes_with_parsed_numbers() {
        let fields = validate_food_form(&form()).unwrap();
        assert_eq!(fields.name, "Oatmeal");
        assert_eq!(fields.calories, 250);
        assert_eq!(fields.category, Category::Breakfast);
        assert_eq!(fields.carbs, 45.5);
    }

    #[test]
    fn non_numeric_calories_are_reported_by_field_name() {
        let mut bad = form();
        bad.calories = "abc".to_string();
        assert_eq!(offending_fields(validate_food_form(&bad).unwrap_err()), vec!["calories"]);
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut bad = form();
        bad.name = "   ".to_string();
        assert_eq!(offending_fields(validate_food_form(&bad).unwrap_err()), vec!["name"]);
    }

    #[test]
    fn negative_numbers_are_rejected() {
        let mut bad = form();
        bad.calories = "-1".to_string();
        bad.protein = "-0.5".to_string();
        assert_eq!(
            offending_fields(validate_food_form(&bad).unwrap_err()),
            vec!["calories", "protein"]
        );
    }

    #[test]
    fn every_offending_field_is_listed_at_once() {
        let bad = FoodForm {
            name: "".to_string(),
            calories: "many".to_string(),
            category: Category::Snacks,
            description: String::new(),
            protein: "x".to_string(),
            carbs: "y".to_string(),
            fats: "z".to_string(),
        };
        assert_eq!(
            offending_fields(validate_food_form(&bad).unwrap_err()),
            vec!["name", "calories", "protein", "carbs", "fats"]
        );
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let mut padded = form();
        padded.calories = " 250 ".to_string();
        padded.fats = " 5.0 ".to_string();
        let fields = validate_food_form(&padded).unwrap();
        assert_eq!(fields.calories, 250);
        assert_eq!(fields.fats, 5.0);
    }

    #[test]
    fn zero_values_are_valid() {
        let mut zeroed = form();
        zeroed.calories = "0".to_string();
        zeroed.protein = "0".to_string();
        zeroed.carbs = "0".to_string();
        zeroed.fats = "0".to_string();
        assert!(validate_food_form(&zeroed).is_ok());
    }
}
