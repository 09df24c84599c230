use time::macros::format_description;
use time::Date;

use crate::error::ApiError;

use super::dto::GoalForm;
use super::repo_types::GoalFields;

/// Checks a goal form the way the add/edit dialog does: title,
/// description, and target date are all required, and the date must be a
/// real calendar date in YYYY-MM-DD form. All offending fields are
/// reported at once.
pub fn validate_goal_form(form: &GoalForm) -> Result<GoalFields, ApiError> {
    let mut bad_fields = Vec::new();

    let title = form.title.trim();
    if title.is_empty() {
        bad_fields.push("title");
    }
    let description = form.description.trim();
    if description.is_empty() {
        bad_fields.push("description");
    }

    let target_date = parse_target_date(&form.target_date);
    if target_date.is_none() {
        bad_fields.push("target_date");
    }

    match target_date {
        Some(target_date) if bad_fields.is_empty() => Ok(GoalFields {
            title: title.to_string(),
            description: description.to_string(),
            target_date,
            priority: form.priority,
            completed: form.completed,
        }),
        _ => Err(ApiError::Validation(bad_fields)),
    }
}

fn parse_target_date(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]")).ok()
}
