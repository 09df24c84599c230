use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use time::Date;

/// Priority levels offered by the goal form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Error)]
#[error("unknown goal priority: {0}")]
pub struct ParsePriorityError(String);

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Priority::Low),
            "Medium" => Ok(Priority::Medium),
            "High" => Ok(Priority::High),
            other => Err(ParsePriorityError(other.to_string())),
        }
    }
}

impl TryFrom<String> for Priority {
    type Error = ParsePriorityError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// A tracked goal.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Goal {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub target_date: Date,
    #[sqlx(try_from = "String")]
    pub priority: Priority,
    pub completed: bool,
}

/// Validated field set for insert and update; everything but the id.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalFields {
    pub title: String,
    pub description: String,
    pub target_date: Date,
    pub priority: Priority,
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_roundtrips_through_its_display_form() {
        for priority in [Priority::Low, Priority::Medium, Priority::High] {
            assert_eq!(priority.as_str().parse::<Priority>().unwrap(), priority);
        }
    }

    #[test]
    fn priority_parse_is_closed() {
        assert!("Urgent".parse::<Priority>().is_err());
        assert!("low".parse::<Priority>().is_err());
    }
}
