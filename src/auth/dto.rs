use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for user registration. Age arrives as the text the form
/// submits and is parsed at the validation boundary.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub age: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Public part of the user returned to the client.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub full_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_user_serialization() {
        let response = PublicUser {
            id: Uuid::new_v4(),
            username: "runner42".to_string(),
            email: "runner@example.com".to_string(),
            full_name: "Jess Runner".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("runner@example.com"));
        assert!(json.contains("id"));
        assert!(!json.contains("password"));
    }
}
