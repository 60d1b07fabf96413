use crate::error::{ServiceError, ServiceResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

pub const MISSING_FIELDS_MESSAGE: &str = "Name and email are required.";
const NON_STRING_FIELDS_MESSAGE: &str = "Name and email must be strings.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Server-generated identifier, unique for the lifetime of the process
    pub id: String,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: String, name: String, email: String) -> Self {
        Self { id, name, email }
    }
}

/// Body of a create-user request.
///
/// Fields are kept as raw JSON so that a missing or mistyped field is
/// reported by [`CreateUserRequest::validate`] instead of failing extraction.
/// Only named fields of a JSON object are read; see [`CreateUserRequest::from_body`].
#[derive(Debug, Clone, Default, ToSchema)]
pub struct CreateUserRequest {
    #[schema(value_type = String)]
    pub name: Option<Value>,
    #[schema(value_type = String)]
    pub email: Option<Value>,
}

impl CreateUserRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(Value::String(name.into())),
            email: Some(Value::String(email.into())),
        }
    }

    /// Read `name` and `email` from a JSON object body. Arrays and scalars carry
    /// no named fields and yield an empty request.
    pub fn from_body(body: Value) -> Self {
        match body {
            Value::Object(mut fields) => Self {
                name: fields.remove("name"),
                email: fields.remove("email"),
            },
            _ => Self::default(),
        }
    }

    /// Check presence first, then type. A request with one absent field and one
    /// mistyped field reports the absence.
    pub fn validate(self) -> ServiceResult<(String, String)> {
        if !is_present(&self.name) || !is_present(&self.email) {
            return Err(ServiceError::invalid_input(MISSING_FIELDS_MESSAGE));
        }

        match (self.name, self.email) {
            (Some(Value::String(name)), Some(Value::String(email))) => Ok((name, email)),
            _ => Err(ServiceError::invalid_input(NON_STRING_FIELDS_MESSAGE)),
        }
    }
}

// Absent, null, false, 0 and "" all count as missing.
fn is_present(field: &Option<Value>) -> bool {
    match field {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> CreateUserRequest {
        CreateUserRequest::from_body(body)
    }

    #[test]
    fn test_user_serializes_flat() {
        let user = User::new("1".to_string(), "Ada".to_string(), "ada@example.com".to_string());
        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            json!({"id": "1", "name": "Ada", "email": "ada@example.com"})
        );
    }

    #[test]
    fn test_validate_accepts_strings() {
        let (name, email) = request(json!({"name": "Ada", "email": "ada@example.com"}))
            .validate()
            .unwrap();
        assert_eq!(name, "Ada");
        assert_eq!(email, "ada@example.com");
    }

    #[test]
    fn test_validate_ignores_unknown_fields() {
        let result = request(json!({"name": "Ada", "email": "a@b.c", "id": "forged"})).validate();
        assert_eq!(result.unwrap().0, "Ada");
    }

    #[test]
    fn test_validate_rejects_missing_and_falsy() {
        let bodies = [
            json!({}),
            json!({"name": "Ada"}),
            json!({"email": "ada@example.com"}),
            json!({"name": "", "email": "ada@example.com"}),
            json!({"name": "Ada", "email": ""}),
            json!({"name": null, "email": "ada@example.com"}),
            json!({"name": false, "email": "ada@example.com"}),
            json!({"name": 0, "email": "ada@example.com"}),
            json!({"name": "Ada", "email": 0.0}),
        ];

        for body in bodies {
            let err = request(body.clone()).validate().unwrap_err();
            assert_eq!(
                err,
                ServiceError::InvalidInput(MISSING_FIELDS_MESSAGE.to_string()),
                "body: {}",
                body
            );
        }
    }

    #[test]
    fn test_validate_rejects_non_strings() {
        let bodies = [
            json!({"name": 42, "email": "ada@example.com"}),
            json!({"name": "Ada", "email": {"address": "ada@example.com"}}),
            json!({"name": ["Ada"], "email": "ada@example.com"}),
            json!({"name": true, "email": "ada@example.com"}),
        ];

        for body in bodies {
            let err = request(body.clone()).validate().unwrap_err();
            assert_eq!(
                err,
                ServiceError::InvalidInput(NON_STRING_FIELDS_MESSAGE.to_string()),
                "body: {}",
                body
            );
        }
    }

    #[test]
    fn test_non_object_bodies_have_no_fields() {
        for body in [json!(["Ada", "ada@example.com"]), json!("Ada"), json!(7), Value::Null] {
            let err = request(body.clone()).validate().unwrap_err();
            assert_eq!(err.to_string(), MISSING_FIELDS_MESSAGE, "body: {}", body);
        }
    }

    #[test]
    fn test_missing_takes_precedence_over_type() {
        let err = request(json!({"name": 7})).validate().unwrap_err();
        assert_eq!(err.to_string(), MISSING_FIELDS_MESSAGE);
    }
}
