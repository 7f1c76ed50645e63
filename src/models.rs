//! Frontend Models
//!
//! Data structures matching the remote service's JSON shapes.

use serde::{Deserialize, Serialize};

/// To-do record as returned by the remote service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: u64,
    pub tenant_id: String,
    pub name: String,
    #[serde(default)]
    pub memo: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub is_completed: bool,
}

/// Body of a create request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl CreateTodoRequest {
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            memo: None,
            image_url: None,
        }
    }
}

/// Body of a partial update request; `None` fields are omitted
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Response of the image upload endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_server_record() {
        let json = r#"{"id":42,"tenantId":"t","name":"Buy milk","isCompleted":false}"#;
        let todo: TodoItem = serde_json::from_str(json).unwrap();

        assert_eq!(todo.id, 42);
        assert_eq!(todo.tenant_id, "t");
        assert_eq!(todo.name, "Buy milk");
        assert_eq!(todo.memo, None);
        assert_eq!(todo.image_url, None);
        assert!(!todo.is_completed);
    }

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{"id":7,"tenantId":"t","name":"Read","memo":"ch. 3","imageUrl":"https://img/1.png","isCompleted":true}"#;
        let todo: TodoItem = serde_json::from_str(json).unwrap();

        assert_eq!(todo.memo.as_deref(), Some("ch. 3"));
        assert_eq!(todo.image_url.as_deref(), Some("https://img/1.png"));
        assert!(todo.is_completed);
    }

    #[test]
    fn test_partial_update_omits_unset_fields() {
        let req = UpdateTodoRequest {
            is_completed: Some(true),
            ..Default::default()
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"isCompleted":true}"#);
    }

    #[test]
    fn test_create_request_uses_camel_case() {
        let req = CreateTodoRequest {
            name: "Task".to_string(),
            memo: None,
            image_url: Some("https://img/2.png".to_string()),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"name":"Task","imageUrl":"https://img/2.png"}"#);
    }
}
