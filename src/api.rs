//! Remote Client
//!
//! Thin wrapper over the to-do REST service. Constructed once in `App` and
//! handed to components through context; there is no module-level instance.

use gloo_net::http::{Request, Response};
use std::fmt;

use crate::models::{CreateTodoRequest, TodoItem, UpdateTodoRequest, UploadResponse};

pub const API_BASE_URL: &str = "https://assignment-todolist-api.vercel.app/api";
pub const TENANT_ID: &str = "todo-list-ui";

/// Default page size requested by `list_todos`; longer lists are not
/// supported by this client.
pub const PAGE_SIZE: u32 = 100;

/// Failure of a remote call, collapsed to one generic message at display time
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Transport-level failure (offline, DNS, CORS, aborted)
    Network(String),
    /// Non-2xx HTTP status
    Status(u16),
    /// Response body did not match the expected shape
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(_) => write!(f, "request failed"),
            ApiError::Status(status) => write!(f, "server returned status {}", status),
            ApiError::Decode(_) => write!(f, "unexpected server response"),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

fn log_error(op: &str, err: &ApiError) {
    web_sys::console::error_1(&format!("[API] {} failed: {:?}", op, err).into());
}

fn check_status(op: &str, response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        let err = ApiError::Status(response.status());
        log_error(op, &err);
        Err(err)
    }
}

async fn decode<T: serde::de::DeserializeOwned>(op: &str, response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| {
        let err = ApiError::Decode(e.to_string());
        log_error(op, &err);
        err
    })
}

/// Client for the remote to-do service, scoped to one tenant
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, tenant_id: &str) -> Self {
        Self {
            base_url: format!("{}/{}", base_url, tenant_id),
        }
    }

    /// Fetch one page of records
    pub async fn list_todos(&self, page: u32, page_size: u32) -> Result<Vec<TodoItem>, ApiError> {
        let url = format!("{}/items", self.base_url);
        let page = page.to_string();
        let page_size = page_size.to_string();
        let response = Request::get(&url)
            .query([("page", page.as_str()), ("pageSize", page_size.as_str())])
            .send()
            .await
            .map_err(|e| {
                let err = ApiError::from(e);
                log_error("list_todos", &err);
                err
            })?;
        let response = check_status("list_todos", response)?;
        decode("list_todos", response).await
    }

    /// Fetch a single record by id
    pub async fn get_todo(&self, id: u64) -> Result<TodoItem, ApiError> {
        let url = format!("{}/items/{}", self.base_url, id);
        let response = Request::get(&url).send().await.map_err(|e| {
            let err = ApiError::from(e);
            log_error("get_todo", &err);
            err
        })?;
        let response = check_status("get_todo", response)?;
        decode("get_todo", response).await
    }

    /// Create a record, returning the server-confirmed version
    pub async fn create_todo(&self, req: &CreateTodoRequest) -> Result<TodoItem, ApiError> {
        let url = format!("{}/items", self.base_url);
        let response = Request::post(&url)
            .json(req)
            .map_err(ApiError::from)?
            .send()
            .await
            .map_err(|e| {
                let err = ApiError::from(e);
                log_error("create_todo", &err);
                err
            })?;
        let response = check_status("create_todo", response)?;
        decode("create_todo", response).await
    }

    /// Apply a partial update to a record
    pub async fn update_todo(&self, id: u64, req: &UpdateTodoRequest) -> Result<TodoItem, ApiError> {
        let url = format!("{}/items/{}", self.base_url, id);
        let response = Request::patch(&url)
            .json(req)
            .map_err(ApiError::from)?
            .send()
            .await
            .map_err(|e| {
                let err = ApiError::from(e);
                log_error("update_todo", &err);
                err
            })?;
        let response = check_status("update_todo", response)?;
        decode("update_todo", response).await
    }

    /// Delete a record
    pub async fn delete_todo(&self, id: u64) -> Result<(), ApiError> {
        let url = format!("{}/items/{}", self.base_url, id);
        let response = Request::delete(&url).send().await.map_err(|e| {
            let err = ApiError::from(e);
            log_error("delete_todo", &err);
            err
        })?;
        check_status("delete_todo", response)?;
        Ok(())
    }

    /// Upload an image file, returning its persisted URL
    pub async fn upload_image(&self, file: &web_sys::File) -> Result<String, ApiError> {
        let url = format!("{}/images/upload", self.base_url);
        let form = web_sys::FormData::new()
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
        form.append_with_blob("image", file)
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
        let response = Request::post(&url)
            .body(form)
            .map_err(ApiError::from)?
            .send()
            .await
            .map_err(|e| {
                let err = ApiError::from(e);
                log_error("upload_image", &err);
                err
            })?;
        let response = check_status("upload_image", response)?;
        let result: UploadResponse = decode("upload_image", response).await?;
        Ok(result.url)
    }
}
