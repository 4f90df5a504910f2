use crate::{CliClientResult, ClientError};

use std::path::Path;
use std::sync::Arc;

use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{Client as ReqwestClient, Method, Response, StatusCode, Url};
use serde::Serialize;
use serde_json::Value;
use ypg_auth::LOGIN_PATH;
use ypg_core::Identity;
use ypg_session::{DurableStorage, SessionMirror, TOKEN_KEY};

/// Error code the server uses for a credential mismatch on sign-in.
pub const INVALID_CREDENTIALS_CODE: &str = "INVALID_CREDENTIALS";

/// HTTP client for the ypg-server REST API
///
/// Keeps a local copy of the signed-in identity in durable storage and sends
/// the stored bearer token, if any, with every request.
pub struct Client {
    pub base_url: String,
    storage: Arc<dyn DurableStorage>,
    mirror: SessionMirror,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    /// * `storage` - Where the local session copy and token live
    pub fn new(base_url: &str, storage: Arc<dyn DurableStorage>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            mirror: SessionMirror::new(storage.clone()),
            storage,
            client: ReqwestClient::new(),
        }
    }

    /// Identity remembered from the last session call, if any.
    pub fn local_identity(&self) -> CliClientResult<Option<Identity>> {
        Ok(self.mirror.load()?.identity)
    }

    /// Build a request with the stored bearer token
    fn request(&self, method: Method, path: &str) -> CliClientResult<reqwest::RequestBuilder> {
        self.request_with_query(method, path, &[])
    }

    /// Like [`Self::request`], appending `query` pairs percent-encoded.
    fn request_with_query(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
    ) -> CliClientResult<reqwest::RequestBuilder> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| ClientError::invalid_url(&self.base_url, e))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        let mut req = self.client.request(method, url);

        if let Some(token) = self.storage.get(TOKEN_KEY)? {
            req = req.bearer_auth(token);
        }

        Ok(req)
    }

    /// Send and turn a 401 into a cleared local session.
    async fn send(&self, req: reqwest::RequestBuilder) -> CliClientResult<Response> {
        let response = req.send().await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            let body = response.json::<Value>().await.ok();
            let code = body.as_ref().and_then(|b| error_field(b, "code"));
            let message = body
                .as_ref()
                .and_then(|b| error_field(b, "message"))
                .unwrap_or_else(|| "Unauthorized".to_string());

            // A rejected sign-in leaves the existing session in place
            if let Some(code) = code.filter(|c| c == INVALID_CREDENTIALS_CODE) {
                return Err(ClientError::api_error(code, message));
            }

            self.mirror.clear()?;
            return Err(ClientError::unauthorized(message, LOGIN_PATH));
        }

        Ok(response)
    }

    /// Execute request and handle errors
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = self.send(req).await?;
        let status = response.status();
        let body: Value = response.json().await?;

        if !status.is_success()
            && let Some(code) = error_field(&body, "code")
        {
            let message = error_field(&body, "message").unwrap_or_else(|| "Unknown error".into());
            return Err(ClientError::api_error(code, message));
        }

        Ok(body)
    }

    /// Execute a session call and remember the identity it returns.
    async fn execute_session(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let body = self.execute(req).await?;

        match body.get("user").filter(|user| !user.is_null()) {
            Some(user) => {
                let identity: Identity = serde_json::from_value(user.clone())?;
                self.mirror.save(&identity)?;
            }
            None => self.mirror.clear()?,
        }

        Ok(body)
    }

    // =========================================================================
    // Session Operations
    // =========================================================================

    pub async fn get_session(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/v1/session")?;
        self.execute_session(req).await
    }

    pub async fn login(&self, email: &str, password: &str) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        let req = self
            .request(Method::POST, "/api/v1/session/login")?
            .json(&LoginRequest { email, password });
        self.execute_session(req).await
    }

    pub async fn logout(&self) -> CliClientResult<Value> {
        let req = self.request(Method::POST, "/api/v1/session/logout")?;
        let result = self.execute(req).await;

        // Local state goes regardless of what the server said
        self.mirror.clear()?;
        result
    }

    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        college: &str,
        interest: &str,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct RegisterRequest<'a> {
            name: &'a str,
            email: &'a str,
            password: &'a str,
            college: &'a str,
            interest: &'a str,
        }

        let body = RegisterRequest {
            name,
            email,
            password,
            college,
            interest,
        };
        let req = self
            .request(Method::POST, "/api/v1/session/register")?
            .json(&body);
        self.execute_session(req).await
    }

    pub async fn verify_email(&self, token: &str) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct VerifyRequest<'a> {
            token: &'a str,
        }

        let req = self
            .request(Method::POST, "/api/v1/session/verify-email")?
            .json(&VerifyRequest { token });
        self.execute_session(req).await
    }

    pub async fn complete_onboarding(&self) -> CliClientResult<Value> {
        let req = self.request(Method::POST, "/api/v1/session/complete-onboarding")?;
        self.execute_session(req).await
    }

    pub async fn forgot_password(&self, email: &str) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct ForgotRequest<'a> {
            email: &'a str,
        }

        let req = self
            .request(Method::POST, "/api/v1/session/forgot-password")?
            .json(&ForgotRequest { email });
        self.execute(req).await
    }

    // =========================================================================
    // Student Operations
    // =========================================================================

    pub async fn list_careers(
        &self,
        category: Option<&str>,
        search: Option<&str>,
    ) -> CliClientResult<Value> {
        let query = present([("category", category), ("search", search)]);

        let req = self.request_with_query(Method::GET, "/api/v1/careers", &query)?;
        self.execute(req).await
    }

    pub async fn list_portfolio(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/v1/portfolio")?;
        self.execute(req).await
    }

    /// Upload a local file. Only its metadata is kept server-side.
    pub async fn upload_portfolio(
        &self,
        file: &Path,
        title: &str,
        description: Option<&str>,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct UploadRequest<'a> {
            title: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<&'a str>,
            file_name: &'a str,
            content: String,
        }

        let bytes = tokio::fs::read(file)
            .await
            .map_err(|e| ClientError::file(file.display().to_string(), e))?;
        let file_name = file
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();

        let body = UploadRequest {
            title,
            description,
            file_name,
            content: STANDARD.encode(bytes),
        };
        let req = self.request(Method::POST, "/api/v1/portfolio")?.json(&body);
        self.execute(req).await
    }

    // =========================================================================
    // Admin Operations
    // =========================================================================

    pub async fn get_stats(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/v1/admin/stats")?;
        self.execute(req).await
    }

    pub async fn list_users(
        &self,
        search: Option<&str>,
        college: Option<&str>,
        status: Option<&str>,
    ) -> CliClientResult<Value> {
        let query = present([("search", search), ("college", college), ("status", status)]);

        let req = self.request_with_query(Method::GET, "/api/v1/admin/users", &query)?;
        self.execute(req).await
    }

    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        college: &str,
        interest: &str,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct CreateRequest<'a> {
            name: &'a str,
            email: &'a str,
            college: &'a str,
            interest: &'a str,
        }

        let body = CreateRequest {
            name,
            email,
            college,
            interest,
        };
        let req = self.request(Method::POST, "/api/v1/admin/users")?.json(&body);
        self.execute(req).await
    }

    pub async fn delete_user(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/api/v1/admin/users/{}", id))?;
        self.execute(req).await
    }

    pub async fn list_all_careers(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/v1/admin/careers")?;
        self.execute(req).await
    }

    pub async fn create_career(
        &self,
        title: &str,
        description: Option<&str>,
        category: Option<&str>,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct CreateRequest<'a> {
            title: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            category: Option<&'a str>,
        }

        let body = CreateRequest {
            title,
            description,
            category,
        };
        let req = self.request(Method::POST, "/api/v1/admin/careers")?.json(&body);
        self.execute(req).await
    }

    pub async fn toggle_career(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(
            Method::POST,
            &format!("/api/v1/admin/careers/{}/toggle", id),
        )?;
        self.execute(req).await
    }

    pub async fn delete_career(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/api/v1/admin/careers/{}", id))?;
        self.execute(req).await
    }

    pub async fn list_assignments(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/v1/admin/assignments")?;
        self.execute(req).await
    }

    pub async fn create_assignment(
        &self,
        title: &str,
        due_date: &str,
        description: Option<&str>,
        category: Option<&str>,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct CreateRequest<'a> {
            title: &'a str,
            due_date: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            category: Option<&'a str>,
        }

        let body = CreateRequest {
            title,
            due_date,
            description,
            category,
        };
        let req = self
            .request(Method::POST, "/api/v1/admin/assignments")?
            .json(&body);
        self.execute(req).await
    }

    pub async fn toggle_assignment(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(
            Method::POST,
            &format!("/api/v1/admin/assignments/{}/toggle", id),
        )?;
        self.execute(req).await
    }

    pub async fn delete_assignment(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(
            Method::DELETE,
            &format!("/api/v1/admin/assignments/{}", id),
        )?;
        self.execute(req).await
    }

    /// Run an export and return the CSV text.
    pub async fn export(&self, kind: &str, start: &str, end: &str) -> CliClientResult<String> {
        #[derive(Serialize)]
        struct ExportRequest<'a> {
            kind: &'a str,
            start: &'a str,
            end: &'a str,
        }

        let req = self
            .request(Method::POST, "/api/v1/admin/export")?
            .json(&ExportRequest { kind, start, end });
        let response = self.send(req).await?;

        if !response.status().is_success() {
            let body: Value = response.json().await?;
            return Err(ClientError::api_error(
                error_field(&body, "code").unwrap_or_else(|| "UNKNOWN".into()),
                error_field(&body, "message").unwrap_or_else(|| "Unknown error".into()),
            ));
        }

        Ok(response.text().await?)
    }
}

/// Drops unset query parameters.
fn present<'a, const N: usize>(params: [(&'a str, Option<&'a str>); N]) -> Vec<(&'a str, &'a str)> {
    params
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
}

fn error_field(body: &Value, field: &str) -> Option<String> {
    body.get("error")?
        .get(field)?
        .as_str()
        .map(str::to_string)
}
