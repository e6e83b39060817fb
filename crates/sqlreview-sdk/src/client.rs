use std::sync::Arc;

use serde::de::DeserializeOwned;
use sqlreview_types::{
    ConnectionForm, ConnectionId, ConnectionTestResult, CreatedResponse, DatabaseConnection,
    DatabaseSchema, HealthStatus, ImportResult, LlmConfig, LlmConfigForm, LlmConfigId,
    MessageResponse, ObjectDetails, ObjectKind, ReportId, ReviewOutcome, ReviewReport,
    ReviewSummary, SqlId, SqlStatement, SqlVersion, StatementForm, StatementPage,
    StatementStatistics, VersionId,
};

use crate::error::Result;
use crate::transport::{ApiRequest, HttpTransport, MultipartForm, Transport};

/// Typed access to the review service.
///
/// Each call is one request. Grouped by resource:
/// `client.statements().list(1, 10)`, `client.reviews().history(id)`.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
}

impl Client {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Client over HTTP for `base_url` (e.g. `http://127.0.0.1:8000`).
    pub fn connect(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self::new(Arc::new(HttpTransport::new(base_url)?)))
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    pub fn connections(&self) -> ConnectionsApi<'_> {
        ConnectionsApi { client: self }
    }

    pub fn llm_configs(&self) -> LlmConfigsApi<'_> {
        LlmConfigsApi { client: self }
    }

    pub fn statements(&self) -> StatementsApi<'_> {
        StatementsApi { client: self }
    }

    pub fn reviews(&self) -> ReviewsApi<'_> {
        ReviewsApi { client: self }
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        self.fetch(ApiRequest::get("/health")).await
    }

    async fn fetch<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        self.send(request).await?.decode()
    }

    async fn send(&self, request: ApiRequest) -> Result<crate::transport::ApiResponse> {
        tracing::debug!(method = request.method.as_str(), path = %request.path, "request");
        let response = self.transport.send(request).await?;
        tracing::debug!(status = response.status, "response");
        Ok(response)
    }
}

pub struct ConnectionsApi<'a> {
    client: &'a Client,
}

impl ConnectionsApi<'_> {
    pub async fn list(&self) -> Result<Vec<DatabaseConnection>> {
        self.client.fetch(ApiRequest::get("/api/db-connections/")).await
    }

    pub async fn get(&self, id: ConnectionId) -> Result<DatabaseConnection> {
        self.client
            .fetch(ApiRequest::get(format!("/api/db-connections/{}", id)))
            .await
    }

    pub async fn create(&self, form: &ConnectionForm) -> Result<CreatedResponse> {
        self.client
            .fetch(ApiRequest::post("/api/db-connections/").json(form)?)
            .await
    }

    pub async fn update(
        &self,
        id: ConnectionId,
        form: &ConnectionForm,
    ) -> Result<MessageResponse> {
        self.client
            .fetch(ApiRequest::put(format!("/api/db-connections/{}", id)).json(form)?)
            .await
    }

    pub async fn delete(&self, id: ConnectionId) -> Result<MessageResponse> {
        self.client
            .fetch(ApiRequest::delete(format!("/api/db-connections/{}", id)))
            .await
    }

    /// Dry-run an unsaved draft.
    pub async fn test(&self, form: &ConnectionForm) -> Result<ConnectionTestResult> {
        self.client
            .fetch(ApiRequest::post("/api/db-connections/test").json(form)?)
            .await
    }

    pub async fn schema(&self, id: ConnectionId) -> Result<DatabaseSchema> {
        self.client
            .fetch(ApiRequest::get(format!("/api/db-connections/{}/schema", id)))
            .await
    }

    pub async fn object_details(
        &self,
        id: ConnectionId,
        kind: ObjectKind,
        name: &str,
    ) -> Result<ObjectDetails> {
        self.client
            .fetch(ApiRequest::get(format!(
                "/api/db-connections/{}/schema/{}/{}",
                id, kind, name
            )))
            .await
    }
}

pub struct LlmConfigsApi<'a> {
    client: &'a Client,
}

impl LlmConfigsApi<'_> {
    pub async fn list(&self) -> Result<Vec<LlmConfig>> {
        self.client.fetch(ApiRequest::get("/api/llm-configs/")).await
    }

    pub async fn get(&self, id: LlmConfigId) -> Result<LlmConfig> {
        self.client
            .fetch(ApiRequest::get(format!("/api/llm-configs/{}", id)))
            .await
    }

    pub async fn create(&self, form: &LlmConfigForm) -> Result<CreatedResponse> {
        self.client
            .fetch(ApiRequest::post("/api/llm-configs/").json(form)?)
            .await
    }

    pub async fn update(&self, id: LlmConfigId, form: &LlmConfigForm) -> Result<MessageResponse> {
        self.client
            .fetch(ApiRequest::put(format!("/api/llm-configs/{}", id)).json(form)?)
            .await
    }

    pub async fn delete(&self, id: LlmConfigId) -> Result<MessageResponse> {
        self.client
            .fetch(ApiRequest::delete(format!("/api/llm-configs/{}", id)))
            .await
    }

    pub async fn set_default(&self, id: LlmConfigId) -> Result<MessageResponse> {
        self.client
            .fetch(ApiRequest::put(format!("/api/llm-configs/{}/set-default", id)))
            .await
    }

    pub async fn test(&self, id: LlmConfigId) -> Result<MessageResponse> {
        self.client
            .fetch(ApiRequest::post(format!("/api/llm-configs/{}/test", id)))
            .await
    }
}

pub struct StatementsApi<'a> {
    client: &'a Client,
}

impl StatementsApi<'_> {
    /// Newest first.
    pub async fn list(&self, page: u32, page_size: u32) -> Result<StatementPage> {
        let request = ApiRequest::get("/api/sql-statements/")
            .query("page", page)
            .query("page_size", page_size)
            .query("order_by", "created_at")
            .query("order_dir", "desc");
        self.client.fetch(request).await
    }

    pub async fn get(&self, id: SqlId) -> Result<SqlStatement> {
        self.client
            .fetch(ApiRequest::get(format!("/api/sql-statements/{}", id)))
            .await
    }

    pub async fn create(&self, form: &StatementForm) -> Result<CreatedResponse> {
        self.client
            .fetch(ApiRequest::post("/api/sql-statements/").json(form)?)
            .await
    }

    pub async fn update(&self, id: SqlId, form: &StatementForm) -> Result<MessageResponse> {
        self.client
            .fetch(ApiRequest::put(format!("/api/sql-statements/{}", id)).json(form)?)
            .await
    }

    pub async fn delete(&self, id: SqlId) -> Result<MessageResponse> {
        self.client
            .fetch(ApiRequest::delete(format!("/api/sql-statements/{}", id)))
            .await
    }

    /// Newest first.
    pub async fn versions(&self, id: SqlId) -> Result<Vec<SqlVersion>> {
        self.client
            .fetch(ApiRequest::get(format!("/api/sql-statements/{}/versions", id)))
            .await
    }

    pub async fn restore(&self, id: SqlId, version: VersionId) -> Result<MessageResponse> {
        self.client
            .fetch(ApiRequest::post(format!(
                "/api/sql-statements/{}/restore/{}",
                id, version
            )))
            .await
    }

    /// Uploads a whole CSV file. The target connection goes both in the
    /// form and in the query string.
    pub async fn import_csv(
        &self,
        file_name: &str,
        content: Vec<u8>,
        db_connection_id: Option<ConnectionId>,
    ) -> Result<ImportResult> {
        let mut request = ApiRequest::post("/api/sql-statements/import-csv");
        let mut text_fields = Vec::new();
        if let Some(id) = db_connection_id {
            request = request.query("db_connection_id", id);
            text_fields.push(("db_connection_id".to_string(), id.to_string()));
        }

        let request = request.multipart(MultipartForm {
            field: "file".to_string(),
            file_name: file_name.to_string(),
            content,
            text_fields,
        });
        self.client.fetch(request).await
    }

    /// Raw CSV bytes.
    pub async fn export_csv(&self) -> Result<Vec<u8>> {
        self.client
            .send(ApiRequest::get("/api/sql-statements/export-csv"))
            .await?
            .into_bytes()
    }

    pub async fn statistics(&self) -> Result<StatementStatistics> {
        self.client
            .fetch(ApiRequest::get("/api/sql-statements/statistics"))
            .await
    }
}

pub struct ReviewsApi<'a> {
    client: &'a Client,
}

impl ReviewsApi<'_> {
    pub async fn review(
        &self,
        sql_id: SqlId,
        llm_config_id: Option<LlmConfigId>,
    ) -> Result<ReviewOutcome> {
        let mut request = ApiRequest::post(format!("/api/reviews/sql/{}/review", sql_id));
        if let Some(id) = llm_config_id {
            request = request.query("llm_config_id", id);
        }
        self.client.fetch(request).await
    }

    /// Newest first.
    pub async fn history(&self, sql_id: SqlId) -> Result<Vec<ReviewSummary>> {
        self.client
            .fetch(ApiRequest::get(format!("/api/reviews/sql/{}/history", sql_id)))
            .await
    }

    pub async fn report(&self, id: ReportId) -> Result<ReviewReport> {
        self.client
            .fetch(ApiRequest::get(format!("/api/reviews/reports/{}", id)))
            .await
    }
}
