//! HTTP adapter for the remote RAG service.
//!
//! The backend consumes multipart form posts; every request carries the
//! credential token as the `x_api_key` form field. Uses browser `fetch()`
//! via gloo-net for WASM compatibility. No retry, no timeout: a call
//! resolves with the service's verdict or fails with a transport error.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

use plantai_core::ports::{ServicePort, UploadFile};
use plantai_types::{
    config::ServiceConfig,
    message::{Answer, Source},
    Result, ServiceError,
};

pub struct HttpServiceClient {
    config: ServiceConfig,
}

impl HttpServiceClient {
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    /// A fresh form with the credential token already attached
    fn credential_form(&self) -> Result<FormData> {
        let form = FormData::new().map_err(js_error)?;
        form.append_with_str("x_api_key", &self.config.api_key)
            .map_err(js_error)?;
        Ok(form)
    }

    async fn post_form(&self, path: &str, form: FormData) -> Result<gloo_net::http::Response> {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);

        // No explicit Content-Type: the browser sets the multipart boundary
        let response = Request::post(&url)
            .body(form)
            .map_err(|e| ServiceError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ServiceError::Http { status, body });
        }

        Ok(response)
    }
}

#[async_trait(?Send)]
impl ServicePort for HttpServiceClient {
    async fn ingest_local_files(&self, files: &[UploadFile]) -> Result<()> {
        let form = self.credential_form()?;
        for file in files {
            let blob = bytes_to_blob(&file.data, &file.mime)?;
            form.append_with_blob_and_filename("files", &blob, &file.name)
                .map_err(js_error)?;
        }
        self.post_form("/ingest/folder-upload", form).await?;
        Ok(())
    }

    async fn ingest_remote_folder(&self, folder: &str) -> Result<()> {
        let form = self.credential_form()?;
        form.append_with_str("sp_folder", folder).map_err(js_error)?;
        self.post_form("/ingest/sharepoint", form).await?;
        Ok(())
    }

    async fn ask_question(&self, question: &str) -> Result<Answer> {
        let form = self.credential_form()?;
        form.append_with_str("question", question)
            .map_err(js_error)?;

        let response = self.post_form("/chat", form).await?;
        let data: ApiChatResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::Serialization(e.to_string()))?;

        Ok(Answer {
            answer: data.answer,
            sources: data.sources.into_iter().map(Source::from).collect(),
        })
    }
}

// ─── API response types ──────────────────────────────────────

#[derive(Deserialize)]
struct ApiChatResponse {
    answer: String,
    #[serde(default)]
    sources: Vec<ApiSource>,
}

#[derive(Deserialize)]
struct ApiSource {
    #[serde(default)]
    source: String,
    #[serde(default)]
    uri: String,
    #[serde(default)]
    page: i64,
    #[serde(default)]
    chunk_id: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    score: f64,
}

impl From<ApiSource> for Source {
    fn from(api: ApiSource) -> Self {
        Source {
            source: api.source,
            uri: api.uri,
            page: api.page,
            chunk_id: api.chunk_id,
            content: api.content,
            score: api.score,
        }
    }
}

// ─── JS interop helpers ──────────────────────────────────────

fn bytes_to_blob(data: &[u8], mime: &str) -> Result<Blob> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(data));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)
}

fn js_error(e: JsValue) -> ServiceError {
    ServiceError::Network(format!("{:?}", e))
}
