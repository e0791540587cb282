//! `/v4/models` — stored models, their revisions and binary content.

use bytes::Bytes;

use wml_common::{ContentMetadata, JsonPatchOperation, Model, ModelRequest, ResourceCollection};

use crate::client::{revision_body, ListOptions, Scope, WmlClient};
use crate::error::Result;
use crate::pager::{BoxPageFuture, BoxPager, Pager};

const PATH: &str = "/v4/models";

/// Options for uploading model content.
#[derive(Debug, Clone)]
pub struct UploadContentOptions {
    /// Content format, e.g. `native` or `coreml`.
    pub content_format: String,

    /// Attachment name, when a model carries more than one attachment.
    pub name: Option<String>,

    /// Pipeline node the content originated from, for AutoAI models.
    pub pipeline_node_id: Option<String>,

    /// MIME type of the payload.
    pub content_type: String,
}

impl UploadContentOptions {
    pub fn new(content_format: impl Into<String>) -> Self {
        Self {
            content_format: content_format.into(),
            name: None,
            pipeline_node_id: None,
            content_type: "application/zip".to_string(),
        }
    }

    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("content_format", self.content_format.clone())];
        if let Some(v) = &self.name {
            query.push(("name", v.clone()));
        }
        if let Some(v) = &self.pipeline_node_id {
            query.push(("pipeline_node_id", v.clone()));
        }
        query
    }
}

impl WmlClient {
    pub async fn create_model(&self, req: &ModelRequest) -> Result<Model> {
        self.post_json(PATH, Vec::new(), req).await
    }

    pub async fn list_models(
        &self,
        scope: &Scope,
        opts: &ListOptions,
    ) -> Result<ResourceCollection<Model>> {
        let mut query = vec![scope.query_pair()];
        query.extend(opts.to_query());
        self.get_json(PATH, query).await
    }

    /// Pager over the models listing.
    pub fn models_pager<'a>(
        &'a self,
        scope: &'a Scope,
        opts: &'a ListOptions,
    ) -> BoxPager<'a, Model> {
        Pager::new(Box::new(move |start| -> BoxPageFuture<'a, Model> {
            Box::pin(async move { self.list_models(scope, &opts.with_start(start)).await })
        }))
    }

    pub async fn get_model(&self, id: &str, scope: &Scope, rev: Option<&str>) -> Result<Model> {
        let mut query = vec![scope.query_pair()];
        if let Some(rev) = rev {
            query.push(("rev", rev.to_string()));
        }
        self.get_json(&format!("{PATH}/{id}"), query).await
    }

    pub async fn update_model(
        &self,
        id: &str,
        scope: &Scope,
        patch: &[JsonPatchOperation],
    ) -> Result<Model> {
        self.patch_json(&format!("{PATH}/{id}"), vec![scope.query_pair()], patch)
            .await
    }

    pub async fn delete_model(&self, id: &str, scope: &Scope) -> Result<()> {
        self.delete(&format!("{PATH}/{id}"), vec![scope.query_pair()])
            .await
    }

    /// Snapshot the current model state as a new revision.
    pub async fn create_model_revision(
        &self,
        id: &str,
        scope: &Scope,
        commit_message: Option<&str>,
    ) -> Result<Model> {
        self.post_json(
            &format!("{PATH}/{id}/revisions"),
            Vec::new(),
            &revision_body(scope, commit_message),
        )
        .await
    }

    pub async fn list_model_revisions(
        &self,
        id: &str,
        scope: &Scope,
        opts: &ListOptions,
    ) -> Result<ResourceCollection<Model>> {
        let mut query = vec![scope.query_pair()];
        query.extend(opts.to_query());
        self.get_json(&format!("{PATH}/{id}/revisions"), query).await
    }

    /// Upload model content (a zip or gzip archive in the format the model
    /// `type` expects).
    pub async fn upload_model_content(
        &self,
        id: &str,
        scope: &Scope,
        opts: &UploadContentOptions,
        body: Bytes,
    ) -> Result<ContentMetadata> {
        let mut query = vec![scope.query_pair()];
        query.extend(opts.to_query());
        self.put_bytes(
            &format!("{PATH}/{id}/content"),
            query,
            &opts.content_type,
            body,
        )
        .await
    }

    /// Download model content as raw bytes.
    pub async fn download_model_content(
        &self,
        id: &str,
        scope: &Scope,
        rev: Option<&str>,
    ) -> Result<Bytes> {
        let mut query = vec![scope.query_pair()];
        if let Some(rev) = rev {
            query.push(("rev", rev.to_string()));
        }
        self.get_bytes(&format!("{PATH}/{id}/content"), query, "application/zip")
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_options_query() {
        let mut opts = UploadContentOptions::new("native");
        opts.pipeline_node_id = Some("node-3".to_string());
        assert_eq!(
            opts.to_query(),
            vec![
                ("content_format", "native".to_string()),
                ("pipeline_node_id", "node-3".to_string()),
            ]
        );
        assert_eq!(opts.content_type, "application/zip");
    }
}
