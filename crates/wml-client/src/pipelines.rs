//! `/v4/pipelines` — stored pipeline flow documents.

use wml_common::{JsonPatchOperation, Pipeline, PipelineRequest, ResourceCollection};

use crate::client::{revision_body, ListOptions, Scope, WmlClient};
use crate::error::Result;
use crate::pager::{BoxPageFuture, BoxPager, Pager};

const PATH: &str = "/v4/pipelines";

impl WmlClient {
    pub async fn create_pipeline(&self, req: &PipelineRequest) -> Result<Pipeline> {
        self.post_json(PATH, Vec::new(), req).await
    }

    pub async fn list_pipelines(
        &self,
        scope: &Scope,
        opts: &ListOptions,
    ) -> Result<ResourceCollection<Pipeline>> {
        let mut query = vec![scope.query_pair()];
        query.extend(opts.to_query());
        self.get_json(PATH, query).await
    }

    pub fn pipelines_pager<'a>(
        &'a self,
        scope: &'a Scope,
        opts: &'a ListOptions,
    ) -> BoxPager<'a, Pipeline> {
        Pager::new(Box::new(move |start| -> BoxPageFuture<'a, Pipeline> {
            Box::pin(async move { self.list_pipelines(scope, &opts.with_start(start)).await })
        }))
    }

    pub async fn get_pipeline(
        &self,
        id: &str,
        scope: &Scope,
        rev: Option<&str>,
    ) -> Result<Pipeline> {
        let mut query = vec![scope.query_pair()];
        if let Some(rev) = rev {
            query.push(("rev", rev.to_string()));
        }
        self.get_json(&format!("{PATH}/{id}"), query).await
    }

    pub async fn update_pipeline(
        &self,
        id: &str,
        scope: &Scope,
        patch: &[JsonPatchOperation],
    ) -> Result<Pipeline> {
        self.patch_json(&format!("{PATH}/{id}"), vec![scope.query_pair()], patch)
            .await
    }

    pub async fn delete_pipeline(&self, id: &str, scope: &Scope) -> Result<()> {
        self.delete(&format!("{PATH}/{id}"), vec![scope.query_pair()])
            .await
    }

    pub async fn create_pipeline_revision(
        &self,
        id: &str,
        scope: &Scope,
        commit_message: Option<&str>,
    ) -> Result<Pipeline> {
        self.post_json(
            &format!("{PATH}/{id}/revisions"),
            Vec::new(),
            &revision_body(scope, commit_message),
        )
        .await
    }

    pub async fn list_pipeline_revisions(
        &self,
        id: &str,
        scope: &Scope,
        opts: &ListOptions,
    ) -> Result<ResourceCollection<Pipeline>> {
        let mut query = vec![scope.query_pair()];
        query.extend(opts.to_query());
        self.get_json(&format!("{PATH}/{id}/revisions"), query).await
    }
}
