//! `/v4/deployment_job_definitions` — stored batch job configurations.

use wml_common::{JobDefinition, JobDefinitionRequest, JsonPatchOperation, ResourceCollection};

use crate::client::{revision_body, ListOptions, Scope, WmlClient};
use crate::error::Result;
use crate::pager::{BoxPageFuture, BoxPager, Pager};

const PATH: &str = "/v4/deployment_job_definitions";

impl WmlClient {
    pub async fn create_job_definition(&self, req: &JobDefinitionRequest) -> Result<JobDefinition> {
        self.post_json(PATH, Vec::new(), req).await
    }

    pub async fn list_job_definitions(
        &self,
        scope: &Scope,
        opts: &ListOptions,
    ) -> Result<ResourceCollection<JobDefinition>> {
        let mut query = vec![scope.query_pair()];
        query.extend(opts.to_query());
        self.get_json(PATH, query).await
    }

    pub fn job_definitions_pager<'a>(
        &'a self,
        scope: &'a Scope,
        opts: &'a ListOptions,
    ) -> BoxPager<'a, JobDefinition> {
        Pager::new(Box::new(move |start| -> BoxPageFuture<'a, JobDefinition> {
            Box::pin(async move { self.list_job_definitions(scope, &opts.with_start(start)).await })
        }))
    }

    pub async fn get_job_definition(
        &self,
        id: &str,
        scope: &Scope,
        rev: Option<&str>,
    ) -> Result<JobDefinition> {
        let mut query = vec![scope.query_pair()];
        if let Some(rev) = rev {
            query.push(("rev", rev.to_string()));
        }
        self.get_json(&format!("{PATH}/{id}"), query).await
    }

    pub async fn update_job_definition(
        &self,
        id: &str,
        scope: &Scope,
        patch: &[JsonPatchOperation],
    ) -> Result<JobDefinition> {
        self.patch_json(&format!("{PATH}/{id}"), vec![scope.query_pair()], patch)
            .await
    }

    pub async fn delete_job_definition(&self, id: &str, scope: &Scope) -> Result<()> {
        self.delete(&format!("{PATH}/{id}"), vec![scope.query_pair()])
            .await
    }

    pub async fn create_job_definition_revision(
        &self,
        id: &str,
        scope: &Scope,
        commit_message: Option<&str>,
    ) -> Result<JobDefinition> {
        self.post_json(
            &format!("{PATH}/{id}/revisions"),
            Vec::new(),
            &revision_body(scope, commit_message),
        )
        .await
    }

    pub async fn list_job_definition_revisions(
        &self,
        id: &str,
        scope: &Scope,
        opts: &ListOptions,
    ) -> Result<ResourceCollection<JobDefinition>> {
        let mut query = vec![scope.query_pair()];
        query.extend(opts.to_query());
        self.get_json(&format!("{PATH}/{id}/revisions"), query).await
    }
}
