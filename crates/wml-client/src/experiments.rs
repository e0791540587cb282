//! `/v4/experiments` — experiment definitions.

use wml_common::{Experiment, ExperimentRequest, JsonPatchOperation, ResourceCollection};

use crate::client::{revision_body, ListOptions, Scope, WmlClient};
use crate::error::Result;
use crate::pager::{BoxPageFuture, BoxPager, Pager};

const PATH: &str = "/v4/experiments";

impl WmlClient {
    pub async fn create_experiment(&self, req: &ExperimentRequest) -> Result<Experiment> {
        self.post_json(PATH, Vec::new(), req).await
    }

    pub async fn list_experiments(
        &self,
        scope: &Scope,
        opts: &ListOptions,
    ) -> Result<ResourceCollection<Experiment>> {
        let mut query = vec![scope.query_pair()];
        query.extend(opts.to_query());
        self.get_json(PATH, query).await
    }

    pub fn experiments_pager<'a>(
        &'a self,
        scope: &'a Scope,
        opts: &'a ListOptions,
    ) -> BoxPager<'a, Experiment> {
        Pager::new(Box::new(move |start| -> BoxPageFuture<'a, Experiment> {
            Box::pin(async move { self.list_experiments(scope, &opts.with_start(start)).await })
        }))
    }

    pub async fn get_experiment(
        &self,
        id: &str,
        scope: &Scope,
        rev: Option<&str>,
    ) -> Result<Experiment> {
        let mut query = vec![scope.query_pair()];
        if let Some(rev) = rev {
            query.push(("rev", rev.to_string()));
        }
        self.get_json(&format!("{PATH}/{id}"), query).await
    }

    pub async fn update_experiment(
        &self,
        id: &str,
        scope: &Scope,
        patch: &[JsonPatchOperation],
    ) -> Result<Experiment> {
        self.patch_json(&format!("{PATH}/{id}"), vec![scope.query_pair()], patch)
            .await
    }

    pub async fn delete_experiment(&self, id: &str, scope: &Scope) -> Result<()> {
        self.delete(&format!("{PATH}/{id}"), vec![scope.query_pair()])
            .await
    }

    pub async fn create_experiment_revision(
        &self,
        id: &str,
        scope: &Scope,
        commit_message: Option<&str>,
    ) -> Result<Experiment> {
        self.post_json(
            &format!("{PATH}/{id}/revisions"),
            Vec::new(),
            &revision_body(scope, commit_message),
        )
        .await
    }

    pub async fn list_experiment_revisions(
        &self,
        id: &str,
        scope: &Scope,
        opts: &ListOptions,
    ) -> Result<ResourceCollection<Experiment>> {
        let mut query = vec![scope.query_pair()];
        query.extend(opts.to_query());
        self.get_json(&format!("{PATH}/{id}/revisions"), query).await
    }
}
