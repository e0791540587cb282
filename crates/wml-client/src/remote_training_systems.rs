//! `/v4/remote_training_systems` — federated learning parties.

use wml_common::{
    JsonPatchOperation, RemoteTrainingSystem, RemoteTrainingSystemRequest, ResourceCollection,
};

use crate::client::{revision_body, ListOptions, Scope, WmlClient};
use crate::error::Result;
use crate::pager::{BoxPageFuture, BoxPager, Pager};

const PATH: &str = "/v4/remote_training_systems";

impl WmlClient {
    pub async fn create_remote_training_system(
        &self,
        req: &RemoteTrainingSystemRequest,
    ) -> Result<RemoteTrainingSystem> {
        self.post_json(PATH, Vec::new(), req).await
    }

    pub async fn list_remote_training_systems(
        &self,
        scope: &Scope,
        opts: &ListOptions,
    ) -> Result<ResourceCollection<RemoteTrainingSystem>> {
        let mut query = vec![scope.query_pair()];
        query.extend(opts.to_query());
        self.get_json(PATH, query).await
    }

    pub fn remote_training_systems_pager<'a>(
        &'a self,
        scope: &'a Scope,
        opts: &'a ListOptions,
    ) -> BoxPager<'a, RemoteTrainingSystem> {
        Pager::new(Box::new(
            move |start| -> BoxPageFuture<'a, RemoteTrainingSystem> {
                Box::pin(async move {
                    self.list_remote_training_systems(scope, &opts.with_start(start))
                        .await
                })
            },
        ))
    }

    pub async fn get_remote_training_system(
        &self,
        id: &str,
        scope: &Scope,
        rev: Option<&str>,
    ) -> Result<RemoteTrainingSystem> {
        let mut query = vec![scope.query_pair()];
        if let Some(rev) = rev {
            query.push(("rev", rev.to_string()));
        }
        self.get_json(&format!("{PATH}/{id}"), query).await
    }

    pub async fn update_remote_training_system(
        &self,
        id: &str,
        scope: &Scope,
        patch: &[JsonPatchOperation],
    ) -> Result<RemoteTrainingSystem> {
        self.patch_json(&format!("{PATH}/{id}"), vec![scope.query_pair()], patch)
            .await
    }

    pub async fn delete_remote_training_system(&self, id: &str, scope: &Scope) -> Result<()> {
        self.delete(&format!("{PATH}/{id}"), vec![scope.query_pair()])
            .await
    }

    pub async fn create_remote_training_system_revision(
        &self,
        id: &str,
        scope: &Scope,
        commit_message: Option<&str>,
    ) -> Result<RemoteTrainingSystem> {
        self.post_json(
            &format!("{PATH}/{id}/revisions"),
            Vec::new(),
            &revision_body(scope, commit_message),
        )
        .await
    }

    pub async fn list_remote_training_system_revisions(
        &self,
        id: &str,
        scope: &Scope,
        opts: &ListOptions,
    ) -> Result<ResourceCollection<RemoteTrainingSystem>> {
        let mut query = vec![scope.query_pair()];
        query.extend(opts.to_query());
        self.get_json(&format!("{PATH}/{id}/revisions"), query).await
    }
}
