//! `/v4/deployment_jobs` — batch and async scoring runs against a
//! deployment.

use wml_common::{DeploymentJob, DeploymentJobRequest, ResourceCollection};

use crate::client::{Scope, WmlClient};
use crate::error::Result;

const PATH: &str = "/v4/deployment_jobs";

impl WmlClient {
    /// Queue a batch scoring job. The scope is carried in the request body.
    pub async fn create_deployment_job(&self, req: &DeploymentJobRequest) -> Result<DeploymentJob> {
        self.post_json(PATH, Vec::new(), req).await
    }

    /// List jobs in the scope (the listing is not paginated).
    pub async fn list_deployment_jobs(
        &self,
        scope: &Scope,
    ) -> Result<ResourceCollection<DeploymentJob>> {
        self.get_json(PATH, vec![scope.query_pair()]).await
    }

    /// Fetch one job. `include` selects extra sections of the job document,
    /// e.g. `output_data`.
    pub async fn get_deployment_job(
        &self,
        id: &str,
        scope: &Scope,
        include: Option<&str>,
    ) -> Result<DeploymentJob> {
        let mut query = vec![scope.query_pair()];
        if let Some(include) = include {
            query.push(("include", include.to_string()));
        }
        self.get_json(&format!("{PATH}/{id}"), query).await
    }

    /// Cancel a job. With `hard_delete`, metadata of a finished job is
    /// purged instead.
    pub async fn delete_deployment_job(
        &self,
        id: &str,
        scope: &Scope,
        hard_delete: bool,
    ) -> Result<()> {
        let mut query = vec![scope.query_pair()];
        if hard_delete {
            query.push(("hard_delete", "true".to_string()));
        }
        self.delete(&format!("{PATH}/{id}"), query).await
    }
}
