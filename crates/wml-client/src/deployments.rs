//! `/v4/deployments` — serving endpoints for models and functions.

use wml_common::{
    Deployment, DeploymentRequest, JsonPatchOperation, ResourceCollection, SyncScoringPayload,
    SyncScoringResult,
};

use crate::client::{Scope, WmlClient};
use crate::error::Result;

const PATH: &str = "/v4/deployments";

/// Filters for the deployments listing (not paginated).
#[derive(Debug, Clone, Default)]
pub struct ListDeploymentsOptions {
    /// Only the deployment registered under this serving name.
    pub serving_name: Option<String>,

    pub tag_value: Option<String>,

    /// Only deployments of this asset.
    pub asset_id: Option<String>,

    pub name: Option<String>,

    /// Deployment type, `online` or `batch`.
    pub kind: Option<String>,

    /// Deployment state, e.g. `ready` or `failed`.
    pub state: Option<String>,
}

impl ListDeploymentsOptions {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(v) = &self.serving_name {
            query.push(("serving_name", v.clone()));
        }
        if let Some(v) = &self.tag_value {
            query.push(("tag.value", v.clone()));
        }
        if let Some(v) = &self.asset_id {
            query.push(("asset_id", v.clone()));
        }
        if let Some(v) = &self.name {
            query.push(("name", v.clone()));
        }
        if let Some(v) = &self.kind {
            query.push(("type", v.clone()));
        }
        if let Some(v) = &self.state {
            query.push(("state", v.clone()));
        }
        query
    }
}

impl WmlClient {
    /// Deploy an asset. The scope is carried in the request body
    /// (`space_id` / `project_id`), see [`Scope::body_fields`].
    pub async fn create_deployment(&self, req: &DeploymentRequest) -> Result<Deployment> {
        self.post_json(PATH, Vec::new(), req).await
    }

    pub async fn list_deployments(
        &self,
        scope: &Scope,
        opts: &ListDeploymentsOptions,
    ) -> Result<ResourceCollection<Deployment>> {
        let mut query = vec![scope.query_pair()];
        query.extend(opts.to_query());
        self.get_json(PATH, query).await
    }

    pub async fn get_deployment(&self, id: &str, scope: &Scope) -> Result<Deployment> {
        self.get_json(&format!("{PATH}/{id}"), vec![scope.query_pair()])
            .await
    }

    /// Apply an RFC 6902 patch to a deployment (e.g. replace
    /// `/asset` to roll out a new model revision).
    pub async fn update_deployment(
        &self,
        id: &str,
        scope: &Scope,
        patch: &[JsonPatchOperation],
    ) -> Result<Deployment> {
        self.patch_json(&format!("{PATH}/{id}"), vec![scope.query_pair()], patch)
            .await
    }

    pub async fn delete_deployment(&self, id: &str, scope: &Scope) -> Result<()> {
        self.delete(&format!("{PATH}/{id}"), vec![scope.query_pair()])
            .await
    }

    /// Synchronous online scoring against a deployment.
    pub async fn compute_predictions(
        &self,
        id: &str,
        payload: &SyncScoringPayload,
    ) -> Result<SyncScoringResult> {
        self.post_json(&format!("{PATH}/{id}/predictions"), Vec::new(), payload)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_includes_only_set_filters() {
        let opts = ListDeploymentsOptions {
            asset_id: Some("model-1".to_string()),
            state: Some("ready".to_string()),
            ..Default::default()
        };
        assert_eq!(
            opts.to_query(),
            vec![
                ("asset_id", "model-1".to_string()),
                ("state", "ready".to_string()),
            ]
        );
    }

    #[test]
    fn kind_filter_maps_to_type_param() {
        let opts = ListDeploymentsOptions {
            kind: Some("online".to_string()),
            ..Default::default()
        };
        assert_eq!(opts.to_query(), vec![("type", "online".to_string())]);
    }
}
