//! `/v4/instances` — provisioned service instances.

use wml_common::{Instance, ResourceCollection};

use crate::client::WmlClient;
use crate::error::Result;
use crate::pager::{BoxPageFuture, BoxPager, Pager};

const PATH: &str = "/v4/instances";

/// Cursor options for the instances listing (account-level, unscoped).
#[derive(Debug, Clone, Default)]
pub struct ListInstancesOptions {
    pub start: Option<String>,
    pub limit: Option<u32>,
}

impl ListInstancesOptions {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(v) = &self.start {
            query.push(("start", v.clone()));
        }
        if let Some(v) = self.limit {
            query.push(("limit", v.to_string()));
        }
        query
    }

    fn with_start(&self, start: Option<String>) -> Self {
        let mut opts = self.clone();
        opts.start = start;
        opts
    }
}

impl WmlClient {
    pub async fn list_instances(
        &self,
        opts: &ListInstancesOptions,
    ) -> Result<ResourceCollection<Instance>> {
        self.get_json(PATH, opts.to_query()).await
    }

    pub fn instances_pager<'a>(
        &'a self,
        opts: &'a ListInstancesOptions,
    ) -> BoxPager<'a, Instance> {
        Pager::new(Box::new(move |start| -> BoxPageFuture<'a, Instance> {
            Box::pin(async move { self.list_instances(&opts.with_start(start)).await })
        }))
    }

    pub async fn get_instance(&self, id: &str) -> Result<Instance> {
        self.get_json(&format!("{PATH}/{id}"), Vec::new()).await
    }
}
