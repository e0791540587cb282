//! `/v4/trainings` — training runs.

use wml_common::{ResourceCollection, Training, TrainingRequest};

use crate::client::{Scope, WmlClient};
use crate::error::Result;
use crate::pager::{BoxPageFuture, BoxPager, Pager};

const PATH: &str = "/v4/trainings";

/// Filters and cursor for the trainings listing.
#[derive(Debug, Clone, Default)]
pub struct ListTrainingsOptions {
    /// Only runs currently in this state, e.g. `running` or `completed`.
    pub state: Option<String>,

    pub tag_value: Option<String>,

    /// Only runs started from this training definition.
    pub training_definition_id: Option<String>,

    pub start: Option<String>,

    pub limit: Option<u32>,
}

impl ListTrainingsOptions {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(v) = &self.state {
            query.push(("state", v.clone()));
        }
        if let Some(v) = &self.tag_value {
            query.push(("tag.value", v.clone()));
        }
        if let Some(v) = &self.training_definition_id {
            query.push(("training_definition_id", v.clone()));
        }
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
    /// Start a training run. The scope is carried in the request body.
    pub async fn create_training(&self, req: &TrainingRequest) -> Result<Training> {
        self.post_json(PATH, Vec::new(), req).await
    }

    pub async fn list_trainings(
        &self,
        scope: &Scope,
        opts: &ListTrainingsOptions,
    ) -> Result<ResourceCollection<Training>> {
        let mut query = vec![scope.query_pair()];
        query.extend(opts.to_query());
        self.get_json(PATH, query).await
    }

    pub fn trainings_pager<'a>(
        &'a self,
        scope: &'a Scope,
        opts: &'a ListTrainingsOptions,
    ) -> BoxPager<'a, Training> {
        Pager::new(Box::new(move |start| -> BoxPageFuture<'a, Training> {
            Box::pin(async move { self.list_trainings(scope, &opts.with_start(start)).await })
        }))
    }

    pub async fn get_training(&self, id: &str, scope: &Scope) -> Result<Training> {
        self.get_json(&format!("{PATH}/{id}"), vec![scope.query_pair()])
            .await
    }

    /// Cancel a training run. With `hard_delete`, metadata of a finished run
    /// is purged instead.
    pub async fn delete_training(&self, id: &str, scope: &Scope, hard_delete: bool) -> Result<()> {
        let mut query = vec![scope.query_pair()];
        if hard_delete {
            query.push(("hard_delete", "true".to_string()));
        }
        self.delete(&format!("{PATH}/{id}"), query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trainings_query_orders_filters() {
        let opts = ListTrainingsOptions {
            state: Some("running".to_string()),
            limit: Some(10),
            ..Default::default()
        };
        assert_eq!(
            opts.to_query(),
            vec![
                ("state", "running".to_string()),
                ("limit", "10".to_string()),
            ]
        );
    }

    #[test]
    fn with_start_replaces_cursor() {
        let opts = ListTrainingsOptions {
            start: Some("old".to_string()),
            ..Default::default()
        };
        assert_eq!(
            opts.with_start(Some("new".to_string())).start.as_deref(),
            Some("new")
        );
        assert_eq!(opts.with_start(None).start, None);
    }
}
