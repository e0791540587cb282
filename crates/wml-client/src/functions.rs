//! `/v4/functions` — deployable Python functions and their code archives.

use bytes::Bytes;

use wml_common::{
    ContentMetadata, Function, FunctionRequest, JsonPatchOperation, ResourceCollection,
};

use crate::client::{revision_body, ListOptions, Scope, WmlClient};
use crate::error::Result;
use crate::pager::{BoxPageFuture, BoxPager, Pager};

const PATH: &str = "/v4/functions";

impl WmlClient {
    pub async fn create_function(&self, req: &FunctionRequest) -> Result<Function> {
        self.post_json(PATH, Vec::new(), req).await
    }

    pub async fn list_functions(
        &self,
        scope: &Scope,
        opts: &ListOptions,
    ) -> Result<ResourceCollection<Function>> {
        let mut query = vec![scope.query_pair()];
        query.extend(opts.to_query());
        self.get_json(PATH, query).await
    }

    pub fn functions_pager<'a>(
        &'a self,
        scope: &'a Scope,
        opts: &'a ListOptions,
    ) -> BoxPager<'a, Function> {
        Pager::new(Box::new(move |start| -> BoxPageFuture<'a, Function> {
            Box::pin(async move { self.list_functions(scope, &opts.with_start(start)).await })
        }))
    }

    pub async fn get_function(
        &self,
        id: &str,
        scope: &Scope,
        rev: Option<&str>,
    ) -> Result<Function> {
        let mut query = vec![scope.query_pair()];
        if let Some(rev) = rev {
            query.push(("rev", rev.to_string()));
        }
        self.get_json(&format!("{PATH}/{id}"), query).await
    }

    pub async fn update_function(
        &self,
        id: &str,
        scope: &Scope,
        patch: &[JsonPatchOperation],
    ) -> Result<Function> {
        self.patch_json(&format!("{PATH}/{id}"), vec![scope.query_pair()], patch)
            .await
    }

    pub async fn delete_function(&self, id: &str, scope: &Scope) -> Result<()> {
        self.delete(&format!("{PATH}/{id}"), vec![scope.query_pair()])
            .await
    }

    pub async fn create_function_revision(
        &self,
        id: &str,
        scope: &Scope,
        commit_message: Option<&str>,
    ) -> Result<Function> {
        self.post_json(
            &format!("{PATH}/{id}/revisions"),
            Vec::new(),
            &revision_body(scope, commit_message),
        )
        .await
    }

    pub async fn list_function_revisions(
        &self,
        id: &str,
        scope: &Scope,
        opts: &ListOptions,
    ) -> Result<ResourceCollection<Function>> {
        let mut query = vec![scope.query_pair()];
        query.extend(opts.to_query());
        self.get_json(&format!("{PATH}/{id}/revisions"), query).await
    }

    /// Upload the function's code as a gzipped archive containing the
    /// Python entry point.
    pub async fn upload_function_code(
        &self,
        id: &str,
        scope: &Scope,
        body: Bytes,
    ) -> Result<ContentMetadata> {
        self.put_bytes(
            &format!("{PATH}/{id}/code"),
            vec![scope.query_pair()],
            "application/gzip",
            body,
        )
        .await
    }

    pub async fn download_function_code(
        &self,
        id: &str,
        scope: &Scope,
        rev: Option<&str>,
    ) -> Result<Bytes> {
        let mut query = vec![scope.query_pair()];
        if let Some(rev) = rev {
            query.push(("rev", rev.to_string()));
        }
        self.get_bytes(&format!("{PATH}/{id}/code"), query, "application/gzip")
            .await
    }
}
