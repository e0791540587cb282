//! Async client for the Watson Machine Learning v4 REST API.
//!
//! Every operation is a single request/response round trip against the
//! versioned JSON API; build a [`WmlClient`] once and share it freely, it
//! holds no mutable per-call state.
//!
//! ```rust,no_run
//! use wml_client::{AuthProvider, Scope, WmlClient};
//!
//! # async fn example() -> wml_client::Result<()> {
//! let client = WmlClient::builder()
//!     .base_url("https://us-south.ml.cloud.ibm.com")
//!     .auth(AuthProvider::bearer("eyJhbGc..."))
//!     .build()?;
//!
//! let scope = Scope::space("my-space-id");
//! let deployments = client.list_deployments(&scope, &Default::default()).await?;
//! for dep in deployments.resources {
//!     println!("{}", dep.metadata.id);
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod pager;

pub mod deployment_jobs;
pub mod deployments;
pub mod experiments;
pub mod functions;
pub mod instances;
pub mod job_definitions;
pub mod models;
pub mod pipelines;
pub mod remote_training_systems;
pub mod training_definitions;
pub mod trainings;

pub use auth::AuthProvider;
pub use client::{ListOptions, RetryPolicy, Scope, WmlClient, WmlClientBuilder, DEFAULT_VERSION};
pub use deployments::ListDeploymentsOptions;
pub use error::{Result, WmlError};
pub use instances::ListInstancesOptions;
pub use models::UploadContentOptions;
pub use pager::{BoxPageFuture, BoxPager, Pager};
pub use trainings::ListTrainingsOptions;
