use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "wml")]
#[command(about = "CLI for the Watson Machine Learning v4 API", long_about = None)]
pub struct Args {
    /// Service endpoint
    #[arg(
        long,
        env = "WML_URL",
        default_value = "https://us-south.ml.cloud.ibm.com"
    )]
    pub url: String,

    /// IAM bearer token (Authorization: Bearer)
    #[arg(long, env = "WML_TOKEN")]
    pub token: Option<String>,

    /// API version date (YYYY-MM-DD)
    #[arg(long, env = "WML_VERSION")]
    pub version_date: Option<String>,

    /// Deployment space to operate in
    #[arg(long, env = "WML_SPACE_ID")]
    pub space_id: Option<String>,

    /// Project to operate in (alternative to --space-id)
    #[arg(long, env = "WML_PROJECT_ID")]
    pub project_id: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Deployment management
    Deployment {
        #[command(subcommand)]
        subcommand: DeploymentCommand,
    },
    /// Model management
    Model {
        #[command(subcommand)]
        subcommand: ModelCommand,
    },
    /// Training runs
    Training {
        #[command(subcommand)]
        subcommand: TrainingCommand,
    },
    /// Batch scoring jobs
    Job {
        #[command(subcommand)]
        subcommand: JobCommand,
    },
    /// Pipelines
    Pipeline {
        #[command(subcommand)]
        subcommand: AssetCommand,
    },
    /// Deployable functions
    Function {
        #[command(subcommand)]
        subcommand: AssetCommand,
    },
    /// Experiments
    Experiment {
        #[command(subcommand)]
        subcommand: AssetCommand,
    },
    /// Service instances
    Instance {
        #[command(subcommand)]
        subcommand: InstanceCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum DeploymentCommand {
    /// List deployments in the scope
    List {
        /// Filter by deployment state (e.g. ready, failed)
        #[arg(long)]
        state: Option<String>,
    },
    /// Show one deployment
    Get { id: String },
    /// Delete a deployment
    Delete { id: String },
}

#[derive(Debug, Subcommand)]
pub enum ModelCommand {
    /// List models in the scope
    List {
        /// Filter by tag
        #[arg(long)]
        tag: Option<String>,
    },
    /// Show one model
    Get {
        id: String,
        /// Revision to fetch
        #[arg(long)]
        rev: Option<String>,
    },
    /// Delete a model
    Delete { id: String },
    /// Download model content
    Download {
        id: String,
        /// Output file
        #[arg(long, default_value = "model.zip")]
        output: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum TrainingCommand {
    /// List training runs
    List {
        /// Filter by state (e.g. running, completed)
        #[arg(long)]
        state: Option<String>,
    },
    /// Show one training run
    Get { id: String },
    /// Cancel a training run
    Cancel {
        id: String,
        /// Purge metadata of a finished run
        #[arg(long)]
        hard_delete: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum JobCommand {
    /// List jobs in the scope
    List,
    /// Show one job
    Get { id: String },
    /// Cancel a job
    Cancel {
        id: String,
        /// Purge metadata of a finished job
        #[arg(long)]
        hard_delete: bool,
    },
}

/// Shared verbs for the simple asset resources.
#[derive(Debug, Subcommand)]
pub enum AssetCommand {
    /// List resources in the scope
    List,
    /// Show one resource
    Get { id: String },
    /// Delete a resource
    Delete { id: String },
}

#[derive(Debug, Subcommand)]
pub enum InstanceCommand {
    /// List service instances
    List,
    /// Show one instance
    Get { id: String },
}
