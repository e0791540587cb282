pub mod deployment;
pub mod error_body;
pub mod experiment;
pub mod function;
pub mod instance;
pub mod job;
pub mod metadata;
pub mod model;
pub mod pagination;
pub mod patch;
pub mod pipeline;
pub mod remote_training_system;
pub mod scoring;
pub mod training;
pub mod training_definition;

pub use deployment::{
    BatchDeployment, Deployment, DeploymentEntity, DeploymentRequest, DeploymentState,
    DeploymentStatus, OnlineDeployment,
};
pub use error_body::{ApiError, ApiErrorBody};
pub use experiment::{
    EvaluationDefinition, Experiment, ExperimentEntity, ExperimentRequest, TrainingReference,
};
pub use function::{Function, FunctionEntity, FunctionRequest};
pub use instance::{Instance, InstanceEntity, InstancePlan};
pub use job::{
    DeploymentJob, DeploymentJobEntity, DeploymentJobRequest, JobDefinition, JobDefinitionEntity,
    JobDefinitionRequest, JobScoring, JobState, JobStatus, PlatformJob,
};
pub use metadata::{
    CommitInfo, DataConnectionRef, HardwareSpecRel, Rel, Resource, ResourceMeta, SoftwareSpecRel,
    StatusMessage, SystemDetails, Warning,
};
pub use model::{
    ContentMetadata, DataSchema, Model, ModelEntity, ModelRequest, ModelSchemas, ModelSize,
};
pub use pagination::{start_param, PaginationLink, ResourceCollection};
pub use patch::{JsonPatchOperation, PatchOp};
pub use pipeline::{Pipeline, PipelineEntity, PipelineRequest};
pub use remote_training_system::{
    RemoteIdentity, RemoteTrainingSystem, RemoteTrainingSystemEntity, RemoteTrainingSystemRequest,
};
pub use scoring::{ScoringInput, ScoringOutput, SyncScoringPayload, SyncScoringResult};
pub use training::{
    Training, TrainingEntity, TrainingPipelineRef, TrainingRequest, TrainingState, TrainingStatus,
};
pub use training_definition::{
    TrainingDefinition, TrainingDefinitionEntity, TrainingDefinitionRequest,
};
