mod args;
mod output;

use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wml_client::{
    AuthProvider, ListDeploymentsOptions, ListInstancesOptions, ListOptions, ListTrainingsOptions,
    Scope, WmlClient,
};

use crate::args::{
    Args, AssetCommand, Command, DeploymentCommand, InstanceCommand, JobCommand, ModelCommand,
    TrainingCommand,
};
use crate::output::{
    print_deployments, print_detail, print_instances, print_jobs, print_resources, print_trainings,
};

fn resolve_scope(space_id: Option<String>, project_id: Option<String>) -> Result<Scope> {
    match (space_id, project_id) {
        (Some(space), None) => Ok(Scope::space(space)),
        (None, Some(project)) => Ok(Scope::project(project)),
        (Some(_), Some(_)) => bail!("--space-id and --project-id are mutually exclusive"),
        (None, None) => bail!("either --space-id or --project-id is required"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let Args {
        url,
        token,
        version_date,
        space_id,
        project_id,
        command,
    } = args;

    let mut builder = WmlClient::builder().base_url(&url);
    if let Some(token) = token {
        builder = builder.auth(AuthProvider::bearer(token));
    }
    if let Some(version) = version_date {
        builder = builder.version(version);
    }
    let client = builder.build()?;

    match command {
        Command::Deployment { subcommand } => {
            let scope = resolve_scope(space_id, project_id)?;
            match subcommand {
                DeploymentCommand::List { state } => {
                    let opts = ListDeploymentsOptions {
                        state,
                        ..Default::default()
                    };
                    let page = client.list_deployments(&scope, &opts).await?;
                    print_deployments(&page.resources);
                }
                DeploymentCommand::Get { id } => {
                    print_detail(&client.get_deployment(&id, &scope).await?)?;
                }
                DeploymentCommand::Delete { id } => {
                    client.delete_deployment(&id, &scope).await?;
                    println!("✓ Deployment '{id}' deleted");
                }
            }
        }
        Command::Model { subcommand } => {
            let scope = resolve_scope(space_id, project_id)?;
            match subcommand {
                ModelCommand::List { tag } => {
                    let opts = ListOptions {
                        tag_value: tag,
                        ..Default::default()
                    };
                    let models = client.models_pager(&scope, &opts).get_all().await?;
                    print_resources("Models", &models);
                }
                ModelCommand::Get { id, rev } => {
                    print_detail(&client.get_model(&id, &scope, rev.as_deref()).await?)?;
                }
                ModelCommand::Delete { id } => {
                    client.delete_model(&id, &scope).await?;
                    println!("✓ Model '{id}' deleted");
                }
                ModelCommand::Download { id, output } => {
                    let bytes = client.download_model_content(&id, &scope, None).await?;
                    std::fs::write(&output, &bytes)?;
                    println!("✓ Wrote {} bytes to {output}", bytes.len());
                }
            }
        }
        Command::Training { subcommand } => {
            let scope = resolve_scope(space_id, project_id)?;
            match subcommand {
                TrainingCommand::List { state } => {
                    let opts = ListTrainingsOptions {
                        state,
                        ..Default::default()
                    };
                    let runs = client.trainings_pager(&scope, &opts).get_all().await?;
                    print_trainings(&runs);
                }
                TrainingCommand::Get { id } => {
                    print_detail(&client.get_training(&id, &scope).await?)?;
                }
                TrainingCommand::Cancel { id, hard_delete } => {
                    client.delete_training(&id, &scope, hard_delete).await?;
                    if hard_delete {
                        println!("✓ Training '{id}' deleted");
                    } else {
                        println!("✓ Training '{id}' canceled");
                    }
                }
            }
        }
        Command::Job { subcommand } => {
            let scope = resolve_scope(space_id, project_id)?;
            match subcommand {
                JobCommand::List => {
                    let page = client.list_deployment_jobs(&scope).await?;
                    print_jobs(&page.resources);
                }
                JobCommand::Get { id } => {
                    print_detail(&client.get_deployment_job(&id, &scope, None).await?)?;
                }
                JobCommand::Cancel { id, hard_delete } => {
                    client.delete_deployment_job(&id, &scope, hard_delete).await?;
                    println!("✓ Job '{id}' canceled");
                }
            }
        }
        Command::Pipeline { subcommand } => {
            let scope = resolve_scope(space_id, project_id)?;
            let opts = ListOptions::default();
            match subcommand {
                AssetCommand::List => {
                    let pipelines = client.pipelines_pager(&scope, &opts).get_all().await?;
                    print_resources("Pipelines", &pipelines);
                }
                AssetCommand::Get { id } => {
                    print_detail(&client.get_pipeline(&id, &scope, None).await?)?;
                }
                AssetCommand::Delete { id } => {
                    client.delete_pipeline(&id, &scope).await?;
                    println!("✓ Pipeline '{id}' deleted");
                }
            }
        }
        Command::Function { subcommand } => {
            let scope = resolve_scope(space_id, project_id)?;
            let opts = ListOptions::default();
            match subcommand {
                AssetCommand::List => {
                    let functions = client.functions_pager(&scope, &opts).get_all().await?;
                    print_resources("Functions", &functions);
                }
                AssetCommand::Get { id } => {
                    print_detail(&client.get_function(&id, &scope, None).await?)?;
                }
                AssetCommand::Delete { id } => {
                    client.delete_function(&id, &scope).await?;
                    println!("✓ Function '{id}' deleted");
                }
            }
        }
        Command::Experiment { subcommand } => {
            let scope = resolve_scope(space_id, project_id)?;
            let opts = ListOptions::default();
            match subcommand {
                AssetCommand::List => {
                    let experiments = client.experiments_pager(&scope, &opts).get_all().await?;
                    print_resources("Experiments", &experiments);
                }
                AssetCommand::Get { id } => {
                    print_detail(&client.get_experiment(&id, &scope, None).await?)?;
                }
                AssetCommand::Delete { id } => {
                    client.delete_experiment(&id, &scope).await?;
                    println!("✓ Experiment '{id}' deleted");
                }
            }
        }
        Command::Instance { subcommand } => match subcommand {
            InstanceCommand::List => {
                let opts = ListInstancesOptions::default();
                let instances = client.instances_pager(&opts).get_all().await?;
                print_instances(&instances);
            }
            InstanceCommand::Get { id } => {
                print_detail(&client.get_instance(&id).await?)?;
            }
        },
    }

    Ok(())
}
