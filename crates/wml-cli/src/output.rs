use chrono::{DateTime, Utc};
use serde::Serialize;

use wml_common::{
    Deployment, DeploymentJob, Instance, Resource, ResourceMeta, Training,
};

fn fmt_time(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn meta_name(meta: &ResourceMeta) -> &str {
    meta.name.as_deref().unwrap_or("-")
}

/// Generic table for resources where only the metadata matters
/// (pipelines, functions, experiments).
pub fn print_resources<E>(title: &str, resources: &[Resource<E>]) {
    println!("\n=== {title} ===\n");
    if resources.is_empty() {
        println!("No resources found.");
        return;
    }
    println!("{:<38} {:<30} {:<17}", "ID", "Name", "Created");
    for res in resources {
        println!(
            "{:<38} {:<30} {:<17}",
            res.metadata.id,
            meta_name(&res.metadata),
            fmt_time(res.metadata.created_at),
        );
    }
    println!();
}

pub fn print_deployments(deployments: &[Deployment]) {
    println!("\n=== Deployments ===\n");
    if deployments.is_empty() {
        println!("No deployments found.");
        return;
    }
    println!(
        "{:<38} {:<25} {:<10} {:<10} {:<17}",
        "ID", "Name", "Type", "State", "Created"
    );
    for dep in deployments {
        let kind = if dep.entity.online.is_some() {
            "online"
        } else if dep.entity.batch.is_some() {
            "batch"
        } else {
            "-"
        };
        let state = dep
            .entity
            .status
            .as_ref()
            .and_then(|s| s.state)
            .map(|s| format!("{s:?}").to_lowercase())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<38} {:<25} {:<10} {:<10} {:<17}",
            dep.metadata.id,
            meta_name(&dep.metadata),
            kind,
            state,
            fmt_time(dep.metadata.created_at),
        );
    }
    println!();
}

pub fn print_trainings(trainings: &[Training]) {
    println!("\n=== Trainings ===\n");
    if trainings.is_empty() {
        println!("No training runs found.");
        return;
    }
    println!(
        "{:<38} {:<25} {:<12} {:<17} {:<17}",
        "ID", "Name", "State", "Started", "Completed"
    );
    for run in trainings {
        let (state, completed) = match &run.entity.status {
            Some(status) => (
                format!("{:?}", status.state).to_lowercase(),
                fmt_time(status.completed_at),
            ),
            None => ("-".to_string(), "-".to_string()),
        };
        println!(
            "{:<38} {:<25} {:<12} {:<17} {:<17}",
            run.metadata.id,
            meta_name(&run.metadata),
            state,
            fmt_time(run.metadata.created_at),
            completed,
        );
    }
    println!();
}

pub fn print_jobs(jobs: &[DeploymentJob]) {
    println!("\n=== Deployment Jobs ===\n");
    if jobs.is_empty() {
        println!("No jobs found.");
        return;
    }
    println!(
        "{:<38} {:<38} {:<12} {:<17}",
        "ID", "Deployment", "State", "Created"
    );
    for job in jobs {
        let deployment = job
            .entity
            .deployment
            .as_ref()
            .map(|d| d.id.as_str())
            .unwrap_or("-");
        let state = job
            .entity
            .scoring
            .as_ref()
            .and_then(|s| s.status.as_ref())
            .and_then(|s| s.state)
            .map(|s| format!("{s:?}").to_lowercase())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<38} {:<38} {:<12} {:<17}",
            job.metadata.id,
            deployment,
            state,
            fmt_time(job.metadata.created_at),
        );
    }
    println!();
}

pub fn print_instances(instances: &[Instance]) {
    println!("\n=== Instances ===\n");
    if instances.is_empty() {
        println!("No instances found.");
        return;
    }
    println!("{:<38} {:<20} {:<12}", "ID", "Plan", "Status");
    for inst in instances {
        let plan = inst
            .entity
            .plan
            .as_ref()
            .map(|p| p.name.as_deref().unwrap_or(p.id.as_str()))
            .unwrap_or("-");
        println!(
            "{:<38} {:<20} {:<12}",
            inst.metadata.id,
            plan,
            inst.entity.status.as_deref().unwrap_or("-"),
        );
    }
    println!();
}

/// Full resource document as pretty JSON, for `get` commands.
pub fn print_detail<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
