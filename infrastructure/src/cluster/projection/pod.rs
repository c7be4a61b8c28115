use super::{Projector, age, name, namespace};
use chrono::{DateTime, Utc};
use k8s_openapi::api::core::v1::Pod;
use kdebug_domain::{DebugError, ResourceKind, ResourceRow};

pub struct PodProjector;

impl Projector<Pod> for PodProjector {
    const KIND: ResourceKind = ResourceKind::Pod;

    fn project(pod: &Pod, now: DateTime<Utc>) -> Result<ResourceRow, DebugError> {
        let status = pod.status.as_ref();
        let spec = pod.spec.as_ref();

        // READY counts Ready=True pod conditions against declared containers.
        let ready = status
            .and_then(|s| s.conditions.as_ref())
            .map(|conditions| {
                conditions
                    .iter()
                    .filter(|c| c.type_ == "Ready" && c.status == "True")
                    .count()
            })
            .unwrap_or(0);
        let declared = spec.map(|s| s.containers.len()).unwrap_or(0);

        let restarts: i64 = status
            .and_then(|s| s.container_statuses.as_ref())
            .map(|statuses| statuses.iter().map(|c| i64::from(c.restart_count)).sum())
            .unwrap_or(0);

        Ok(ResourceRow::new(vec![
            namespace(&pod.metadata),
            name(&pod.metadata),
            format!("{ready}/{declared}"),
            status.and_then(|s| s.phase.clone()).unwrap_or_default(),
            restarts.to_string(),
            age(&pod.metadata, now),
            spec.and_then(|s| s.node_name.clone()).unwrap_or_default(),
        ]))
    }
}
