//! Workload controllers: deployments, stateful sets, replica sets and
//! daemon sets.

use super::{Projector, age, count, name, namespace};
use chrono::{DateTime, Utc};
use k8s_openapi::api::apps::v1::{DaemonSet, Deployment, ReplicaSet, StatefulSet};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kdebug_domain::{DebugError, ResourceKind, ResourceRow};

pub struct DeploymentProjector;

impl Projector<Deployment> for DeploymentProjector {
    const KIND: ResourceKind = ResourceKind::Deployment;

    fn project(deploy: &Deployment, now: DateTime<Utc>) -> Result<ResourceRow, DebugError> {
        let status = deploy.status.as_ref();
        Ok(ResourceRow::new(vec![
            namespace(&deploy.metadata),
            name(&deploy.metadata),
            format!(
                "{}/{}",
                count(status.and_then(|s| s.ready_replicas)),
                count(status.and_then(|s| s.replicas))
            ),
            count(status.and_then(|s| s.updated_replicas)),
            count(status.and_then(|s| s.available_replicas)),
            age(&deploy.metadata, now),
        ]))
    }
}

pub struct StatefulSetProjector;

impl Projector<StatefulSet> for StatefulSetProjector {
    const KIND: ResourceKind = ResourceKind::StatefulSet;

    fn project(sts: &StatefulSet, now: DateTime<Utc>) -> Result<ResourceRow, DebugError> {
        let desired = desired_replicas(
            Self::KIND,
            &sts.metadata,
            sts.spec.as_ref().and_then(|s| s.replicas),
        )?;
        let ready = count(sts.status.as_ref().and_then(|s| s.ready_replicas));

        Ok(ResourceRow::new(vec![
            namespace(&sts.metadata),
            name(&sts.metadata),
            format!("{ready}/{desired}"),
            age(&sts.metadata, now),
        ]))
    }
}

pub struct ReplicaSetProjector;

impl Projector<ReplicaSet> for ReplicaSetProjector {
    const KIND: ResourceKind = ResourceKind::ReplicaSet;

    fn project(rs: &ReplicaSet, now: DateTime<Utc>) -> Result<ResourceRow, DebugError> {
        let desired = desired_replicas(
            Self::KIND,
            &rs.metadata,
            rs.spec.as_ref().and_then(|s| s.replicas),
        )?;
        let status = rs.status.as_ref();

        Ok(ResourceRow::new(vec![
            namespace(&rs.metadata),
            name(&rs.metadata),
            desired.to_string(),
            count(status.map(|s| s.replicas)),
            count(status.and_then(|s| s.ready_replicas)),
            age(&rs.metadata, now),
        ]))
    }
}

pub struct DaemonSetProjector;

impl Projector<DaemonSet> for DaemonSetProjector {
    const KIND: ResourceKind = ResourceKind::DaemonSet;

    fn project(ds: &DaemonSet, now: DateTime<Utc>) -> Result<ResourceRow, DebugError> {
        let status = ds.status.as_ref();

        // matchLabels is a BTreeMap, so pairs come out sorted by key.
        let selector = ds
            .spec
            .as_ref()
            .and_then(|s| s.selector.match_labels.as_ref())
            .map(|labels| {
                labels
                    .iter()
                    .map(|(k, v)| format!("{k}={v}"))
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .unwrap_or_default();

        Ok(ResourceRow::new(vec![
            namespace(&ds.metadata),
            name(&ds.metadata),
            count(status.map(|s| s.desired_number_scheduled)),
            count(status.map(|s| s.current_number_scheduled)),
            count(status.map(|s| s.number_ready)),
            count(status.and_then(|s| s.updated_number_scheduled)),
            count(status.and_then(|s| s.number_available)),
            selector,
            age(&ds.metadata, now),
        ]))
    }
}

/// `spec.replicas` of a controller that has no sensible default for it.
fn desired_replicas(
    kind: ResourceKind,
    meta: &ObjectMeta,
    replicas: Option<i32>,
) -> Result<i32, DebugError> {
    replicas.ok_or_else(|| {
        DebugError::invalid_resource(kind, name(meta), "spec.replicas is not set")
    })
}
