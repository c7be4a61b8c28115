//! Per-kind projection of Kubernetes objects into display rows.
//!
//! Each kind has a [`Projector`] that maps one typed object into a
//! [`ResourceRow`] matching its kind's header. The list pipeline in
//! [`KubeConnection`](super::KubeConnection) is generic over it.
//!
//! Shared rules:
//! - absent counters render as `0`, absent strings as empty
//! - AGE is measured from `metadata.creationTimestamp` to the list time

mod event;
mod node;
mod pod;
mod service;
mod workload;

pub use event::EventProjector;
pub use node::NodeProjector;
pub use pod::PodProjector;
pub use service::ServiceProjector;
pub use workload::{
    DaemonSetProjector, DeploymentProjector, ReplicaSetProjector, StatefulSetProjector,
};

use chrono::{DateTime, Utc};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kdebug_domain::{DebugError, ProjectedTable, ResourceKind, ResourceRow, age_since};

/// Maps objects of type `K` into rows of one [`ResourceKind`] table.
pub trait Projector<K> {
    const KIND: ResourceKind;

    fn project(item: &K, now: DateTime<Utc>) -> Result<ResourceRow, DebugError>;
}

/// Project every item, keeping the order the control plane returned.
///
/// The first item that cannot be projected fails the whole table.
pub fn project_all<K, P: Projector<K>>(
    items: &[K],
    now: DateTime<Utc>,
) -> Result<ProjectedTable, DebugError> {
    let mut table = ProjectedTable::new(P::KIND);
    for item in items {
        table.push(P::project(item, now)?);
    }
    Ok(table)
}

/// Creation time of an object, if it carries one.
pub(crate) fn creation_time(meta: &ObjectMeta) -> Option<DateTime<Utc>> {
    let stamp = &meta.creation_timestamp.as_ref()?.0;
    DateTime::from_timestamp(stamp.timestamp(), stamp.timestamp_subsec_nanos())
}

pub(crate) fn age(meta: &ObjectMeta, now: DateTime<Utc>) -> String {
    age_since(creation_time(meta), now)
}

pub(crate) fn name(meta: &ObjectMeta) -> String {
    meta.name.clone().unwrap_or_default()
}

pub(crate) fn namespace(meta: &ObjectMeta) -> String {
    meta.namespace.clone().unwrap_or_default()
}

pub(crate) fn count(value: Option<i32>) -> String {
    value.unwrap_or(0).to_string()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{DateTime, TimeDelta, Utc};
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
    use serde_json::json;

    pub fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    /// Metadata for an object created `age` before [`now`].
    pub fn meta(namespace: Option<&str>, name: &str, age: TimeDelta) -> ObjectMeta {
        let created = (now() - age).to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
        let mut value = json!({ "name": name, "creationTimestamp": created });
        if let Some(ns) = namespace {
            value["namespace"] = json!(ns);
        }
        serde_json::from_value(value).unwrap()
    }
}
