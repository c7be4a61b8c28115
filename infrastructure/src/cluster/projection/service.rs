use super::{Projector, age, name, namespace};
use chrono::{DateTime, Utc};
use k8s_openapi::api::core::v1::Service;
use kdebug_domain::{DebugError, ResourceKind, ResourceRow};

pub struct ServiceProjector;

impl Projector<Service> for ServiceProjector {
    const KIND: ResourceKind = ResourceKind::Service;

    fn project(svc: &Service, now: DateTime<Utc>) -> Result<ResourceRow, DebugError> {
        let spec = svc.spec.as_ref();

        let ports = spec
            .and_then(|s| s.ports.as_ref())
            .map(|ports| {
                ports
                    .iter()
                    .map(|p| format!("{}/{}", p.port, p.protocol.as_deref().unwrap_or_default()))
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .unwrap_or_default();

        Ok(ResourceRow::new(vec![
            namespace(&svc.metadata),
            name(&svc.metadata),
            spec.and_then(|s| s.type_.clone()).unwrap_or_default(),
            spec.and_then(|s| s.cluster_ip.clone()).unwrap_or_default(),
            ports,
            age(&svc.metadata, now),
        ]))
    }
}
