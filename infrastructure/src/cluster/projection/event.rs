use super::{Projector, age, namespace};
use chrono::{DateTime, Utc};
use k8s_openapi::api::core::v1::Event;
use kdebug_domain::{DebugError, ResourceKind, ResourceRow};

pub struct EventProjector;

impl Projector<Event> for EventProjector {
    const KIND: ResourceKind = ResourceKind::Event;

    fn project(event: &Event, now: DateTime<Utc>) -> Result<ResourceRow, DebugError> {
        let involved = &event.involved_object;
        let object = format!(
            "{}/{}",
            involved.kind.as_deref().unwrap_or_default().to_lowercase(),
            involved.name.as_deref().unwrap_or_default()
        );

        let source = event.source.as_ref();
        let from = format!(
            "{}/{}",
            source.and_then(|s| s.component.as_deref()).unwrap_or_default(),
            source.and_then(|s| s.host.as_deref()).unwrap_or_default()
        );

        Ok(ResourceRow::new(vec![
            namespace(&event.metadata),
            event.type_.clone().unwrap_or_default(),
            event.reason.clone().unwrap_or_default(),
            object,
            age(&event.metadata, now),
            from,
            event.message.clone().unwrap_or_default(),
        ]))
    }
}
