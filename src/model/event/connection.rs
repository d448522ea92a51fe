use super::FromEventPayload;
use crate::internal::prelude::*;
use crate::model::prelude::*;
use crate::model::utils::required;

/// Sent by the server once the connection is established, and periodically after that.
///
/// The first health check of a connection carries the current user.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct HealthCheckEvent {
    pub connection_id: String,
    pub current_user_id: Option<UserId>,
    payload: Arc<EventPayload>,
}

impl HealthCheckEvent {
    #[must_use]
    pub fn current_user(&self) -> Option<&CurrentUserPayload> {
        self.payload.current_user.as_ref()
    }
}

impl FromEventPayload for HealthCheckEvent {
    fn from_payload(payload: Arc<EventPayload>) -> Result<Self> {
        Ok(Self {
            connection_id: required(payload.connection_id.clone(), "connection_id")?,
            current_user_id: payload.current_user_id().cloned(),
            payload,
        })
    }
}

event_capabilities!(HealthCheckEvent);
