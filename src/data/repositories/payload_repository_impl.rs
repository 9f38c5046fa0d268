use log::error;
use parking_lot::Mutex;

use crate::{
    data::datasources::{
        cloud_game_payload_datasource::{
            CloudGamePayloadDatasource, CloudGamePayloadDatasourceImpl,
        },
        launch_event_payload_datasource::{
            LaunchEventPayloadDatasource, LaunchEventPayloadDatasourceImpl,
        },
    },
    domain::{
        entities::{
            gaming_payload::GamingPayload, launch_event::LaunchEvent,
            session_context::SessionContext,
        },
        repositories::payload_repository::PayloadRepository,
    },
};

pub(crate) struct PayloadRepositoryImpl<
    A: CloudGamePayloadDatasource,
    B: LaunchEventPayloadDatasource,
> {
    cloud_game_payload_datasource: A,
    launch_event_payload_datasource: B,
    // Mutex: held only to swap or clone the record. Concurrent loads are
    // last-writer-wins.
    current_payload: Mutex<Option<GamingPayload>>,
}

impl<A: CloudGamePayloadDatasource, B: LaunchEventPayloadDatasource> PayloadRepository
    for PayloadRepositoryImpl<A, B>
{
    fn load_from_startup_string(&self, raw: &str) {
        let model = match self.cloud_game_payload_datasource.parse_startup_payload(raw) {
            Ok(model) => model,
            Err(e) => {
                error!("failed to load gaming payload from startup string: {e}");
                return;
            }
        };
        *self.current_payload.lock() = Some(GamingPayload {
            game_request_id: Some(model.game_request_id),
            payload: Some(model.payload),
        });
    }

    fn load_from_launch_event(&self, event: Option<&LaunchEvent>) {
        let Some(event) = event else {
            return;
        };
        let Some(extras) = self
            .launch_event_payload_datasource
            .extract_app_link_extras(event)
        else {
            return;
        };
        if let Some(token) = &extras.context_token_id {
            SessionContext::set_current(SessionContext::new(token));
        }
        // An `extras` container with neither payload field still replaces the
        // stored record with an empty one; only a missing container leaves
        // prior state untouched.
        *self.current_payload.lock() = Some(GamingPayload {
            game_request_id: extras.game_request_id,
            payload: extras.payload,
        });
    }

    fn game_request_id(&self) -> Option<String> {
        self.current_payload
            .lock()
            .as_ref()
            .and_then(|p| p.game_request_id.clone())
    }

    fn payload(&self) -> Option<String> {
        self.current_payload
            .lock()
            .as_ref()
            .and_then(|p| p.payload.clone())
    }
}

impl PayloadRepositoryImpl<CloudGamePayloadDatasourceImpl, LaunchEventPayloadDatasourceImpl> {
    pub(crate) fn new() -> Self {
        Self {
            cloud_game_payload_datasource: CloudGamePayloadDatasourceImpl::new(),
            launch_event_payload_datasource: LaunchEventPayloadDatasourceImpl::new(),
            current_payload: Mutex::new(None),
        }
    }
}
