use crate::{
    data::models::launch_event::app_link_extras_model::AppLinkExtrasModel,
    domain::entities::launch_event::LaunchEvent,
};

const KEY_APPLINK_DATA: &str = "al_applink_data";
const KEY_EXTRAS: &str = "extras";
const KEY_CONTEXT_TOKEN_ID: &str = "context_token_id";
const KEY_GAME_REQUEST_ID: &str = "game_request_id";
const KEY_PAYLOAD: &str = "payload";

pub(crate) trait LaunchEventPayloadDatasource: Send + Sync {
    /// Walk a launch event's app-link structure down to its `extras`
    /// container and read the payload fields out of it.
    ///
    /// Returns `None` when any level of the structure is missing. That is the
    /// normal shape of a launch that carried no gaming payload, not an error.
    fn extract_app_link_extras(&self, event: &LaunchEvent) -> Option<AppLinkExtrasModel>;
}

pub(crate) struct LaunchEventPayloadDatasourceImpl;

impl LaunchEventPayloadDatasource for LaunchEventPayloadDatasourceImpl {
    fn extract_app_link_extras(&self, event: &LaunchEvent) -> Option<AppLinkExtrasModel> {
        let extras = event.get_nested(KEY_APPLINK_DATA)?.get_nested(KEY_EXTRAS)?;
        Some(AppLinkExtrasModel {
            game_request_id: extras.get_string(KEY_GAME_REQUEST_ID).map(str::to_string),
            payload: extras.get_string(KEY_PAYLOAD).map(str::to_string),
            context_token_id: extras.get_string(KEY_CONTEXT_TOKEN_ID).map(str::to_string),
        })
    }
}

impl LaunchEventPayloadDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}
