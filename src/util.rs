use once_cell::sync::Lazy;

use crate::{
    data::{
        datasources::{
            cloud_game_payload_datasource::CloudGamePayloadDatasourceImpl,
            launch_event_payload_datasource::LaunchEventPayloadDatasourceImpl,
        },
        repositories::payload_repository_impl::PayloadRepositoryImpl,
    },
    domain::{
        entities::launch_event::LaunchEvent, repositories::payload_repository::PayloadRepository,
    },
};

pub struct GamingPayloadUtil<R: PayloadRepository> {
    payload_repository: R,
}

impl<R: PayloadRepository> GamingPayloadUtil<R> {
    /// Loads any gaming payload bundled in the start arguments of a game
    /// running on the cloud platform. Called by the cloud init handler with
    /// the JSON-encoded startup string.
    pub fn load_payload_from_startup_string(&self, raw: &str) {
        self.payload_repository.load_from_startup_string(raw)
    }

    /// Loads any gaming payload bundled within the launch event that started
    /// the game.
    pub fn load_payload_from_launch_event(&self, event: Option<&LaunchEvent>) {
        self.payload_repository.load_from_launch_event(event)
    }

    /// The game request ID that referred the user to the game.
    ///
    /// When a user sends a game request, the recipient can launch the game
    /// directly from the platform; the resulting deep link carries the
    /// referring request's ID.
    pub fn game_request_id(&self) -> Option<String> {
        self.payload_repository.game_request_id()
    }

    /// The payload sent to this game by the referring request, if any.
    pub fn payload(&self) -> Option<String> {
        self.payload_repository.payload()
    }
}

impl GamingPayloadUtil<PayloadRepositoryImpl<CloudGamePayloadDatasourceImpl, LaunchEventPayloadDatasourceImpl>>
{
    pub fn new() -> Self {
        Self {
            payload_repository: PayloadRepositoryImpl::new(),
        }
    }
}

// One instance shared by the whole process; hosts that need isolated state
// (tests, mostly) construct their own with `GamingPayloadUtil::new`.
static SHARED: Lazy<
    GamingPayloadUtil<
        PayloadRepositoryImpl<CloudGamePayloadDatasourceImpl, LaunchEventPayloadDatasourceImpl>,
    >,
> = Lazy::new(GamingPayloadUtil::new);

/// Process-wide variant of [`GamingPayloadUtil::load_payload_from_startup_string`].
pub fn load_payload_from_startup_string(raw: &str) {
    SHARED.load_payload_from_startup_string(raw)
}

/// Process-wide variant of [`GamingPayloadUtil::load_payload_from_launch_event`].
pub fn load_payload_from_launch_event(event: Option<&LaunchEvent>) {
    SHARED.load_payload_from_launch_event(event)
}

/// Process-wide variant of [`GamingPayloadUtil::game_request_id`].
pub fn game_request_id() -> Option<String> {
    SHARED.game_request_id()
}

/// Process-wide variant of [`GamingPayloadUtil::payload`].
pub fn payload() -> Option<String> {
    SHARED.payload()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isolated_instances_do_not_share_state() {
        let a = GamingPayloadUtil::new();
        let b = GamingPayloadUtil::new();
        a.load_payload_from_startup_string(r#"{"game_request_id":"r1","payload":"p1"}"#);
        assert_eq!(a.payload().as_deref(), Some("p1"));
        assert_eq!(b.payload(), None);
    }

    // The only test touching the process-wide instance; keep it that way so
    // parallel test runs don't race on it.
    #[test]
    fn process_wide_functions_share_one_instance() {
        assert_eq!(payload(), None);
        assert_eq!(game_request_id(), None);

        load_payload_from_startup_string(r#"{"game_request_id":"r9","payload":"p9"}"#);
        assert_eq!(game_request_id().as_deref(), Some("r9"));
        assert_eq!(payload().as_deref(), Some("p9"));
    }
}
