use serde::Deserialize;

/// Startup arguments handed to a game running on the cloud platform.
///
/// The launcher passes these as a JSON-encoded string in the process start
/// arguments. `payload` is the only field guaranteed to be present when a
/// payload was delivered at all; launches that were not triggered by a game
/// request omit `game_request_id`, which decodes as an empty string.
#[derive(Deserialize, Debug)]
pub(crate) struct StartupPayloadModel {
    /// Opaque payload string forwarded from the referring request.
    pub(crate) payload: String,
    /// ID of the referring game request, if the launch came from one.
    #[serde(default)]
    pub(crate) game_request_id: String,
}
