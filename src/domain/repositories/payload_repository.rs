use crate::domain::entities::launch_event::LaunchEvent;

pub trait PayloadRepository: Send + Sync {
    /// Load the gaming payload bundled in the start arguments of a game
    /// running on the cloud platform.
    ///
    /// Failures (malformed JSON, missing `payload` field) are logged and
    /// absorbed: the previously-stored payload stays in place and nothing is
    /// reported to the caller.
    fn load_from_startup_string(&self, raw: &str);

    /// Load the gaming payload bundled within the launch event that started
    /// the game.
    ///
    /// An absent event, or one without app-link data, is a no-op. When the
    /// event carries a context token, that token is installed as the current
    /// session context.
    fn load_from_launch_event(&self, event: Option<&LaunchEvent>);

    /// ID of the game request that referred the user to the game, if any.
    fn game_request_id(&self) -> Option<String>;

    /// Payload forwarded from the referring request, if any.
    fn payload(&self) -> Option<String>;
}
