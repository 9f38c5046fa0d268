/// Gaming payload forwarded to this game by the referring request.
///
/// Both fields are optional on the wire; a record with neither field set is
/// still a valid extraction result. Each successful extraction replaces the
/// whole record, fields are never merged across loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GamingPayload {
    /// ID of the game request that referred the user to the game.
    pub game_request_id: Option<String>,
    /// Opaque payload string attached to the referring request.
    pub payload: Option<String>,
}
