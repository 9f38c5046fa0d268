/// Fields read from the `extras` container of an app-link launch event.
///
/// All three are optional on the wire; the platform only sets the ones the
/// referring surface provided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AppLinkExtrasModel {
    pub(crate) game_request_id: Option<String>,
    pub(crate) payload: Option<String>,
    pub(crate) context_token_id: Option<String>,
}
