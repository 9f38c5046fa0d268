use crate::{
    data::models::cloud_game::startup_payload_model::StartupPayloadModel, errors::PayloadError,
};

pub(crate) trait CloudGamePayloadDatasource: Send + Sync {
    /// Parse the JSON-encoded startup string supplied by the cloud launcher.
    ///
    /// raw:
    ///   The raw startup string, expected to hold a single JSON object with a
    ///   string `payload` field.
    fn parse_startup_payload(&self, raw: &str) -> Result<StartupPayloadModel, PayloadError>;
}

pub(crate) struct CloudGamePayloadDatasourceImpl;

impl CloudGamePayloadDatasource for CloudGamePayloadDatasourceImpl {
    fn parse_startup_payload(&self, raw: &str) -> Result<StartupPayloadModel, PayloadError> {
        Ok(serde_json::from_str(raw)?)
    }
}

impl CloudGamePayloadDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_payload_and_request_id() {
        let model = CloudGamePayloadDatasourceImpl::new()
            .parse_startup_payload(r#"{"game_request_id":"r1","payload":"p1"}"#)
            .unwrap();
        assert_eq!(model.payload, "p1");
        assert_eq!(model.game_request_id, "r1");
    }

    #[test]
    fn missing_request_id_defaults_to_empty() {
        let model = CloudGamePayloadDatasourceImpl::new()
            .parse_startup_payload(r#"{"payload":"p1"}"#)
            .unwrap();
        assert_eq!(model.payload, "p1");
        assert_eq!(model.game_request_id, "");
    }

    #[test]
    fn missing_payload_field_is_an_error() {
        let result = CloudGamePayloadDatasourceImpl::new()
            .parse_startup_payload(r#"{"game_request_id":"r1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn non_string_payload_is_an_error() {
        let result =
            CloudGamePayloadDatasourceImpl::new().parse_startup_payload(r#"{"payload":42}"#);
        assert!(result.is_err());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let result = CloudGamePayloadDatasourceImpl::new().parse_startup_payload("not json");
        assert!(result.is_err());
    }
}
