//! The playMe response envelope.

use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::catalogue::CatalogueItem;
use crate::error::{ProtocolError, ResponseError, Result};
use crate::status::ResponseStatus;

/// A parsed `{"response": {...}}` reply from the playMe API.
///
/// The envelope wraps the payload object and derives its status from the
/// embedded `error` object; a payload without one is a success. Failures are
/// surfaced either by inspecting [`status`](Self::status) or by converting
/// with [`into_result`](Self::into_result).
///
/// # Example
///
/// ```
/// use playme_protocol::{Response, ResponseStatus};
///
/// let body = r#"{"response": {"error": {"code": "14030", "description": "Permission denied"}}}"#;
/// let response = Response::from_json(body).unwrap();
/// assert_eq!(response.status(), ResponseStatus::PERMISSION_DENIED);
/// assert!(response.into_result().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    payload: Map<String, Value>,
    status: ResponseStatus,
}

impl Response {
    /// Parse a raw body into a response envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InvalidEnvelope`] when the body is not JSON
    /// or not an object wrapped in a top-level `response` key, and
    /// [`ProtocolError::InvalidStatus`] when an embedded error object
    /// carries an unreadable code.
    pub fn from_json(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| ProtocolError::InvalidEnvelope(e.to_string()))?;
        Self::from_value(value)
    }

    /// Build an envelope from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut outer) = value else {
            return Err(ProtocolError::InvalidEnvelope(
                "expected a JSON object".to_string(),
            ));
        };
        let payload = match outer.remove("response") {
            Some(Value::Object(payload)) => payload,
            Some(_) => {
                return Err(ProtocolError::InvalidEnvelope(
                    "`response` is not an object".to_string(),
                ));
            }
            None => return Err(ProtocolError::MissingField("response".to_string())),
        };
        let status = match payload.get("error") {
            Some(error) => parse_status(error)?,
            None => ResponseStatus::SUCCESS,
        };
        Ok(Self { payload, status })
    }

    /// Status reported by the envelope.
    pub fn status(&self) -> ResponseStatus {
        self.status
    }

    /// Whether the envelope reports success.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The payload object under the `response` key.
    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }

    /// Value for `key` in the payload.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }

    /// Description text from the embedded error object, when present.
    pub fn error_description(&self) -> Option<&str> {
        self.payload.get("error")?.get("description")?.as_str()
    }

    /// Fail with the API-reported error unless the envelope is a success.
    pub fn ensure_success(&self) -> std::result::Result<(), ResponseError> {
        if self.status.is_success() {
            Ok(())
        } else {
            Err(ResponseError::new(
                self.status,
                self.error_description().map(str::to_owned),
            ))
        }
    }

    /// Convert into a result, consuming the envelope.
    pub fn into_result(self) -> std::result::Result<Self, ResponseError> {
        self.ensure_success()?;
        Ok(self)
    }

    /// Extract the typed item stored under `T`'s wire label.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::MissingField`] when the label is absent and
    /// [`ProtocolError::InvalidItem`] when the payload under it does not
    /// parse as `T`.
    pub fn item<T: CatalogueItem>(&self) -> Result<T> {
        let value = self
            .payload
            .get(T::LABEL)
            .ok_or_else(|| ProtocolError::MissingField(T::LABEL.to_string()))?;
        T::deserialize(value).map_err(|e| ProtocolError::InvalidItem {
            label: T::LABEL,
            reason: e.to_string(),
        })
    }

    /// Extract the typed items stored under `T`'s collection label.
    ///
    /// Each element must wrap the item under `T`'s single-item label.
    /// Elements whose wrapped payload does not parse as `T` are dropped, and
    /// so are duplicates of items already collected.
    pub fn collection<T: CatalogueItem>(&self) -> Result<Vec<T>> {
        let list = self
            .payload
            .get(T::COLLECTION_LABEL)
            .ok_or_else(|| ProtocolError::MissingField(T::COLLECTION_LABEL.to_string()))?;
        let entries = list.as_array().ok_or_else(|| ProtocolError::InvalidItem {
            label: T::COLLECTION_LABEL,
            reason: "not an array".to_string(),
        })?;

        let mut items: Vec<T> = Vec::with_capacity(entries.len());
        for entry in entries {
            let value = entry.get(T::LABEL).ok_or_else(|| {
                ProtocolError::MissingField(format!("{}.{}", T::COLLECTION_LABEL, T::LABEL))
            })?;
            if let Ok(item) = T::deserialize(value)
                && !items.contains(&item)
            {
                items.push(item);
            }
        }
        Ok(items)
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wrapped = serde_json::json!({ "response": &self.payload });
        match serde_json::to_string_pretty(&wrapped) {
            Ok(text) => f.write_str(&text),
            Err(_) => Err(fmt::Error),
        }
    }
}

fn parse_status(error: &Value) -> Result<ResponseStatus> {
    let code = error
        .get("code")
        .ok_or_else(|| ProtocolError::MissingField("error.code".to_string()))?;
    // The API serializes the code as a JSON string; a bare number is
    // accepted too.
    let code = match code {
        Value::String(text) => text
            .parse::<u32>()
            .map_err(|_| ProtocolError::InvalidStatus(text.clone()))?,
        Value::Number(number) => number
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| ProtocolError::InvalidStatus(number.to_string()))?,
        other => return Err(ProtocolError::InvalidStatus(other.to_string())),
    };
    Ok(ResponseStatus::from(code))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::catalogue::{Album, Track};

    const SERVICE_INFO: &str = r#"{
        "response": {
            "api": {"version": "1.0.0"},
            "country": {"available": ["us"], "default": ["us"]},
            "format": {"available": ["json", "xml"], "default": ["xml"]}
        }
    }"#;

    #[test]
    fn success_envelope_parses() {
        let response = Response::from_json(SERVICE_INFO).unwrap();
        assert_eq!(response.status(), ResponseStatus::SUCCESS);
        assert!(response.is_success());
        assert_eq!(
            response.get("api").and_then(|api| api.get("version")),
            Some(&json!("1.0.0"))
        );
        assert!(response.into_result().is_ok());
    }

    #[test]
    fn error_envelope_carries_status_and_description() {
        let body =
            r#"{"response": {"error": {"code": "14030", "description": "Permission denied"}}}"#;
        let response = Response::from_json(body).unwrap();
        assert_eq!(response.status(), ResponseStatus::PERMISSION_DENIED);
        assert!(!response.is_success());
        assert_eq!(response.error_description(), Some("Permission denied"));

        let err = response.into_result().unwrap_err();
        assert_eq!(err.status, ResponseStatus::PERMISSION_DENIED);
        assert_eq!(err.description, "Permission denied");
    }

    #[test]
    fn numeric_error_code_is_accepted() {
        let body = r#"{"response": {"error": {"code": 13000}}}"#;
        let response = Response::from_json(body).unwrap();
        assert_eq!(response.status(), ResponseStatus::ITEM_NOT_FOUND);

        let err = response.into_result().unwrap_err();
        assert_eq!(err.description, "Item not found");
    }

    #[test]
    fn non_json_body_is_an_invalid_envelope() {
        let err = Response::from_json("spam").unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidEnvelope(_)));
    }

    #[test]
    fn body_without_response_key_is_rejected() {
        let err = Response::from_json(r#"{"data": {}}"#).unwrap_err();
        assert_eq!(err, ProtocolError::MissingField("response".to_string()));
    }

    #[test]
    fn non_object_response_value_is_rejected() {
        let err = Response::from_json(r#"{"response": [1, 2, 3]}"#).unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidEnvelope(_)));
    }

    #[test]
    fn unreadable_error_code_is_rejected() {
        let err = Response::from_json(r#"{"response": {"error": {"code": "oops"}}}"#).unwrap_err();
        assert_eq!(err, ProtocolError::InvalidStatus("oops".to_string()));

        let err = Response::from_json(r#"{"response": {"error": {}}}"#).unwrap_err();
        assert_eq!(err, ProtocolError::MissingField("error.code".to_string()));
    }

    #[test]
    fn item_extraction_reads_the_wire_label() {
        let body = r#"{"response": {"album": {"albumCode": 782378, "name": "Takk..."}}}"#;
        let response = Response::from_json(body).unwrap();
        let album: Album = response.item().unwrap();
        assert_eq!(album.album_code, 782378);
        assert_eq!(album.name, "Takk...");
    }

    #[test]
    fn item_extraction_fails_when_the_label_is_absent() {
        let response = Response::from_json(SERVICE_INFO).unwrap();
        let err = response.item::<Album>().unwrap_err();
        assert_eq!(err, ProtocolError::MissingField("album".to_string()));
    }

    #[test]
    fn item_extraction_fails_on_a_mismatched_shape() {
        let body = r#"{"response": {"album": {"name": "no code"}}}"#;
        let response = Response::from_json(body).unwrap();
        let err = response.item::<Album>().unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidItem { label: "album", .. }));
    }

    #[test]
    fn collection_extraction_unwraps_each_element() {
        let body = r#"{
            "response": {
                "tracks": [
                    {"track": {"trackCode": 1, "name": "Glosoli"}},
                    {"track": {"trackCode": 2, "name": "Hoppipolla"}}
                ]
            }
        }"#;
        let response = Response::from_json(body).unwrap();
        let tracks: Vec<Track> = response.collection().unwrap();
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].name, "Glosoli");
        assert_eq!(tracks[1].track_code, 2);
    }

    #[test]
    fn collection_drops_entries_that_do_not_parse() {
        let body = r#"{
            "response": {
                "tracks": [
                    {"track": {"trackCode": 1, "name": "Glosoli"}},
                    {"track": {"name": "missing its code"}},
                    {"track": {"trackCode": 3, "name": "Saeglopur"}}
                ]
            }
        }"#;
        let response = Response::from_json(body).unwrap();
        let tracks: Vec<Track> = response.collection().unwrap();
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].track_code, 1);
        assert_eq!(tracks[1].track_code, 3);
    }

    #[test]
    fn collection_drops_duplicate_items() {
        let body = r#"{
            "response": {
                "albums": [
                    {"album": {"albumCode": 1, "name": "Agaetis byrjun"}},
                    {"album": {"albumCode": 1, "name": "Agaetis byrjun"}}
                ]
            }
        }"#;
        let response = Response::from_json(body).unwrap();
        let albums: Vec<Album> = response.collection().unwrap();
        assert_eq!(albums.len(), 1);
    }

    #[test]
    fn collection_fails_when_an_element_misses_its_label() {
        let body = r#"{"response": {"albums": [{"track": {}}]}}"#;
        let response = Response::from_json(body).unwrap();
        let err = response.collection::<Album>().unwrap_err();
        assert_eq!(err, ProtocolError::MissingField("albums.album".to_string()));
    }

    #[test]
    fn collection_fails_when_the_value_is_not_a_list() {
        let body = r#"{"response": {"albums": {"album": {}}}}"#;
        let response = Response::from_json(body).unwrap();
        let err = response.collection::<Album>().unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidItem { label: "albums", .. }));
    }

    #[test]
    fn display_wraps_the_payload_back_under_response() {
        let response = Response::from_json(r#"{"response": {"api": {"version": "1.0.0"}}}"#)
            .unwrap();
        let rendered = response.to_string();
        assert!(rendered.contains("\"response\""));
        assert!(rendered.contains("\"version\": \"1.0.0\""));
    }
}
