//! Certificate record types
//!
//! Defines the data structure for one issued certificate entry as served by
//! the record source (a JSON array of objects with camelCase keys).

use serde::{Deserialize, Serialize};

/// One issued certificate entry.
///
/// All fields default to empty strings so that a sparse upstream row still
/// deserializes; missing key fields are handled at match time, not parse time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    #[serde(rename = "serialNumber", default)]
    pub serial_number: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "programEvents", default)]
    pub program_events: String,
    #[serde(rename = "issueDate", default)]
    pub issue_date: String,
    #[serde(default)]
    pub position: String,
    #[serde(rename = "programPhotoLink", default)]
    pub program_photo_link: String,
    #[serde(rename = "certificateUrl", default)]
    pub certificate_url: String,
}

impl Record {
    /// A record missing both key fields carries nothing to match against.
    /// Such rows are skipped during lookup rather than failing the whole scan.
    pub fn is_malformed(&self) -> bool {
        self.serial_number.is_empty() && self.name.is_empty()
    }

    /// Photo URL, if the upstream row provided one
    pub fn photo_link(&self) -> Option<&str> {
        if self.program_photo_link.is_empty() {
            None
        } else {
            Some(&self.program_photo_link)
        }
    }

    /// Certificate document URL, if the upstream row provided one
    pub fn certificate_link(&self) -> Option<&str> {
        if self.certificate_url.is_empty() {
            None
        } else {
            Some(&self.certificate_url)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserializes_wire_shape() {
        let value = json!({
            "serialNumber": "IEEE20240007",
            "name": "Ayesha Rahman",
            "programEvents": "Hackathon 2024",
            "issueDate": "12 Mar 2024",
            "position": "Winner",
            "programPhotoLink": "https://example.com/photo.jpg",
            "certificateUrl": "https://example.com/cert.pdf"
        });

        let record: Record = serde_json::from_value(value).unwrap();
        assert_eq!(record.serial_number, "IEEE20240007");
        assert_eq!(record.name, "Ayesha Rahman");
        assert_eq!(record.position, "Winner");
        assert_eq!(record.photo_link(), Some("https://example.com/photo.jpg"));
        assert_eq!(record.certificate_link(), Some("https://example.com/cert.pdf"));
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let record: Record = serde_json::from_value(json!({ "name": "Jane Doe" })).unwrap();
        assert_eq!(record.serial_number, "");
        assert_eq!(record.issue_date, "");
        assert_eq!(record.photo_link(), None);
        assert_eq!(record.certificate_link(), None);
        assert!(!record.is_malformed());
    }

    #[test]
    fn test_malformed_when_both_key_fields_missing() {
        let record: Record =
            serde_json::from_value(json!({ "programEvents": "Orphan row" })).unwrap();
        assert!(record.is_malformed());

        let by_serial: Record = serde_json::from_value(json!({ "serialNumber": "S1" })).unwrap();
        assert!(!by_serial.is_malformed());
    }
}
