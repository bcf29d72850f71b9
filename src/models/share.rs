use serde::{Deserialize, Serialize};

/// Stored credential for a share.
///
/// Exactly one form exists per record. `Hashed` holds a PHC-format string
/// and is authoritative; `LegacyPlain` only appears on records written
/// before hashing was introduced and is rewritten to `Hashed` by the
/// startup migration. Current code never writes `LegacyPlain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Credential {
    Hashed(String),
    LegacyPlain(String),
}

impl Credential {
    pub fn is_hashed(&self) -> bool {
        matches!(self, Credential::Hashed(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareKind {
    Text,
    File,
}

impl ShareKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShareKind::Text => "text",
            ShareKind::File => "file",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "text" => Some(ShareKind::Text),
            "file" => Some(ShareKind::File),
            _ => None,
        }
    }
}

/// One shared unit of content plus its credentials and metadata.
///
/// `text` is populated for text shares; `filename`, `mime_type` and `blob`
/// (base64-encoded bytes) for file shares. Store backends may omit `blob`
/// on listing queries.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareModel {
    pub id: String,
    pub title: String,
    pub kind: ShareKind,
    pub text: Option<String>,
    pub filename: Option<String>,
    pub mime_type: Option<String>,
    pub blob: Option<String>,
    pub keyphrase: String,
    pub credential: Credential,
    pub created: String,
}

impl ShareModel {
    pub fn new_text(
        title: Option<String>,
        text: String,
        keyphrase: String,
        credential: Credential,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.unwrap_or_else(|| "untitled".to_string()),
            kind: ShareKind::Text,
            text: Some(text),
            filename: None,
            mime_type: None,
            blob: None,
            keyphrase,
            credential,
            created: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn new_file(
        title: Option<String>,
        filename: String,
        mime_type: String,
        blob: String,
        keyphrase: String,
        credential: Credential,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.unwrap_or_else(|| filename.clone()),
            kind: ShareKind::File,
            text: None,
            filename: Some(filename),
            mime_type: Some(mime_type),
            blob: Some(blob),
            keyphrase,
            credential,
            created: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_share_defaults_title() {
        let share = ShareModel::new_text(
            None,
            "hello".to_string(),
            "apple-river-sun".to_string(),
            Credential::Hashed("$argon2id$stub".to_string()),
        );
        assert_eq!(share.title, "untitled");
        assert_eq!(share.kind, ShareKind::Text);
        assert!(share.blob.is_none());
    }

    #[test]
    fn test_file_share_title_defaults_to_filename() {
        let share = ShareModel::new_file(
            None,
            "report.pdf".to_string(),
            "application/pdf".to_string(),
            "aGVsbG8=".to_string(),
            "apple-river-sun".to_string(),
            Credential::Hashed("$argon2id$stub".to_string()),
        );
        assert_eq!(share.title, "report.pdf");
        assert_eq!(share.kind, ShareKind::File);
        assert!(share.text.is_none());
    }

    #[test]
    fn test_share_kind_round_trip() {
        assert_eq!(ShareKind::parse("text"), Some(ShareKind::Text));
        assert_eq!(ShareKind::parse("file"), Some(ShareKind::File));
        assert_eq!(ShareKind::parse("Text"), None);
        assert_eq!(ShareKind::File.as_str(), "file");
    }
}
