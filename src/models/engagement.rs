//! Engagement model mirroring the HubSpot v1 engagements wire format.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static HTML_TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("Failed to compile HTML tag regex"));

/// Engagement type used for notes.
pub const NOTE_TYPE: &str = "NOTE";

/// A single engagement record as returned by the HubSpot API.
///
/// Only the envelope fields this server reads are modeled; unknown JSON
/// fields are ignored on input and the record round-trips through serde so
/// raw matches can be emitted back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Engagement {
    /// Core engagement fields (id, type, timestamp)
    pub engagement: EngagementCore,

    /// Contact associations
    #[serde(default)]
    pub associations: EngagementAssociations,

    /// Type-specific payload; notes carry their text in `body`
    #[serde(default)]
    pub metadata: EngagementMetadata,
}

/// Core fields of an engagement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct EngagementCore {
    /// Identifier assigned by HubSpot
    pub id: u64,

    /// Whether the engagement is active
    #[serde(default)]
    pub active: bool,

    /// Engagement type (API field: type), "NOTE" for notes
    #[serde(rename = "type")]
    pub engagement_type: String,

    /// Creation time in milliseconds since epoch
    #[serde(default)]
    pub timestamp: i64,
}

/// Contact associations of an engagement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct EngagementAssociations {
    /// Associated contact ids
    #[serde(default)]
    pub contact_ids: Vec<u64>,
}

/// Type-specific metadata of an engagement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EngagementMetadata {
    /// Free-text body of a note
    #[serde(default)]
    pub body: String,
}

/// Response shape of the paged engagements endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementsPage {
    /// The engagements on this page
    pub results: Vec<Engagement>,

    /// Whether more pages exist beyond this window
    #[serde(default)]
    pub has_more: bool,

    /// Offset to request the next page
    #[serde(default)]
    pub offset: u64,
}

impl Engagement {
    /// Build a note engagement from its parts.
    pub fn note(id: u64, timestamp: i64, body: impl Into<String>) -> Self {
        Self {
            engagement: EngagementCore {
                id,
                active: true,
                engagement_type: NOTE_TYPE.to_string(),
                timestamp,
            },
            associations: EngagementAssociations::default(),
            metadata: EngagementMetadata { body: body.into() },
        }
    }

    /// Identifier assigned by HubSpot.
    pub fn id(&self) -> u64 {
        self.engagement.id
    }

    /// Creation time in milliseconds since epoch.
    pub fn timestamp(&self) -> i64 {
        self.engagement.timestamp
    }

    /// Note body text.
    pub fn body(&self) -> &str {
        &self.metadata.body
    }

    /// Whether this engagement is a note.
    pub fn is_note(&self) -> bool {
        self.engagement.engagement_type == NOTE_TYPE
    }

    /// Strip HTML tags from the body to get plain text.
    ///
    /// Bodies written by other HubSpot clients may contain markup.
    pub fn plain_text_body(&self) -> String {
        HTML_TAG_REGEX
            .replace_all(&self.metadata.body, "")
            .to_string()
    }
}

/// A note to be created, before HubSpot has assigned it an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewNote {
    /// Encoded note body
    pub body: String,

    /// Contact the note is associated with
    pub contact_id: u64,

    /// Creation time in milliseconds since epoch
    pub timestamp: i64,
}

/// Core payload for creating an engagement.
#[derive(Debug, Clone, Serialize)]
struct NewEngagementCore {
    active: bool,

    #[serde(rename = "type")]
    engagement_type: String,

    timestamp: i64,
}

/// Request payload for creating a note engagement.
///
/// Matches the HubSpot API structure:
/// `{ "engagement": {...}, "associations": {...}, "metadata": {...} }`
#[derive(Debug, Clone, Serialize)]
pub struct CreateEngagementRequest {
    engagement: NewEngagementCore,
    associations: EngagementAssociations,
    metadata: EngagementMetadata,
}

impl From<&NewNote> for CreateEngagementRequest {
    fn from(note: &NewNote) -> Self {
        Self {
            engagement: NewEngagementCore {
                active: true,
                engagement_type: NOTE_TYPE.to_string(),
                timestamp: note.timestamp,
            },
            associations: EngagementAssociations {
                contact_ids: vec![note.contact_id],
            },
            metadata: EngagementMetadata {
                body: note.body.clone(),
            },
        }
    }
}

/// Request payload for replacing a note body.
///
/// Matches the HubSpot API structure: `{ "metadata": { "body": ... } }`
#[derive(Debug, Clone, Serialize)]
pub struct UpdateEngagementRequest {
    metadata: EngagementMetadata,
}

impl UpdateEngagementRequest {
    /// Build a body-replacement request.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            metadata: EngagementMetadata { body: body.into() },
        }
    }
}
