use crate::config::GalleryConfig;
use crate::error::MutationError;
use crate::types::EditField;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

/// A state-changing call against the video backend
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Edit {
        video_id: String,
        field: EditField,
        value: String,
    },
    Delete {
        video_id: String,
    },
    GenerateThumbnail {
        video_id: String,
    },
}

/// JSON body of an edit request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditBody<'a> {
    pub field: EditField,
    pub value: &'a str,
}

/// Response envelope shared by every mutation endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MutationResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

impl MutationResponse {
    pub fn parse(body: &str) -> Result<Self, MutationError> {
        Ok(serde_json::from_str(body)?)
    }
}

impl Mutation {
    pub fn video_id(&self) -> &str {
        match self {
            Mutation::Edit { video_id, .. }
            | Mutation::Delete { video_id }
            | Mutation::GenerateThumbnail { video_id } => video_id,
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            Mutation::Edit { .. } => "edit",
            Mutation::Delete { .. } => "delete",
            Mutation::GenerateThumbnail { .. } => "thumbnail",
        }
    }

    /// Endpoint path, e.g. `/videos/edit/42/`
    pub fn path(&self, base_path: &str) -> String {
        format!(
            "{}/{}/{}/",
            base_path.trim_end_matches('/'),
            self.verb(),
            self.video_id()
        )
    }

    /// Serialized request body; only edits carry one
    pub fn body(&self) -> Result<Option<String>, MutationError> {
        match self {
            Mutation::Edit { field, value, .. } => {
                let body = EditBody {
                    field: *field,
                    value: value.as_str(),
                };
                Ok(Some(serde_json::to_string(&body)?))
            }
            _ => Ok(None),
        }
    }

    /// Delay before the page reloads after a success
    pub fn reload_delay_ms(&self, config: &GalleryConfig) -> u32 {
        match self {
            Mutation::Edit { .. } => config.edit_reload_ms,
            Mutation::Delete { .. } => config.delete_reload_ms,
            Mutation::GenerateThumbnail { .. } => config.thumbnail_reload_ms,
        }
    }

    /// Banner text for a success. The thumbnail endpoint's own message is
    /// replaced since the page is about to reload.
    pub fn success_text(&self, response: &MutationResponse) -> String {
        let fallback = match self {
            Mutation::Edit {
                field: EditField::Title,
                ..
            } => "Title updated",
            Mutation::Edit {
                field: EditField::Description,
                ..
            } => "Description updated",
            Mutation::Delete { .. } => "Video deleted",
            Mutation::GenerateThumbnail { .. } => return "Thumbnail created, reloading...".to_string(),
        };
        response
            .message
            .clone()
            .unwrap_or_else(|| fallback.to_string())
    }

    /// Banner text when no backend error is available
    pub fn fallback_error(&self) -> &'static str {
        match self {
            Mutation::Edit { .. } => "Update failed",
            Mutation::Delete { .. } => "Delete failed",
            Mutation::GenerateThumbnail { .. } => "Thumbnail generation failed",
        }
    }

    /// Banner text for a `success: false` response
    pub fn failure_text(&self, response: &MutationResponse) -> String {
        response
            .error
            .clone()
            .unwrap_or_else(|| self.fallback_error().to_string())
    }
}

/// HTTP client for the mutation endpoints
#[derive(Clone, Debug)]
pub struct MutationClient {
    pub base_path: String,
    pub csrf_token: Option<String>,
}

impl MutationClient {
    pub fn new(base_path: impl Into<String>, csrf_token: Option<String>) -> Self {
        Self {
            base_path: base_path.into(),
            csrf_token,
        }
    }

    /// Send a mutation and decode the envelope
    pub async fn send(&self, mutation: &Mutation) -> Result<MutationResponse, MutationError> {
        let mut req = Request::post(&mutation.path(&self.base_path))
            .header("Content-Type", "application/json")
            .header("X-Requested-With", "XMLHttpRequest");
        if let Some(token) = &self.csrf_token {
            req = req.header("X-CSRFToken", token);
        }
        if let Some(body) = mutation.body()? {
            req = req.body(body);
        }

        let text = req.send().await?.text().await?;
        MutationResponse::parse(&text)
    }
}
