use serde::{Deserialize, Serialize};

/// Video targeted by an open dialog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRef {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
}

impl VideoRef {
    pub fn new(id: impl Into<String>, title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description,
        }
    }
}

/// Inline edit form inside the actions dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditForm {
    Title,
    Description,
}

impl EditForm {
    /// Id of the form container
    pub fn form_id(self) -> &'static str {
        match self {
            EditForm::Title => "editTitleForm",
            EditForm::Description => "editDescForm",
        }
    }

    /// Id of the input (or textarea) holding the new value
    pub fn input_id(self) -> &'static str {
        match self {
            EditForm::Title => "newTitle",
            EditForm::Description => "newDescription",
        }
    }

    pub fn field(self) -> EditField {
        match self {
            EditForm::Title => EditField::Title,
            EditForm::Description => EditField::Description,
        }
    }
}

/// Video field the edit endpoint accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditField {
    Title,
    Description,
}

/// Kind of a status banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BannerKind::Success => "success",
            BannerKind::Error => "error",
        }
    }
}

/// Overlay identity, used for scroll locking and keyboard dismissal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlay {
    Player,
    Actions,
    Delete,
}
