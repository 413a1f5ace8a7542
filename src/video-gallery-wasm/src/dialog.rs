use crate::types::{EditForm, VideoRef};

/// Delete confirmation dialog, one per page
#[derive(Debug, Default)]
pub struct DeleteDialog {
    target: Option<VideoRef>,
}

impl DeleteDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open (or retarget) the dialog
    pub fn show(&mut self, target: VideoRef) {
        self.target = Some(target);
    }

    /// Close the dialog, returning the discarded target
    pub fn close(&mut self) -> Option<VideoRef> {
        self.target.take()
    }

    /// Video the confirm button currently acts on
    pub fn target(&self) -> Option<&VideoRef> {
        self.target.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    /// Title as displayed in the dialog body
    pub fn display_title(title: &str) -> String {
        format!("\"{}\"", title)
    }
}

/// Per-video actions dialog with its two inline edit forms
#[derive(Debug, Default)]
pub struct ActionsDialog {
    target: Option<VideoRef>,
    editing: Option<EditForm>,
}

impl ActionsDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the dialog for a video. Any form left over from a previous
    /// target is dropped.
    pub fn show(&mut self, target: VideoRef) {
        self.target = Some(target);
        self.editing = None;
    }

    /// Close the dialog and all edit forms
    pub fn close(&mut self) -> Option<VideoRef> {
        self.editing = None;
        self.target.take()
    }

    pub fn target(&self) -> Option<&VideoRef> {
        self.target.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn editing(&self) -> Option<EditForm> {
        self.editing
    }

    /// Activate an edit form and return the value it starts with.
    ///
    /// Returns `None` when the dialog is closed.
    pub fn begin_edit(&mut self, form: EditForm) -> Option<String> {
        let target = self.target.as_ref()?;
        let value = match form {
            EditForm::Title => target.title.clone(),
            EditForm::Description => target.description.clone().unwrap_or_default(),
        };
        self.editing = Some(form);
        Some(value)
    }

    pub fn hide_forms(&mut self) {
        self.editing = None;
    }
}

/// Video playback overlay
#[derive(Debug, Default)]
pub struct PlayerOverlay {
    open: bool,
}

impl PlayerOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Returns whether the overlay was open
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Heading shown above the player
    pub fn display_title(title: Option<&str>) -> String {
        match title {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => "Video".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str) -> VideoRef {
        VideoRef::new(id, format!("Title {}", id), Some(format!("About {}", id)))
    }

    #[test]
    fn test_delete_dialog_retargets() {
        let mut dialog = DeleteDialog::new();
        dialog.show(video("1"));
        dialog.show(video("2"));

        assert_eq!(dialog.target().map(|v| v.id.as_str()), Some("2"));
        assert_eq!(dialog.close().map(|v| v.id), Some("2".to_string()));
        assert!(!dialog.is_open());
        assert!(dialog.target().is_none());
    }

    #[test]
    fn test_display_titles() {
        assert_eq!(DeleteDialog::display_title("Cats"), "\"Cats\"");
        assert_eq!(PlayerOverlay::display_title(Some("Dogs")), "Dogs");
        assert_eq!(PlayerOverlay::display_title(Some("")), "Video");
        assert_eq!(PlayerOverlay::display_title(None), "Video");
    }

    #[test]
    fn test_single_edit_form() {
        let mut dialog = ActionsDialog::new();
        dialog.show(video("1"));

        assert_eq!(dialog.begin_edit(EditForm::Title), Some("Title 1".to_string()));
        assert_eq!(dialog.editing(), Some(EditForm::Title));

        assert_eq!(dialog.begin_edit(EditForm::Description), Some("About 1".to_string()));
        assert_eq!(dialog.editing(), Some(EditForm::Description));
    }

    #[test]
    fn test_missing_description_edits_empty() {
        let mut dialog = ActionsDialog::new();
        dialog.show(VideoRef::new("9", "No desc", None));
        assert_eq!(dialog.begin_edit(EditForm::Description), Some(String::new()));
    }

    #[test]
    fn test_closed_dialog_cannot_edit() {
        let mut dialog = ActionsDialog::new();
        assert_eq!(dialog.begin_edit(EditForm::Title), None);
        assert_eq!(dialog.editing(), None);
    }

    #[test]
    fn test_close_hides_forms() {
        let mut dialog = ActionsDialog::new();
        dialog.show(video("1"));
        dialog.begin_edit(EditForm::Title);

        assert!(dialog.close().is_some());
        assert_eq!(dialog.editing(), None);
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_player_close_reports_state() {
        let mut player = PlayerOverlay::new();
        assert!(!player.close());
        player.open();
        assert!(player.is_open());
        assert!(player.close());
        assert!(!player.is_open());
    }
}
