//! Markup for the dialogs built at start-up when the page does not ship them.

pub const ACTIONS_MODAL_ID: &str = "videoActionsModal";
pub const DELETE_MODAL_ID: &str = "deleteModal";

pub const ACTIONS_MODAL_HTML: &str = r#"
<div class="video-actions-modal-overlay"></div>
<div class="video-actions-modal-content">
    <div class="video-actions-modal-header">
        <h3>Video actions</h3>
        <div class="video-title-display"></div>
    </div>
    <div class="video-actions-modal-body">
        <div class="modal-actions">
            <button type="button" class="modal-btn green go-to-gallery">&#9654;&#65039; Watch video</button>
            <button type="button" class="modal-btn secondary stay-here">&#128203; Stay on this page</button>
            <button type="button" class="modal-btn edit edit-title" style="display: none;">&#9999;&#65039; Edit title</button>
            <button type="button" class="modal-btn edit edit-description" style="display: none;">&#128221; Edit description</button>
            <button type="button" class="modal-btn primary generate-thumb" style="display: none;">&#128444;&#65039; Generate thumbnail</button>
            <button type="button" class="modal-btn delete delete-video" style="display: none;">&#128465;&#65039; Delete video</button>
        </div>

        <div class="edit-form" id="editTitleForm">
            <div class="form-group">
                <label for="newTitle">New title:</label>
                <input type="text" id="newTitle" class="form-input" placeholder="Enter a new title">
            </div>
            <div class="form-actions">
                <button type="button" class="btn" id="saveTitleBtn">&#128190; Save</button>
                <button type="button" class="btn secondary cancel-edit">&#10060; Cancel</button>
            </div>
        </div>

        <div class="edit-form" id="editDescForm">
            <div class="form-group">
                <label for="newDescription">New description:</label>
                <textarea id="newDescription" class="form-textarea" placeholder="Enter a new description"></textarea>
            </div>
            <div class="form-actions">
                <button type="button" class="btn" id="saveDescBtn">&#128190; Save</button>
                <button type="button" class="btn secondary cancel-edit">&#10060; Cancel</button>
            </div>
        </div>
    </div>
</div>
"#;

pub const DELETE_MODAL_HTML: &str = r#"
<div class="delete-modal-overlay"></div>
<div class="delete-modal-content">
    <div class="delete-modal-header">
        <h3>&#128465;&#65039; Confirm deletion</h3>
    </div>
    <div class="delete-modal-body">
        <p>Are you sure you want to delete this video?</p>
        <p class="video-title" id="modalVideoTitle"></p>
    </div>
    <div class="delete-modal-footer">
        <button type="button" class="btn secondary cancel-delete">&#10060; Cancel</button>
        <button type="button" class="btn delete-confirm-btn" id="confirmDeleteBtn">&#128465;&#65039; Delete</button>
    </div>
</div>
"#;

/// Action buttons hidden by default and revealed when the dialog opens
pub const REVEALED_ACTIONS: &[&str] = &[
    ".edit-title",
    ".edit-description",
    ".generate-thumb",
    ".delete-video",
];
