//! # Parameter I/O Panel
//!
//! A text panel that toggles between two jobs: showing the current tracker
//! parameters as read-only JSON (export) and accepting user-edited JSON to
//! replace them (import). The panel never owns parameter state; it reads
//! and writes through the [`ParameterService`] it is handed.
//!
//! Failures are deliberately not handled here: a service read that fails or
//! import text that does not decode propagates to the caller as-is.

use iced::widget::text_editor;

use crate::params::TrackerParams;
use crate::store::ParameterService;

/// Which job the panel is currently doing, if it is open at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelMode {
    #[default]
    Closed,
    Export,
    Import,
}

/// View state for the parameter I/O panel.
pub struct ParamIoPanel {
    mode: PanelMode,
    editor: text_editor::Content,
}

impl ParamIoPanel {
    pub fn new() -> Self {
        Self {
            mode: PanelMode::Closed,
            editor: text_editor::Content::new(),
        }
    }

    pub fn mode(&self) -> PanelMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != PanelMode::Closed
    }

    /// The editor accepts input only while importing; in export mode the
    /// text is read-only.
    pub fn is_editable(&self) -> bool {
        self.mode == PanelMode::Import
    }

    /// Label for the panel's single action button.
    pub fn action_label(&self) -> &'static str {
        match self.mode {
            PanelMode::Import => "Load",
            _ => "Ok",
        }
    }

    pub fn editor(&self) -> &text_editor::Content {
        &self.editor
    }

    /// Apply a text-editor action to the panel's buffer.
    pub fn perform(&mut self, action: text_editor::Action) {
        self.editor.perform(action);
    }

    /// Open the panel showing the service's current parameters as JSON.
    ///
    /// The panel opens read-only before the service is consulted, so a
    /// failing read or text conversion leaves it open with whatever text it
    /// already had while the error propagates.
    pub fn open_export(&mut self, service: &impl ParameterService) -> Result<(), String> {
        self.mode = PanelMode::Export;
        let text = service.read()?.to_json()?;
        self.editor = text_editor::Content::with_text(&text);
        Ok(())
    }

    /// Open the panel with an empty, editable buffer.
    pub fn open_import(&mut self) {
        self.editor = text_editor::Content::new();
        self.mode = PanelMode::Import;
    }

    /// Close the panel.
    ///
    /// When closing an import, the buffer is decoded and handed to the
    /// service's write operation. The panel closes before decoding, so a
    /// malformed buffer leaves it closed and the error propagates without
    /// any write taking place. Closing an export discards the text.
    pub fn close(&mut self, service: &mut impl ParameterService) -> Result<(), String> {
        let was = std::mem::take(&mut self.mode);
        if was == PanelMode::Import {
            let params = TrackerParams::from_json(&self.editor.text())?;
            service.write(params)?;
        }
        Ok(())
    }
}

impl Default for ParamIoPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[derive(Default)]
    struct MockService {
        params: TrackerParams,
        fail_read: bool,
        writes: Vec<TrackerParams>,
    }

    impl ParameterService for MockService {
        fn read(&self) -> Result<TrackerParams, String> {
            if self.fail_read {
                return Err("read failed".to_string());
            }
            Ok(self.params.clone())
        }

        fn write(&mut self, params: TrackerParams) -> Result<(), String> {
            self.writes.push(params);
            Ok(())
        }
    }

    fn type_text(panel: &mut ParamIoPanel, text: &str) {
        panel.perform(text_editor::Action::Edit(text_editor::Edit::Paste(
            Arc::new(text.to_string()),
        )));
    }

    #[test]
    fn starts_closed_and_empty() {
        let panel = ParamIoPanel::new();
        assert_eq!(panel.mode(), PanelMode::Closed);
        assert!(!panel.is_open());
        assert!(!panel.is_editable());
        assert!(panel.editor().text().trim().is_empty());
    }

    #[test]
    fn export_shows_current_params_read_only() {
        let service = MockService {
            params: TrackerParams {
                max_terms: 42,
                ..TrackerParams::default()
            },
            ..MockService::default()
        };
        let mut panel = ParamIoPanel::new();

        panel.open_export(&service).unwrap();

        assert_eq!(panel.mode(), PanelMode::Export);
        assert!(panel.is_open());
        assert!(!panel.is_editable());
        assert_eq!(panel.action_label(), "Ok");
        assert_eq!(
            panel.editor().text().trim_end(),
            service.params.to_json().unwrap()
        );
    }

    #[test]
    fn export_propagates_read_failure_with_panel_open() {
        let service = MockService {
            fail_read: true,
            ..MockService::default()
        };
        let mut panel = ParamIoPanel::new();

        // The panel shows itself before asking the service, so the failure
        // surfaces with the panel open and read-only.
        let err = panel.open_export(&service).unwrap_err();
        assert_eq!(err, "read failed");
        assert_eq!(panel.mode(), PanelMode::Export);
        assert!(panel.is_open());
        assert!(!panel.is_editable());
        assert!(panel.editor().text().trim().is_empty());
    }

    #[test]
    fn import_opens_editable_with_empty_text() {
        let mut panel = ParamIoPanel::new();

        panel.open_import();

        assert_eq!(panel.mode(), PanelMode::Import);
        assert!(panel.is_editable());
        assert_eq!(panel.action_label(), "Load");
        assert!(panel.editor().text().trim().is_empty());
    }

    #[test]
    fn import_clears_text_left_over_from_export() {
        let service = MockService::default();
        let mut panel = ParamIoPanel::new();

        panel.open_export(&service).unwrap();
        panel.open_import();

        assert!(panel.editor().text().trim().is_empty());
    }

    #[test]
    fn closing_import_writes_decoded_params_once() {
        let mut service = MockService::default();
        let mut panel = ParamIoPanel::new();

        panel.open_import();
        type_text(&mut panel, r#"{"maxTerms": 25, "minSim": 0.8}"#);
        panel.close(&mut service).unwrap();

        assert_eq!(panel.mode(), PanelMode::Closed);
        assert_eq!(service.writes.len(), 1);
        assert_eq!(service.writes[0].max_terms, 25);
        assert_eq!(service.writes[0].min_sim, 0.8);
        assert_eq!(service.writes[0].max_related_terms, 10);
    }

    #[test]
    fn closing_export_never_writes() {
        let mut service = MockService {
            params: TrackerParams::default(),
            ..MockService::default()
        };
        let mut panel = ParamIoPanel::new();

        panel.open_export(&service).unwrap();
        panel.close(&mut service).unwrap();

        assert_eq!(panel.mode(), PanelMode::Closed);
        assert!(service.writes.is_empty());
    }

    #[test]
    fn malformed_import_fails_without_writing() {
        let mut service = MockService::default();
        let mut panel = ParamIoPanel::new();

        panel.open_import();
        type_text(&mut panel, "{a:}");
        let err = panel.close(&mut service).unwrap_err();

        assert!(err.starts_with("Failed to parse parameters"));
        assert!(service.writes.is_empty());
        // The panel hides before decoding, matching the toggle contract.
        assert_eq!(panel.mode(), PanelMode::Closed);
    }
}
