//! The editor session value object

use std::path::Path;

use doc_model::Document;
use layout_engine::{FontFamily, LayoutOptions, Paginator, TextLayout, DEFAULT_FONT_SIZE};
use store::pdf::PdfExportOptions;
use store::{ImportOutcome, ImportResult};
use uuid::Uuid;

use crate::{History, Notice, Result, Theme};

/// One editor session: the document plus its appearance settings,
/// history, and any retained PDF bytes.
///
/// Sessions are values. Every action consumes the session and returns
/// the updated one, so a failed action can simply hand the old value
/// back and no half-applied state is ever observable.
#[derive(Debug, Clone)]
pub struct EditorSession {
    id: Uuid,
    document: Document,
    font_family: FontFamily,
    font_size: u32,
    theme: Theme,
    history: History,
    retained_pdf: Option<Vec<u8>>,
}

impl EditorSession {
    /// Starts a session with an empty document and default settings
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            document: Document::new(),
            font_family: FontFamily::default(),
            font_size: DEFAULT_FONT_SIZE,
            theme: Theme::default(),
            history: History::new(),
            retained_pdf: None,
        }
    }

    /// Starts a session holding `document`
    pub fn with_document(document: Document) -> Self {
        Self {
            document,
            ..Self::new()
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn font_family(&self) -> FontFamily {
        self.font_family
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Bytes of a PDF accepted by the picker, if one was opened
    pub fn retained_pdf(&self) -> Option<&[u8]> {
        self.retained_pdf.as_deref()
    }

    /// Replaces the document with an edited version.
    ///
    /// This is the path widget edits arrive on: the previous document
    /// becomes an undo snapshot and any redo history is dropped.
    pub fn replace_content(mut self, document: Document) -> Self {
        let previous = std::mem::replace(&mut self.document, document);
        self.history.push(previous);
        tracing::debug!(
            session = %self.id,
            blocks = self.document.block_count(),
            "content replaced"
        );
        self
    }

    /// Applies a successful import.
    ///
    /// Document outcomes replace the content wholesale and reset both
    /// history stacks. A retained PDF leaves document and history as
    /// they were.
    pub fn apply_import(mut self, outcome: ImportOutcome) -> Self {
        match outcome {
            ImportOutcome::Replace(document) => {
                self.document = document;
                self.history.clear();
                tracing::debug!(
                    session = %self.id,
                    blocks = self.document.block_count(),
                    "import applied"
                );
            }
            ImportOutcome::PdfRetained(bytes) => {
                tracing::debug!(session = %self.id, len = bytes.len(), "PDF retained");
                self.retained_pdf = Some(bytes);
            }
        }
        self
    }

    /// Folds an import result into the session.
    ///
    /// A failure leaves the session exactly as it was and yields the
    /// one notice the user should see.
    pub fn import_result(self, result: ImportResult<ImportOutcome>) -> (Self, Option<Notice>) {
        match result {
            Ok(outcome) => (self.apply_import(outcome), None),
            Err(error) => {
                tracing::warn!(session = %self.id, %error, "import failed");
                (self, Some(Notice::from_import_error(&error)))
            }
        }
    }

    pub fn set_font_family(mut self, family: FontFamily) -> Self {
        self.font_family = family;
        self
    }

    pub fn set_font_size(mut self, size: u32) -> Self {
        self.font_size = size;
        self
    }

    pub fn toggle_theme(mut self) -> Self {
        self.theme = self.theme.toggled();
        self
    }

    /// Steps back to the previous document; no-op when nothing to undo
    pub fn undo(mut self) -> Self {
        if let Some(previous) = self.history.pop_undo(&self.document) {
            self.document = previous;
        }
        self
    }

    /// Steps forward again; no-op when nothing to redo
    pub fn redo(mut self) -> Self {
        if let Some(next) = self.history.pop_redo(&self.document) {
            self.document = next;
        }
        self
    }

    fn layout(&self) -> Result<TextLayout> {
        let options = LayoutOptions::new()
            .with_font_family(self.font_family)
            .with_font_size(self.font_size);
        Ok(Paginator::a4(options).layout(&self.document)?)
    }

    fn export_options(&self) -> PdfExportOptions {
        PdfExportOptions::new().with_font_family(self.font_family)
    }

    /// Exports the current document as PDF bytes
    pub fn export_pdf_bytes(&self) -> Result<Vec<u8>> {
        let layout = self.layout()?;
        Ok(store::pdf::export_pdf_bytes(&layout, self.export_options())?)
    }

    /// Exports the current document to a PDF file
    pub fn export_pdf(&self, path: impl AsRef<Path>) -> Result<()> {
        let layout = self.layout()?;
        store::pdf::export_pdf(&layout, path, self.export_options())?;
        Ok(())
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
