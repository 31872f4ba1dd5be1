//! Parent-side label store.
//!
//! Owns both label lists, applies redraws reported by the viewer, keeps a
//! bounded undo history and reads/writes the JSON label file.

use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

use crate::constants::MAX_HISTORY_STATES;
use crate::error::{LabelError, LabelResult};
use crate::types::{BoundingBox, DocumentLabel, Label, LabelKind, LineItemLabel};
use crate::viewer::{LabelCallbacks, ViewerProps};

/// On-disk label file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelFile {
    pub image_url: String,
    #[serde(default)]
    pub document_labels: Vec<DocumentLabel>,
    #[serde(default)]
    pub line_item_labels: Vec<LineItemLabel>,
}

impl LabelFile {
    /// Check per-label invariants and id uniqueness within each list.
    pub fn validate(&self) -> LabelResult<()> {
        let documents = self.document_labels.iter().cloned().map(Label::Document);
        let line_items = self.line_item_labels.iter().cloned().map(Label::LineItem);
        let mut seen: HashSet<(LabelKind, String)> = HashSet::new();

        for label in documents.chain(line_items) {
            if !seen.insert((label.kind(), label.id().to_string())) {
                return Err(LabelError::DuplicateId {
                    kind: label.kind(),
                    id: label.id().to_string(),
                });
            }
            label.validate().map_err(|reason| LabelError::InvalidLabel {
                kind: label.kind(),
                id: label.id().to_string(),
                reason,
            })?;
        }
        Ok(())
    }
}

/// One applied redraw, enough to undo or redo it.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelEdit {
    pub kind: LabelKind,
    pub label_id: String,
    pub before: BoundingBox,
    pub after: BoundingBox,
}

/// Labels owned by the view that hosts a [`crate::LabelViewer`].
#[derive(Debug, Clone, Default)]
pub struct LabelStore {
    image_url: String,
    document_labels: Vec<DocumentLabel>,
    line_item_labels: Vec<LineItemLabel>,
    history: VecDeque<LabelEdit>,
    redo_stack: Vec<LabelEdit>,
    dirty: bool,
}

impl LabelStore {
    pub fn new(image_url: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            ..Default::default()
        }
    }

    pub fn from_file(file: LabelFile) -> LabelResult<Self> {
        file.validate()?;
        Ok(Self {
            image_url: file.image_url,
            document_labels: file.document_labels,
            line_item_labels: file.line_item_labels,
            ..Default::default()
        })
    }

    pub fn load(path: &Path) -> LabelResult<Self> {
        let content = fs::read_to_string(path)?;
        let file: LabelFile = serde_json::from_str(&content)?;
        let store = Self::from_file(file)?;
        info!(
            documents = store.document_labels.len(),
            line_items = store.line_item_labels.len(),
            "Loaded labels from {}",
            path.display()
        );
        Ok(store)
    }

    /// Write atomically: a temp file next to `path` is persisted over it.
    pub fn save(&mut self, path: &Path) -> LabelResult<()> {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let json = serde_json::to_string_pretty(&self.to_file())?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(path)?;

        self.dirty = false;
        debug!("Saved labels to {}", path.display());
        Ok(())
    }

    pub fn to_file(&self) -> LabelFile {
        LabelFile {
            image_url: self.image_url.clone(),
            document_labels: self.document_labels.clone(),
            line_item_labels: self.line_item_labels.clone(),
        }
    }

    /// Fresh props for the viewer
    pub fn props(&self, edit_target: Option<String>) -> ViewerProps {
        ViewerProps {
            image_url: self.image_url.clone(),
            document_labels: self.document_labels.clone(),
            line_item_labels: self.line_item_labels.clone(),
            edit_target,
        }
    }

    pub fn add_document_label(&mut self, label: DocumentLabel) {
        self.document_labels.push(label);
    }

    pub fn add_line_item_label(&mut self, label: LineItemLabel) {
        self.line_item_labels.push(label);
    }

    pub fn document_labels(&self) -> &[DocumentLabel] {
        &self.document_labels
    }

    pub fn line_item_labels(&self) -> &[LineItemLabel] {
        &self.line_item_labels
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// Current box of a label
    pub fn bbox(&self, kind: LabelKind, label_id: &str) -> Option<BoundingBox> {
        match kind {
            LabelKind::Document => self
                .document_labels
                .iter()
                .find(|l| l.id == label_id)
                .map(|l| BoundingBox::new(l.x, l.y, l.width, l.height)),
            LabelKind::LineItem => self
                .line_item_labels
                .iter()
                .find(|l| l.id == label_id)
                .map(|l| BoundingBox::new(l.x, l.y, l.width, l.height)),
        }
    }

    /// Apply a redraw and record it for undo. Unknown ids are a no-op.
    pub fn apply_bbox(&mut self, kind: LabelKind, label_id: &str, bbox: BoundingBox) -> bool {
        let Some(before) = self.write_bbox(kind, label_id, bbox) else {
            debug!(%kind, label_id, "Update for unknown label ignored");
            return false;
        };

        if self.history.len() >= MAX_HISTORY_STATES {
            self.history.pop_front();
        }
        self.history.push_back(LabelEdit {
            kind,
            label_id: label_id.to_string(),
            before,
            after: bbox,
        });
        self.redo_stack.clear();
        self.dirty = true;
        true
    }

    pub fn undo(&mut self) -> bool {
        let Some(edit) = self.history.pop_back() else {
            return false;
        };
        self.write_bbox(edit.kind, &edit.label_id, edit.before);
        self.redo_stack.push(edit);
        self.dirty = true;
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(edit) = self.redo_stack.pop() else {
            return false;
        };
        self.write_bbox(edit.kind, &edit.label_id, edit.after);
        self.history.push_back(edit);
        self.dirty = true;
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Overwrite a label's box, returning the previous one
    fn write_bbox(&mut self, kind: LabelKind, label_id: &str, bbox: BoundingBox) -> Option<BoundingBox> {
        let (x, y, width, height) = match kind {
            LabelKind::Document => {
                let l = self.document_labels.iter_mut().find(|l| l.id == label_id)?;
                (&mut l.x, &mut l.y, &mut l.width, &mut l.height)
            }
            LabelKind::LineItem => {
                let l = self.line_item_labels.iter_mut().find(|l| l.id == label_id)?;
                (&mut l.x, &mut l.y, &mut l.width, &mut l.height)
            }
        };
        let before = BoundingBox::new(*x, *y, *width, *height);
        *x = bbox.x;
        *y = bbox.y;
        *width = bbox.width;
        *height = bbox.height;
        Some(before)
    }
}

impl LabelCallbacks for LabelStore {
    fn on_document_label_update(&mut self, label_id: &str, bbox: BoundingBox) {
        self.apply_bbox(LabelKind::Document, label_id, bbox);
    }

    fn on_line_item_label_update(&mut self, label_id: &str, bbox: BoundingBox) {
        self.apply_bbox(LabelKind::LineItem, label_id, bbox);
    }
}
