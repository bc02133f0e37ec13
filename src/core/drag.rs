//! Drag-and-drop reassignment of documents into folders
//!
//! The sidebar feeds raw pointer events (press, move, release, cancel) into a
//! [`DragController`]. A press only becomes a drag once the pointer has moved
//! further than the configured threshold, so plain clicks still select.
//! On release the drop zone closest to the dragged proxy wins and at most one
//! [`DocumentMover::move_document`] call is issued.

use egui::{Pos2, Rect};

use super::document::DocumentId;
use super::folder::FolderId;

/// Default pointer displacement before a press turns into a drag
pub const DEFAULT_DRAG_THRESHOLD: f32 = 8.0;

/// Capability used by the controller to apply a drop
pub trait DocumentMover {
    /// Move `id` into `target`, or to the root when `target` is `None`
    fn move_document(&mut self, id: &DocumentId, target: Option<FolderId>);
}

/// Something a document can be dropped onto
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// The root area (documents without a folder)
    Root,
    Folder(FolderId),
    /// A document row. Never a valid destination; lets drops back onto the
    /// dragged row (or a neighbour) resolve to nothing.
    Document(DocumentId),
}

/// A drop target and the screen region it occupies this frame
#[derive(Debug, Clone, PartialEq)]
pub struct DropZone {
    pub target: DropTarget,
    pub rect: Rect,
}

impl DropZone {
    pub fn new(target: DropTarget, rect: Rect) -> Self {
        Self { target, rect }
    }
}

/// Gesture state
#[derive(Debug, Clone, PartialEq)]
pub enum DragState {
    Idle,
    Dragging {
        document: DocumentId,
        /// Pointer position when the press started
        origin: Pos2,
        pointer: Pos2,
        /// Bounds of the pressed row when the press started
        item_rect: Rect,
    },
    Resolving {
        document: DocumentId,
        target: Option<DropTarget>,
    },
}

/// Result of releasing the pointer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// No drag was in progress (a click, or a stray release)
    NotDragging,
    /// The document was moved
    Moved {
        document: DocumentId,
        folder: Option<FolderId>,
    },
    /// Released onto the dragged document itself
    SelfDrop,
    /// Released outside every valid target
    NoTarget,
}

#[derive(Debug, Clone, PartialEq)]
struct PendingPress {
    document: DocumentId,
    origin: Pos2,
    item_rect: Rect,
}

/// Explicit state machine for one drag gesture at a time
#[derive(Debug, Clone)]
pub struct DragController {
    state: DragState,
    pending: Option<PendingPress>,
    threshold: f32,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_THRESHOLD)
    }
}

impl DragController {
    pub fn new(threshold: f32) -> Self {
        Self {
            state: DragState::Idle,
            pending: None,
            threshold: threshold.max(0.0),
        }
    }

    #[allow(dead_code)]
    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, DragState::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Document being dragged, if any
    pub fn dragged_document(&self) -> Option<&DocumentId> {
        match &self.state {
            DragState::Dragging { document, .. } => Some(document),
            _ => None,
        }
    }

    /// Pointer pressed on a document row
    pub fn press(&mut self, document: DocumentId, pointer: Pos2, item_rect: Rect) {
        if !self.is_idle() {
            return;
        }
        self.pending = Some(PendingPress {
            document,
            origin: pointer,
            item_rect,
        });
    }

    /// Pointer moved while the button is held
    pub fn pointer_moved(&mut self, pointer: Pos2) {
        if let DragState::Dragging { pointer: current, .. } = &mut self.state {
            *current = pointer;
            return;
        }

        let Some(press) = &self.pending else {
            return;
        };
        if press.origin.distance(pointer) <= self.threshold {
            return;
        }

        if let Some(press) = self.pending.take() {
            tracing::debug!("Started dragging document {}", press.document);
            self.state = DragState::Dragging {
                document: press.document,
                origin: press.origin,
                pointer,
                item_rect: press.item_rect,
            };
        }
    }

    /// Pointer released. Resolves the drop and always returns to idle.
    pub fn release<M: DocumentMover + ?Sized>(
        &mut self,
        pointer: Pos2,
        zones: &[DropZone],
        mover: &mut M,
    ) -> DropOutcome {
        self.pending = None;
        let DragState::Dragging {
            document,
            origin,
            item_rect,
            ..
        } = std::mem::replace(&mut self.state, DragState::Idle)
        else {
            return DropOutcome::NotDragging;
        };

        let proxy = item_rect.translate(pointer - origin);
        let target = closest_target(proxy, zones).cloned();
        let outcome = apply_drop(&document, target.as_ref(), mover);

        self.state = DragState::Resolving { document, target };
        tracing::debug!("Drop resolved: {:?} -> {:?}", self.state, outcome);
        self.state = DragState::Idle;
        outcome
    }

    /// Abandon the gesture without touching any document
    pub fn cancel(&mut self) {
        if let Some(document) = self.dragged_document() {
            tracing::debug!("Cancelled drag of document {}", document);
        }
        self.pending = None;
        self.state = DragState::Idle;
    }

    /// Where the drag proxy should be drawn
    pub fn proxy_rect(&self) -> Option<Rect> {
        match &self.state {
            DragState::Dragging {
                origin,
                pointer,
                item_rect,
                ..
            } => Some(item_rect.translate(*pointer - *origin)),
            _ => None,
        }
    }

    /// Target that would receive the drop if released now
    pub fn hovered_target<'z>(&self, zones: &'z [DropZone]) -> Option<&'z DropTarget> {
        self.proxy_rect().and_then(|proxy| closest_target(proxy, zones))
    }
}

/// Issue the move for a resolved drop, if the target accepts documents
fn apply_drop<M: DocumentMover + ?Sized>(
    document: &DocumentId,
    target: Option<&DropTarget>,
    mover: &mut M,
) -> DropOutcome {
    match target {
        Some(DropTarget::Folder(folder)) => {
            mover.move_document(document, Some(folder.clone()));
            DropOutcome::Moved {
                document: document.clone(),
                folder: Some(folder.clone()),
            }
        }
        Some(DropTarget::Root) => {
            mover.move_document(document, None);
            DropOutcome::Moved {
                document: document.clone(),
                folder: None,
            }
        }
        Some(DropTarget::Document(other)) if other == document => DropOutcome::SelfDrop,
        Some(DropTarget::Document(_)) | None => DropOutcome::NoTarget,
    }
}

/// Among zones overlapping `proxy`, the one whose center is nearest the
/// proxy's center. Ties go to the zone registered first.
fn closest_target(proxy: Rect, zones: &[DropZone]) -> Option<&DropTarget> {
    let center = proxy.center();
    zones
        .iter()
        .filter(|zone| zone.rect.intersects(proxy))
        .min_by(|a, b| {
            a.rect
                .center()
                .distance(center)
                .total_cmp(&b.rect.center().distance(center))
        })
        .map(|zone| &zone.target)
}
