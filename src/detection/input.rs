//! Input acquisition: picker and drag-and-drop selection.

use super::controller::{DetectionController, SelectionToken};
use super::preview::PreviewSource;
use super::types::SelectedFile;

/// Where a selection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    Picker,
    Drop,
}

impl<S: PreviewSource> DetectionController<S> {
    /// Adopt the first file from a picker dialog. An empty list is a full
    /// reset.
    pub fn select_from_picker<I>(&mut self, candidates: I)
    where
        I: IntoIterator<Item = SelectedFile>,
    {
        self.adopt(candidates.into_iter().next());
    }

    /// Same as [`select_from_picker`](Self::select_from_picker), fed from a
    /// drop payload.
    pub fn select_from_drop<I>(&mut self, candidates: I)
    where
        I: IntoIterator<Item = SelectedFile>,
    {
        self.adopt(candidates.into_iter().next());
    }

    /// Apply a selection reserved with
    /// [`begin_selection`](Self::begin_selection) once its file has been
    /// read. Returns `false`, leaving everything untouched, if a reset or a
    /// newer selection came in meanwhile.
    pub fn finish_selection<I>(
        &mut self,
        token: &SelectionToken,
        source: SelectionSource,
        candidates: I,
    ) -> bool
    where
        I: IntoIterator<Item = SelectedFile>,
    {
        if !self.is_current_selection(token) {
            return false;
        }
        match source {
            SelectionSource::Picker => self.select_from_picker(candidates),
            SelectionSource::Drop => self.select_from_drop(candidates),
        }
        true
    }
}

/// Tracks whether a drag is hovering the drop zone.
///
/// Browsers fire `dragenter`/`dragleave` for every child element crossed, so
/// a plain boolean flickers. Counting enters against leaves keeps the
/// affordance stable. This never touches the selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragTracker {
    depth: u32,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self) {
        self.depth += 1;
    }

    /// `dragover` without a preceding `dragenter` (e.g. the drag started
    /// inside the zone) still marks the zone active.
    pub fn over(&mut self) {
        if self.depth == 0 {
            self.depth = 1;
        }
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn drop_received(&mut self) {
        self.depth = 0;
    }

    pub fn is_active(&self) -> bool {
        self.depth > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::controller::LifecycleState;
    use crate::detection::preview::testing::{leaf, FakeSource};
    use crate::detection::types::PredictionResult;

    #[test]
    fn test_picker_adopts_first_candidate() {
        let mut controller = DetectionController::new(FakeSource::default());

        controller.select_from_picker(vec![leaf("a.jpg"), leaf("b.jpg")]);

        assert_eq!(controller.state(), LifecycleState::PreviewReady);
        assert_eq!(controller.selected_file().map(|f| f.name.as_str()), Some("a.jpg"));
        assert_eq!(controller.preview(), Some(&1));
    }

    #[test]
    fn test_empty_picker_is_full_reset() {
        let mut controller = DetectionController::new(FakeSource::default());
        controller.select_from_picker(vec![leaf("a.jpg")]);
        let ticket = controller.begin_submit().unwrap();
        controller.complete_submit(&ticket, Ok(PredictionResult::new("Healthy", 0.9)));

        controller.select_from_picker(Vec::new());

        assert_eq!(controller.state(), LifecycleState::Idle);
        assert!(controller.selected_file().is_none());
        assert!(controller.preview().is_none());
        assert!(controller.result().is_none());
    }

    #[test]
    fn test_repeated_selection_keeps_one_live_handle() {
        let mut controller = DetectionController::new(FakeSource::default());

        for name in ["a.jpg", "b.png", "c.webp", "d.jpg"] {
            controller.select_from_picker(vec![leaf(name)]);
            assert_eq!(controller.state(), LifecycleState::PreviewReady);
            assert_eq!(controller.preview_source().live.len(), 1);
        }

        // FakeSource panics on a double release, so reaching here also
        // proves no handle was released twice.
        assert_eq!(controller.preview(), Some(&4));
        assert_eq!(controller.preview_source().released, vec![1, 2, 3]);
    }

    #[test]
    fn test_drop_matches_picker() {
        let mut picked = DetectionController::new(FakeSource::default());
        let mut dropped = DetectionController::new(FakeSource::default());

        picked.select_from_picker(vec![leaf("leaf.jpg")]);
        dropped.select_from_drop(vec![leaf("leaf.jpg")]);

        assert_eq!(picked.state(), dropped.state());
        assert_eq!(dropped.state(), LifecycleState::PreviewReady);
        assert_eq!(picked.selected_file(), dropped.selected_file());
        assert_eq!(picked.preview(), dropped.preview());
        assert!(dropped.preview().is_some());
    }

    #[test]
    fn test_empty_drop_is_full_reset() {
        let mut controller = DetectionController::new(FakeSource::default());
        controller.select_from_drop(vec![leaf("leaf.jpg")]);

        controller.select_from_drop(std::iter::empty());

        assert_eq!(controller.state(), LifecycleState::Idle);
        assert!(controller.preview().is_none());
    }

    #[test]
    fn test_reselection_during_submit_returns_to_preview_ready() {
        let mut controller = DetectionController::new(FakeSource::default());
        controller.select_from_picker(vec![leaf("a.jpg")]);
        controller.begin_submit().unwrap();

        controller.select_from_drop(vec![leaf("b.jpg")]);

        assert_eq!(controller.state(), LifecycleState::PreviewReady);
        assert_eq!(controller.preview(), Some(&2));
    }

    #[test]
    fn test_overlapping_reads_keep_latest_selection() {
        let mut controller = DetectionController::new(FakeSource::default());
        let slow = controller.begin_selection();
        let fast = controller.begin_selection();

        assert!(controller.finish_selection(&fast, SelectionSource::Drop, Some(leaf("new.jpg"))));
        assert!(!controller.finish_selection(&slow, SelectionSource::Drop, Some(leaf("old.jpg"))));

        assert_eq!(controller.selected_file().map(|f| f.name.as_str()), Some("new.jpg"));
        assert_eq!(controller.preview_source().live, vec![1]);
        assert!(controller.preview_source().released.is_empty());
    }

    #[test]
    fn test_read_finishing_first_is_superseded_by_newer_one() {
        let mut controller = DetectionController::new(FakeSource::default());
        let first = controller.begin_selection();
        let second = controller.begin_selection();

        assert!(!controller.finish_selection(&first, SelectionSource::Picker, Some(leaf("a.jpg"))));
        assert_eq!(controller.state(), LifecycleState::Idle);
        assert!(controller.finish_selection(&second, SelectionSource::Picker, Some(leaf("b.jpg"))));
        assert_eq!(controller.selected_file().map(|f| f.name.as_str()), Some("b.jpg"));
    }

    #[test]
    fn test_pending_read_may_replace_file_during_submit() {
        let mut controller = DetectionController::new(FakeSource::default());
        controller.select_from_picker(vec![leaf("a.jpg")]);
        let pending = controller.begin_selection();
        let ticket = controller.begin_submit().unwrap();

        assert!(controller.finish_selection(&pending, SelectionSource::Drop, Some(leaf("b.jpg"))));

        assert_eq!(controller.state(), LifecycleState::PreviewReady);
        assert_eq!(
            controller.complete_submit(&ticket, Ok(PredictionResult::new("Healthy", 0.9))),
            crate::detection::CompletionOutcome::Stale
        );
    }

    #[test]
    fn test_synchronous_selection_supersedes_pending_read() {
        let mut controller = DetectionController::new(FakeSource::default());
        let pending = controller.begin_selection();

        controller.select_from_drop(vec![leaf("now.jpg")]);

        assert!(!controller.finish_selection(&pending, SelectionSource::Drop, Some(leaf("late.jpg"))));
        assert_eq!(controller.selected_file().map(|f| f.name.as_str()), Some("now.jpg"));
    }

    #[test]
    fn test_drag_tracker_nesting() {
        let mut drag = DragTracker::new();
        assert!(!drag.is_active());

        drag.enter();
        drag.enter(); // crossed into a child element
        drag.leave(); // left the child
        assert!(drag.is_active());

        drag.leave();
        assert!(!drag.is_active());
    }

    #[test]
    fn test_drag_tracker_drop_and_stray_leave() {
        let mut drag = DragTracker::new();
        drag.over();
        assert!(drag.is_active());

        drag.enter();
        drag.drop_received();
        assert!(!drag.is_active());

        drag.leave();
        assert!(!drag.is_active());
    }
}
