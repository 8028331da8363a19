use std::rc::Rc;

use serde::{Deserialize, Serialize};
use slotmap::SlotMap;
use tracing::{debug, instrument, warn};

use crate::config::Settings;
use crate::geometry::{Point, Rect};
use crate::gesture::{
    DropPosition, ResizeGesture, RestructureError, detect_drop_position, drop_at, move_entry,
    pick_out,
};
use crate::mode::Mode;
use crate::model::{self, ContentId, LeafFrame, Node, NodePath, Proportion, replace_at, shrink};
use crate::replay::Record;

slotmap::new_key_type! {
    /// Identifies one in-progress resize gesture.
    pub struct GestureId;
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LayoutCommand {
    Edit,
    Read,
}

/// Gesture input, already translated from pointer events by the caller.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum LayoutEvent {
    /// The pointer went down on the handle of the layout node at `path`,
    /// whose frame is `container_extent` long along its split axis.
    BeginResize { path: NodePath, container_extent: f64 },
    /// The pointer is `displacement` along the split axis from where the
    /// gesture began.
    MoveResize { gesture: GestureId, displacement: f64 },
    /// The pointer was released or left the surface.
    EndResize { gesture: GestureId },
    /// Content from outside the tree was dropped on an edge of a leaf.
    Drop { target: NodePath, entry: ContentId, position: DropPosition },
    /// A leaf was dragged out of the tree.
    PickOut { path: NodePath },
    /// A leaf was dragged onto an edge of another leaf.
    Move { source: NodePath, target: NodePath, position: DropPosition },
}

/// Everything the manager can be asked to do. Traces are sequences of these.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    Layout(LayoutEvent),
    Command(LayoutCommand),
    SetRoot(Option<Rc<Node>>),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProportionChange {
    pub path: NodePath,
    pub proportion: Proportion,
}

#[must_use]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventResponse {
    /// The resize gesture the event started or updated.
    pub gesture: Option<GestureId>,
    /// The live proportion of that gesture, for renderers to show before it
    /// is committed.
    pub live_proportion: Option<Proportion>,
    /// Proportions installed in the tree while handling the event, one per
    /// ended resize gesture that moved.
    pub committed: Vec<ProportionChange>,
    /// Whether [`LayoutManager::root`] now returns a different tree.
    pub tree_changed: bool,
}

#[derive(Debug)]
struct ActiveResize {
    path: NodePath,
    gesture: ResizeGesture,
}

/// Owner of the current layout tree.
///
/// The manager receives gesture events and mode commands, runs them through
/// the resize and restructure engines, and installs the normalized result as
/// the new root. Trees handed out by [`root`][Self::root] are immutable
/// snapshots; later edits never change them.
#[derive(Debug)]
pub struct LayoutManager {
    root: Option<Rc<Node>>,
    mode: Mode,
    settings: Settings,
    resizes: SlotMap<GestureId, ActiveResize>,
    record: Record,
}

impl LayoutManager {
    pub fn new(settings: Settings) -> Self {
        Self::with_root(settings, None)
    }

    pub fn with_root(settings: Settings, root: Option<Node>) -> Self {
        Self::recording(settings, root, Record::none())
    }

    /// Creates a manager that writes the starting tree and every event it
    /// handles to `record`.
    pub fn recording(settings: Settings, root: Option<Node>, mut record: Record) -> Self {
        let root = shrink(root.map(Rc::new));
        record.start(root.as_deref());
        LayoutManager {
            root,
            mode: Mode::default(),
            settings,
            resizes: SlotMap::default(),
            record,
        }
    }

    pub fn root(&self) -> Option<&Rc<Node>> {
        self.root.as_ref()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The state of an in-progress resize.
    pub fn gesture(&self, id: GestureId) -> Option<&ResizeGesture> {
        self.resizes.get(id).map(|active| &active.gesture)
    }

    pub fn handle(&mut self, event: Event) -> EventResponse {
        match event {
            Event::Layout(event) => self.handle_event(event),
            Event::Command(command) => self.handle_command(command),
            Event::SetRoot(root) => self.set_root(root),
        }
    }

    /// Installs a tree built elsewhere.
    ///
    /// In-progress resizes are discarded, since their paths refer to the old
    /// tree.
    pub fn set_root(&mut self, root: Option<Rc<Node>>) -> EventResponse {
        self.record.on_event(&Event::SetRoot(root.clone()));
        if !self.resizes.is_empty() {
            debug!("Discarding {} resize gestures", self.resizes.len());
            self.resizes.clear();
        }
        self.install(shrink(root), Vec::new())
    }

    #[instrument(skip(self))]
    pub fn handle_command(&mut self, command: LayoutCommand) -> EventResponse {
        self.record.on_event(&Event::Command(command));
        match command {
            LayoutCommand::Edit => {
                self.mode = self.mode.edit();
                EventResponse::default()
            }
            LayoutCommand::Read => {
                // Leaving edit mode releases every handle that is still held.
                let committed = self.flush_resizes();
                self.mode = self.mode.read();
                let root = self.root.clone();
                self.install(root, committed)
            }
        }
    }

    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: LayoutEvent) -> EventResponse {
        self.record.on_event(&Event::Layout(event.clone()));
        if !self.mode.allows_input() {
            debug!("Ignoring event while read-only");
            return EventResponse::default();
        }
        match event {
            LayoutEvent::BeginResize { path, container_extent } => {
                self.begin_resize(path, container_extent)
            }
            LayoutEvent::MoveResize { gesture, displacement } => {
                self.move_resize(gesture, displacement)
            }
            LayoutEvent::EndResize { gesture } => {
                let Some(active) = self.resizes.remove(gesture) else {
                    debug!("No resize gesture {gesture:?}");
                    return EventResponse::default();
                };
                let committed = self.commit(active).into_iter().collect();
                let root = self.root.clone();
                EventResponse {
                    gesture: Some(gesture),
                    ..self.install(root, committed)
                }
            }
            LayoutEvent::Drop { target, entry, position } => self.restructure(|root| {
                let root = root.ok_or_else(|| RestructureError::NotFound(target.clone()))?;
                drop_at(root, &target, entry, position).map(Some)
            }),
            LayoutEvent::PickOut { path } => self.restructure(|root| {
                let root = root.ok_or_else(|| RestructureError::NotFound(path.clone()))?;
                pick_out(root, &path)
            }),
            LayoutEvent::Move { source, target, position } => self.restructure(|root| {
                let root = root.ok_or_else(|| RestructureError::NotFound(source.clone()))?;
                move_entry(root, &source, &target, position)
            }),
        }
    }

    fn begin_resize(&mut self, path: NodePath, container_extent: f64) -> EventResponse {
        let node = self.root.as_deref().and_then(|root| root.get(&path));
        let Some(layout) = node.and_then(Node::as_layout) else {
            warn!("No layout node at {path} to resize");
            return EventResponse::default();
        };
        let min_fraction = self.settings.min_fraction(layout.direction);
        let handle_extent = self.settings.handle_extent(self.mode);
        match ResizeGesture::begin(layout, container_extent, handle_extent, min_fraction) {
            Ok(gesture) => {
                let id = self.resizes.insert(ActiveResize { path, gesture });
                debug!("Began resize {id:?}");
                EventResponse { gesture: Some(id), ..Default::default() }
            }
            Err(e) => {
                debug!("Not resizing {path}: {e}");
                EventResponse::default()
            }
        }
    }

    fn move_resize(&mut self, id: GestureId, displacement: f64) -> EventResponse {
        let Some(active) = self.resizes.get_mut(id) else {
            debug!("No resize gesture {id:?}");
            return EventResponse::default();
        };
        if let Err(e) = active.gesture.update(displacement) {
            debug!("Ignoring resize update: {e}");
        }
        EventResponse {
            gesture: Some(id),
            live_proportion: active.gesture.current(),
            ..Default::default()
        }
    }

    /// Ends a resize, writing its last value into the tree.
    fn commit(&mut self, active: ActiveResize) -> Option<ProportionChange> {
        let ActiveResize { path, gesture } = active;
        let Some(proportion) = gesture.commit() else {
            debug!("Resize of {path} ended without moving");
            return None;
        };
        let root = self.root.as_ref()?;
        let Some(layout) = root.get(&path).and_then(Node::as_layout) else {
            warn!("Resized node at {path} is gone");
            return None;
        };
        let replacement = Rc::new(Node::Layout(layout.with_proportion(proportion)));
        match replace_at(root, &path, Some(replacement)) {
            Ok(new_root) => {
                self.root = new_root;
                Some(ProportionChange { path, proportion })
            }
            Err(e) => {
                warn!("Could not commit resize: {e}");
                None
            }
        }
    }

    fn flush_resizes(&mut self) -> Vec<ProportionChange> {
        let active: Vec<_> = self.resizes.drain().map(|(_, active)| active).collect();
        active.into_iter().filter_map(|active| self.commit(active)).collect()
    }

    /// Applies a structural edit to the current tree.
    ///
    /// Paths are only meaningful for the tree they were computed on, so any
    /// resize still in progress is committed first.
    fn restructure(
        &mut self,
        edit: impl FnOnce(Option<&Rc<Node>>) -> Result<Option<Rc<Node>>, RestructureError>,
    ) -> EventResponse {
        let committed = self.flush_resizes();
        match edit(self.root.as_ref()) {
            Ok(root) => self.install(shrink(root), committed),
            Err(e) => {
                warn!("Ignoring edit: {e}");
                let root = self.root.clone();
                self.install(root, committed)
            }
        }
    }

    /// Makes `root` current. `committed` lists the resizes already written
    /// into it.
    fn install(
        &mut self,
        root: Option<Rc<Node>>,
        committed: Vec<ProportionChange>,
    ) -> EventResponse {
        let tree_changed = !committed.is_empty() || !same_tree(&self.root, &root);
        self.root = root;
        if tree_changed {
            self.debug_tree();
        }
        EventResponse { committed, tree_changed, ..Default::default() }
    }

    pub fn debug_tree(&self) {
        debug!("Tree:\n{}", self.draw_tree().trim());
    }

    pub fn draw_tree(&self) -> String {
        model::draw_tree(self.root.as_deref())
    }

    /// The frame of every leaf when the tree fills `frame`.
    pub fn calculate_layout(&self, frame: Rect) -> Vec<LeafFrame> {
        let Some(root) = &self.root else { return vec![] };
        model::calculate_layout(root, frame, self.settings.handle_extent(self.mode))
    }

    /// The frame of the node at `path` when the tree fills `frame`.
    pub fn frame_of(&self, frame: Rect, path: &NodePath) -> Option<Rect> {
        let root = self.root.as_ref()?;
        model::frame_at(root, path, frame, self.settings.handle_extent(self.mode))
    }

    /// Where content dragged to `point` would be dropped.
    pub fn drop_target_at(&self, frame: Rect, point: Point) -> Option<(NodePath, DropPosition)> {
        let root = self.root.as_ref()?;
        let handle_extent = self.settings.handle_extent(self.mode);
        let (path, rect) = model::leaf_at(root, frame, handle_extent, point)?;
        let position = detect_drop_position(rect, point, self.settings.drop_edge_fraction)?;
        Some((path, position))
    }
}

fn same_tree(a: &Option<Rc<Node>>, b: &Option<Rc<Node>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_log::test;

    use super::*;
    use crate::geometry::Size;
    use crate::model::{Direction::*, Slot::*};

    fn c(entry: &str) -> Node {
        Node::content(entry)
    }

    fn p(first: f64, second: f64) -> Proportion {
        Proportion::new(first, second).unwrap()
    }

    fn editable(root: Node) -> LayoutManager {
        let mut manager = LayoutManager::with_root(Settings::default(), Some(root));
        let _ = manager.handle_command(LayoutCommand::Edit);
        manager
    }

    fn root_of(manager: &LayoutManager) -> Node {
        Node::clone(manager.root().unwrap())
    }

    fn begin(manager: &mut LayoutManager, path: NodePath, container_extent: f64) -> GestureId {
        manager
            .handle_event(LayoutEvent::BeginResize { path, container_extent })
            .gesture
            .unwrap()
    }

    fn screen() -> Rect {
        Rect::new(Point::new(0.0, 0.0), Size::new(404.0, 100.0))
    }

    #[test]
    fn it_starts_read_only_and_ignores_input() {
        let root = Node::split(Horizontal, Proportion::EVEN, c("a"), c("b"));
        let mut manager = LayoutManager::with_root(Settings::default(), Some(root));
        assert_eq!(Mode::ReadOnly, manager.mode());
        let before = manager.root().cloned();
        let response = manager.handle_event(LayoutEvent::PickOut { path: [First].into() });
        assert_eq!(EventResponse::default(), response);
        assert_eq!(before, manager.root().cloned());
        let response = manager.handle_event(LayoutEvent::BeginResize {
            path: NodePath::root(),
            container_extent: 200.0,
        });
        assert_eq!(None, response.gesture);
    }

    #[test]
    fn it_normalizes_installed_trees() {
        let root = Node::Layout(model::LayoutNode::new(
            Vertical,
            [None, Some(Rc::new(c("a")))],
            Proportion::EVEN,
        ));
        let manager = LayoutManager::with_root(Settings::default(), Some(root));
        assert_eq!(c("a"), root_of(&manager));

        let mut manager = LayoutManager::new(Settings::default());
        assert_eq!(None, manager.root());
        let response = manager.set_root(Some(Rc::new(Node::Layout(model::LayoutNode::new(
            Vertical,
            [None, None],
            Proportion::EVEN,
        )))));
        assert!(!response.tree_changed);
        assert_eq!(None, manager.root());
    }

    #[test]
    fn resize_gesture_commits_on_release() {
        let mut manager = editable(Node::split(Horizontal, Proportion::EVEN, c("a"), c("b")));
        // The editable handle takes 4 of the 204.
        let gesture = begin(&mut manager, NodePath::root(), 204.0);

        let response =
            manager.handle_event(LayoutEvent::MoveResize { gesture, displacement: 150.0 });
        assert_eq!(Some(p(9.0, 1.0)), response.live_proportion);
        assert!(!response.tree_changed);
        assert_eq!(Proportion::EVEN, manager.root().unwrap().as_layout().unwrap().proportion);

        let response = manager.handle_event(LayoutEvent::EndResize { gesture });
        assert_eq!(
            vec![ProportionChange { path: NodePath::root(), proportion: p(9.0, 1.0) }],
            response.committed
        );
        assert!(response.tree_changed);
        assert_eq!(Node::split(Horizontal, p(9.0, 1.0), c("a"), c("b")), root_of(&manager));
        assert!(manager.gesture(gesture).is_none());

        // A second release of the same gesture does nothing.
        let response = manager.handle_event(LayoutEvent::EndResize { gesture });
        assert_eq!(EventResponse::default(), response);
    }

    #[test]
    fn unmoved_resize_commits_nothing() {
        let mut manager = editable(Node::split(Horizontal, Proportion::EVEN, c("a"), c("b")));
        let before = manager.root().cloned();
        let gesture = begin(&mut manager, NodePath::root(), 204.0);
        let response = manager.handle_event(LayoutEvent::EndResize { gesture });
        assert!(response.committed.is_empty());
        assert!(!response.tree_changed);
        assert!(Rc::ptr_eq(before.as_ref().unwrap(), manager.root().unwrap()));
    }

    #[test]
    fn min_fraction_follows_split_direction() {
        let settings = Settings {
            min_column_width_fraction: 0.1,
            min_row_height_fraction: 0.25,
            ..Settings::default()
        };
        let root = Node::split(Vertical, Proportion::EVEN, c("a"), c("b"));
        let mut manager = LayoutManager::with_root(settings, Some(root));
        let _ = manager.handle_command(LayoutCommand::Edit);
        let gesture = begin(&mut manager, NodePath::root(), 204.0);
        let response =
            manager.handle_event(LayoutEvent::MoveResize { gesture, displacement: 500.0 });
        assert_eq!(Some(p(3.0, 1.0)), response.live_proportion);
    }

    #[test]
    fn min_fraction_above_half_is_not_capped() {
        let settings = Settings { min_column_width_fraction: 0.6, ..Settings::default() };
        let root = Node::split(Horizontal, Proportion::EVEN, c("a"), c("b"));
        let mut manager = LayoutManager::with_root(settings, Some(root));
        let _ = manager.handle_command(LayoutCommand::Edit);
        let gesture = begin(&mut manager, NodePath::root(), 104.0);
        let response =
            manager.handle_event(LayoutEvent::MoveResize { gesture, displacement: 45.0 });
        assert_eq!(Some(p(40.0 / 60.0, 1.0)), response.live_proportion);
    }

    #[test]
    fn manager_state_is_debug_printable() {
        let manager = editable(Node::split(Horizontal, Proportion::EVEN, c("a"), c("b")));
        let printed = format!("{manager:?}");
        assert!(printed.contains("Editable"), "{printed}");
        assert!(printed.contains("Record"), "{printed}");
    }

    #[test]
    fn invalid_resizes_are_ignored() {
        let mut manager = editable(Node::split(Horizontal, Proportion::EVEN, c("a"), c("b")));
        // Not a layout node.
        let response = manager.handle_event(LayoutEvent::BeginResize {
            path: [First].into(),
            container_extent: 200.0,
        });
        assert_eq!(None, response.gesture);
        // No room besides the handle.
        let response = manager.handle_event(LayoutEvent::BeginResize {
            path: NodePath::root(),
            container_extent: 4.0,
        });
        assert_eq!(None, response.gesture);

        let gesture = begin(&mut manager, NodePath::root(), 204.0);
        let _ = manager.handle_event(LayoutEvent::MoveResize { gesture, displacement: 50.0 });
        let response =
            manager.handle_event(LayoutEvent::MoveResize { gesture, displacement: f64::NAN });
        assert_eq!(Some(p(3.0, 1.0)), response.live_proportion);
    }

    #[test]
    fn concurrent_resizes_are_isolated() {
        let mut manager = editable(Node::split(
            Horizontal,
            Proportion::EVEN,
            Node::split(Vertical, Proportion::EVEN, c("a"), c("b")),
            Node::split(Vertical, Proportion::EVEN, c("c"), c("d")),
        ));
        let left = begin(&mut manager, [First].into(), 104.0);
        let right = begin(&mut manager, [Second].into(), 204.0);
        assert_ne!(left, right);
        let _ =
            manager.handle_event(LayoutEvent::MoveResize { gesture: left, displacement: -25.0 });
        let _ =
            manager.handle_event(LayoutEvent::MoveResize { gesture: right, displacement: 50.0 });
        let _ = manager.handle_event(LayoutEvent::EndResize { gesture: right });
        let _ = manager.handle_event(LayoutEvent::EndResize { gesture: left });
        assert_eq!(
            Node::split(
                Horizontal,
                Proportion::EVEN,
                Node::split(Vertical, p(1.0, 3.0), c("a"), c("b")),
                Node::split(Vertical, p(3.0, 1.0), c("c"), c("d")),
            ),
            root_of(&manager)
        );
    }

    #[test]
    fn switching_to_read_only_commits_active_resizes() {
        let mut manager = editable(Node::split(Horizontal, Proportion::EVEN, c("a"), c("b")));
        let gesture = begin(&mut manager, NodePath::root(), 204.0);
        let _ = manager.handle_event(LayoutEvent::MoveResize { gesture, displacement: -150.0 });
        let response = manager.handle_command(LayoutCommand::Read);
        assert_eq!(Mode::ReadOnly, manager.mode());
        assert_eq!(1, response.committed.len());
        assert_eq!(Node::split(Horizontal, p(1.0, 9.0), c("a"), c("b")), root_of(&manager));
        assert!(manager.gesture(gesture).is_none());
    }

    #[test]
    fn drop_and_pick_out() {
        let mut manager = editable(c("a"));
        let response = manager.handle_event(LayoutEvent::Drop {
            target: NodePath::root(),
            entry: "b".into(),
            position: DropPosition::Left,
        });
        assert!(response.tree_changed);
        assert_eq!(Node::split(Horizontal, Proportion::EVEN, c("b"), c("a")), root_of(&manager));

        let response = manager.handle_event(LayoutEvent::PickOut { path: [Second].into() });
        assert!(response.tree_changed);
        assert_eq!(c("b"), root_of(&manager));

        let response = manager.handle_event(LayoutEvent::PickOut { path: NodePath::root() });
        assert!(response.tree_changed);
        assert_eq!(None, manager.root());
    }

    #[test]
    fn structural_edits_commit_resizes_first() {
        let mut manager = editable(Node::split(Horizontal, Proportion::EVEN, c("a"), c("b")));
        let gesture = begin(&mut manager, NodePath::root(), 204.0);
        let _ = manager.handle_event(LayoutEvent::MoveResize { gesture, displacement: 50.0 });
        let response = manager.handle_event(LayoutEvent::Drop {
            target: [First].into(),
            entry: "c".into(),
            position: DropPosition::Top,
        });
        assert_eq!(1, response.committed.len());
        assert_eq!(
            Node::split(
                Horizontal,
                p(3.0, 1.0),
                Node::split(Vertical, Proportion::EVEN, c("c"), c("a")),
                c("b"),
            ),
            root_of(&manager)
        );
        let response = manager.handle_event(LayoutEvent::EndResize { gesture });
        assert_eq!(EventResponse::default(), response);
    }

    #[test]
    fn mismatched_edits_leave_the_tree_alone() {
        let mut manager = editable(Node::split(Horizontal, Proportion::EVEN, c("a"), c("b")));
        let before = manager.root().cloned().unwrap();
        let responses = [
            manager.handle_event(LayoutEvent::PickOut { path: NodePath::root() }),
            manager.handle_event(LayoutEvent::PickOut { path: [First, First].into() }),
            manager.handle_event(LayoutEvent::Drop {
                target: NodePath::root(),
                entry: "x".into(),
                position: DropPosition::Left,
            }),
            manager.handle_event(LayoutEvent::Move {
                source: [First].into(),
                target: [First].into(),
                position: DropPosition::Left,
            }),
        ];
        for response in responses {
            assert!(!response.tree_changed);
        }
        assert!(Rc::ptr_eq(&before, manager.root().unwrap()));

        let mut empty = LayoutManager::new(Settings::default());
        let _ = empty.handle_command(LayoutCommand::Edit);
        let response = empty.handle_event(LayoutEvent::Drop {
            target: NodePath::root(),
            entry: "x".into(),
            position: DropPosition::Left,
        });
        assert!(!response.tree_changed);
        assert_eq!(None, empty.root());
    }

    #[test]
    fn move_rearranges_leaves() {
        let mut manager = editable(Node::split(
            Horizontal,
            Proportion::EVEN,
            Node::split(Vertical, Proportion::EVEN, c("a"), c("b")),
            c("c"),
        ));
        let response = manager.handle_event(LayoutEvent::Move {
            source: [First, First].into(),
            target: [Second].into(),
            position: DropPosition::Right,
        });
        assert!(response.tree_changed);
        assert_eq!(
            Node::split(
                Horizontal,
                Proportion::EVEN,
                c("b"),
                Node::split(Horizontal, Proportion::EVEN, c("c"), c("a")),
            ),
            root_of(&manager)
        );
    }

    #[test]
    fn snapshots_are_not_changed_by_later_edits() {
        let mut manager = editable(Node::split(Horizontal, Proportion::EVEN, c("a"), c("b")));
        let snapshot = manager.root().cloned().unwrap();
        let _ = manager.handle_event(LayoutEvent::PickOut { path: [First].into() });
        assert_eq!(Node::split(Horizontal, Proportion::EVEN, c("a"), c("b")), *snapshot);
    }

    #[test]
    fn layout_uses_the_handle_for_the_mode() {
        let mut manager = LayoutManager::with_root(
            Settings::default(),
            Some(Node::split(Horizontal, Proportion::EVEN, c("a"), c("b"))),
        );
        let frames = |manager: &LayoutManager| -> Vec<Rect> {
            manager.calculate_layout(screen()).into_iter().map(|leaf| leaf.frame).collect()
        };
        // Read-only handles are 1 wide.
        assert_eq!(
            vec![
                Rect::new(Point::new(0.0, 0.0), Size::new(202.0, 100.0)),
                Rect::new(Point::new(203.0, 0.0), Size::new(201.0, 100.0)),
            ],
            frames(&manager)
        );
        let _ = manager.handle_command(LayoutCommand::Edit);
        assert_eq!(
            vec![
                Rect::new(Point::new(0.0, 0.0), Size::new(200.0, 100.0)),
                Rect::new(Point::new(204.0, 0.0), Size::new(200.0, 100.0)),
            ],
            frames(&manager)
        );
        assert_eq!(
            Some(Rect::new(Point::new(204.0, 0.0), Size::new(200.0, 100.0))),
            manager.frame_of(screen(), &[Second].into())
        );
    }

    #[test]
    fn drop_targets() {
        let manager = editable(Node::split(Horizontal, Proportion::EVEN, c("a"), c("b")));
        assert_eq!(
            Some((NodePath::from([Second]), DropPosition::Left)),
            manager.drop_target_at(screen(), Point::new(210.0, 50.0))
        );
        assert_eq!(
            Some((NodePath::from([First]), DropPosition::Bottom)),
            manager.drop_target_at(screen(), Point::new(100.0, 95.0))
        );
        assert_eq!(None, manager.drop_target_at(screen(), Point::new(100.0, 50.0)));
        // On the handle.
        assert_eq!(None, manager.drop_target_at(screen(), Point::new(202.0, 50.0)));
    }
}
