//! Canvas orchestrator
//!
//! The `Canvas` owns the authoritative layout document for an editing
//! session. Hosts feed it pointer and lifecycle inputs through `dispatch`
//! and receive the resulting `CanvasEvent`s. The only way the document
//! changes from a gesture is a commit at pointer-up, which also emits
//! exactly one `CanvasEvent::Update`.

use crate::{
    AddItem, Command, Corner, DragController, EngineError, Gesture, GestureOutcome, GridMetrics,
    Point, ResizeController, Result,
};
use grid_model::{GridConfig, GridLayoutData, GridRect, ItemId, WidgetType};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// What the pointer went down on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "on", rename_all = "snake_case")]
pub enum PointerTarget {
    /// The body of an item: a click selects it, a drag moves it
    Item { item_id: ItemId },
    /// One of an item's corner resize handles
    Handle { item_id: ItemId, corner: Corner },
}

/// Inputs a host forwards to the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CanvasInput {
    PointerDown { target: PointerTarget, at: Point },
    PointerMove { at: Point },
    PointerUp { at: Point },
    /// Abandon the current gesture without committing (e.g. Escape)
    Cancel,
    /// Click on the background cell `(x, y)`
    CellClick { x: i32, y: i32 },
    /// The container the grid lives in changed width
    ContainerResized { width: f64 },
    /// The host replaced the document (e.g. reloaded from storage)
    Reload { layout: GridLayoutData },
    SetReadOnly { read_only: bool },
    /// The host changed the selection (e.g. closed the edit panel)
    Select { item_id: Option<ItemId> },
}

/// Events the canvas reports to its host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CanvasEvent {
    /// A gesture committed a new document
    Update { layout: GridLayoutData },
    /// An item was clicked without being dragged
    Select { item_id: ItemId },
    /// An empty cell was clicked in edit mode
    Add { x: i32, y: i32 },
}

/// Where the pointer is in its press/drag lifecycle
#[derive(Debug, Default)]
enum PointerState {
    #[default]
    Idle,
    /// Down on an item but not yet past the activation distance
    Pressed { item_id: ItemId, origin: Point },
    /// A drag or resize gesture is running; deltas are measured from `origin`
    Gesturing { origin: Point },
}

/// Owns the layout document and mediates between the host and the gesture
/// controllers
#[derive(Debug)]
pub struct Canvas {
    layout: GridLayoutData,
    config: GridConfig,
    metrics: GridMetrics,
    container_width: Option<f64>,
    read_only: bool,
    selected: Option<ItemId>,
    pointer: PointerState,
    gesture: Option<Box<dyn Gesture>>,
}

impl Canvas {
    /// Create an editable canvas over `layout`
    pub fn new(layout: GridLayoutData) -> Self {
        Self::with_config(layout, GridConfig::default())
    }

    /// Create an editable canvas with custom grid metrics
    pub fn with_config(layout: GridLayoutData, config: GridConfig) -> Self {
        Self {
            layout,
            metrics: GridMetrics::new(crate::INITIAL_CELL_SIZE_PX, config.gap),
            container_width: None,
            config,
            read_only: false,
            selected: None,
            pointer: PointerState::Idle,
            gesture: None,
        }
    }

    /// Create a canvas for public viewing: no gestures, no add-on-click
    pub fn read_only(layout: GridLayoutData) -> Self {
        let mut canvas = Self::new(layout);
        canvas.read_only = true;
        canvas
    }

    /// Current committed document
    pub fn layout(&self) -> &GridLayoutData {
        &self.layout
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn metrics(&self) -> &GridMetrics {
        &self.metrics
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn selected(&self) -> Option<&ItemId> {
        self.selected.as_ref()
    }

    /// Item currently being dragged or resized
    pub fn active_item(&self) -> Option<&ItemId> {
        self.gesture.as_ref().and_then(|gesture| gesture.item_id())
    }

    /// Last valid proposal of the running gesture
    pub fn placeholder(&self) -> Option<GridRect> {
        self.gesture.as_ref().and_then(|gesture| gesture.placeholder())
    }

    pub fn is_gesture_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Feed one input and collect the events it produced.
    ///
    /// Inputs are applied synchronously and in order; the canvas never
    /// fails on an input; unusable ones are ignored.
    pub fn dispatch(&mut self, input: CanvasInput) -> Vec<CanvasEvent> {
        let mut events = Vec::new();
        match input {
            CanvasInput::PointerDown { target, at } => self.pointer_down(target, at),
            CanvasInput::PointerMove { at } => self.pointer_move(at),
            CanvasInput::PointerUp { at } => self.pointer_up(at, &mut events),
            CanvasInput::Cancel => self.cancel(),
            CanvasInput::CellClick { x, y } => self.cell_click(x, y, &mut events),
            CanvasInput::ContainerResized { width } => self.resize_container(width),
            CanvasInput::Reload { layout } => self.reload(layout),
            CanvasInput::SetReadOnly { read_only } => self.set_read_only(read_only),
            CanvasInput::Select { item_id } => {
                self.selected = item_id.filter(|id| self.layout.contains(id));
            }
        }
        events
    }

    /// Feed a sequence of inputs, collecting every event
    pub fn dispatch_all(&mut self, inputs: impl IntoIterator<Item = CanvasInput>) -> Vec<CanvasEvent> {
        inputs
            .into_iter()
            .flat_map(|input| self.dispatch(input))
            .collect()
    }

    /// Apply an explicit edit from the host (add, update or remove an item).
    ///
    /// Replaces the document on success. No `Update` event is emitted: the
    /// caller already holds the result through `layout()`.
    pub fn execute(&mut self, command: &dyn Command) -> Result<&GridLayoutData> {
        if self.read_only {
            return Err(EngineError::ReadOnly);
        }
        let next = command.apply(&self.layout)?;
        debug!(command = command.display_name(), "command executed");
        self.replace_layout(next);
        Ok(&self.layout)
    }

    /// Add a widget of `widget_type` at the empty cell `(x, y)` and select it
    pub fn add_item(&mut self, x: i32, y: i32, widget_type: WidgetType) -> Result<ItemId> {
        let command = AddItem::new(x, y, widget_type);
        self.execute(&command)?;
        self.selected = Some(command.id.clone());
        Ok(command.id)
    }

    fn pointer_down(&mut self, target: PointerTarget, at: Point) {
        if self.read_only || self.gesture.is_some() {
            return;
        }

        match target {
            PointerTarget::Item { item_id } => {
                if self.layout.contains(&item_id) {
                    self.pointer = PointerState::Pressed {
                        item_id,
                        origin: at,
                    };
                }
            }
            PointerTarget::Handle { item_id, corner } => {
                if let Some(resize) = ResizeController::started(&self.layout, &item_id, corner) {
                    self.gesture = Some(Box::new(resize));
                    self.pointer = PointerState::Gesturing { origin: at };
                }
            }
        }
    }

    fn pointer_move(&mut self, at: Point) {
        if let PointerState::Pressed { item_id, origin } = &self.pointer {
            if at.delta_from(*origin).distance() < self.config.activation_distance {
                return;
            }
            let origin = *origin;
            match DragController::started(&self.layout, item_id) {
                Some(drag) => {
                    self.gesture = Some(Box::new(drag));
                    self.pointer = PointerState::Gesturing { origin };
                }
                None => {
                    self.pointer = PointerState::Idle;
                    return;
                }
            }
        }

        let PointerState::Gesturing { origin } = self.pointer else {
            return;
        };
        if let Some(gesture) = self.gesture.as_mut() {
            if let Some(placeholder) = gesture.move_by(&self.layout, &self.metrics, at.delta_from(origin)) {
                trace!(%placeholder, "placeholder moved");
            }
        }
    }

    fn pointer_up(&mut self, at: Point, events: &mut Vec<CanvasEvent>) {
        match std::mem::take(&mut self.pointer) {
            PointerState::Idle => {}
            PointerState::Pressed { item_id, .. } => {
                if self.layout.contains(&item_id) {
                    self.selected = Some(item_id.clone());
                    events.push(CanvasEvent::Select { item_id });
                }
            }
            PointerState::Gesturing { origin } => {
                let Some(mut gesture) = self.gesture.take() else {
                    return;
                };
                gesture.move_by(&self.layout, &self.metrics, at.delta_from(origin));
                match gesture.end(&self.layout) {
                    GestureOutcome::Committed(next) => {
                        self.layout = next.clone();
                        events.push(CanvasEvent::Update { layout: next });
                    }
                    GestureOutcome::Discarded(reason) => {
                        debug!(gesture = gesture.display_name(), ?reason, "gesture discarded");
                    }
                }
            }
        }
    }

    fn cancel(&mut self) {
        if let Some(mut gesture) = self.gesture.take() {
            gesture.cancel();
        }
        self.pointer = PointerState::Idle;
    }

    fn cell_click(&mut self, x: i32, y: i32, events: &mut Vec<CanvasEvent>) {
        if self.read_only || self.gesture.is_some() {
            return;
        }
        if self.layout.in_grid(x, y) && self.layout.is_cell_free(x, y) {
            events.push(CanvasEvent::Add { x, y });
        }
    }

    fn resize_container(&mut self, width: f64) {
        self.container_width = Some(width);
        self.metrics = GridMetrics::fit(width, self.layout.cols, &self.config);
        trace!(cell_size = self.metrics.cell_size, overflow = self.metrics.overflow, "cell size updated");
    }

    fn reload(&mut self, layout: GridLayoutData) {
        debug!(rows = layout.rows, cols = layout.cols, items = layout.items.len(), "layout reloaded");
        let cols_changed = layout.cols != self.layout.cols;
        self.replace_layout(layout);
        if cols_changed {
            if let Some(width) = self.container_width {
                self.resize_container(width);
            }
        }
        if let PointerState::Pressed { item_id, .. } = &self.pointer {
            if !self.layout.contains(item_id) {
                self.pointer = PointerState::Idle;
            }
        }
    }

    fn set_read_only(&mut self, read_only: bool) {
        if read_only {
            self.cancel();
        }
        self.read_only = read_only;
    }

    fn replace_layout(&mut self, layout: GridLayoutData) {
        self.layout = layout;
        if let Some(selected) = &self.selected {
            if !self.layout.contains(selected) {
                self.selected = None;
            }
        }
        self.drop_stale_gesture();
    }

    /// Cancel the running gesture if its item was removed or no longer sits
    /// at the rectangle the gesture started from
    fn drop_stale_gesture(&mut self) {
        let stale = self
            .gesture
            .as_ref()
            .and_then(|gesture| gesture.frame())
            .is_some_and(|frame| {
                self.layout.item(&frame.item_id).map(|item| item.rect()) != Some(frame.origin)
            });
        if stale {
            debug!("gesture target changed underneath, cancelling");
            self.cancel();
        }
    }
}
