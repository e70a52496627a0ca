//! Script runner
//!
//! A script is a JSON array of `CanvasInput`s. Each input is dispatched in
//! order and every emitted event is recorded with the index of the step
//! that produced it.

use std::path::Path;

use anyhow::Result;
use grid_engine::{Canvas, CanvasEvent, CanvasInput};
use grid_model::{GridConfig, GridLayoutData, ItemId, WidgetType};
use serde::Serialize;

pub fn load_script(path: &Path) -> Result<Vec<CanvasInput>> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// One line of replay output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayRecord {
    pub step: usize,
    #[serde(flatten)]
    pub event: CanvasEvent,
    /// Item created in answer to an add request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added: Option<ItemId>,
}

pub struct Replay {
    canvas: Canvas,
    auto_add: Option<WidgetType>,
}

impl Replay {
    pub fn new(
        layout: GridLayoutData,
        config: GridConfig,
        read_only: bool,
        width: Option<f64>,
    ) -> Self {
        let mut canvas = Canvas::with_config(layout, config);
        if let Some(width) = width {
            canvas.dispatch(CanvasInput::ContainerResized { width });
        }
        if read_only {
            canvas.dispatch(CanvasInput::SetReadOnly { read_only });
        }
        Self {
            canvas,
            auto_add: None,
        }
    }

    /// Answer add requests by inserting a widget of `widget_type`
    pub fn auto_add(mut self, widget_type: WidgetType) -> Self {
        self.auto_add = Some(widget_type);
        self
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn run(&mut self, script: Vec<CanvasInput>) -> Vec<ReplayRecord> {
        let mut records = Vec::new();
        for (step, input) in script.into_iter().enumerate() {
            for event in self.canvas.dispatch(input) {
                let added = match (&event, self.auto_add) {
                    (CanvasEvent::Add { x, y }, Some(widget_type)) => {
                        match self.canvas.add_item(*x, *y, widget_type) {
                            Ok(id) => Some(id),
                            Err(e) => {
                                tracing::warn!("Could not add item at ({}, {}): {}", x, y, e);
                                None
                            }
                        }
                    }
                    _ => None,
                };
                records.push(ReplayRecord { step, event, added });
            }
        }
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_engine::{Point, PointerTarget};
    use grid_model::{profile_layout, starter_layout, GridRect};
    use std::io::Write;

    fn script(json: &str) -> Vec<CanvasInput> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_replay_drag_emits_update() {
        // 8 columns at 784px: 84px cells, 100px per step
        let mut replay = Replay::new(starter_layout(), GridConfig::default(), false, Some(784.0));
        let banner = replay.canvas().layout().items[4].clone();

        let records = replay.run(vec![
            CanvasInput::PointerDown {
                target: PointerTarget::Item {
                    item_id: banner.id.clone(),
                },
                at: Point::new(0.0, 0.0),
            },
            CanvasInput::PointerMove {
                at: Point::new(0.0, 400.0),
            },
            CanvasInput::PointerUp {
                at: Point::new(0.0, 400.0),
            },
        ]);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].step, 2);
        assert!(matches!(records[0].event, CanvasEvent::Update { .. }));
        let moved = replay.canvas().layout().item(&banner.id).unwrap().rect();
        assert_eq!(moved, GridRect::new(banner.x, banner.y + 4, banner.w, banner.h));
    }

    #[test]
    fn test_auto_add_answers_cell_clicks() {
        let mut replay = Replay::new(GridLayoutData::new(2, 2), GridConfig::default(), false, None)
            .auto_add(WidgetType::Image);

        let records = replay.run(script(r#"[
            { "kind": "cell_click", "x": 2, "y": 1 },
            { "kind": "cell_click", "x": 2, "y": 1 }
        ]"#));

        assert_eq!(records.len(), 1);
        let id = records[0].added.clone().unwrap();
        assert_eq!(replay.canvas().selected(), Some(&id));
        assert_eq!(
            replay.canvas().layout().item(&id).unwrap().widget_type(),
            WidgetType::Image
        );
    }

    #[test]
    fn test_read_only_replay_is_silent() {
        let mut replay = Replay::new(profile_layout(), GridConfig::default(), true, None);
        let records = replay.run(script(r#"[{ "kind": "cell_click", "x": 1, "y": 6 }]"#));
        assert!(records.is_empty());
    }

    #[test]
    fn test_record_json_shape() {
        let record = ReplayRecord {
            step: 3,
            event: CanvasEvent::Add { x: 1, y: 2 },
            added: None,
        };
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            serde_json::json!({ "step": 3, "event": "add", "x": 1, "y": 2 })
        );
    }

    #[test]
    fn test_load_script_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{ "kind": "cancel" }}]"#).unwrap();
        assert_eq!(load_script(file.path()).unwrap(), vec![CanvasInput::Cancel]);
    }
}
