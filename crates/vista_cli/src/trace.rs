//! Scripted host event traces
//!
//! A trace is the sequence of calls a host would make on a viewport
//! controller: size observations, pointer and key input, imperative scroll
//! requests and animation frames. [`Replayer`] feeds them through a
//! [`ViewportController`] and records one [`Snapshot`] per event.
//!
//! Traces are JSON or TOML:
//!
//! ```toml
//! [config]
//! axis = "horizontal"
//!
//! [targets]
//! row-3 = { start = 300.0, extent = 50.0 }
//!
//! [[events]]
//! event = "resize"
//! content = 1000.0
//! viewport = 500.0
//! track = 200.0
//!
//! [[events]]
//! event = "scroll_to"
//! target = "row-3"
//! align = "center"
//! ```

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use vista_core::{KeyCode, Point};
use vista_viewport::{
    DragTarget, InteractionMode, ListenerScope, PointerRelease, ScrollAlign, ScrollRequest,
    ScrollTransition, TargetBounds, ViewState, ViewportConfig, ViewportController,
};

/// One host call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent {
    Resize {
        content: f32,
        viewport: f32,
        track: f32,
    },
    TrackOrigin {
        x: f32,
        y: f32,
    },
    PointerDown {
        target: DragTarget,
        x: f32,
        y: f32,
    },
    PointerMove {
        x: f32,
        y: f32,
    },
    PointerUp,
    PointerCancel,
    /// Web key name ("ArrowRight", "End", ...)
    Key {
        key: String,
    },
    Wheel {
        delta: f32,
    },
    SetOffset {
        offset: f32,
    },
    ScrollTo {
        target: String,
        #[serde(default)]
        align: ScrollAlign,
        #[serde(default)]
        transition: ScrollTransition,
    },
    Frame,
    Unmount,
}

/// A complete trace file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Trace {
    #[serde(default)]
    pub config: ViewportConfig,
    /// Scroll targets resolvable by `scroll_to` events
    #[serde(default)]
    pub targets: FxHashMap<String, TargetBounds>,
    #[serde(default)]
    pub events: Vec<TraceEvent>,
}

/// Trace file encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceFormat {
    Json,
    Toml,
}

impl TraceFormat {
    /// Pick a format from the file extension (JSON unless `.toml`)
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => TraceFormat::Toml,
            _ => TraceFormat::Json,
        }
    }
}

impl Trace {
    /// Load a trace file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read trace {}", path.display()))?;
        Self::parse(&content, TraceFormat::from_path(path))
            .with_context(|| format!("Failed to parse trace {}", path.display()))
    }

    pub fn parse(content: &str, format: TraceFormat) -> Result<Self> {
        let trace = match format {
            TraceFormat::Json => serde_json::from_str(content)?,
            TraceFormat::Toml => toml::from_str(content)?,
        };
        Ok(trace)
    }
}

/// Controller state after one event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub step: usize,
    pub event: TraceEvent,
    /// Whether the event changed the offset (or, for resizes and frames, the view)
    pub changed: bool,
    /// Live offset (may run ahead of `view.offset` during a drag)
    pub offset: f32,
    pub needs_frame: bool,
    pub interaction: InteractionMode,
    pub view: ViewState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<ListenerScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<PointerRelease>,
}

#[derive(Debug, Default)]
struct Outcome {
    changed: bool,
    scope: Option<ListenerScope>,
    release: Option<PointerRelease>,
}

/// Drives a controller from trace events
pub struct Replayer {
    controller: ViewportController,
    targets: FxHashMap<String, TargetBounds>,
    step: usize,
}

impl Replayer {
    pub fn new(config: ViewportConfig, targets: FxHashMap<String, TargetBounds>) -> Result<Self> {
        let controller = ViewportController::new(config).context("Invalid viewport config")?;
        Ok(Self {
            controller,
            targets,
            step: 0,
        })
    }

    /// Apply one event and capture the resulting state
    pub fn apply(&mut self, event: &TraceEvent) -> Snapshot {
        let outcome = self.dispatch(event);
        let snapshot = Snapshot {
            step: self.step,
            event: event.clone(),
            changed: outcome.changed,
            offset: self.controller.offset(),
            needs_frame: self.controller.needs_frame(),
            interaction: self.controller.interaction_mode(),
            view: *self.controller.view(),
            scope: outcome.scope,
            release: outcome.release,
        };
        self.step += 1;
        snapshot
    }

    fn dispatch(&mut self, event: &TraceEvent) -> Outcome {
        let controller = &mut self.controller;
        match event {
            TraceEvent::Resize {
                content,
                viewport,
                track,
            } => changed(controller.on_resize(*content, *viewport, *track)),
            TraceEvent::TrackOrigin { x, y } => {
                controller.set_track_origin(Point::new(*x, *y));
                Outcome::default()
            }
            TraceEvent::PointerDown { target, x, y } => Outcome {
                scope: controller.on_pointer_down(*target, Point::new(*x, *y)),
                ..Default::default()
            },
            TraceEvent::PointerMove { x, y } => changed(controller.on_pointer_move(Point::new(*x, *y))),
            TraceEvent::PointerUp => released(controller.on_pointer_up()),
            TraceEvent::PointerCancel => released(controller.on_pointer_cancel()),
            TraceEvent::Key { key } => {
                let code = KeyCode::from_name(key);
                if code == KeyCode::UNKNOWN {
                    tracing::warn!("Unknown key {:?} in trace", key);
                }
                let before = controller.offset();
                controller.on_key_down(code);
                changed(controller.offset() != before)
            }
            TraceEvent::Wheel { delta } => changed(controller.on_wheel(*delta)),
            TraceEvent::SetOffset { offset } => changed(controller.set_offset(*offset)),
            TraceEvent::ScrollTo {
                target,
                align,
                transition,
            } => {
                let request = ScrollRequest {
                    target: target.clone(),
                    align: *align,
                    transition: *transition,
                };
                changed(controller.scroll_to(&request, &self.targets))
            }
            TraceEvent::Frame => changed(controller.on_animation_frame()),
            TraceEvent::Unmount => match controller.unmount() {
                Some(scope) => released(PointerRelease {
                    scope: Some(scope),
                    ..Default::default()
                }),
                None => Outcome::default(),
            },
        }
    }
}

fn changed(changed: bool) -> Outcome {
    Outcome {
        changed,
        ..Default::default()
    }
}

fn released(release: PointerRelease) -> Outcome {
    Outcome {
        release: Some(release),
        ..Default::default()
    }
}

/// Replay a whole trace, optionally overriding its embedded config
pub fn replay(trace: &Trace, config: Option<ViewportConfig>) -> Result<Vec<Snapshot>> {
    let mut replayer = Replayer::new(config.unwrap_or(trace.config), trace.targets.clone())?;
    let snapshots = trace
        .events
        .iter()
        .map(|event| replayer.apply(event))
        .collect();
    Ok(snapshots)
}
