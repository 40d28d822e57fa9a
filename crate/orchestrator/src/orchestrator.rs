use vizcore_layout_bridge::{LayoutConfig, LayoutEngine};
use vizcore_model_common::{VizError, VizResult};
use vizcore_render_bridge::{RenderOutput, Theme};
use vizcore_state::VisualizationState;

use crate::EngineState;

/// Drives a [`VisualizationState`] through layout and render passes (C8).
///
/// `notify_mutation` coalesces any number of state changes observed before
/// the next `run` into a single `Dirty` flag -- a caller that mutates the
/// graph ten times in a frame still only pays for one layout+render pass.
/// `run` is single-flight: calling it while a previous call is still
/// executing is rejected with [`VizError::InvalidState`] rather than
/// starting a second overlapping pass.
pub struct EngineOrchestrator<L: LayoutEngine> {
    state: EngineState,
    layout_engine: L,
    theme: Theme,
    layout_config: LayoutConfig,
    last_render: Option<RenderOutput>,
    last_seen_revision: u64,
    listeners: Vec<Box<dyn Fn(EngineState) + Send + Sync>>,
}

impl<L: LayoutEngine> EngineOrchestrator<L> {
    pub fn new(layout_engine: L) -> Self {
        EngineOrchestrator {
            state: EngineState::Idle,
            layout_engine,
            theme: Theme::default(),
            layout_config: LayoutConfig::default(),
            last_render: None,
            last_seen_revision: 0,
            listeners: Vec::new(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_layout_config(mut self, layout_config: LayoutConfig) -> Self {
        self.layout_config = layout_config;
        self
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn last_render(&self) -> Option<&RenderOutput> {
        self.last_render.as_ref()
    }

    /// Registers a listener, invoked (on the same thread) after each
    /// transition into `Ready` or `Error` -- the two states a host actually
    /// needs to react to (§4.8, §6); intermediate transitions (`Dirty`,
    /// `LayingOut`, `Rendering`, `Idle`) are not reported.
    pub fn subscribe_state_changes(&mut self, listener: impl Fn(EngineState) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Records that `viz_state` may have changed. A no-op if its revision
    /// matches the last pass this orchestrator has seen, or if the
    /// orchestrator is already `Dirty` -- any number of mutations observed
    /// before the next `run` coalesce into a single `Dirty` transition.
    /// Does not disturb an in-flight pass.
    pub fn notify_mutation(&mut self, viz_state: &VisualizationState) {
        if viz_state.revision() == self.last_seen_revision {
            return;
        }
        if !self.state.is_in_flight() && self.state != EngineState::Dirty {
            self.transition(EngineState::Dirty);
        }
    }

    /// Forces the orchestrator back to `Idle`, abandoning any in-flight
    /// pass bookkeeping. Does not touch `viz_state` itself.
    pub fn cancel(&mut self) {
        self.transition(EngineState::Idle);
    }

    /// Runs one layout+render pass over `viz_state`, returning the fresh
    /// [`RenderOutput`]. Refuses to start a second pass while one is
    /// already running (single-flight).
    pub fn run(&mut self, viz_state: &mut VisualizationState) -> VizResult<&RenderOutput> {
        if self.state.is_in_flight() {
            return Err(VizError::InvalidState(
                "orchestrator pass already running".to_string(),
            ));
        }

        self.transition(EngineState::LayingOut);
        if let Err(err) = self.layout_engine.compute_layout(viz_state, &self.layout_config) {
            self.transition(EngineState::Error);
            return Err(err);
        }

        self.transition(EngineState::Rendering);
        let render = RenderOutput::build(viz_state, &self.theme);

        self.last_render = Some(render);
        self.last_seen_revision = viz_state.revision();
        self.transition(EngineState::Ready);

        Ok(self
            .last_render
            .as_ref()
            .expect("just assigned above"))
    }

    fn transition(&mut self, new_state: EngineState) {
        self.state = new_state;
        tracing::debug!(?new_state, "orchestrator state transition");
        if matches!(new_state, EngineState::Ready | EngineState::Error) {
            for listener in &self.listeners {
                listener(new_state);
            }
        }
    }
}
