//! UI Context
//!
//! Central composition object that owns the registered panels, the persistent
//! widget state table, the input router and the per-frame draw list. It runs
//! the compose cycle:
//!
//! ```text
//! Idle -> FrameBegun -> Composing -> FrameEnded -> Idle
//!   begin_frame   compose_panels   end_frame
//! ```
//!
//! Only transient structures are reset between frames; panels and widget
//! state survive until they are removed, evicted or the context is disposed.

use super::compose::{update_chrome, ComposeCtx, ComposeScratch, InteractionState};
use super::error::{FramePhase, PanelFailure, UIError, UIResult};
use super::identity::WidgetId;
use super::panel::{Panel, PanelSpec};
use super::rendering::{DrawList, MonospaceMeasure, PanelDrawRange, TextMeasure, UIRenderCommand};
use super::state::{StateKind, WidgetState, WidgetStateTable};
use super::text_buffer::TextBuffer;
use super::view::PanelView;
use super::backend::UIRenderBackend;
use crate::core::config::UIConfig;
use crate::events::{EventSystem, Interaction};
use crate::foundation::math::Vec2;
use crate::input::collision::topmost_hit;
use crate::input::{InputEvent, InputRouter, InputSender, InputSnapshot};

/// Everything one frame produced
#[derive(Debug, Clone, Default)]
pub struct FrameOutput {
    /// Frame number, starting at 1
    pub frame: u64,
    /// Sealed draw list, already submitted to the backend
    pub draw_list: DrawList,
    /// Interactions detected while composing
    pub interactions: Vec<Interaction>,
    /// Panels whose declaration failed this frame
    pub failed_panels: Vec<String>,
    /// Layout inputs that had to be clamped
    pub layout_warnings: usize,
    /// Widget states evicted at the end of the frame
    pub evicted: usize,
}

impl FrameOutput {
    /// All draw commands in panel order
    pub fn commands(&self) -> &[UIRenderCommand] {
        self.draw_list.commands()
    }

    /// Per-panel command ranges
    pub fn panels(&self) -> &[PanelDrawRange] {
        self.draw_list.panels()
    }

    /// Interactions that happened in `panel`
    pub fn interactions_in<'a>(&'a self, panel: &'a str) -> impl Iterator<Item = &'a Interaction> + 'a {
        self.interactions.iter().filter(move |event| event.panel() == panel)
    }
}

/// Immediate-mode UI context
pub struct UIContext {
    config: UIConfig,
    panels: Vec<Panel>,
    states: WidgetStateTable,
    router: InputRouter,
    input: InputSnapshot,
    interaction: InteractionState,
    scratch: ComposeScratch,
    draw: DrawList,
    interactions: Vec<Interaction>,
    previous: Vec<Interaction>,
    failed_panels: Vec<String>,
    layout_warnings: usize,
    event_system: EventSystem,
    measure: Box<dyn TextMeasure>,
    phase: FramePhase,
    frame: u64,
    disposed: bool,
}

impl UIContext {
    /// Create a context with default configuration
    pub fn new() -> Self {
        Self::with_config(UIConfig::default())
    }

    /// Create a context with the given configuration
    ///
    /// An invalid configuration is logged and replaced by the defaults.
    pub fn with_config(config: UIConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(reason) => {
                log::warn!("Invalid UI configuration ({}), using defaults", reason);
                UIConfig::default()
            }
        };
        let measure = Box::new(MonospaceMeasure::from_style(&config.style));
        Self {
            config,
            panels: Vec::new(),
            states: WidgetStateTable::new(),
            router: InputRouter::new(),
            input: InputSnapshot::new(),
            interaction: InteractionState::default(),
            scratch: ComposeScratch::default(),
            draw: DrawList::new(),
            interactions: Vec::new(),
            previous: Vec::new(),
            failed_panels: Vec::new(),
            layout_warnings: 0,
            event_system: EventSystem::new(),
            measure,
            phase: FramePhase::Idle,
            frame: 0,
            disposed: false,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &UIConfig {
        &self.config
    }

    /// Change the viewport size reported to the backend
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.config.viewport = (width, height);
    }

    /// Replace the text measure (for example with one backed by a real font)
    pub fn set_text_measure(&mut self, measure: Box<dyn TextMeasure>) {
        self.measure = measure;
    }

    // ---------------------------------------------------------------------
    // Panels
    // ---------------------------------------------------------------------

    /// Register a panel, or hot-swap the declaration of an existing one
    ///
    /// Re-registering a name keeps the panel's origin, size and open state.
    pub fn register_panel(&mut self, spec: PanelSpec) -> UIResult<()> {
        self.ensure_alive()?;
        match self.panels.iter_mut().find(|panel| panel.name == spec.name()) {
            Some(panel) => {
                log::info!("Panel '{}' re-registered, geometry kept at {:?}", panel.name, panel.origin);
                panel.replace(spec);
            }
            None => {
                log::info!("Panel '{}' registered", spec.name());
                self.panels.push(Panel::from_spec(spec));
            }
        }
        Ok(())
    }

    /// Remove a panel and evict all of its widget state
    pub fn remove_panel(&mut self, name: &str) -> UIResult<()> {
        self.ensure_alive()?;
        let index = self.panel_index(name)?;
        let panel = self.panels.remove(index);
        let evicted = self.states.evict_owner(panel.id);
        log::info!("Panel '{}' removed, {} widget states released", name, evicted);
        Ok(())
    }

    /// Registered panel by name
    pub fn panel(&self, name: &str) -> UIResult<&Panel> {
        let index = self.panel_index(name)?;
        Ok(&self.panels[index])
    }

    /// Registered panels in composition (and z) order
    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.panels.iter()
    }

    fn panel_index(&self, name: &str) -> UIResult<usize> {
        self.ensure_alive()?;
        self.panels
            .iter()
            .position(|panel| panel.name == name)
            .ok_or_else(|| UIError::UnknownPanelReference(name.to_string()))
    }

    fn panel_mut(&mut self, name: &str) -> UIResult<&mut Panel> {
        let index = self.panel_index(name)?;
        Ok(&mut self.panels[index])
    }

    /// Move a panel's top-left corner
    pub fn move_panel(&mut self, name: &str, x: f32, y: f32) -> UIResult<()> {
        let panel = self.panel_mut(name)?;
        panel.origin = Vec2::new(x, y);
        Ok(())
    }

    /// Resize a panel, clamped to the configured minimum size
    pub fn resize_panel(&mut self, name: &str, width: f32, height: f32) -> UIResult<()> {
        let index = self.panel_index(name)?;
        self.panels[index].set_size(Vec2::new(width, height), &self.config.style);
        Ok(())
    }

    /// Reopen a closed panel
    pub fn show_panel(&mut self, name: &str) -> UIResult<()> {
        self.panel_mut(name)?.open = true;
        Ok(())
    }

    /// Close a panel; its widget state is kept while it is hidden
    pub fn hide_panel(&mut self, name: &str) -> UIResult<()> {
        self.panel_mut(name)?.open = false;
        Ok(())
    }

    /// Collapse or expand a panel
    pub fn set_minimized(&mut self, name: &str, minimized: bool) -> UIResult<()> {
        self.panel_mut(name)?.minimized = minimized;
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Input
    // ---------------------------------------------------------------------

    /// Thread-safe handle for feeding input into this context
    pub fn input_sender(&self) -> InputSender {
        self.router.sender()
    }

    /// Queue an input event from the owning thread
    pub fn push_input(&self, event: InputEvent) {
        self.router.push(event);
    }

    /// Input state observed by the current (or last) frame
    pub fn input(&self) -> &InputSnapshot {
        &self.input
    }

    // ---------------------------------------------------------------------
    // Compose cycle
    // ---------------------------------------------------------------------

    /// Current stage of the compose cycle
    pub fn phase(&self) -> FramePhase {
        self.phase
    }

    /// Number of the current (or last) frame; 0 before the first frame
    pub fn frame_number(&self) -> u64 {
        self.frame
    }

    fn ensure_alive(&self) -> UIResult<()> {
        if self.disposed {
            return Err(UIError::ResourceAlreadyReleased);
        }
        Ok(())
    }

    fn expect_phase(&self, expected: FramePhase) -> UIResult<()> {
        self.ensure_alive()?;
        if self.phase != expected {
            return Err(UIError::InvalidPhase { expected, actual: self.phase });
        }
        Ok(())
    }

    /// Start a frame: drain all queued input into one snapshot
    pub fn begin_frame(&mut self) -> UIResult<()> {
        self.expect_phase(FramePhase::Idle)?;
        self.frame += 1;
        let drained = self.router.drain();
        self.input.capture(&mut self.router);
        self.draw.clear();
        self.interactions.clear();
        self.failed_panels.clear();
        self.layout_warnings = 0;
        self.phase = FramePhase::FrameBegun;
        log::debug!("Frame {} begun with {} input events", self.frame, drained);
        Ok(())
    }

    /// Run every open panel's declaration and compose its tree
    ///
    /// Panels are processed in registration order. A failing declaration
    /// skips only that panel; the failures are reported together once all
    /// panels have been processed.
    pub fn compose_panels(&mut self) -> UIResult<()> {
        self.expect_phase(FramePhase::FrameBegun)?;
        self.phase = FramePhase::Composing;

        let Self {
            config,
            panels,
            states,
            input,
            interaction,
            scratch,
            draw,
            interactions,
            previous,
            failed_panels,
            layout_warnings,
            measure,
            frame,
            ..
        } = self;
        let style = &config.style;
        let frame = *frame;
        let mut failures = Vec::new();

        let owner = topmost_hit(
            panels.iter().map(|panel| panel.open.then(|| panel.bounds(style))),
            input.mouse_position(),
        );

        for (index, panel) in panels.iter_mut().enumerate() {
            if !panel.open {
                states.touch_owner(panel.id, frame);
                continue;
            }

            let view = PanelView::new(&panel.name, frame, states, previous.as_slice());
            let content = match (panel.declaration)(&view) {
                Ok(content) => content,
                Err(error) => {
                    log::error!("Declaration of panel '{}' failed: {}", panel.name, error);
                    states.touch_owner(panel.id, frame);
                    failed_panels.push(panel.name.clone());
                    failures.push(PanelFailure { panel: panel.name.clone(), error });
                    continue;
                }
            };

            let pointer_owner = owner == Some(index);
            if !update_chrome(panel, input, style, interaction, pointer_owner, interactions) {
                states.touch_owner(panel.id, frame);
                continue;
            }

            let mut ctx = ComposeCtx {
                panel: &panel.name,
                panel_id: panel.id,
                frame,
                style,
                input,
                measure: &**measure,
                pointer_owner,
                clip: panel.bounds(style),
                states: &mut *states,
                interaction: &mut *interaction,
                draw: &mut *draw,
                interactions: &mut *interactions,
                scratch: &mut *scratch,
                layout_warnings: 0,
            };
            let max_scroll = ctx.compose_panel(panel, &content);
            *layout_warnings += ctx.layout_warnings;

            if panel.minimized {
                // Body was not laid out; keep state and scroll position for restore
                states.touch_owner(panel.id, frame);
            } else {
                panel.scroll_offset = panel.scroll_offset.min(max_scroll);
            }
            log::trace!("Panel '{}' composed", panel.name);
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(UIError::DeclarationFailed(failures))
        }
    }

    /// Seal the draw list, submit it to `backend` and return the frame output
    ///
    /// Stale widget state is evicted and every interaction is queued on the
    /// event system. The context is back in `Idle` afterwards even when the
    /// backend fails.
    pub fn end_frame(&mut self, backend: &mut dyn UIRenderBackend) -> UIResult<FrameOutput> {
        self.expect_phase(FramePhase::Composing)?;
        self.phase = FramePhase::FrameEnded;

        let evicted = self.states.evict_stale(self.frame, self.config.state.eviction_grace_frames);
        self.interaction.end_frame(&self.input);
        if let Some(focus) = self.interaction.focus {
            if self.states.get(focus).is_none() {
                self.interaction.focus = None;
            }
        }

        let submitted = self
            .draw
            .submit(backend, self.config.viewport)
            .map_err(|error| UIError::Backend(error.to_string()));

        for event in &self.interactions {
            self.event_system.send(event.clone());
        }
        self.previous.clone_from(&self.interactions);

        let output = FrameOutput {
            frame: self.frame,
            draw_list: std::mem::take(&mut self.draw),
            interactions: std::mem::take(&mut self.interactions),
            failed_panels: std::mem::take(&mut self.failed_panels),
            layout_warnings: std::mem::take(&mut self.layout_warnings),
            evicted,
        };
        self.phase = FramePhase::Idle;
        log::debug!(
            "Frame {} ended: {} commands, {} interactions, {} states evicted",
            output.frame,
            output.draw_list.len(),
            output.interactions.len(),
            evicted
        );

        submitted?;
        Ok(output)
    }

    /// Run one full compose cycle against `backend`
    ///
    /// The frame always ends and is submitted; declaration failures are
    /// reported afterwards.
    pub fn run_frame(&mut self, backend: &mut dyn UIRenderBackend) -> UIResult<FrameOutput> {
        self.begin_frame()?;
        let composed = self.compose_panels();
        let output = self.end_frame(backend)?;
        composed.map(|()| output)
    }

    // ---------------------------------------------------------------------
    // Widget state
    // ---------------------------------------------------------------------

    fn unknown_state(panel: &str, key: &str) -> UIError {
        UIError::UnknownWidgetState { panel: panel.to_string(), key: key.to_string() }
    }

    /// Text buffer of the keyed text field in `panel`
    pub fn text_buffer(&self, panel: &str, key: &str) -> UIResult<&TextBuffer> {
        self.panel(panel)?;
        self.states
            .get(WidgetId::keyed(panel, key))
            .and_then(WidgetState::as_text)
            .ok_or_else(|| Self::unknown_state(panel, key))
    }

    /// Content of the keyed text field in `panel`
    pub fn text(&self, panel: &str, key: &str) -> UIResult<String> {
        self.text_buffer(panel, key).map(TextBuffer::get)
    }

    fn text_entry(&mut self, panel: &str, key: &str) -> UIResult<&mut TextBuffer> {
        self.ensure_alive()?;
        let owner = self.panel(panel)?.id;
        let state = self.states.get_or_insert_with(WidgetId::keyed(panel, key), owner, self.frame, StateKind::Text, || {
            WidgetState::Text(TextBuffer::new())
        });
        match state {
            WidgetState::Text(buffer) => Ok(buffer),
            _ => Err(Self::unknown_state(panel, key)),
        }
    }

    /// Replace the content of the keyed text field, creating its buffer if needed
    pub fn set_text(&mut self, panel: &str, key: &str, value: &str) -> UIResult<()> {
        self.text_entry(panel, key)?.set(value);
        Ok(())
    }

    /// Replace the content from raw bytes
    ///
    /// Bytes that are not valid UTF-8 are rejected and the buffer keeps its
    /// previous content.
    pub fn set_text_bytes(&mut self, panel: &str, key: &str, bytes: &[u8]) -> UIResult<()> {
        self.text_entry(panel, key)?.set_bytes(bytes).map_err(|source| {
            log::warn!("Rejected non UTF-8 text for '{}' in panel '{}'", key, panel);
            UIError::EncodingError { panel: panel.to_string(), key: key.to_string(), source }
        })
    }

    /// Value of the keyed checkbox in `panel`
    pub fn checked(&self, panel: &str, key: &str) -> UIResult<bool> {
        self.panel(panel)?;
        self.states
            .get(WidgetId::keyed(panel, key))
            .and_then(WidgetState::as_toggle)
            .ok_or_else(|| Self::unknown_state(panel, key))
    }

    /// Selected value of a radio group in `panel`
    pub fn selected(&self, panel: &str, group: &str) -> UIResult<Option<u32>> {
        self.panel(panel)?;
        self.states
            .get(WidgetId::group(panel, group))
            .and_then(WidgetState::as_choice)
            .ok_or_else(|| Self::unknown_state(panel, group))
    }

    /// Explicitly release the state of a keyed widget or radio group
    pub fn dispose_widget_state(&mut self, panel: &str, key: &str) -> UIResult<()> {
        self.ensure_alive()?;
        self.panel(panel)?;
        let keyed = WidgetId::keyed(panel, key);
        let released = self.states.evict(keyed).map(|_| keyed).or_else(|| {
            let group = WidgetId::group(panel, key);
            self.states.evict(group).map(|_| group)
        });
        match released {
            Some(id) => {
                if self.interaction.focus == Some(id) {
                    self.interaction.focus = None;
                }
                log::debug!("Released widget state '{}' of panel '{}'", key, panel);
                Ok(())
            }
            None => Err(Self::unknown_state(panel, key)),
        }
    }

    /// Number of live persistent widget states
    pub fn widget_state_count(&self) -> usize {
        self.states.len()
    }

    // ---------------------------------------------------------------------
    // Events
    // ---------------------------------------------------------------------

    /// Event system receiving every interaction at frame end
    pub fn event_system(&self) -> &EventSystem {
        &self.event_system
    }

    /// Mutable event system, for registering handlers
    pub fn event_system_mut(&mut self) -> &mut EventSystem {
        &mut self.event_system
    }

    /// Deliver queued interactions to the registered handlers
    pub fn dispatch_events(&mut self) -> usize {
        self.event_system.dispatch()
    }

    // ---------------------------------------------------------------------
    // Teardown
    // ---------------------------------------------------------------------

    /// Release every panel and persistent widget state
    ///
    /// Returns the number of widget states released. A second call reports
    /// [`UIError::ResourceAlreadyReleased`] and changes nothing.
    pub fn dispose(&mut self) -> UIResult<usize> {
        if self.disposed {
            log::warn!("UI context disposed twice");
            return Err(UIError::ResourceAlreadyReleased);
        }
        let released = self.states.release_all();
        self.panels.clear();
        self.router.clear();
        self.event_system.reset();
        self.interaction.clear();
        self.draw.clear();
        self.interactions.clear();
        self.previous.clear();
        self.failed_panels.clear();
        self.phase = FramePhase::Idle;
        self.disposed = true;
        log::info!("UI context disposed, {} widget states released", released);
        Ok(released)
    }

    /// Context was disposed
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl Default for UIContext {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for UIContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UIContext")
            .field("frame", &self.frame)
            .field("phase", &self.phase)
            .field("panels", &self.panels.len())
            .field("widget_states", &self.states.len())
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}
