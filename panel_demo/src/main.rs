//! Panel demo application
//!
//! Drives a [`UIContext`] headlessly: a producer thread replays a scripted
//! input session through an [`InputSender`], the main loop composes two
//! panels per frame and a logging backend prints what would be drawn.
//! Halfway through, the login panel's declaration is hot-swapped while its
//! typed content survives.

use std::sync::mpsc;
use std::thread;

use serde::{Deserialize, Serialize};
use ui_engine::config::Config;
use ui_engine::foundation::logging;
use ui_engine::foundation::math::Rect;
use ui_engine::prelude::*;

/// Demo settings, read from `panel_demo.toml` when present
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct DemoConfig {
    /// Frames to run
    frames: usize,
    /// Frame at which the login panel is re-registered
    hot_swap_frame: usize,
    /// Context configuration
    ui: UIConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self { frames: 12, hot_swap_frame: 7, ui: UIConfig::default() }
    }
}

impl Config for DemoConfig {}

/// Backend that logs every command instead of drawing it
#[derive(Default)]
struct LogBackend {
    commands: usize,
    panels: usize,
}

impl UIRenderBackend for LogBackend {
    fn begin_frame(&mut self, viewport: (f32, f32)) -> BackendResult {
        self.commands = 0;
        self.panels = 0;
        log::trace!("Viewport {}x{}", viewport.0, viewport.1);
        Ok(())
    }

    fn begin_panel(&mut self, name: &str, bounds: Rect) -> BackendResult {
        self.panels += 1;
        log::debug!("Panel '{}' at ({}, {}) {}x{}", name, bounds.x, bounds.y, bounds.width, bounds.height);
        Ok(())
    }

    fn draw(&mut self, command: &UIRenderCommand) -> BackendResult {
        self.commands += 1;
        if let UIRenderCommand::Text { text, .. } = command {
            log::debug!("  text \"{}\"", text);
        }
        Ok(())
    }

    fn end_panel(&mut self, _name: &str) -> BackendResult {
        Ok(())
    }

    fn flush(&mut self) -> BackendResult {
        log::info!("Flushed {} commands across {} panels", self.commands, self.panels);
        Ok(())
    }
}

fn click(x: f32, y: f32) -> Vec<InputEvent> {
    vec![InputEvent::cursor(x, y), InputEvent::press(MouseButton::Left), InputEvent::release(MouseButton::Left)]
}

/// Input replayed one batch per frame
fn script() -> Vec<Vec<InputEvent>> {
    vec![
        // Focus the user name field and type into it
        click(60.0, 60.0),
        vec![InputEvent::key(Key::SelectAll), InputEvent::Text("alice".to_string()), InputEvent::key(Key::Enter)],
        click(60.0, 84.0),
        click(60.0, 110.0),
        // Drag the settings panel by its title bar
        vec![InputEvent::cursor(320.0, 30.0), InputEvent::press(MouseButton::Left)],
        vec![InputEvent::cursor(340.0, 60.0)],
        vec![InputEvent::release(MouseButton::Left)],
        Vec::new(),
        click(360.0, 114.0),
    ]
}

fn login_panel() -> PanelSpec {
    PanelSpec::new("login").title("Login").origin(20.0, 20.0).size(240.0, 160.0).declare(|_| {
        Ok(LayoutContainer::vertical()
            .child(WidgetNode::text_field("guest").key("user").height(24.0).max_len(24))
            .child(WidgetNode::checkbox("Remember me", false).key("remember").height(24.0))
            .child(WidgetNode::button("Sign in").key("sign_in").height(30.0))
            .child(WidgetNode::spacer()))
    })
}

fn welcome_panel() -> PanelSpec {
    PanelSpec::new("login").title("Welcome").declare(|view| {
        let user = view.text("user").unwrap_or("guest");
        Ok(LayoutContainer::vertical()
            .child(WidgetNode::text_field("guest").key("user").height(24.0).max_len(24))
            .child(WidgetNode::label(format!("Signed in as {}", user)).height(24.0))
            .child(WidgetNode::spacer()))
    })
}

fn settings_panel() -> PanelSpec {
    let options = PanelOptions::default() | PanelOptions::CLOSABLE | PanelOptions::MINIMIZABLE;
    PanelSpec::new("settings").title("Settings").origin(300.0, 20.0).size(200.0, 150.0).options(options).declare(
        |view| {
            let quality = match view.selected("quality") {
                Some(2) => "high",
                _ => "low",
            };
            Ok(LayoutContainer::vertical()
                .child(WidgetNode::radio("quality", 1, "Low").selected().height(24.0))
                .child(WidgetNode::radio("quality", 2, "High").height(24.0))
                .child(WidgetNode::label(format!("Quality: {}", quality)).height(24.0))
                .child(WidgetNode::spacer()))
        },
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    log::info!("Starting panel demo");

    let config = DemoConfig::load_or_default("panel_demo.toml")?;
    let mut context = UIContext::with_config(config.ui.clone());
    context.register_panel(login_panel())?;
    context.register_panel(settings_panel())?;
    context.event_system_mut().register_handler(
        InteractionKind::Clicked,
        Box::new(|event: &Interaction| {
            log::info!("Clicked {:?} in '{}'", event.key(), event.panel());
            false
        }),
    );

    // Producer thread sends each frame's batch when asked, then acknowledges
    let sender = context.input_sender();
    let (tick_tx, tick_rx) = mpsc::channel::<usize>();
    let (ack_tx, ack_rx) = mpsc::channel::<()>();
    let producer = thread::spawn(move || {
        let script = script();
        for frame in tick_rx {
            if let Some(batch) = script.get(frame) {
                sender.send_batch(batch.iter().cloned());
            }
            if ack_tx.send(()).is_err() {
                break;
            }
        }
    });

    let mut backend = LogBackend::default();
    for frame in 0..config.frames {
        if frame == config.hot_swap_frame {
            log::info!("Hot-swapping the login panel");
            context.register_panel(welcome_panel())?;
        }
        tick_tx.send(frame)?;
        ack_rx.recv()?;

        match context.run_frame(&mut backend) {
            Ok(output) => {
                for event in &output.interactions {
                    log::info!("Frame {}: {:?}", output.frame, event);
                }
            }
            Err(UIError::DeclarationFailed(failures)) => {
                for failure in &failures {
                    log::error!("{}", failure);
                }
            }
            Err(error) => return Err(error.into()),
        }
        context.dispatch_events();
    }
    drop(tick_tx);
    if producer.join().is_err() {
        log::error!("Input producer panicked");
    }

    println!("user = {}", context.text("login", "user")?);
    println!("remember = {}", context.checked("login", "remember")?);
    println!("quality = {:?}", context.selected("settings", "quality")?);
    println!("settings origin = {:?}", context.panel("settings")?.origin());

    let released = context.dispose()?;
    log::info!("Demo finished, {} widget states released", released);
    Ok(())
}
