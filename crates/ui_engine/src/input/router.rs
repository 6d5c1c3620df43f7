//! Input router
//!
//! Pure adapter between an input source and the compose cycle. Producers push
//! [`InputEvent`]s through an [`InputSender`] from any thread; the UI context
//! drains the whole hand-off queue under a single lock once per frame and then
//! replays the events from the router's own queues. The router never interprets
//! event semantics.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::events::{ButtonAction, InputEvent, KeyboardInput, MouseButton};
use crate::foundation::math::Vec2;

type SharedQueue = Arc<Mutex<VecDeque<InputEvent>>>;

fn lock(queue: &SharedQueue) -> MutexGuard<'_, VecDeque<InputEvent>> {
    // A producer that panicked mid-push cannot leave the deque half-written
    queue.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Thread-safe handle for feeding events into an [`InputRouter`]
#[derive(Debug, Clone)]
pub struct InputSender {
    queue: SharedQueue,
}

impl InputSender {
    /// Queue one event; arrival order is preserved
    pub fn send(&self, event: InputEvent) {
        lock(&self.queue).push_back(event);
    }

    /// Queue several events under one lock so they land in the same frame
    pub fn send_batch<I>(&self, events: I)
    where
        I: IntoIterator<Item = InputEvent>,
    {
        lock(&self.queue).extend(events);
    }
}

/// Input router with a per-frame replay queue
#[derive(Debug)]
pub struct InputRouter {
    shared: SharedQueue,
    buttons: VecDeque<(MouseButton, ButtonAction)>,
    keyboard: VecDeque<KeyboardInput>,
    scroll: Vec2,
    cursor: Vec2,
}

impl InputRouter {
    /// Create a router with an empty queue and the cursor at the origin
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Mutex::new(VecDeque::new())),
            buttons: VecDeque::new(),
            keyboard: VecDeque::new(),
            scroll: Vec2::zeros(),
            cursor: Vec2::zeros(),
        }
    }

    /// Handle for producers on other threads
    pub fn sender(&self) -> InputSender {
        InputSender { queue: Arc::clone(&self.shared) }
    }

    /// Queue an event from the owning thread
    pub fn push(&self, event: InputEvent) {
        lock(&self.shared).push_back(event);
    }

    /// Move everything queued since the last drain into the replay queues
    ///
    /// The shared queue is swapped out under one lock, so a frame observes
    /// either all or none of a producer's batch. Returns the number of events
    /// drained.
    pub fn drain(&mut self) -> usize {
        let drained = std::mem::take(&mut *lock(&self.shared));
        let count = drained.len();
        for event in drained {
            match event {
                InputEvent::Button { button, action } => self.buttons.push_back((button, action)),
                InputEvent::CursorMove { x, y } => self.cursor = Vec2::new(x, y),
                InputEvent::Scroll { dx, dy } => self.scroll += Vec2::new(dx, dy),
                InputEvent::Text(text) => self.keyboard.push_back(KeyboardInput::Text(text)),
                InputEvent::Key { key, action } => self.keyboard.push_back(KeyboardInput::Key(key, action)),
            }
        }
        if count > 0 {
            log::trace!("Input router drained {} events", count);
        }
        count
    }

    /// Next queued button transition in FIFO order, or `None` when exhausted
    pub fn next_interaction(&mut self) -> Option<(MouseButton, ButtonAction)> {
        self.buttons.pop_front()
    }

    /// Next queued text or key input in FIFO order
    pub fn next_keystroke(&mut self) -> Option<KeyboardInput> {
        self.keyboard.pop_front()
    }

    /// Take the accumulated scroll delta since the last call
    pub fn take_scroll(&mut self) -> Vec2 {
        std::mem::replace(&mut self.scroll, Vec2::zeros())
    }

    /// Latest known absolute pointer position, `(0, 0)` before any movement
    pub fn cursor_position(&self) -> Vec2 {
        self.cursor
    }

    /// Drop everything still queued, including unreplayed events
    pub fn clear(&mut self) {
        lock(&self.shared).clear();
        self.buttons.clear();
        self.keyboard.clear();
        self.scroll = Vec2::zeros();
    }
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new()
    }
}
