//! Panels - named, independently positioned top-level containers
//!
//! A panel owns its geometry and chrome flags across frames. Its content is
//! re-declared every frame by a [`Declaration`] that receives a read-only
//! [`PanelView`] and returns the root [`LayoutContainer`].

use bitflags::bitflags;

use super::error::DeclarationError;
use super::identity::PanelId;
use super::view::PanelView;
use super::widgets::LayoutContainer;
use crate::core::config::StyleMetrics;
use crate::foundation::math::{Rect, Vec2};

bitflags! {
    /// Chrome and behavior flags of a panel
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PanelOptions: u32 {
        /// Title bar can be dragged to move the panel
        const MOVABLE = 1 << 0;
        /// Bottom-right grip resizes the panel
        const RESIZABLE = 1 << 1;
        /// Title bar has a minimize box
        const MINIMIZABLE = 1 << 2;
        /// Content taller than the panel scrolls with the wheel
        const SCROLLABLE = 1 << 3;
        /// Title bar has a close box
        const CLOSABLE = 1 << 4;
        /// Panel draws a title bar
        const TITLE = 1 << 5;
        /// Panel draws a frame border
        const BORDER = 1 << 6;
    }
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self::TITLE | Self::BORDER | Self::MOVABLE
    }
}

/// Per-frame content procedure of a panel
///
/// Invoked exactly once per frame while the panel is open. Returning an error
/// aborts only this panel's composition for the frame.
pub type Declaration = Box<dyn FnMut(&PanelView<'_>) -> Result<LayoutContainer, DeclarationError>>;

/// Registration request for a panel
///
/// ```
/// use ui_engine::ui::{PanelOptions, PanelSpec};
/// use ui_engine::ui::widgets::{LayoutContainer, WidgetNode};
///
/// let spec = PanelSpec::new("settings")
///     .title("Settings")
///     .origin(10.0, 10.0)
///     .size(240.0, 160.0)
///     .options(PanelOptions::default() | PanelOptions::RESIZABLE)
///     .declare(|_view| Ok(LayoutContainer::vertical().child(WidgetNode::label("Volume"))));
/// assert_eq!(spec.name(), "settings");
/// ```
pub struct PanelSpec {
    name: String,
    title: Option<String>,
    origin: Vec2,
    size: Vec2,
    options: PanelOptions,
    declaration: Declaration,
}

impl PanelSpec {
    /// Start a spec with an empty declaration at the origin
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: None,
            origin: Vec2::zeros(),
            size: Vec2::new(200.0, 150.0),
            options: PanelOptions::default(),
            declaration: Box::new(|_| Ok(LayoutContainer::vertical())),
        }
    }

    /// Title bar text (defaults to the name)
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Initial top-left corner
    #[must_use]
    pub fn origin(mut self, x: f32, y: f32) -> Self {
        self.origin = Vec2::new(x, y);
        self
    }

    /// Initial size
    #[must_use]
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.size = Vec2::new(width, height);
        self
    }

    /// Chrome and behavior flags
    #[must_use]
    pub fn options(mut self, options: PanelOptions) -> Self {
        self.options = options;
        self
    }

    /// Content procedure
    #[must_use]
    pub fn declare<F>(mut self, declaration: F) -> Self
    where
        F: FnMut(&PanelView<'_>) -> Result<LayoutContainer, DeclarationError> + 'static,
    {
        self.declaration = Box::new(declaration);
        self
    }

    /// Panel name
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A registered panel
pub struct Panel {
    pub(crate) name: String,
    pub(crate) id: PanelId,
    pub(crate) title: String,
    pub(crate) origin: Vec2,
    pub(crate) size: Vec2,
    pub(crate) options: PanelOptions,
    pub(crate) open: bool,
    pub(crate) minimized: bool,
    pub(crate) scroll_offset: f32,
    pub(crate) declaration: Declaration,
}

impl Panel {
    pub(crate) fn from_spec(spec: PanelSpec) -> Self {
        let PanelSpec { name, title, origin, size, options, declaration } = spec;
        Self {
            id: PanelId::from_name(&name),
            title: title.unwrap_or_else(|| name.clone()),
            name,
            origin,
            size,
            options,
            open: true,
            minimized: false,
            scroll_offset: 0.0,
            declaration,
        }
    }

    /// Swap in a new registration, keeping geometry and runtime flags
    pub(crate) fn replace(&mut self, spec: PanelSpec) {
        self.declaration = spec.declaration;
        self.options = spec.options;
        if let Some(title) = spec.title {
            self.title = title;
        }
    }

    /// Panel name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stable identity derived from the name
    pub fn id(&self) -> PanelId {
        self.id
    }

    /// Title bar text
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Top-left corner in screen space
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Current size
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Chrome and behavior flags
    pub fn options(&self) -> PanelOptions {
        self.options
    }

    /// Panel is shown
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Panel is collapsed to its title bar
    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    /// Vertical content scroll in pixels
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Screen rectangle occupied by the panel (title bar only when minimized)
    pub fn bounds(&self, style: &StyleMetrics) -> Rect {
        let height = if self.minimized && self.options.contains(PanelOptions::TITLE) {
            style.title_bar_height.min(self.size.y)
        } else {
            self.size.y
        };
        Rect::new(self.origin.x, self.origin.y, self.size.x, height)
    }

    /// Title bar strip, empty when the panel has no title
    pub fn title_bar(&self, style: &StyleMetrics) -> Rect {
        if self.options.contains(PanelOptions::TITLE) {
            self.bounds(style).split_top(style.title_bar_height).0
        } else {
            Rect::new(self.origin.x, self.origin.y, 0.0, 0.0)
        }
    }

    /// Area available to the content tree
    pub fn body(&self, style: &StyleMetrics) -> Rect {
        let frame = Rect::new(self.origin.x, self.origin.y, self.size.x, self.size.y);
        let rest = if self.options.contains(PanelOptions::TITLE) {
            frame.split_top(style.title_bar_height).1
        } else {
            frame
        };
        rest.shrink(style.panel_padding)
    }

    /// Square title bar box `slot` places from the right (0 = rightmost)
    pub(crate) fn title_box(&self, style: &StyleMetrics, slot: usize) -> Rect {
        let bar = self.title_bar(style);
        let side = (bar.height - style.panel_padding * 2.0).max(0.0);
        let step = side + style.panel_padding;
        let x = bar.right() - style.panel_padding - side - step * slot as f32;
        Rect::new(x, bar.y + style.panel_padding, side, side)
    }

    /// Close box, if the panel has one
    pub fn close_box(&self, style: &StyleMetrics) -> Option<Rect> {
        self.has_title_box(PanelOptions::CLOSABLE).then(|| self.title_box(style, 0))
    }

    /// Minimize box, if the panel has one
    pub fn minimize_box(&self, style: &StyleMetrics) -> Option<Rect> {
        let slot = usize::from(self.options.contains(PanelOptions::CLOSABLE));
        self.has_title_box(PanelOptions::MINIMIZABLE).then(|| self.title_box(style, slot))
    }

    fn has_title_box(&self, flag: PanelOptions) -> bool {
        self.options.contains(flag | PanelOptions::TITLE)
    }

    /// Resize grip at the bottom-right corner, if resizable and expanded
    pub fn resize_grip(&self, style: &StyleMetrics) -> Option<Rect> {
        if !self.options.contains(PanelOptions::RESIZABLE) || self.minimized {
            return None;
        }
        let side = style.resize_grip.min(self.size.x).min(self.size.y);
        Some(Rect::new(
            self.origin.x + self.size.x - side,
            self.origin.y + self.size.y - side,
            side,
            side,
        ))
    }

    /// Set the size, clamped to the configured minimum
    pub(crate) fn set_size(&mut self, size: Vec2, style: &StyleMetrics) {
        let (min_width, min_height) = style.min_panel_size;
        self.size = Vec2::new(size.x.max(min_width), size.y.max(min_height));
    }
}

impl std::fmt::Debug for Panel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Panel")
            .field("name", &self.name)
            .field("origin", &self.origin)
            .field("size", &self.size)
            .field("options", &self.options)
            .field("open", &self.open)
            .field("minimized", &self.minimized)
            .finish_non_exhaustive()
    }
}
