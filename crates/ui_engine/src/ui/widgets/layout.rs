//! Layout containers and the flow sizing algorithm
//!
//! A container lays its children out along one axis. Each child's extent on
//! that axis comes from its expand policy:
//!
//! 1. `Fixed` children take their declared extent.
//! 2. `Ratio` children take a fraction of what remains after fixed children.
//! 3. `Dynamic` children split whatever is left evenly.
//!
//! With no dynamic children the leftover space stays unallocated as a
//! trailing gap. The cross axis uses the container's extent uniformly.
//!
//! Malformed sizing input never aborts a frame: it is clamped to the nearest
//! valid value and reported as a [`LayoutWarning`].

use super::core::SizeHints;
use super::WidgetNode;
use crate::foundation::math::Rect;

/// Flow direction of a container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Children are placed left to right; extents are widths
    Horizontal,
    /// Children are placed top to bottom; extents are heights
    Vertical,
}

/// Rule determining a child's extent along its container's flow axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExpandPolicy {
    /// Equal share of the space left after fixed and ratio children
    Dynamic,
    /// Fraction in `(0, 1]` of the space remaining after fixed children
    Ratio(f32),
    /// Explicit extent in pixels
    Fixed(f32),
}

/// Sizing input that had to be clamped
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutWarning {
    /// Available extent was negative or not finite; treated as zero
    InvalidAvailable(f32),
    /// Fixed extent was negative or not finite; treated as zero
    InvalidFixed(f32),
    /// Ratio was not finite or outside `(0, 1]`; clamped into range
    InvalidRatio(f32),
    /// Ratios among siblings summed past 1.0; scaled down to sum to 1.0
    RatioOverflow(f32),
    /// Fixed extents exceed the available extent; they are scaled down to fit and other children get nothing
    FixedOverflow {
        /// Sum of fixed extents
        fixed: f32,
        /// Available extent
        available: f32,
    },
}

/// Outcome of resolving one container's extents
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutReport {
    /// Space left as a trailing gap (only when there are no dynamic children)
    pub unallocated: f32,
    /// Clamped inputs, in the order they were found
    pub warnings: Vec<LayoutWarning>,
}

fn sanitize_extent(value: f32) -> Option<f32> {
    (value.is_finite() && value >= 0.0).then_some(value)
}

/// Resolve every child's extent along the flow axis
///
/// Extents are appended to `out` in child order so callers can reuse one
/// scratch buffer for a whole tree walk.
pub fn resolve_extents(available: f32, policies: &[ExpandPolicy], out: &mut Vec<f32>) -> LayoutReport {
    let mut report = LayoutReport::default();
    if policies.is_empty() {
        return report;
    }

    let available = sanitize_extent(available).unwrap_or_else(|| {
        report.warnings.push(LayoutWarning::InvalidAvailable(available));
        0.0
    });

    // Pass 1: fixed extents and ratio weights
    let mut fixed_sum = 0.0;
    let mut ratio_sum = 0.0;
    let mut dynamic_count = 0usize;
    for policy in policies {
        match *policy {
            ExpandPolicy::Fixed(extent) => {
                fixed_sum += sanitize_extent(extent).unwrap_or_else(|| {
                    report.warnings.push(LayoutWarning::InvalidFixed(extent));
                    0.0
                });
            }
            ExpandPolicy::Ratio(ratio) => ratio_sum += clamp_ratio(ratio, &mut report),
            ExpandPolicy::Dynamic => dynamic_count += 1,
        }
    }

    // Fixed children shrink proportionally so they never exceed the container
    let fixed_scale = if fixed_sum > available {
        report.warnings.push(LayoutWarning::FixedOverflow { fixed: fixed_sum, available });
        available / fixed_sum
    } else {
        1.0
    };
    let remaining = (available - fixed_sum * fixed_scale).max(0.0);

    let ratio_scale = if ratio_sum > 1.0 {
        report.warnings.push(LayoutWarning::RatioOverflow(ratio_sum));
        1.0 / ratio_sum
    } else {
        1.0
    };
    let ratio_total = (ratio_sum * ratio_scale * remaining).min(remaining);
    let dynamic_pool = (remaining - ratio_total).max(0.0);
    let dynamic_share = if dynamic_count == 0 {
        report.unallocated = dynamic_pool;
        0.0
    } else {
        dynamic_pool / dynamic_count as f32
    };

    // Pass 2: emit extents in declaration order
    let mut scratch = LayoutReport::default();
    for policy in policies {
        let extent = match *policy {
            ExpandPolicy::Fixed(extent) => sanitize_extent(extent).unwrap_or(0.0) * fixed_scale,
            ExpandPolicy::Ratio(ratio) => clamp_ratio(ratio, &mut scratch) * ratio_scale * remaining,
            ExpandPolicy::Dynamic => dynamic_share,
        };
        out.push(extent);
    }

    for warning in &report.warnings {
        log::warn!("Clamped layout input: {:?}", warning);
    }
    report
}

fn clamp_ratio(ratio: f32, report: &mut LayoutReport) -> f32 {
    if ratio.is_nan() {
        report.warnings.push(LayoutWarning::InvalidRatio(ratio));
        return 0.0;
    }
    if ratio <= 0.0 || ratio > 1.0 {
        report.warnings.push(LayoutWarning::InvalidRatio(ratio));
    }
    ratio.clamp(0.0, 1.0)
}

/// Child of a layout container
#[derive(Debug, Clone)]
pub enum LayoutChild {
    /// Atomic widget
    Widget(WidgetNode),
    /// Nested container
    Container(LayoutContainer),
}

impl LayoutChild {
    /// Sizing hints of the child
    pub fn hints(&self) -> &SizeHints {
        match self {
            Self::Widget(widget) => widget.hints(),
            Self::Container(container) => &container.hints,
        }
    }
}

impl From<WidgetNode> for LayoutChild {
    fn from(widget: WidgetNode) -> Self {
        Self::Widget(widget)
    }
}

impl From<LayoutContainer> for LayoutChild {
    fn from(container: LayoutContainer) -> Self {
        Self::Container(container)
    }
}

/// Horizontal or vertical flow of ordered children
///
/// Rebuilt by a panel's declaration every frame. When nested, the container
/// is sized by its parent like any widget, using its own [`SizeHints`].
#[derive(Debug, Clone)]
pub struct LayoutContainer {
    /// Flow direction
    pub orientation: Orientation,
    /// Own sizing hints when nested, and cross-axis extent for children
    pub hints: SizeHints,
    /// Ordered children
    pub children: Vec<LayoutChild>,
}

impl LayoutContainer {
    /// Create an empty container
    pub fn new(orientation: Orientation) -> Self {
        Self { orientation, hints: SizeHints::default(), children: Vec::new() }
    }

    /// Left-to-right flow
    pub fn horizontal() -> Self {
        Self::new(Orientation::Horizontal)
    }

    /// Top-to-bottom flow
    pub fn vertical() -> Self {
        Self::new(Orientation::Vertical)
    }

    /// Horizontal flow with a fixed row height
    pub fn row(height: f32) -> Self {
        Self::horizontal().height(height)
    }

    /// Declare an explicit width
    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.hints.width = Some(width);
        self
    }

    /// Declare an explicit height
    #[must_use]
    pub fn height(mut self, height: f32) -> Self {
        self.hints.height = Some(height);
        self
    }

    /// Declare a ratio of the parent's remaining space
    #[must_use]
    pub fn ratio(mut self, ratio: f32) -> Self {
        self.hints.ratio = Some(ratio);
        self
    }

    /// Append a child
    #[must_use]
    pub fn child(mut self, child: impl Into<LayoutChild>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several children
    #[must_use]
    pub fn children<I, C>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<LayoutChild>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Append a child in place
    pub fn push(&mut self, child: impl Into<LayoutChild>) {
        self.children.push(child.into());
    }

    /// Number of direct children
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Container has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Expand policies of the direct children along this container's axis
    pub fn policies(&self) -> impl Iterator<Item = ExpandPolicy> + '_ {
        self.children.iter().map(move |child| child.hints().policy(self.orientation))
    }

    /// Resolve the rectangle of every direct child within `bounds`
    ///
    /// Rectangles are appended to `out`; extents are resolved through the
    /// shared `scratch` buffers, which are restored to their original length.
    pub fn resolve_children(
        &self,
        bounds: Rect,
        policies: &mut Vec<ExpandPolicy>,
        extents: &mut Vec<f32>,
        out: &mut Vec<Rect>,
    ) -> LayoutReport {
        let policy_base = policies.len();
        let extent_base = extents.len();
        policies.extend(self.policies());

        let available = match self.orientation {
            Orientation::Horizontal => bounds.width,
            Orientation::Vertical => bounds.height,
        };
        let report = resolve_extents(available, &policies[policy_base..], extents);

        let mut cursor = 0.0;
        for extent in &extents[extent_base..] {
            let rect = match self.orientation {
                Orientation::Horizontal => Rect::new(bounds.x + cursor, bounds.y, *extent, bounds.height),
                Orientation::Vertical => Rect::new(bounds.x, bounds.y + cursor, bounds.width, *extent),
            };
            out.push(rect);
            cursor += extent;
        }

        policies.truncate(policy_base);
        extents.truncate(extent_base);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn resolve(available: f32, policies: &[ExpandPolicy]) -> (Vec<f32>, LayoutReport) {
        let mut out = Vec::new();
        let report = resolve_extents(available, policies, &mut out);
        (out, report)
    }

    #[test]
    fn test_fixed_ratio_dynamic_scenario() {
        let (extents, report) = resolve(
            300.0,
            &[ExpandPolicy::Fixed(100.0), ExpandPolicy::Ratio(0.5), ExpandPolicy::Dynamic],
        );
        assert_relative_eq!(extents[0], 100.0);
        assert_relative_eq!(extents[1], 100.0);
        assert_relative_eq!(extents[2], 100.0);
        assert!(report.warnings.is_empty());
        assert_eq!(report.unallocated, 0.0);
    }

    #[test]
    fn test_two_dynamic_split_evenly() {
        let (extents, _) = resolve(200.0, &[ExpandPolicy::Dynamic, ExpandPolicy::Dynamic]);
        assert_eq!(extents, vec![100.0, 100.0]);
    }

    #[test]
    fn test_no_dynamic_leaves_gap() {
        let (extents, report) = resolve(400.0, &[ExpandPolicy::Fixed(100.0), ExpandPolicy::Ratio(0.25)]);
        assert_relative_eq!(extents[1], 75.0);
        assert_relative_eq!(report.unallocated, 225.0);
        let total: f32 = extents.iter().sum();
        assert_relative_eq!(total + report.unallocated, 400.0);
    }

    #[test]
    fn test_sum_equals_available_with_dynamic_children() {
        let cases: &[&[ExpandPolicy]] = &[
            &[ExpandPolicy::Dynamic],
            &[ExpandPolicy::Fixed(30.0), ExpandPolicy::Dynamic, ExpandPolicy::Dynamic],
            &[ExpandPolicy::Ratio(0.3), ExpandPolicy::Ratio(0.3), ExpandPolicy::Dynamic],
            &[ExpandPolicy::Fixed(10.0), ExpandPolicy::Ratio(0.9), ExpandPolicy::Fixed(5.0), ExpandPolicy::Dynamic],
        ];
        for available in [0.0, 57.0, 300.0, 1234.5] {
            for policies in cases {
                let (extents, _) = resolve(available, policies);
                let total: f32 = extents.iter().sum();
                assert_relative_eq!(total, available, epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn test_ratio_proportional_to_remaining() {
        let (extents, _) = resolve(
            500.0,
            &[ExpandPolicy::Fixed(100.0), ExpandPolicy::Ratio(0.2), ExpandPolicy::Ratio(0.6)],
        );
        assert_relative_eq!(extents[1], 80.0);
        assert_relative_eq!(extents[2], 240.0);
        assert_relative_eq!(extents[2] / extents[1], 3.0);
    }

    #[test]
    fn test_ratio_overflow_never_negative() {
        let (extents, report) = resolve(
            200.0,
            &[ExpandPolicy::Ratio(0.8), ExpandPolicy::Ratio(0.7), ExpandPolicy::Dynamic],
        );
        assert!(extents.iter().all(|extent| *extent >= 0.0));
        assert_relative_eq!(extents[2], 0.0);
        assert_relative_eq!(extents[0] + extents[1], 200.0, epsilon = 1e-3);
        assert!(report.warnings.iter().any(|w| matches!(w, LayoutWarning::RatioOverflow(_))));
    }

    #[test]
    fn test_zero_available_gives_zero_extents() {
        let (extents, _) = resolve(
            0.0,
            &[ExpandPolicy::Dynamic, ExpandPolicy::Ratio(0.5), ExpandPolicy::Dynamic],
        );
        assert_eq!(extents, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_zero_children_is_noop() {
        let (extents, report) = resolve(100.0, &[]);
        assert!(extents.is_empty());
        assert_eq!(report, LayoutReport::default());
    }

    #[test]
    fn test_malformed_inputs_are_clamped() {
        let (extents, report) = resolve(
            100.0,
            &[ExpandPolicy::Fixed(-20.0), ExpandPolicy::Ratio(f32::NAN), ExpandPolicy::Dynamic],
        );
        assert_eq!(extents, vec![0.0, 0.0, 100.0]);
        assert_eq!(report.warnings.len(), 2);

        let (extents, report) = resolve(f32::NAN, &[ExpandPolicy::Dynamic]);
        assert_eq!(extents, vec![0.0]);
        assert!(matches!(report.warnings[0], LayoutWarning::InvalidAvailable(_)));
    }

    #[test]
    fn test_fixed_overflow_shrinks_to_fit() {
        let (extents, report) = resolve(
            100.0,
            &[ExpandPolicy::Fixed(80.0), ExpandPolicy::Fixed(20.0), ExpandPolicy::Fixed(60.0), ExpandPolicy::Dynamic],
        );
        assert_relative_eq!(extents[0], 50.0);
        assert_relative_eq!(extents[1], 12.5);
        assert_relative_eq!(extents[2], 37.5);
        assert_relative_eq!(extents[3], 0.0);
        assert!(matches!(report.warnings[0], LayoutWarning::FixedOverflow { .. }));
    }

    #[test]
    fn test_zero_available_zeroes_fixed_children() {
        let (extents, _) = resolve(0.0, &[ExpandPolicy::Fixed(50.0), ExpandPolicy::Dynamic]);
        assert_eq!(extents, vec![0.0, 0.0]);
    }

    #[test]
    fn test_resolve_children_places_rects() {
        let row = LayoutContainer::row(30.0)
            .child(WidgetNode::label("a").width(100.0))
            .child(WidgetNode::button("b").ratio(0.5))
            .child(WidgetNode::button("c"));
        let mut policies = Vec::new();
        let mut extents = Vec::new();
        let mut rects = Vec::new();
        row.resolve_children(Rect::new(10.0, 20.0, 300.0, 30.0), &mut policies, &mut extents, &mut rects);

        assert_eq!(rects[0], Rect::new(10.0, 20.0, 100.0, 30.0));
        assert_eq!(rects[1], Rect::new(110.0, 20.0, 100.0, 30.0));
        assert_eq!(rects[2], Rect::new(210.0, 20.0, 100.0, 30.0));
        assert!(policies.is_empty());
        assert!(extents.is_empty());
    }

    #[test]
    fn test_vertical_uses_heights() {
        let column = LayoutContainer::vertical()
            .child(LayoutContainer::row(40.0))
            .child(WidgetNode::label("fill"));
        let mut rects = Vec::new();
        column.resolve_children(Rect::new(0.0, 0.0, 200.0, 100.0), &mut Vec::new(), &mut Vec::new(), &mut rects);
        assert_eq!(rects[0], Rect::new(0.0, 0.0, 200.0, 40.0));
        assert_eq!(rects[1], Rect::new(0.0, 40.0, 200.0, 60.0));
    }
}
