//! Flattened output: quad segments, their per-segment index and draw commands.

use crate::curves::QuadraticBezier2;
use crate::primitives::Point2;
use num_traits::Float;
use std::fmt;

/// A quadratic Bézier together with its arc length.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadSegment<F> {
    pub curve: QuadraticBezier2<F>,
    /// Arc length of `curve`, computed once on construction.
    pub length: F,
}

impl<F: Float> QuadSegment<F> {
    pub fn new(curve: QuadraticBezier2<F>) -> Self {
        Self {
            curve,
            length: curve.length(),
        }
    }

    #[inline]
    pub fn start(&self) -> Point2<F> {
        self.curve.p0
    }

    #[inline]
    pub fn control(&self) -> Point2<F> {
        self.curve.p1
    }

    #[inline]
    pub fn end(&self) -> Point2<F> {
        self.curve.p2
    }
}

impl<F: Float> From<QuadraticBezier2<F>> for QuadSegment<F> {
    fn from(curve: QuadraticBezier2<F>) -> Self {
        Self::new(curve)
    }
}

/// A drawing instruction for a renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawCommand<F> {
    MoveTo(Point2<F>),
    QuadTo { ctrl: Point2<F>, to: Point2<F> },
}

impl<F: Float + fmt::Display> fmt::Display for DrawCommand<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCommand::MoveTo(p) => write!(f, "M {} {}", p.x, p.y),
            DrawCommand::QuadTo { ctrl, to } => {
                write!(f, "Q {} {} {} {}", ctrl.x, ctrl.y, to.x, to.y)
            }
        }
    }
}

/// The result of flattening a spline.
///
/// Quads for input segment `i` are `quads[index[i]..index[i + 1]]`.
/// `index` has one entry more than there are segments, with the last entry
/// equal to `quads.len()`; both are empty for an empty spline.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadFlattening<F> {
    pub quads: Vec<QuadSegment<F>>,
    pub index: Vec<usize>,
}

impl<F: Float> QuadFlattening<F> {
    /// An empty result (no quads, no index).
    pub fn empty() -> Self {
        Self {
            quads: Vec::new(),
            index: Vec::new(),
        }
    }

    /// A result holding one input segment made of `curve` alone.
    pub fn single(curve: QuadraticBezier2<F>) -> Self {
        Self {
            quads: vec![QuadSegment::new(curve)],
            index: vec![0, 1],
        }
    }

    /// Starts a result that segments will be appended to.
    pub(crate) fn builder() -> Self {
        Self {
            quads: Vec::new(),
            index: vec![0],
        }
    }

    /// Appends the quads of the next input segment.
    pub(crate) fn push_segment<I>(&mut self, curves: I)
    where
        I: IntoIterator<Item = QuadraticBezier2<F>>,
    {
        self.quads.extend(curves.into_iter().map(QuadSegment::new));
        self.index.push(self.quads.len());
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// Returns the number of input spline segments.
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.index.len().saturating_sub(1)
    }

    /// Returns the quads of input segment `i` (empty if out of range).
    pub fn segment_quads(&self, i: usize) -> &[QuadSegment<F>] {
        match (self.index.get(i), self.index.get(i + 1)) {
            (Some(&start), Some(&end)) => &self.quads[start..end],
            _ => &[],
        }
    }

    /// Returns the combined length of all quads.
    pub fn total_length(&self) -> F {
        self.quads.iter().fold(F::zero(), |acc, q| acc + q.length)
    }

    /// Converts the quads into move-to / quad-to commands.
    ///
    /// A `MoveTo` is only emitted at the start and wherever a quad does not
    /// begin where the previous one ended.
    pub fn draw_commands(&self) -> Vec<DrawCommand<F>> {
        let mut commands = Vec::with_capacity(self.quads.len() + 1);
        let mut pen: Option<Point2<F>> = None;

        for quad in &self.quads {
            if pen != Some(quad.start()) {
                commands.push(DrawCommand::MoveTo(quad.start()));
            }
            commands.push(DrawCommand::QuadTo {
                ctrl: quad.control(),
                to: quad.end(),
            });
            pen = Some(quad.end());
        }

        commands
    }
}

impl<F: Float + fmt::Display> QuadFlattening<F> {
    /// Formats the draw commands as SVG path data.
    pub fn to_svg_path(&self) -> String {
        crate::io::draw_commands_to_svg_path(&self.draw_commands())
    }
}

impl<F: Float> Default for QuadFlattening<F> {
    fn default() -> Self {
        Self::empty()
    }
}
