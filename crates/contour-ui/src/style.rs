use contour_engine::canvas::VgCanvas;
use contour_engine::paint::Color;

/// Fill applied after a closed shape's geometry.
///
/// `color: None` comes from `fill=none` and disables filling.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FillStyle {
    pub color: Option<Color>,
}

impl Default for FillStyle {
    fn default() -> Self {
        Self { color: Some(Color::white()) }
    }
}

impl FillStyle {
    /// Fills the current path, unless disabled or fully transparent.
    pub fn apply<V: VgCanvas + ?Sized>(&self, vg: &mut V) {
        let Some(color) = self.color else { return };
        if color.is_visible() {
            vg.set_fill_color(color);
            vg.fill();
        }
    }
}

/// Outline applied after a shape's geometry.
///
/// `color: None` comes from `stroke=none` and disables stroking.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StrokeStyle {
    pub color: Option<Color>,
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self { color: Some(Color::black()), width: 1.0 }
    }
}

impl StrokeStyle {
    /// Strokes the current path, unless disabled, transparent or zero-width.
    pub fn apply<V: VgCanvas + ?Sized>(&self, vg: &mut V) {
        let Some(color) = self.color else { return };
        if color.is_visible() && self.width > 0.0 {
            vg.set_stroke_color(color);
            vg.set_line_width(self.width);
            vg.stroke();
        }
    }
}

#[cfg(test)]
mod tests {
    use contour_engine::scene::{DrawCmd, DrawList};

    use super::*;

    #[test]
    fn default_fill_is_white() {
        let mut list = DrawList::new();
        FillStyle::default().apply(&mut list);
        assert_eq!(list.items(), &[DrawCmd::SetFillColor(Color::white()), DrawCmd::Fill]);
    }

    #[test]
    fn fill_none_and_transparent_skip() {
        let mut list = DrawList::new();
        FillStyle { color: None }.apply(&mut list);
        FillStyle { color: Some(Color::transparent()) }.apply(&mut list);
        assert!(list.is_empty());
    }

    #[test]
    fn default_stroke_is_black_one_pixel() {
        let mut list = DrawList::new();
        StrokeStyle::default().apply(&mut list);
        assert_eq!(
            list.items(),
            &[
                DrawCmd::SetStrokeColor(Color::black()),
                DrawCmd::SetLineWidth(1.0),
                DrawCmd::Stroke,
            ]
        );
    }

    #[test]
    fn zero_width_stroke_skips() {
        let mut list = DrawList::new();
        StrokeStyle { color: Some(Color::black()), width: 0.0 }.apply(&mut list);
        StrokeStyle { color: None, width: 3.0 }.apply(&mut list);
        assert!(list.is_empty());
    }
}
