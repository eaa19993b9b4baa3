/// A coordinate or extent as written in a shape description.
///
/// Values in `[0, 1]` are fractions of a reference extent (the widget's
/// width, height, or a derived size); anything else is absolute pixels.
/// Lengths stay unresolved until paint time so a shape list survives resizes.
///
/// A consequence: exactly one pixel cannot be written as `1`, which means
/// "the whole extent". Write `1.01` or scale the design instead.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Length(pub f32);

impl Length {
    #[inline]
    pub fn resolve(self, extent: f32) -> f32 {
        fix_value(self.0, extent)
    }
}

impl From<f32> for Length {
    fn from(v: f32) -> Self {
        Length(v)
    }
}

/// Converts `v` to pixels against `max_v`.
#[inline]
pub fn fix_value(v: f32, max_v: f32) -> f32 {
    if (0.0..=1.0).contains(&v) {
        max_v * v
    } else {
        v
    }
}
