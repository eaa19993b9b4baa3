use contour_engine::paint::Color;
use contour_lang::Call;

use crate::dash::Dash;
use crate::error::ShapeError;
use crate::style::{FillStyle, StrokeStyle};
use crate::units::Length;

/// Sentinel that disables a colour (`fill=none`, `stroke=none`).
const NONE: &str = "none";

/// Typed, defaulting view over a parsed call's arguments.
pub(crate) struct Args<'a> {
    call: &'a Call,
}

impl<'a> Args<'a> {
    pub(crate) fn new(call: &'a Call) -> Self {
        Self { call }
    }

    fn invalid_number(&self, key: &str, value: &str) -> ShapeError {
        ShapeError::InvalidNumber {
            shape: self.call.name.clone(),
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    /// Logs arguments the shape does not read. They are ignored, not rejected.
    pub(crate) fn warn_unknown(&self, known: &[&str]) {
        for arg in &self.call.args {
            if !known.contains(&arg.key.as_str()) {
                log::debug!("{}(): ignoring unknown argument {:?}", self.call.name, arg.key);
            }
        }
    }

    pub(crate) fn number(&self, key: &str, default: f32) -> Result<f32, ShapeError> {
        match self.call.arg(key) {
            None => Ok(default),
            Some(raw) => match raw.trim().parse::<f32>() {
                Ok(v) if v.is_finite() => Ok(v),
                _ => Err(self.invalid_number(key, raw)),
            },
        }
    }

    pub(crate) fn length(&self, key: &str, default: f32) -> Result<Length, ShapeError> {
        self.number(key, default).map(Length::from)
    }

    /// Non-negative count; fractional parts are dropped.
    pub(crate) fn count(&self, key: &str, default: u32) -> Result<u32, ShapeError> {
        let Some(raw) = self.call.arg(key) else { return Ok(default) };
        match raw.trim().parse::<f32>() {
            Ok(v) if v.is_finite() && v >= 0.0 => Ok(v as u32),
            _ => Err(self.invalid_number(key, raw)),
        }
    }

    /// `Ok(None)` when the value is `none`.
    pub(crate) fn color(&self, key: &str, default: Color) -> Result<Option<Color>, ShapeError> {
        match self.call.arg(key) {
            None => Ok(Some(default)),
            Some(NONE) => Ok(None),
            Some(raw) => Color::parse(raw).map(Some).ok_or_else(|| ShapeError::InvalidColor {
                shape: self.call.name.clone(),
                key: key.to_string(),
                value: raw.to_string(),
            }),
        }
    }

    pub(crate) fn text(&self, key: &str) -> Option<&'a str> {
        self.call.arg(key)
    }

    pub(crate) fn dash(&self) -> Result<Dash, ShapeError> {
        Ok(Dash::new(self.count("on", 0)?, self.count("off", 0)?))
    }

    pub(crate) fn fill(&self) -> Result<FillStyle, ShapeError> {
        Ok(FillStyle { color: self.color("fill", Color::white())? })
    }

    pub(crate) fn stroke(&self) -> Result<StrokeStyle, ShapeError> {
        Ok(StrokeStyle {
            color: self.color("stroke", Color::black())?,
            width: self.number("lw", 1.0)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use contour_lang::parse_call;

    use super::*;

    #[test]
    fn missing_keys_use_defaults() {
        let call = parse_call("rect()").unwrap();
        let args = Args::new(&call);
        assert_eq!(args.number("x", 0.5).unwrap(), 0.5);
        assert_eq!(args.count("on", 3).unwrap(), 3);
        assert_eq!(args.fill().unwrap(), FillStyle::default());
        assert_eq!(args.stroke().unwrap(), StrokeStyle::default());
    }

    #[test]
    fn none_disables_colour() {
        let call = parse_call("rect(fill=none, stroke=none)").unwrap();
        let args = Args::new(&call);
        assert_eq!(args.fill().unwrap().color, None);
        assert_eq!(args.stroke().unwrap().color, None);
    }

    #[test]
    fn counts_truncate_fractions() {
        let call = parse_call("hline(on=2.7, off=4)").unwrap();
        assert_eq!(Args::new(&call).dash().unwrap(), Dash::new(2, 4));
    }

    #[test]
    fn negative_count_is_rejected() {
        let call = parse_call("hline(on=-1)").unwrap();
        assert!(matches!(
            Args::new(&call).dash(),
            Err(ShapeError::InvalidNumber { ref key, .. }) if key == "on"
        ));
    }

    #[test]
    fn bad_number_names_shape_and_key() {
        let call = parse_call("circle(r=big)").unwrap();
        let err = Args::new(&call).number("r", 0.5).unwrap_err();
        assert_eq!(
            err,
            ShapeError::InvalidNumber { shape: "circle".into(), key: "r".into(), value: "big".into() }
        );
    }

    #[test]
    fn bad_colour_is_rejected() {
        let call = parse_call("rect(fill=#12)").unwrap();
        assert!(matches!(Args::new(&call).fill(), Err(ShapeError::InvalidColor { .. })));
    }
}
