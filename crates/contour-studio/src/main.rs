mod config;

use anyhow::{Context, Result};
use contour_engine::logging::{init_logging, LoggingConfig};
use contour_engine::scene::{DrawCmd, DrawList};
use contour_ui::prelude::*;
use serde_json::{json, Value};

use config::{Command, StudioConfig, USAGE};

fn main() -> Result<()> {
    let cfg = match StudioConfig::from_args(std::env::args().skip(1))? {
        Command::Help => {
            println!("{USAGE}");
            return Ok(());
        }
        Command::Run(cfg) => cfg,
    };

    let mut logging = LoggingConfig::default();
    if let Some(filter) = &cfg.log_filter {
        logging = logging.with_filter(filter.clone());
    }
    init_logging(logging);

    let list = render(&cfg)?;
    log::info!("{} canvas call(s) for {:?}", list.len(), cfg.description);

    if cfg.json {
        let calls: Vec<Value> = list.items().iter().map(cmd_to_json).collect();
        println!("{}", serde_json::to_string_pretty(&calls)?);
    } else {
        for cmd in list.items() {
            println!("{cmd}");
        }
    }
    Ok(())
}

/// Creates a shape widget through the factory, as a host would, and paints it.
fn render(cfg: &StudioConfig) -> Result<DrawList> {
    let mut factory = WidgetFactory::new();
    register_shape(&mut factory)?;
    log::debug!("render modes: {}", supported_render_modes());

    let bounds = Rect::from_size(cfg.size).translated(cfg.origin);
    let mut widget = factory
        .create(WIDGET_TYPE_SHAPE, bounds)
        .context("shape widget type is not registered")?;
    if let Err(e) = widget.set_prop(PROP_VALUE, &PropValue::from(cfg.description.as_str())) {
        if let PropError::InvalidValue(ShapeError::Parse(pe)) = &e {
            log::error!("\n{}", pe.render(&cfg.description));
        }
        return Err(e).with_context(|| format!("cannot use {:?}", cfg.description));
    }

    let mut list = DrawList::with_origin(cfg.origin);
    widget.paint_self(&mut list);
    Ok(list)
}

fn cmd_to_json(cmd: &DrawCmd) -> Value {
    let args = match cmd {
        DrawCmd::Translate { x, y } | DrawCmd::MoveTo { x, y } | DrawCmd::LineTo { x, y } => {
            json!({ "x": x, "y": y })
        }
        DrawCmd::Scale { sx, sy } => json!({ "sx": sx, "sy": sy }),
        DrawCmd::QuadTo { cx, cy, x, y } => json!({ "cx": cx, "cy": cy, "x": x, "y": y }),
        DrawCmd::BezierTo { c1x, c1y, c2x, c2y, x, y } => {
            json!({ "c1x": c1x, "c1y": c1y, "c2x": c2x, "c2y": c2y, "x": x, "y": y })
        }
        DrawCmd::RoundedRect { x, y, w, h, r } => json!({ "x": x, "y": y, "w": w, "h": h, "r": r }),
        DrawCmd::Arc { cx, cy, r, start, end, ccw } => {
            json!({ "cx": cx, "cy": cy, "r": r, "start": start, "end": end, "ccw": ccw })
        }
        DrawCmd::Ellipse { cx, cy, rx, ry } => json!({ "cx": cx, "cy": cy, "rx": rx, "ry": ry }),
        DrawCmd::SetFillColor(c) | DrawCmd::SetStrokeColor(c) | DrawCmd::SetTextColor(c) => {
            json!({ "color": c.to_string() })
        }
        DrawCmd::SetLineWidth(v) | DrawCmd::SetFontSize(v) => json!({ "value": v }),
        DrawCmd::DrawText { text, rect } => json!({
            "text": text,
            "x": rect.origin.x,
            "y": rect.origin.y,
            "w": rect.width(),
            "h": rect.height(),
        }),
        DrawCmd::Save
        | DrawCmd::Restore
        | DrawCmd::BeginPath
        | DrawCmd::ClosePath
        | DrawCmd::Fill
        | DrawCmd::Stroke => return json!({ "op": cmd.name() }),
    };
    json!({ "op": cmd.name(), "args": args })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(description: &str) -> StudioConfig {
        StudioConfig {
            description: description.to_string(),
            size: Vec2::new(100.0, 50.0),
            origin: Vec2::new(10.0, 20.0),
            json: false,
            log_filter: None,
        }
    }

    #[test]
    fn render_translates_to_origin() {
        let list = render(&cfg("rect()")).unwrap();
        assert_eq!(list.items()[0], DrawCmd::Save);
        assert_eq!(list.items()[1], DrawCmd::Translate { x: 10.0, y: 20.0 });
        assert_eq!(list.items().last(), Some(&DrawCmd::Restore));
    }

    #[test]
    fn render_reports_bad_descriptions() {
        let err = render(&cfg("rect(w=wide)")).unwrap_err();
        assert!(format!("{:#}", err).contains("expects a number"));
    }

    #[test]
    fn json_shapes() {
        assert_eq!(cmd_to_json(&DrawCmd::Fill), json!({ "op": "fill" }));
        assert_eq!(
            cmd_to_json(&DrawCmd::MoveTo { x: 1.0, y: 2.0 }),
            json!({ "op": "move_to", "args": { "x": 1.0, "y": 2.0 } })
        );
        assert_eq!(
            cmd_to_json(&DrawCmd::SetFillColor(Color::white())),
            json!({ "op": "set_fill_color", "args": { "color": "#ffffffff" } })
        );
    }
}
