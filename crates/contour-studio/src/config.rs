use anyhow::{bail, Context, Result};
use contour_engine::coords::Vec2;

pub const USAGE: &str = "\
usage: contour-studio [OPTIONS] <DESCRIPTION>

Parses a shape description, paints it into a recording canvas and prints
the canvas calls in order.

options:
  --size WxH      widget size in pixels (default 200x100)
  --origin X,Y    absolute widget position (default 0,0)
  --json          print the calls as a JSON array
  --log FILTER    env_logger filter, e.g. debug or contour_ui=debug
  -h, --help      show this text";

/// Command-line configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct StudioConfig {
    pub description: String,
    pub size: Vec2,
    pub origin: Vec2,
    pub json: bool,
    pub log_filter: Option<String>,
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(StudioConfig),
    Help,
}

impl StudioConfig {
    /// Parses arguments, excluding the program name.
    pub fn from_args<I>(args: I) -> Result<Command>
    where
        I: IntoIterator<Item = String>,
    {
        let mut description = None;
        let mut size = Vec2::new(200.0, 100.0);
        let mut origin = Vec2::zero();
        let mut json = false;
        let mut log_filter = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Command::Help),
                "--json" => json = true,
                "--size" => {
                    let v = args.next().context("--size needs a value like 200x100")?;
                    size = parse_pair(&v, 'x').with_context(|| format!("invalid --size {:?}", v))?;
                }
                "--origin" => {
                    let v = args.next().context("--origin needs a value like 10,20")?;
                    origin = parse_pair(&v, ',').with_context(|| format!("invalid --origin {:?}", v))?;
                }
                "--log" => log_filter = Some(args.next().context("--log needs a filter")?),
                flag if flag.starts_with("--") => bail!("unknown option {}", flag),
                _ => {
                    if description.replace(arg.clone()).is_some() {
                        bail!("more than one description given; quote the whole description");
                    }
                }
            }
        }

        let description = description.context("missing shape description")?;
        if size.x <= 0.0 || size.y <= 0.0 {
            bail!("widget size must be positive, got {}x{}", size.x, size.y);
        }

        Ok(Command::Run(StudioConfig { description, size, origin, json, log_filter }))
    }
}

fn parse_pair(s: &str, sep: char) -> Result<Vec2> {
    let (a, b) = s.split_once(sep).with_context(|| format!("expected two numbers separated by {:?}", sep))?;
    let a = a.trim().parse::<f32>().context("first number")?;
    let b = b.trim().parse::<f32>().context("second number")?;
    Ok(Vec2::new(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Command> {
        StudioConfig::from_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults() {
        let Command::Run(cfg) = args(&["rect()"]).unwrap() else { panic!("expected run") };
        assert_eq!(cfg.description, "rect()");
        assert_eq!(cfg.size, Vec2::new(200.0, 100.0));
        assert_eq!(cfg.origin, Vec2::zero());
        assert!(!cfg.json);
        assert_eq!(cfg.log_filter, None);
    }

    #[test]
    fn all_options() {
        let cmd = args(&["--size", "64x32", "--origin", "5, 6", "--json", "--log", "debug", "circle()"]);
        let Command::Run(cfg) = cmd.unwrap() else { panic!("expected run") };
        assert_eq!(cfg.size, Vec2::new(64.0, 32.0));
        assert_eq!(cfg.origin, Vec2::new(5.0, 6.0));
        assert!(cfg.json);
        assert_eq!(cfg.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn help_wins() {
        assert_eq!(args(&["rect()", "--help"]).unwrap(), Command::Help);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(args(&[]).is_err());
        assert!(args(&["--size", "big", "rect()"]).is_err());
        assert!(args(&["--size", "0x10", "rect()"]).is_err());
        assert!(args(&["--frobnicate", "rect()"]).is_err());
        assert!(args(&["rect()", "circle()"]).is_err());
    }
}
