use contour_engine::canvas::VgCanvas;
use contour_engine::coords::Vec2;

/// On/off run lengths of a dashed line, in pixels.
///
/// `off == 0` means a solid line regardless of `on`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Dash {
    pub on: u32,
    pub off: u32,
}

impl Dash {
    pub const SOLID: Dash = Dash { on: 0, off: 0 };

    #[inline]
    pub const fn new(on: u32, off: u32) -> Self {
        Self { on, off }
    }

    #[inline]
    pub fn is_solid(self) -> bool {
        self.off == 0
    }
}

/// Most dashes a single segment may produce before it is drawn solid instead.
pub const MAX_DASHES: usize = 10_000;

/// Appends a (possibly dashed) segment from `p1` to `p2` to the current path.
///
/// Each dash is its own `move_to`/`line_to` pair. The caller strokes.
/// Direction is taken from the integer-truncated delta, so endpoints closer
/// than one pixel on both axes draw nothing. An axis whose truncated delta
/// is zero stays at `p1`, so sub-pixel drift on it is ignored.
///
/// Dash `k` starts `k * (on + off)` along the line from `p1`; positions are
/// computed, not accumulated, so far-off coordinates still terminate.
pub fn draw_line<V: VgCanvas + ?Sized>(vg: &mut V, p1: Vec2, p2: Vec2, dash: Dash) {
    let dx = (p2.x - p1.x) as i32;
    let dy = (p2.y - p1.y) as i32;

    if dx == 0 && dy == 0 {
        return;
    }

    if dash.is_solid() {
        vg.move_to(p1.x, p1.y);
        vg.line_to(p2.x, p2.y);
        return;
    }

    let (ux, uy) = if dx == 0 {
        (0.0, dy.signum() as f32)
    } else if dy == 0 {
        (dx.signum() as f32, 0.0)
    } else {
        let (fx, fy) = (dx as f32, dy as f32);
        let len = (fx * fx + fy * fy).sqrt();
        (fx / len, fy / len)
    };

    // Distance to travel along the direction, and where the last dash stops.
    let len = (p2.x - p1.x) * ux + (p2.y - p1.y) * uy;
    let end = Vec2::new(
        if dx == 0 { p1.x } else { p2.x },
        if dy == 0 { p1.y } else { p2.y },
    );

    let on = dash.on as f32;
    let period = on + dash.off as f32;
    // A dash starting within a thousandth of a pixel of the end is dropped.
    let count = ((len - 1e-3) / period).ceil().max(0.0);
    if count > MAX_DASHES as f32 {
        log::warn!(
            "dashed line of {} px with period {} needs {} dashes, drawing it solid",
            len, period, count
        );
        vg.move_to(p1.x, p1.y);
        vg.line_to(p2.x, p2.y);
        return;
    }

    let at = |t: f32| Vec2::new(p1.x + ux * t, p1.y + uy * t);
    for k in 0..count as usize {
        let t0 = k as f32 * period;
        let t1 = t0 + on;
        let a = at(t0);
        let b = if t1 >= len { end } else { at(t1) };
        vg.move_to(a.x, a.y);
        vg.line_to(b.x, b.y);
    }
}

#[cfg(test)]
mod tests {
    use contour_engine::scene::{DrawCmd, DrawList};

    use super::*;

    fn run(p1: (f32, f32), p2: (f32, f32), dash: Dash) -> Vec<DrawCmd> {
        let mut list = DrawList::new();
        draw_line(&mut list, Vec2::new(p1.0, p1.1), Vec2::new(p2.0, p2.1), dash);
        list.items().to_vec()
    }

    fn m(x: f32, y: f32) -> DrawCmd { DrawCmd::MoveTo { x, y } }
    fn l(x: f32, y: f32) -> DrawCmd { DrawCmd::LineTo { x, y } }

    #[test]
    fn solid_line_is_one_segment() {
        assert_eq!(run((1.0, 2.0), (30.0, 40.0), Dash::SOLID), vec![m(1.0, 2.0), l(30.0, 40.0)]);
        // `on` alone does not make a dash.
        assert_eq!(run((0.0, 0.0), (9.0, 0.0), Dash::new(3, 0)), vec![m(0.0, 0.0), l(9.0, 0.0)]);
    }

    #[test]
    fn degenerate_segment_draws_nothing() {
        assert!(run((5.0, 5.0), (5.0, 5.0), Dash::SOLID).is_empty());
        assert!(run((5.0, 5.0), (5.5, 5.9), Dash::new(2, 2)).is_empty());
    }

    #[test]
    fn horizontal_dashes() {
        assert_eq!(
            run((0.0, 0.0), (10.0, 0.0), Dash::new(3, 2)),
            vec![m(0.0, 0.0), l(3.0, 0.0), m(5.0, 0.0), l(8.0, 0.0)]
        );
    }

    #[test]
    fn horizontal_right_to_left() {
        assert_eq!(
            run((10.0, 4.0), (0.0, 4.0), Dash::new(3, 2)),
            vec![m(10.0, 4.0), l(7.0, 4.0), m(5.0, 4.0), l(2.0, 4.0)]
        );
    }

    #[test]
    fn vertical_last_dash_is_clamped() {
        assert_eq!(
            run((5.0, 0.0), (5.0, 9.0), Dash::new(4, 2)),
            vec![m(5.0, 0.0), l(5.0, 4.0), m(5.0, 6.0), l(5.0, 9.0)]
        );
    }

    #[test]
    fn vertical_upwards() {
        assert_eq!(
            run((0.0, 10.0), (0.0, 0.0), Dash::new(4, 4)),
            vec![m(0.0, 10.0), l(0.0, 6.0), m(0.0, 2.0), l(0.0, 0.0)]
        );
    }

    #[test]
    fn horizontal_with_subpixel_vertical_drift() {
        let cmds = run((0.0, 0.2), (10.0, 0.7), Dash::new(5, 5));
        assert_eq!(cmds, vec![m(0.0, 0.2), l(5.0, 0.2)]);
    }

    #[test]
    fn diagonal_follows_direction() {
        let cmds = run((0.0, 0.0), (30.0, 40.0), Dash::new(10, 15));
        assert_eq!(cmds.len(), 4);
        let close = |cmd: &DrawCmd, ex: f32, ey: f32| match cmd {
            DrawCmd::MoveTo { x, y } | DrawCmd::LineTo { x, y } => {
                (x - ex).abs() < 1e-3 && (y - ey).abs() < 1e-3
            }
            _ => false,
        };
        assert!(close(&cmds[0], 0.0, 0.0));
        assert!(close(&cmds[1], 6.0, 8.0));
        assert!(close(&cmds[2], 15.0, 20.0));
        assert!(close(&cmds[3], 21.0, 28.0));
    }

    #[test]
    fn zero_on_run_still_terminates() {
        let cmds = run((0.0, 0.0), (6.0, 0.0), Dash::new(0, 2));
        assert_eq!(cmds, vec![m(0.0, 0.0), l(0.0, 0.0), m(2.0, 0.0), l(2.0, 0.0), m(4.0, 0.0), l(4.0, 0.0)]);
    }

    #[test]
    fn positions_hold_beyond_f32_integer_range() {
        // Past 2^24 a 1 px step no longer changes an f32, so dashes are placed
        // from their index rather than by stepping.
        let cmds = run((20_000_000.0, 0.0), (20_000_040.0, 0.0), Dash::new(4, 4));
        assert_eq!(cmds.len(), 10);
        assert_eq!(cmds[0], m(20_000_000.0, 0.0));
        assert_eq!(cmds[8], m(20_000_032.0, 0.0));
        assert_eq!(cmds[9], l(20_000_036.0, 0.0));
    }

    #[test]
    fn too_many_dashes_draws_solid() {
        let cmds = run((1e8, 5.0), (3e8, 5.0), Dash::new(1, 1));
        assert_eq!(cmds, vec![m(1e8, 5.0), l(3e8, 5.0)]);
    }

    #[test]
    fn dash_count_at_the_cap_is_kept() {
        let len = (MAX_DASHES * 2) as f32;
        let cmds = run((0.0, 0.0), (len, 0.0), Dash::new(1, 1));
        assert_eq!(cmds.len(), MAX_DASHES * 2);
        assert_eq!(cmds.last(), Some(&l(len - 1.0, 0.0)));
    }
}
