use sclock::core::{DisplayMode, LayoutState};
use sclock::types::{CenterPoint, ColorIndex, Viewport};

#[test]
fn recompute_twice_yields_same_center() {
    let mut layout = LayoutState::default();
    for (w, h) in [(80, 24), (81, 25), (1, 1), (0, 0), (300, 100)] {
        let first = layout.recompute(Viewport::new(w, h));
        let second = layout.recompute(Viewport::new(w, h));
        assert_eq!(first, second);
        assert_eq!(first, CenterPoint::new((h / 2) as i32, (w / 2) as i32));
    }
}

#[test]
fn resize_80x24_to_120x40_moves_center() {
    let mut layout = LayoutState::new(Viewport::new(80, 24));
    assert_eq!(layout.center(), CenterPoint::new(12, 40));
    assert_eq!(layout.recompute(Viewport::new(120, 40)), CenterPoint::new(20, 60));
    assert_eq!(layout.center(), CenterPoint::new(20, 60));
}

#[test]
fn color_cycle_law() {
    let one = ColorIndex::new(1).unwrap();
    assert_eq!(one.next().next().next().next(), one);

    for start in 1..=4 {
        let c = ColorIndex::new(start).unwrap();
        assert_eq!(c.next().next().next().next(), c);
        assert_ne!(c.next(), c);
    }
}

#[test]
fn display_mode_is_independent_per_field() {
    let mut mode = DisplayMode::default();
    mode.cycle_color();
    mode.toggle_date();
    assert_eq!(mode.color.get(), 2);
    assert!(!mode.date_visible);
    mode.cycle_color();
    assert!(!mode.date_visible);
}
