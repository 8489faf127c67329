use super::*;
use crate::path::shapes::{collapsed_shape, expanded_shape};
use crate::widget::host::HeadlessHost;

fn widget() -> NotchWidget<HeadlessHost> {
    NotchWidget::new(&NotchConfig::default(), HeadlessHost::default()).unwrap()
}

#[test]
fn starts_idle_on_collapsed_outline() {
    let w = widget();
    assert_eq!(w.current_path(), &collapsed_shape());
    assert!(!w.host().is_ticking());
    assert_eq!(w.host().repaint_requests(), 0);
}

#[test]
fn enter_schedules_ticks_and_repaints_first_frame() {
    let mut w = widget();
    w.on_pointer_enter(Millis(0)).unwrap();
    assert_eq!(w.host().tick_interval_ms(), Some(5));
    assert!(w.host_mut().take_repaint());
    assert_eq!(w.current_path(), &collapsed_shape());
}

#[test]
fn finishing_a_run_cancels_ticks() {
    let mut w = widget();
    w.on_pointer_enter(Millis(0)).unwrap();
    let mut now = Millis(0);
    while w.host().is_ticking() {
        now = now.add_ms(5);
        w.on_tick(now).unwrap();
        assert!(now.0 <= 500, "run did not finish in time");
    }
    assert_eq!(now, Millis(500));
    assert!(!w.animator().is_running());
    let b = w.current_path().bounds();
    assert!((b.x1 - expanded_shape().bounds().x1).abs() < 1e-9);
}

#[test]
fn leave_mid_run_restarts_from_expanded() {
    let mut w = widget();
    w.on_pointer_enter(Millis(0)).unwrap();
    w.on_tick(Millis(100)).unwrap();
    w.on_pointer_leave(Millis(100)).unwrap();

    assert_eq!(w.current_path(), &expanded_shape());
    assert_eq!(w.animator().progress(), 0.0);
    assert!(w.host().is_ticking());
    assert_eq!(w.host().schedules(), 2);
}

#[test]
fn render_draws_into_surface() {
    let mut w = widget();
    let mut surface = FrameRGBA::new(NotchConfig::default().surface).unwrap();
    w.render(&mut surface).unwrap();
    assert!(surface.data.chunks_exact(4).any(|px| px[3] == 255));
}
