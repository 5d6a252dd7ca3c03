use approx::assert_abs_diff_eq;
use crtscope::data::trace::base_brightness;
use crtscope::TraceBuffer;
use egui::Pos2;

#[test]
fn length_never_exceeds_capacity() {
    let mut trace = TraceBuffer::new(50);
    for i in 0..500 {
        trace.push(Pos2::new(i as f32, i as f32));
        assert!(trace.len() <= 50, "buffer overflowed at frame {i}");
    }
    assert_eq!(
        trace.len(),
        50,
        "after capacity appends the buffer must sit exactly at capacity"
    );
}

#[test]
fn eviction_is_oldest_first() {
    let mut trace = TraceBuffer::new(3);
    for i in 0..5 {
        trace.push(Pos2::new(i as f32, 0.0));
    }
    let xs: Vec<f32> = trace.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![2.0, 3.0, 4.0]);
    assert_eq!(trace.newest(), Some(Pos2::new(4.0, 0.0)));
}

#[test]
fn shrinking_capacity_evicts_immediately() {
    let mut trace = TraceBuffer::new(300);
    for i in 0..300 {
        trace.push(Pos2::new(i as f32, 0.0));
    }
    trace.set_capacity(10);
    assert_eq!(
        trace.len(),
        10,
        "capacity shrink must evict surplus points at once, not lazily"
    );
    assert_eq!(trace.iter().next().map(|p| p.x), Some(290.0));
}

#[test]
fn brightness_fraction_ramps_oldest_to_newest() {
    let mut trace = TraceBuffer::new(10);
    for i in 0..4 {
        trace.push(Pos2::new(i as f32, 0.0));
    }
    assert_abs_diff_eq!(trace.brightness_fraction(0), 0.25, epsilon = 1e-6);
    assert_abs_diff_eq!(trace.brightness_fraction(2), 0.75, epsilon = 1e-6);
    assert_abs_diff_eq!(trace.brightness_fraction(3), 1.0, epsilon = 1e-6);
}

#[test]
fn brightness_scenario_from_acceleration() {
    // acceleration 500, buffer length 4, point index 2.
    let mut trace = TraceBuffer::new(10);
    for i in 0..4 {
        trace.push(Pos2::new(i as f32, 0.0));
    }
    let brightness = base_brightness(500.0) * trace.brightness_fraction(2);
    assert_abs_diff_eq!(brightness, 95.625, epsilon = 1e-3);
}

#[test]
fn single_point_reads_fully_bright() {
    let mut trace = TraceBuffer::new(10);
    trace.push(Pos2::ZERO);
    assert_eq!(trace.brightness_fraction(0), 1.0);
}

#[test]
fn empty_buffer_does_not_divide_by_zero() {
    let trace = TraceBuffer::new(10);
    assert!(trace.is_empty());
    // Degenerate call; must not panic.
    assert_eq!(trace.brightness_fraction(0), 1.0);
}

#[test]
fn base_brightness_clamps() {
    assert_eq!(base_brightness(1000.0), 255.0);
    assert_abs_diff_eq!(base_brightness(500.0), 127.5, epsilon = 1e-4);
    assert_eq!(base_brightness(0.0), 0.0);
}
