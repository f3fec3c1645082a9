//! Drag scenarios through the public API

use stretchy_core::{GestureEvent, Point, Rect, Vec2};
use stretchy_slider::{
    DragToDeltaMapper, PresentationDerived, Slider, SliderConfig, SliderLayout, ValueStore,
};

/// Press on the handle, feed vertical samples, release; returns each value
fn drag_store(store: &mut ValueStore, samples: &[f32]) -> Vec<i32> {
    let handle = SliderLayout::compute(Point::ZERO, store.get(), 1.0, 1.0).handle;
    let mut mapper = DragToDeltaMapper::default();

    mapper.handle(GestureEvent::PointerDown(handle.center()), handle, store);
    let values = samples
        .iter()
        .map(|&dy| {
            mapper.handle(GestureEvent::PointerMove(Vec2::new(0.0, dy)), handle, store);
            store.get()
        })
        .collect();
    mapper.handle(GestureEvent::PointerUp, handle, store);
    values
}

#[test]
fn drag_up_in_three_samples() {
    let mut store = ValueStore::new(50);
    assert_eq!(drag_store(&mut store, &[-25.0, -25.0, -50.0]), vec![55, 60, 70]);
}

#[test]
fn drag_past_max_saturates_and_triggers_feedback() {
    let mut store = ValueStore::new(98);
    assert_eq!(drag_store(&mut store, &[-50.0]), vec![100]);

    let presentation = PresentationDerived::from_value(store.get());
    assert!(presentation.is_at_max);
    assert_eq!(presentation.stretch_scale_target, 1.3);
    assert_eq!(presentation.bounce_scale_target, 1.1);
    assert_eq!(presentation.fill_ratio, 1.0);
}

#[test]
fn drag_past_min_saturates() {
    let mut store = ValueStore::new(5);
    assert_eq!(drag_store(&mut store, &[100.0]), vec![0]);
    assert_eq!(PresentationDerived::from_value(store.get()).fill_ratio, 0.0);
}

#[test]
fn cancelled_drag_keeps_progress() {
    let mut store = ValueStore::new(50);
    let handle = Rect::new(0.0, 0.0, 40.0, 40.0);
    let mut mapper = DragToDeltaMapper::default();

    mapper.handle(GestureEvent::PointerDown(handle.center()), handle, &mut store);
    mapper.handle(GestureEvent::PointerMove(Vec2::new(0.0, -30.0)), handle, &mut store);
    mapper.handle(GestureEvent::PointerCancel, handle, &mut store);
    mapper.handle(GestureEvent::PointerMove(Vec2::new(0.0, -30.0)), handle, &mut store);

    assert_eq!(store.get(), 56);
}

#[test]
fn full_frame_loop_reaches_stretched_layout() {
    let mut slider = Slider::new(SliderConfig::default().initial_value(95)).unwrap();
    let grab = slider.layout().handle.center();

    slider.handle_event(GestureEvent::PointerDown(grab));
    for _ in 0..10 {
        slider.handle_event(GestureEvent::PointerMove(Vec2::new(0.0, -5.0)));
    }
    slider.handle_event(GestureEvent::PointerUp);
    assert_eq!(slider.value(), 100);

    let mut frames = 0;
    while slider.tick(1.0 / 60.0) {
        frames += 1;
        assert!(frames < 600);
    }

    let layout = slider.layout();
    assert!((layout.track.height() - 260.0).abs() < 1e-3);
    assert!((layout.track.width() - 66.0).abs() < 1e-3);
    assert!((layout.handle.width() - 44.0).abs() < 1e-3);
    assert!(layout.highlight.is_some());
}
