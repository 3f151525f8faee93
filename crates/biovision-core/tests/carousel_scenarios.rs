//! Carousel Scenario Tests
//!
//! Drives sliders over an in-memory track the way the page does: timer
//! ticks, swipes, thumbnail clicks and transition-end acknowledgements.

use biovision_core::carousel::{
    CarouselOptions, CleanupKind, LayoutKind, MemoryTrack, Slider, Step, TouchPoint,
};
use biovision_core::{CarouselError, DataAttributes};

fn swipe_left<T: biovision_core::SlideTrack>(slider: &mut Slider<T>, now: f64) -> Step {
    slider.touch_start(TouchPoint::new(300.0, 200.0));
    slider.touch_end(TouchPoint::new(100.0, 210.0), now).unwrap()
}

/// Five 200px slides with a 10px right margin in a 620px container.
#[test]
fn test_offset_carousel_walks_and_wraps() {
    let track = MemoryTrack::new(5, 200.0, 10.0, 620.0);
    let mut slider = Slider::new(track, CarouselOptions::default(), 0.0).unwrap();
    assert_eq!(slider.max_item(), 3);

    let mut positions = Vec::new();
    let mut margins = Vec::new();
    for tick in 1..=4 {
        slider.next(f64::from(tick) * 1000.0).unwrap();
        positions.push(slider.current());
        margins.push(slider.track().leading_margin());
    }

    assert_eq!(positions, vec![1, 2, 3, 0]);
    assert_eq!(margins, vec![-210.0, -420.0, -430.0, 0.0]);
}

/// Three slides, swiped left twice with the transition finishing between.
#[test]
fn test_offset_cycle_rotates_on_swipe() {
    let attrs = DataAttributes::new().with("type", "offset-cycle");
    let options = CarouselOptions::from_attributes(&attrs).unwrap();
    let track = MemoryTrack::new(3, 300.0, 0.0, 300.0);
    let mut slider = Slider::new(track, options, 0.0).unwrap();

    let step = swipe_left(&mut slider, 100.0);
    let Step::Pending(cleanup) = step else {
        panic!("expected a pending cleanup, got {:?}", step);
    };
    assert_eq!(cleanup.kind, CleanupKind::AppendLeading);
    assert!(cleanup.awaits_transition_end());
    assert_eq!(slider.track().leading_margin(), -300.0);

    assert!(slider.complete_transition().unwrap());
    assert_eq!(slider.track().order(), &[1, 2, 0]);

    swipe_left(&mut slider, 200.0);
    slider.complete_transition().unwrap();
    assert_eq!(slider.track().order(), &[2, 0, 1]);
    assert_eq!(slider.current(), 0);
}

/// A second request during a pending transition is dropped, not queued.
#[test]
fn test_overlapping_cycle_steps_are_serialized() {
    let options = CarouselOptions::default().with_kind(LayoutKind::OffsetCycle);
    let track = MemoryTrack::new(4, 100.0, 0.0, 200.0);
    let mut slider = Slider::new(track, options, 0.0).unwrap();

    assert!(matches!(slider.next(0.0).unwrap(), Step::Pending(_)));
    assert_eq!(slider.previous(10.0).unwrap(), Step::Busy);
    assert_eq!(swipe_left(&mut slider, 20.0), Step::Busy);
    assert_eq!(slider.jump_to(3).unwrap(), Step::Busy);

    slider.complete_transition().unwrap();
    assert_eq!(slider.track().order(), &[1, 2, 3, 0]);

    // Backward step: trailing slide comes to the front hidden, then settles
    let step = slider.previous(30.0).unwrap();
    assert_eq!(
        step,
        Step::Pending(biovision_core::Cleanup {
            kind: CleanupKind::ClearLeadingMargin,
            delay_ms: 50.0,
        })
    );
    assert_eq!(slider.track().order(), &[0, 1, 2, 3]);
    slider.complete_transition().unwrap();
    assert_eq!(slider.track().leading_margin(), 0.0);
}

/// Autoplay advances on ticks; manual navigation pushes it back.
#[test]
fn test_autoplay_with_manual_interruption() {
    let attrs = DataAttributes::new()
        .with("type", "current-item")
        .with("timeout", "2000");
    let options = CarouselOptions::from_attributes(&attrs).unwrap();
    let track = MemoryTrack::new(4, 100.0, 0.0, 400.0);
    let mut slider = Slider::new(track, options, 0.0).unwrap();

    slider.auto_tick(2000.0).unwrap();
    assert_eq!(slider.track().marked(), Some(1));

    slider.next(3000.0).unwrap();
    assert_eq!(slider.track().marked(), Some(2));

    // 1000ms after the manual step: too early
    assert_eq!(slider.auto_tick(4000.0).unwrap(), Step::Idle);
    slider.auto_tick(5000.0).unwrap();
    assert_eq!(slider.track().marked(), Some(3));
}

/// Thumbnail clicks bring the chosen slide to the front.
#[test]
fn test_thumbnail_jump() {
    let options = CarouselOptions::default().with_kind(LayoutKind::OffsetCycle);
    let track = MemoryTrack::new(5, 120.0, 8.0, 640.0);
    let mut slider = Slider::new(track, options, 0.0).unwrap();

    slider.jump_to(3).unwrap();
    assert_eq!(slider.track().order(), &[3, 0, 1, 2, 4]);
    assert_eq!(slider.track().leading_margin(), -128.0);
    slider.complete_transition().unwrap();
    assert_eq!(slider.track().leading_margin(), 0.0);

    assert_eq!(
        slider.jump_to(7),
        Err(CarouselError::SlideOutOfRange { index: 7, count: 5 })
    );
}

/// Narrow viewports pin the carousel to the first position.
#[test]
fn test_narrow_viewport_then_resize() {
    let attrs = DataAttributes::new().with("min-width", "768");
    let options = CarouselOptions::from_attributes(&attrs).unwrap();
    let mut track = MemoryTrack::new(6, 300.0, 0.0, 900.0);
    track.set_viewport_width(1280.0);
    let mut slider = Slider::new(track, options, 0.0).unwrap();

    slider.next(0.0).unwrap();
    slider.next(0.0).unwrap();
    assert_eq!(slider.current(), 2);

    slider.track_mut().set_viewport_width(600.0);
    slider.relayout().unwrap();
    assert_eq!(slider.current(), 0);
    assert_eq!(slider.track().leading_margin(), 0.0);

    slider.next(0.0).unwrap();
    assert_eq!(slider.current(), 0);
}

#[test]
fn test_construction_errors() {
    let track = MemoryTrack::new(0, 100.0, 0.0, 400.0);
    assert_eq!(
        Slider::new(track, CarouselOptions::default(), 0.0).err(),
        Some(CarouselError::EmptyTrack)
    );

    let attrs = DataAttributes::new().with("type", "carousel-3d");
    assert_eq!(
        CarouselOptions::from_attributes(&attrs),
        Err(CarouselError::UnknownLayout("carousel-3d".to_string()))
    );
}
