use mandelscope_core::{
    describe_view, pixel_to_math, CanvasGeometry, ConfigError, Controller, ExplorerConfig,
    InputEvent, Key, PointerButton, Transition, ViewState,
};

fn key(identifier: &str) -> InputEvent {
    InputEvent::KeyPress(Key::from_identifier(identifier))
}

fn explorer() -> Controller {
    let config = ExplorerConfig::new(100, 100).unwrap();
    Controller::new(config.initial_view, config.canvas)
}

#[test]
fn key_sequence_drives_the_view() {
    let mut controller = explorer();
    let mut sink: Vec<String> = Vec::new();

    let script = [
        key("z"),          // scale 2
        key("ArrowRight"), // x = 0.2
        key("ArrowUp"),    // y = 0.2
        key("a"),          // iter 60
        key("w"),          // stride 2
        key("e"),          // dump
    ];
    for event in &script {
        assert_ne!(controller.handle_event(event, &mut sink), Transition::Quit);
    }

    let view = controller.view();
    assert_eq!(view.scale, 2.0);
    assert!((view.center.x - 0.2).abs() < 1e-12);
    assert!((view.center.y - 0.2).abs() < 1e-12);
    assert_eq!(view.max_iterations, 60);
    assert_eq!(view.sampling_stride, 2);
    assert_eq!(sink, vec![describe_view(view)]);
}

#[test]
fn uppercase_keys_behave_like_lowercase() {
    let mut controller = explorer();
    let mut sink: Vec<String> = Vec::new();

    controller.handle_event(&key("Z"), &mut sink);

    assert_eq!(controller.view().scale, 2.0);
}

#[test]
fn click_then_zoom_keeps_clicked_point_centered() {
    let mut controller = explorer();
    let mut sink: Vec<String> = Vec::new();
    let canvas = *controller.canvas();
    let target = pixel_to_math(20.0, 80.0, controller.view(), &canvas);

    controller.handle_event(
        &InputEvent::PointerPress {
            button: PointerButton::Primary,
            px: 20.0,
            py: 80.0,
        },
        &mut sink,
    );
    controller.handle_event(&key("z"), &mut sink);

    let center = pixel_to_math(50.0, 50.0, controller.view(), &canvas);
    assert!((center.x - target.x).abs() < 1e-12);
    assert!((center.y - target.y).abs() < 1e-12);
}

#[test]
fn middle_click_and_unbound_keys_leave_view_untouched() {
    let mut controller = explorer();
    let mut sink: Vec<String> = Vec::new();
    let events = [
        InputEvent::PointerPress {
            button: PointerButton::Middle,
            px: 10.0,
            py: 10.0,
        },
        key("Enter"),
        key("m"),
    ];

    for event in &events {
        assert_eq!(
            controller.handle_event(event, &mut sink),
            Transition::Unchanged
        );
    }
    assert_eq!(*controller.view(), ViewState::default());
    assert!(sink.is_empty());
}

#[test]
fn clamps_hold_under_repeated_decrease() {
    let mut controller = explorer();
    let mut sink: Vec<String> = Vec::new();

    for _ in 0..100 {
        controller.handle_event(&key("s"), &mut sink);
        controller.handle_event(&key("q"), &mut sink);
    }

    assert_eq!(controller.view().max_iterations, 50);
    assert_eq!(controller.view().sampling_stride, 1);
}

#[test]
fn invalid_configuration_is_rejected_up_front() {
    assert_eq!(
        CanvasGeometry::new(0, 10),
        Err(ConfigError::ZeroCanvasDimension { axis: "width" })
    );
    assert_eq!(
        ExplorerConfig::default().with_view(ViewState::default().with_sampling_stride(0)),
        Err(ConfigError::ZeroSamplingStride)
    );
    assert!(ExplorerConfig::default()
        .with_view(ViewState::default().with_scale(-4.0))
        .is_err());
    assert!(ExplorerConfig::default()
        .with_view(ViewState::default().with_max_iterations(10))
        .is_err());
}
