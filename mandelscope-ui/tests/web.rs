//! Browser tests. Run with `wasm-pack test --headless --firefox mandelscope-ui`.
#![cfg(target_arch = "wasm32")]

use mandelscope_ui::start;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn start_appends_a_sized_canvas() {
    let handle = start(64, 48).unwrap();
    assert!(handle.is_running());

    let canvas = web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .query_selector("canvas")
        .unwrap()
        .unwrap();
    assert_eq!(canvas.get_attribute("width").as_deref(), Some("64"));
    assert_eq!(canvas.get_attribute("height").as_deref(), Some("48"));

    assert_eq!(
        handle.describe_view(),
        "x: 0, y: 0, scale: 4, iter: 50, dilation: 1"
    );
}

#[wasm_bindgen_test]
fn start_rejects_zero_width() {
    assert!(start(0, 100).is_err());
}
