use mandelscope_compute::{
    iterate, sample_grid, BatchedEngine, CanvasGeometry, Controller, EscapeTimeEngine,
    InputEvent, PointerButton, ScalarEngine, StabilityGrid, ViewState,
};
use std::collections::VecDeque;

fn reference_scenario() -> (ViewState, CanvasGeometry) {
    let view = ViewState::default()
        .with_center(0.0, 0.0)
        .with_scale(4.0)
        .with_max_iterations(50)
        .with_sampling_stride(1);
    (view, CanvasGeometry::new(100, 100).unwrap())
}

fn reference_grid() -> StabilityGrid {
    let (view, canvas) = reference_scenario();
    iterate(&sample_grid(&view, &canvas), view.max_iterations)
}

/// Size of the 8-connected stable component containing (column, row).
fn component_size(grid: &StabilityGrid, column: u32, row: u32) -> usize {
    let mut seen = vec![false; grid.len()];
    let mut queue = VecDeque::from([(column as i64, row as i64)]);
    let mut size = 0;

    while let Some((x, y)) = queue.pop_front() {
        if x < 0 || y < 0 || x >= grid.columns as i64 || y >= grid.rows as i64 {
            continue;
        }
        let index = (y * grid.columns as i64 + x) as usize;
        if seen[index] || !grid.is_stable(x as u32, y as u32) {
            continue;
        }
        seen[index] = true;
        size += 1;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx != 0 || dy != 0 {
                    queue.push_back((x + dx, y + dy));
                }
            }
        }
    }

    size
}

#[test]
fn reference_view_covers_expected_share_of_samples() {
    let grid = reference_grid();
    assert_eq!(grid.len(), 100 * 100);

    // The set's area (~1.51) over the 4x4 window is ~9.4%; a 50-iteration
    // budget keeps a thin halo of slow escapers, measured at ~10%.
    let fraction = grid.stable_fraction();
    assert!(
        (0.08..0.13).contains(&fraction),
        "stable fraction {}",
        fraction
    );
}

#[test]
fn reference_view_is_one_dominant_blob_through_the_center() {
    let grid = reference_grid();
    assert!(grid.is_stable(50, 50), "origin pixel must be stable");

    let main = component_size(&grid, 50, 50);
    let total = grid.stable_count();
    assert!(
        main * 100 >= total * 99,
        "main component {} of {} stable cells",
        main,
        total
    );
}

#[test]
fn reference_view_silhouette_bounds() {
    let grid = reference_grid();
    let pixels: Vec<(u32, u32)> = grid.stable_pixels().collect();

    let min_x = pixels.iter().map(|p| p.0).min().unwrap();
    let max_x = pixels.iter().map(|p| p.0).max().unwrap();
    let min_y = pixels.iter().map(|p| p.1).min().unwrap();
    let max_y = pixels.iter().map(|p| p.1).max().unwrap();

    // Real axis spans [-2, ~0.47] -> columns 0..=~62; imaginary [-1.2, 1.2] -> rows ~20..=~80
    assert_eq!(min_x, 0);
    assert!((55..=62).contains(&max_x), "max_x {}", max_x);
    assert!(min_y >= 20 && max_y <= 80, "rows {}..={}", min_y, max_y);

    // Cusp side of the cardioid is empty, main bulb is filled
    assert!(!grid.is_stable(75, 50));
    assert!(grid.is_stable(25, 50)); // c = -1
}

#[test]
fn reference_view_is_mirror_symmetric_about_real_axis() {
    let grid = reference_grid();
    for k in 1..50 {
        for x in 0..100 {
            assert_eq!(
                grid.is_stable(x, 50 + k),
                grid.is_stable(x, 50 - k),
                "column {} rows {}/{}",
                x,
                50 + k,
                50 - k
            );
        }
    }
}

#[test]
fn click_right_of_center_recenters_on_one() {
    let (view, canvas) = reference_scenario();
    let mut controller = Controller::new(view, canvas);
    let mut sink: Vec<String> = Vec::new();

    controller.handle_event(
        &InputEvent::PointerPress {
            button: PointerButton::Primary,
            px: 75.0,
            py: 50.0,
        },
        &mut sink,
    );

    assert!((controller.view().center.x - 1.0).abs() < 1e-9);
    assert!(controller.view().center.y.abs() < 1e-9);
}

#[test]
fn batched_and_scalar_agree_on_reference_grid() {
    let (view, canvas) = reference_scenario();
    let grid = sample_grid(&view, &canvas);

    assert_eq!(
        BatchedEngine.iterate(&grid, 50),
        ScalarEngine.iterate(&grid, 50)
    );
}

#[test]
fn batched_and_scalar_agree_on_zoomed_strided_views() {
    let canvas = CanvasGeometry::new(120, 90).unwrap();
    let views = [
        ViewState::default()
            .with_center(-0.743643887, 0.131825904)
            .with_scale(0.01)
            .with_max_iterations(200)
            .with_sampling_stride(3),
        ViewState::default()
            .with_center(-1.25, 0.0)
            .with_scale(0.5)
            .with_max_iterations(90)
            .with_sampling_stride(7),
        ViewState::default()
            .with_center(0.28, 0.01)
            .with_scale(0.05)
            .with_max_iterations(300),
    ];

    for view in views {
        let grid = sample_grid(&view, &canvas);
        let batched = BatchedEngine.escape_counts(&grid.samples, view.max_iterations);
        let scalar = ScalarEngine.escape_counts(&grid.samples, view.max_iterations);
        assert_eq!(batched, scalar, "view {:?}", view);
    }
}

#[test]
fn far_outside_point_is_unstable_immediately() {
    let counts = ScalarEngine.escape_counts(
        &[mandelscope_compute::ComplexSample::new(3.0, 0.0, 0, 0)],
        50,
    );
    assert_eq!(counts, vec![0]);
}
