use std::collections::HashMap;

use livegraph::{
    Extent, GraphConfig, LiveGraph, PlotGeometry, PlotRect, RecordingSurface, SampleStore,
    ViewWindow,
};

// Deterministic pseudo-random sequence so the checks cover irregular input.
fn lcg(seed: &mut u64) -> f64 {
    *seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (*seed >> 11) as f64 / (1u64 << 53) as f64
}

#[test]
fn store_keeps_exactly_the_most_recent_samples() {
    for capacity in [1, 2, 5, 64] {
        let mut store = SampleStore::new(capacity).unwrap();
        store.reset(&[7]);
        let mut seed = capacity as u64;
        let mut accepted = Vec::new();
        for i in 0..300 {
            let v = if i % 11 == 0 { f64::NAN } else { lcg(&mut seed) * 100.0 };
            if store.append(7, i as f64, v) {
                accepted.push((i as f64, v));
            }
            assert!(store.len(7) <= capacity);
        }
        let kept: Vec<(f64, f64)> = store.series(7).unwrap().iter().map(|s| (s.t, s.v)).collect();
        let start = accepted.len().saturating_sub(capacity);
        assert_eq!(kept, accepted[start..].to_vec());
    }
}

#[test]
fn projection_round_trips_inside_valid_ranges() {
    let g = PlotGeometry {
        rect: PlotRect {
            left: 160.0,
            right: 1240.0,
            top: 20.0,
            bottom: 770.0,
        },
        t_min: 3600.0,
        t_max: 3900.0,
        v_min: -12.5,
        v_max: 480.0,
    };
    let mut seed = 42;
    for _ in 0..500 {
        let t = g.t_min + lcg(&mut seed) * (g.t_max - g.t_min);
        let v = g.v_min + lcg(&mut seed) * (g.v_max - g.v_min);
        assert!((g.x_to_time(g.time_to_x(t)) - t).abs() < 1e-2);
        assert!((g.y_to_value(g.value_to_y(v)) - v).abs() < 1e-2);
    }
}

#[test]
fn hover_is_idempotent() {
    let mut graph = LiveGraph::new(&GraphConfig::default()).unwrap();
    graph.configure(&[(1, "A"), (2, "B")]);
    let mut seed = 7;
    for t in 0..200 {
        graph.ingest(
            t as f64,
            &HashMap::from([(1, lcg(&mut seed) * 50.0), (2, lcg(&mut seed) * 50.0)]),
        );
    }
    graph.draw(&mut RecordingSurface::new(950.0, 500.0)).unwrap();
    for x in (160..=910).step_by(37) {
        let first = graph.hover_text(x as f32, 100.0);
        let second = graph.hover_text(x as f32, 100.0);
        assert!(first.is_some());
        assert_eq!(first, second);
    }
}

#[test]
fn zoom_in_then_out_never_shrinks() {
    let extent = Extent {
        t_min: 0.0,
        t_max: 10_000.0,
        v_min: 0.0,
        v_max: 1.0,
    };
    for start in [5.0, 7.0, 9.9, 10.0, 60.0, 300.0, 4000.0] {
        let mut view = ViewWindow::default();
        view.set_window_secs(Some(start));
        view.zoom_in();
        view.zoom_out(Some(&extent));
        match view.window_secs() {
            None => {}
            Some(w) => assert!(w >= start, "{start} shrank to {w}"),
        }
    }
}

#[test]
fn zoom_in_respects_floor() {
    let mut view = ViewWindow::default();
    for _ in 0..100 {
        view.zoom_in();
        assert!(view.window_secs().unwrap() >= 5.0);
    }
}

#[test]
fn visible_range_is_never_degenerate() {
    let mut seed = 3;
    for _ in 0..1000 {
        let a = lcg(&mut seed) * 1000.0;
        let span = if lcg(&mut seed) < 0.2 { 0.0 } else { lcg(&mut seed) * 500.0 };
        let extent = Extent {
            t_min: a,
            t_max: a + span,
            v_min: 0.0,
            v_max: 1.0,
        };
        let mut view = ViewWindow::default();
        if lcg(&mut seed) < 0.7 {
            view.set_window_secs(Some(lcg(&mut seed) * 600.0));
        }
        view.set_pan(lcg(&mut seed));
        let (t_min, t_max) = view.resolve_visible_range(&extent);
        assert!(t_max > t_min, "{t_min}..{t_max} for {extent:?}");
        assert!(t_min >= extent.t_min);
    }
}
