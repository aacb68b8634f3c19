use std::collections::HashMap;

use livegraph::{GraphConfig, LiveGraph, RecordingSurface, SampleStore, ViewWindow};

fn graph_with(channels: &[(u32, &str)]) -> LiveGraph {
    let mut graph = LiveGraph::new(&GraphConfig::default()).unwrap();
    graph.configure(channels);
    graph
}

#[test]
fn scenario_a_global_extent() {
    let mut graph = graph_with(&[(1, "TC1")]);
    for (t, v) in [(0.0, 10.0), (1.0, 12.0), (2.0, 11.0)] {
        graph.ingest(t, &HashMap::from([(1, v)]));
    }
    let ext = graph.store().global_extent().unwrap();
    assert_eq!((ext.t_min, ext.t_max, ext.v_min, ext.v_max), (0.0, 2.0, 10.0, 12.0));
}

#[test]
fn scenario_b_capacity_keeps_newest() {
    let mut store = SampleStore::new(3).unwrap();
    store.reset(&[1]);
    for t in 0..5 {
        store.append(1, t as f64, 20.0);
    }
    let times: Vec<f64> = store.series(1).unwrap().times().collect();
    assert_eq!(times, vec![2.0, 3.0, 4.0]);
}

#[test]
fn scenario_c_zoom_out_from_full_stays_full() {
    let mut graph = graph_with(&[(1, "TC1")]);
    graph.ingest(0.0, &HashMap::from([(1, 20.0)]));
    graph.ingest(100.0, &HashMap::from([(1, 21.0)]));
    assert!(graph.view().is_full());
    graph.zoom_out();
    assert_eq!(graph.view().window_secs(), None);
    assert_eq!(graph.window_label(), "Window: full");
}

#[test]
fn scenario_d_hover_picks_nearest_sample() {
    let mut graph = graph_with(&[(1, "A")]);
    for (t, v) in [(0.0, 18.0), (5.0, 20.0), (6.0, 22.0), (10.0, 19.0)] {
        graph.ingest(t, &HashMap::from([(1, v)]));
    }
    let mut surface = RecordingSurface::new(950.0, 500.0);
    let geo = graph.draw(&mut surface).unwrap();
    let px = geo.time_to_x(5.4);
    let py = (geo.rect.top + geo.rect.bottom) / 2.0;

    let readout = graph.hover(px, py).unwrap();
    assert_eq!(readout.readings.len(), 1);
    assert_eq!(readout.readings[0].t, 5.0);
    assert_eq!(readout.readings[0].value, 20.0);
    let text = graph.hover_text(px, py).unwrap();
    assert!(text.contains("A=20.00°C"), "{text}");
    assert!(text.starts_with("t=0.08 min"), "{text}");
}

#[test]
fn scenario_e_hidden_channel_is_excluded_but_kept() {
    let mut graph = graph_with(&[(1, "A"), (2, "B")]);
    for t in 0..10 {
        graph.ingest(t as f64, &HashMap::from([(1, 20.0 + t as f64), (2, 30.0)]));
    }
    let mut surface = RecordingSurface::new(950.0, 500.0);

    graph.set_visible(2, false);
    let geo = graph.draw(&mut surface).unwrap();
    assert_eq!(surface.polylines().count(), 1);
    assert!(!surface.texts().any(|t| t == "B"));
    let readout = graph.hover(geo.time_to_x(3.0), geo.rect.top).unwrap();
    assert_eq!(readout.readings.len(), 1);
    assert_eq!(readout.readings[0].name, "A");
    assert_eq!(graph.store().len(2), 10);

    graph.set_visible(2, true);
    graph.draw(&mut surface).unwrap();
    assert_eq!(surface.polylines().count(), 2);
    let (points, _) = surface.polylines().nth(1).unwrap();
    assert_eq!(points.len(), 10);
}

#[test]
fn hover_time_comes_from_first_contributing_channel() {
    let mut graph = graph_with(&[(1, "A"), (2, "B")]);
    graph.ingest(0.0, &HashMap::from([(2, 1.0)]));
    graph.ingest(60.0, &HashMap::from([(1, 2.0), (2, 3.0)]));
    graph.ingest(120.0, &HashMap::from([(1, 4.0)]));
    let mut surface = RecordingSurface::new(950.0, 500.0);
    let geo = graph.draw(&mut surface).unwrap();
    // Pointer near t=0: A's nearest sample is at 60 s, B's at 0 s.
    let readout = graph.hover(geo.rect.left, geo.rect.bottom).unwrap();
    assert_eq!(readout.time_minutes, 1.0);
    assert_eq!(readout.readings[1].t, 0.0);
}

#[test]
fn hover_outside_plot_or_before_first_draw_is_none() {
    let mut graph = graph_with(&[(1, "A")]);
    graph.ingest(0.0, &HashMap::from([(1, 1.0)]));
    graph.ingest(1.0, &HashMap::from([(1, 2.0)]));
    assert!(graph.hover(500.0, 200.0).is_none());
    let geo = graph.draw(&mut RecordingSurface::new(950.0, 500.0)).unwrap();
    assert!(graph.hover(geo.rect.left - 1.0, 200.0).is_none());
    assert!(graph.hover(500.0, geo.rect.bottom + 1.0).is_none());
    assert!(graph.hover(geo.rect.right, geo.rect.top).is_some());
}

#[test]
fn visibility_survives_a_new_run() {
    let mut graph = graph_with(&[(1, "A"), (2, "B")]);
    graph.set_visible(1, false);
    graph.configure(&[(1, "A"), (3, "C")]);
    assert!(!graph.is_visible(1));
    assert!(graph.is_visible(3));
}

#[test]
fn view_state_persists_across_samples() {
    let mut graph = graph_with(&[(1, "A")]);
    graph.zoom_in();
    graph.set_pan(0.25);
    for t in 0..50 {
        graph.ingest(t as f64, &HashMap::from([(1, 1.0)]));
    }
    assert_eq!(graph.view().window_secs(), Some(150.0));
    assert_eq!(graph.view().pan_fraction(), 0.25);
    assert_eq!(*graph.view(), {
        let mut v = ViewWindow::default();
        v.zoom_in();
        v.set_pan(0.25);
        v
    });
}
