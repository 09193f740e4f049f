use crate::*;

use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    /// A pixel quantity in `[start, end)` with a quarter-pixel fractional part.
    fn gen_px(&mut self, start: u64, end_exclusive: u64) -> f64 {
        self.gen_range_u64(start * 4, end_exclusive * 4) as f64 / 4.0
    }
}

fn engine(item_count: usize, item_height: f64, viewport_height: f64) -> ListWindow {
    ListWindow::new(
        WindowOptions::new(item_height)
            .with_item_count(item_count)
            .with_viewport_height(viewport_height),
    )
    .unwrap()
}

fn counting_engine(item_count: usize, threshold: f64) -> (ListWindow, Arc<AtomicUsize>) {
    let fired = Arc::new(AtomicUsize::new(0));
    let opts = WindowOptions::new(50.0)
        .with_item_count(item_count)
        .with_viewport_height(400.0)
        .with_end_reached_threshold(threshold)
        .with_on_end_reached(Some({
            let fired = Arc::clone(&fired);
            move |_: EndReached| {
                fired.fetch_add(1, Ordering::SeqCst);
            }
        }));
    (ListWindow::new(opts).unwrap(), fired)
}

#[test]
fn window_at_top_includes_trailing_overscan() {
    let w = compute_window(0.0, 400.0, 50.0, 1000, 2).unwrap();
    // 8 visible + 2 overscan
    assert_eq!(w.range.start_index, 0);
    assert_eq!(w.range.end_index, 10);
    assert_eq!(w.total_height, 50_000.0);
    assert_eq!(w.top_offset, 0.0);
}

#[test]
fn window_tracks_scroll_offset() {
    let w = compute_window(2500.0, 400.0, 50.0, 1000, 2).unwrap();
    assert_eq!(w.range.start_index, 50);
    assert_eq!(w.range.end_index, 60);
    assert_eq!(w.top_offset, 2500.0);
}

#[test]
fn short_collection_clamps_end_to_count() {
    let w = compute_window(0.0, 1000.0, 50.0, 10, 2).unwrap();
    assert_eq!(w.range, WindowRange { start_index: 0, end_index: 10 });
    assert_eq!(w.total_height, 500.0);
}

#[test]
fn empty_collection_yields_empty_window() {
    let w = compute_window(123.0, 400.0, 50.0, 0, 2).unwrap();
    assert!(w.range.is_empty());
    assert_eq!(w.total_height, 0.0);
}

#[test]
fn offset_past_end_produces_empty_range_at_count() {
    // e.g. the collection shrank under a deep scroll position.
    let w = compute_window(10_000.0, 400.0, 50.0, 20, 2).unwrap();
    assert_eq!(w.range, WindowRange { start_index: 20, end_index: 20 });
}

#[test]
fn negative_and_nan_offsets_clamp_to_zero() {
    let a = compute_window(-300.0, 400.0, 50.0, 100, 2).unwrap();
    let b = compute_window(f64::NAN, 400.0, 50.0, 100, 2).unwrap();
    let zero = compute_window(0.0, 400.0, 50.0, 100, 2).unwrap();
    assert_eq!(a, zero);
    assert_eq!(b, zero);
}

#[test]
fn non_positive_heights_are_invalid_geometry() {
    for vh in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = compute_window(0.0, vh, 50.0, 100, 2).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidGeometry {
                dimension: Dimension::ViewportHeight,
                ..
            }
        ));
    }
    for ih in [0.0, -5.0, f64::NAN] {
        let err = compute_window(0.0, 400.0, ih, 100, 2).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidGeometry {
                dimension: Dimension::ItemHeight,
                ..
            }
        ));
    }
}

#[test]
fn zero_overscan_still_covers_partially_visible_last_item() {
    // Visible pixels 25..425 touch items 0..=8.
    let w = compute_window(25.0, 400.0, 50.0, 100, 0).unwrap();
    assert_eq!(w.range, WindowRange { start_index: 0, end_index: 9 });
}

#[test]
fn randomized_window_bounds_and_coverage() {
    let mut rng = Lcg::new(0x5eed_1234);
    for _ in 0..5_000 {
        let item_count = rng.gen_range_usize(0, 500);
        let item_height = rng.gen_px(1, 120);
        let viewport_height = rng.gen_px(1, 2_000);
        let overscan = rng.gen_range_usize(0, 5);
        let total = item_count as f64 * item_height;
        let scroll_offset = rng.gen_px(0, (total as u64).saturating_add(500).max(1));

        let w = compute_window(
            scroll_offset,
            viewport_height,
            item_height,
            item_count,
            overscan,
        )
        .unwrap();
        let r = w.range;
        assert!(r.start_index <= r.end_index, "{r:?}");
        assert!(r.end_index <= item_count, "{r:?} count={item_count}");

        // Every item intersecting [scroll_offset, scroll_offset + viewport_height) is included.
        let visible_end = scroll_offset + viewport_height;
        for i in 0..item_count {
            let top = i as f64 * item_height;
            let bottom = top + item_height;
            if top < visible_end && bottom > scroll_offset {
                assert!(
                    r.contains(i),
                    "visible item {i} missing from {r:?} (offset={scroll_offset}, vh={viewport_height}, ih={item_height})"
                );
            }
        }

        let again = compute_window(
            scroll_offset,
            viewport_height,
            item_height,
            item_count,
            overscan,
        )
        .unwrap();
        assert_eq!(w, again);
    }
}

#[test]
fn distance_to_end_and_navigation_helpers() {
    assert_eq!(geometry::distance_to_end(1000.0, 560.0, 400.0), 40.0);
    assert_eq!(geometry::index_at_offset(0.0, 50.0, 0), None);
    assert_eq!(geometry::index_at_offset(149.0, 50.0, 10), Some(2));
    assert_eq!(geometry::index_at_offset(9_999.0, 50.0, 10), Some(9));
    assert_eq!(geometry::max_scroll_offset(300.0, 400.0), 0.0);
    assert_eq!(geometry::max_scroll_offset(1000.0, 400.0), 600.0);
}

#[test]
fn construction_validates_configuration() {
    assert!(matches!(
        ListWindow::new(WindowOptions::new(0.0)),
        Err(Error::InvalidGeometry {
            dimension: Dimension::ItemHeight,
            ..
        })
    ));
    assert_eq!(
        ListWindow::new(WindowOptions::new(20.0).with_end_reached_threshold(-1.0)).unwrap_err(),
        Error::InvalidThreshold(-1.0)
    );

    let w = ListWindow::new(WindowOptions::new(20.0)).unwrap();
    assert_eq!(w.overscan(), DEFAULT_OVERSCAN);
    assert_eq!(w.end_reached_threshold(), DEFAULT_END_REACHED_THRESHOLD);
    // Unmeasured viewport: empty window, no error.
    assert!(w.window().is_none());
    assert!(w.last_error().is_none());
}

#[test]
fn repeated_scroll_offset_recomputes_once() {
    let mut w = engine(1000, 50.0, 400.0);
    let base = w.recompute_count();

    let first = w.on_scroll(2500.0).unwrap();
    assert!(first.recomputed);
    let second = w.on_scroll(2500.0).unwrap();
    assert_eq!(second, Update::NOOP);
    assert_eq!(w.recompute_count(), base + 1);
    assert_eq!(w.range(), WindowRange { start_index: 50, end_index: 60 });
    assert_eq!(w.top_offset(), 2500.0);
}

#[test]
fn repeated_resize_recomputes_once() {
    let mut w = engine(1000, 50.0, 400.0);
    let base = w.recompute_count();
    assert_eq!(w.on_viewport_resize(400.0).unwrap(), Update::NOOP);
    assert!(w.on_viewport_resize(600.0).unwrap().recomputed);
    assert!(!w.on_viewport_resize(600.0).unwrap().recomputed);
    assert_eq!(w.recompute_count(), base + 1);
    assert_eq!(w.range().end_index, 14);
}

#[test]
fn scroll_direction_follows_offsets() {
    let mut w = engine(1000, 50.0, 400.0);
    assert_eq!(w.scroll_direction(), None);
    w.on_scroll(100.0).unwrap();
    assert_eq!(w.scroll_direction(), Some(ScrollDirection::Forward));
    w.on_scroll(40.0).unwrap();
    assert_eq!(w.scroll_direction(), Some(ScrollDirection::Backward));
}

#[test]
fn end_reached_fires_once_per_growth() {
    let (mut w, fired) = counting_engine(20, 50.0);
    assert_eq!(w.total_height(), 1000.0);

    let u = w.on_scroll(560.0).unwrap();
    assert!(u.end_reached);
    assert_eq!(w.distance_to_end(), Some(40.0));
    assert_eq!(w.load_guard(), LoadGuard::Awaiting { armed_len: 20 });

    for offset in [570.0, 580.0, 590.0, 600.0, 575.0] {
        assert!(!w.on_scroll(offset).unwrap().end_reached);
    }
    assert_eq!(fired.load(Ordering::SeqCst), 1);

    // Host appended a page.
    let u = w.set_item_count(40).unwrap();
    assert!(!u.end_reached);
    assert_eq!(w.total_height(), 2000.0);
    assert_eq!(w.load_guard(), LoadGuard::Idle);

    assert!(w.on_scroll(1560.0).unwrap().end_reached);
    assert_eq!(fired.load(Ordering::SeqCst), 2);
}

#[test]
fn shrink_while_awaiting_does_not_fire_again() {
    let (mut w, fired) = counting_engine(20, 50.0);
    assert!(w.on_scroll(560.0).unwrap().end_reached);

    let u = w.set_item_count(19).unwrap();
    assert!(u.recomputed);
    assert!(!u.end_reached);
    assert_eq!(w.load_guard(), LoadGuard::Awaiting { armed_len: 19 });
    assert!(!w.on_scroll(500.0).unwrap().end_reached);
    assert!(!w.check_end_reached());
    assert_eq!(fired.load(Ordering::SeqCst), 1);

    // Growth past the lowered mark re-arms the guard.
    assert!(!w.set_item_count(20).unwrap().end_reached);
    assert_eq!(w.load_guard(), LoadGuard::Idle);
    assert!(w.on_scroll(560.0).unwrap().end_reached);
    assert_eq!(fired.load(Ordering::SeqCst), 2);
}

#[test]
fn exhausted_source_stays_awaiting() {
    let (mut w, fired) = counting_engine(20, 50.0);
    w.on_scroll(600.0).unwrap();
    for i in 0..100 {
        w.on_scroll(550.0 + (i % 50) as f64).unwrap();
        w.check_end_reached();
    }
    assert!(w.load_guard().is_awaiting());
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[test]
fn rearm_allows_retry_without_growth() {
    let (mut w, fired) = counting_engine(20, 50.0);
    w.on_scroll(600.0).unwrap();
    w.rearm_end_reached();
    assert_eq!(w.load_guard(), LoadGuard::Idle);
    assert!(w.check_end_reached());
    assert_eq!(fired.load(Ordering::SeqCst), 2);
}

#[test]
fn short_list_fires_on_explicit_check() {
    let (mut w, fired) = counting_engine(3, 0.0);
    // 150px of content in a 400px viewport: nothing to scroll, but the end is visible.
    assert!(w.check_end_reached());
    assert!(!w.check_end_reached());
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[test]
fn small_append_still_short_of_viewport_fires_again() {
    let (mut w, fired) = counting_engine(2, 0.0);
    assert!(w.check_end_reached());
    let u = w.set_item_count(4).unwrap();
    assert!(u.end_reached);
    assert_eq!(fired.load(Ordering::SeqCst), 2);
}

#[test]
fn guard_state_machine_transitions() {
    let mut g = LoadGuard::default();
    assert!(!g.check(10, 100.0, 50.0));
    assert!(g.check(10, 50.0, 50.0));
    assert!(!g.check(10, -20.0, 50.0));
    assert!(!g.check(10, f64::NAN, 50.0));
    assert!(!g.observe_len(10));
    assert!(g.observe_len(11));
    assert_eq!(g, LoadGuard::Idle);
    assert!(!g.check(11, f64::NAN, 50.0));

    let mut g = LoadGuard::Awaiting { armed_len: 10 };
    assert!(!g.observe_len(7));
    assert_eq!(g, LoadGuard::Awaiting { armed_len: 7 });
    assert!(!g.check(7, -100.0, 50.0));
    assert!(!g.observe_len(7));
    assert!(g.observe_len(8));
    assert_eq!(g, LoadGuard::Idle);
}

#[test]
fn invalid_viewport_renders_nothing_and_recovers() {
    let items: Vec<u32> = (0..100).collect();
    let mut w = engine(100, 50.0, 400.0);
    assert_eq!(w.render_slice(&items).len(), 10);

    let err = w.on_viewport_resize(0.0).unwrap_err();
    assert!(err.is_invalid_geometry());
    assert_eq!(w.last_error(), Some(err));
    assert_eq!(w.render_slice(&items).count(), 0);
    assert!(w.range().is_empty());
    assert!(!w.check_end_reached());

    // Scrolling while the geometry is broken keeps reporting the error.
    assert!(w.on_scroll(100.0).is_err());

    assert!(w.on_viewport_resize(200.0).unwrap().recomputed);
    assert!(w.last_error().is_none());
    assert_eq!(w.range(), WindowRange { start_index: 2, end_index: 8 });
}

#[test]
fn zero_viewport_at_construction_is_reported() {
    let w = ListWindow::new(
        WindowOptions::new(50.0)
            .with_item_count(10)
            .with_viewport_height(0.0),
    )
    .unwrap();
    assert!(w.last_error().is_some_and(|e| e.is_invalid_geometry()));
    assert_eq!(w.render_slice(&[1, 2, 3]).count(), 0);

    let mut w = ListWindow::new(WindowOptions::new(50.0).with_item_count(10)).unwrap();
    assert!(w.on_viewport_resize(0.0).is_err());
}

#[test]
fn render_slice_positions_items_absolutely() {
    let items: Vec<char> = ('a'..='z').collect();
    let mut w = engine(items.len(), 10.0, 30.0);
    w.on_scroll(55.0).unwrap();

    let mut out = Vec::new();
    w.collect_render_slice(&items, &mut out);
    let indexes: Vec<usize> = out.iter().map(|s| s.index).collect();
    assert_eq!(indexes, [5, 6, 7, 8, 9]);
    assert_eq!(*out[0].item, 'f');
    assert_eq!(out[0].top, 50.0);
    assert_eq!(out[4].top, 90.0);
}

#[test]
fn render_slice_tolerates_collection_shrinking_between_recomputes() {
    let items: Vec<u32> = (0..100).collect();
    let mut w = engine(100, 50.0, 400.0);
    w.on_scroll(2500.0).unwrap();

    // The host truncated before telling the engine.
    let shrunk = &items[..55];
    let got: Vec<usize> = w.render_slice(shrunk).map(|s| s.index).collect();
    assert_eq!(got, [50, 51, 52, 53, 54]);
    assert_eq!(w.render_slice(&items[..10]).count(), 0);

    let u = w.set_item_count(55).unwrap();
    assert!(u.recomputed);
    assert_eq!(w.range(), WindowRange { start_index: 50, end_index: 55 });

    w.set_item_count(10).unwrap();
    assert_eq!(w.range(), WindowRange { start_index: 10, end_index: 10 });
}

#[test]
fn absolute_indexes_stay_stable_across_small_scrolls() {
    let items: Vec<u32> = (0..1000).collect();
    let mut w = engine(1000, 50.0, 400.0);
    w.on_scroll(2500.0).unwrap();
    let before: Vec<(usize, f64)> = w.render_slice(&items).map(|s| (s.index, s.top)).collect();
    w.on_scroll(2510.0).unwrap();
    let after: Vec<(usize, f64)> = w.render_slice(&items).map(|s| (s.index, s.top)).collect();
    assert_eq!(before, after);
}

#[test]
fn on_change_fires_after_each_recompute() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut w = ListWindow::new(
        WindowOptions::new(50.0)
            .with_item_count(100)
            .with_viewport_height(400.0)
            .with_on_change(Some({
                let calls = Arc::clone(&calls);
                move |w: &ListWindow| {
                    assert!(w.range().end_index <= w.item_count());
                    calls.fetch_add(1, Ordering::SeqCst);
                }
            })),
    )
    .unwrap();

    w.on_scroll(10.0).unwrap();
    w.on_scroll(10.0).unwrap();
    w.on_viewport_resize(500.0).unwrap();
    w.set_item_count(120).unwrap();
    let _ = w.on_viewport_resize(-1.0);
    assert_eq!(calls.load(Ordering::SeqCst), 4);
}

#[test]
fn disabled_engine_is_inert() {
    let (mut w, fired) = counting_engine(20, 50.0);
    w.set_enabled(false).unwrap();
    assert!(w.window().is_none());
    assert_eq!(w.total_height(), 0.0);
    assert_eq!(w.on_scroll(600.0).unwrap(), Update::NOOP);
    assert!(!w.check_end_reached());
    assert_eq!(w.index_at_offset(0.0), None);
    assert_eq!(fired.load(Ordering::SeqCst), 0);

    // Re-enabling picks up the offset delivered while disabled.
    let u = w.set_enabled(true).unwrap();
    assert!(u.end_reached);
    assert_eq!(w.scroll_offset(), 600.0);
}

#[test]
fn set_overscan_changes_window() {
    let mut w = engine(1000, 50.0, 400.0);
    w.set_overscan(0).unwrap();
    assert_eq!(w.range().end_index, 8);
    assert!(!w.set_overscan(0).unwrap().recomputed);
}

#[test]
fn scroll_to_index_offset_aligns_and_clamps() {
    let mut w = engine(100, 50.0, 400.0);
    assert_eq!(w.scroll_to_index_offset(10, Align::Start), 500.0);
    assert_eq!(w.scroll_to_index_offset(10, Align::End), 150.0);
    assert_eq!(w.scroll_to_index_offset(10, Align::Center), 325.0);
    assert_eq!(w.scroll_to_index_offset(99, Align::Start), 4600.0);
    assert_eq!(w.scroll_to_index_offset(5_000, Align::End), 4600.0);
    assert_eq!(w.scroll_to_index_offset(0, Align::End), 0.0);

    w.on_scroll(500.0).unwrap();
    assert_eq!(w.scroll_to_index_offset(12, Align::Auto), 500.0);
    assert_eq!(w.scroll_to_index_offset(2, Align::Auto), 100.0);
    assert_eq!(w.scroll_to_index_offset(30, Align::Auto), 1150.0);

    let u = w.scroll_to_index(40, Align::Start).unwrap();
    assert!(u.recomputed);
    assert_eq!(w.range().start_index, 40);
    assert_eq!(w.item_top(40), Some(2000.0));
    assert_eq!(w.item_top(100), None);
    assert_eq!(w.index_at_offset(2024.0), Some(40));
}

#[test]
fn viewport_state_snapshot() {
    let mut w = engine(100, 50.0, 400.0);
    w.on_scroll(120.0).unwrap();
    let s = w.viewport_state();
    assert_eq!(
        s,
        ViewportState {
            scroll_offset: 120.0,
            viewport_height: 400.0
        }
    );
    assert_eq!(s.bottom(), 520.0);
}

#[test]
fn window_range_clamp() {
    let r = WindowRange {
        start_index: 5,
        end_index: 12,
    };
    assert_eq!(r.len(), 7);
    assert_eq!(r.clamp_to(8), WindowRange { start_index: 5, end_index: 8 });
    assert_eq!(r.clamp_to(3), WindowRange { start_index: 3, end_index: 3 });
    assert!(WindowRange::EMPTY.is_empty());
}
