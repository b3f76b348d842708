//! Property tests for geometry, clipping, dirty-rect merging and encoding.

use proptest::prelude::*;
use spark_grid::backend::HeadlessBackend;
use spark_grid::{Color, DrawContext, GlyphSet, InvalidationQueue, Rect, Screen, ScreenEncoder, Size};

// ── Helpers ─────────────────────────────────────────────────────────────

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (-20i32..20, -20i32..20, 0i32..15, 0i32..15).prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn solid_rect_strategy() -> impl Strategy<Value = Rect> {
    (-20i32..20, -20i32..20, 1i32..15, 1i32..15).prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn covers(outer: &Rect, inner: &Rect) -> bool {
    outer.x <= inner.x && outer.y <= inner.y && outer.x1() >= inner.x1() && outer.y1() >= inner.y1()
}

// ── Geometry ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn union_contains_both_and_is_minimal(a in solid_rect_strategy(), b in solid_rect_strategy()) {
        let u = a.union(&b);
        prop_assert!(covers(&u, &a));
        prop_assert!(covers(&u, &b));

        // Every edge of the union is an edge of one of the inputs, so no
        // smaller rect can contain both.
        prop_assert!(u.x == a.x || u.x == b.x);
        prop_assert!(u.y == a.y || u.y == b.y);
        prop_assert!(u.x1() == a.x1() || u.x1() == b.x1());
        prop_assert!(u.y1() == a.y1() || u.y1() == b.y1());
    }

    #[test]
    fn intersects_is_symmetric(a in rect_strategy(), b in rect_strategy()) {
        prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        prop_assert!(a.intersects(&a));
    }
}

// ── Invalidation ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn queue_covers_every_invalidated_rect(rects in prop::collection::vec(solid_rect_strategy(), 1..20)) {
        let mut queue = InvalidationQueue::new();
        for rect in &rects {
            queue.invalidate_rect(*rect);
        }
        prop_assert!(queue.len() <= rects.len());
        for rect in &rects {
            prop_assert!(queue.rects().iter().any(|q| covers(q, rect)), "{:?} not covered", rect);
        }
    }
}

// ── Clipping ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn cell_drawn_iff_inside_clip(
        pass in (0i32..30, 0i32..30, 0i32..30, 0i32..30),
        transform in (-10i32..20, -10i32..20),
        clip in rect_strategy(),
        fill in (0i32..20, 0i32..20),
    ) {
        let mut backend = HeadlessBackend::new(Size::new(30, 30));
        let pass_rect = Rect::new(pass.0, pass.1, pass.2, pass.3);
        let clip_rect = clip.offset(transform.0, transform.1);
        let fill_rect = Rect::new(transform.0, transform.1, fill.0, fill.1);

        let mut ctx = DrawContext::begin(&mut backend, pass_rect);
        ctx.push_transform(transform.0, transform.1);
        ctx.push_clip(clip.x, clip.y, clip.width, clip.height);
        ctx.fill(0, 0, fill.0, fill.1, '#');
        ctx.end().unwrap();

        for y in 0..30 {
            for x in 0..30 {
                let expected = pass_rect.contains_point(x, y)
                    && clip_rect.contains_point(x, y)
                    && fill_rect.contains_point(x, y);
                prop_assert_eq!(backend.cell(x, y).is_some(), expected, "cell ({}, {})", x, y);
            }
        }
    }
}

// ── Encoding ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn contiguous_run_costs_one_move_and_one_color(x in 0i32..100, y in 0i32..100, n in 1usize..60) {
        let mut encoder = ScreenEncoder::new(Vec::new(), GlyphSet::Unicode);
        encoder.begin_draw();
        for i in 0..n {
            encoder.set_char('a', Color::CYAN, Color::BLUE, x + i as i32, y);
        }
        encoder.end_draw().unwrap();

        let expected = format!("\x1b[{};{}H\x1b[36;44m{}", y + 1, x + 1, "a".repeat(n));
        prop_assert_eq!(String::from_utf8(encoder.sink().clone()).unwrap(), expected);
    }
}
