use super::*;
use crate::image::EdgeMask;
use std::collections::HashSet;

fn cell(p: &crate::types::Point) -> (usize, usize) {
    (p.x as usize, p.y as usize)
}

fn square_outline(mask: &mut EdgeMask, x0: usize, y0: usize, side: usize) {
    for i in 0..side {
        mask.set(x0 + i, y0, true);
        mask.set(x0 + i, y0 + side - 1, true);
        mask.set(x0, y0 + i, true);
        mask.set(x0 + side - 1, y0 + i, true);
    }
}

#[test]
fn empty_and_zero_sized_masks_produce_no_segments() {
    let opts = SegmenterOptions::default().with_min_segment_size(0);
    assert!(segment_edges(&EdgeMask::new(0, 0), opts).is_empty());
    assert!(segment_edges(&EdgeMask::new(0, 7), opts).is_empty());
    assert!(segment_edges(&EdgeMask::new(16, 16), opts).is_empty());
}

#[test]
fn diagonal_neighbours_join_one_segment() {
    let mask = EdgeMask::from_fn(8, 8, |x, y| x == y);
    let segs = segment_edges(&mask, SegmenterOptions::default().with_min_segment_size(0));
    assert_eq!(segs.len(), 1, "diagonal line must be 8-connected");
    assert_eq!(segs[0].len(), 8);
}

#[test]
fn small_components_are_dropped_not_merged() {
    let mut mask = EdgeMask::new(40, 20);
    square_outline(&mut mask, 1, 1, 10); // 36 px
    square_outline(&mut mask, 20, 2, 4); // 12 px
    mask.set(35, 15, true); // 1 px

    let segs = segment_edges(&mask, SegmenterOptions::default().with_min_segment_size(12));
    assert_eq!(segs.len(), 1, "only the large outline exceeds the size gate");
    assert_eq!(segs[0].len(), 36);
    assert!(segs[0].points.iter().all(|p| p.x < 12.0));

    // The gate is strict: a segment of exactly min_size is dropped.
    let segs = segment_edges(&mask, SegmenterOptions::default().with_min_segment_size(11));
    assert_eq!(segs.len(), 2);
}

#[test]
fn segments_partition_the_surviving_edge_cells() {
    let mut mask = EdgeMask::new(48, 32);
    square_outline(&mut mask, 2, 2, 12);
    square_outline(&mut mask, 20, 4, 9);
    square_outline(&mut mask, 34, 18, 3);
    for x in 0..48 {
        mask.set(x, 30, true);
    }

    let min_size = 10;
    let segs = segment_edges(&mask, SegmenterOptions::default().with_min_segment_size(min_size));
    assert_eq!(segs.len(), 3);

    let mut seen = HashSet::new();
    for seg in &segs {
        assert!(seg.len() > min_size);
        for p in &seg.points {
            assert!(mask.get(p.x as usize, p.y as usize), "non-edge point {:?}", p);
            assert!(seen.insert(cell(p)), "point {:?} appears in two segments", p);
        }
        assert_internally_connected(seg);
    }

    let small_square: HashSet<(usize, usize)> = (0..48)
        .flat_map(|x| (0..32).map(move |y| (x, y)))
        .filter(|&(x, y)| (34..37).contains(&x) && (18..21).contains(&y) && mask.get(x, y))
        .collect();
    let expected = mask.edge_count() - small_square.len();
    assert_eq!(seen.len(), expected);
}

#[test]
fn segmentation_is_deterministic() {
    let mut mask = EdgeMask::new(30, 30);
    square_outline(&mut mask, 3, 3, 8);
    square_outline(&mut mask, 15, 15, 10);
    let opts = SegmenterOptions::default().with_min_segment_size(5);
    let first = segment_edges(&mask, opts);
    let second = segment_edges(&mask, opts);
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.points, b.points);
    }
    // Seeds are taken in row-major order, so the upper square comes first.
    assert_eq!(first[0].id, SegmentId(0));
    assert_eq!(first[0].points[0], crate::types::Point::new(3.0, 3.0));
}

fn assert_internally_connected(seg: &Segment) {
    let cells: HashSet<(usize, usize)> = seg.points.iter().map(cell).collect();
    let start = cell(&seg.points[0]);
    let mut reached = HashSet::from([start]);
    let mut stack = vec![start];
    while let Some((x, y)) = stack.pop() {
        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx < 0 || ny < 0 {
                    continue;
                }
                let n = (nx as usize, ny as usize);
                if cells.contains(&n) && reached.insert(n) {
                    stack.push(n);
                }
            }
        }
    }
    assert_eq!(reached.len(), cells.len(), "segment {:?} is not 8-connected", seg.id);
}
