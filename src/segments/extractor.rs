use super::edge_map::EdgeMap;
use super::options::SegmenterOptions;
use super::segment::{Segment, SegmentId};
use crate::image::EdgeMask;
use crate::types::Point;
use log::debug;
use std::collections::VecDeque;

const NEIGH_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub(super) struct SegmentExtractor {
    edges: EdgeMap,
    min_segment_size: usize,
    queue: VecDeque<usize>,
    region: Vec<usize>,
    segments: Vec<Segment>,
    dropped: usize,
}

impl SegmentExtractor {
    pub(super) fn new(mask: &EdgeMask, options: SegmenterOptions) -> Self {
        Self {
            edges: EdgeMap::from_mask(mask),
            min_segment_size: options.min_segment_size,
            queue: VecDeque::with_capacity(64),
            region: Vec::with_capacity(256),
            segments: Vec::new(),
            dropped: 0,
        }
    }

    pub(super) fn extract(mut self) -> Vec<Segment> {
        while let Some(seed) = self.edges.first_edge() {
            self.flood_fill(seed);
            if self.region.len() > self.min_segment_size {
                let segment = self.build_segment();
                self.segments.push(segment);
            } else {
                self.dropped += 1;
            }
        }
        debug!(
            "segment_edges kept={} dropped={} min_size={}",
            self.segments.len(),
            self.dropped,
            self.min_segment_size
        );
        self.segments
    }

    fn flood_fill(&mut self, seed: usize) {
        let width = self.edges.width();
        let height = self.edges.height();
        self.region.clear();
        self.queue.clear();

        self.edges.set(seed, false);
        self.queue.push_back(seed);

        while let Some(idx) = self.queue.pop_front() {
            self.region.push(idx);
            let x = idx % width;
            let y = idx / width;
            for (dx, dy) in NEIGH_OFFSETS {
                let xn = x as isize + dx;
                let yn = y as isize + dy;
                if xn < 0 || yn < 0 || xn >= width as isize || yn >= height as isize {
                    continue;
                }
                let neighbor_idx = yn as usize * width + xn as usize;
                if self.edges.is_edge(neighbor_idx) {
                    self.edges.set(neighbor_idx, false);
                    self.queue.push_back(neighbor_idx);
                }
            }
        }
    }

    fn build_segment(&self) -> Segment {
        let width = self.edges.width();
        let points = self
            .region
            .iter()
            .map(|&idx| Point::new((idx % width) as f64, (idx / width) as f64))
            .collect();
        Segment::new(SegmentId(self.segments.len() as u32), points)
    }
}
