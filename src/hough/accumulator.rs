/// Most voted bin of a [`VoteAccumulator`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AccumulatorPeak {
    pub votes: i32,
    /// Center value of the winning bin.
    pub center: f64,
}

/// Bounded histogram over `[min_value, max_value]` used to vote for the
/// semi-minor axis of a candidate ellipse.
///
/// Votes outside the range are dropped silently: most candidate estimates
/// fall outside the physically meaningful axis range. The accumulator
/// remembers the highest bin touched since the last reset, so
/// [`find_max_and_clear`](Self::find_max_and_clear) only scans (and zeroes)
/// the used prefix of the count array.
#[derive(Clone, Debug)]
pub struct VoteAccumulator {
    min_value: f64,
    bin_size: f64,
    counts: Vec<i32>,
    high_water: Option<usize>,
}

impl VoteAccumulator {
    /// Allocates `floor((max_value - min_value) / bin_size) + 1` bins.
    pub fn new(min_value: f64, max_value: f64, bin_size: f64) -> Self {
        assert!(
            bin_size.is_finite() && bin_size > 0.0,
            "accumulator bin size must be positive, got {bin_size}"
        );
        let span = ((max_value - min_value) / bin_size).floor();
        let num_bins = if span.is_finite() && span >= 0.0 {
            span as usize + 1
        } else {
            1
        };
        Self {
            min_value,
            bin_size,
            counts: vec![0; num_bins],
            high_water: None,
        }
    }

    pub fn num_bins(&self) -> usize {
        self.counts.len()
    }

    pub fn bin_size(&self) -> f64 {
        self.bin_size
    }

    #[inline]
    fn bin_index(&self, value: f64) -> Option<usize> {
        let pos = ((value - self.min_value) / self.bin_size).floor();
        // Also rejects NaN.
        if pos >= 0.0 && pos < self.counts.len() as f64 {
            Some(pos as usize)
        } else {
            None
        }
    }

    /// Adds one vote for `value`; out-of-range values are ignored.
    #[inline]
    pub fn add(&mut self, value: f64) {
        if let Some(idx) = self.bin_index(value) {
            self.counts[idx] += 1;
            self.high_water = Some(self.high_water.map_or(idx, |hw| hw.max(idx)));
        }
    }

    /// Returns the most voted bin (lowest index on ties) and resets every
    /// touched bin, leaving the accumulator ready for the next round.
    pub fn find_max_and_clear(&mut self) -> AccumulatorPeak {
        let mut best_votes = 0;
        let mut best_idx = 0;
        if let Some(hw) = self.high_water.take() {
            for (idx, count) in self.counts[..=hw].iter_mut().enumerate() {
                if *count > best_votes {
                    best_votes = *count;
                    best_idx = idx;
                }
                *count = 0;
            }
        }
        AccumulatorPeak {
            votes: best_votes,
            center: self.min_value + (best_idx as f64 + 0.5) * self.bin_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocates_floor_span_plus_one_bins() {
        assert_eq!(VoteAccumulator::new(4.0, 100.0, 0.25).num_bins(), 385);
        assert_eq!(VoteAccumulator::new(0.0, 1.0, 0.3).num_bins(), 4);
        assert_eq!(VoteAccumulator::new(5.0, 5.0, 1.0).num_bins(), 1);
    }

    #[test]
    fn finds_most_populated_bin() {
        let mut acc = VoteAccumulator::new(0.0, 10.0, 1.0);
        for v in [2.1, 2.9, 2.5, 7.0, 7.4, 9.99, 0.0] {
            acc.add(v);
        }
        let peak = acc.find_max_and_clear();
        assert_eq!(peak.votes, 3);
        assert!((peak.center - 2.5).abs() < 1e-12);
    }

    #[test]
    fn ties_resolve_to_lowest_bin() {
        let mut acc = VoteAccumulator::new(0.0, 10.0, 1.0);
        for v in [8.5, 8.6, 3.1, 3.2] {
            acc.add(v);
        }
        let peak = acc.find_max_and_clear();
        assert_eq!(peak.votes, 2);
        assert!((peak.center - 3.5).abs() < 1e-12);
    }

    #[test]
    fn highest_touched_bin_is_scanned() {
        let mut acc = VoteAccumulator::new(0.0, 10.0, 1.0);
        acc.add(1.5);
        acc.add(10.0);
        acc.add(10.0);
        let peak = acc.find_max_and_clear();
        assert_eq!(peak.votes, 2);
        assert!((peak.center - 10.5).abs() < 1e-12);
    }

    #[test]
    fn clear_resets_all_counts() {
        let mut acc = VoteAccumulator::new(1.0, 5.0, 0.5);
        acc.add(2.0);
        acc.add(2.1);
        acc.add(4.2);
        let _ = acc.find_max_and_clear();

        let empty = acc.find_max_and_clear();
        assert_eq!(empty.votes, 0);
        assert!((empty.center - 1.25).abs() < 1e-12);

        // Bins that were not the winner must not leak into the next round.
        acc.add(4.2);
        let peak = acc.find_max_and_clear();
        assert_eq!(peak.votes, 1);
        assert!((peak.center - 4.25).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_votes_are_ignored() {
        let mut acc = VoteAccumulator::new(4.0, 100.0, 0.5);
        for v in [
            -1.0e12,
            3.999,
            100.5,
            1.0e300,
            f64::NAN,
            f64::INFINITY,
            f64::NEG_INFINITY,
        ] {
            acc.add(v);
        }
        let peak = acc.find_max_and_clear();
        assert_eq!(peak.votes, 0);
        assert!((peak.center - 4.25).abs() < 1e-12);

        acc.add(10.1);
        acc.add(-50.0);
        let peak = acc.find_max_and_clear();
        assert_eq!(peak.votes, 1);
        assert!((peak.center - 10.25).abs() < 1e-12);
    }
}
