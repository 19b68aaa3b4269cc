use crate::encoding::EncodingTable;
use crate::error::{Field, ValidationError};
use crate::record::ReadState;

/// Index at which the kept part of a read begins after 5' trimming.
///
/// The first base with quality `>= threshold` is the pass point. With `crawl > 0`
/// the next `crawl` bases are inspected too, and the start moves past the last one
/// that falls below the threshold. The window stops at the end of the read.
///
/// Returns `None` when no base passes.
pub fn five_prime_start(qual: &[u8], threshold: u8, crawl: usize) -> Option<usize> {
    let pass = qual.iter().position(|&q| q >= threshold)?;
    let window_start = pass + 1;
    let window_end = window_start.saturating_add(crawl).min(qual.len());
    let start = qual[window_start..window_end]
        .iter()
        .rposition(|&q| q < threshold)
        .map_or(pass, |k| window_start + k + 1);
    Some(start)
}

/// Exclusive end of the kept part of a read after 3' trimming.
///
/// Mirror of [`five_prime_start`]: the pass point is the last base with quality
/// `>= threshold`, and the crawl window covers the `crawl` bases before it.
pub fn three_prime_end(qual: &[u8], threshold: u8, crawl: usize) -> Option<usize> {
    let pass = qual.iter().rposition(|&q| q >= threshold)?;
    let window_start = pass.saturating_sub(crawl);
    let end = qual[window_start..pass]
        .iter()
        .position(|&q| q < threshold)
        .map_or(pass + 1, |k| window_start + k);
    Some(end)
}

/// Clip point for a global trim: the index of the first failing base, if at least
/// `max_failing` bases fall below `threshold`. `None` leaves the read as is.
pub fn global_clip(qual: &[u8], threshold: u8, max_failing: usize) -> Option<usize> {
    let mut failing = qual
        .iter()
        .enumerate()
        .filter(|&(_, &q)| q < threshold)
        .map(|(i, _)| i);
    let first = failing.next()?;
    let count = 1 + failing.count();
    (count >= max_failing).then_some(first)
}

/// Quality trimmer for a single read.
///
/// Each trim call updates the read in place; sequence and quality only ever
/// shrink together. A discarded read (no passing base, or shorter than a
/// minimum length) stays discarded and later trim calls leave it alone.
#[derive(Debug, Clone)]
pub struct ReadTrimmer {
    state: Option<ReadState>,
    threshold: u8,
}

impl ReadTrimmer {
    /// Validate a read and derive the Sanger threshold character from `score`.
    ///
    /// `seq` and `qual` must be printable ASCII of equal length and `score` must be
    /// in `0..=93`. `qual` is expected to be Sanger encoded already.
    pub fn new(
        seq: impl Into<Vec<u8>>,
        qual: impl Into<Vec<u8>>,
        score: u8,
    ) -> Result<Self, ValidationError> {
        let seq = seq.into();
        let qual = qual.into();
        check_printable(Field::Sequence, &seq)?;
        check_printable(Field::Quality, &qual)?;
        if seq.len() != qual.len() {
            return Err(ValidationError::LengthMismatch {
                seq: seq.len(),
                qual: qual.len(),
            });
        }
        let threshold = EncodingTable::get()
            .score_to_char(score)
            .map_err(|_| ValidationError::ScoreOutOfRange { score })?;

        Ok(Self {
            state: Some(ReadState { seq, qual }),
            threshold,
        })
    }

    /// Same as [`ReadTrimmer::new`] for an already assembled record.
    pub fn from_state(state: ReadState, score: u8) -> Result<Self, ValidationError> {
        Self::new(state.seq, state.qual, score)
    }

    /// Sanger character a base must reach to pass.
    #[inline]
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    #[inline]
    pub fn is_discarded(&self) -> bool {
        self.state.is_none()
    }

    /// Current read without the empty-read coercion done by [`ReadTrimmer::retrieve`].
    #[inline]
    pub fn state(&self) -> Option<&ReadState> {
        self.state.as_ref()
    }

    /// Trim low-quality bases from the 5' end.
    pub fn five_prime(&mut self, crawl: usize) {
        let threshold = self.threshold;
        let Some(state) = self.state.as_mut() else {
            return;
        };
        match five_prime_start(&state.qual, threshold, crawl) {
            Some(start) => {
                log::trace!("5' trim at {start} of {} (crawl {crawl})", state.len());
                let end = state.len();
                state.keep(start, end);
            }
            None => self.discard("no base passes 5' threshold"),
        }
    }

    /// Trim low-quality bases from the 3' end.
    pub fn three_prime(&mut self, crawl: usize) {
        let threshold = self.threshold;
        let Some(state) = self.state.as_mut() else {
            return;
        };
        match three_prime_end(&state.qual, threshold, crawl) {
            Some(end) => {
                log::trace!("3' trim at {end} of {} (crawl {crawl})", state.len());
                state.keep(0, end);
            }
            None => self.discard("no base passes 3' threshold"),
        }
    }

    /// Clip the read from its first failing base onward when at least
    /// `max_failing` bases are below the threshold.
    pub fn global_trim(&mut self, max_failing: usize) {
        let threshold = self.threshold;
        let Some(state) = self.state.as_mut() else {
            return;
        };
        if let Some(clip) = global_clip(&state.qual, threshold, max_failing) {
            log::debug!("global trim clips read of {} at {clip}", state.len());
            state.keep(0, clip);
        }
    }

    /// Discard the read if it is shorter than `length`.
    pub fn min_length(&mut self, length: usize) {
        if self.state.as_ref().is_some_and(|s| s.len() < length) {
            self.discard("read below minimum length");
        }
    }

    /// Current sequence and quality, or `None` once the read is discarded.
    ///
    /// A zero-length read is discarded here. Calling this repeatedly does not
    /// change the result.
    pub fn retrieve(&mut self) -> Option<(&[u8], &[u8])> {
        if self.state.as_ref().is_some_and(ReadState::is_empty) {
            self.discard("empty read");
        }
        self.state
            .as_ref()
            .map(|s| (s.seq.as_slice(), s.qual.as_slice()))
    }

    /// Consume the trimmer, applying the same empty-read rule as [`ReadTrimmer::retrieve`].
    pub fn into_state(self) -> Option<ReadState> {
        self.state.filter(|s| !s.is_empty())
    }

    fn discard(&mut self, reason: &str) {
        log::debug!("discarding read: {reason}");
        self.state = None;
    }
}

fn check_printable(field: Field, bytes: &[u8]) -> Result<(), ValidationError> {
    match bytes.iter().position(|b| !b.is_ascii_graphic()) {
        Some(pos) => Err(ValidationError::NotPrintable {
            field,
            pos,
            byte: bytes[pos],
        }),
        None => Ok(()),
    }
}
