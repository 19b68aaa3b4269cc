use crate::encoding::{MAX_SCORE, QualityEncoding};
use crate::error::{TrimError, ValidationError};
use crate::record::ReadState;
use crate::trim::ReadTrimmer;

/// One trimming operation. Steps compose on the result of the previous one,
/// so their order matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimStep {
    /// Trim from the 5' end with the given crawl window.
    FivePrime { crawl: usize },
    /// Trim from the 3' end with the given crawl window.
    ThreePrime { crawl: usize },
    /// Clip from the first failing base when at least `max_failing` bases fail.
    Global { max_failing: usize },
    /// Discard reads shorter than this.
    MinLength(usize),
}

impl TrimStep {
    pub fn apply(self, trimmer: &mut ReadTrimmer) {
        match self {
            TrimStep::FivePrime { crawl } => trimmer.five_prime(crawl),
            TrimStep::ThreePrime { crawl } => trimmer.three_prime(crawl),
            TrimStep::Global { max_failing } => trimmer.global_trim(max_failing),
            TrimStep::MinLength(length) => trimmer.min_length(length),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TrimOptions {
    /// Minimum Phred score a base needs to pass.
    pub score: u8,
    /// Encoding of incoming quality strings.
    pub encoding: QualityEncoding,
    pub steps: Vec<TrimStep>,
}

impl Default for TrimOptions {
    fn default() -> Self {
        Self {
            score: 20,
            encoding: QualityEncoding::Sanger,
            steps: vec![
                TrimStep::FivePrime { crawl: 0 },
                TrimStep::ThreePrime { crawl: 0 },
            ],
        }
    }
}

impl TrimOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.score > MAX_SCORE {
            return Err(ValidationError::ScoreOutOfRange { score: self.score });
        }
        Ok(())
    }
}

/// Run one read through encoding conversion and every configured step.
///
/// `Ok(None)` means the read was discarded and should be dropped from output.
/// Errors leave nothing behind; callers processing many reads can skip the
/// offending record and carry on.
pub fn trim_read(
    seq: &[u8],
    qual: &[u8],
    opts: &TrimOptions,
) -> Result<Option<ReadState>, TrimError> {
    opts.validate()?;
    let qual = opts.encoding.to_sanger(qual)?;
    let mut trimmer = ReadTrimmer::new(seq, qual, opts.score)?;
    for step in &opts.steps {
        step.apply(&mut trimmer);
    }
    Ok(trimmer.into_state())
}
