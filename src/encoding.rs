//! Phred score tables for the Sanger (Phred+33) and Illumina 1.3-1.7 (Phred+64) encodings.
//!
//! Both tables are built at compile time; [`EncodingTable::get`] hands out the
//! shared instance.

use crate::error::EncodingError;

/// Highest Phred score representable in Sanger encoding (`'~'`).
pub const MAX_SCORE: u8 = 93;
/// Highest Phred score representable in Illumina 1.3-1.7 encoding (`'~'`).
pub const MAX_ILLUMINA_SCORE: u8 = 62;

const SANGER_OFFSET: u8 = 33;
const ILLUMINA_OFFSET: u8 = 64;

/// Quality string encodings understood by the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QualityEncoding {
    /// Phred+33 (Sanger / Illumina 1.8+).
    #[default]
    Sanger,
    /// Phred+64 (Illumina 1.3-1.7).
    Illumina13,
}

impl QualityEncoding {
    pub fn offset(self) -> u8 {
        match self {
            QualityEncoding::Sanger => SANGER_OFFSET,
            QualityEncoding::Illumina13 => ILLUMINA_OFFSET,
        }
    }

    pub fn max_score(self) -> u8 {
        match self {
            QualityEncoding::Sanger => MAX_SCORE,
            QualityEncoding::Illumina13 => MAX_ILLUMINA_SCORE,
        }
    }

    /// Re-encode a quality string in this encoding as Sanger.
    ///
    /// Sanger input is returned unchanged once every byte is checked to be in range.
    pub fn to_sanger(self, qual: &[u8]) -> Result<Vec<u8>, EncodingError> {
        let table = EncodingTable::get();
        match self {
            QualityEncoding::Sanger => {
                for (pos, &byte) in qual.iter().enumerate() {
                    table
                        .sanger_to_score(byte)
                        .ok_or(EncodingError::NotSanger { pos, byte })?;
                }
                Ok(qual.to_vec())
            }
            QualityEncoding::Illumina13 => table.convert_illumina_to_sanger(qual),
        }
    }
}

/// Bidirectional score/character mapping.
#[derive(Debug)]
pub struct EncodingTable {
    score_to_sanger: [u8; MAX_SCORE as usize + 1],
    // indexed by ASCII byte; `None` outside '@'..='~'
    illumina_to_score: [Option<u8>; 128],
}

static TABLE: EncodingTable = EncodingTable::build();

impl EncodingTable {
    const fn build() -> Self {
        let mut score_to_sanger = [0u8; MAX_SCORE as usize + 1];
        let mut s = 0;
        while s <= MAX_SCORE as usize {
            score_to_sanger[s] = s as u8 + SANGER_OFFSET;
            s += 1;
        }

        let mut illumina_to_score = [None; 128];
        let mut c = ILLUMINA_OFFSET as usize;
        while c <= b'~' as usize {
            illumina_to_score[c] = Some(c as u8 - ILLUMINA_OFFSET);
            c += 1;
        }

        Self {
            score_to_sanger,
            illumina_to_score,
        }
    }

    #[inline]
    pub fn get() -> &'static EncodingTable {
        &TABLE
    }

    /// Sanger character for a Phred score in `0..=93`.
    #[inline]
    pub fn score_to_char(&self, score: u8) -> Result<u8, EncodingError> {
        self.score_to_sanger
            .get(score as usize)
            .copied()
            .ok_or(EncodingError::ScoreOutOfRange { score })
    }

    #[inline]
    pub fn sanger_to_score(&self, byte: u8) -> Option<u8> {
        (SANGER_OFFSET..=SANGER_OFFSET + MAX_SCORE)
            .contains(&byte)
            .then(|| byte - SANGER_OFFSET)
    }

    #[inline]
    pub fn illumina_to_score(&self, byte: u8) -> Option<u8> {
        self.illumina_to_score.get(byte as usize).copied().flatten()
    }

    /// Translate a whole Illumina 1.3-1.7 quality string to Sanger.
    ///
    /// Fails on the first byte outside `'@'..='~'`; nothing is returned in that case.
    pub fn convert_illumina_to_sanger(&self, qual: &[u8]) -> Result<Vec<u8>, EncodingError> {
        qual.iter()
            .enumerate()
            .map(|(pos, &byte)| {
                let score = self
                    .illumina_to_score(byte)
                    .ok_or(EncodingError::UnrecognizedChar { pos, byte })?;
                self.score_to_char(score)
            })
            .collect()
    }
}

/// Shorthand for [`EncodingTable::score_to_char`] on the shared table.
pub fn score_to_char(score: u8) -> Result<u8, EncodingError> {
    EncodingTable::get().score_to_char(score)
}

/// Shorthand for [`EncodingTable::convert_illumina_to_sanger`] on the shared table.
pub fn convert_illumina_to_sanger(qual: &[u8]) -> Result<Vec<u8>, EncodingError> {
    EncodingTable::get().convert_illumina_to_sanger(qual)
}
