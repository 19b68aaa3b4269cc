//! Quality-based trimming of single FASTQ reads.
//!
//! - Phred+64 (Illumina 1.3-1.7) to Phred+33 (Sanger) quality conversion.
//! - 5' and 3' end trimming against a Phred threshold, with an optional crawl window.
//! - Global trim on the number of failing bases, and a minimum-length filter.
//! - Errors are returned, never fatal; a discarded read comes back as `None`.
//!
//! Parsing and writing FASTQ is left to the caller.

pub mod encoding;
pub mod error;
pub mod policy;
pub mod record;
pub mod trim;

pub use crate::encoding::{
    EncodingTable, MAX_SCORE, QualityEncoding, convert_illumina_to_sanger, score_to_char,
};
pub use crate::error::{EncodingError, Field, TrimError, ValidationError};
pub use crate::policy::{TrimOptions, TrimStep, trim_read};
pub use crate::record::ReadState;
pub use crate::trim::ReadTrimmer;
