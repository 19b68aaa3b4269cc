use phred_trim::{
    EncodingError, QualityEncoding, ReadState, TrimError, TrimOptions, TrimStep, ValidationError,
    trim_read,
};

#[test]
fn default_options_trim_both_ends() {
    let opts = TrimOptions::default();
    assert_eq!(opts.score, 20);
    assert_eq!(opts.encoding, QualityEncoding::Sanger);

    let out = trim_read(b"AACCGGTT", b"!!IIII!!", &opts).unwrap();
    assert_eq!(
        out,
        Some(ReadState {
            seq: b"CCGG".to_vec(),
            qual: b"IIII".to_vec(),
        })
    );
}

#[test]
fn illumina_input_converted_before_trimming() {
    let opts = TrimOptions {
        encoding: QualityEncoding::Illumina13,
        ..TrimOptions::default()
    };
    let out = trim_read(b"AACCGGTT", b"@@hhhh@@", &opts).unwrap().unwrap();
    assert_eq!(out.seq, b"CCGG");
    assert_eq!(out.qual, b"IIII");
}

#[test]
fn wrong_encoding_reported() {
    let opts = TrimOptions {
        encoding: QualityEncoding::Illumina13,
        ..TrimOptions::default()
    };
    let err = trim_read(b"ACGT", b"!III", &opts).unwrap_err();
    assert!(matches!(
        err,
        TrimError::Encoding(EncodingError::UnrecognizedChar { pos: 0, byte: b'!' })
    ));
}

#[test]
fn bad_score_reported() {
    let opts = TrimOptions {
        score: 94,
        ..TrimOptions::default()
    };
    assert_eq!(
        opts.validate(),
        Err(ValidationError::ScoreOutOfRange { score: 94 })
    );
    let err = trim_read(b"ACGT", b"IIII", &opts).unwrap_err();
    assert!(matches!(err, TrimError::Validation(_)));
}

#[test]
fn mismatched_record_reported() {
    let err = trim_read(b"ACGT", b"II", &TrimOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        TrimError::Validation(ValidationError::LengthMismatch { seq: 4, qual: 2 })
    ));
}

#[test]
fn step_order_matters() {
    let seq = b"ACGTAC";
    let qual = b"!!IIII";

    let filter_first = TrimOptions {
        steps: vec![TrimStep::MinLength(6), TrimStep::FivePrime { crawl: 0 }],
        ..TrimOptions::default()
    };
    let out = trim_read(seq, qual, &filter_first).unwrap().unwrap();
    assert_eq!(out.len(), 4);

    let trim_first = TrimOptions {
        steps: vec![TrimStep::FivePrime { crawl: 0 }, TrimStep::MinLength(6)],
        ..TrimOptions::default()
    };
    assert_eq!(trim_read(seq, qual, &trim_first).unwrap(), None);
}

#[test]
fn global_step() {
    let opts = TrimOptions {
        steps: vec![TrimStep::Global { max_failing: 1 }],
        ..TrimOptions::default()
    };
    let out = trim_read(b"ACGTAC", b"III!II", &opts).unwrap().unwrap();
    assert_eq!(out.seq, b"ACG");
}

#[test]
fn fully_trimmed_read_is_dropped() {
    let out = trim_read(b"ACGT", b"!!!!", &TrimOptions::default()).unwrap();
    assert_eq!(out, None);
}
