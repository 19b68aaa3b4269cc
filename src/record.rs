/// Sequence and Sanger quality bytes of one read. Both always have the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadState {
    pub seq: Vec<u8>,
    pub qual: Vec<u8>,
}

impl ReadState {
    #[inline]
    pub fn len(&self) -> usize {
        self.seq.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Keep `start..end` of both sequence and quality.
    pub(crate) fn keep(&mut self, start: usize, end: usize) {
        self.seq.truncate(end);
        self.qual.truncate(end);
        self.seq.drain(..start);
        self.qual.drain(..start);
    }
}
