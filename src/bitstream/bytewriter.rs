use super::bitseq::BitSequence;

/// Builds the output bytes of a HEF container. Every section of the container starts on a
/// byte boundary, so bit sequences are written padded to a whole byte.
pub struct ByteWriter {
    pub output: Vec<u8>,
}

impl ByteWriter {
    /// Create a new ByteWriter with an output buffer of the size specified.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
        }
    }

    /// Put a byte on the stream.
    pub fn out8(&mut self, data: u8) {
        self.output.push(data);
    }

    /// Put a run of bytes on the stream.
    pub fn out_bytes(&mut self, data: &[u8]) {
        self.output.extend_from_slice(data);
    }

    /// Put every bit of a bit sequence on the stream, most significant first, padding the
    /// last byte with 0s.
    pub fn out_seq(&mut self, seq: &BitSequence) {
        self.output.extend_from_slice(&seq.to_bytes());
    }

    /// Number of bytes output so far
    pub fn loc(&self) -> usize {
        self.output.len()
    }
}
