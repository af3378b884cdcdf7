/// Builder for canonical transcripts.
///
/// Both parties and the verifier must produce byte-identical encodings, so
/// every append is fixed-width big-endian. Action encodings are un-tagged
/// (the wire format is the packed field sequence alone); domain-separated
/// transcripts such as the hand genesis start from
/// [`TranscriptBuilder::with_domain`].
pub struct TranscriptBuilder {
    buffer: Vec<u8>,
}

impl TranscriptBuilder {
    pub fn new() -> Self {
        Self {
            buffer: Vec::with_capacity(128),
        }
    }

    pub fn with_domain(tag: &'static [u8]) -> Self {
        let mut builder = Self::new();
        builder.buffer.extend_from_slice(tag);
        builder
    }

    pub fn append_u8(&mut self, value: u8) {
        self.buffer.push(value);
    }

    pub fn append_u32(&mut self, value: u32) {
        self.buffer.extend_from_slice(&value.to_be_bytes());
    }

    pub fn append_u128(&mut self, value: u128) {
        self.buffer.extend_from_slice(&value.to_be_bytes());
    }

    /// Append fixed-width bytes verbatim, no length prefix.
    pub fn append_raw(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    pub fn finish(self) -> Vec<u8> {
        self.buffer
    }
}

impl Default for TranscriptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Values that can be signed into a canonical transcript.
///
/// The same bytes feed the action hash chain and the host's signature
/// recovery, so chain links and co-signatures cover one encoding. Carrying
/// and verifying the signatures themselves is the host's job.
pub trait Signable {
    /// Append this value's canonical representation into the transcript builder.
    fn write_transcript(&self, builder: &mut TranscriptBuilder);

    /// Obtain canonical signing bytes.
    fn to_signing_bytes(&self) -> Vec<u8> {
        let mut builder = TranscriptBuilder::new();
        self.write_transcript(&mut builder);
        builder.finish()
    }
}
