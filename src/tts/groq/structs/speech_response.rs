use bytes::Bytes;

/// Raw audio payload, encoded as the request's `response_format`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechResponse {
    pub audio: Bytes,
}

impl SpeechResponse {
    pub fn new(audio: impl Into<Bytes>) -> Self {
        Self {
            audio: audio.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.audio.len()
    }

    pub fn is_empty(&self) -> bool {
        self.audio.is_empty()
    }
}
