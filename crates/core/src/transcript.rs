//! Conversation transcript types.

use cross_intelligence_model::TranscriptEntry;

/// An ordered, append-only log of conversation entries.
///
/// Entries are never reordered or removed; a session's transcript grows
/// monotonically for its lifetime. Conversations in this domain are
/// short-lived, so there is no summarization or truncation.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    /// Appends an entry to the end of the transcript.
    #[inline]
    pub fn append(&mut self, entry: TranscriptEntry) {
        self.entries.push(entry);
    }

    /// Produces a point-in-time copy of all entries appended so far.
    #[inline]
    pub fn snapshot(&self) -> Vec<TranscriptEntry> {
        self.entries.clone()
    }

    /// Returns a view of the recorded entries.
    #[inline]
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// Returns the number of recorded entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been recorded yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut transcript = Transcript::default();
        transcript.append(TranscriptEntry::User("first".to_owned()));
        transcript.append(TranscriptEntry::Assistant("second".to_owned()));

        assert_eq!(transcript.len(), 2);
        assert_eq!(
            transcript.entries(),
            [
                TranscriptEntry::User("first".to_owned()),
                TranscriptEntry::Assistant("second".to_owned()),
            ]
        );
    }

    #[test]
    fn test_snapshot_is_point_in_time() {
        let mut transcript = Transcript::default();
        transcript.append(TranscriptEntry::User("first".to_owned()));

        let snapshot = transcript.snapshot();
        transcript.append(TranscriptEntry::Assistant("second".to_owned()));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(transcript.len(), 2);
    }
}
