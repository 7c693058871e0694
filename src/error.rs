use std::fmt;

/// Errors surfaced by the rendering API.
///
/// The live playback surface never returns these: sound is a non-essential
/// enhancement, so playback converts every failure into a logged no-op.
#[derive(Debug, Clone, PartialEq)]
pub enum RaceCueError {
    /// The requested cue id is not in the catalogue.
    UnknownCue { id: String },
    /// The host audio subsystem is missing or refused to open a stream.
    AudioUnavailable { reason: String },
}

impl fmt::Display for RaceCueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RaceCueError::UnknownCue { id } => write!(f, "Unknown cue id '{id}'"),
            RaceCueError::AudioUnavailable { reason } => {
                write!(f, "Audio output unavailable: {reason}")
            }
        }
    }
}

impl std::error::Error for RaceCueError {}
