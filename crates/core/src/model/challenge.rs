use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Marker used in challenge text to denote a fill-in blank.
pub const BLANK_MARKER: &str = "___";

//
// ─── CHALLENGE TYPES ───────────────────────────────────────────────────────────
//

/// The medium a challenge is sourced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeKind {
    Article,
    Video,
}

impl ChallengeKind {
    /// Human-facing activity label ("Reading" / "Watching").
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Article => "Reading",
            Self::Video => "Watching",
        }
    }

    #[must_use]
    pub fn all() -> &'static [ChallengeKind] {
        &[Self::Article, Self::Video]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    #[must_use]
    pub fn all() -> &'static [Difficulty] {
        &[Self::Easy, Self::Medium, Self::Hard]
    }
}

/// Attribution for the article or video a challenge is drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    pub title: String,
    pub author: String,
    pub url: Option<String>,
}

impl SourceRef {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        url: Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            url,
        }
    }
}

//
// ─── DRAFT AND VALIDATION ──────────────────────────────────────────────────────
//

/// Unvalidated challenge input, as authored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeDraft {
    pub kind: ChallengeKind,
    pub text: String,
    pub blanks: Vec<String>,
    pub hints: Vec<String>,
    pub source: SourceRef,
    pub media_path: Option<String>,
    pub difficulty: Difficulty,
}

impl ChallengeDraft {
    /// Validate the draft into a [`Challenge`].
    ///
    /// # Errors
    ///
    /// Returns `ChallengeValidationError` if the blank/hint counts do not
    /// match the markers in the text, an expected answer is blank, or the
    /// media path does not agree with the challenge kind.
    pub fn validate(self) -> Result<Challenge, ChallengeValidationError> {
        let markers = self.text.matches(BLANK_MARKER).count();
        if markers != self.blanks.len() {
            return Err(ChallengeValidationError::BlankCountMismatch {
                markers,
                blanks: self.blanks.len(),
            });
        }
        if self.hints.len() != self.blanks.len() {
            return Err(ChallengeValidationError::HintCountMismatch {
                blanks: self.blanks.len(),
                hints: self.hints.len(),
            });
        }
        if let Some(index) = self.blanks.iter().position(|b| b.trim().is_empty()) {
            return Err(ChallengeValidationError::EmptyBlank { index });
        }
        match (self.kind, &self.media_path) {
            (ChallengeKind::Video, None) => {
                return Err(ChallengeValidationError::MissingMediaPath);
            }
            (ChallengeKind::Article, Some(_)) => {
                return Err(ChallengeValidationError::UnexpectedMediaPath);
            }
            _ => {}
        }

        Ok(Challenge {
            kind: self.kind,
            text: self.text,
            blanks: self.blanks,
            hints: self.hints,
            source: self.source,
            media_path: self.media_path,
            difficulty: self.difficulty,
        })
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChallengeValidationError {
    #[error("text has {markers} blank markers but {blanks} expected answers")]
    BlankCountMismatch { markers: usize, blanks: usize },

    #[error("{blanks} expected answers but {hints} hints")]
    HintCountMismatch { blanks: usize, hints: usize },

    #[error("expected answer for blank {index} is empty")]
    EmptyBlank { index: usize },

    #[error("video challenges require a media path")]
    MissingMediaPath,

    #[error("article challenges must not carry a media path")]
    UnexpectedMediaPath,
}

//
// ─── CHALLENGE ─────────────────────────────────────────────────────────────────
//

/// A validated fill-in-the-blank exercise.
///
/// Every `Challenge` upholds `blanks.len() == hints.len() ==` the number of
/// [`BLANK_MARKER`] occurrences in `text`, so blank indices can be used
/// interchangeably across all three.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    kind: ChallengeKind,
    text: String,
    blanks: Vec<String>,
    hints: Vec<String>,
    source: SourceRef,
    media_path: Option<String>,
    difficulty: Difficulty,
}

impl Challenge {
    #[must_use]
    pub fn kind(&self) -> ChallengeKind {
        self.kind
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn blanks(&self) -> &[String] {
        &self.blanks
    }

    #[must_use]
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    #[must_use]
    pub fn source(&self) -> &SourceRef {
        &self.source
    }

    #[must_use]
    pub fn media_path(&self) -> Option<&str> {
        self.media_path.as_deref()
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Number of blanks to fill.
    #[must_use]
    pub fn blank_count(&self) -> usize {
        self.blanks.len()
    }

    /// The hint aligned with the given blank, if the index is in range.
    #[must_use]
    pub fn hint(&self, blank: usize) -> Option<&str> {
        self.hints.get(blank).map(String::as_str)
    }

    /// Text split on the blank marker, for interleaved rendering:
    /// segment, input, segment, input, ..., segment.
    ///
    /// Always yields `blank_count() + 1` segments (possibly empty).
    #[must_use]
    pub fn segments(&self) -> Vec<&str> {
        self.text.split(BLANK_MARKER).collect()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
