use std::fmt;

use serde::{Deserialize, Serialize};

use super::Edge;

/// Emoji reaction tags as defined by the GitHub `ReactionContent` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReactionContent {
    ThumbsUp,
    ThumbsDown,
    Laugh,
    Hooray,
    Confused,
    Heart,
    Rocket,
    Eyes,
    #[serde(other)]
    Unknown,
}

impl ReactionContent {
    pub fn emoji(self) -> &'static str {
        match self {
            Self::ThumbsUp => "👍",
            Self::ThumbsDown => "👎",
            Self::Laugh => "😄",
            Self::Hooray => "🎉",
            Self::Confused => "😕",
            Self::Heart => "❤️",
            Self::Rocket => "🚀",
            Self::Eyes => "👀",
            Self::Unknown => "?",
        }
    }
}

impl fmt::Display for ReactionContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::ThumbsUp => "THUMBS_UP",
            Self::ThumbsDown => "THUMBS_DOWN",
            Self::Laugh => "LAUGH",
            Self::Hooray => "HOORAY",
            Self::Confused => "CONFUSED",
            Self::Heart => "HEART",
            Self::Rocket => "ROCKET",
            Self::Eyes => "EYES",
            Self::Unknown => "UNKNOWN",
        };
        write!(f, "{label}")
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Reaction {
    pub id: String,
    pub content: ReactionContent,
}

/// The last few reactions of an issue; not paginated.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct ReactionConnection {
    pub edges: Vec<Edge<Reaction>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_content_deserializes() {
        let reaction: Reaction =
            serde_json::from_str(r#"{"id": "r1", "content": "THUMBS_UP"}"#).unwrap();
        assert_eq!(reaction.content, ReactionContent::ThumbsUp);
        assert_eq!(reaction.content.to_string(), "THUMBS_UP");
    }

    #[test]
    fn test_unknown_content_does_not_fail() {
        let reaction: Reaction =
            serde_json::from_str(r#"{"id": "r1", "content": "PARTY_PARROT"}"#).unwrap();
        assert_eq!(reaction.content, ReactionContent::Unknown);
    }
}
