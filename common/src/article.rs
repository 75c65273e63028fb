use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::RecordError;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(pub String);

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Topic bucket for the learning hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleCategory {
    Basics,
    Recipes,
    Science,
    Sustainability,
}

impl ArticleCategory {
    pub const ALL: [ArticleCategory; 4] = [
        ArticleCategory::Basics,
        ArticleCategory::Recipes,
        ArticleCategory::Science,
        ArticleCategory::Sustainability,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ArticleCategory::Basics => "basics",
            ArticleCategory::Recipes => "recipes",
            ArticleCategory::Science => "science",
            ArticleCategory::Sustainability => "sustainability",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ArticleCategory::Basics => "Basics",
            ArticleCategory::Recipes => "Recipes",
            ArticleCategory::Science => "Science",
            ArticleCategory::Sustainability => "Sustainability",
        }
    }
}

impl FromStr for ArticleCategory {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArticleCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| RecordError::UnknownVariant {
                kind: "article category",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleDifficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl ArticleDifficulty {
    pub fn label(self) -> &'static str {
        match self {
            ArticleDifficulty::Beginner => "Beginner",
            ArticleDifficulty::Intermediate => "Intermediate",
            ArticleDifficulty::Advanced => "Advanced",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            ArticleDifficulty::Beginner => "bg-green-100 text-green-700",
            ArticleDifficulty::Intermediate => "bg-yellow-100 text-yellow-700",
            ArticleDifficulty::Advanced => "bg-red-100 text-red-700",
        }
    }
}

/// A learning-hub entry. `body` is markdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub description: String,
    pub category: ArticleCategory,
    /// Minutes.
    pub read_time: u32,
    pub difficulty: ArticleDifficulty,
    /// Emoji shown as the card illustration.
    pub image: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlogCategory {
    Fermentation,
    Sustainability,
    Recipes,
    Partners,
    News,
}

/// Blog content shape. Declared for the content pipeline; not rendered yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub published_date: DateTime<Utc>,
    pub category: BlogCategory,
    pub tags: Vec<String>,
    pub featured_image: String,
    /// Minutes.
    pub read_time: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_str() {
        for c in ArticleCategory::ALL {
            assert_eq!(c.as_str().parse::<ArticleCategory>(), Ok(c));
        }
        assert!("Science".parse::<ArticleCategory>().is_err());
    }

    #[test]
    fn test_difficulty_badges_distinct() {
        assert_ne!(
            ArticleDifficulty::Beginner.badge_class(),
            ArticleDifficulty::Advanced.badge_class()
        );
    }
}
