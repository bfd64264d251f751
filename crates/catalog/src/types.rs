use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sewna_vector::{Embedding, MatchResult, StyleWeights};
use uuid::Uuid;

/// Stored designer with its embedding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignerRecord {
    pub id: Uuid,

    pub name: String,

    pub bio: String,

    /// Profile image URL
    pub profile_image: String,

    /// Display style tags
    pub styles: Vec<String>,

    pub embedding: Embedding,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl DesignerRecord {
    /// Build a record from an authored profile and its embedding
    pub fn from_profile(profile: &DesignerProfile, embedding: Embedding) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: profile.name.clone(),
            bio: profile.bio.clone(),
            profile_image: profile.profile_image.clone(),
            styles: profile.styles.clone(),
            embedding,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn summary(&self) -> DesignerSummary {
        DesignerSummary {
            id: self.id,
            name: self.name.clone(),
            bio: self.bio.clone(),
            profile_image: self.profile_image.clone(),
            styles: self.styles.clone(),
        }
    }
}

/// Hand-authored seed data for a designer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignerProfile {
    pub name: String,
    pub bio: String,
    pub profile_image: String,
    pub styles: Vec<String>,
    pub weights: StyleWeights,
}

/// Designer without the embedding, for listings
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignerSummary {
    pub id: Uuid,
    pub name: String,
    pub bio: String,
    pub profile_image: String,
    pub styles: Vec<String>,
}

/// Match as presented to callers: summary plus whole-number percentage
#[derive(Debug, Clone, Serialize)]
pub struct MatchView {
    pub designer: DesignerSummary,

    /// round(similarity * 100)
    pub similarity: u8,
}

impl From<&MatchResult<DesignerRecord>> for MatchView {
    fn from(result: &MatchResult<DesignerRecord>) -> Self {
        Self {
            designer: result.entity.summary(),
            similarity: result.percent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> DesignerProfile {
        DesignerProfile {
            name: "Test Designer".to_string(),
            bio: "Bio".to_string(),
            profile_image: "https://example.com/a.jpg".to_string(),
            styles: vec!["Minimalist".to_string()],
            weights: [("minimalist", 0.8)].into_iter().collect(),
        }
    }

    #[test]
    fn test_from_profile() {
        let record = DesignerRecord::from_profile(&profile(), vec![1.0, 0.0]);
        assert_eq!(record.name, "Test Designer");
        assert_eq!(record.embedding, vec![1.0, 0.0]);
        assert_eq!(record.created_at, record.updated_at);
    }

    #[test]
    fn test_match_view_percent() {
        let record = DesignerRecord::from_profile(&profile(), vec![1.0]);
        let view = MatchView::from(&MatchResult::new(record, 0.734));
        assert_eq!(view.similarity, 73);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["designer"]["profileImage"], "https://example.com/a.jpg");
        assert!(json["designer"].get("embedding").is_none());
    }
}
