//! Domain value objects representing immutable concepts

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::errors::DomainError;

/// Avatar used when a submission leaves the image URL blank
pub const DEFAULT_IMAGE_URL: &str = "https://avatars.githubusercontent.com/u/45007745?v=4";

/// Highest accepted skill rating
pub const MAX_SKILL_RATING: u32 = 100;

/// Opaque, store-assigned developer identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeveloperId(String);

impl DeveloperId {
    /// Create a DeveloperId from an existing identifier
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidId { id });
        }
        Ok(DeveloperId(trimmed.to_string()))
    }

    /// Generate a fresh identifier for a newly stored record
    pub fn generate() -> Self {
        DeveloperId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeveloperId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DeveloperId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// The six rated skills, in the order they are charted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillName {
    Communicative,
    Efficient,
    Immaculate,
    Problemsolver,
    Timely,
    Tinker,
}

impl SkillName {
    pub const ALL: [SkillName; 6] = [
        SkillName::Communicative,
        SkillName::Efficient,
        SkillName::Immaculate,
        SkillName::Problemsolver,
        SkillName::Timely,
        SkillName::Tinker,
    ];

    /// Field name used on the wire and in forms
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillName::Communicative => "communicative",
            SkillName::Efficient => "efficient",
            SkillName::Immaculate => "immaculate",
            SkillName::Problemsolver => "problemsolver",
            SkillName::Timely => "timely",
            SkillName::Tinker => "tinker",
        }
    }
}

impl fmt::Display for SkillName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkillName::ALL
            .into_iter()
            .find(|skill| skill.as_str() == s)
            .ok_or_else(|| DomainError::InvalidInput {
                field: s.to_string(),
                message: "unknown skill".to_string(),
            })
    }
}

/// Skill ratings embedded in every developer record.
///
/// All six ratings are required; there is no partially populated form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    pub communicative: u32,
    pub efficient: u32,
    pub immaculate: u32,
    pub problemsolver: u32,
    pub timely: u32,
    pub tinker: u32,
}

impl Skills {
    /// Build a rating set by asking for each skill in turn
    pub fn try_from_fn<E>(mut rating: impl FnMut(SkillName) -> Result<u32, E>) -> Result<Self, E> {
        Ok(Skills {
            communicative: rating(SkillName::Communicative)?,
            efficient: rating(SkillName::Efficient)?,
            immaculate: rating(SkillName::Immaculate)?,
            problemsolver: rating(SkillName::Problemsolver)?,
            timely: rating(SkillName::Timely)?,
            tinker: rating(SkillName::Tinker)?,
        })
    }

    pub fn get(&self, skill: SkillName) -> u32 {
        match skill {
            SkillName::Communicative => self.communicative,
            SkillName::Efficient => self.efficient,
            SkillName::Immaculate => self.immaculate,
            SkillName::Problemsolver => self.problemsolver,
            SkillName::Timely => self.timely,
            SkillName::Tinker => self.tinker,
        }
    }

    /// Ratings paired with their skill, in chart order
    pub fn iter(&self) -> impl Iterator<Item = (SkillName, u32)> + '_ {
        SkillName::ALL.into_iter().map(move |skill| (skill, self.get(skill)))
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        match self.iter().find(|(_, rating)| *rating > MAX_SKILL_RATING) {
            Some((skill, rating)) => Err(DomainError::InvalidInput {
                field: skill.as_str().to_string(),
                message: format!("rating {} exceeds {}", rating, MAX_SKILL_RATING),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_skills() -> Skills {
        Skills {
            communicative: 80,
            efficient: 60,
            immaculate: 70,
            problemsolver: 90,
            timely: 55,
            tinker: 65,
        }
    }

    #[test]
    fn test_developer_id_rejects_blank() {
        assert!(DeveloperId::new("  ").is_err());
        assert_eq!(DeveloperId::new(" abc ").unwrap().as_str(), "abc");
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(DeveloperId::generate(), DeveloperId::generate());
    }

    #[test]
    fn test_skill_name_round_trip() {
        for skill in SkillName::ALL {
            assert_eq!(skill.as_str().parse::<SkillName>().unwrap(), skill);
        }
        assert!("charisma".parse::<SkillName>().is_err());
    }

    #[test]
    fn test_skills_iterate_in_chart_order() {
        let ratings: Vec<u32> = sample_skills().iter().map(|(_, r)| r).collect();
        assert_eq!(ratings, vec![80, 60, 70, 90, 55, 65]);
    }

    #[test]
    fn test_skills_validation() {
        assert!(sample_skills().validate().is_ok());

        let mut skills = sample_skills();
        skills.tinker = 101;
        match skills.validate() {
            Err(DomainError::InvalidInput { field, .. }) => assert_eq!(field, "tinker"),
            other => panic!("expected tinker to be rejected, got {:?}", other),
        }
    }

    #[test]
    fn test_skills_missing_field_rejected_by_decoder() {
        let json = r#"{"communicative":1,"efficient":2,"immaculate":3,"problemsolver":4,"timely":5}"#;
        assert!(serde_json::from_str::<Skills>(json).is_err());
    }

    #[test]
    fn test_try_from_fn_stops_at_first_error() {
        let mut asked = Vec::new();
        let result: Result<Skills, String> = Skills::try_from_fn(|skill| {
            asked.push(skill);
            if skill == SkillName::Immaculate {
                Err("bad".to_string())
            } else {
                Ok(50)
            }
        });
        assert!(result.is_err());
        assert_eq!(asked.len(), 3);
    }
}
