//! Domain entities representing core business concepts

use serde::{Deserialize, Serialize};

use super::errors::DomainError;
use super::value_objects::*;

/// A stored developer profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Developer {
    pub id: DeveloperId,
    pub name: String,
    pub position: String,
    pub location: String,
    pub experience_years: u32,
    pub image_url: String,
    pub skills: Skills,
}

impl Developer {
    /// Attach a store-assigned identity to a new record
    pub fn from_new(id: DeveloperId, developer: NewDeveloper) -> Self {
        Developer {
            id,
            name: developer.name,
            position: developer.position,
            location: developer.location,
            experience_years: developer.experience_years,
            image_url: developer.image_url,
            skills: developer.skills,
        }
    }

    /// Replace every field present in `patch`
    pub fn apply(&mut self, patch: DeveloperPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(experience_years) = patch.experience_years {
            self.experience_years = experience_years;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        if let Some(skills) = patch.skills {
            self.skills = skills;
        }
    }
}

/// A developer that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDeveloper {
    pub name: String,
    pub position: String,
    pub location: String,
    pub experience_years: u32,
    pub image_url: String,
    pub skills: Skills,
}

impl NewDeveloper {
    /// Validate the record and normalize the blank image URL
    pub fn validate(mut self) -> Result<Self, DomainError> {
        self.name = validate_name(&self.name)?;
        if self.image_url.trim().is_empty() {
            self.image_url = DEFAULT_IMAGE_URL.to_string();
        }
        self.skills.validate()?;
        Ok(self)
    }
}

/// Replacement values for an existing developer; `None` keeps the stored value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Skills>,
}

impl DeveloperPatch {
    pub fn validate(mut self) -> Result<Self, DomainError> {
        if let Some(name) = &self.name {
            self.name = Some(validate_name(name)?);
        }
        if let Some(image_url) = &self.image_url {
            if image_url.trim().is_empty() {
                self.image_url = Some(DEFAULT_IMAGE_URL.to_string());
            }
        }
        if let Some(skills) = &self.skills {
            skills.validate()?;
        }
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self == &DeveloperPatch::default()
    }
}

fn validate_name(name: &str) -> Result<String, DomainError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::invalid("name", "Developer name cannot be empty"));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_new() -> NewDeveloper {
        NewDeveloper {
            name: "Ada".to_string(),
            position: "Engineer".to_string(),
            location: "London".to_string(),
            experience_years: 12,
            image_url: "https://example.com/ada.png".to_string(),
            skills: Skills {
                communicative: 80,
                efficient: 60,
                immaculate: 70,
                problemsolver: 95,
                timely: 65,
                tinker: 75,
            },
        }
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let developer = Developer::from_new(DeveloperId::new("d1").unwrap(), sample_new());
        let json = serde_json::to_value(&developer).unwrap();
        assert_eq!(json["id"], "d1");
        assert_eq!(json["experienceYears"], 12);
        assert_eq!(json["imageUrl"], "https://example.com/ada.png");
        assert_eq!(json["skills"]["problemsolver"], 95);
    }

    #[test]
    fn test_validate_trims_name_and_defaults_image() {
        let mut developer = sample_new();
        developer.name = "  Ada  ".to_string();
        developer.image_url = " ".to_string();

        let developer = developer.validate().unwrap();
        assert_eq!(developer.name, "Ada");
        assert_eq!(developer.image_url, DEFAULT_IMAGE_URL);
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let mut developer = sample_new();
        developer.name = "   ".to_string();
        assert!(matches!(
            developer.validate(),
            Err(DomainError::InvalidInput { field, .. }) if field == "name"
        ));
    }

    #[test]
    fn test_apply_replaces_only_present_fields() {
        let mut developer = Developer::from_new(DeveloperId::generate(), sample_new());
        let before = developer.clone();

        developer.apply(DeveloperPatch {
            name: Some("Grace".to_string()),
            ..Default::default()
        });

        assert_eq!(developer.name, "Grace");
        assert_eq!(developer.position, before.position);
        assert_eq!(developer.skills, before.skills);
        assert_eq!(developer.id, before.id);
    }

    #[test]
    fn test_patch_serialization_skips_absent_fields() {
        let patch = DeveloperPatch {
            experience_years: Some(3),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&patch).unwrap(),
            r#"{"experienceYears":3}"#
        );
        assert!(DeveloperPatch::default().is_empty());
        assert!(!patch.is_empty());
    }
}
