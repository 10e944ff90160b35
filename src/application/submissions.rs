//! Turning folded form submissions into developer records

use std::collections::HashMap;

use crate::domain::{DeveloperPatch, DomainError, NewDeveloper, SkillName, Skills};
use crate::forms::FormNode;

/// Raw text fields of a developer form.
///
/// Skill ratings are accepted either flat (`communicative`) or nested under
/// `skills` (`skills.communicative`); the nested form wins when both exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeveloperSubmission {
    id: Option<String>,
    name: Option<String>,
    position: Option<String>,
    location: Option<String>,
    experience_years: Option<String>,
    image_url: Option<String>,
    skills: HashMap<SkillName, String>,
}

impl DeveloperSubmission {
    pub fn from_form(form: &FormNode) -> Self {
        let text = |key: &str| form.get(key).and_then(FormNode::as_str).map(str::to_string);

        let skills = SkillName::ALL
            .into_iter()
            .filter_map(|skill| {
                form.get("skills")
                    .and_then(|nested| nested.get(skill.as_str()))
                    .or_else(|| form.get(skill.as_str()))
                    .and_then(FormNode::as_str)
                    .map(|rating| (skill, rating.to_string()))
            })
            .collect();

        Self {
            id: text("id"),
            name: text("name"),
            position: text("position"),
            location: text("location"),
            experience_years: text("experienceYears"),
            image_url: text("imageUrl"),
            skills,
        }
    }

    /// Hidden id echoed by an edit form
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.trim().is_empty())
    }

    /// Every field is required except the image URL
    pub fn into_new_developer(self) -> Result<NewDeveloper, DomainError> {
        let skills = self.parse_skills()?.ok_or_else(|| {
            DomainError::invalid(SkillName::Communicative.as_str(), "is required")
        })?;

        Ok(NewDeveloper {
            name: required("name", self.name)?,
            position: required("position", self.position)?,
            location: required("location", self.location)?,
            experience_years: parse_number(
                "experienceYears",
                &required("experienceYears", self.experience_years)?,
            )?,
            image_url: self.image_url.unwrap_or_default(),
            skills,
        })
    }

    /// Only submitted fields end up in the patch
    pub fn into_patch(self) -> Result<DeveloperPatch, DomainError> {
        let skills = self.parse_skills()?;
        let experience_years = self
            .experience_years
            .as_deref()
            .map(|years| parse_number("experienceYears", years))
            .transpose()?;

        Ok(DeveloperPatch {
            name: self.name,
            position: self.position,
            location: self.location,
            experience_years,
            image_url: self.image_url,
            skills,
        })
    }

    /// All six ratings, none, or an error naming the first missing one
    fn parse_skills(&self) -> Result<Option<Skills>, DomainError> {
        if self.skills.is_empty() {
            return Ok(None);
        }
        Skills::try_from_fn(|skill| {
            let raw = self
                .skills
                .get(&skill)
                .ok_or_else(|| DomainError::invalid(skill.as_str(), "is required"))?;
            parse_number(skill.as_str(), raw)
        })
        .map(Some)
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, DomainError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| DomainError::invalid(field, "is required"))
}

fn parse_number(field: &str, raw: &str) -> Result<u32, DomainError> {
    raw.trim()
        .parse()
        .map_err(|_| DomainError::invalid(field, format!("'{}' is not a whole number", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DEFAULT_IMAGE_URL;
    use crate::forms::{deep_set, form_data_object};

    fn flat_form() -> FormNode {
        form_data_object([
            ("name", "Ada"),
            ("imageUrl", ""),
            ("location", "London"),
            ("position", "Engineer"),
            ("experienceYears", "12"),
            ("communicative", "80"),
            ("immaculate", "70"),
            ("problemsolver", "95"),
            ("timely", "65"),
            ("tinker", "75"),
            ("efficient", "60"),
        ])
    }

    #[test]
    fn test_flat_form_into_new_developer() {
        let developer = DeveloperSubmission::from_form(&flat_form())
            .into_new_developer()
            .unwrap()
            .validate()
            .unwrap();

        assert_eq!(developer.name, "Ada");
        assert_eq!(developer.experience_years, 12);
        assert_eq!(developer.skills.problemsolver, 95);
        assert_eq!(developer.image_url, DEFAULT_IMAGE_URL);
    }

    #[test]
    fn test_nested_skills_are_read() {
        let form = form_data_object([
            ("name", "Ada"),
            ("location", "London"),
            ("position", "Engineer"),
            ("experienceYears", "1"),
            ("skills.communicative", "1"),
            ("skills.efficient", "2"),
            ("skills.immaculate", "3"),
            ("skills.problemsolver", "4"),
            ("skills.timely", "5"),
            ("skills[tinker]", "6"),
        ]);
        let developer = DeveloperSubmission::from_form(&form)
            .into_new_developer()
            .unwrap();
        assert_eq!(developer.skills.tinker, 6);
        assert_eq!(developer.skills.communicative, 1);
    }

    #[test]
    fn test_missing_skill_is_named() {
        let form = form_data_object([
            ("name", "Ada"),
            ("location", "London"),
            ("position", "Engineer"),
            ("experienceYears", "1"),
            ("communicative", "1"),
        ]);
        let error = DeveloperSubmission::from_form(&form)
            .into_new_developer()
            .unwrap_err();
        assert_eq!(
            error,
            DomainError::InvalidInput {
                field: "efficient".to_string(),
                message: "is required".to_string()
            }
        );
    }

    #[test]
    fn test_non_numeric_years_rejected() {
        let mut form = flat_form();
        deep_set(&mut form, "experienceYears", "ten");

        let error = DeveloperSubmission::from_form(&form)
            .into_new_developer()
            .unwrap_err();
        assert!(matches!(error, DomainError::InvalidInput { field, .. } if field == "experienceYears"));
    }

    #[test]
    fn test_patch_contains_only_submitted_fields() {
        let form = form_data_object([("id", "abc"), ("name", "Grace")]);
        let submission = DeveloperSubmission::from_form(&form);
        assert_eq!(submission.id(), Some("abc"));

        let patch = submission.into_patch().unwrap();
        assert_eq!(patch.name.as_deref(), Some("Grace"));
        assert!(patch.skills.is_none());
        assert!(patch.experience_years.is_none());
    }

    #[test]
    fn test_patch_with_partial_skills_rejected() {
        let form = form_data_object([("timely", "50")]);
        assert!(
            DeveloperSubmission::from_form(&form)
                .into_patch()
                .is_err()
        );
    }
}
