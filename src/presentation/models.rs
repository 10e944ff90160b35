//! API request and response models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Developer, DeveloperPatch, NewDeveloper, Skills};

/// Six skill ratings, each between 0 and 100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SkillsDto {
    #[schema(example = 80)]
    pub communicative: u32,
    #[schema(example = 60)]
    pub efficient: u32,
    #[schema(example = 70)]
    pub immaculate: u32,
    #[schema(example = 95)]
    pub problemsolver: u32,
    #[schema(example = 65)]
    pub timely: u32,
    #[schema(example = 75)]
    pub tinker: u32,
}

impl From<Skills> for SkillsDto {
    fn from(skills: Skills) -> Self {
        Self {
            communicative: skills.communicative,
            efficient: skills.efficient,
            immaculate: skills.immaculate,
            problemsolver: skills.problemsolver,
            timely: skills.timely,
            tinker: skills.tinker,
        }
    }
}

impl From<SkillsDto> for Skills {
    fn from(dto: SkillsDto) -> Self {
        Skills {
            communicative: dto.communicative,
            efficient: dto.efficient,
            immaculate: dto.immaculate,
            problemsolver: dto.problemsolver,
            timely: dto.timely,
            tinker: dto.tinker,
        }
    }
}

/// A stored developer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperDto {
    /// Identifier assigned by the store
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: String,

    #[schema(example = "Ada Lovelace")]
    pub name: String,

    #[schema(example = "Analyst")]
    pub position: String,

    #[schema(example = "London")]
    pub location: String,

    #[schema(example = 12)]
    pub experience_years: u32,

    #[schema(example = "https://avatars.githubusercontent.com/u/45007745?v=4")]
    pub image_url: String,

    pub skills: SkillsDto,
}

impl From<Developer> for DeveloperDto {
    fn from(developer: Developer) -> Self {
        Self {
            id: developer.id.to_string(),
            name: developer.name,
            position: developer.position,
            location: developer.location,
            experience_years: developer.experience_years,
            image_url: developer.image_url,
            skills: developer.skills.into(),
        }
    }
}

/// Body of `POST /api/devs`. Any `id` in the body is ignored.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeveloperRequest {
    #[schema(example = "Ada Lovelace")]
    pub name: String,

    #[schema(example = "Analyst")]
    pub position: String,

    #[schema(example = "London")]
    pub location: String,

    #[schema(example = 12)]
    pub experience_years: u32,

    /// Blank or missing falls back to the default avatar
    #[serde(default)]
    pub image_url: String,

    pub skills: SkillsDto,
}

impl From<CreateDeveloperRequest> for NewDeveloper {
    fn from(request: CreateDeveloperRequest) -> Self {
        NewDeveloper {
            name: request.name,
            position: request.position,
            location: request.location,
            experience_years: request.experience_years,
            image_url: request.image_url,
            skills: request.skills.into(),
        }
    }
}

/// Body of `PATCH /api/devs/{id}`. Absent fields keep their stored values.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDeveloperRequest {
    /// Must match the path id when present
    pub id: Option<String>,
    pub name: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub experience_years: Option<u32>,
    pub image_url: Option<String>,
    pub skills: Option<SkillsDto>,
}

impl UpdateDeveloperRequest {
    /// Split into the echoed id and the patch to apply
    pub fn into_parts(self) -> (Option<String>, DeveloperPatch) {
        let patch = DeveloperPatch {
            name: self.name,
            position: self.position,
            location: self.location,
            experience_years: self.experience_years,
            image_url: self.image_url,
            skills: self.skills.map(Into::into),
        };
        (self.id, patch)
    }
}

/// Error response body
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Human-readable error message
    #[schema(example = "Domain error: Invalid input for name: Developer name cannot be empty")]
    pub message: String,

    /// Machine-readable error type
    #[schema(example = "domain_error")]
    #[serde(rename = "type")]
    pub error_type: String,

    #[schema(example = 400)]
    pub status: u16,
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Overall service health status
    #[schema(example = "healthy")]
    pub status: String,

    /// Current service version
    #[schema(example = "0.1.0")]
    pub version: String,

    /// Health check timestamp
    #[schema(example = "2024-01-15T10:30:00Z")]
    pub timestamp: DateTime<Utc>,

    /// Build and store details
    pub details: Option<serde_json::Value>,
}
