//! Content records and the uniform searchable document they project into

use crate::tokenizer::generate_tokens;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Provenance tag of a searchable document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Project,
    Experience,
    Certificate,
    Volunteer,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::Project,
        DocumentKind::Experience,
        DocumentKind::Certificate,
        DocumentKind::Volunteer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Project => "project",
            DocumentKind::Experience => "experience",
            DocumentKind::Certificate => "certificate",
            DocumentKind::Volunteer => "volunteer",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown document kind: {s}"))
    }
}

/// The unit the ranking engine scores
#[derive(Debug, Clone, PartialEq)]
pub struct SearchableDocument {
    pub id: String,
    pub kind: DocumentKind,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub skills: Vec<String>,
    /// Precomputed on the write path; authoritative term set
    pub tokens: Vec<String>,
    pub url: String,
}

/// One role in an experience or volunteer timeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: String,
    pub project_name: String,
    pub small_description: String,
    pub description: String,
    pub skills: Vec<String>,
    pub tokens: Vec<String>,
    pub project_repository: String,
    pub project_live_link: String,
    pub project_video: String,
    pub order: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub id: String,
    pub company_name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub tokens: Vec<String>,
    pub experience_time_line: Vec<TimelineEntry>,
    pub company_logo: String,
    pub certificate_url: String,
    pub created_by: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub id: String,
    pub title: String,
    pub issuer: String,
    pub description: String,
    pub skills: Vec<String>,
    pub tokens: Vec<String>,
    pub issue_date: String,
    pub expiry_date: String,
    pub certificate_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolunteerEntry {
    pub id: String,
    pub organisation: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub tokens: Vec<String>,
    pub volunteer_time_line: Vec<TimelineEntry>,
    pub organisation_logo: String,
    pub created_by: String,
}

/// Shared behaviour of the four content record types
pub trait Record {
    const KIND: DocumentKind;

    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);

    /// Display name used for suggestions and as the document title
    fn name(&self) -> &str;

    /// Skill or technology labels
    fn labels(&self) -> &[String];

    fn tokens(&self) -> &[String];

    /// Recompute the token field from the fields it derives from
    fn regenerate_tokens(&mut self);

    fn to_document(&self) -> SearchableDocument;
}

fn first_position(timeline: &[TimelineEntry]) -> String {
    timeline
        .first()
        .map(|entry| entry.position.clone())
        .unwrap_or_default()
}

impl Record for Project {
    const KIND: DocumentKind = DocumentKind::Project;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn name(&self) -> &str {
        &self.project_name
    }

    fn labels(&self) -> &[String] {
        &self.skills
    }

    fn tokens(&self) -> &[String] {
        &self.tokens
    }

    fn regenerate_tokens(&mut self) {
        self.tokens = generate_tokens(
            &[
                self.project_name.as_str(),
                self.description.as_str(),
                self.small_description.as_str(),
            ],
            &self.skills,
        );
    }

    fn to_document(&self) -> SearchableDocument {
        SearchableDocument {
            id: self.id.clone(),
            kind: Self::KIND,
            title: self.project_name.clone(),
            subtitle: self.small_description.clone(),
            description: self.description.clone(),
            skills: self.skills.clone(),
            tokens: self.tokens.clone(),
            url: format!("/projects/{}", self.id),
        }
    }
}

impl Record for Experience {
    const KIND: DocumentKind = DocumentKind::Experience;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn name(&self) -> &str {
        &self.company_name
    }

    fn labels(&self) -> &[String] {
        &self.technologies
    }

    fn tokens(&self) -> &[String] {
        &self.tokens
    }

    fn regenerate_tokens(&mut self) {
        self.tokens = generate_tokens(
            &[self.company_name.as_str(), self.description.as_str()],
            &self.technologies,
        );
    }

    fn to_document(&self) -> SearchableDocument {
        SearchableDocument {
            id: self.id.clone(),
            kind: Self::KIND,
            title: self.company_name.clone(),
            subtitle: first_position(&self.experience_time_line),
            description: self.description.clone(),
            skills: self.technologies.clone(),
            tokens: self.tokens.clone(),
            url: format!("/experiences/{}", self.id),
        }
    }
}

impl Record for Certification {
    const KIND: DocumentKind = DocumentKind::Certificate;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn name(&self) -> &str {
        &self.title
    }

    fn labels(&self) -> &[String] {
        &self.skills
    }

    fn tokens(&self) -> &[String] {
        &self.tokens
    }

    fn regenerate_tokens(&mut self) {
        self.tokens = generate_tokens(
            &[self.title.as_str(), self.issuer.as_str(), self.description.as_str()],
            &self.skills,
        );
    }

    fn to_document(&self) -> SearchableDocument {
        SearchableDocument {
            id: self.id.clone(),
            kind: Self::KIND,
            title: self.title.clone(),
            subtitle: self.issuer.clone(),
            description: self.description.clone(),
            skills: self.skills.clone(),
            tokens: self.tokens.clone(),
            url: format!("/certificates/{}", self.id),
        }
    }
}

impl Record for VolunteerEntry {
    const KIND: DocumentKind = DocumentKind::Volunteer;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn name(&self) -> &str {
        &self.organisation
    }

    fn labels(&self) -> &[String] {
        &self.technologies
    }

    fn tokens(&self) -> &[String] {
        &self.tokens
    }

    fn regenerate_tokens(&mut self) {
        self.tokens = generate_tokens(
            &[self.organisation.as_str(), self.description.as_str()],
            &self.technologies,
        );
    }

    fn to_document(&self) -> SearchableDocument {
        SearchableDocument {
            id: self.id.clone(),
            kind: Self::KIND,
            title: self.organisation.clone(),
            subtitle: first_position(&self.volunteer_time_line),
            description: self.description.clone(),
            skills: self.technologies.clone(),
            tokens: self.tokens.clone(),
            url: format!("/volunteer/{}", self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_roundtrip() {
        for kind in DocumentKind::ALL {
            assert_eq!(kind.as_str().parse::<DocumentKind>().unwrap(), kind);
        }
        assert!("achievement".parse::<DocumentKind>().is_err());

        let json = serde_json::to_string(&DocumentKind::Certificate).unwrap();
        assert_eq!(json, "\"certificate\"");
    }

    #[test]
    fn test_project_document() {
        let mut project = Project {
            id: "p1".to_string(),
            project_name: "Realtime Chat System".to_string(),
            small_description: "WebSocket chat".to_string(),
            description: "A chat server".to_string(),
            skills: vec!["Go".to_string(), "WebSockets".to_string()],
            ..Default::default()
        };
        project.regenerate_tokens();

        let doc = project.to_document();
        assert_eq!(doc.kind, DocumentKind::Project);
        assert_eq!(doc.title, "Realtime Chat System");
        assert_eq!(doc.subtitle, "WebSocket chat");
        assert_eq!(doc.url, "/projects/p1");
        assert!(doc.tokens.contains(&"chat".to_string()));
        assert!(doc.tokens.contains(&"websockets".to_string()));
        // "Go" is a two-character run and survives
        assert!(doc.tokens.contains(&"go".to_string()));
    }

    #[test]
    fn test_experience_subtitle_from_first_role() {
        let experience = Experience {
            id: "e1".to_string(),
            company_name: "Acme".to_string(),
            experience_time_line: vec![
                TimelineEntry {
                    position: "Backend Intern".to_string(),
                    ..Default::default()
                },
                TimelineEntry {
                    position: "SDE".to_string(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let doc = experience.to_document();
        assert_eq!(doc.subtitle, "Backend Intern");
        assert_eq!(doc.url, "/experiences/e1");

        let volunteer = VolunteerEntry {
            id: "v1".to_string(),
            organisation: "Open Source Club".to_string(),
            ..Default::default()
        };
        let doc = volunteer.to_document();
        assert_eq!(doc.subtitle, "");
        assert_eq!(doc.kind, DocumentKind::Volunteer);
    }

    #[test]
    fn test_certification_tokens_include_issuer() {
        let mut cert = Certification {
            id: "c1".to_string(),
            title: "Cloud Practitioner".to_string(),
            issuer: "Amazon".to_string(),
            skills: vec!["AWS".to_string()],
            ..Default::default()
        };
        cert.regenerate_tokens();
        assert_eq!(cert.tokens, vec!["cloud", "practitioner", "amazon", "aws"]);
        assert_eq!(cert.to_document().url, "/certificates/c1");
    }

    #[test]
    fn test_record_deserialize_defaults() {
        let project: Project =
            serde_json::from_str(r#"{"id": "x", "project_name": "Portfolio"}"#).unwrap();
        assert_eq!(project.project_name, "Portfolio");
        assert!(project.skills.is_empty());
        assert!(project.tokens.is_empty());
    }
}
