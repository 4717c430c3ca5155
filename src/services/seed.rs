//! Seed data parsing
//!
//! Portfolio seed files are JavaScript modules of the form
//! `export const mockData = { ... };`. The object literal is JSON5 in
//! practice: leading block comments, unquoted keys, trailing commas and
//! stray `id:` fields all occur in real files. Stripping the module
//! wrapper leaves a JSON5 document that maps straight onto the create
//! DTOs, so the same `SeedData` type also deserializes the JSON body of
//! the migration endpoint.

use serde::Deserialize;

use crate::db::schemas::{
    AboutSection, AchievementCreate, ExperienceCreate, PersonalInfo, ProjectCreate,
    PublicationCreate, SkillCategoryCreate,
};
use crate::types::{Result, VitrineError};

/// Marker that introduces the seed object in its JavaScript wrapper
const EXPORT_MARKER: &str = "export const mockData";

/// Full seed payload for one portfolio owner
#[derive(Debug, Clone, Deserialize)]
pub struct SeedData {
    pub personal: PersonalInfo,
    pub about: AboutSection,
    pub skills: SkillsSeed,
    pub experience: Vec<ExperienceCreate>,
    pub projects: Vec<ProjectCreate>,
    pub achievements: Vec<AchievementCreate>,
    pub publications: Vec<PublicationCreate>,
}

/// Skill categories nest one level deeper than the other kinds
#[derive(Debug, Clone, Deserialize)]
pub struct SkillsSeed {
    pub categories: Vec<SkillCategoryCreate>,
}

/// Remove the JavaScript module wrapper around the seed object.
///
/// Accepts `export const mockData = { ... };` as well as a bare object.
/// Comments are left in place; JSON5 parses past them.
pub fn strip_js_wrapper(content: &str) -> &str {
    let body = match content.find(EXPORT_MARKER) {
        Some(start) => match content[start..].find('=') {
            Some(eq) => &content[start + eq + 1..],
            None => content,
        },
        None => content,
    };

    let body = body.trim();
    match body.strip_suffix(';') {
        Some(stripped) => stripped.trim_end(),
        None => body,
    }
}

/// Parse seed content (JS module or bare JSON5) into `SeedData`
pub fn parse_seed(content: &str) -> Result<SeedData> {
    json5::from_str(strip_js_wrapper(content))
        .map_err(|e| VitrineError::Unprocessable(format!("Seed data parse error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED_FIXTURE: &str = r#"
/**
 * Placeholder dataset. Copy to mock.js and fill in real values.
 */

export const mockData = {
  personal: {
    name: "John Doe",
    tagline: "Data Scientist",
    email: "johndoe@example.com",
    github: "https://github.com/johndoe",
    linkedin: "https://www.linkedin.com/in/johndoe/",
    kaggle: "https://www.kaggle.com/johndoe"
  },

  about: {
    description: "Solving problems with machine learning.",
    education: {
      institution: "Tech University",
      degree: "BTech in Computer Science",
      duration: "2018 - 2022"
    }
  },

  skills: {
    categories: [
      { title: "Programming", items: ["Python", "Rust"] },
      { title: "Databases", items: ["MongoDB"] },
    ]
  },

  experience: [
    {
      id: 1,
      title: "Data Scientist",
      company: "TechCorp",
      location: "Remote",
      duration: "Jul 2024 - Present",
      description: "Building predictive models",
      current: true
    }
  ],

  // featured projects shown on the landing page
  projects: [
    {
      id: 1,
      title: "Health Monitor",
      description: "IoT vitals tracking",
      technologies: ["Python", "TensorFlow"],
      github: "https://github.com/johndoe/health-monitor",
      featured: true
    },
  ],

  achievements: [
    { title: "Hackathon Finalist", description: "National finals." }
  ],

  publications: [
    {
      title: "Deep Learning for Image Classification",
      authors: "John Doe, Jane Smith",
      publication: "International Conference on AI",
      year: "2023"
    }
  ]
};
"#;

    #[test]
    fn test_strip_js_wrapper_removes_export_and_semicolon() {
        let body = strip_js_wrapper(SEED_FIXTURE);
        assert!(body.starts_with('{'));
        assert!(body.ends_with('}'));
        assert!(!body.contains("export const"));
    }

    #[test]
    fn test_strip_js_wrapper_passes_bare_object_through() {
        let body = strip_js_wrapper("  { personal: {} }  ");
        assert_eq!(body, "{ personal: {} }");
    }

    #[test]
    fn test_parse_seed_full_fixture() {
        let seed = parse_seed(SEED_FIXTURE).unwrap();

        assert_eq!(seed.personal.name, "John Doe");
        // title absent in the fixture, filled by the schema default
        assert_eq!(seed.about.title, "About Me");
        assert_eq!(seed.skills.categories.len(), 2);
        assert_eq!(seed.experience.len(), 1);
        assert!(seed.experience[0].current);
        assert_eq!(seed.achievements.len(), 1);
        assert_eq!(seed.publications[0].year, "2023");

        // numeric id fields in the source are ignored, link defaults kick in
        let project = &seed.projects[0];
        assert_eq!(project.github, "https://github.com/johndoe/health-monitor");
        assert_eq!(project.demo, "#");
        assert!(project.featured);
        assert!(!project.placeholder);
    }

    #[test]
    fn test_parse_seed_accepts_json_body() {
        let body = serde_json::json!({
            "personal": {
                "name": "A", "tagline": "B", "email": "a@b.c",
                "github": "g", "linkedin": "l", "kaggle": "k"
            },
            "about": {
                "description": "d",
                "education": { "institution": "i", "degree": "d", "duration": "du" }
            },
            "skills": { "categories": [] },
            "experience": [],
            "projects": [],
            "achievements": [],
            "publications": []
        });

        let seed = parse_seed(&body.to_string()).unwrap();
        assert!(seed.skills.categories.is_empty());
    }

    #[test]
    fn test_parse_seed_rejects_missing_sections() {
        let result = parse_seed(r#"{ "personal": { "name": "A" } }"#);
        assert!(result.is_err());
    }
}
