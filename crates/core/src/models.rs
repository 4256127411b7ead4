//! JSON record shapes read from the data directory.
//!
//! Field names follow the camelCase keys used in the data files. Every
//! optional field gates one block of markup, so absence is modelled with
//! `Option`; an empty string counts as absent too. Plain text fields fall
//! back to `""` when a record leaves them out, so one incomplete record
//! does not reject the whole file.

use serde::Deserialize;

/// One entry of `news.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewsItem {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub text: String,
}

/// Optional outbound links on a person card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PersonLinks {
    pub linkedin: Option<String>,
}

/// One member listed in `people.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersonRecord {
    #[serde(default)]
    pub name: String,
    /// Photo URL.
    #[serde(default)]
    pub photo: String,
    /// Free-form keyword line, rendered as-is.
    #[serde(default)]
    pub keywords: String,
    pub links: Option<PersonLinks>,
}

impl PersonRecord {
    /// LinkedIn URL, if the record carries a non-empty one.
    pub fn linkedin(&self) -> Option<&str> {
        self.links
            .as_ref()?
            .linkedin
            .as_deref()
            .filter(|url| !url.is_empty())
    }
}

/// The whole `people.json` document: three independently optional groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PeopleDirectory {
    pub leads: Option<Vec<PersonRecord>>,
    pub fellows: Option<Vec<PersonRecord>>,
    pub alumni: Option<Vec<PersonRecord>>,
}

/// One entry of `projects.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Status label, also used as a CSS class suffix (e.g. `active`).
    #[serde(default)]
    pub status: String,
    pub keywords: Vec<String>,
}

/// One entry of `research.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResearchArea {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    pub keywords: Vec<String>,
}

/// One entry of `opportunities.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
    pub background: Option<String>,
    pub commitment: Option<String>,
    pub benefits: Option<Vec<String>>,
    pub screening_questions: Option<Vec<String>>,
    pub download_file: Option<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_without_links_has_no_linkedin() {
        let person: PersonRecord = serde_json::from_str(
            r#"{"name":"A","photo":"a.jpg","keywords":"ML"}"#,
        )
        .unwrap();
        assert_eq!(person.linkedin(), None);
    }

    #[test]
    fn person_with_empty_links_has_no_linkedin() {
        let person: PersonRecord = serde_json::from_str(
            r#"{"name":"A","photo":"a.jpg","keywords":"ML","links":{}}"#,
        )
        .unwrap();
        assert_eq!(person.linkedin(), None);
    }

    #[test]
    fn person_linkedin_is_read_from_nested_links() {
        let person: PersonRecord = serde_json::from_str(
            r#"{"name":"A","photo":"a.jpg","keywords":"ML","links":{"linkedin":"https://li/a"}}"#,
        )
        .unwrap();
        assert_eq!(person.linkedin(), Some("https://li/a"));
    }

    #[test]
    fn person_with_empty_linkedin_has_no_linkedin() {
        let person: PersonRecord = serde_json::from_str(
            r#"{"name":"A","photo":"a.jpg","keywords":"ML","links":{"linkedin":""}}"#,
        )
        .unwrap();
        assert_eq!(person.linkedin(), None);
    }

    #[test]
    fn person_missing_text_fields_reads_as_empty() {
        let person: PersonRecord = serde_json::from_str(r#"{"name":"A"}"#).unwrap();
        assert_eq!(person.photo, "");
        assert_eq!(person.keywords, "");
    }

    #[test]
    fn people_directory_groups_are_independent() {
        let people: PeopleDirectory =
            serde_json::from_str(r#"{"leads":[],"alumni":null}"#).unwrap();
        assert_eq!(people.leads, Some(vec![]));
        assert_eq!(people.fellows, None);
        assert_eq!(people.alumni, None);
    }

    #[test]
    fn opportunity_reads_camel_case_fields() {
        let opp: OpportunityRecord = serde_json::from_str(
            r#"{
                "title": "Research Assistant",
                "description": "Help out",
                "status": "open",
                "screeningQuestions": ["Why?"],
                "downloadFile": "files/ra.pdf",
                "unrelated": 42
            }"#,
        )
        .unwrap();
        assert_eq!(opp.screening_questions, Some(vec!["Why?".to_string()]));
        assert_eq!(opp.download_file.as_deref(), Some("files/ra.pdf"));
        assert_eq!(opp.background, None);
        assert_eq!(opp.benefits, None);
    }

    #[test]
    fn project_requires_keywords() {
        let result: Result<ProjectRecord, _> =
            serde_json::from_str(r#"{"title":"T","description":"D","status":"active"}"#);
        assert!(result.is_err());
    }
}
