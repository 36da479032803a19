//! Field extraction: contact email and skill keywords pulled from résumé text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::candidate::NOT_FOUND;

/// Skill vocabulary, in output order.
pub const SKILL_VOCABULARY: &[&str] = &[
    "python",
    "java",
    "javascript",
    "html",
    "css",
    "sql",
    "machine learning",
    "data analysis",
];

// Case-sensitive on purpose: the text is not lowercased before this match.
static RE_EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z0-9.\-+_]+@[a-z0-9.\-+_]+\.[a-z]+").unwrap());

static RE_SKILL_TERMS: Lazy<Vec<Regex>> = Lazy::new(|| {
    SKILL_VOCABULARY
        .iter()
        .map(|term| Regex::new(&format!(r"\b{}\b", regex::escape(term))).unwrap())
        .collect()
});

/// How vocabulary terms are located in the lowercased text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillMatching {
    /// Plain containment: "javascript" also counts as "java".
    #[default]
    Substring,
    /// Whole words only: "javascript" counts as "javascript" alone.
    WordBoundary,
}

/// Fields recovered from one résumé. `None` / empty means nothing matched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedFields {
    pub email: Option<String>,
    pub skills: Vec<&'static str>,
}

impl ExtractedFields {
    pub fn email_or_sentinel(&self) -> String {
        self.email.clone().unwrap_or_else(|| NOT_FOUND.to_string())
    }

    pub fn skills_or_sentinel(&self) -> String {
        if self.skills.is_empty() {
            NOT_FOUND.to_string()
        } else {
            self.skills.join(", ")
        }
    }
}

pub fn extract_fields(text: &str, matching: SkillMatching) -> ExtractedFields {
    ExtractedFields {
        email: extract_email(text),
        skills: extract_skills(text, matching),
    }
}

/// First email-looking substring, if any.
pub fn extract_email(text: &str) -> Option<String> {
    RE_EMAIL.find(text).map(|m| m.as_str().to_string())
}

/// Vocabulary terms present in `text`, in vocabulary order.
pub fn extract_skills(text: &str, matching: SkillMatching) -> Vec<&'static str> {
    let lowered = text.to_lowercase();
    match matching {
        SkillMatching::Substring => SKILL_VOCABULARY
            .iter()
            .copied()
            .filter(|term| lowered.contains(*term))
            .collect(),
        SkillMatching::WordBoundary => SKILL_VOCABULARY
            .iter()
            .copied()
            .zip(RE_SKILL_TERMS.iter())
            .filter(|(_, re)| re.is_match(&lowered))
            .map(|(term, _)| term)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_first_match_only() {
        let text = "Reach me at jane@example.com or backup@example.org";
        assert_eq!(extract_email(text).as_deref(), Some("jane@example.com"));
    }

    #[test]
    fn test_email_allows_plus_dots_and_dashes() {
        let text = "contact: first.last+cv@mail-server.co.uk today";
        assert_eq!(
            extract_email(text).as_deref(),
            Some("first.last+cv@mail-server.co.uk")
        );
    }

    #[test]
    fn test_email_is_case_sensitive() {
        // Uppercase letters are outside the pattern, so only the lowercase tail matches.
        assert_eq!(
            extract_email("Jane@example.com").as_deref(),
            Some("ane@example.com")
        );
        assert_eq!(extract_email("JANE@EXAMPLE.COM"), None);
    }

    #[test]
    fn test_no_email_yields_sentinel() {
        let fields = extract_fields("no contact details here", SkillMatching::Substring);
        assert_eq!(fields.email, None);
        assert_eq!(fields.email_or_sentinel(), "Not Found");
    }

    #[test]
    fn test_skills_follow_vocabulary_order() {
        let skills = extract_skills("SQL, then Python, then HTML", SkillMatching::Substring);
        assert_eq!(skills, vec!["python", "html", "sql"]);
    }

    #[test]
    fn test_multi_word_skills_match() {
        let skills = extract_skills(
            "Background in Machine Learning and data analysis",
            SkillMatching::Substring,
        );
        assert_eq!(skills, vec!["machine learning", "data analysis"]);
    }

    #[test]
    fn test_substring_mode_counts_java_inside_javascript() {
        let skills = extract_skills("javascript only", SkillMatching::Substring);
        assert_eq!(skills, vec!["java", "javascript"]);
    }

    #[test]
    fn test_word_mode_keeps_javascript_alone() {
        let skills = extract_skills("javascript only", SkillMatching::WordBoundary);
        assert_eq!(skills, vec!["javascript"]);
    }

    #[test]
    fn test_word_mode_still_finds_standalone_java() {
        let skills = extract_skills("Java/JavaScript, sql.", SkillMatching::WordBoundary);
        assert_eq!(skills, vec!["java", "javascript", "sql"]);
    }

    #[test]
    fn test_no_skills_yields_sentinel() {
        let fields = extract_fields("gardening and carpentry", SkillMatching::Substring);
        assert!(fields.skills.is_empty());
        assert_eq!(fields.skills_or_sentinel(), "Not Found");
    }

    #[test]
    fn test_skills_joined_with_comma_space() {
        let fields = extract_fields("python and css", SkillMatching::Substring);
        assert_eq!(fields.skills_or_sentinel(), "python, css");
    }
}
