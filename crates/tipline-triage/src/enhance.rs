//! Local draft enhancement fallback.
//!
//! When the remote drafting assistant is unreachable, this pass cleans a
//! draft up mechanically: whitespace and capitalization normalization,
//! terminal punctuation, and a category-specific report skeleton around
//! short descriptions.

use serde::{Deserialize, Serialize};

/// Descriptions shorter than this get the full report skeleton.
const SHORT_DESCRIPTION_CHARS: usize = 200;

/// An enhanced draft plus the list of applied improvements.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedDraft {
    pub title: String,
    pub description: String,
    pub improvements: Vec<String>,
    /// Always true here; the remote assistant sets this false
    pub local_fallback: bool,
}

struct Skeleton {
    intro: &'static str,
    outro: &'static str,
}

fn skeleton_for(category: &str) -> Skeleton {
    match category.to_lowercase().as_str() {
        "murder" => Skeleton {
            intro: "INCIDENT REPORT - SUSPECTED HOMICIDE\n\n",
            outro: "\n\n**Observations:**\nThe circumstances described raise serious concerns about potential loss of life. This matter requires immediate attention from appropriate law enforcement agencies.",
        },
        "fraud" => Skeleton {
            intro: "INCIDENT REPORT - SUSPECTED FINANCIAL FRAUD\n\n",
            outro: "\n\n**Financial Impact Assessment:**\nThe activities described may constitute financial fraud with potential significant monetary losses to affected parties.",
        },
        "cybercrime" => Skeleton {
            intro: "INCIDENT REPORT - CYBERCRIME/DIGITAL OFFENSE\n\n",
            outro: "\n\n**Digital Security Concerns:**\nThe reported activities indicate potential cybercrime that may affect data security and privacy.",
        },
        "domestic_violence" => Skeleton {
            intro: "INCIDENT REPORT - DOMESTIC VIOLENCE\n\n",
            outro: "\n\n**Safety Concerns:**\nThis report describes potential domestic violence which poses immediate safety risks to individuals involved.",
        },
        "theft" => Skeleton {
            intro: "INCIDENT REPORT - THEFT/PROPERTY CRIME\n\n",
            outro: "\n\n**Property Loss Assessment:**\nThe reported incident involves potential theft or property crime requiring documentation and investigation.",
        },
        _ => Skeleton {
            intro: "INCIDENT REPORT\n\n",
            outro: "\n\n**Additional Context:**\nThis incident has been reported for investigation and appropriate action. All relevant details should be verified and documented.",
        },
    }
}

/// Normalize and extend a draft title and description.
pub fn enhance_draft(title: &str, description: &str, category: &str) -> EnhancedDraft {
    let mut improvements = Vec::new();

    let mut title = collapse_whitespace(title);
    if starts_lowercase(&title) {
        title = capitalize_first(&title);
        improvements.push("Capitalized title".to_string());
    }

    let mut description = capitalize_sentences(&collapse_whitespace(description));
    if !description.is_empty() && !matches!(description.chars().last(), Some('.' | '!' | '?')) {
        description.push('.');
    }

    let skeleton = skeleton_for(category);
    if description.chars().count() < SHORT_DESCRIPTION_CHARS {
        description = format!(
            "{}**Incident Details:**\n{}{}",
            skeleton.intro, description, skeleton.outro
        );
        improvements.push("Added professional report structure".to_string());
        improvements.push("Extended with category-specific context".to_string());
    } else {
        description = format!(
            "{}**Incident Details:**\n{}\n\n**Status:** Pending Investigation",
            skeleton.intro, description
        );
        improvements.push("Added professional formatting".to_string());
    }

    if improvements.is_empty() {
        improvements.push("Report format verified".to_string());
    }

    EnhancedDraft {
        title,
        description,
        improvements,
        local_fallback: true,
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn starts_lowercase(text: &str) -> bool {
    text.chars().next().map(|c| c.is_lowercase()).unwrap_or(false)
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Upper-case the first letter of each sentence.
fn capitalize_sentences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_sentence_start = true;
    for ch in text.chars() {
        if at_sentence_start && ch.is_alphabetic() {
            out.extend(ch.to_uppercase());
            at_sentence_start = false;
        } else {
            out.push(ch);
            if matches!(ch, '.' | '!' | '?') {
                at_sentence_start = true;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_capitalization() {
        let draft = enhance_draft("dumping at the docks", "Saw it happen.", "environmental");
        assert!(draft.title.starts_with("Dumping"));
        assert!(draft.improvements.contains(&"Capitalized title".to_string()));
    }

    #[test]
    fn test_whitespace_collapse() {
        let draft = enhance_draft("Title   here", "some   text  here.", "fraud");
        assert_eq!(draft.title, "Title here");
        assert!(draft.description.contains("Some text here."));
    }

    #[test]
    fn test_short_description_gets_skeleton() {
        let draft = enhance_draft("T", "brief note", "fraud");
        assert!(draft.description.starts_with("INCIDENT REPORT - SUSPECTED FINANCIAL FRAUD"));
        assert!(draft.description.contains("**Incident Details:**"));
        assert!(draft.description.contains("**Financial Impact Assessment:**"));
        assert!(draft.local_fallback);
    }

    #[test]
    fn test_long_description_keeps_body_and_adds_status() {
        let body = "A detailed account. ".repeat(15);
        let draft = enhance_draft("T", &body, "theft");
        assert!(draft.description.contains("**Status:** Pending Investigation"));
        assert!(draft.description.contains("A detailed account."));
    }

    #[test]
    fn test_terminal_punctuation_added() {
        let draft = enhance_draft("T", "no period at the end", "other");
        assert!(draft.description.contains("No period at the end."));
    }

    #[test]
    fn test_sentence_capitalization() {
        assert_eq!(
            capitalize_sentences("first part. second part? third"),
            "First part. Second part? Third"
        );
    }
}
