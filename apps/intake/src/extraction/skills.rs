use super::normalize_text;

/// Skill vocabulary, stored lower-case. Matching is plain substring containment,
/// so "java" also fires inside "javascript".
const SKILL_KEYWORDS: &[&str] = &[
    // languages
    "python",
    "java",
    "javascript",
    "html",
    "css",
    "sql",
    "c++",
    "c#",
    "php",
    "ruby",
    "swift",
    "kotlin",
    // frameworks
    "react",
    "angular",
    "vue",
    "node.js",
    "express",
    "django",
    "flask",
    "spring",
    "laravel",
    // databases
    "mysql",
    "postgresql",
    "mongodb",
    "redis",
    "firebase",
    // tooling and cloud
    "git",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "gcp",
    // ML and data
    "machine learning",
    "data science",
    "artificial intelligence",
    "deep learning",
    "neural networks",
    "tensorflow",
    "pytorch",
    "scikit-learn",
    "pandas",
    "numpy",
    "matplotlib",
    // design
    "ui/ux",
    "figma",
    "adobe xd",
    "sketch",
    "photoshop",
    "illustrator",
    // analytics
    "excel",
    "tableau",
    "power bi",
    "data analysis",
    "statistics",
    // soft skills
    "communication",
    "leadership",
    "teamwork",
    "problem solving",
    "critical thinking",
];

/// Returns every vocabulary skill mentioned in `text`, display-formatted,
/// deduplicated and in first-seen order.
///
/// Negated mentions ("no experience with Java") still count.
pub fn extract_skills(text: &str) -> Vec<String> {
    let lower = normalize_text(text);
    let mut found: Vec<String> = Vec::new();

    for keyword in SKILL_KEYWORDS {
        if !lower.contains(keyword) {
            continue;
        }
        let display = display_skill(keyword);
        if !found.contains(&display) {
            found.push(display);
        }
    }

    found
}

/// Upper-cases the first character of every space-separated token.
fn display_skill(keyword: &str) -> String {
    keyword
        .split(' ')
        .map(|token| {
            let mut chars = token.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_has_no_duplicates() {
        for (i, keyword) in SKILL_KEYWORDS.iter().enumerate() {
            assert!(
                !SKILL_KEYWORDS[i + 1..].contains(keyword),
                "duplicate keyword {keyword}"
            );
        }
    }

    #[test]
    fn test_display_form_title_cases_tokens() {
        assert_eq!(display_skill("machine learning"), "Machine Learning");
        assert_eq!(display_skill("c++"), "C++");
        assert_eq!(display_skill("node.js"), "Node.js");
        assert_eq!(display_skill("power bi"), "Power Bi");
    }

    #[test]
    fn test_extracts_case_insensitively() {
        let skills = extract_skills("Worked with PYTHON, Docker and Machine Learning pipelines");
        assert_eq!(skills, vec!["Python", "Docker", "Machine Learning"]);
    }

    #[test]
    fn test_substring_matching_includes_java_in_javascript() {
        let skills = extract_skills("JavaScript developer");
        assert_eq!(skills, vec!["Java", "Javascript"]);
    }

    #[test]
    fn test_negated_mentions_still_count() {
        let skills = extract_skills("No experience with Kotlin.");
        assert_eq!(skills, vec!["Kotlin"]);
    }

    #[test]
    fn test_no_duplicates_and_vocabulary_order() {
        let skills = extract_skills("sql sql SQL mysql react react");
        assert_eq!(skills, vec!["Sql", "React", "Mysql"]);
        let mut deduped = skills.clone();
        deduped.dedup();
        assert_eq!(deduped.len(), skills.len());
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        assert!(extract_skills("").is_empty());
        assert!(extract_skills("Hobbies: trekking and chess").is_empty());
    }
}
