use crate::components::Icon;

/// Lowercases and collapses whitespace runs into `-`, so "Web  Search" and
/// "web-search" share an icon key.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

pub fn skill_icon(name: &str) -> Icon {
    match normalize_name(name).as_str() {
        "websearch" => Icon::Globe,
        "code-interpreter" => Icon::Terminal,
        "file-reader" => Icon::FileCode,
        "json-parser" => Icon::Braces,
        "semantic-search" => Icon::Search,
        _ => Icon::Wrench,
    }
}

pub fn tool_icon(name: &str) -> Icon {
    match normalize_name(name).as_str() {
        "google-search-api" => Icon::Globe,
        "calculator" => Icon::Calculator,
        "weather-fetcher" => Icon::CloudSun,
        "sql-query" => Icon::Database,
        "json-transform" => Icon::Braces,
        _ => Icon::Wrench,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(normalize_name("Code  Interpreter"), "code-interpreter");
        assert_eq!(normalize_name(" WebSearch "), "websearch");
        assert_eq!(normalize_name("Google Search\tAPI"), "google-search-api");
    }

    #[test]
    fn known_names_map_to_icons() {
        assert_eq!(skill_icon("Semantic Search"), Icon::Search);
        assert_eq!(skill_icon("JSON Parser"), Icon::Braces);
        assert_eq!(tool_icon("Weather Fetcher"), Icon::CloudSun);
        assert_eq!(tool_icon("SQL Query"), Icon::Database);
    }

    #[test]
    fn unknown_names_fall_back_to_wrench() {
        assert_eq!(skill_icon("Summarizer"), Icon::Wrench);
        assert_eq!(tool_icon(""), Icon::Wrench);
    }
}
