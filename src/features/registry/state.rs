use serde_json::{json, Map, Value};

use crate::core::models::{remove_by_id, Skill, SkillPayload, Tool, ToolPayload};

/// Local edits to a skill's detail view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SkillDraft {
    pub description: String,
    pub code: String,
}

impl SkillDraft {
    pub fn from_skill(skill: &Skill) -> Self {
        Self {
            description: skill.description.clone().unwrap_or_default(),
            code: skill.code.clone().unwrap_or_default(),
        }
    }

    /// Draft fields over the last known server copy.
    pub fn merge_into(&self, base: &Skill) -> SkillPayload {
        SkillPayload {
            name: base.name.clone(),
            description: self.description.clone(),
            prompt: base.prompt.clone().unwrap_or_default(),
            code: self.code.clone(),
            tool_ids: base.tool_ids(),
        }
    }
}

/// Local edits to a tool's detail view; the schema is held as editable text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToolDraft {
    pub description: String,
    pub schema_text: String,
}

impl ToolDraft {
    pub fn from_tool(tool: &Tool) -> Self {
        Self {
            description: tool.description.clone().unwrap_or_default(),
            schema_text: schema_to_text(tool.schema.as_ref()),
        }
    }

    pub fn merge_into(&self, base: &Tool) -> ToolPayload {
        ToolPayload {
            name: base.name.clone(),
            description: self.description.clone(),
            schema: parse_schema_text(&self.schema_text),
            credential_config: base.credential_config.clone(),
        }
    }
}

pub fn new_skill_payload(name: &str, description: &str, code: &str) -> SkillPayload {
    SkillPayload {
        name: name.trim().to_string(),
        description: description.to_string(),
        prompt: String::new(),
        code: code.to_string(),
        tool_ids: Vec::new(),
    }
}

pub fn new_tool_payload(name: &str) -> ToolPayload {
    ToolPayload {
        name: name.trim().to_string(),
        description: String::new(),
        schema: json!({}),
        credential_config: None,
    }
}

/// Pretty-printed JSON for the schema editor. String schemas are re-parsed
/// when they hold JSON and shown raw otherwise.
pub fn schema_to_text(schema: Option<&Value>) -> String {
    let pretty = |value: &Value| serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
    match schema {
        None | Some(Value::Null) => "{}".to_string(),
        Some(Value::String(raw)) => match serde_json::from_str::<Value>(raw) {
            Ok(parsed) => pretty(&parsed),
            Err(_) => raw.clone(),
        },
        Some(value) => pretty(value),
    }
}

/// Schema text back to a JSON object. Anything that is not a JSON object
/// becomes `{}`.
pub fn parse_schema_text(text: &str) -> Value {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Value::Object(map),
        _ => Value::Object(Map::new()),
    }
}

/// Case-insensitive match over name or description.
pub fn filter_tools<'a>(tools: &'a [Tool], query: &str) -> Vec<&'a Tool> {
    let needle = query.trim().to_lowercase();
    tools
        .iter()
        .filter(|t| {
            needle.is_empty()
                || t.name.to_lowercase().contains(&needle)
                || t.description.as_deref().unwrap_or_default().to_lowercase().contains(&needle)
        })
        .collect()
}

pub fn clear_if_deleted(selected: Option<String>, deleted_id: &str) -> Option<String> {
    selected.filter(|id| id != deleted_id)
}

/// Drops a deleted item from the local list and the detail selection.
pub fn apply_deletion<T: crate::core::models::Identified>(
    items: &mut Vec<T>,
    selected: &mut Option<String>,
    deleted_id: &str,
) {
    remove_by_id(items, deleted_id);
    *selected = clear_if_deleted(selected.take(), deleted_id);
}

pub fn description_preview(description: Option<&str>) -> String {
    let text = description.unwrap_or_default();
    if text.chars().count() > 50 {
        format!("{}...", text.chars().take(50).collect::<String>())
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool(id: &str, name: &str, description: &str) -> Tool {
        Tool {
            id: id.into(),
            name: name.into(),
            description: Some(description.into()),
            ..Default::default()
        }
    }

    #[test]
    fn invalid_schema_text_becomes_empty_object() {
        assert_eq!(parse_schema_text("not json"), json!({}));
        assert_eq!(parse_schema_text("[1, 2]"), json!({}));
        assert_eq!(parse_schema_text("\"text\""), json!({}));
        assert_eq!(
            parse_schema_text(r#"{"type":"object","required":["query"]}"#),
            json!({ "type": "object", "required": ["query"] })
        );
    }

    #[test]
    fn schema_objects_and_strings_render_pretty() {
        let object = json!({ "type": "object" });
        assert_eq!(schema_to_text(Some(&object)), "{\n  \"type\": \"object\"\n}");
        let string = Value::String(r#"{"type":"object"}"#.into());
        assert_eq!(schema_to_text(Some(&string)), "{\n  \"type\": \"object\"\n}");
        assert_eq!(schema_to_text(Some(&Value::String("free text".into()))), "free text");
        assert_eq!(schema_to_text(None), "{}");
    }

    #[test]
    fn tool_draft_merges_over_server_copy() {
        let mut base = tool("t1", "Calculator", "old");
        base.credential_config = Some(json!({ "env": "CALC_KEY" }));
        let draft = ToolDraft {
            description: "Evaluate expressions".into(),
            schema_text: "not json".into(),
        };

        let payload = draft.merge_into(&base);

        assert_eq!(payload.name, "Calculator");
        assert_eq!(payload.description, "Evaluate expressions");
        assert_eq!(payload.schema, json!({}));
        assert_eq!(payload.credential_config, Some(json!({ "env": "CALC_KEY" })));
    }

    #[test]
    fn skill_draft_keeps_prompt_and_tools() {
        let base = Skill {
            id: "s1".into(),
            name: "WebSearch".into(),
            prompt: Some("search well".into()),
            tools: vec![tool("t1", "Google Search API", "")],
            ..Default::default()
        };
        let draft = SkillDraft {
            description: "Search the web".into(),
            code: "fn search() {}".into(),
        };

        let payload = draft.merge_into(&base);

        assert_eq!(payload.prompt, "search well");
        assert_eq!(payload.tool_ids, vec!["t1".to_string()]);
        assert_eq!(payload.code, "fn search() {}");
    }

    #[test]
    fn tool_search_covers_name_and_description() {
        let tools = vec![
            tool("1", "Calculator", "Evaluate math"),
            tool("2", "SQL Query", "Read-only database access"),
        ];
        let ids = |q: &str| filter_tools(&tools, q).iter().map(|t| t.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids("calc"), ["1"]);
        assert_eq!(ids("DATABASE"), ["2"]);
        assert_eq!(ids("").len(), 2);
    }

    #[test]
    fn deleting_selected_tool_clears_selection() {
        let mut tools = vec![tool("1", "Calculator", ""), tool("2", "SQL Query", "")];
        let mut selected = Some("2".to_string());

        apply_deletion(&mut tools, &mut selected, "2");

        assert_eq!(selected, None);
        assert_eq!(tools.len(), 1);
    }

    #[test]
    fn deleting_other_tool_keeps_selection() {
        let mut tools = vec![tool("1", "Calculator", ""), tool("2", "SQL Query", "")];
        let mut selected = Some("1".to_string());

        apply_deletion(&mut tools, &mut selected, "2");

        assert_eq!(selected.as_deref(), Some("1"));
    }

    #[test]
    fn new_payloads_start_blank() {
        let payload = new_tool_payload("  Web Fetch ");
        assert_eq!(payload.name, "Web Fetch");
        assert_eq!(payload.schema, json!({}));
        assert!(new_skill_payload("X", "", "").tool_ids.is_empty());
    }
}
