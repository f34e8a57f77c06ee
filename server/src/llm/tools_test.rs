use super::*;

#[test]
fn tool_name_matches_constant() {
    let tool = price_suggestion_tool();
    assert_eq!(tool.name, PRICE_SUGGESTION_TOOL);
}

#[test]
fn schema_requires_all_three_fields() {
    let tool = price_suggestion_tool();
    let required: Vec<&str> = tool.input_schema["required"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    assert_eq!(required, vec!["suggestedPrice", "unit", "source"]);
}

#[test]
fn schema_fields_are_strings() {
    let tool = price_suggestion_tool();
    let props = tool.input_schema["properties"].as_object().unwrap();
    for field in ["suggestedPrice", "unit", "source"] {
        assert_eq!(props[field]["type"].as_str(), Some("string"), "{field} should be a string");
    }
}
