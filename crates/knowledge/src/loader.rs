//! Knowledge base loading and validation.
//!
//! A knowledge base is loaded once at startup. Any missing or empty field is
//! a startup failure; nothing is validated per request.

use crate::types::KnowledgeBase;
use concierge_core::{AppError, AppResult};
use std::fs;
use std::path::Path;

/// Load and validate a knowledge base from a JSON file.
pub fn load_knowledge_base(path: &Path) -> AppResult<KnowledgeBase> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::Knowledge(format!("Failed to read knowledge base at {:?}: {}", path, e))
    })?;

    let kb = parse_knowledge_base(&content)
        .map_err(|e| AppError::Knowledge(format!("{:?}: {}", path, e)))?;

    tracing::info!(
        "Loaded knowledge base for '{}' ({} services, {} FAQ entries)",
        kb.company.name,
        kb.services.len(),
        kb.faq.len()
    );

    Ok(kb)
}

/// Parse and validate a knowledge base from JSON text.
pub fn parse_knowledge_base(content: &str) -> AppResult<KnowledgeBase> {
    let kb: KnowledgeBase = serde_json::from_str(content)
        .map_err(|e| AppError::Knowledge(format!("Invalid knowledge base: {}", e)))?;

    validate(&kb)?;
    Ok(kb)
}

fn require(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Knowledge(format!(
            "Knowledge base field '{}' is empty",
            field
        )));
    }
    Ok(())
}

/// Check that every field is present and non-empty.
pub fn validate(kb: &KnowledgeBase) -> AppResult<()> {
    let company = &kb.company;
    require("company.name", &company.name)?;
    require("company.description", &company.description)?;

    let parent = &company.parent_company_info;
    require("company.parent_company_info.name", &parent.name)?;
    require("company.parent_company_info.ceo", &parent.ceo)?;
    require("company.parent_company_info.chairperson", &parent.chairperson)?;
    require("company.parent_company_info.owner", &parent.owner)?;

    require(
        "company.management.general_manager",
        &company.management.general_manager,
    )?;
    require("company.management.gm_sales", &company.management.gm_sales)?;

    if kb.services.is_empty() {
        return Err(AppError::Knowledge(
            "Knowledge base lists no services".to_string(),
        ));
    }
    for (i, service) in kb.services.iter().enumerate() {
        require(&format!("services[{}].name", i), &service.name)?;
        require(&format!("services[{}].description", i), &service.description)?;
    }

    if kb.pricing.is_empty() {
        return Err(AppError::Knowledge(
            "Knowledge base lists no pricing".to_string(),
        ));
    }
    for (key, price) in kb.pricing.iter() {
        require("pricing key", key)?;
        require(&format!("pricing.{}", key), price)?;
    }

    if kb.tech_stack.is_empty() {
        return Err(AppError::Knowledge(
            "Knowledge base lists no tech stack".to_string(),
        ));
    }
    for (i, tech) in kb.tech_stack.iter().enumerate() {
        require(&format!("tech_stack[{}]", i), tech)?;
    }

    if kb.faq.is_empty() {
        return Err(AppError::Knowledge(
            "Knowledge base has no FAQ entries".to_string(),
        ));
    }
    for (i, entry) in kb.faq.iter().enumerate() {
        require(&format!("faq[{}].question", i), &entry.question)?;
        require(&format!("faq[{}].answer", i), &entry.answer)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = include_str!("../../../dataset.json");

    #[test]
    fn test_parse_sample() {
        let kb = parse_knowledge_base(SAMPLE).unwrap();
        assert_eq!(kb.company.name, "SM Technology");
        assert_eq!(kb.company.parent_company_info.ceo, "MD. Monir Hossain");
        assert_eq!(kb.services.len(), 5);
        assert_eq!(kb.pricing.len(), 5);
        assert_eq!(kb.tech_stack.first().map(String::as_str), Some("React"));
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("dataset.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let kb = load_knowledge_base(&path).unwrap();
        assert_eq!(kb.faq.len(), 7);
    }

    #[test]
    fn test_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = load_knowledge_base(&temp.path().join("absent.json"));
        assert!(matches!(result, Err(AppError::Knowledge(_))));
    }

    #[test]
    fn test_missing_field_fails() {
        let mut value: serde_json::Value = serde_json::from_str(SAMPLE).unwrap();
        value["company"]["management"]
            .as_object_mut()
            .unwrap()
            .remove("gm_sales");

        let err = parse_knowledge_base(&value.to_string()).unwrap_err();
        assert!(err.to_string().contains("gm_sales"));
    }

    #[test]
    fn test_empty_field_fails() {
        let mut value: serde_json::Value = serde_json::from_str(SAMPLE).unwrap();
        value["company"]["parent_company_info"]["ceo"] = serde_json::json!("  ");

        let err = parse_knowledge_base(&value.to_string()).unwrap_err();
        assert!(err.to_string().contains("parent_company_info.ceo"));
    }

    #[test]
    fn test_empty_list_fails() {
        let mut value: serde_json::Value = serde_json::from_str(SAMPLE).unwrap();
        value["tech_stack"] = serde_json::json!([]);

        let err = parse_knowledge_base(&value.to_string()).unwrap_err();
        assert!(err.to_string().contains("tech stack"));
    }

    #[test]
    fn test_empty_faq_answer_fails() {
        let mut value: serde_json::Value = serde_json::from_str(SAMPLE).unwrap();
        value["faq"][2]["answer"] = serde_json::json!("");

        let err = parse_knowledge_base(&value.to_string()).unwrap_err();
        assert!(err.to_string().contains("faq[2].answer"));
    }
}
