//! Knowledge base type definitions.
//!
//! Field names follow the on-disk JSON (`snake_case`).

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// The immutable fact set the assistant answers from.
#[derive(Debug, Clone, Deserialize)]
pub struct KnowledgeBase {
    pub company: Company,
    pub services: Vec<Service>,
    pub pricing: Pricing,
    pub tech_stack: Vec<String>,
    pub faq: Vec<FaqEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Company {
    pub name: String,
    pub description: String,
    pub parent_company_info: ParentCompany,
    pub management: Management,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParentCompany {
    pub name: String,
    pub ceo: String,
    pub chairperson: String,
    pub owner: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Management {
    pub general_manager: String,
    pub gm_sales: String,
}

/// An offered service.
#[derive(Debug, Clone, Deserialize)]
pub struct Service {
    pub name: String,
    pub description: String,
}

/// A pre-authored question/answer pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// Service key to price, in file order.
///
/// JSON objects are unordered to most deserializers; the grounding context
/// lists prices in the order they were written, so the entries are kept as
/// a sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pricing(Vec<(String, String)>);

impl Pricing {
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self(entries)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<'de> Deserialize<'de> for Pricing {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PricingVisitor;

        impl<'de> Visitor<'de> for PricingVisitor {
            type Value = Pricing;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of service keys to price strings")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries: Vec<(String, String)> =
                    Vec::with_capacity(map.size_hint().unwrap_or(0));

                while let Some((key, value)) = map.next_entry::<String, String>()? {
                    // Last value wins, first position is kept.
                    match entries.iter_mut().find(|(k, _)| *k == key) {
                        Some(entry) => entry.1 = value,
                        None => entries.push((key, value)),
                    }
                }

                Ok(Pricing(entries))
            }
        }

        deserializer.deserialize_map(PricingVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_keeps_file_order() {
        let json = r#"{"website_development": "$2,500", "data_entry": "$500", "ai_solutions": "quote"}"#;
        let pricing: Pricing = serde_json::from_str(json).unwrap();

        let keys: Vec<&str> = pricing.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["website_development", "data_entry", "ai_solutions"]);
    }

    #[test]
    fn test_pricing_duplicate_key_keeps_position() {
        let json = r#"{"a": "1", "b": "2", "a": "3"}"#;
        let pricing: Pricing = serde_json::from_str(json).unwrap();

        assert_eq!(
            pricing,
            Pricing::new(vec![
                ("a".to_string(), "3".to_string()),
                ("b".to_string(), "2".to_string())
            ])
        );
    }

    #[test]
    fn test_pricing_rejects_non_string_price() {
        let json = r#"{"a": 3500}"#;
        assert!(serde_json::from_str::<Pricing>(json).is_err());
    }
}
