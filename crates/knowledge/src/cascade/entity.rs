//! "Who is X" questions resolved against a static alias table.

use crate::refusals::{unknown_entity, MISSING_NAME};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

const MONIR: &str =
    "MD. Monir Hossain is the CEO and owner of bdCalling IT, the parent company of SM Technology.";
const SABINA: &str =
    "MST. Sabina Akter is the Chairperson of bdCalling IT, the parent company of SM Technology.";
const SHAMIM: &str = "MD. Shamim Miah is the General Manager of SM Technology.";
const JABED: &str = "MD. Jabed is the GM of Sales at SM Technology.";

const SM_TECHNOLOGY: &str = "SM Technology is a leading IT service provider and a sister concern of bdCalling IT. It specializes in mobile app development, website development, AI solutions, CMS development, and data entry services.";
const BDCALLING: &str = "bdCalling IT is a global company with six sister concerns, including SM Technology. The CEO is MD. Monir Hossain and the Chairperson is MST. Sabina Akter.";
const SPART_TECH: &str = "Spart Tech Agency is a sister concern of bdCalling IT.";

/// Known people: every alias maps to the same sentence.
const PEOPLE: &[(&[&str], &str)] = &[
    (
        &[
            "monir",
            "hossain",
            "monir hossain",
            "md. monir hossain",
            "md monir hossain",
        ],
        MONIR,
    ),
    (
        &[
            "sabina",
            "akter",
            "sabina akter",
            "mst. sabina akter",
            "mst sabina akter",
        ],
        SABINA,
    ),
    (
        &[
            "shamim",
            "miah",
            "shamim miah",
            "md. shamim miah",
            "md shamim miah",
        ],
        SHAMIM,
    ),
    (&["jabed", "md. jabed", "md jabed"], JABED),
];

const COMPANIES: &[(&[&str], &str)] = &[
    (&["sm technology", "sm"], SM_TECHNOLOGY),
    (&["bdcalling", "bdcalling it"], BDCALLING),
    (&["spart tech", "spart tech agency"], SPART_TECH),
    (&["softvence"], "Softvence is a sister concern of bdCalling IT."),
    (&["back bancher"], "Back Bancher is a sister concern of bdCalling IT."),
    (&["galaxy"], "Galaxy is a sister concern of bdCalling IT."),
    (
        &["bdcalling academy"],
        "BdCalling Academy is a sister concern of bdCalling IT.",
    ),
];

/// Question patterns, each paired with the capture group holding the name.
static QUESTION_PATTERNS: LazyLock<Vec<(Regex, usize)>> = LazyLock::new(|| {
    [
        (r"who is (\w+\s*\w*)", 1),
        (r"tell me about (\w+\s*\w*)", 1),
        (r"who('s| is) (\w+\s*\w*)", 2),
        (r"what do you know about (\w+\s*\w*)", 1),
    ]
    .into_iter()
    .map(|(pattern, group)| {
        (
            Regex::new(pattern).expect("entity question regex is valid"),
            group,
        )
    })
    .collect()
});

/// Lowercase alias to canonical fact sentence.
#[derive(Debug, Clone)]
pub struct AliasTable {
    entries: HashMap<&'static str, &'static str>,
}

impl AliasTable {
    fn from_groups(groups: &[(&[&'static str], &'static str)]) -> Self {
        let entries = groups
            .iter()
            .flat_map(|(aliases, fact)| aliases.iter().map(move |alias| (*alias, *fact)))
            .collect();
        Self { entries }
    }

    pub fn people() -> Self {
        Self::from_groups(PEOPLE)
    }

    pub fn companies() -> Self {
        Self::from_groups(COMPANIES)
    }

    pub fn get(&self, alias: &str) -> Option<&'static str> {
        self.entries.get(alias).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Detects person/company questions and answers them from the alias tables.
#[derive(Debug, Clone)]
pub struct EntityResolver {
    people: AliasTable,
    companies: AliasTable,
}

impl Default for EntityResolver {
    fn default() -> Self {
        Self::new(AliasTable::people(), AliasTable::companies())
    }
}

impl EntityResolver {
    pub fn new(people: AliasTable, companies: AliasTable) -> Self {
        Self { people, companies }
    }

    /// Name captured by the first matching question pattern.
    pub fn extract_name(input: &str) -> Option<String> {
        let input = input.to_lowercase();

        QUESTION_PATTERNS.iter().find_map(|(pattern, group)| {
            pattern
                .captures(&input)
                .map(|caps| caps.get(*group).map(|m| m.as_str().to_string()))
        })?
    }

    pub fn is_person_or_entity_query(&self, input: &str) -> bool {
        let input = input.to_lowercase();
        QUESTION_PATTERNS.iter().any(|(pattern, _)| pattern.is_match(&input))
    }

    /// Fact sentence for the referenced name, or a refusal naming it.
    pub fn resolve(&self, input: &str) -> String {
        let name = match Self::extract_name(input) {
            Some(name) => name.trim().to_lowercase(),
            None => return MISSING_NAME.to_string(),
        };

        if name.is_empty() {
            return MISSING_NAME.to_string();
        }

        if let Some(fact) = self.people.get(&name) {
            return fact.to_string();
        }

        if let Some(fact) = self.companies.get(&name) {
            return fact.to_string();
        }

        tracing::debug!("No alias for '{}'", name);
        unknown_entity(&name)
    }
}
