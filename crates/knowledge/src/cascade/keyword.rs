//! Keyword lookup over an ordered trigger table.
//!
//! Triggers overlap ("price" and "mobile app" can both appear in one
//! question), so the table order decides the answer: the first trigger found
//! in the input wins.

use crate::types::KnowledgeBase;

const PRICING_ANSWER: &str = "Website development at SM Technology starts at $2,500, and mobile app development starts at $3,500, depending on project requirements. CMS development starts at $1,000, and data entry services start at $500 per project.";

const TECHNOLOGIES_ANSWER: &str = "SM Technology works with React, Next.js, Laravel, Flutter, React Native, Python, Node.js, WordPress, and Strapi.";

const PARENT_ANSWER: &str = "SM Technology is a sister concern of bdCalling IT, which is a global company with six sister concerns.";

const OVERVIEW_ANSWER: &str = "SM Technology is a leading IT service provider and a sister concern of bdCalling IT. It specializes in mobile app development, website development, AI solutions, CMS development, and data entry services.";

const MOBILE_APP_ANSWER: &str = "Mobile app development at SM Technology starts at $3,500, with pricing depending on complexity and features. We create high-performance Android and iOS mobile applications using Flutter, React Native, and native technologies.";

const WEBSITE_ANSWER: &str = "Website development at SM Technology starts at $2,500, depending on project requirements. We provide custom website design and development using technologies like React, Next.js, Laravel, and WordPress.";

const SISTER_CONCERNS: &str =
    "Spart Tech Agency, Softvence, SM Technology, Back Bancher, Galaxy, and BdCalling Academy";

/// Ordered trigger phrase to answer mapping.
#[derive(Debug, Clone, Default)]
pub struct KeywordTable {
    entries: Vec<(String, String)>,
}

impl KeywordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a trigger, lowercased.
    ///
    /// An existing trigger keeps its position and takes the new answer.
    pub fn insert(&mut self, trigger: impl AsRef<str>, answer: impl Into<String>) {
        let trigger = trigger.as_ref().to_lowercase();
        let answer = answer.into();

        match self.entries.iter_mut().find(|(t, _)| *t == trigger) {
            Some(entry) => entry.1 = answer,
            None => self.entries.push((trigger, answer)),
        }
    }

    /// Static rules first, then one entry per service and per technology.
    pub fn from_knowledge(kb: &KnowledgeBase) -> Self {
        let company = &kb.company;
        let parent = &company.parent_company_info;
        let management = &company.management;

        let general_manager = format!(
            "The General Manager of {} is {}.",
            company.name, management.general_manager
        );

        let mut table = Self::new();
        table.insert("ceo", format!("The CEO of {} is {}.", parent.name, parent.ceo));
        table.insert(
            "owner",
            format!("The owner of {} is {}.", parent.name, parent.owner),
        );
        table.insert("general manager", general_manager.clone());
        table.insert("gm", general_manager);
        table.insert(
            "sales",
            format!(
                "The GM of Sales at {} is {}.",
                company.name, management.gm_sales
            ),
        );
        table.insert(
            "service",
            format!(
                "{} provides mobile app development, website development, AI solutions, CMS development, and data entry services.",
                company.name
            ),
        );
        table.insert("price", PRICING_ANSWER);
        table.insert("cost", PRICING_ANSWER);
        table.insert("technologies", TECHNOLOGIES_ANSWER);
        table.insert("tech stack", TECHNOLOGIES_ANSWER);
        table.insert(
            "sister",
            format!("The sister concerns of {} are: {}.", parent.name, SISTER_CONCERNS),
        );
        table.insert("parent", PARENT_ANSWER);
        table.insert("what is", OVERVIEW_ANSWER);
        table.insert(
            "chairperson",
            format!(
                "The chairperson of {} is {}.",
                parent.name, parent.chairperson
            ),
        );
        table.insert("mobile app", MOBILE_APP_ANSWER);
        table.insert("website", WEBSITE_ANSWER);

        for service in &kb.services {
            table.insert(&service.name, service.description.clone());
        }

        for tech in &kb.tech_stack {
            table.insert(
                tech,
                format!("Yes, SM Technology works with {} for development.", tech),
            );
        }

        table
    }

    /// Triggers in lookup order.
    pub fn triggers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(t, _)| t.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Answers from the first trigger phrase contained in the input.
#[derive(Debug, Clone)]
pub struct KeywordResolver {
    table: KeywordTable,
}

impl KeywordResolver {
    pub fn new(table: KeywordTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &KeywordTable {
        &self.table
    }

    pub fn find(&self, input: &str) -> Option<&str> {
        let input = input.to_lowercase();

        self.table
            .entries
            .iter()
            .find(|(trigger, _)| input.contains(trigger.as_str()))
            .map(|(trigger, answer)| {
                tracing::trace!("Keyword '{}' matched", trigger);
                answer.as_str()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_knowledge_base;

    fn sample_resolver() -> KeywordResolver {
        let kb = parse_knowledge_base(include_str!("../../../../dataset.json")).unwrap();
        KeywordResolver::new(KeywordTable::from_knowledge(&kb))
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut table = KeywordTable::new();
        table.insert("alpha", "1");
        table.insert("Beta", "2");
        table.insert("ALPHA", "3");

        let triggers: Vec<&str> = table.triggers().collect();
        assert_eq!(triggers, vec!["alpha", "beta"]);

        let resolver = KeywordResolver::new(table);
        assert_eq!(resolver.find("alpha"), Some("3"));
    }

    #[test]
    fn test_first_inserted_trigger_wins() {
        let mut table = KeywordTable::new();
        table.insert("price", "A");
        table.insert("mobile app", "B");
        let resolver = KeywordResolver::new(table);

        assert_eq!(resolver.find("What is the price of a mobile app?"), Some("A"));
        assert_eq!(resolver.find("mobile app price"), Some("A"));
        assert_eq!(resolver.find("mobile app please"), Some("B"));
    }

    #[test]
    fn test_dynamic_entries_follow_statics() {
        let resolver = sample_resolver();
        let triggers: Vec<&str> = resolver.table().triggers().collect();

        assert_eq!(triggers[0], "ceo");
        assert_eq!(triggers[15], "website");
        assert_eq!(triggers[16], "mobile app development");
        assert_eq!(triggers[21], "react");
        assert_eq!(triggers.last().copied(), Some("strapi"));
        assert_eq!(resolver.table().len(), 30);
    }

    #[test]
    fn test_sample_answers() {
        let resolver = sample_resolver();

        assert_eq!(
            resolver.find("Who runs bdCalling as CEO?"),
            Some("The CEO of bdCalling IT is MD. Monir Hossain.")
        );
        assert_eq!(
            resolver.find("Do you work with Laravel?"),
            Some("Yes, SM Technology works with Laravel for development.")
        );
        assert_eq!(
            resolver.find("Who heads SALES?"),
            Some("The GM of Sales at SM Technology is MD. Jabed.")
        );
    }

    #[test]
    fn test_static_trigger_shadows_service_name() {
        let resolver = sample_resolver();

        // "website" is a static trigger and precedes "website development"
        assert_eq!(
            resolver.find("I need website development"),
            Some(WEBSITE_ANSWER)
        );
    }

    #[test]
    fn test_substring_not_token_match() {
        let resolver = sample_resolver();

        // "gm" inside "segment"
        assert_eq!(
            resolver.find("a new segment"),
            Some("The General Manager of SM Technology is MD. Shamim Miah.")
        );
    }

    #[test]
    fn test_no_trigger() {
        let resolver = sample_resolver();
        assert_eq!(resolver.find("hello there"), None);
        assert_eq!(resolver.find(""), None);
    }
}
