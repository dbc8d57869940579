//! Grounding context derived from the knowledge base.

use crate::types::KnowledgeBase;

/// Flatten the knowledge base into newline-joined sentences for the model.
pub fn build_context(kb: &KnowledgeBase) -> String {
    let company = &kb.company;
    let parent = &company.parent_company_info;
    let management = &company.management;

    let mut lines = vec![
        format!("{} is {}", company.name, company.description),
        format!("The CEO of {} is {}.", parent.name, parent.ceo),
        format!("The chairperson of {} is {}.", parent.name, parent.chairperson),
        format!("The owner of {} is {}.", parent.name, parent.owner),
        format!(
            "The General Manager of {} is {}.",
            company.name, management.general_manager
        ),
        format!("The GM of Sales at {} is {}.", company.name, management.gm_sales),
    ];

    let service_names: Vec<&str> = kb.services.iter().map(|s| s.name.as_str()).collect();
    lines.push(format!(
        "{} offers services including: {}",
        company.name,
        service_names.join(", ")
    ));

    for (key, price) in kb.pricing.iter() {
        lines.push(format!(
            "The price for {} is {}.",
            title_case(&key.replace('_', " ")),
            price
        ));
    }

    lines.push(format!(
        "{} uses technologies including: {}",
        company.name,
        kb.tech_stack.join(", ")
    ));

    lines.join("\n")
}

/// Capitalize the first letter of every alphabetic run and lowercase the rest.
///
/// `"ai solutions"` becomes `"Ai Solutions"`; `"3d models"` becomes `"3D Models"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_knowledge_base;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("mobile app development"), "Mobile App Development");
        assert_eq!(title_case("ai solutions"), "Ai Solutions");
        assert_eq!(title_case("CMS development"), "Cms Development");
        assert_eq!(title_case("3d models"), "3D Models");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_context_sentences_in_order() {
        let kb = parse_knowledge_base(include_str!("../../../dataset.json")).unwrap();
        let context = build_context(&kb);
        let lines: Vec<&str> = context.lines().collect();

        assert!(lines[0].starts_with("SM Technology is a leading IT service provider"));
        assert_eq!(lines[1], "The CEO of bdCalling IT is MD. Monir Hossain.");
        assert_eq!(lines[2], "The chairperson of bdCalling IT is MST. Sabina Akter.");
        assert_eq!(lines[3], "The owner of bdCalling IT is MD. Monir Hossain.");
        assert_eq!(lines[4], "The General Manager of SM Technology is MD. Shamim Miah.");
        assert_eq!(lines[5], "The GM of Sales at SM Technology is MD. Jabed.");
        assert_eq!(
            lines[6],
            "SM Technology offers services including: Mobile App Development, \
             Website Development, AI Solutions, CMS Development, Data Entry"
        );
        assert_eq!(
            lines[7],
            "The price for Mobile App Development is starting at $3,500."
        );
        assert_eq!(lines[9], "The price for Ai Solutions is quoted per project.");
        assert_eq!(
            lines[12],
            "SM Technology uses technologies including: React, Next.js, Laravel, \
             Flutter, React Native, Python, Node.js, WordPress, Strapi"
        );
        assert_eq!(lines.len(), 13);
    }
}
