//! Categorised sample questions for exercising the cascade end to end.

/// A named group of sample questions.
#[derive(Debug, Clone, Copy)]
pub struct ProbeCategory {
    pub name: &'static str,
    pub questions: &'static [&'static str],
}

pub const PROBE_CATEGORIES: &[ProbeCategory] = &[
    ProbeCategory {
        name: "company_info",
        questions: &[
            "What is SM Technology?",
            "Who owns SM Technology?",
            "Tell me about bdCalling IT",
            "Who is the CEO of bdCalling IT?",
            "Who is the General Manager of SM Technology?",
            "What's the relationship between SM Technology and bdCalling IT?",
            "Who is the GM of Sales at SM Technology?",
        ],
    },
    ProbeCategory {
        name: "services",
        questions: &[
            "What services does SM Technology offer?",
            "Tell me about your mobile app development services",
            "Do you build AI solutions?",
            "What technologies do you use for website development?",
            "Can you create a WordPress website for me?",
            "Do you offer data entry services?",
            "What kind of CMS development do you provide?",
        ],
    },
    ProbeCategory {
        name: "pricing",
        questions: &[
            "How much does it cost to develop a mobile app?",
            "What's the pricing for website development?",
            "How much would an AI solution cost?",
            "What are your rates for data entry services?",
            "What's the starting price for a CMS development project?",
        ],
    },
    ProbeCategory {
        name: "tech_stack",
        questions: &[
            "What technologies does SM Technology work with?",
            "Do you use React for development?",
            "Can you develop applications with Flutter?",
            "Do you work with Laravel?",
            "Is Next.js part of your tech stack?",
        ],
    },
    ProbeCategory {
        name: "company_structure",
        questions: &[
            "What are the sister concerns of bdCalling IT?",
            "Who is the chairperson of bdCalling IT?",
            "How many sister companies does bdCalling IT have?",
            "Tell me about Spart Tech Agency",
            "Is Back Bancher related to SM Technology?",
        ],
    },
    ProbeCategory {
        name: "complex_queries",
        questions: &[
            "Who is the GM of SM Technology and what services do you provide?",
            "Tell me about your AI solutions and their pricing",
            "What technologies do you use for mobile app development and how much does it cost?",
            "Is SM Technology part of bdCalling IT, and who runs these companies?",
            "Can you develop a website using WordPress and what would be the approximate cost?",
        ],
    },
    ProbeCategory {
        name: "edge_cases",
        questions: &[
            "What's your physical office address?",
            "How many employees work at SM Technology?",
            "When was SM Technology founded?",
            "Can you help me with hardware repair?",
            "Do you offer graphic design services?",
        ],
    },
];

/// Look up a category by name.
pub fn probe_category(name: &str) -> Option<&'static ProbeCategory> {
    PROBE_CATEGORIES.iter().find(|c| c.name == name)
}

pub fn category_names() -> impl Iterator<Item = &'static str> {
    PROBE_CATEGORIES.iter().map(|c| c.name)
}
