//! Analysis prompt builder.
//!
//! Assembles the user prompt sent with every report request: a role-setting
//! instruction, the service information, the fixed report outline and a
//! trailing note that depends on whether the service was recognized.
//!
//! Layout:
//! ```text
//! You are a professional business analyst ...
//!
//! Service Name and Basic Info:        (or "Service Information:")
//! {service_info}
//!
//! Please generate a detailed, markdown-formatted report ...
//!
//! # Service Analysis Report
//!
//! ## Brief History
//! ...
//! ## Market Position
//! ...
//!
//! Requirements:
//! - ...
//!
//! Note: ...
//! ```

/// Report sections, in the order the model is asked to produce them.
pub const REPORT_SECTIONS: [(&str, &str); 9] = [
    (
        "Brief History",
        "Provide founding year, key milestones, major developments, and evolution of the service.",
    ),
    (
        "Target Audience",
        "Identify and describe the primary user segments and demographics.",
    ),
    (
        "Core Features",
        "List and explain the top 2-4 key functionalities that define the service.",
    ),
    (
        "Unique Selling Points",
        "Highlight the key differentiators that set this service apart from competitors.",
    ),
    (
        "Business Model",
        "Explain how the service generates revenue (subscription, advertising, freemium, etc.).",
    ),
    (
        "Tech Stack Insights",
        "Provide insights about the technologies, platforms, or technical approaches used.",
    ),
    (
        "Perceived Strengths",
        "Identify the standout features, advantages, and positive aspects users typically mention.",
    ),
    (
        "Perceived Weaknesses",
        "Discuss commonly cited drawbacks, limitations, or areas for improvement.",
    ),
    (
        "Market Position",
        "Briefly describe the service's position in its market and competitive landscape.",
    ),
];

const ROLE_INSTRUCTION: &str = "You are a professional business analyst tasked with creating a comprehensive report about a digital service or product.";

const REQUIREMENTS: [&str; 6] = [
    "Use proper markdown formatting",
    "Be comprehensive but concise",
    "Base analysis on factual information",
    "Provide balanced perspective",
    "Use professional tone",
    "Include specific examples where relevant",
];

const KNOWN_SERVICE_NOTE: &str = "Note: This is a well-known service, so please provide detailed and accurate information based on public knowledge.";

const INFERRED_SERVICE_NOTE: &str = "Note: Analyze the provided service description and infer details where reasonable, clearly indicating when information is inferred.";

/// Builds the analysis prompt. Pure and deterministic.
pub struct PromptBuilder;

impl PromptBuilder {
    /// Build the prompt for `service_info`.
    ///
    /// `service_info` is embedded verbatim, even when empty.
    pub fn build(service_info: &str, is_known: bool) -> String {
        let mut sections = Vec::with_capacity(7);

        sections.push(ROLE_INSTRUCTION.to_string());

        let label = if is_known {
            "Service Name and Basic Info:"
        } else {
            "Service Information:"
        };
        sections.push(format!("{label}\n{service_info}"));

        sections.push(
            "Please generate a detailed, markdown-formatted report that includes the following sections:"
                .to_string(),
        );

        let outline: Vec<String> = REPORT_SECTIONS
            .iter()
            .map(|(title, guidance)| format!("## {title}\n{guidance}"))
            .collect();
        sections.push(format!("# Service Analysis Report\n\n{}", outline.join("\n\n")));

        let requirements: Vec<String> = REQUIREMENTS.iter().map(|r| format!("- {r}")).collect();
        sections.push(format!("Requirements:\n{}", requirements.join("\n")));

        sections.push(
            if is_known {
                KNOWN_SERVICE_NOTE
            } else {
                INFERRED_SERVICE_NOTE
            }
            .to_string(),
        );

        sections.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_positions(prompt: &str) -> Vec<usize> {
        REPORT_SECTIONS
            .iter()
            .map(|(title, _)| {
                prompt
                    .find(&format!("## {title}\n"))
                    .unwrap_or_else(|| panic!("missing section {title}"))
            })
            .collect()
    }

    #[test]
    fn test_known_prompt_contains_public_knowledge_note() {
        let prompt = PromptBuilder::build("Spotify - Spotify is ...", true);
        assert!(prompt.contains("well-known service"));
        assert!(!prompt.contains("Analyze the provided service description"));
        assert!(prompt.contains("Service Name and Basic Info:\nSpotify - Spotify is ..."));
    }

    #[test]
    fn test_unknown_prompt_contains_inference_note() {
        let prompt = PromptBuilder::build("A social media platform for professionals", false);
        assert!(prompt.contains("Analyze the provided service description"));
        assert!(!prompt.contains("well-known service"));
        assert!(prompt.contains("Service Information:\nA social media platform for professionals"));
    }

    #[test]
    fn test_sections_in_fixed_order() {
        for is_known in [true, false] {
            let prompt = PromptBuilder::build("anything", is_known);
            let positions = header_positions(&prompt);
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_note_is_trailing() {
        let prompt = PromptBuilder::build("x", true);
        assert!(prompt.ends_with(KNOWN_SERVICE_NOTE));
        let prompt = PromptBuilder::build("x", false);
        assert!(prompt.ends_with(INFERRED_SERVICE_NOTE));
    }

    #[test]
    fn test_role_instruction_first() {
        let prompt = PromptBuilder::build("x", false);
        assert!(prompt.starts_with("You are a professional business analyst"));
    }

    #[test]
    fn test_empty_info_passes_through() {
        let prompt = PromptBuilder::build("", false);
        assert!(prompt.contains("Service Information:\n\n"));
        let prompt = PromptBuilder::build("   ", false);
        assert!(prompt.contains("Service Information:\n   \n"));
    }

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(
            PromptBuilder::build("Notion", true),
            PromptBuilder::build("Notion", true)
        );
    }
}
