//! Fixed catalog of recognized services.
//!
//! Known names get their description appended to the prompt so the model
//! starts from a factual baseline. The table is a compile-time constant;
//! there is no registration API.

use analyzer_types::report::AnalysisRequest;

/// A recognized service: lowercase identifier and a short factual blurb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceRecord {
    pub id: &'static str,
    pub description: &'static str,
}

const SERVICES: &[ServiceRecord] = &[
    ServiceRecord {
        id: "spotify",
        description: "Spotify is a digital music service that gives you access to millions of songs, podcasts, and videos from artists all over the world. Founded in 2006 in Sweden, it offers streaming services with both free and premium subscription options.",
    },
    ServiceRecord {
        id: "notion",
        description: "Notion is an all-in-one workspace that combines note-taking, knowledge management, project management, and database functionality. Founded in 2016, it allows users to create and customize their own productivity systems.",
    },
    ServiceRecord {
        id: "netflix",
        description: "Netflix is a streaming entertainment service with TV series, documentaries and feature films across a wide variety of genres and languages. Founded in 1997, it revolutionized the entertainment industry by moving from DVD-by-mail to streaming.",
    },
    ServiceRecord {
        id: "slack",
        description: "Slack is a business communication platform that brings teams together wherever they are. Founded in 2009, it offers persistent chat rooms organized by topic, private groups, and direct messaging.",
    },
    ServiceRecord {
        id: "discord",
        description: "Discord is a VoIP and instant messaging social platform designed for creating communities. Founded in 2015, it allows users to communicate with voice calls, video calls, text messaging, and media sharing.",
    },
    ServiceRecord {
        id: "github",
        description: "GitHub is a platform for version control and collaboration using Git. Founded in 2008, it allows developers to work together on projects from anywhere, offering repository hosting, code review, and project management features.",
    },
];

/// Read-only view over the built-in service table.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnownServiceCatalog;

impl KnownServiceCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Look up a service by name, ignoring case and surrounding whitespace.
    pub fn lookup(&self, name: &str) -> Option<&'static str> {
        let key = name.trim().to_lowercase();
        SERVICES
            .iter()
            .find(|record| record.id == key)
            .map(|record| record.description)
    }

    /// Derive the analysis request for `raw_input`.
    ///
    /// Known services resolve to `"{raw_input} - {description}"`; anything
    /// else is passed through verbatim.
    pub fn resolve(&self, raw_input: &str) -> AnalysisRequest {
        match self.lookup(raw_input) {
            Some(description) => AnalysisRequest {
                raw_input: raw_input.to_string(),
                is_known: true,
                resolved_info: format!("{raw_input} - {description}"),
            },
            None => AnalysisRequest {
                raw_input: raw_input.to_string(),
                is_known: false,
                resolved_info: raw_input.to_string(),
            },
        }
    }

    /// All records in their fixed order.
    pub fn entries(&self) -> impl Iterator<Item = &'static ServiceRecord> {
        SERVICES.iter()
    }

    pub fn len(&self) -> usize {
        SERVICES.len()
    }

    pub fn is_empty(&self) -> bool {
        SERVICES.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_six_entries() {
        let catalog = KnownServiceCatalog::new();
        assert_eq!(catalog.len(), 6);
        let ids: Vec<&str> = catalog.entries().map(|r| r.id).collect();
        assert_eq!(
            ids,
            vec!["spotify", "notion", "netflix", "slack", "discord", "github"]
        );
    }

    #[test]
    fn test_lookup_exact() {
        let catalog = KnownServiceCatalog::new();
        let desc = catalog.lookup("spotify").unwrap();
        assert!(desc.starts_with("Spotify is a digital music service"));
    }

    #[test]
    fn test_lookup_case_and_whitespace_insensitive() {
        let catalog = KnownServiceCatalog::new();
        assert_eq!(catalog.lookup("  SPOTIFY  "), catalog.lookup("spotify"));
        assert_eq!(catalog.lookup("GitHub"), catalog.lookup("github"));
        assert!(catalog.lookup("\tNotion\n").is_some());
    }

    #[test]
    fn test_lookup_unknown() {
        let catalog = KnownServiceCatalog::new();
        assert!(catalog.lookup("A social media platform for professionals").is_none());
        assert!(catalog.lookup("").is_none());
        assert!(catalog.lookup("spotify premium").is_none());
    }

    #[test]
    fn test_resolve_known_service() {
        let request = KnownServiceCatalog::new().resolve("Spotify");
        assert!(request.is_known);
        assert_eq!(request.raw_input, "Spotify");
        assert!(
            request
                .resolved_info
                .starts_with("Spotify - Spotify is a digital music service")
        );
    }

    #[test]
    fn test_resolve_keeps_raw_input_casing() {
        let request = KnownServiceCatalog::new().resolve("  SPOTIFY  ");
        assert!(request.is_known);
        assert!(request.resolved_info.starts_with("  SPOTIFY   - Spotify is"));
    }

    #[test]
    fn test_resolve_free_text_verbatim() {
        let input = "A social media platform for professionals";
        let request = KnownServiceCatalog::new().resolve(input);
        assert!(!request.is_known);
        assert_eq!(request.resolved_info, input);
    }

    #[test]
    fn test_lookup_is_deterministic() {
        let catalog = KnownServiceCatalog::new();
        for input in ["Slack", "discord", "unknown thing", "   "] {
            assert_eq!(catalog.lookup(input), catalog.lookup(input));
        }
    }
}
