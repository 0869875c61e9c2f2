//! Hierarchy classification from free-text job titles.
//!
//! This module maps a position title to exactly one tier of the configured
//! catalog. Matching is whole-token rather than substring: a keyword only
//! matches when its tokens appear as a contiguous run of the title's tokens,
//! so a director-level keyword buried inside a longer word can no longer
//! capture an assistant-level title. When several tiers match, the longest
//! keyword wins; equal-length matches fall back to catalog order, which makes
//! tier precedence an explicit, testable property of the configuration.

use crate::config::{TierCatalog, TierDefinition};

/// Splits a title into lowercase alphanumeric tokens.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Returns true when `needle` occurs as a contiguous run inside `haystack`.
fn contains_token_run(haystack: &[String], needle: &[String]) -> bool {
    if needle.is_empty() || needle.len() > haystack.len() {
        return false;
    }
    haystack.windows(needle.len()).any(|w| w == needle)
}

/// Classifies a job title into a tier of the catalog.
///
/// Always returns exactly one tier: an absent, empty or unmatched title
/// resolves to the catalog's configured default tier.
///
/// # Example
///
/// ```
/// use diversity_engine::analytics::classify_title;
/// use diversity_engine::config::ConfigLoader;
///
/// # fn main() -> Result<(), diversity_engine::error::EngineError> {
/// let loader = ConfigLoader::load("./config/default")?;
/// let catalog = loader.config().catalog();
///
/// assert_eq!(classify_title(Some("Diretora Comercial"), catalog).key, "directorate");
/// assert_eq!(classify_title(None, catalog).key, "operational");
/// # Ok(())
/// # }
/// ```
pub fn classify_title<'a>(title: Option<&str>, catalog: &'a TierCatalog) -> &'a TierDefinition {
    let tokens = match title {
        Some(t) => tokenize(t),
        None => return catalog.default_tier(),
    };
    if tokens.is_empty() {
        return catalog.default_tier();
    }

    // (match length, catalog position) of the best match so far. Longer
    // keywords win; on equal length the earlier catalog tier keeps the match.
    let mut best: Option<(usize, usize)> = None;

    for (position, tier) in catalog.tiers.iter().enumerate() {
        for keyword in &tier.keywords {
            let keyword_tokens = tokenize(keyword);
            if !contains_token_run(&tokens, &keyword_tokens) {
                continue;
            }
            let length: usize = keyword_tokens.iter().map(String::len).sum();
            let better = match best {
                None => true,
                Some((best_length, _)) => length > best_length,
            };
            if better {
                best = Some((length, position));
            }
        }
    }

    match best {
        Some((_, position)) => &catalog.tiers[position],
        None => catalog.default_tier(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TierCatalog;

    fn tier(key: &str, rank: u8, keywords: &[&str]) -> TierDefinition {
        TierDefinition {
            key: key.to_string(),
            name: key.to_string(),
            rank,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    fn test_catalog() -> TierCatalog {
        TierCatalog {
            tiers: vec![
                tier("c_level", 6, &["ceo", "cfo", "chief", "presidente", "president"]),
                tier(
                    "directorate",
                    5,
                    &["diretor", "diretora", "director", "vice president", "head"],
                ),
                tier("management", 4, &["gerente", "manager"]),
                tier("coordination", 3, &["coordenador", "supervisor", "lead"]),
                tier(
                    "operational",
                    2,
                    &["analista", "analyst", "assistente", "assistant"],
                ),
                tier("trainee", 1, &["estagiario", "trainee", "intern"]),
            ],
            default_tier: "operational".to_string(),
            base_tier: "operational".to_string(),
            leadership_tiers: vec!["c_level".to_string(), "directorate".to_string()],
        }
    }

    #[test]
    fn test_classifies_simple_titles() {
        let catalog = test_catalog();
        assert_eq!(classify_title(Some("CEO"), &catalog).key, "c_level");
        assert_eq!(
            classify_title(Some("Diretor Comercial"), &catalog).key,
            "directorate"
        );
        assert_eq!(
            classify_title(Some("Gerente de Vendas"), &catalog).key,
            "management"
        );
        assert_eq!(
            classify_title(Some("Analista de Dados Pleno"), &catalog).key,
            "operational"
        );
        assert_eq!(classify_title(Some("Trainee"), &catalog).key, "trainee");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let catalog = test_catalog();
        assert_eq!(classify_title(Some("GERENTE GERAL"), &catalog).key, "management");
        assert_eq!(classify_title(Some("gerente geral"), &catalog).key, "management");
    }

    #[test]
    fn test_none_and_empty_titles_fall_back_to_default() {
        let catalog = test_catalog();
        assert_eq!(classify_title(None, &catalog).key, "operational");
        assert_eq!(classify_title(Some(""), &catalog).key, "operational");
        assert_eq!(classify_title(Some("   "), &catalog).key, "operational");
    }

    #[test]
    fn test_unmatched_title_falls_back_to_default() {
        let catalog = test_catalog();
        assert_eq!(
            classify_title(Some("Consultor Externo"), &catalog).key,
            "operational"
        );
    }

    #[test]
    fn test_keyword_inside_longer_word_does_not_match() {
        let catalog = test_catalog();
        // "Diretoria" contains "diretor" as a substring but not as a token,
        // so the assistant keyword is the only match.
        assert_eq!(
            classify_title(Some("Assistente de Diretoria"), &catalog).key,
            "operational"
        );
    }

    #[test]
    fn test_longest_keyword_wins_across_tiers() {
        let catalog = test_catalog();
        // "vice president" (directorate) outscores "president" (c_level).
        assert_eq!(
            classify_title(Some("Vice President of Sales"), &catalog).key,
            "directorate"
        );
        // A bare "President" still lands in c_level.
        assert_eq!(classify_title(Some("President"), &catalog).key, "c_level");
    }

    #[test]
    fn test_equal_length_ties_break_by_catalog_order() {
        let mut catalog = test_catalog();
        catalog.tiers[2].keywords.push("chefe".to_string()); // management
        catalog.tiers[3].keywords.push("chefe".to_string()); // coordination
        assert_eq!(classify_title(Some("Chefe de Equipe"), &catalog).key, "management");
    }

    #[test]
    fn test_punctuation_and_hyphenation_are_token_boundaries() {
        let catalog = test_catalog();
        assert_eq!(
            classify_title(Some("Analista/Comprador - Senior"), &catalog).key,
            "operational"
        );
        assert_eq!(
            classify_title(Some("Head, Customer Success"), &catalog).key,
            "directorate"
        );
    }

    #[test]
    fn test_multiword_keyword_requires_contiguous_tokens() {
        let catalog = test_catalog();
        // "vice" and "president" separated by another token only match the
        // single-token "president" keyword.
        assert_eq!(
            classify_title(Some("Vice Executive President"), &catalog).key,
            "c_level"
        );
    }
}
