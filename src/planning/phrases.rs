use crate::models::LanguagePhrase;

use super::distinct;

/// Phrases grouped under their categories, categories in encounter order.
pub fn group_by_category(phrases: &[LanguagePhrase]) -> Vec<(String, Vec<&LanguagePhrase>)> {
    distinct(phrases.iter().map(|p| p.category.as_str()))
        .into_iter()
        .map(|category| {
            let members = phrases.iter().filter(|p| p.category == category).collect();
            (category, members)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrase(text: &str, category: &str) -> LanguagePhrase {
        LanguagePhrase {
            phrase: text.to_string(),
            translation: String::new(),
            category: category.to_string(),
        }
    }

    #[test]
    fn groups_keep_encounter_order() {
        let phrases = [phrase("a", "Navigation"), phrase("b", "Shopping"), phrase("c", "Navigation")];
        let groups = group_by_category(&phrases);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Navigation");
        let texts: Vec<_> = groups[0].1.iter().map(|p| p.phrase.as_str()).collect();
        assert_eq!(texts, vec!["a", "c"]);
        assert_eq!(groups[1].0, "Shopping");
    }

    #[test]
    fn no_phrases_no_groups() {
        assert!(group_by_category(&[]).is_empty());
    }
}
