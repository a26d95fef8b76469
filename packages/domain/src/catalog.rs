//! Pure derivations behind the tutor directory.
//!
//! Everything here is recomputed from the loaded collection on each render;
//! nothing is cached alongside it.

use crate::models::Tutor;

/// Tutors whose language contains `query`, ignoring case and surrounding
/// whitespace. An empty query keeps every tutor. Order is preserved.
pub fn filter_tutors<'a>(tutors: &'a [Tutor], query: &str) -> Vec<&'a Tutor> {
    let needle = query.trim().to_lowercase();
    tutors
        .iter()
        .filter(|tutor| needle.is_empty() || tutor.category.to_lowercase().contains(&needle))
        .collect()
}

/// Tutors teaching exactly `category` (case-insensitive), or all of them.
pub fn scope_to_category(tutors: Vec<Tutor>, category: Option<&str>) -> Vec<Tutor> {
    match category.map(str::trim).filter(|c| !c.is_empty()) {
        Some(category) => tutors
            .into_iter()
            .filter(|tutor| tutor.category.eq_ignore_ascii_case(category))
            .collect(),
        None => tutors,
    }
}

pub fn directory_heading(category: Option<&str>) -> String {
    match category.map(str::trim).filter(|c| !c.is_empty()) {
        Some(category) => format!("{category} Tutors"),
        None => "Discover Expert Tutors".to_string(),
    }
}

/// "1 tutor" / "3 tutors"
pub fn result_count_label(count: usize) -> String {
    if count == 1 {
        "1 tutor".to_string()
    } else {
        format!("{count} tutors")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Lecturer;

    fn tutor(id: &str, category: &str) -> Tutor {
        Tutor {
            id: id.to_string(),
            image: String::new(),
            category: category.to_string(),
            price: 10.0,
            description: None,
            review_count: 0,
            lecturer: Lecturer::default(),
        }
    }

    fn sample() -> Vec<Tutor> {
        vec![
            tutor("1", "English"),
            tutor("2", "Spanish"),
            tutor("3", "english"),
            tutor("4", "Japanese"),
        ]
    }

    #[test]
    fn test_empty_query_keeps_every_tutor() {
        let tutors = sample();
        assert_eq!(filter_tutors(&tutors, "").len(), tutors.len());
        assert_eq!(filter_tutors(&tutors, "   ").len(), tutors.len());
    }

    #[test]
    fn test_filter_matches_substring_ignoring_case() {
        let tutors = sample();
        let ids: Vec<&str> = filter_tutors(&tutors, "ENG")
            .into_iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);

        let ids: Vec<&str> = filter_tutors(&tutors, "an")
            .into_iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, vec!["2", "4"]);
    }

    #[test]
    fn test_filter_is_exact_for_every_query() {
        let tutors = sample();
        for query in ["", "e", "ish", "x", "Japanese", "SPAN"] {
            let shown = filter_tutors(&tutors, query);
            let needle = query.to_lowercase();
            let expected: Vec<&Tutor> = tutors
                .iter()
                .filter(|t| t.category.to_lowercase().contains(&needle))
                .collect();
            assert_eq!(shown, expected, "query {query:?}");
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let tutors = sample();
        let once: Vec<Tutor> = filter_tutors(&tutors, "ish").into_iter().cloned().collect();
        let twice: Vec<Tutor> = filter_tutors(&once, "ish").into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_no_match_is_empty() {
        let tutors = sample();
        assert!(filter_tutors(&tutors, "Klingon").is_empty());
    }

    #[test]
    fn test_scope_to_category() {
        let scoped = scope_to_category(sample(), Some("English"));
        assert_eq!(scoped.len(), 2);
        assert_eq!(scope_to_category(sample(), None).len(), 4);
        assert_eq!(scope_to_category(sample(), Some("")).len(), 4);
    }

    #[test]
    fn test_directory_heading() {
        assert_eq!(directory_heading(Some("French")), "French Tutors");
        assert_eq!(directory_heading(None), "Discover Expert Tutors");
    }

    #[test]
    fn test_result_count_label() {
        assert_eq!(result_count_label(0), "0 tutors");
        assert_eq!(result_count_label(1), "1 tutor");
        assert_eq!(result_count_label(5), "5 tutors");
    }
}
