use overlap_measures::jaccard_similarity_chars;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_and_distinct_characters() {
        // distinct("night") = {n,i,g,h,t}, distinct("nacht") = {n,a,c,h,t},
        // shared = {n,h,t}, union = 7
        let score = jaccard_similarity_chars("night", "nacht");
        assert!((score - 3.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_identical_terms() {
        assert_eq!(jaccard_similarity_chars("night", "night"), 1.0);
        assert_eq!(jaccard_similarity_chars("a", "a"), 1.0);
    }

    #[test]
    fn test_disjoint_terms() {
        assert_eq!(jaccard_similarity_chars("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_duplicate_characters_are_suppressed() {
        // "aa" and "a" both reduce to the distinct set {a}
        assert_eq!(jaccard_similarity_chars("aa", "a"), 1.0);
        assert_eq!(jaccard_similarity_chars("aabbcc", "abc"), 1.0);
    }

    #[test]
    fn test_duplicate_invariance() {
        // "mississippi" and "dismiss" reduce to "misp" and "dims"
        assert_eq!(
            jaccard_similarity_chars("mississippi", "dismiss"),
            jaccard_similarity_chars("misp", "dims")
        );
    }

    #[test]
    fn test_symmetry() {
        let pairs = [("night", "nacht"), ("aa", "a"), ("abc", "xyz"), ("", "abc")];

        for (s, t) in pairs {
            assert_eq!(
                jaccard_similarity_chars(s, t),
                jaccard_similarity_chars(t, s),
                "Expected symmetric score for ({:?}, {:?})",
                s,
                t
            );
        }
    }

    #[test]
    fn test_score_stays_in_unit_interval() {
        let pairs = [
            ("night", "nacht"),
            ("mississippi", "missouri"),
            ("aa", "a"),
            ("abc", "xyz"),
            ("", "abc"),
        ];

        for (s, t) in pairs {
            let score = jaccard_similarity_chars(s, t);
            assert!(
                (0.0..=1.0).contains(&score),
                "Score {} for ({:?}, {:?}) is out of range",
                score,
                s,
                t
            );
        }
    }

    #[test]
    fn test_one_empty_term() {
        assert_eq!(jaccard_similarity_chars("", "abc"), 0.0);
    }

    #[test]
    fn test_both_terms_empty() {
        // The zero-union case is defined as 0.0 rather than dividing by zero
        assert_eq!(jaccard_similarity_chars("", ""), 0.0);
    }

    #[test]
    fn test_non_ascii_characters() {
        // distinct("grüße") = {g,r,ü,ß,e}, distinct("grüsse") = {g,r,ü,s,e},
        // shared = {g,r,ü,e}, union = 6
        let score = jaccard_similarity_chars("grüße", "grüsse");
        assert!((score - 4.0 / 6.0).abs() < 1e-9);
    }
}
