//! Free-text term overlap between two profiles.
//!
//! Two terms overlap when either one, lowercased, contains the other. This
//! lets "React" on one side meet "React Native" on the other.

/// Lowercased copy of a term list, computed once per comparison
#[inline]
fn lowered(terms: &[String]) -> Vec<String> {
    terms.iter().map(|t| t.to_lowercase()).collect()
}

#[inline]
fn overlaps(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// Check whether two single terms overlap, ignoring case
#[inline]
pub fn terms_overlap(a: &str, b: &str) -> bool {
    overlaps(&a.to_lowercase(), &b.to_lowercase())
}

/// Terms from `mine` that overlap at least one term in `theirs`
///
/// Order follows `mine`; case variants of a term are reported once, first spelling wins.
pub fn shared_terms(mine: &[String], theirs: &[String]) -> Vec<String> {
    let theirs = lowered(theirs);
    let mut shared: Vec<String> = Vec::new();
    let mut seen: Vec<String> = Vec::new();

    for term in mine {
        let term_lower = term.to_lowercase();
        if seen.contains(&term_lower) {
            continue;
        }
        if theirs.iter().any(|other| overlaps(&term_lower, other)) {
            shared.push(term.clone());
            seen.push(term_lower);
        }
    }

    shared
}

/// Number of distinct terms from `mine` that overlap a term in `theirs`
#[inline]
pub fn count_shared(mine: &[String], theirs: &[String]) -> usize {
    shared_terms(mine, theirs).len()
}

/// Overlap count normalized by the larger of the two list sizes
///
/// Never divides by zero: two empty lists score 0.
#[inline]
pub fn normalized_overlap(shared: usize, mine: usize, theirs: usize) -> f64 {
    shared as f64 / mine.max(theirs).max(1) as f64
}
