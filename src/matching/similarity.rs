//! String similarity and skill normalization shared by the matcher

use strsim::normalized_levenshtein;

/// Common alternate spellings folded onto one canonical skill name
const SKILL_ALIASES: &[(&str, &str)] = &[
    ("golang", "go"),
    ("js", "javascript"),
    ("ts", "typescript"),
    ("node", "node.js"),
    ("nodejs", "node.js"),
    ("reactjs", "react"),
    ("react.js", "react"),
    ("vuejs", "vue"),
    ("vue.js", "vue"),
    ("k8s", "kubernetes"),
    ("postgres", "postgresql"),
    ("psql", "postgresql"),
    ("mongo", "mongodb"),
    ("py", "python"),
    ("c sharp", "c#"),
    ("csharp", "c#"),
    ("cpp", "c++"),
    ("amazon web services", "aws"),
    ("gcp", "google cloud"),
    ("ml", "machine learning"),
];

/// Lower-case, trim, collapse inner whitespace and fold known aliases.
pub fn normalize_skill(skill: &str) -> String {
    let collapsed = skill
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    SKILL_ALIASES
        .iter()
        .find(|(alias, _)| *alias == collapsed)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or(collapsed)
}

/// Similarity in [0, 1]: `1 - levenshtein(a, b) / max(len(a), len(b))`,
/// measured in characters. Two empty strings are identical.
///
/// Cost is `O(len(a) * len(b))` per call.
pub fn similarity(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b)
}

/// Highest similarity between `needle` and any of `haystack`, with its index
pub fn best_similarity<'a, I>(needle: &str, haystack: I) -> Option<(usize, f64)>
where
    I: IntoIterator<Item = &'a String>,
{
    haystack
        .into_iter()
        .enumerate()
        .map(|(idx, candidate)| (idx, similarity(needle, candidate)))
        .fold(None, |best, current| match best {
            Some((_, score)) if score >= current.1 => best,
            _ => Some(current),
        })
}

/// Case-insensitive containment in either direction
pub fn contains_either(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    !a.is_empty() && !b.is_empty() && (a.contains(&b) || b.contains(&a))
}
