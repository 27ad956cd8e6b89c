/*!
 * Medical terminology correction for machine-translated text.
 *
 * Generic translation engines render some clinical terms with their
 * everyday meaning ("arrest" as a police arrest, "culture" as the arts).
 * A `TerminologyMap` lists such wrong fragments together with the term
 * that should replace them. Rules apply in list order, and a later rule
 * may match text inserted by an earlier one.
 */

use serde::{Deserialize, Serialize};

/// One correction rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermCorrection {
    /// Fragment produced by the translation engine
    pub wrong: String,
    /// Fragment it should become
    pub right: String,
}

impl TermCorrection {
    pub fn new(wrong: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            wrong: wrong.into(),
            right: right.into(),
        }
    }
}

/// Ordered set of correction rules
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TerminologyMap {
    entries: Vec<TermCorrection>,
}

impl TerminologyMap {
    /// Empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Default Korean medical corrections.
    ///
    /// "심장 체포" comes before "체포" so the compound term wins.
    pub fn medical_defaults() -> Self {
        let mut map = Self::new();
        map.insert("심장 체포", "심정지");
        map.insert("체포", "정지(Arrest)");
        map.insert("문화", "배양");
        map
    }

    /// Add a rule, or replace the target of an existing rule with the same key
    pub fn insert(&mut self, wrong: impl Into<String>, right: impl Into<String>) {
        let wrong = wrong.into();
        let right = right.into();
        if let Some(existing) = self.entries.iter_mut().find(|e| e.wrong == wrong) {
            existing.right = right;
        } else {
            self.entries.push(TermCorrection { wrong, right });
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TermCorrection> {
        self.entries.iter()
    }

    /// Apply every rule to `text`
    pub fn correct(&self, text: &str) -> String {
        correct(text, self)
    }
}

impl FromIterator<TermCorrection> for TerminologyMap {
    fn from_iter<I: IntoIterator<Item = TermCorrection>>(iter: I) -> Self {
        let mut map = Self::new();
        for entry in iter {
            map.insert(entry.wrong, entry.right);
        }
        map
    }
}

/// Apply `map` to `text`.
///
/// A rule fires when its key occurs case-insensitively; the occurrences
/// replaced are the key as given plus its lowercase, title-case and
/// all-caps spellings. Other mixed-case spellings are left alone.
pub fn correct(text: &str, map: &TerminologyMap) -> String {
    let mut corrected = text.to_string();

    for entry in map.iter() {
        if entry.wrong.is_empty() {
            continue;
        }
        if !corrected.to_lowercase().contains(&entry.wrong.to_lowercase()) {
            continue;
        }
        corrected = replace_variants(&corrected, &case_variants(&entry.wrong), &entry.right);
    }

    corrected
}

/// Single left-to-right pass so a rule never re-matches its own output
fn replace_variants(text: &str, variants: &[String], replacement: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(ch) = rest.chars().next() {
        if let Some(variant) = variants.iter().find(|v| rest.starts_with(v.as_str())) {
            out.push_str(replacement);
            rest = &rest[variant.len()..];
        } else {
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }

    out
}

fn case_variants(word: &str) -> Vec<String> {
    let mut variants = Vec::with_capacity(4);
    for candidate in [
        word.to_string(),
        word.to_lowercase(),
        title_case(word),
        word.to_uppercase(),
    ] {
        if !variants.contains(&candidate) {
            variants.push(candidate);
        }
    }
    variants
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
