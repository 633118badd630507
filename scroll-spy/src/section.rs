// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::ScrollSpyError;
use crate::resolver::resolve_active_section;

/// A section identifier paired with the measured top of its element, in
/// document pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionPosition<'a> {
    pub id: &'a str,
    pub top: f64,
}

impl<'a> SectionPosition<'a> {
    pub fn new(id: &'a str, top: f64) -> Self {
        Self { id, top }
    }
}

/// The navigable sections of a page, in top-to-bottom order.
///
/// Always non-empty, with unique, non-blank identifiers. The order is the
/// visual page order and the resolver relies on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionList {
    ids: Vec<String>,
}

impl SectionList {
    pub fn new<I, S>(ids: I) -> Result<Self, ScrollSpyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list: Vec<String> = Vec::new();
        for id in ids {
            let id = id.into();
            if id.trim().is_empty() {
                return Err(ScrollSpyError::BlankSection);
            }
            if list.contains(&id) {
                return Err(ScrollSpyError::DuplicateSection(id));
            }
            list.push(id);
        }
        if list.is_empty() {
            return Err(ScrollSpyError::NoSections);
        }
        Ok(Self { ids: list })
    }

    /// The section active at the very top of the page.
    pub fn first(&self) -> &str {
        &self.ids[0]
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.ids.iter().map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|s| s == id)
    }

    /// Measures every section with `top_of`. Sections it cannot locate (not
    /// rendered yet) are left out; document order is preserved.
    pub fn measure<F>(&self, mut top_of: F) -> Vec<SectionPosition<'_>>
    where
        F: FnMut(&str) -> Option<f64>,
    {
        self.iter()
            .filter_map(|id| top_of(id).map(|top| SectionPosition::new(id, top)))
            .collect()
    }

    /// Resolves the active section for `offset` (scroll position plus
    /// lookahead). Falls back to the first section when nothing qualifies,
    /// including when no section is rendered at all.
    pub fn active_at<F>(&self, offset: f64, top_of: F) -> &str
    where
        F: FnMut(&str) -> Option<f64>,
    {
        resolve_active_section(&self.measure(top_of), offset).unwrap_or_else(|_| self.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_list() {
        let empty: [&str; 0] = [];
        assert_eq!(SectionList::new(empty), Err(ScrollSpyError::NoSections));
    }

    #[test]
    fn rejects_blank_and_duplicate_ids() {
        assert_eq!(
            SectionList::new(["hero", "  "]),
            Err(ScrollSpyError::BlankSection)
        );
        assert_eq!(
            SectionList::new(["hero", "team", "hero"]),
            Err(ScrollSpyError::DuplicateSection("hero".into()))
        );
    }

    #[test]
    fn keeps_document_order() {
        let list = SectionList::new(["hero", "problem", "solution"]).unwrap();
        assert_eq!(list.first(), "hero");
        assert_eq!(list.len(), 3);
        assert_eq!(list.position("solution"), Some(2));
        assert!(!list.contains("team"));
        let ids: Vec<&str> = list.iter().collect();
        assert_eq!(ids, vec!["hero", "problem", "solution"]);
    }

    #[test]
    fn measure_skips_unrendered_sections() {
        let list = SectionList::new(["hero", "problem", "solution"]).unwrap();
        let measured = list.measure(|id| match id {
            "hero" => Some(0.0),
            "solution" => Some(1600.0),
            _ => None,
        });
        assert_eq!(
            measured,
            vec![
                SectionPosition::new("hero", 0.0),
                SectionPosition::new("solution", 1600.0)
            ]
        );
    }

    #[test]
    fn active_at_falls_back_to_first_section() {
        let list = SectionList::new(["hero", "problem"]).unwrap();
        assert_eq!(list.active_at(500.0, |_| None), "hero");

        // Hero is not rendered and problem starts below the offset.
        let active = list.active_at(100.0, |id| (id == "problem").then_some(800.0));
        assert_eq!(active, "hero");

        let active = list.active_at(900.0, |id| (id == "problem").then_some(800.0));
        assert_eq!(active, "problem");
    }

    #[test]
    fn active_at_agrees_with_resolver() {
        let list = SectionList::new(["hero", "problem", "solution"]).unwrap();
        let top_of = |id: &str| match id {
            "hero" => Some(0.0),
            "problem" => Some(800.0),
            "solution" => Some(1600.0),
            _ => None,
        };
        let measured = list.measure(top_of);
        for offset in [-10.0, 0.0, 799.0, 800.0, 1599.9, 1600.0, 5000.0] {
            assert_eq!(
                Ok(list.active_at(offset, top_of)),
                resolve_active_section(&measured, offset),
                "offset {offset}"
            );
        }
    }
}
