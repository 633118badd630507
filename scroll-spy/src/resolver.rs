// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::ScrollSpyError;
use crate::section::SectionPosition;

/// Returns the identifier of the last section (in document order) whose top
/// has been reached by `offset`, or the first section when none has.
///
/// `sections` must be in ascending document order. `offset` is the scroll
/// position plus the lookahead bias. When two sections share a top, the later
/// one wins.
///
/// An empty `sections` slice is a configuration error.
pub fn resolve_active_section<'a>(
    sections: &[SectionPosition<'a>],
    offset: f64,
) -> Result<&'a str, ScrollSpyError> {
    let first = sections.first().ok_or(ScrollSpyError::NoSections)?;
    let active = sections
        .iter()
        .rev()
        .find(|section| section.top <= offset)
        .unwrap_or(first);
    Ok(active.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BIAS: f64 = 100.0;

    fn page() -> Vec<SectionPosition<'static>> {
        vec![
            SectionPosition::new("hero", 0.0),
            SectionPosition::new("problem", 800.0),
            SectionPosition::new("solution", 1600.0),
        ]
    }

    #[test]
    fn resolves_sections_at_known_scroll_positions() {
        let sections = page();
        assert_eq!(resolve_active_section(&sections, 750.0 + BIAS), Ok("problem"));
        assert_eq!(resolve_active_section(&sections, 0.0 + BIAS), Ok("hero"));
        assert_eq!(
            resolve_active_section(&sections, 1550.0 + BIAS),
            Ok("solution")
        );
    }

    #[test]
    fn top_is_inclusive() {
        let sections = page();
        assert_eq!(resolve_active_section(&sections, 800.0), Ok("problem"));
        assert_eq!(resolve_active_section(&sections, 799.5), Ok("hero"));
    }

    #[test]
    fn offset_above_every_section_resolves_to_first() {
        let sections = vec![
            SectionPosition::new("intro", 200.0),
            SectionPosition::new("outro", 900.0),
        ];
        assert_eq!(resolve_active_section(&sections, 50.0), Ok("intro"));
        assert_eq!(resolve_active_section(&sections, -300.0), Ok("intro"));
    }

    #[test]
    fn later_section_wins_a_tie() {
        let sections = vec![
            SectionPosition::new("hero", 0.0),
            SectionPosition::new("empty", 500.0),
            SectionPosition::new("market", 500.0),
        ];
        assert_eq!(resolve_active_section(&sections, 600.0), Ok("market"));
    }

    #[test]
    fn empty_sections_are_rejected() {
        assert_eq!(
            resolve_active_section(&[], 0.0),
            Err(ScrollSpyError::NoSections)
        );
    }

    #[test]
    fn result_is_a_member_and_never_moves_backwards() {
        let sections = vec![
            SectionPosition::new("hero", 0.0),
            SectionPosition::new("problem", 640.0),
            SectionPosition::new("solution", 640.0),
            SectionPosition::new("product", 1920.5),
            SectionPosition::new("market", 3100.0),
        ];
        let index_of = |id: &str| sections.iter().position(|s| s.id == id).unwrap();

        let mut previous = 0;
        let mut offset = -250.0;
        while offset < 4000.0 {
            let id = resolve_active_section(&sections, offset).unwrap();
            let index = index_of(id);
            assert!(
                index >= previous,
                "offset {offset} moved back to {id} from index {previous}"
            );
            // Pure: same inputs, same answer.
            assert_eq!(resolve_active_section(&sections, offset), Ok(id));
            previous = index;
            offset += 37.5;
        }
        assert_eq!(previous, sections.len() - 1);
    }
}
