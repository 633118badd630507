// SPDX-License-Identifier: MIT OR Apache-2.0

/// Click-to-expand selection: clicking the selected item collapses it,
/// clicking any other item selects that one instead.
pub fn toggle<T: PartialEq>(current: Option<T>, clicked: T) -> Option<T> {
    match current {
        Some(selected) if selected == clicked => None,
        _ => Some(clicked),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_click_collapses() {
        let selected = toggle(None, 2);
        assert_eq!(selected, Some(2));
        assert_eq!(toggle(selected, 2), None);
    }

    #[test]
    fn clicking_another_item_moves_the_selection() {
        assert_eq!(toggle(Some("Replika AI"), "Furby"), Some("Furby"));
    }
}
