use serde::{Deserialize, Serialize};

/// Which overlay panel is shown under the search input. Derived on every
/// read, never stored, so contradictory flag combinations are unreachable.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dropdown {
	None,
	History,
	Suggestions,
}

/// Which collection the results pane renders. A three-way exclusive state:
/// activating favorites or recents deactivates the other.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
	#[default]
	Normal,
	Favorites,
	Recents,
}
impl ViewMode {
	pub fn toggle_favorites(self) -> Self {
		match self {
			Self::Favorites => Self::Normal,
			_ => Self::Favorites,
		}
	}

	pub fn toggle_recents(self) -> Self {
		match self {
			Self::Recents => Self::Normal,
			_ => Self::Recents,
		}
	}
}

#[derive(Clone, Copy, Debug)]
pub struct DropdownInputs {
	pub focused: bool,
	pub hovered: bool,
	pub query_chars: usize,
	/// Minimum query length for suggestions to be eligible.
	pub min_query_chars: usize,
	pub suggestion_count: usize,
	pub history_count: usize,
}

pub fn derive_dropdown(inputs: &DropdownInputs) -> Dropdown {
	if !(inputs.focused || inputs.hovered) {
		return Dropdown::None;
	}
	if inputs.query_chars >= inputs.min_query_chars && inputs.suggestion_count > 0 {
		return Dropdown::Suggestions;
	}
	if inputs.query_chars == 0 && inputs.history_count > 0 {
		return Dropdown::History;
	}

	Dropdown::None
}

#[cfg(test)]
mod tests {
	use super::*;

	fn inputs(
		focused: bool,
		hovered: bool,
		query_chars: usize,
		suggestion_count: usize,
		history_count: usize,
	) -> DropdownInputs {
		DropdownInputs {
			focused,
			hovered,
			query_chars,
			min_query_chars: 2,
			suggestion_count,
			history_count,
		}
	}

	#[test]
	fn exactly_one_state_holds_for_every_input() {
		for focused in [false, true] {
			for hovered in [false, true] {
				for query_chars in 0..4 {
					for suggestion_count in 0..3 {
						for history_count in 0..3 {
							let state = derive_dropdown(&inputs(
								focused,
								hovered,
								query_chars,
								suggestion_count,
								history_count,
							));

							if !(focused || hovered) {
								assert_eq!(state, Dropdown::None);
							}
							if state == Dropdown::Suggestions {
								assert!(query_chars >= 2 && suggestion_count > 0);
							}
							if state == Dropdown::History {
								assert!(query_chars == 0 && history_count > 0);
							}
						}
					}
				}
			}
		}
	}

	#[test]
	fn focused_empty_query_with_history_shows_history() {
		assert_eq!(derive_dropdown(&inputs(true, false, 0, 0, 3)), Dropdown::History);
	}

	#[test]
	fn one_typed_character_is_eligible_for_neither_panel() {
		assert_eq!(derive_dropdown(&inputs(true, false, 1, 0, 3)), Dropdown::None);
	}

	#[test]
	fn hover_alone_keeps_suggestions_open() {
		assert_eq!(derive_dropdown(&inputs(false, true, 4, 2, 0)), Dropdown::Suggestions);
	}

	#[test]
	fn suggestions_win_over_history_when_both_could_apply() {
		// History needs an empty query, so the two panels are mutually
		// exclusive by construction; a non-empty query with suggestions shows
		// suggestions regardless of history size.
		assert_eq!(derive_dropdown(&inputs(true, false, 2, 1, 5)), Dropdown::Suggestions);
	}

	#[test]
	fn view_mode_toggles_are_exclusive() {
		let mode = ViewMode::Normal;
		let favorites = mode.toggle_favorites();

		assert_eq!(favorites, ViewMode::Favorites);

		let recents = favorites.toggle_recents();

		assert_eq!(recents, ViewMode::Recents);
		assert_eq!(recents.toggle_recents(), ViewMode::Normal);
		assert_eq!(ViewMode::Favorites.toggle_favorites(), ViewMode::Normal);
	}
}
