//! Keeps the editor DOM and the controller's displayed markup in step.
//!
//! The editable element owns its DOM while the user types, so markup is only pushed
//! into it when the controller produced a value the element has not already reported.
//! Rewriting the element on every keystroke would rebuild its nodes and drop the caret.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorSync {
	in_dom: String,
}

impl EditorSync {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records markup read back from the element after user input or a toolbar command.
	pub fn reported(&mut self, markup: &str) {
		markup.clone_into(&mut self.in_dom);
	}

	/// Returns the markup to write into the element, or `None` when it already shows `value`.
	pub fn push<'a>(&mut self, value: &'a str) -> Option<&'a str> {
		if self.in_dom == value {
			return None;
		}
		value.clone_into(&mut self.in_dom);
		Some(value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{RevealFrames, Theme};

	#[test]
	fn reveal_frames_are_written() {
		let mut sync = EditorSync::new();
		let frames: Vec<_> = RevealFrames::new("ab").map(|f| Theme::Dark.frame(f)).collect();
		for frame in &frames {
			assert_eq!(sync.push(frame), Some(frame.as_str()));
		}
		assert_eq!(sync.push("<h3>ab</h3>"), None);
	}

	#[test]
	fn typed_markup_is_not_written_back() {
		let mut sync = EditorSync::new();
		assert_eq!(sync.push("<h3>abc</h3>"), Some("<h3>abc</h3>"));

		// user types "d": element reports, controller echoes the same value back
		sync.reported("<h3>abcd</h3>");
		assert_eq!(sync.push("<h3>abcd</h3>"), None);

		sync.reported("<h3><b>abcd</b></h3>");
		assert_eq!(sync.push("<h3><b>abcd</b></h3>"), None);
	}

	#[test]
	fn new_generation_overwrites_edits() {
		let mut sync = EditorSync::new();
		sync.reported("<p>my notes</p>");
		assert_eq!(sync.push(""), Some(""));
		assert_eq!(sync.push("<h3></h3>"), Some("<h3></h3>"));
	}
}
