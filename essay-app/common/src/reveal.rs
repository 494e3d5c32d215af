//! Typewriter-style reveal of generated text.

/// Delay between two reveal frames, in milliseconds.
pub const REVEAL_STEP_MS: u32 = 7;

/// Yields every prefix of `text`, growing by one `char` per step.
///
/// The first frame is the empty string and the last one is `text` itself, so a
/// text of N chars produces N + 1 frames.
#[derive(Debug, Clone)]
pub struct RevealFrames<'a> {
	text: &'a str,
	cursor: Option<usize>,
}

impl<'a> RevealFrames<'a> {
	pub fn new(text: &'a str) -> Self {
		Self { text, cursor: Some(0) }
	}
}

impl<'a> Iterator for RevealFrames<'a> {
	type Item = &'a str;

	fn next(&mut self) -> Option<Self::Item> {
		let end = self.cursor?;
		self.cursor = self.text[end..].chars().next().map(|c| end + c.len_utf8());
		Some(&self.text[..end])
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.cursor.map_or(0, |end| self.text[end..].chars().count() + 1);
		(remaining, Some(remaining))
	}
}

impl ExactSizeIterator for RevealFrames<'_> {}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn n_plus_one_frames_growing_by_one() {
		let text = "Rust essay";
		let frames: Vec<_> = RevealFrames::new(text).collect();
		assert_eq!(frames.len(), text.chars().count() + 1);
		assert_eq!(frames.first(), Some(&""));
		assert_eq!(frames.last(), Some(&text));
		for pair in frames.windows(2) {
			assert_eq!(pair[1].chars().count(), pair[0].chars().count() + 1);
			assert!(pair[1].starts_with(pair[0]));
		}
	}

	#[test]
	fn empty_text_is_a_single_frame() {
		let frames: Vec<_> = RevealFrames::new("").collect();
		assert_eq!(frames, vec![""]);
	}

	#[test]
	fn multibyte_chars_are_never_split() {
		let text = "é漢🦀";
		let frames: Vec<_> = RevealFrames::new(text).collect();
		assert_eq!(frames, vec!["", "é", "é漢", "é漢🦀"]);
	}

	#[test]
	fn size_hint_tracks_remaining_frames() {
		let mut frames = RevealFrames::new("abc");
		assert_eq!(frames.len(), 4);
		frames.next();
		frames.next();
		assert_eq!(frames.len(), 2);
		frames.by_ref().for_each(drop);
		assert_eq!(frames.len(), 0);
	}
}
