//! State machine behind the essay generator page.
//!
//! Every generation gets a fresh [`GenerationToken`]. Starting another generation
//! replaces the current token, and all late writes (request completions as well as
//! reveal frames) are dropped unless they carry the token that is still current.

use crate::{AppError, GenerationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GenerationToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateMode {
	/// Main submit button. Sends the keywords as typed, even when empty.
	Initial,
	/// Regenerate button on the result card. Refuses blank keywords.
	Regenerate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageController {
	keywords: String,
	is_loading: bool,
	error: Option<AppError>,
	generated: Option<GenerationResult>,
	displayed: String,
	current: Option<GenerationToken>,
	issued: u64,
}

impl PageController {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn keywords(&self) -> &str {
		&self.keywords
	}

	pub fn is_loading(&self) -> bool {
		self.is_loading
	}

	pub fn error(&self) -> Option<&AppError> {
		self.error.as_ref()
	}

	pub fn generated(&self) -> Option<&GenerationResult> {
		self.generated.as_ref()
	}

	pub fn displayed(&self) -> &str {
		&self.displayed
	}

	pub fn submit_label(&self) -> &'static str {
		if self.is_loading { "Generating..." } else { "Generate Essay" }
	}

	pub fn is_current(&self, token: GenerationToken) -> bool {
		self.current == Some(token)
	}

	pub fn set_keywords(&mut self, keywords: impl Into<String>) {
		self.keywords = keywords.into();
	}

	/// Supersedes whatever generation was running and starts a new one.
	///
	/// The previous token is invalidated even when the new generation is refused, so a
	/// blank regenerate still stops the old request and its reveal.
	pub fn begin(&mut self, mode: GenerateMode) -> Result<GenerationToken, AppError> {
		self.issued += 1;
		let token = GenerationToken(self.issued);

		if mode == GenerateMode::Regenerate && self.keywords.trim().is_empty() {
			self.current = None;
			self.is_loading = false;
			self.error = Some(AppError::EmptyKeywords);
			return Err(AppError::EmptyKeywords);
		}

		self.current = Some(token);
		self.is_loading = true;
		self.error = None;
		self.displayed.clear();
		Ok(token)
	}

	/// Applies the outcome of a request.
	///
	/// Returns the content to reveal when the outcome belongs to the current generation
	/// and succeeded. Stale outcomes leave the state untouched.
	pub fn finish(&mut self, token: GenerationToken, outcome: Result<GenerationResult, AppError>) -> Option<String> {
		if !self.is_current(token) {
			return None;
		}
		self.is_loading = false;
		match outcome {
			Ok(result) => {
				let content = result.content.clone();
				self.generated = Some(result);
				self.displayed.clear();
				Some(content)
			},
			Err(e) => {
				self.error = Some(e);
				None
			},
		}
	}

	/// Writes one reveal frame. Returns `false` once `token` has been superseded, which
	/// is the reveal loop's signal to stop.
	pub fn reveal_frame(&mut self, token: GenerationToken, frame: String) -> bool {
		if !self.is_current(token) {
			return false;
		}
		self.displayed = frame;
		true
	}

	/// Editor change callback.
	pub fn edit_displayed(&mut self, value: String) {
		self.displayed = value;
	}

	/// Text handed to the clipboard: whatever is on screen right now, partial reveal included.
	pub fn copy_text(&self) -> &str {
		&self.displayed
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{RevealFrames, Theme};

	fn result(content: &str) -> GenerationResult {
		GenerationResult::new("topic", content.to_owned())
	}

	#[test]
	fn successful_generation_flow() {
		let mut page = PageController::new();
		page.set_keywords("photosynthesis");
		assert_eq!(page.submit_label(), "Generate Essay");

		let token = page.begin(GenerateMode::Initial).unwrap();
		assert!(page.is_loading());
		assert_eq!(page.submit_label(), "Generating...");

		let content = page.finish(token, Ok(result("Light becomes sugar.")));
		assert_eq!(content.as_deref(), Some("Light becomes sugar."));
		assert!(!page.is_loading());
		assert_eq!(page.error(), None);
		assert_eq!(page.generated().map(|g| g.references.len()), Some(2));
		assert_eq!(page.displayed(), "");
	}

	#[test]
	fn initial_generate_allows_empty_keywords() {
		let mut page = PageController::new();
		assert!(page.begin(GenerateMode::Initial).is_ok());
		assert!(page.is_loading());
	}

	#[test]
	fn blank_regenerate_is_refused_without_request() {
		let mut page = PageController::new();
		page.set_keywords("   \t");
		assert_eq!(page.begin(GenerateMode::Regenerate), Err(AppError::EmptyKeywords));
		assert_eq!(page.error(), Some(&AppError::EmptyKeywords));
		assert_eq!(page.error().map(ToString::to_string).as_deref(), Some("Please enter keywords first"));
		assert!(!page.is_loading());
	}

	#[test]
	fn blank_regenerate_still_supersedes_running_generation() {
		let mut page = PageController::new();
		page.set_keywords("volcanoes");
		let first = page.begin(GenerateMode::Initial).unwrap();

		page.set_keywords("");
		assert!(page.begin(GenerateMode::Regenerate).is_err());

		assert_eq!(page.finish(first, Ok(result("late"))), None);
		assert_eq!(page.generated(), None);
		assert_eq!(page.error(), Some(&AppError::EmptyKeywords));
	}

	#[test]
	fn stale_completion_never_overwrites_newer_generation() {
		let mut page = PageController::new();
		page.set_keywords("glaciers");
		let first = page.begin(GenerateMode::Initial).unwrap();
		let second = page.begin(GenerateMode::Regenerate).unwrap();

		assert_eq!(page.finish(first, Ok(result("stale essay"))), None);
		assert!(page.is_loading());
		assert_eq!(page.generated(), None);

		assert_eq!(page.finish(second, Ok(result("fresh essay"))).as_deref(), Some("fresh essay"));
		assert_eq!(page.finish(first, Err(AppError::GenerationFailed)), None);
		assert_eq!(page.error(), None);
		assert_eq!(page.generated().map(|g| g.content.as_str()), Some("fresh essay"));
	}

	#[test]
	fn superseded_failure_is_silent_and_current_failure_is_shown() {
		let mut page = PageController::new();
		let stale = page.begin(GenerateMode::Initial).unwrap();
		let token = page.begin(GenerateMode::Initial).unwrap();
		assert_eq!(page.finish(stale, Err(AppError::Network)), None);
		assert_eq!(page.error(), None);
		assert!(page.is_loading());

		page.finish(token, Err(AppError::GenerationFailed));
		assert_eq!(page.error().map(ToString::to_string).as_deref(), Some("Content generation failed"));

		page.begin(GenerateMode::Initial).unwrap();
		assert_eq!(page.error(), None);
	}

	#[test]
	fn reveal_stops_once_superseded() {
		let mut page = PageController::new();
		page.set_keywords("tides");
		let first = page.begin(GenerateMode::Initial).unwrap();
		let content = page.finish(first, Ok(result("abcdef"))).unwrap();

		let mut frames = RevealFrames::new(&content);
		for frame in frames.by_ref().take(3) {
			assert!(page.reveal_frame(first, Theme::Light.frame(frame)));
		}
		assert_eq!(page.copy_text(), "ab");

		let second = page.begin(GenerateMode::Regenerate).unwrap();
		assert_eq!(page.displayed(), "");
		assert!(!page.reveal_frame(first, Theme::Light.frame(frames.next().unwrap())));
		assert_eq!(page.displayed(), "");

		let fresh = page.finish(second, Ok(result("xyz"))).unwrap();
		let written: Vec<_> = RevealFrames::new(&fresh)
			.map(|frame| {
				assert!(page.reveal_frame(second, Theme::Dark.frame(frame)));
				page.displayed().to_owned()
			})
			.collect();
		assert_eq!(written, ["<h3></h3>", "<h3>x</h3>", "<h3>xy</h3>", "<h3>xyz</h3>"]);
	}

	#[test]
	fn editor_changes_feed_the_clipboard() {
		let mut page = PageController::new();
		page.edit_displayed("<p>edited</p>".to_owned());
		assert_eq!(page.copy_text(), "<p>edited</p>");
	}
}
