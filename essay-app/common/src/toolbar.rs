//! Formatting toolbar shown above the essay editor.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarItem {
	/// Block format picker: heading levels 1 through 6 plus normal paragraph.
	Header(&'static [Option<u8>]),
	Bold,
	Italic,
	Underline,
	Strike,
	Color,
	Background,
	Align,
	Font,
	/// Strips all inline formatting from the selection.
	Clean,
}

impl ToolbarItem {
	pub fn label(self) -> &'static str {
		match self {
			Self::Header(_) => "Heading",
			Self::Bold => "B",
			Self::Italic => "I",
			Self::Underline => "U",
			Self::Strike => "S",
			Self::Color => "Color",
			Self::Background => "Background",
			Self::Align => "Align",
			Self::Font => "Font",
			Self::Clean => "Clear",
		}
	}

	/// Browser editing command issued for this control, if it maps to one directly.
	pub fn command(self) -> Option<&'static str> {
		match self {
			Self::Bold => Some("bold"),
			Self::Italic => Some("italic"),
			Self::Underline => Some("underline"),
			Self::Strike => Some("strikeThrough"),
			Self::Clean => Some("removeFormat"),
			Self::Header(_) | Self::Color | Self::Background | Self::Align | Self::Font => None,
		}
	}
}

pub const HEADER_LEVELS: &[Option<u8>] = &[Some(1), Some(2), Some(3), Some(4), Some(5), Some(6), None];

pub const TOOLBAR: &[&[ToolbarItem]] = &[
	&[ToolbarItem::Header(HEADER_LEVELS)],
	&[ToolbarItem::Bold, ToolbarItem::Italic, ToolbarItem::Underline, ToolbarItem::Strike],
	&[ToolbarItem::Color, ToolbarItem::Background],
	&[ToolbarItem::Align],
	&[ToolbarItem::Font],
	&[ToolbarItem::Clean],
];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn toolbar_layout() {
		assert_eq!(TOOLBAR.len(), 6);
		assert_eq!(TOOLBAR[0], &[ToolbarItem::Header(HEADER_LEVELS)]);
		assert_eq!(HEADER_LEVELS.last(), Some(&None));
		assert_eq!(TOOLBAR.last().and_then(|g| g.first()), Some(&ToolbarItem::Clean));
	}

	#[test]
	fn inline_styles_map_to_commands() {
		let inline: Vec<_> = TOOLBAR[1].iter().filter_map(|item| item.command()).collect();
		assert_eq!(inline, ["bold", "italic", "underline", "strikeThrough"]);
		assert_eq!(ToolbarItem::Font.command(), None);
	}
}
