use askama_escape::{Html, escape};
use strum::{Display, EnumString};

/// Visual presentation of the generator page.
///
/// Both themes share the same controller; they only differ in palette and in how a
/// reveal frame is handed to the editor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Theme {
	/// Charcoal page, revealed text wrapped in a heading so the editor picks up heading size.
	#[default]
	Dark,
	/// Light page, revealed text written as-is.
	Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
	pub page: &'static str,
	pub title: &'static str,
	pub card: &'static str,
	pub input: &'static str,
	pub submit: &'static str,
	pub result: &'static str,
	pub references: &'static str,
}

impl Theme {
	/// Editor markup for one reveal frame. Generated text is escaped, so the heading
	/// wrapper is the only markup the editor ever receives from a generation.
	pub fn frame(self, prefix: &str) -> String {
		let text = escape(prefix, Html);
		match self {
			Self::Dark => format!("<h3>{text}</h3>"),
			Self::Light => text.to_string(),
		}
	}

	pub fn palette(self) -> Palette {
		match self {
			Self::Dark => Palette {
				page: "bg-[#151414]",
				title: "text-[#e9e3e3]",
				card: "bg-[#DCD2D2]",
				input: "border-[#000] focus:ring-[#0c0c0c] bg-[#f0ecec]",
				submit: "bg-[#303030] text-[#DCD2D2] hover:bg-[#060f19]",
				result: "bg-[#FDF0F0] border-[#08121f]",
				references: "text-[#08121f]",
			},
			Self::Light => Palette {
				page: "bg-gray-100",
				title: "text-gray-800",
				card: "bg-white",
				input: "border-gray-300 focus:ring-blue-500 bg-white",
				submit: "bg-blue-600 text-white hover:bg-blue-700",
				result: "bg-gray-50 border-gray-200",
				references: "text-gray-800",
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dark_wraps_frames_in_heading() {
		assert_eq!(Theme::Dark.frame("Intro"), "<h3>Intro</h3>");
		assert_eq!(Theme::Dark.frame(""), "<h3></h3>");
	}

	#[test]
	fn light_keeps_frames_plain() {
		assert_eq!(Theme::Light.frame("Intro"), "Intro");
	}

	#[test]
	fn generated_markup_is_escaped() {
		let content = "Intro <img src=x onerror=alert(1)> & <script>end</script>";
		for theme in [Theme::Dark, Theme::Light] {
			let frame = theme.frame(content);
			assert!(!frame.contains("<img"), "{theme}: {frame}");
			assert!(!frame.contains("<script"), "{theme}: {frame}");
			assert!(frame.contains("&lt;img src=x onerror=alert(1)&gt;"), "{theme}: {frame}");
			assert!(frame.contains("&amp;"), "{theme}: {frame}");
		}
		assert!(Theme::Dark.frame(content).starts_with("<h3>Intro &lt;img"));
	}

	#[test]
	fn parses_from_build_env_values() {
		assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
		assert_eq!("LIGHT".parse::<Theme>(), Ok(Theme::Light));
		assert!("sepia".parse::<Theme>().is_err());
		assert_eq!(Theme::Light.to_string(), "light");
	}
}
