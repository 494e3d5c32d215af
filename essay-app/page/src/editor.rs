use common::{
	editor::EditorSync,
	toolbar::{HEADER_LEVELS, TOOLBAR, ToolbarItem},
};
use dioxus::{logger::tracing::error, prelude::*};

const EDITOR_ID: &str = "essay-editor";

const ALIGNMENTS: &[(&str, &str)] = &[("Left", "justifyLeft"), ("Center", "justifyCenter"), ("Right", "justifyRight"), ("Justify", "justifyFull")];
const FONTS: &[&str] = &["sans-serif", "serif", "monospace"];

/// Runs a browser editing command on the editor selection and returns the resulting markup.
async fn exec(command: &str, arg: Option<&str>) -> Option<String> {
	let arg = serde_json::to_string(&arg).unwrap_or_else(|_| "null".to_owned());
	let script = format!(
		r#"const el = document.getElementById("{EDITOR_ID}");
		el.focus();
		document.execCommand("{command}", false, {arg});
		return el.innerHTML;"#
	);
	match document::eval(&script).join::<String>().await {
		Ok(html) => Some(html),
		Err(e) => {
			error!("editor command {command} failed: {e}");
			None
		},
	}
}

async fn write_markup(markup: &str) {
	let markup = serde_json::to_string(markup).unwrap_or_else(|_| "\"\"".to_owned());
	let script = format!(r#"document.getElementById("{EDITOR_ID}").innerHTML = {markup};"#);
	if let Err(e) = document::eval(&script).join::<serde_json::Value>().await {
		error!("writing editor markup failed: {e}");
	}
}

async fn current_markup() -> Option<String> {
	document::eval(&format!(r#"return document.getElementById("{EDITOR_ID}").innerHTML;"#)).join::<String>().await.ok()
}

#[component]
pub fn Editor(value: String, on_change: EventHandler<String>) -> Element {
	let mut sync = use_signal(EditorSync::new);

	// only values the element has not reported itself are written, typing keeps the caret
	use_effect(use_reactive!(|(value,)| {
		if let Some(markup) = sync.write().push(&value).map(str::to_owned) {
			spawn(async move { write_markup(&markup).await });
		}
	}));

	let apply = move |command: &'static str, arg: Option<String>| async move {
		if let Some(html) = exec(command, arg.as_deref()).await {
			sync.write().reported(&html);
			on_change.call(html);
		}
	};

	rsx! {
		div { class: "mb-4 border border-gray-300 rounded-lg bg-white text-black",
			div { class: "flex flex-wrap items-center gap-2 p-2 border-b border-gray-300 text-sm",
				for group in TOOLBAR.iter() {
					span { class: "flex items-center gap-1 pr-2 border-r border-gray-200 last:border-r-0",
						for item in group.iter().copied() {
							match item {
								ToolbarItem::Header(levels) => rsx! {
									select {
										class: "px-1 py-0.5 border rounded",
										onchange: move |evt| apply("formatBlock", Some(block_tag(&evt.value()))),
										for level in levels.iter() {
											option {
												value: level.map(|l| l.to_string()).unwrap_or_default(),
												selected: level.is_none(),
												{level.map_or_else(|| "Normal".to_owned(), |l| format!("Heading {l}"))}
											}
										}
									}
								},
								ToolbarItem::Color => rsx! {
									input {
										r#type: "color",
										title: item.label(),
										onchange: move |evt| apply("foreColor", Some(evt.value())),
									}
								},
								ToolbarItem::Background => rsx! {
									input {
										r#type: "color",
										title: item.label(),
										value: "#ffffff",
										onchange: move |evt| apply("hiliteColor", Some(evt.value())),
									}
								},
								ToolbarItem::Align => rsx! {
									select {
										class: "px-1 py-0.5 border rounded",
										title: item.label(),
										onchange: move |evt| {
												let command = ALIGNMENTS.iter().find(|(label, _)| *label == evt.value()).map_or("justifyLeft", |(_, c)| *c);
												apply(command, None)
										},
										for (label , _) in ALIGNMENTS.iter() {
											option { value: *label, "{label}" }
										}
									}
								},
								ToolbarItem::Font => rsx! {
									select {
										class: "px-1 py-0.5 border rounded",
										title: item.label(),
										onchange: move |evt| apply("fontName", Some(evt.value())),
										for font in FONTS.iter() {
											option { value: *font, "{font}" }
										}
									}
								},
								ToolbarItem::Bold | ToolbarItem::Italic | ToolbarItem::Underline | ToolbarItem::Strike | ToolbarItem::Clean => rsx! {
									button {
										class: "px-2 py-0.5 rounded hover:bg-gray-200 font-semibold",
										title: "{item:?}",
										onclick: move |_| apply(item.command().unwrap_or("removeFormat"), None),
										{item.label()}
									}
								},
							}
						}
					}
				}
			}
			div {
				id: EDITOR_ID,
				class: "min-h-[300px] p-4 focus:outline-none prose max-w-none",
				contenteditable: "true",
				oninput: move |_| async move {
						if let Some(html) = current_markup().await {
								sync.write().reported(&html);
								on_change.call(html);
						}
				},
			}
		}
	}
}

/// `formatBlock` argument for a header picker value; the empty value is a plain paragraph.
fn block_tag(level: &str) -> String {
	if HEADER_LEVELS.iter().flatten().any(|l| l.to_string() == level) { format!("<h{level}>") } else { "<p>".to_owned() }
}
