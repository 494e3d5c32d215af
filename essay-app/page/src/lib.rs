mod api;
mod editor;

use common::{GenerateMode, GenerationToken, PageController, REVEAL_STEP_MS, RevealFrames, Theme, theme::Palette};
use dioxus::{
	core::Task,
	logger::tracing::{Level, debug, warn},
	prelude::*,
	web::{Config, launch::launch_cfg},
};
use dioxus_free_icons::{
	Icon,
	icons::fi_icons::{FiAlertCircle, FiBookOpen, FiCopy, FiRepeat, FiSend},
};
use editor::Editor;
use gloo_timers::future::TimeoutFuture;
use tailwind_fuse::tw_join;
use wasm_bindgen::prelude::*;

const THEME: &str = env!("THEME");

#[wasm_bindgen]
pub fn main() {
	dioxus::logger::init(Level::DEBUG).expect("dioxus logger");
	launch_cfg(App, Config::default());
}

/// Cancels the running generation, if any, and starts a new one.
fn start_generation(mut page: Signal<PageController>, mut in_flight: Signal<Option<Task>>, theme: Theme, mode: GenerateMode) {
	if let Some(task) = in_flight.write().take() {
		task.cancel();
	}

	let token = match page.write().begin(mode) {
		Ok(token) => token,
		Err(e) => {
			warn!("generation refused: {e}");
			return;
		},
	};

	let keywords = page.peek().keywords().to_owned();
	let task = spawn(async move {
		let outcome = api::request_generation(keywords).await;
		let content = page.write().finish(token, outcome);
		if let Some(content) = content {
			reveal(page, token, theme, content).await;
		}
	});
	in_flight.set(Some(task));
}

/// Types `content` into the editor one char every [`REVEAL_STEP_MS`] until done or superseded.
async fn reveal(mut page: Signal<PageController>, token: GenerationToken, theme: Theme, content: String) {
	let mut frames = RevealFrames::new(&content).peekable();
	while let Some(frame) = frames.next() {
		if !page.write().reveal_frame(token, theme.frame(frame)) {
			debug!("reveal superseded");
			return;
		}
		if frames.peek().is_some() {
			TimeoutFuture::new(REVEAL_STEP_MS).await;
		}
	}
}

#[component]
fn App() -> Element {
	let theme = use_hook(|| THEME.parse::<Theme>().unwrap_or_default());
	let palette = theme.palette();
	let mut page = use_signal(PageController::new);
	let in_flight = use_signal(|| None::<Task>);

	let controller = page.read();
	let is_loading = controller.is_loading();
	let keywords = controller.keywords().to_owned();
	let submit_label = controller.submit_label();

	rsx! {
		div { class: tw_join!("min-h-screen flex flex-col items-center justify-center p-4", palette.page),
			h1 { class: tw_join!("text-6xl font-bold text-center mb-20", palette.title), "ACADEMIC ESSAY GENERATOR" }
			div { class: tw_join!("w-full max-w-3xl rounded-xl shadow-2xl p-14", palette.card),
				div { class: "mb-6 flex items-center justify-center",
					input {
						class: tw_join!("w-5/6 p-3 border-2 rounded-lg focus:outline-none focus:ring-2 text-black mb-4", palette.input),
						r#type: "text",
						placeholder: "Enter research topic or keywords...",
						value: keywords,
						oninput: move |evt| page.write().set_keywords(evt.value()),
					}
				}
				if let Some(error) = controller.error() {
					div { class: "flex items-center bg-red-100 text-red-700 p-3 rounded-lg mb-4",
						Icon { class: "mr-2", width: 20, height: 20, icon: FiAlertCircle }
						span { "{error}" }
					}
				}
				div { class: "flex items-center justify-center",
					button {
						class: tw_join!(
								"w-1/2 p-3 rounded-lg flex items-center justify-center transition duration-300 ease-in-out disabled:opacity-50",
								palette.submit
						),
						disabled: is_loading,
						onclick: move |_| start_generation(page, in_flight, theme, GenerateMode::Initial),
						{submit_label}
						Icon { class: "ml-2", width: 20, height: 20, icon: FiSend }
					}
				}
				if let Some(generated) = controller.generated() {
					ResultCard {
						palette,
						displayed: controller.displayed().to_owned(),
						references: generated.references.clone(),
						on_edit: move |value: String| page.write().edit_displayed(value),
						on_regenerate: move |_| start_generation(page, in_flight, theme, GenerateMode::Regenerate),
					}
				}
			}
		}
	}
}

#[component]
fn ResultCard(palette: Palette, displayed: String, references: Vec<String>, on_edit: EventHandler<String>, on_regenerate: EventHandler<()>) -> Element {
	let mut copy_label = use_signal(|| "Copy Content".to_owned());

	let copy_text = displayed.clone();
	let on_copy = move |_| {
		to_owned![copy_text];
		async move {
			let copied = match web_sys::window().map(|w| w.navigator().clipboard()) {
				Some(clipboard) => wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&copy_text)).await.is_ok(),
				None => false,
			};
			let label = if copied { "Copied!" } else { "Copy failed" };
			copy_label.set(label.to_owned());
			TimeoutFuture::new(1_500).await;
			copy_label.set("Copy Content".to_owned());
		}
	};

	rsx! {
		div { class: tw_join!("mt-6 p-4 rounded-lg border-2", palette.result),
			div { class: "flex justify-between items-center mb-4",
				h2 { class: "text-xl font-semibold text-black flex items-center",
					Icon { class: "mr-2", width: 20, height: 20, icon: FiBookOpen }
					"Generated Content"
				}
				div { class: "flex space-x-2",
					button {
						class: "flex items-center bg-green-400 text-white px-3 py-2 rounded hover:bg-green-500 transition duration-300",
						onclick: on_copy,
						Icon { class: "mr-2", width: 18, height: 18, icon: FiCopy }
						"{copy_label}"
					}
					button {
						class: "flex items-center bg-blue-400 text-white px-3 py-2 rounded hover:bg-blue-500 transition duration-300",
						onclick: move |_| on_regenerate.call(()),
						Icon { class: "mr-2", width: 18, height: 18, icon: FiRepeat }
						"Regenerate"
					}
				}
			}
			Editor { value: displayed, on_change: on_edit }
			div { class: "mt-4 border-t pt-4",
				h3 { class: tw_join!("text-lg font-semibold mb-2", palette.references), "References" }
				ul { class: "list-disc list-inside text-gray-800",
					for reference in references.iter() {
						li { class: "mb-1", "{reference}" }
					}
				}
			}
		}
	}
}
