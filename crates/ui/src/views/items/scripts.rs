use dioxus::document::eval;
use items_core::state::ViewEffect;

pub const FORM_ID: &str = "item-form";
pub const TITLE_INPUT_ID: &str = "title";

const SCROLL_TO_FORM_SCRIPT: &str = r#"
    const form = document.getElementById("item-form");
    if (form) {
        window.scrollTo({ top: form.offsetTop - 100, behavior: "smooth" });
    }
"#;

const FOCUS_TITLE_SCRIPT: &str = r#"
    const input = document.getElementById("title");
    if (input) { input.focus(); }
"#;

fn script_for(effect: ViewEffect) -> &'static str {
    match effect {
        ViewEffect::ScrollToForm => SCROLL_TO_FORM_SCRIPT,
        ViewEffect::FocusTitle => FOCUS_TITLE_SCRIPT,
    }
}

pub async fn run_view_effects(effects: Vec<ViewEffect>) {
    for effect in effects {
        let _ = eval(script_for(effect)).await;
    }
}
