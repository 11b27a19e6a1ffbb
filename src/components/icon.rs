use dioxus::prelude::*;
use icondata::Icon as IconData;

/// Inline SVG icon. Decorative: hidden from assistive tech, colored via
/// `currentColor`.
#[component]
pub fn Icon(icon: &'static IconData, #[props(default = "w-5 h-5")] class: &'static str) -> Element {
    let view_box = icon.view_box.unwrap_or("0 0 24 24");

    rsx! {
        svg {
            class: "{class}",
            view_box: "{view_box}",
            fill: "currentColor",
            "aria-hidden": "true",
            dangerous_inner_html: "{icon.data}"
        }
    }
}
