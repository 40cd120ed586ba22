use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    rsx! {
        div { class: "page home-page",
            h2 { "Learn Japanese, one word at a time" }
            p { "Pick a lesson and step through its vocabulary card by card." }
            Link { class: "btn btn-primary", to: Route::Lessons {}, "Start Learning" }
        }
    }
}
