//! Search input box for the course catalog.

use dioxus::prelude::*;

#[component]
pub fn SearchInput(term: ReadSignal<String>, on_input: EventHandler<String>) -> Element {
    rsx! {
        input {
            id: "x-course-search-input",
            r#type: "search",
            placeholder: "Search by code or name...",
            autofocus: true,
            style: "
                width: 100%;
                padding: 12px;
                margin-bottom: 20px;
                font-size: 1rem;
                box-sizing: border-box;
            ",
            value: "{term}",
            oninput: move |event: Event<FormData>| {
                on_input.call(event.value());
            },
        }
    }
}
