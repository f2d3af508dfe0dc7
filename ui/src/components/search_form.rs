use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::hooks::use_news_search::NewsSearch;

#[component]
pub fn SearchForm(search: NewsSearch) -> Element {
    let state = search.state();
    let query = state.read().query.clone();
    let is_loading = state.read().is_loading;

    rsx! {
        form {
            onsubmit: move |event: FormEvent| {
                event.prevent_default();
                search.submit();
            },
            fieldset {
                role: "group",
                input {
                    r#type: "search",
                    name: "search-term",
                    required: true,
                    placeholder: "e.g. react",
                    value: "{query}",
                    oninput: move |event: FormEvent| search.set_query(event.value()),
                }
                Button {
                    submit: true,
                    busy: is_loading,
                    if is_loading { "Searching" } else { "Search" }
                }
            }
        }
    }
}
