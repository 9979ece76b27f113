//! Dashboard header: search bar, greeting, and logout.

use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Properties for Header component.
///
/// The search query is owned by the parent; the header only renders it
/// and forwards events through the callbacks.
#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub search_query: String,
    pub on_query_change: Callback<String>,
    pub on_search: Callback<()>,
    pub user_name: String,
    pub on_logout: Callback<MouseEvent>,
}

/// Stateless header component.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let oninput = {
        let on_query_change = props.on_query_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_query_change.emit(input.value());
        })
    };

    let onsubmit = {
        let on_search = props.on_search.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_search.emit(());
        })
    };

    html! {
        <header class="main-header">
            <form class="search-form" {onsubmit}>
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search for rooms, hotels, or destinations..."
                    value={props.search_query.clone()}
                    {oninput}
                />
                <button type="submit" class="search-button">
                    {"🔍"}
                </button>
            </form>
            <div class="header-actions">
                <span class="user-welcome">{ format!("Welcome, {}", props.user_name) }</span>
                <button class="logout-button" onclick={props.on_logout.clone()}>
                    {"Logout"}
                </button>
            </div>
        </header>
    }
}
