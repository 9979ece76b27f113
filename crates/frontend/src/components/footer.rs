//! Dashboard footer: link sections and bottom bar, non-interactive.

use core_types::footer_sections;
use yew::prelude::*;

/// Footer component.
#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="dashboard-footer">
            <div class="footer-content">
                { for footer_sections().iter().map(|section| {
                    html! {
                        <div class="footer-section" key={section.title}>
                            <h3>{ section.title }</h3>
                            <ul>
                                { for section.links.iter().map(|link| html! {
                                    <li key={*link}><a href="#">{ *link }</a></li>
                                })}
                            </ul>
                        </div>
                    }
                })}
            </div>
            <div class="footer-bottom">
                <p>{"© 2026 Roomview. All rights reserved."}</p>
                <div class="footer-right">
                    <div class="social-links">
                        <a href="#" class="social-link">{"📘"}</a>
                        <a href="#" class="social-link">{"🐦"}</a>
                        <a href="#" class="social-link">{"📷"}</a>
                        <a href="#" class="social-link">{"💼"}</a>
                    </div>
                    <select class="language-select">
                        <option value="en" selected={true}>{"English"}</option>
                        <option value="es">{"Español"}</option>
                        <option value="fr">{"Français"}</option>
                        <option value="de">{"Deutsch"}</option>
                    </select>
                </div>
            </div>
        </footer>
    }
}
