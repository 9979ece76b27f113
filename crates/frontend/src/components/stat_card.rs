//! Statistics tile component.

use yew::prelude::*;

/// Properties for StatCard component.
#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub value: String,
    pub label: String,
}

/// One tile in the statistics grid.
#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="stat-item">
            <h3>{ &props.value }</h3>
            <p>{ &props.label }</p>
        </div>
    }
}
