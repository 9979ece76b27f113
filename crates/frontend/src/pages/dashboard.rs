//! Dashboard page: profile, statistics, cart, quick actions, activity.

use core_types::{demo_activity, quick_actions, Cart, DashboardStats, UserProfile};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::{CartPanel, Footer, Header, StatCard};

/// Dashboard page component.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let navigator = use_navigator();
    let search_query = use_state(String::new);
    let cart = use_state(Cart::demo);
    let avatar_failed = use_state(|| false);

    // Mock fixtures, injected at mount
    let user = use_state(UserProfile::demo);
    let stats = use_state(DashboardStats::demo);

    let on_query_change = {
        let search_query = search_query.clone();
        Callback::from(move |query: String| search_query.set(query))
    };

    let on_search = {
        let search_query = search_query.clone();
        Callback::from(move |()| {
            web_sys::console::log_1(&format!("Searching for: {}", *search_query).into());
        })
    };

    let on_logout = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            web_sys::console::log_1(&"User logged out".into());
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    let on_set_quantity = {
        let cart = cart.clone();
        Callback::from(move |(id, quantity): (u32, i32)| {
            let mut next = (*cart).clone();
            next.set_quantity(id, quantity);
            cart.set(next);
        })
    };

    // Broken avatar images degrade to the user's initial
    let on_avatar_error = {
        let avatar_failed = avatar_failed.clone();
        Callback::from(move |_: Event| avatar_failed.set(true))
    };

    let show_avatar = user.avatar.is_some() && !*avatar_failed;

    html! {
        <div class="dashboard-container">
            <Header
                search_query={(*search_query).clone()}
                on_query_change={on_query_change}
                on_search={on_search}
                user_name={user.name.clone()}
                on_logout={on_logout}
            />

            <main class="dashboard-main">
                <CartPanel cart={(*cart).clone()} on_set_quantity={on_set_quantity} />

                <div class="dashboard-card profile-card">
                    <h2>{"Profile Information"}</h2>
                    <div class="profile-content">
                        <div class="avatar">
                            if show_avatar {
                                <img
                                    src={user.avatar.clone().unwrap_or_default()}
                                    alt={user.name.clone()}
                                    class="profile-img"
                                    onerror={on_avatar_error}
                                />
                            } else {
                                <span>{ user.initial() }</span>
                            }
                        </div>
                        <div class="profile-details">
                            <p><strong>{"Name: "}</strong>{ &user.name }</p>
                            <p><strong>{"Email: "}</strong>{ &user.email }</p>
                            <p><strong>{"Role: "}</strong>{ &user.role }</p>
                            <p><strong>{"Last Login: "}</strong>{ &user.last_login }</p>
                        </div>
                    </div>
                </div>

                <div class="dashboard-card stats-card">
                    <h2>{"Statistics"}</h2>
                    <div class="stats-grid">
                        <StatCard
                            value={stats.total_users.to_string()}
                            label={"Total Users"}
                        />
                        <StatCard
                            value={stats.active_users.to_string()}
                            label={"Active Users"}
                        />
                        <StatCard
                            value={stats.total_revenue.clone()}
                            label={"Total Revenue"}
                        />
                        <StatCard
                            value={stats.growth_rate.clone()}
                            label={"Growth Rate"}
                        />
                    </div>
                </div>

                <div class="dashboard-card actions-card">
                    <h2>{"Quick Actions"}</h2>
                    <div class="actions-grid">
                        { for quick_actions().iter().map(|action| html! {
                            <button class="action-button" key={action.label}>
                                <span class="action-icon">{ action.icon }</span>
                                { action.label }
                            </button>
                        })}
                    </div>
                </div>

                <div class="dashboard-card activity-card">
                    <h2>{"Recent Activity"}</h2>
                    <div class="activity-list">
                        { for demo_activity().iter().map(|entry| html! {
                            <div class="activity-item" key={entry.message}>
                                <span class="activity-icon">{ entry.icon }</span>
                                <div class="activity-content">
                                    <p>{ entry.message }</p>
                                    <small>{ entry.when }</small>
                                </div>
                            </div>
                        })}
                    </div>
                </div>
            </main>

            <Footer />
        </div>
    }
}
