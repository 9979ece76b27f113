//! Login page: credentials form plus federated sign-on.

use core_types::{
    Credentials, FederatedButtonOptions, LoginEvent, LoginFlow, LoginSink, SubmitOutcome,
    REDIRECT_DELAY_MS,
};
use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::FederatedLoginButton;

/// Browser-backed login sink: console for the observability log,
/// `window.alert` for the blocking notice.
struct BrowserSink;

impl LoginSink for BrowserSink {
    fn record(&mut self, event: LoginEvent) {
        let line = match &event {
            LoginEvent::AttemptSubmitted { username, password } => {
                format!("Login attempt: username={username} password={password}")
            }
            LoginEvent::FederatedAccepted { token } => {
                format!("Federated login success: {token}")
            }
            LoginEvent::FederatedRejected => "Federated login failed".to_string(),
        };
        web_sys::console::log_1(&line.into());
    }

    fn notify(&mut self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

/// Login page component.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let navigator = use_navigator();
    let username = use_state(String::new);
    let password = use_state(String::new);
    let flow = use_mut_ref(LoginFlow::new);

    // Pending redirect. The handle is dropped when this view is torn
    // down, which cancels the timeout, so an unmounted login page can
    // never fire a stale navigation.
    let redirect = use_mut_ref(|| None::<Timeout>);

    let arm_redirect = {
        let navigator = navigator.clone();
        let redirect = redirect.clone();
        move || {
            let Some(navigator) = navigator.clone() else {
                return;
            };
            let handle = Timeout::new(REDIRECT_DELAY_MS, move || {
                navigator.push(&Route::Dashboard);
            });
            // Replacing the slot also cancels any previous pending redirect.
            *redirect.borrow_mut() = Some(handle);
        }
    };

    let on_username_input = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        let flow = flow.clone();
        let arm_redirect = arm_redirect.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let credentials = Credentials::new((*username).clone(), (*password).clone());
            let outcome = flow.borrow_mut().submit(&credentials, &mut BrowserSink);
            if outcome == SubmitOutcome::Accepted {
                username.set(String::new());
                password.set(String::new());
                arm_redirect();
            }
        })
    };

    let on_sso_success = {
        let flow = flow.clone();
        let arm_redirect = arm_redirect.clone();
        Callback::from(move |token: String| {
            let outcome = flow.borrow_mut().federated_success(token, &mut BrowserSink);
            if outcome == SubmitOutcome::Accepted {
                arm_redirect();
            }
        })
    };

    let on_sso_failure = {
        let flow = flow.clone();
        Callback::from(move |()| {
            flow.borrow_mut().federated_failure(&mut BrowserSink);
        })
    };

    html! {
        <div class="login-wrapper">
            <div class="login-card">
                <h2>{"Login"}</h2>
                <form class="login-form" {onsubmit}>
                    <div class="form-group">
                        <input
                            type="text"
                            id="username"
                            placeholder="Username"
                            required={true}
                            value={(*username).clone()}
                            oninput={on_username_input}
                        />
                    </div>
                    <div class="form-group">
                        <input
                            type="password"
                            id="password"
                            placeholder="Password"
                            required={true}
                            value={(*password).clone()}
                            oninput={on_password_input}
                        />
                    </div>
                    <button type="submit" class="login-button">{"Login"}</button>
                </form>
                <div class="divider"><span>{"or"}</span></div>
                <FederatedLoginButton
                    options={FederatedButtonOptions::default()}
                    on_success={on_sso_success}
                    on_failure={on_sso_failure}
                />
            </div>
        </div>
    }
}
