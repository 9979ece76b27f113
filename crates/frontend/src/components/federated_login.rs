//! Stand-in for the external federated identity widget.

use core_types::{ButtonShape, ButtonSize, ButtonTheme, FederatedButtonOptions};
use yew::prelude::*;

/// Properties for FederatedLoginButton component.
///
/// This is the full capability surface the login flow consumes from the
/// widget: a success callback carrying an opaque credential token, a
/// failure callback with no payload, and presentation options. Token
/// issuance is out of scope; this demo widget synthesizes a token on
/// click. `on_failure` is wired for a real widget to report through.
#[derive(Properties, PartialEq)]
pub struct FederatedLoginProps {
    #[prop_or_default]
    pub options: FederatedButtonOptions,
    pub on_success: Callback<String>,
    pub on_failure: Callback<()>,
}

/// Federated sign-on button.
#[function_component(FederatedLoginButton)]
pub fn federated_login_button(props: &FederatedLoginProps) -> Html {
    let options = props.options;

    let theme_class = match options.theme {
        ButtonTheme::Outline => "sso-outline",
        ButtonTheme::FilledBlue => "sso-filled-blue",
        ButtonTheme::FilledBlack => "sso-filled-black",
    };
    let size_class = match options.size {
        ButtonSize::Large => "sso-large",
        ButtonSize::Medium => "sso-medium",
        ButtonSize::Small => "sso-small",
    };
    let shape_class = match options.shape {
        ButtonShape::Rectangular => "sso-rectangular",
        ButtonShape::Pill => "sso-pill",
        ButtonShape::Circle => "sso-circle",
    };

    let onclick = {
        let on_success = props.on_success.clone();
        Callback::from(move |_: MouseEvent| {
            on_success.emit("demo-sso-credential".to_string());
        })
    };

    html! {
        <button
            type="button"
            class={classes!("sso-button", theme_class, size_class, shape_class)}
            {onclick}
        >
            { options.text.label() }
        </button>
    }
}
