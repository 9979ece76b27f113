//! Core types for the Roomview dashboard.
//!
//! This crate defines the shared data structures and the small amount of
//! real logic behind the UI: the shopping cart engine, the login flow
//! state machine, and the mock display fixtures the dashboard renders.

use serde::{Deserialize, Serialize};

/// Delay before the post-login redirect fires, in milliseconds.
pub const REDIRECT_DELAY_MS: u32 = 1_000;

/// Credentials captured by the login form.
///
/// Ephemeral: held only in the form's local state and cleared on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Create credentials from the two form fields.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// True when both fields are non-empty.
    ///
    /// Mirrors the `required` attributes on the form inputs, which block
    /// empty submissions before the handler runs.
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

/// States of the login flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginState {
    /// Form fields are editable.
    #[default]
    Editing,
    /// A valid submission is being surfaced to the sink.
    Submitting,
    /// Terminal state: navigation away from the login screen is pending.
    Redirecting,
}

/// Events surfaced to the observability sink by the login flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginEvent {
    /// A complete username/password pair was submitted.
    AttemptSubmitted { username: String, password: String },
    /// The federated widget returned an opaque credential token.
    FederatedAccepted { token: String },
    /// The federated widget reported failure.
    FederatedRejected,
}

/// Result of feeding a submission into the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blocked by validation; nothing was recorded and no state changed.
    Rejected,
    /// The attempt was recorded and confirmed; the caller must reset the
    /// form fields and arm the redirect timer.
    Accepted,
}

/// Where the login flow reports what happened.
///
/// `record` feeds the observability log; `notify` shows a blocking notice
/// to the user. The frontend backs this with the browser console and
/// `window.alert`; tests use a recording fake.
pub trait LoginSink {
    fn record(&mut self, event: LoginEvent);
    fn notify(&mut self, message: &str);
}

/// The login flow state machine: `Editing → Submitting → Redirecting`.
///
/// The direct form submission and the federated widget callbacks are
/// independent entry points into the same terminal `Redirecting` state.
/// The flow itself never navigates; on [`SubmitOutcome::Accepted`] the
/// owning view arms a one-shot timer of [`REDIRECT_DELAY_MS`] whose
/// handle is dropped (cancelling the redirect) if the view is torn down
/// first.
#[derive(Debug, Clone, Default)]
pub struct LoginFlow {
    state: LoginState,
}

impl LoginFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LoginState {
        self.state
    }

    /// Submit the direct login form.
    ///
    /// Incomplete credentials are rejected silently: no event, no notice,
    /// no transition. A complete pair is recorded verbatim, confirmed to
    /// the user by username, and the flow ends in `Redirecting`.
    pub fn submit(
        &mut self,
        credentials: &Credentials,
        sink: &mut dyn LoginSink,
    ) -> SubmitOutcome {
        if !credentials.is_complete() {
            return SubmitOutcome::Rejected;
        }

        self.state = LoginState::Submitting;
        sink.record(LoginEvent::AttemptSubmitted {
            username: credentials.username.clone(),
            password: credentials.password.clone(),
        });
        sink.notify(&format!(
            "Login attempt for user: {}",
            credentials.username
        ));
        self.state = LoginState::Redirecting;
        SubmitOutcome::Accepted
    }

    /// Success callback from the federated widget.
    ///
    /// Records the opaque token and enters `Redirecting`, independently of
    /// the form path.
    pub fn federated_success(
        &mut self,
        token: impl Into<String>,
        sink: &mut dyn LoginSink,
    ) -> SubmitOutcome {
        sink.record(LoginEvent::FederatedAccepted {
            token: token.into(),
        });
        sink.notify("Single sign-on successful!");
        self.state = LoginState::Redirecting;
        SubmitOutcome::Accepted
    }

    /// Failure callback from the federated widget.
    ///
    /// Recoverable: the failure is recorded and notified, the state is
    /// unchanged, and the user may retry immediately.
    pub fn federated_failure(&mut self, sink: &mut dyn LoginSink) {
        sink.record(LoginEvent::FederatedRejected);
        sink.notify("Single sign-on failed. Please try again.");
    }
}

/// One line item in the shopping cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Unique item identifier
    pub id: u32,
    /// Display name
    pub name: String,
    /// Price per unit (per night), non-negative
    pub unit_price: f64,
    /// Units in the cart, always at least 1 while the item is present
    pub quantity: u32,
}

impl CartItem {
    pub fn new(id: u32, name: impl Into<String>, unit_price: f64, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    /// Line total for this item.
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// An ordered collection of cart line items.
///
/// Order is insertion order and ids are unique. Invariant: no stored item
/// ever has quantity 0 — dropping a quantity to 0 or below removes the
/// item entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cart from existing items, dropping any zero-quantity
    /// entries so the invariant holds from the start.
    pub fn with_items(items: Vec<CartItem>) -> Self {
        Self {
            items: items.into_iter().filter(|i| i.quantity > 0).collect(),
        }
    }

    /// The demo cart the dashboard starts with.
    pub fn demo() -> Self {
        Self::with_items(vec![
            CartItem::new(1, "Premium Room", 120.0, 1),
            CartItem::new(2, "City View Suite", 200.0, 1),
        ])
    }

    /// Set an item's quantity, preserving its position.
    ///
    /// A target of 0 or below removes the item. Unknown ids are a no-op;
    /// all inputs are trusted internal UI events, so nothing here errors.
    pub fn set_quantity(&mut self, item_id: u32, new_quantity: i32) {
        if new_quantity <= 0 {
            self.items.retain(|item| item.id != item_id);
        } else if let Some(item) = self.items.iter_mut().find(|item| item.id == item_id) {
            item.quantity = new_quantity as u32;
        }
    }

    /// Σ(unit price × quantity) over all current items; 0 when empty.
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Σ(quantity) over all current items.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Visual theme of the federated login button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonTheme {
    Outline,
    FilledBlue,
    FilledBlack,
}

/// Size of the federated login button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonSize {
    Large,
    Medium,
    Small,
}

/// Text variant shown on the federated login button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonText {
    SignInWith,
    SignUpWith,
    ContinueWith,
    SignIn,
}

impl ButtonText {
    /// Button label for this variant.
    pub fn label(self) -> &'static str {
        match self {
            ButtonText::SignInWith => "Sign in with SSO",
            ButtonText::SignUpWith => "Sign up with SSO",
            ButtonText::ContinueWith => "Continue with SSO",
            ButtonText::SignIn => "Sign in",
        }
    }
}

/// Corner shape of the federated login button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonShape {
    Rectangular,
    Pill,
    Circle,
}

/// Presentation options for the federated login widget.
///
/// The widget's internal protocol is out of scope; the core consumes only
/// its success/failure outcomes, and these options only shape how the
/// button is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederatedButtonOptions {
    pub theme: ButtonTheme,
    pub size: ButtonSize,
    pub text: ButtonText,
    pub shape: ButtonShape,
}

impl Default for FederatedButtonOptions {
    fn default() -> Self {
        Self {
            theme: ButtonTheme::Outline,
            size: ButtonSize::Large,
            text: ButtonText::ContinueWith,
            shape: ButtonShape::Rectangular,
        }
    }
}

/// Display-only profile data shown on the dashboard.
///
/// A fixture, not the result of any authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub role: String,
    /// Pre-formatted display string, not a timestamp
    pub last_login: String,
    /// Avatar asset path, if any
    pub avatar: Option<String>,
}

impl UserProfile {
    pub fn demo() -> Self {
        Self {
            name: "Asha Raman".to_string(),
            email: "asha.raman@example.com".to_string(),
            role: "Software Engineer".to_string(),
            last_login: "July 28, 2026".to_string(),
            avatar: Some("assets/avatar.jpg".to_string()),
        }
    }

    /// First letter of the name, for the avatar fallback.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

/// Display-only dashboard statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_users: u32,
    pub active_users: u32,
    pub total_revenue: String,
    pub growth_rate: String,
}

impl DashboardStats {
    pub fn demo() -> Self {
        Self {
            total_users: 1250,
            active_users: 892,
            total_revenue: "$45,230".to_string(),
            growth_rate: "+12.5%".to_string(),
        }
    }
}

/// One row in the Recent Activity card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub icon: &'static str,
    pub message: &'static str,
    pub when: &'static str,
}

/// Recent activity fixture.
pub fn demo_activity() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry {
            icon: "✅",
            message: "User login successful",
            when: "2 minutes ago",
        },
        ActivityEntry {
            icon: "📝",
            message: "Profile updated",
            when: "1 hour ago",
        },
        ActivityEntry {
            icon: "🔔",
            message: "New notification received",
            when: "3 hours ago",
        },
        ActivityEntry {
            icon: "📈",
            message: "Monthly report generated",
            when: "1 day ago",
        },
    ]
}

/// One button in the Quick Actions card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub icon: &'static str,
    pub label: &'static str,
}

/// Quick actions fixture.
pub fn quick_actions() -> Vec<QuickAction> {
    vec![
        QuickAction { icon: "👥", label: "Manage Users" },
        QuickAction { icon: "📊", label: "View Reports" },
        QuickAction { icon: "⚙️", label: "Settings" },
        QuickAction { icon: "📧", label: "Messages" },
    ]
}

/// One titled list of links in the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterSection {
    pub title: &'static str,
    pub links: &'static [&'static str],
}

/// Footer link sections, non-interactive display data.
pub fn footer_sections() -> Vec<FooterSection> {
    vec![
        FooterSection {
            title: "Company",
            links: &["About Us", "Careers", "Press", "Contact"],
        },
        FooterSection {
            title: "Support",
            links: &[
                "Help Center",
                "Safety Information",
                "Cancellation Options",
                "COVID-19 Response",
            ],
        },
        FooterSection {
            title: "Community",
            links: &[
                "Disaster Relief",
                "Support Refugees",
                "Combat Discrimination",
                "Volunteer",
            ],
        },
        FooterSection {
            title: "Hosting",
            links: &[
                "Become a Host",
                "Hosting Resources",
                "Community Forum",
                "Responsible Hosting",
            ],
        },
        FooterSection {
            title: "Legal",
            links: &[
                "Privacy Policy",
                "Terms of Service",
                "Cookie Policy",
                "Accessibility",
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test double for the browser console + alert pair.
    #[derive(Default)]
    struct RecordingSink {
        events: Vec<LoginEvent>,
        notices: Vec<String>,
    }

    impl LoginSink for RecordingSink {
        fn record(&mut self, event: LoginEvent) {
            self.events.push(event);
        }

        fn notify(&mut self, message: &str) {
            self.notices.push(message.to_string());
        }
    }

    #[test]
    fn test_demo_cart_totals() {
        let cart = Cart::demo();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), 320.0);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_set_quantity_updates_in_place() {
        let mut cart = Cart::demo();

        cart.set_quantity(1, 3);

        assert_eq!(cart.items()[0].id, 1);
        assert_eq!(cart.items()[0].quantity, 3);
        assert_eq!(cart.items()[1].id, 2);
        assert_eq!(cart.total(), 3.0 * 120.0 + 200.0);
        assert_eq!(cart.item_count(), 4);
    }

    #[test]
    fn test_set_quantity_zero_removes_item() {
        let mut cart = Cart::demo();

        cart.set_quantity(1, 0);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].name, "City View Suite");
        assert_eq!(cart.total(), 200.0);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_set_quantity_negative_removes_item() {
        let mut cart = Cart::demo();

        cart.set_quantity(2, -1);

        assert_eq!(cart.len(), 1);
        assert!(cart.items().iter().all(|item| item.quantity > 0));
    }

    #[test]
    fn test_set_quantity_unknown_id_is_noop() {
        let mut cart = Cart::demo();
        let before = cart.clone();

        cart.set_quantity(99, 5);
        cart.set_quantity(99, 0);

        assert_eq!(cart, before);
    }

    #[test]
    fn test_empty_cart_totals_are_zero() {
        let mut cart = Cart::demo();

        cart.set_quantity(1, 0);
        cart.set_quantity(2, 0);

        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_total_tracks_arbitrary_quantity_sequences() {
        let mut cart = Cart::demo();

        cart.set_quantity(1, 2);
        cart.set_quantity(2, 4);
        cart.set_quantity(1, 1);
        cart.set_quantity(2, -3);

        let expected: f64 = cart
            .items()
            .iter()
            .map(|i| i.unit_price * f64::from(i.quantity))
            .sum();
        assert_eq!(cart.total(), expected);
        assert_eq!(cart.total(), 120.0);
        assert!(cart.items().iter().all(|item| item.quantity > 0));
    }

    #[test]
    fn test_with_items_drops_zero_quantities() {
        let cart = Cart::with_items(vec![
            CartItem::new(1, "Kept", 10.0, 1),
            CartItem::new(2, "Dropped", 10.0, 0),
        ]);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].name, "Kept");
    }

    #[test]
    fn test_cart_serialization() {
        let cart = Cart::demo();

        let json = serde_json::to_string(&cart).unwrap();
        let parsed: Cart = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, cart);
    }

    #[test]
    fn test_credentials_completeness() {
        assert!(Credentials::new("user", "pass").is_complete());
        assert!(!Credentials::new("", "pass").is_complete());
        assert!(!Credentials::new("user", "").is_complete());
        assert!(!Credentials::default().is_complete());
    }

    #[test]
    fn test_submit_records_exact_credentials() {
        let mut flow = LoginFlow::new();
        let mut sink = RecordingSink::default();

        let outcome = flow.submit(&Credentials::new("testuser", "testpassword"), &mut sink);

        assert_eq!(outcome, SubmitOutcome::Accepted);
        assert_eq!(flow.state(), LoginState::Redirecting);
        assert_eq!(
            sink.events,
            vec![LoginEvent::AttemptSubmitted {
                username: "testuser".to_string(),
                password: "testpassword".to_string(),
            }]
        );
        assert_eq!(sink.notices.len(), 1);
        assert!(sink.notices[0].contains("testuser"));
    }

    #[test]
    fn test_submit_with_empty_username_is_rejected() {
        let mut flow = LoginFlow::new();
        let mut sink = RecordingSink::default();

        let outcome = flow.submit(&Credentials::new("", "testpassword"), &mut sink);

        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert_eq!(flow.state(), LoginState::Editing);
        assert!(sink.events.is_empty());
        assert!(sink.notices.is_empty());
    }

    #[test]
    fn test_submit_with_empty_password_is_rejected() {
        let mut flow = LoginFlow::new();
        let mut sink = RecordingSink::default();

        let outcome = flow.submit(&Credentials::new("testuser", ""), &mut sink);

        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert_eq!(flow.state(), LoginState::Editing);
        assert!(sink.events.is_empty());
    }

    #[test]
    fn test_federated_success_records_exact_token() {
        let mut flow = LoginFlow::new();
        let mut sink = RecordingSink::default();

        let outcome = flow.federated_success("mock-sso-token", &mut sink);

        assert_eq!(outcome, SubmitOutcome::Accepted);
        assert_eq!(flow.state(), LoginState::Redirecting);
        assert_eq!(
            sink.events,
            vec![LoginEvent::FederatedAccepted {
                token: "mock-sso-token".to_string(),
            }]
        );
        assert_eq!(sink.notices.len(), 1);
    }

    #[test]
    fn test_federated_failure_keeps_editing_state() {
        let mut flow = LoginFlow::new();
        let mut sink = RecordingSink::default();

        flow.federated_failure(&mut sink);

        assert_eq!(flow.state(), LoginState::Editing);
        assert_eq!(sink.events, vec![LoginEvent::FederatedRejected]);
        assert_eq!(sink.notices.len(), 1);

        // Recoverable: a retry through either path still works
        let outcome = flow.submit(&Credentials::new("user", "pass"), &mut sink);
        assert_eq!(outcome, SubmitOutcome::Accepted);
        assert_eq!(flow.state(), LoginState::Redirecting);
    }

    #[test]
    fn test_login_event_serialization() {
        let event = LoginEvent::FederatedAccepted {
            token: "tok".to_string(),
        };

        let json = serde_json::to_string(&event).unwrap();
        let parsed: LoginEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, event);
    }

    #[test]
    fn test_button_options_defaults() {
        let options = FederatedButtonOptions::default();

        assert_eq!(options.theme, ButtonTheme::Outline);
        assert_eq!(options.size, ButtonSize::Large);
        assert_eq!(options.text, ButtonText::ContinueWith);
        assert_eq!(options.shape, ButtonShape::Rectangular);
        assert_eq!(options.text.label(), "Continue with SSO");
    }

    #[test]
    fn test_profile_initial_fallback() {
        let profile = UserProfile::demo();
        assert_eq!(profile.initial(), "A");

        let blank = UserProfile {
            name: String::new(),
            ..UserProfile::demo()
        };
        assert_eq!(blank.initial(), "");
    }

    #[test]
    fn test_fixtures_are_populated() {
        assert_eq!(demo_activity().len(), 4);
        assert_eq!(quick_actions().len(), 4);

        let sections = footer_sections();
        assert_eq!(sections.len(), 5);
        assert!(sections.iter().all(|s| !s.links.is_empty()));

        let stats = DashboardStats::demo();
        assert_eq!(stats.total_users, 1250);
        assert_eq!(stats.active_users, 892);
    }
}
