//! Shopping cart card with per-item quantity controls.

use core_types::Cart;
use yew::prelude::*;

/// Properties for CartPanel component.
#[derive(Properties, PartialEq)]
pub struct CartPanelProps {
    /// Current cart contents, owned by the dashboard
    pub cart: Cart,
    /// (item id, requested quantity); the parent applies the change
    pub on_set_quantity: Callback<(u32, i32)>,
}

/// Shopping cart card.
#[function_component(CartPanel)]
pub fn cart_panel(props: &CartPanelProps) -> Html {
    let cart = &props.cart;

    html! {
        <div class="dashboard-card cart-card">
            <h2>
                {"🛒 Shopping Cart"}
                <span class="cart-count">{ cart.item_count() }</span>
            </h2>
            if cart.is_empty() {
                <p class="empty-cart">{"Your cart is empty"}</p>
            } else {
                <>
                <div class="cart-items">
                    { for cart.items().iter().map(|item| {
                        let decrement = {
                            let on_set_quantity = props.on_set_quantity.clone();
                            let id = item.id;
                            let quantity = item.quantity as i32;
                            Callback::from(move |_: MouseEvent| {
                                on_set_quantity.emit((id, quantity - 1));
                            })
                        };
                        let increment = {
                            let on_set_quantity = props.on_set_quantity.clone();
                            let id = item.id;
                            let quantity = item.quantity as i32;
                            Callback::from(move |_: MouseEvent| {
                                on_set_quantity.emit((id, quantity + 1));
                            })
                        };

                        html! {
                            <div class="cart-item" key={item.id}>
                                <div class="cart-item-info">
                                    <h4>{ &item.name }</h4>
                                    <p>{ format!("${} per night", item.unit_price) }</p>
                                </div>
                                <div class="cart-item-controls">
                                    <button class="quantity-btn" onclick={decrement}>{"-"}</button>
                                    <span class="quantity">{ item.quantity }</span>
                                    <button class="quantity-btn" onclick={increment}>{"+"}</button>
                                </div>
                            </div>
                        }
                    })}
                </div>
                <div class="cart-footer">
                    <span class="cart-total">{ format!("Total: ${}", cart.total()) }</span>
                    <button class="checkout-button">{"Proceed to Checkout"}</button>
                </div>
                </>
            }
        </div>
    }
}
