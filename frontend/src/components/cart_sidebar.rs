use yew::prelude::*;

use crate::shop::cart::CartItem;

#[derive(Properties, PartialEq)]
pub struct CartSidebarProps {
    pub open: bool,
    pub items: Vec<CartItem>,
    pub total: u64,
    pub on_close: Callback<()>,
    /// `(id, requested quantity)`. The minus button may request 0.
    pub on_quantity: Callback<(String, i64)>,
    pub on_remove: Callback<String>,
    pub on_checkout: Callback<()>,
}

#[function_component(CartSidebar)]
pub fn cart_sidebar(props: &CartSidebarProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let checkout = {
        let on_checkout = props.on_checkout.clone();
        Callback::from(move |_: MouseEvent| on_checkout.emit(()))
    };

    let lines = props.items.iter().map(|item| {
        let quantity = i64::from(item.quantity);
        let decrement = {
            let on_quantity = props.on_quantity.clone();
            let id = item.id.clone();
            Callback::from(move |_: MouseEvent| on_quantity.emit((id.clone(), quantity - 1)))
        };
        let increment = {
            let on_quantity = props.on_quantity.clone();
            let id = item.id.clone();
            Callback::from(move |_: MouseEvent| on_quantity.emit((id.clone(), quantity + 1)))
        };
        let remove = {
            let on_remove = props.on_remove.clone();
            let id = item.id.clone();
            Callback::from(move |_: MouseEvent| on_remove.emit(id.clone()))
        };

        html! {
            <div class="cart-item" key={item.id.clone()}>
                <div class="cart-item-icon"><i class={item.image.clone()}></i></div>
                <div class="cart-item-info">
                    <h4>{ &item.name }</h4>
                    <span class="cart-item-price">{ format!("${}", item.price) }</span>
                    <div class="quantity-controls">
                        <button class="quantity-btn" onclick={decrement}>{"-"}</button>
                        <span>{ item.quantity }</span>
                        <button class="quantity-btn" onclick={increment}>{"+"}</button>
                    </div>
                </div>
                <button class="remove-item" aria-label="Remove" onclick={remove}>
                    <i class="fas fa-trash"></i>
                </button>
            </div>
        }
    });

    html! {
        <aside class={classes!("cart-sidebar", props.open.then(|| "open"))}>
            <div class="cart-header">
                <h3>{"Shopping Cart"}</h3>
                <button class="close-cart" aria-label="Close cart" onclick={close}>{"×"}</button>
            </div>
            <div class="cart-items">
                if props.items.is_empty() {
                    <p class="empty-cart">{"Your cart is empty"}</p>
                } else {
                    { for lines }
                }
            </div>
            <div class="cart-footer">
                <div class="cart-total">
                    <span>{"Total:"}</span>
                    <span>{ format!("${}", props.total) }</span>
                </div>
                <button class="btn btn-primary checkout-btn" onclick={checkout}>
                    {"Proceed to Checkout"}
                </button>
            </div>
        </aside>
    }
}
