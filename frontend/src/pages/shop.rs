use log::{error, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::cart_sidebar::CartSidebar;
use crate::components::modal::Modal;
use crate::components::notification::{NoticeKind, Notify};
use crate::components::reveal::Reveal;
use crate::shop::cart::{CartController, CartItem};
use crate::shop::catalog::{app_matches, demo_features, find_app, CatalogApp, APPS, SHOP_CATEGORIES};
use crate::shop::checkout::{
    process_payment, CheckoutError, CheckoutSession, PAYMENT_IN_PROGRESS, PAYMENT_SUCCESS,
};
use crate::shop::stripe::StripeGateway;
use crate::storage::SiteStorage;

const CARD_ELEMENT: &str = "#card-element";

#[derive(Properties, PartialEq)]
pub struct ShopProps {
    pub notify: Notify,
}

pub enum ShopMsg {
    SetFilter(&'static str),
    ToggleCart,
    CloseCart,
    AddToCart(&'static str),
    RemoveItem(String),
    UpdateQuantity(String, i64),
    OpenCheckout,
    CloseCheckout,
    ShowDemo(&'static str),
    CloseDemo,
    SetEmail(String),
    CardError(Option<String>),
    SubmitPayment,
    PaymentFinished(Result<(), CheckoutError>),
}

pub struct Shop {
    cart: CartController<SiteStorage>,
    checkout: CheckoutSession,
    rng: SmallRng,
    filter: &'static str,
    cart_open: bool,
    demo: Option<&'static str>,
    email: String,
    card_error: Option<String>,
    gateway: Option<StripeGateway>,
    gateway_error: Option<CheckoutError>,
}

impl Shop {
    fn notify(ctx: &Context<Self>, kind: NoticeKind, message: impl Into<String>) {
        ctx.props().notify.emit((kind, message.into()));
    }

    fn release_gateway(&mut self) {
        if let Some(gateway) = self.gateway.take() {
            gateway.unmount();
        }
    }

    /// Cart edits wait until the in-flight payment settles.
    fn cart_locked(&self, ctx: &Context<Self>) -> bool {
        if self.checkout.processing {
            Self::notify(ctx, NoticeKind::Info, PAYMENT_IN_PROGRESS);
        }
        self.checkout.processing
    }

    fn view_app_card(ctx: &Context<Self>, app: &'static CatalogApp, in_cart: bool) -> Html {
        let add = ctx.link().callback(move |_: MouseEvent| ShopMsg::AddToCart(app.id));
        let demo = ctx.link().callback(move |_: MouseEvent| ShopMsg::ShowDemo(app.id));

        html! {
            <Reveal class="app-card">
                <div class="app-icon"><i class={app.icon}></i></div>
                <h3>{ app.name }</h3>
                <p>{ app.description }</p>
                <div class="app-price">{ format!("${}", app.price) }</div>
                <div class="app-actions">
                    <button class="btn btn-outline" onclick={demo}>{"View Demo"}</button>
                    <button class={classes!("btn", "btn-primary", in_cart.then(|| "in-cart"))} onclick={add}>
                        { if in_cart { "In Cart" } else { "Add to Cart" } }
                    </button>
                </div>
            </Reveal>
        }
    }

    fn view_checkout(&self, ctx: &Context<Self>) -> Html {
        let summary = match self.cart.checkout_summary() {
            Ok(summary) => summary,
            Err(_) => return html! {},
        };
        let close = ctx.link().callback(|_: ()| ShopMsg::CloseCheckout);
        let set_email = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ShopMsg::SetEmail(input.value())
        });
        let submit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ShopMsg::SubmitPayment
        });

        html! {
            <Modal title="Checkout" on_close={close} class="checkout-modal">
                <div class="checkout-summary">
                    { for summary.lines.iter().map(|line| html! {
                        <div class="summary-line">
                            <span>{ &line.label }</span>
                            <span>{ format!("${}", line.amount) }</span>
                        </div>
                    }) }
                    <div class="summary-total">
                        <span>{"Total"}</span>
                        <span>{ format!("${}", summary.total) }</span>
                    </div>
                </div>
                <form class="payment-form" onsubmit={submit}>
                    <label for="billing-email">{"Email"}</label>
                    <input
                        id="billing-email"
                        type="email"
                        required={true}
                        placeholder="you@example.com"
                        value={self.email.clone()}
                        oninput={set_email}
                    />
                    <label>{"Card details"}</label>
                    <div id="card-element" class="card-element"></div>
                    if let Some(message) = &self.card_error {
                        <div class="card-errors" role="alert">{ message }</div>
                    }
                    <button type="submit" class="btn btn-primary pay-btn" disabled={self.checkout.processing}>
                        if self.checkout.processing {
                            <span class="spinner"></span>{" Processing..."}
                        } else {
                            { format!("Pay ${}", summary.total) }
                        }
                    </button>
                </form>
            </Modal>
        }
    }

    fn view_demo(&self, ctx: &Context<Self>) -> Html {
        let Some(id) = self.demo else {
            return html! {};
        };
        let title = find_app(id).map(|app| app.name).unwrap_or("App Demo");
        let close = ctx.link().callback(|_: ()| ShopMsg::CloseDemo);

        html! {
            <Modal title={format!("{} Demo", title)} on_close={close} class="demo-modal">
                <h4>{"Key Features"}</h4>
                <ul class="demo-features">
                    { for demo_features(id).iter().map(|feature| html! {
                        <li><i class="fas fa-check"></i>{ " " }{ *feature }</li>
                    }) }
                </ul>
            </Modal>
        }
    }
}

impl Component for Shop {
    type Message = ShopMsg;
    type Properties = ShopProps;

    fn create(_ctx: &Context<Self>) -> Self {
        let mut rng = SmallRng::from_entropy();
        Self {
            cart: CartController::load(SiteStorage::open()),
            checkout: CheckoutSession::new(&mut rng),
            rng,
            filter: "all",
            cart_open: false,
            demo: None,
            email: String::new(),
            card_error: None,
            gateway: None,
            gateway_error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ShopMsg::SetFilter(filter) => {
                self.filter = filter;
                true
            }
            ShopMsg::ToggleCart => {
                self.cart_open = !self.cart_open;
                true
            }
            ShopMsg::CloseCart => {
                self.cart_open = false;
                true
            }
            ShopMsg::AddToCart(id) => {
                if self.cart_locked(ctx) {
                    return false;
                }
                let Some(app) = find_app(id) else {
                    error!("Unknown app id {}", id);
                    return false;
                };
                match self.cart.add_item(app.to_cart_item()) {
                    Ok(item) => {
                        Self::notify(ctx, NoticeKind::Success, format!("{} added to cart!", item.name))
                    }
                    Err(e) => Self::notify(ctx, NoticeKind::Info, e.to_string()),
                }
                true
            }
            ShopMsg::RemoveItem(id) => !self.cart_locked(ctx) && self.cart.remove_item(&id),
            ShopMsg::UpdateQuantity(id, quantity) => {
                !self.cart_locked(ctx) && self.cart.update_quantity(&id, quantity)
            }
            ShopMsg::OpenCheckout => {
                match self.checkout.open(&self.cart) {
                    Ok(()) => {
                        self.cart_open = false;
                        self.card_error = None;
                    }
                    Err(e) => Self::notify(ctx, NoticeKind::Error, e.user_message()),
                }
                true
            }
            ShopMsg::CloseCheckout => {
                if self.checkout.processing {
                    return false;
                }
                self.checkout.close();
                self.release_gateway();
                true
            }
            ShopMsg::ShowDemo(id) => {
                self.demo = Some(id);
                true
            }
            ShopMsg::CloseDemo => {
                self.demo = None;
                true
            }
            ShopMsg::SetEmail(email) => {
                self.email = email;
                true
            }
            ShopMsg::CardError(message) => {
                self.card_error = message;
                true
            }
            ShopMsg::SubmitPayment => {
                let Some(gateway) = self.gateway.clone() else {
                    let e = self
                        .gateway_error
                        .clone()
                        .unwrap_or_else(|| CheckoutError::Unavailable("card input not ready".to_string()));
                    error!("Cannot submit payment: {}", e);
                    Self::notify(ctx, NoticeKind::Error, e.user_message());
                    return false;
                };
                let request = match self.checkout.begin(&self.cart, &mut self.rng) {
                    None => return false,
                    Some(Err(e)) => {
                        Self::notify(ctx, NoticeKind::Error, e.user_message());
                        return true;
                    }
                    Some(Ok(request)) => request,
                };
                let email = self.email.clone();
                let key = self.checkout.idempotency_key.clone();
                info!("Submitting payment of {} cents", request.amount);
                ctx.link().send_future(async move {
                    let outcome = process_payment(&gateway, &request, &email, &key).await;
                    ShopMsg::PaymentFinished(outcome)
                });
                true
            }
            ShopMsg::PaymentFinished(outcome) => {
                self.checkout.finish(&mut self.cart, &outcome, &mut self.rng);
                match outcome {
                    Ok(()) => {
                        self.release_gateway();
                        self.email.clear();
                        Self::notify(ctx, NoticeKind::Success, PAYMENT_SUCCESS);
                    }
                    Err(e) => {
                        error!("Payment failed: {}", e);
                        Self::notify(ctx, NoticeKind::Error, e.user_message());
                    }
                }
                true
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if !self.checkout.take_card_mount() {
            return;
        }
        let on_card_error = ctx.link().callback(ShopMsg::CardError);
        match StripeGateway::mount(CARD_ELEMENT, on_card_error) {
            Ok(gateway) => {
                self.gateway = Some(gateway);
                self.gateway_error = None;
            }
            Err(e) => {
                // Stays unmounted until the modal is reopened; submitting reports the error.
                error!("Stripe unavailable: {}", e);
                self.gateway_error = Some(e);
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let items: Vec<CartItem> = self.cart.items().to_vec();

        html! {
            <div class="shop-page">
                <section class="shop-hero">
                    <div class="container">
                        <h1>{"App Store"}</h1>
                        <p>{"Production-ready app source code, ready to customise and launch."}</p>
                    </div>
                </section>

                <button class="cart-toggle" aria-label="Open cart" onclick={link.callback(|_: MouseEvent| ShopMsg::ToggleCart)}>
                    <i class="fas fa-shopping-cart"></i>
                    <span class="cart-count">{ self.cart.len() }</span>
                </button>

                <section class="shop-content">
                    <div class="container">
                        <div class="shop-filters">
                            { for SHOP_CATEGORIES.iter().map(|(value, label)| {
                                let value: &'static str = value;
                                html! {
                                    <button
                                        class={classes!("filter-btn", (self.filter == value).then(|| "active"))}
                                        onclick={link.callback(move |_: MouseEvent| ShopMsg::SetFilter(value))}
                                    >
                                        { *label }
                                    </button>
                                }
                            }) }
                        </div>
                        <div class="apps-grid">
                            { for APPS.iter()
                                .filter(|app| app_matches(app, self.filter))
                                .map(|app| Self::view_app_card(ctx, app, self.cart.contains(app.id))) }
                        </div>
                    </div>
                </section>

                <CartSidebar
                    open={self.cart_open}
                    {items}
                    total={self.cart.total()}
                    on_close={link.callback(|_: ()| ShopMsg::CloseCart)}
                    on_quantity={link.callback(|(id, quantity): (String, i64)| ShopMsg::UpdateQuantity(id, quantity))}
                    on_remove={link.callback(ShopMsg::RemoveItem)}
                    on_checkout={link.callback(|_: ()| ShopMsg::OpenCheckout)}
                />

                if self.checkout.open {
                    { self.view_checkout(ctx) }
                }
                { self.view_demo(ctx) }
            </div>
        }
    }
}
