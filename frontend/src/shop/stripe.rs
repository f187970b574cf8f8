use gloo_net::http::Request;
use js_sys::{Object, Promise, Reflect};
use std::rc::Rc;

use log::{error, info};
use serde_json::json;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use yew::Callback;

use crate::config;
use crate::shop::checkout::{
    CheckoutError, PaymentGateway, PaymentIntentRequest, PaymentIntentResponse,
};

#[wasm_bindgen]
extern "C" {
    #[derive(Clone)]
    type StripeJs;

    #[wasm_bindgen(catch, js_name = Stripe)]
    fn stripe_init(publishable_key: &str) -> Result<StripeJs, JsValue>;

    #[wasm_bindgen(method)]
    fn elements(this: &StripeJs) -> ElementsJs;

    #[wasm_bindgen(method, js_name = confirmCardPayment)]
    fn confirm_card_payment(this: &StripeJs, client_secret: &str, data: &JsValue) -> Promise;

    type ElementsJs;

    #[wasm_bindgen(method)]
    fn create(this: &ElementsJs, kind: &str, options: &JsValue) -> CardElementJs;

    #[derive(Clone)]
    type CardElementJs;

    #[wasm_bindgen(method, catch)]
    fn mount(this: &CardElementJs, selector: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(method)]
    fn on(this: &CardElementJs, event: &str, handler: &js_sys::Function);

    #[wasm_bindgen(method)]
    fn destroy(this: &CardElementJs);
}

type ChangeHandler = Closure<dyn FnMut(JsValue)>;

/// Stripe.js instance with a mounted card input. Clones share the card's
/// `change` handler, which is released with the last clone.
#[derive(Clone)]
pub struct StripeGateway {
    stripe: StripeJs,
    card: CardElementJs,
    _on_change: Rc<ChangeHandler>,
}

impl StripeGateway {
    /// Mounts the card input into `selector`. `on_card_error` receives the
    /// validation message Stripe reports while the user types, or `None`
    /// once the input is valid again.
    pub fn mount(selector: &str, on_card_error: Callback<Option<String>>) -> Result<Self, CheckoutError> {
        let stripe = stripe_init(config::stripe_publishable_key())
            .map_err(|e| CheckoutError::Unavailable(format!("{:?}", e)))?;

        let style = json!({
            "style": {
                "base": {
                    "fontSize": "16px",
                    "color": "#424770",
                    "::placeholder": { "color": "#aab7c4" },
                },
            },
        });
        let options = serde_wasm_bindgen::to_value(&style)
            .map_err(|e| CheckoutError::Unavailable(e.to_string()))?;
        let card = stripe.elements().create("card", &options);
        card.mount(selector)
            .map_err(|e| CheckoutError::Unavailable(format!("{:?}", e)))?;

        let on_change = ChangeHandler::new(move |event: JsValue| {
            on_card_error.emit(error_message(&event));
        });
        card.on("change", on_change.as_ref().unchecked_ref());

        info!("Stripe card element mounted on {}", selector);
        Ok(Self {
            stripe,
            card,
            _on_change: Rc::new(on_change),
        })
    }

    /// Tears the card input down so it stops emitting `change` events.
    pub fn unmount(self) {
        self.card.destroy();
        info!("Stripe card element removed");
    }
}

impl PaymentGateway for StripeGateway {
    async fn create_intent(
        &self,
        request: &PaymentIntentRequest,
        idempotency_key: &str,
    ) -> Result<String, CheckoutError> {
        let response = Request::post(&format!(
            "{}/create-payment-intent",
            config::get_backend_url()
        ))
        .header("Content-Type", "application/json")
        .header("Idempotency-Key", idempotency_key)
        .json(request)
        .map_err(|e| CheckoutError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| CheckoutError::Network(e.to_string()))?;

        if !response.ok() {
            error!("Payment intent request failed with status {}", response.status());
            return Err(CheckoutError::Server(response.status()));
        }

        response
            .json::<PaymentIntentResponse>()
            .await
            .map(|body| body.client_secret)
            .map_err(|e| CheckoutError::MalformedResponse(e.to_string()))
    }

    async fn confirm_card_payment(
        &self,
        client_secret: &str,
        billing_email: &str,
    ) -> Result<(), CheckoutError> {
        let data = confirm_payload(&self.card, billing_email)
            .map_err(|e| CheckoutError::Unavailable(format!("{:?}", e)))?;

        let result = JsFuture::from(self.stripe.confirm_card_payment(client_secret, &data))
            .await
            .map_err(|e| CheckoutError::Network(format!("{:?}", e)))?;

        match error_message(&result) {
            Some(message) => Err(CheckoutError::Declined(message)),
            None => Ok(()),
        }
    }
}

/// `{payment_method: {card, billing_details: {email}}}`
fn confirm_payload(card: &CardElementJs, billing_email: &str) -> Result<JsValue, JsValue> {
    let billing_details = Object::new();
    Reflect::set(&billing_details, &"email".into(), &billing_email.into())?;

    let payment_method = Object::new();
    Reflect::set(&payment_method, &"card".into(), card.as_ref())?;
    Reflect::set(&payment_method, &"billing_details".into(), &billing_details)?;

    let data = Object::new();
    Reflect::set(&data, &"payment_method".into(), &payment_method)?;
    Ok(data.into())
}

/// Reads `value.error.message`, as used by both card change events and
/// `confirmCardPayment` results.
fn error_message(value: &JsValue) -> Option<String> {
    let error = Reflect::get(value, &"error".into()).ok()?;
    if error.is_undefined() || error.is_null() {
        return None;
    }
    let message = Reflect::get(&error, &"message".into())
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| "Your card could not be charged.".to_string());
    Some(message)
}
