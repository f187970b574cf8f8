use log::{debug, info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::shop::cart::{CartController, CartItem};
use crate::storage::KeyValueStore;

pub const CURRENCY: &str = "usd";
pub const GENERIC_PAYMENT_FAILURE: &str = "Payment failed. Please try again.";
pub const PAYMENT_SUCCESS: &str = "Payment successful! Check your email for download links.";
pub const PAYMENT_IN_PROGRESS: &str = "Please wait for the current payment to finish.";

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CheckoutError {
    #[error("Your cart is empty!")]
    EmptyCart,
    #[error("a billing email is required")]
    MissingEmail,
    #[error("payment request could not be sent: {0}")]
    Network(String),
    #[error("payment endpoint answered with status {0}")]
    Server(u16),
    #[error("payment endpoint response was malformed: {0}")]
    MalformedResponse(String),
    /// Message reported by the card processor, safe to show as-is.
    #[error("{0}")]
    Declined(String),
    #[error("payments are unavailable: {0}")]
    Unavailable(String),
}

impl CheckoutError {
    pub fn user_message(&self) -> String {
        match self {
            CheckoutError::Declined(message) => message.clone(),
            CheckoutError::EmptyCart => self.to_string(),
            CheckoutError::MissingEmail => "Please enter your email address.".to_string(),
            _ => GENERIC_PAYMENT_FAILURE.to_string(),
        }
    }
}

/// One order line. Prices stay on the server, which owns the catalog.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderLine {
    pub id: String,
    pub quantity: u32,
}

/// Body of `POST /create-payment-intent`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PaymentIntentRequest {
    /// Amount the client expects to be charged, in cents.
    pub amount: u64,
    pub currency: String,
    pub items: Vec<OrderLine>,
}

impl PaymentIntentRequest {
    pub fn from_items(items: &[CartItem]) -> Result<Self, CheckoutError> {
        if items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let total = items
            .iter()
            .fold(0u64, |acc, item| acc.saturating_add(item.line_total()));
        Ok(Self {
            amount: total.saturating_mul(100),
            currency: CURRENCY.to_string(),
            items: items
                .iter()
                .map(|item| OrderLine {
                    id: item.id.clone(),
                    quantity: item.quantity,
                })
                .collect(),
        })
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct PaymentIntentResponse {
    pub client_secret: String,
}

/// The two remote steps of a card payment.
#[allow(async_fn_in_trait)]
pub trait PaymentGateway {
    async fn create_intent(
        &self,
        request: &PaymentIntentRequest,
        idempotency_key: &str,
    ) -> Result<String, CheckoutError>;

    async fn confirm_card_payment(
        &self,
        client_secret: &str,
        billing_email: &str,
    ) -> Result<(), CheckoutError>;
}

pub async fn process_payment<G: PaymentGateway>(
    gateway: &G,
    request: &PaymentIntentRequest,
    billing_email: &str,
    idempotency_key: &str,
) -> Result<(), CheckoutError> {
    let email = billing_email.trim();
    if email.is_empty() {
        return Err(CheckoutError::MissingEmail);
    }
    let client_secret = gateway.create_intent(request, idempotency_key).await?;
    gateway.confirm_card_payment(&client_secret, email).await?;
    info!("Payment confirmed for {} cents", request.amount);
    Ok(())
}

pub fn new_idempotency_key<R: Rng>(rng: &mut R) -> String {
    format!("{:016x}", rng.gen::<u64>())
}

/// Checkout modal state: whether it is open, whether a payment is in
/// flight, and the idempotency key shared by retries of the same order.
#[derive(Clone, Debug, PartialEq)]
pub struct CheckoutSession {
    pub open: bool,
    pub processing: bool,
    pub idempotency_key: String,
    /// The request last sent under `idempotency_key`.
    keyed_request: Option<PaymentIntentRequest>,
    /// Set by `open`, consumed by the first card mount attempt.
    card_mount_pending: bool,
}

impl CheckoutSession {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            open: false,
            processing: false,
            idempotency_key: new_idempotency_key(rng),
            keyed_request: None,
            card_mount_pending: false,
        }
    }

    pub fn open<S: KeyValueStore>(&mut self, cart: &CartController<S>) -> Result<(), CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        if !self.open {
            self.card_mount_pending = true;
        }
        self.open = true;
        Ok(())
    }

    pub fn close(&mut self) {
        self.open = false;
        self.card_mount_pending = false;
    }

    /// True once per opening of the modal, so a card input that failed to
    /// mount is not retried on every render.
    pub fn take_card_mount(&mut self) -> bool {
        self.open && std::mem::take(&mut self.card_mount_pending)
    }

    /// Marks a payment as in flight and hands back the request to send.
    /// `None` when one is already running. A request that differs from the
    /// one last sent gets a fresh idempotency key.
    pub fn begin<S: KeyValueStore, R: Rng>(
        &mut self,
        cart: &CartController<S>,
        rng: &mut R,
    ) -> Option<Result<PaymentIntentRequest, CheckoutError>> {
        if self.processing {
            warn!("Ignoring payment submit while another is in flight");
            return None;
        }
        let request = match PaymentIntentRequest::from_items(cart.items()) {
            Ok(request) => request,
            Err(e) => return Some(Err(e)),
        };
        if self.keyed_request.as_ref().map_or(false, |sent| *sent != request) {
            debug!("Order changed since the last attempt, rotating idempotency key");
            self.idempotency_key = new_idempotency_key(rng);
        }
        self.keyed_request = Some(request.clone());
        self.processing = true;
        Some(Ok(request))
    }

    /// Applies the outcome. On success only the paid lines leave the cart,
    /// the modal closes and the next order gets a new key.
    pub fn finish<S: KeyValueStore, R: Rng>(
        &mut self,
        cart: &mut CartController<S>,
        outcome: &Result<(), CheckoutError>,
        rng: &mut R,
    ) {
        self.processing = false;
        if outcome.is_err() {
            return;
        }
        if let Some(paid) = self.keyed_request.take() {
            for line in &paid.items {
                cart.remove_item(&line.id);
            }
        }
        self.close();
        self.idempotency_key = new_idempotency_key(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shop::cart::NewCartItem;
    use crate::storage::MemoryStore;
    use futures::executor::block_on;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeGateway {
        intent: Option<Result<String, CheckoutError>>,
        confirm: Option<Result<(), CheckoutError>>,
        seen_keys: RefCell<Vec<String>>,
        seen_emails: RefCell<Vec<String>>,
    }

    impl PaymentGateway for FakeGateway {
        async fn create_intent(
            &self,
            _request: &PaymentIntentRequest,
            idempotency_key: &str,
        ) -> Result<String, CheckoutError> {
            self.seen_keys.borrow_mut().push(idempotency_key.to_string());
            self.intent
                .clone()
                .unwrap_or_else(|| Ok("pi_secret_123".to_string()))
        }

        async fn confirm_card_payment(
            &self,
            client_secret: &str,
            billing_email: &str,
        ) -> Result<(), CheckoutError> {
            assert_eq!(client_secret, "pi_secret_123");
            self.seen_emails.borrow_mut().push(billing_email.to_string());
            self.confirm.clone().unwrap_or(Ok(()))
        }
    }

    fn filled_cart() -> CartController<MemoryStore> {
        let mut cart = CartController::load(MemoryStore::default());
        for (id, price) in [("taskmaster", 49), ("chatapp", 79)] {
            cart.add_item(NewCartItem {
                id: id.to_string(),
                name: id.to_string(),
                price,
                image: String::new(),
            })
            .unwrap();
        }
        cart.update_quantity("chatapp", 2);
        cart
    }

    fn snapshot(cart: &CartController<MemoryStore>) -> Vec<(String, u32)> {
        cart.items()
            .iter()
            .map(|i| (i.id.clone(), i.quantity))
            .collect()
    }

    #[test]
    fn request_is_in_cents_without_prices() {
        let cart = filled_cart();
        let request = PaymentIntentRequest::from_items(cart.items()).unwrap();
        assert_eq!(request.amount, (49 + 79 * 2) * 100);
        assert_eq!(request.currency, "usd");

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body["items"],
            serde_json::json!([
                {"id": "taskmaster", "quantity": 1},
                {"id": "chatapp", "quantity": 2}
            ])
        );
    }

    #[test]
    fn checkout_refuses_to_open_on_empty_cart() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut session = CheckoutSession::new(&mut rng);
        let cart = CartController::load(MemoryStore::default());

        let err = session.open(&cart).unwrap_err();
        assert_eq!(err.user_message(), "Your cart is empty!");
        assert!(!session.open);
    }

    #[test]
    fn successful_payment_clears_cart_and_closes_modal() {
        let mut rng = SmallRng::seed_from_u64(2);
        let mut cart = filled_cart();
        let mut session = CheckoutSession::new(&mut rng);
        session.open(&cart).unwrap();
        let key_before = session.idempotency_key.clone();

        let request = session.begin(&cart, &mut rng).unwrap().unwrap();
        assert!(session.processing);
        let gateway = FakeGateway::default();
        let outcome = block_on(process_payment(
            &gateway,
            &request,
            " buyer@example.com ",
            &session.idempotency_key,
        ));
        session.finish(&mut cart, &outcome, &mut rng);

        assert!(outcome.is_ok());
        assert!(cart.is_empty());
        assert!(!session.open);
        assert!(!session.processing);
        assert_ne!(session.idempotency_key, key_before);
        assert_eq!(gateway.seen_emails.borrow()[0], "buyer@example.com");
    }

    #[test]
    fn declined_card_leaves_cart_untouched() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut cart = filled_cart();
        let before = snapshot(&cart);
        let mut session = CheckoutSession::new(&mut rng);
        session.open(&cart).unwrap();

        let request = session.begin(&cart, &mut rng).unwrap().unwrap();
        let gateway = FakeGateway {
            confirm: Some(Err(CheckoutError::Declined(
                "Your card was declined.".to_string(),
            ))),
            ..Default::default()
        };
        let outcome = block_on(process_payment(
            &gateway,
            &request,
            "buyer@example.com",
            &session.idempotency_key,
        ));
        session.finish(&mut cart, &outcome, &mut rng);

        assert_eq!(
            outcome.unwrap_err().user_message(),
            "Your card was declined."
        );
        assert_eq!(snapshot(&cart), before);
        assert!(session.open);
        assert!(!session.processing);
    }

    #[test]
    fn network_failure_is_generic_and_retry_reuses_key() {
        let mut rng = SmallRng::seed_from_u64(4);
        let mut cart = filled_cart();
        let before = snapshot(&cart);
        let mut session = CheckoutSession::new(&mut rng);
        session.open(&cart).unwrap();
        let gateway = FakeGateway {
            intent: Some(Err(CheckoutError::Network("offline".to_string()))),
            ..Default::default()
        };

        for _ in 0..2 {
            let request = session.begin(&cart, &mut rng).unwrap().unwrap();
            let outcome = block_on(process_payment(
                &gateway,
                &request,
                "buyer@example.com",
                &session.idempotency_key,
            ));
            assert_eq!(outcome.clone().unwrap_err().user_message(), GENERIC_PAYMENT_FAILURE);
            session.finish(&mut cart, &outcome, &mut rng);
        }

        let keys = gateway.seen_keys.borrow();
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[0], keys[1]);
        assert_eq!(snapshot(&cart), before);
    }

    #[test]
    fn second_submit_while_processing_is_ignored() {
        let mut rng = SmallRng::seed_from_u64(5);
        let cart = filled_cart();
        let mut session = CheckoutSession::new(&mut rng);
        session.open(&cart).unwrap();

        assert!(session.begin(&cart, &mut rng).is_some());
        assert!(session.begin(&cart, &mut rng).is_none());
    }

    #[test]
    fn changed_order_after_failure_gets_a_new_key() {
        let mut rng = SmallRng::seed_from_u64(6);
        let mut cart = filled_cart();
        let mut session = CheckoutSession::new(&mut rng);
        session.open(&cart).unwrap();

        let first = session.begin(&cart, &mut rng).unwrap().unwrap();
        let first_key = session.idempotency_key.clone();
        session.finish(
            &mut cart,
            &Err(CheckoutError::Network("offline".to_string())),
            &mut rng,
        );
        session.close();

        cart.update_quantity("taskmaster", 5);
        session.open(&cart).unwrap();
        let second = session.begin(&cart, &mut rng).unwrap().unwrap();

        assert_ne!(first.amount, second.amount);
        assert_ne!(session.idempotency_key, first_key);
    }

    #[test]
    fn items_added_during_payment_survive_success() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut cart = filled_cart();
        let mut session = CheckoutSession::new(&mut rng);
        session.open(&cart).unwrap();
        session.begin(&cart, &mut rng).unwrap().unwrap();

        cart.add_item(NewCartItem {
            id: "fitnesspro".to_string(),
            name: "fitnesspro".to_string(),
            price: 59,
            image: String::new(),
        })
        .unwrap();
        session.finish(&mut cart, &Ok(()), &mut rng);

        assert_eq!(snapshot(&cart), vec![("fitnesspro".to_string(), 1)]);
        assert!(!session.open);
    }

    #[test]
    fn card_mount_is_attempted_once_per_opening() {
        let mut rng = SmallRng::seed_from_u64(8);
        let cart = filled_cart();
        let mut session = CheckoutSession::new(&mut rng);
        assert!(!session.take_card_mount());

        session.open(&cart).unwrap();
        assert!(session.take_card_mount());
        assert!(!session.take_card_mount());
        session.open(&cart).unwrap();
        assert!(!session.take_card_mount());

        session.close();
        assert!(!session.take_card_mount());
        session.open(&cart).unwrap();
        assert!(session.take_card_mount());
    }

    #[test]
    fn blank_email_never_reaches_the_gateway() {
        let cart = filled_cart();
        let request = PaymentIntentRequest::from_items(cart.items()).unwrap();
        let gateway = FakeGateway::default();

        let outcome = block_on(process_payment(&gateway, &request, "   ", "key"));
        assert_eq!(outcome, Err(CheckoutError::MissingEmail));
        assert!(gateway.seen_keys.borrow().is_empty());
    }
}
