//! The cart drawer state machine and Telegram order handoff.
//!
//! Steps: `Cart` -> `Details` -> (external handoff) -> `Success` -> `Cart`.
//! The handoff itself is transient: submitting composes the order message,
//! opens the deep link, and lands directly on `Success`.
//!
//! The handoff is fire-and-forget. Nothing observes whether the message
//! actually reached the bot, so the cart is NOT cleared on submit; it only
//! clears when the user confirms the order went through. `Success` offers a
//! retry that re-opens the previously composed link verbatim - even if the
//! cart or customer details changed in the meantime, the retried message is
//! the original one.

use digivault_core::{CustomerInfo, Product, display_price, display_total};
use tracing::{debug, info, warn};
use url::Url;

use crate::cart::CartStore;

/// Default Telegram bot handle orders are sent to.
pub const DEFAULT_BOT_HANDLE: &str = "messagebotkhbot";

/// Where the checkout surface currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutStep {
    /// Reviewing cart contents.
    #[default]
    Cart,
    /// Entering customer details.
    Details,
    /// Order link opened; waiting for the user to confirm it sent.
    Success,
}

/// Opens an external deep link.
///
/// Implementations must be fire-and-forget: never panic, never block, no
/// observable result. A popup blocker eating the link is indistinguishable
/// from success; the manual retry on the success step is the only recovery.
pub trait LinkOpener {
    fn open(&self, url: &Url);
}

/// The checkout flow for one cart drawer session.
#[derive(Debug)]
pub struct Checkout {
    step: CheckoutStep,
    customer: CustomerInfo,
    last_order_url: Option<Url>,
    bot_url: Url,
}

impl Default for Checkout {
    fn default() -> Self {
        Self::new(DEFAULT_BOT_HANDLE)
    }
}

impl Checkout {
    /// Create a checkout flow targeting the given Telegram bot handle.
    ///
    /// An unparseable handle falls back to [`DEFAULT_BOT_HANDLE`] with a
    /// diagnostic log; the handoff path itself can then never fail.
    #[must_use]
    pub fn new(bot_handle: &str) -> Self {
        let bot_url = parse_bot_url(bot_handle).unwrap_or_else(|| {
            warn!(bot_handle, "invalid bot handle, using default");
            parse_bot_url(DEFAULT_BOT_HANDLE)
                .unwrap_or_else(|| unreachable!("default bot handle is a valid URL"))
        });
        Self {
            step: CheckoutStep::Cart,
            customer: CustomerInfo::default(),
            last_order_url: None,
            bot_url,
        }
    }

    #[must_use]
    pub const fn step(&self) -> CheckoutStep {
        self.step
    }

    #[must_use]
    pub const fn customer(&self) -> &CustomerInfo {
        &self.customer
    }

    /// Mutable access for the details form.
    pub const fn customer_mut(&mut self) -> &mut CustomerInfo {
        &mut self.customer
    }

    /// The composed deep link from the most recent submit, if any.
    #[must_use]
    pub const fn last_order_url(&self) -> Option<&Url> {
        self.last_order_url.as_ref()
    }

    /// Plain link to the bot chat (no message), for the "start the bot
    /// first" prompt.
    #[must_use]
    pub const fn bot_url(&self) -> &Url {
        &self.bot_url
    }

    /// `Cart -> Details`. Requires a non-empty cart.
    ///
    /// Returns whether the transition was taken.
    pub fn begin_checkout(&mut self, cart: &CartStore) -> bool {
        if self.step != CheckoutStep::Cart || cart.is_empty() {
            return false;
        }
        self.step = CheckoutStep::Details;
        true
    }

    /// `Details -> Cart`.
    pub fn back(&mut self) {
        if self.step == CheckoutStep::Details {
            self.step = CheckoutStep::Cart;
        }
    }

    /// Whether the submit transition is currently available. Surfaces render
    /// this as a disabled action, not an error.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.step == CheckoutStep::Details && self.customer.is_complete()
    }

    /// `Details -> Success` via the external handoff.
    ///
    /// Composes the order message from the current cart and customer
    /// details, opens the deep link through `opener`, and remembers the link
    /// for retries. The cart is deliberately left untouched.
    ///
    /// Returns whether the transition was taken.
    pub fn submit(&mut self, cart: &CartStore, opener: &dyn LinkOpener) -> bool {
        if !self.can_submit() {
            debug!("submit unavailable, staying on details");
            return false;
        }
        let message = compose_order_message(cart, &self.customer);
        let mut url = self.bot_url.clone();
        url.query_pairs_mut().append_pair("text", &message);
        info!(items = cart.len(), "handing order off to Telegram");
        opener.open(&url);
        self.last_order_url = Some(url);
        self.step = CheckoutStep::Success;
        true
    }

    /// Re-open the previously composed order link without recomposing.
    ///
    /// Only available on `Success`. The resent content is byte-identical to
    /// the original handoff, by design, even if state changed since.
    pub fn retry(&self, opener: &dyn LinkOpener) {
        if self.step != CheckoutStep::Success {
            return;
        }
        if let Some(url) = &self.last_order_url {
            info!("re-opening previous order link");
            opener.open(url);
        }
    }

    /// `Success -> Cart`: the user confirmed the order went through. Clears
    /// the cart and closes the surface.
    pub fn finish(&mut self, cart: &mut CartStore) {
        if self.step != CheckoutStep::Success {
            return;
        }
        cart.clear();
        self.close();
    }

    /// Close the surface: reset customer details and return to `Cart`. The
    /// cart store is never cleared by closing.
    pub fn close(&mut self) {
        self.customer.reset();
        self.step = CheckoutStep::Cart;
    }
}

/// Compose the order message sent to the bot.
///
/// One bullet line per cart entry ("name - price"), a total formatted to
/// exactly two decimal places, then each customer field on its own labeled
/// line. A blank optional Telegram handle renders as an explicit `N/A`
/// rather than being omitted.
#[must_use]
pub fn compose_order_message(cart: &CartStore, customer: &CustomerInfo) -> String {
    let items_list = cart
        .items()
        .iter()
        .map(line_item)
        .collect::<Vec<_>>()
        .join("\n");
    let telegram = if customer.telegram.trim().is_empty() {
        "N/A"
    } else {
        customer.telegram.as_str()
    };

    format!(
        "\u{1f6cd}\u{fe0f} **New Order Request**\n\
         \n\
         **Order Details:**\n\
         {items_list}\n\
         ----------------\n\
         **Total:** `{total}`\n\
         \n\
         **Customer Info:**\n\
         \u{1f464} Name: `{name}`\n\
         \u{1f4e7} Email: `{email}`\n\
         \u{1f4f1} Phone: `{phone}`\n\
         \u{1f4ac} Telegram: `{telegram}`\n\
         \n\
         I would like to purchase these items.",
        total = display_total(cart.total()),
        name = customer.name,
        email = customer.email,
        phone = customer.phone,
    )
}

fn line_item(product: &Product) -> String {
    format!(
        "\u{2022} `{}` - `{}`",
        product.name,
        display_price(product.price)
    )
}

/// Parse `https://t.me/<handle>`, rejecting handles that would distort the
/// URL (path separators, a different host, and the like).
fn parse_bot_url(handle: &str) -> Option<Url> {
    let handle = handle.trim().trim_start_matches('@');
    if handle.is_empty() || !handle.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    Url::parse(&format!("https://t.me/{handle}")).ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::seed;

    /// Records every opened link; stands in for the browser.
    #[derive(Default)]
    struct RecordingOpener {
        opened: RefCell<Vec<Url>>,
    }

    impl LinkOpener for RecordingOpener {
        fn open(&self, url: &Url) {
            self.opened.borrow_mut().push(url.clone());
        }
    }

    fn cart_with(ids: &[&str]) -> CartStore {
        let products = seed::products();
        let mut cart = CartStore::new();
        for id in ids {
            let product = products.iter().find(|p| p.id.as_str() == *id).unwrap();
            cart.add(product);
        }
        cart
    }

    fn filled_customer() -> CustomerInfo {
        CustomerInfo {
            name: "John Doe".to_owned(),
            email: "john@example.com".to_owned(),
            phone: "+855 12 345 678".to_owned(),
            telegram: String::new(),
        }
    }

    #[test]
    fn test_begin_requires_non_empty_cart() {
        let mut checkout = Checkout::default();
        assert!(!checkout.begin_checkout(&CartStore::new()));
        assert_eq!(checkout.step(), CheckoutStep::Cart);

        assert!(checkout.begin_checkout(&cart_with(&["3"])));
        assert_eq!(checkout.step(), CheckoutStep::Details);
    }

    #[test]
    fn test_back_returns_to_cart() {
        let mut checkout = Checkout::default();
        checkout.begin_checkout(&cart_with(&["3"]));
        checkout.back();
        assert_eq!(checkout.step(), CheckoutStep::Cart);
    }

    #[test]
    fn test_submit_blocked_on_blank_required_field() {
        let cart = cart_with(&["3"]);
        let mut checkout = Checkout::default();
        checkout.begin_checkout(&cart);
        *checkout.customer_mut() = CustomerInfo {
            name: String::new(),
            email: "x@y.com".to_owned(),
            phone: "555".to_owned(),
            telegram: String::new(),
        };

        let opener = RecordingOpener::default();
        assert!(!checkout.can_submit());
        assert!(!checkout.submit(&cart, &opener));
        assert_eq!(checkout.step(), CheckoutStep::Details);
        assert!(opener.opened.borrow().is_empty());
    }

    #[test]
    fn test_submit_opens_link_and_keeps_cart() {
        let cart = cart_with(&["3", "1"]);
        let mut checkout = Checkout::default();
        checkout.begin_checkout(&cart);
        *checkout.customer_mut() = filled_customer();

        let opener = RecordingOpener::default();
        assert!(checkout.submit(&cart, &opener));
        assert_eq!(checkout.step(), CheckoutStep::Success);
        assert_eq!(opener.opened.borrow().len(), 1);
        assert_eq!(cart.len(), 2, "submit must not clear the cart");

        let url = checkout.last_order_url().unwrap();
        assert_eq!(url.host_str(), Some("t.me"));
        assert_eq!(url.path(), "/messagebotkhbot");
        let (_, text) = url.query_pairs().find(|(k, _)| k == "text").unwrap();
        assert!(text.contains("New Order Request"));
        assert!(text.contains("John Doe"));
    }

    #[test]
    fn test_retry_reuses_composed_link_verbatim() {
        let mut cart = cart_with(&["3"]);
        let mut checkout = Checkout::default();
        checkout.begin_checkout(&cart);
        *checkout.customer_mut() = filled_customer();

        let opener = RecordingOpener::default();
        checkout.submit(&cart, &opener);

        // State drifts after the handoff; the retry must not notice.
        cart.clear();
        checkout.customer_mut().name = "Someone Else".to_owned();

        checkout.retry(&opener);
        let opened = opener.opened.borrow();
        assert_eq!(opened.len(), 2);
        assert_eq!(opened[0], opened[1]);
    }

    #[test]
    fn test_retry_outside_success_is_noop() {
        let checkout = Checkout::default();
        let opener = RecordingOpener::default();
        checkout.retry(&opener);
        assert!(opener.opened.borrow().is_empty());
    }

    #[test]
    fn test_finish_clears_cart_and_closes() {
        let mut cart = cart_with(&["3"]);
        let mut checkout = Checkout::default();
        checkout.begin_checkout(&cart);
        *checkout.customer_mut() = filled_customer();
        checkout.submit(&cart, &RecordingOpener::default());

        checkout.finish(&mut cart);
        assert!(cart.is_empty());
        assert_eq!(checkout.step(), CheckoutStep::Cart);
        assert_eq!(checkout.customer(), &CustomerInfo::default());
    }

    #[test]
    fn test_close_resets_details_but_keeps_cart() {
        let cart = cart_with(&["3"]);
        let mut checkout = Checkout::default();
        checkout.begin_checkout(&cart);
        checkout.customer_mut().name = "Partial Entry".to_owned();

        checkout.close();
        assert_eq!(checkout.step(), CheckoutStep::Cart);
        assert_eq!(checkout.customer(), &CustomerInfo::default());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_message_structure() {
        let cart = cart_with(&["3", "1"]);
        let message = compose_order_message(&cart, &filled_customer());

        assert!(message.contains("\u{2022} `Netflix Premium 4K` - `$4.99`"));
        assert!(message.contains("\u{2022} `CapCut Pro (1 Year)` - `$12.99`"));
        assert!(message.contains("**Total:** `$17.98`"));
        assert!(message.contains("Name: `John Doe`"));
        assert!(message.contains("Email: `john@example.com`"));
        assert!(message.contains("Phone: `+855 12 345 678`"));
        assert!(message.contains("Telegram: `N/A`"));
    }

    #[test]
    fn test_message_keeps_supplied_telegram_handle() {
        let cart = cart_with(&["3"]);
        let mut customer = filled_customer();
        customer.telegram = "@johndoe".to_owned();
        let message = compose_order_message(&cart, &customer);
        assert!(message.contains("Telegram: `@johndoe`"));
    }

    #[test]
    fn test_total_always_two_decimals() {
        // YouTube Premium is 3.50; a naive float format would print $3.5.
        let cart = cart_with(&["8"]);
        let mut customer = filled_customer();
        customer.telegram = String::new();
        let message = compose_order_message(&cart, &customer);
        assert!(message.contains("**Total:** `$3.50`"));
    }

    #[test]
    fn test_bot_url_is_plain_chat_link() {
        let checkout = Checkout::default();
        assert_eq!(checkout.bot_url().as_str(), "https://t.me/messagebotkhbot");
    }

    #[test]
    fn test_configured_handle_accepts_leading_at() {
        let checkout = Checkout::new("@order_bot");
        assert_eq!(checkout.bot_url().as_str(), "https://t.me/order_bot");
    }

    #[test]
    fn test_invalid_handle_falls_back_to_default() {
        let checkout = Checkout::new("evil.example/phish");
        assert_eq!(checkout.bot_url().as_str(), "https://t.me/messagebotkhbot");
    }
}
