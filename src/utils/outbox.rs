//! Contact message hand-off.
//!
//! There is no mail backend: sending waits for a simulated network delay
//! and logs the encoded message to the console.

use folio_core::SendError;
use folio_core::contact::ContactForm;
use gloo_timers::future::TimeoutFuture;
use leptos::logging::log;

use crate::config::outbox::SEND_LATENCY_MS;

/// Hands a validated message off for delivery.
pub async fn send_message(form: ContactForm) -> Result<(), SendError> {
    let payload = serde_json::to_string(&form)?;
    TimeoutFuture::new(SEND_LATENCY_MS).await;
    log!("Form data: {payload}");
    Ok(())
}
