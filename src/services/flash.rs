use actix_session::Session;
use serde::{Deserialize, Serialize};

const FLASH_KEY: &str = "_flash";

/// One-shot notice carried in the session between a redirect and the
/// next rendered page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub message: String,
    pub kind: String,
}

/// Store a notice for the next rendered page.
pub fn flash(session: &Session, message: impl Into<String>, kind: &str) {
    let notice = FlashMessage {
        message: message.into(),
        kind: kind.to_string(),
    };

    if let Err(err) = session.insert(FLASH_KEY, notice) {
        log::warn!("Failed to store flash notice: {}", err);
    }
}

/// Consume the pending notice, clearing it from the session.
pub fn take_flash(session: &Session) -> Option<FlashMessage> {
    session
        .remove_as::<FlashMessage>(FLASH_KEY)
        .and_then(Result::ok)
}
