pub mod flash;

pub use flash::{FlashMessage, flash, take_flash};
