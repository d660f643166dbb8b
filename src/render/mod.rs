mod format;
mod pages;
mod table;

pub use format::{
    format_millions, format_millions_decimal, format_percent, format_price, format_significant,
};
pub use pages::Page;
pub use table::{display_tickers, tickers_table_html, TickerRow};

use crate::error::{AppError, Result};
use crate::models::Message;

const TEXT_WIDTH: usize = 100;

/// Plain-text alternative of an HTML body, tables laid out as text.
pub fn html_to_text(html: &str) -> Result<String> {
    html2text::config::plain()
        .string_from_read(html.as_bytes(), TEXT_WIDTH)
        .map_err(|e| AppError::RenderError(e.to_string()))
}

/// Notice whose HTML and text bodies are the same string.
pub fn simple_message(text: impl Into<String>) -> Message {
    let text = text.into();
    Message::html_notice(text.clone(), text)
}
