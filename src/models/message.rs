use serde::{Deserialize, Serialize};

pub const MSGTYPE_NOTICE: &str = "m.notice";
pub const FORMAT_HTML: &str = "org.matrix.custom.html";

/// Content of an `m.room.message` event sent by the bot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub msgtype: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_body: Option<String>,
}

impl Message {
    pub fn notice(text: impl Into<String>) -> Self {
        Self {
            msgtype: MSGTYPE_NOTICE.to_string(),
            body: text.into(),
            format: None,
            formatted_body: None,
        }
    }

    pub fn html_notice(html: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            msgtype: MSGTYPE_NOTICE.to_string(),
            body: text.into(),
            format: Some(FORMAT_HTML.to_string()),
            formatted_body: Some(html.into()),
        }
    }

    pub fn is_html(&self) -> bool {
        self.format.as_deref() == Some(FORMAT_HTML)
    }
}
