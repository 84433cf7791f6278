use serde::ser::SerializeStruct;
use serde::{ser, Serialize};

/// Slack's block API is its most modern, and allows us to mix rich formatting
/// with plaintext headings. This is our limited subset thereof.
///
/// <https://api.slack.com/reference/block-kit/blocks>
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Large plaintext title. Emoji shortcodes are expanded.
    Header(String),
    /// Small, muted "mrkdwn" line.
    Context(String),
    Divider,
    Section(Section),
}

/// A section holds some "mrkdwn" text, a two-column grid of short fields, or
/// both, in which case the text is shown above the fields.
///
/// <https://api.slack.com/reference/surfaces/formatting#basics>
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub text: Option<String>,
    pub fields: Vec<String>,
}

impl Section {
    pub fn text<T: Into<String>>(text: T) -> Self {
        Section {
            text: Some(text.into()),
            fields: Vec::new(),
        }
    }

    pub fn with_fields<T: Into<String>>(text: T, fields: Vec<String>) -> Self {
        Section {
            text: Some(text.into()),
            fields,
        }
    }
}

/// The discriminant of a [Block], for checking the shape of a report without
/// caring about its content.
#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Header,
    Context,
    Divider,
    Section,
}

#[cfg(test)]
impl Block {
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Header(_) => BlockKind::Header,
            Block::Context(_) => BlockKind::Context,
            Block::Divider => BlockKind::Divider,
            Block::Section(_) => BlockKind::Section,
        }
    }
}

// Slack's text objects share one shape; `emoji` is only valid on plaintext.
#[derive(Serialize)]
struct RawText<'a> {
    #[serde(rename = "type")]
    typ: &'static str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    emoji: Option<bool>,
}

impl<'a> RawText<'a> {
    fn plaintext(text: &'a str) -> Self {
        RawText {
            typ: "plain_text",
            text,
            emoji: Some(true),
        }
    }

    fn mrkdwn(text: &'a str) -> Self {
        RawText {
            typ: "mrkdwn",
            text,
            emoji: None,
        }
    }
}

impl ser::Serialize for Block {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        let mut state = serializer.serialize_struct("Block", 3)?;

        match self {
            Block::Header(x) => {
                state.serialize_field("type", "header")?;
                state.serialize_field("text", &RawText::plaintext(x))?;
            }

            Block::Context(x) => {
                state.serialize_field("type", "context")?;
                state.serialize_field("elements", &[RawText::mrkdwn(x)])?;
            }

            Block::Divider => {
                state.serialize_field("type", "divider")?;
            }

            Block::Section(x) => {
                state.serialize_field("type", "section")?;

                if let Some(text) = &x.text {
                    state.serialize_field("text", &RawText::mrkdwn(text))?;
                }

                if !x.fields.is_empty() {
                    let fields: Vec<RawText> =
                        x.fields.iter().map(|f| RawText::mrkdwn(f)).collect();
                    state.serialize_field("fields", &fields)?;
                }
            }
        };

        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize_header() {
        assert_eq!(
            serde_json::to_value(Block::Header("Report".into())).unwrap(),
            json!({
                "type": "header",
                "text": { "type": "plain_text", "text": "Report", "emoji": true }
            })
        );
    }

    #[test]
    fn test_serialize_context_and_divider() {
        assert_eq!(
            serde_json::to_value(Block::Context("_footer_".into())).unwrap(),
            json!({
                "type": "context",
                "elements": [{ "type": "mrkdwn", "text": "_footer_" }]
            })
        );

        assert_eq!(
            serde_json::to_value(Block::Divider).unwrap(),
            json!({ "type": "divider" })
        );
    }

    #[test]
    fn test_serialize_section() {
        let text_only = Block::Section(Section::text("*title*"));
        assert_eq!(
            serde_json::to_value(text_only).unwrap(),
            json!({
                "type": "section",
                "text": { "type": "mrkdwn", "text": "*title*" }
            })
        );

        let both = Block::Section(Section::with_fields("*title*", vec!["*a*\n1".into()]));
        assert_eq!(
            serde_json::to_value(both).unwrap(),
            json!({
                "type": "section",
                "text": { "type": "mrkdwn", "text": "*title*" },
                "fields": [{ "type": "mrkdwn", "text": "*a*\n1" }]
            })
        );

        let fields_only = Block::Section(Section {
            text: None,
            fields: vec!["x".into()],
        });
        assert_eq!(
            serde_json::to_value(fields_only).unwrap(),
            json!({
                "type": "section",
                "fields": [{ "type": "mrkdwn", "text": "x" }]
            })
        );
    }
}
