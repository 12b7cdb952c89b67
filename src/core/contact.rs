//! Contact deep links and form hand-off
//!
//! Pure, total functions that build `https://wa.me/...` and `mailto:` links
//! from user text. An empty string is the "no destination" sentinel: callers
//! disable the matching control instead of navigating.

use std::borrow::Cow;
use std::str::FromStr;

/// Host of the messaging deep link
pub const MESSAGING_HOST: &str = "wa.me";

/// Keep only ASCII digits
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Percent-encode a URI component.
///
/// Everything except unreserved characters (`A-Z a-z 0-9 - _ . ~`) is escaped,
/// spaces become `%20` and newlines `%0A`.
pub fn encode_component(text: &str) -> Cow<'_, str> {
    urlencoding::encode(text)
}

/// `https://wa.me/<digits>?text=<encoded>`, or `""` when `raw_number` has no digits
pub fn build_messaging_link(raw_number: &str, message: &str) -> String {
    let digits = digits_only(raw_number);
    if digits.is_empty() {
        return String::new();
    }
    format!(
        "https://{MESSAGING_HOST}/{digits}?text={}",
        encode_component(message)
    )
}

/// `mailto:<address>?subject=<encoded>&body=<encoded>`, or `""` when `address` is blank
pub fn build_mail_link(address: &str, subject: &str, body: &str) -> String {
    let address = address.trim();
    if address.is_empty() {
        return String::new();
    }
    format!(
        "mailto:{address}?subject={}&body={}",
        encode_component(subject),
        encode_component(body)
    )
}

/// Hand-off channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Channel {
    #[display("email")]
    Email,
    #[display("whatsapp")]
    Messaging,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChannelParseError {
    #[error("unknown contact channel `{0}` (expected `email` or `whatsapp`)")]
    UnknownChannel(String),

    #[error("contact channel `{0}` listed more than once")]
    Duplicate(Channel),

    #[error("contact channel precedence is empty")]
    Empty,
}

impl FromStr for Channel {
    type Err = ChannelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" | "mail" => Ok(Channel::Email),
            "whatsapp" | "messaging" => Ok(Channel::Messaging),
            other => Err(ChannelParseError::UnknownChannel(other.to_string())),
        }
    }
}

/// Order in which channels are tried on form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelPrecedence(Vec<Channel>);

impl ChannelPrecedence {
    pub fn new(channels: Vec<Channel>) -> Result<Self, ChannelParseError> {
        if channels.is_empty() {
            return Err(ChannelParseError::Empty);
        }
        for (i, channel) in channels.iter().enumerate() {
            if channels[..i].contains(channel) {
                return Err(ChannelParseError::Duplicate(*channel));
            }
        }
        Ok(Self(channels))
    }

    pub fn channels(&self) -> &[Channel] {
        &self.0
    }
}

impl Default for ChannelPrecedence {
    /// Email first, then messaging
    fn default() -> Self {
        Self(vec![Channel::Email, Channel::Messaging])
    }
}

impl FromStr for ChannelPrecedence {
    type Err = ChannelParseError;

    /// Comma-separated list, e.g. `"whatsapp,email"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let channels = s
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(Channel::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(channels)
    }
}

/// Configured destinations; either may be empty to disable its channel
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactDestinations {
    pub messaging_number: String,
    pub email: String,
}

impl ContactDestinations {
    pub fn new(messaging_number: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            messaging_number: messaging_number.into(),
            email: email.into(),
        }
    }

    pub fn has_messaging(&self) -> bool {
        !digits_only(&self.messaging_number).is_empty()
    }

    pub fn has_email(&self) -> bool {
        !self.email.trim().is_empty()
    }

    pub fn has_channel(&self, channel: Channel) -> bool {
        match channel {
            Channel::Email => self.has_email(),
            Channel::Messaging => self.has_messaging(),
        }
    }

    pub fn messaging_link(&self, message: &str) -> String {
        build_messaging_link(&self.messaging_number, message)
    }

    pub fn mail_link(&self, subject: &str, body: &str) -> String {
        build_mail_link(&self.email, subject, body)
    }
}

/// How the browser should open a deep link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handoff {
    /// Replace the current page (mail clients intercept `mailto:`)
    Navigate(String),
    /// Open a new browsing context with `noopener,noreferrer`
    OpenNewContext(String),
}

impl Handoff {
    pub fn url(&self) -> &str {
        match self {
            Handoff::Navigate(url) | Handoff::OpenNewContext(url) => url,
        }
    }

    fn from_link(channel: Channel, link: String) -> Option<Self> {
        if link.is_empty() {
            return None;
        }
        Some(match channel {
            Channel::Email => Handoff::Navigate(link),
            Channel::Messaging => Handoff::OpenNewContext(link),
        })
    }
}

const MISSING_FIELD: &str = "(não informado)";
const MISSING_MESSAGE: &str = "(não informada)";

/// Greeting prepended to the form body when submitted over messaging
pub const SUBMIT_MESSAGING_PREFIX: &str = "Olá! Segue minha mensagem:\n\n";
/// Greeting used by the dedicated "open in WhatsApp" form button
pub const DIRECT_MESSAGING_PREFIX: &str = "Olá! Segue meu pedido:\n\n";

/// Form fields as entered by the visitor
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactPayload {
    pub name: String,
    pub contact: String,
    pub message: String,
}

impl ContactPayload {
    pub fn new(
        name: impl Into<String>,
        contact: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
            message: message.into(),
        }
    }

    pub fn subject(&self) -> String {
        let name = if self.name.is_empty() {
            "Contato"
        } else {
            &self.name
        };
        format!("Projeto RVLand — {name}")
    }

    /// Fields verbatim, in entry order
    pub fn body(&self) -> String {
        format_body(&self.name, &self.contact, &self.message)
    }

    /// Like [`body`](Self::body), with placeholders for empty fields
    pub fn body_with_placeholders(&self) -> String {
        fn or<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
            if value.is_empty() { placeholder } else { value }
        }
        format_body(
            or(&self.name, MISSING_FIELD),
            or(&self.contact, MISSING_FIELD),
            or(&self.message, MISSING_MESSAGE),
        )
    }
}

fn format_body(name: &str, contact: &str, message: &str) -> String {
    format!("Nome: {name}\nContato: {contact}\n\nMensagem:\n{message}")
}

/// Resolve an explicit form submission.
///
/// Channels are tried in `precedence` order; the first one with a destination
/// wins. `None` means nothing is configured and the submission is a no-op.
pub fn resolve_submission(
    payload: &ContactPayload,
    destinations: &ContactDestinations,
    precedence: &ChannelPrecedence,
) -> Option<Handoff> {
    let body = payload.body();
    precedence.channels().iter().find_map(|&channel| {
        let link = match channel {
            Channel::Email => destinations.mail_link(&payload.subject(), &body),
            Channel::Messaging => {
                destinations.messaging_link(&format!("{SUBMIT_MESSAGING_PREFIX}{body}"))
            }
        };
        Handoff::from_link(channel, link)
    })
}

/// Resolve the dedicated messaging button, which bypasses channel precedence
pub fn resolve_direct_messaging(
    payload: &ContactPayload,
    destinations: &ContactDestinations,
) -> Option<Handoff> {
    let text = format!("{DIRECT_MESSAGING_PREFIX}{}", payload.body_with_placeholders());
    Handoff::from_link(Channel::Messaging, destinations.messaging_link(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("+55 (41) 8489-1365"), "554184891365");
        assert_eq!(digits_only("abc"), "");
        assert_eq!(digits_only("٣٤"), "");
    }

    #[test]
    fn test_messaging_link_without_digits_is_empty() {
        assert_eq!(build_messaging_link("", "hello"), "");
        assert_eq!(build_messaging_link("call me", "hello"), "");
    }

    #[test]
    fn test_messaging_link_strips_formatting() {
        assert_eq!(
            build_messaging_link("+55 (41) 8489-1365", "hi"),
            "https://wa.me/554184891365?text=hi"
        );
    }

    #[test]
    fn test_messaging_link_encodes_reserved_characters() {
        let link = build_messaging_link("5541", "a b\nc&d?e#f=g/h+i");
        assert_eq!(
            link,
            "https://wa.me/5541?text=a%20b%0Ac%26d%3Fe%23f%3Dg%2Fh%2Bi"
        );
    }

    #[test]
    fn test_messaging_link_encodes_utf8() {
        assert_eq!(
            build_messaging_link("1", "Olá"),
            "https://wa.me/1?text=Ol%C3%A1"
        );
    }

    #[test]
    fn test_mail_link_without_address_is_empty() {
        assert_eq!(build_mail_link("", "s", "b"), "");
        assert_eq!(build_mail_link("   ", "s", "b"), "");
    }

    #[test]
    fn test_mail_link_encoding() {
        assert_eq!(
            build_mail_link("a@b.com", "Hello World", "line1\nline2"),
            "mailto:a@b.com?subject=Hello%20World&body=line1%0Aline2"
        );
    }

    #[test]
    fn test_channel_parsing() {
        assert_eq!("email".parse::<Channel>(), Ok(Channel::Email));
        assert_eq!(" WhatsApp ".parse::<Channel>(), Ok(Channel::Messaging));
        assert_eq!(
            "sms".parse::<Channel>(),
            Err(ChannelParseError::UnknownChannel("sms".to_string()))
        );
        assert_eq!(Channel::Messaging.to_string(), "whatsapp");
    }

    #[test]
    fn test_precedence_parsing() {
        let p: ChannelPrecedence = "whatsapp,email".parse().unwrap();
        assert_eq!(p.channels(), &[Channel::Messaging, Channel::Email]);

        let p: ChannelPrecedence = "email".parse().unwrap();
        assert_eq!(p.channels(), &[Channel::Email]);

        assert_eq!(
            "email,mail".parse::<ChannelPrecedence>(),
            Err(ChannelParseError::Duplicate(Channel::Email))
        );
        assert_eq!(
            " , ".parse::<ChannelPrecedence>(),
            Err(ChannelParseError::Empty)
        );
        assert_eq!(
            ChannelPrecedence::default().channels(),
            &[Channel::Email, Channel::Messaging]
        );
    }

    #[test]
    fn test_subject_and_body() {
        let payload = ContactPayload::new("Ana", "ana@x.com", "Um app\ncom login");
        assert_eq!(payload.subject(), "Projeto RVLand — Ana");
        assert_eq!(
            payload.body(),
            "Nome: Ana\nContato: ana@x.com\n\nMensagem:\nUm app\ncom login"
        );
        assert_eq!(ContactPayload::default().subject(), "Projeto RVLand — Contato");
    }

    #[test]
    fn test_body_with_placeholders() {
        let payload = ContactPayload::new("", "", "");
        assert_eq!(
            payload.body_with_placeholders(),
            "Nome: (não informado)\nContato: (não informado)\n\nMensagem:\n(não informada)"
        );
    }

    #[test]
    fn test_submission_prefers_email_by_default() {
        let destinations = ContactDestinations::new("554184891365", "a@b.com");
        let payload = ContactPayload::new("Ana", "41 9999", "Oi");
        let handoff =
            resolve_submission(&payload, &destinations, &ChannelPrecedence::default()).unwrap();

        assert_eq!(
            handoff,
            Handoff::Navigate(build_mail_link(
                "a@b.com",
                &payload.subject(),
                &payload.body()
            ))
        );
    }

    #[test]
    fn test_submission_falls_back_to_messaging() {
        let destinations = ContactDestinations::new("554184891365", "");
        let payload = ContactPayload::new("Ana", "", "Oi");
        let handoff =
            resolve_submission(&payload, &destinations, &ChannelPrecedence::default()).unwrap();

        match handoff {
            Handoff::OpenNewContext(url) => {
                assert!(url.starts_with("https://wa.me/554184891365?text=Ol%C3%A1%21"));
                assert!(url.contains("Nome%3A%20Ana"));
            }
            other => panic!("expected new context, got {other:?}"),
        }
    }

    #[test]
    fn test_submission_honours_configured_precedence() {
        let destinations = ContactDestinations::new("5541", "a@b.com");
        let precedence: ChannelPrecedence = "whatsapp,email".parse().unwrap();
        let handoff =
            resolve_submission(&ContactPayload::default(), &destinations, &precedence).unwrap();
        assert!(matches!(handoff, Handoff::OpenNewContext(_)));
    }

    #[test]
    fn test_submission_without_destinations_is_noop() {
        let destinations = ContactDestinations::default();
        assert!(!destinations.has_email());
        assert!(!destinations.has_messaging());
        assert_eq!(
            resolve_submission(
                &ContactPayload::new("a", "b", "c"),
                &destinations,
                &ChannelPrecedence::default()
            ),
            None
        );
        assert_eq!(
            resolve_direct_messaging(&ContactPayload::default(), &destinations),
            None
        );
    }

    #[test]
    fn test_has_channel_matches_submission() {
        let precedence: ChannelPrecedence = "email".parse().unwrap();
        for destinations in [
            ContactDestinations::new("5541", ""),
            ContactDestinations::new("", "a@b.com"),
            ContactDestinations::new("5541", "a@b.com"),
        ] {
            let reachable = precedence
                .channels()
                .iter()
                .any(|&channel| destinations.has_channel(channel));
            let handoff =
                resolve_submission(&ContactPayload::default(), &destinations, &precedence);
            assert_eq!(reachable, handoff.is_some(), "{destinations:?}");
        }
    }

    #[test]
    fn test_direct_messaging_uses_placeholders() {
        let destinations = ContactDestinations::new("55 41", "a@b.com");
        let handoff = resolve_direct_messaging(&ContactPayload::default(), &destinations).unwrap();
        let expected = build_messaging_link(
            "5541",
            "Olá! Segue meu pedido:\n\nNome: (não informado)\nContato: (não informado)\n\nMensagem:\n(não informada)",
        );
        assert_eq!(handoff, Handoff::OpenNewContext(expected));
        assert!(handoff.url().starts_with("https://wa.me/5541?text="));
    }
}
