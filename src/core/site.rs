//! Site-wide contact configuration.
//!
//! Destinations are baked in at build time with `option_env!`, so the server
//! render and the hydrated WASM bundle always agree on the links they emit.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `RVLAND_WHATSAPP` | `554184891365` |
//! | `RVLAND_EMAIL` | `contato.rvlandd@gmail.com` |
//! | `RVLAND_CONTACT_PRECEDENCE` | `email,whatsapp` |
//!
//! Set a destination to the empty string to disable its channel.

use super::contact::{
    ChannelParseError, ChannelPrecedence, ContactDestinations, build_mail_link,
    build_messaging_link,
};

pub const SITE_NAME: &str = "RVLand Devs";

pub const DEFAULT_WHATSAPP: &str = "554184891365";
pub const DEFAULT_EMAIL: &str = "contato.rvlandd@gmail.com";
pub const DEFAULT_PRECEDENCE: &str = "email,whatsapp";

/// Greeting for the hero and "direct channels" WhatsApp buttons
pub const CTA_MESSAGING_TEXT: &str =
    "Olá! Quero conversar sobre um software sob medida com a RVLand Devs.";
pub const CTA_MAIL_SUBJECT: &str = "Projeto de software sob medida";
pub const CTA_MAIL_BODY: &str =
    "Olá! Quero conversar sobre um projeto.\n\nResumo:\n- \n\nObjetivo:\n- \n\nPrazo desejado:\n- \n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub destinations: ContactDestinations,
    pub precedence: ChannelPrecedence,
}

impl SiteConfig {
    pub fn from_values(
        whatsapp: &str,
        email: &str,
        precedence: &str,
    ) -> Result<Self, ChannelParseError> {
        Ok(Self {
            precedence: precedence.parse()?,
            ..Self::with_default_precedence(whatsapp, email)
        })
    }

    /// Configuration captured from the build environment
    pub fn from_build_env() -> Result<Self, ChannelParseError> {
        Self::from_values(
            option_env!("RVLAND_WHATSAPP").unwrap_or(DEFAULT_WHATSAPP),
            option_env!("RVLAND_EMAIL").unwrap_or(DEFAULT_EMAIL),
            option_env!("RVLAND_CONTACT_PRECEDENCE").unwrap_or(DEFAULT_PRECEDENCE),
        )
    }

    /// Like [`from_build_env`](Self::from_build_env), falling back to the default
    /// precedence when the configured one does not parse
    pub fn load() -> Self {
        match Self::from_build_env() {
            Ok(config) => config,
            Err(err) => {
                leptos::logging::warn!("invalid contact precedence, using default: {err}");
                Self::with_default_precedence(
                    option_env!("RVLAND_WHATSAPP").unwrap_or(DEFAULT_WHATSAPP),
                    option_env!("RVLAND_EMAIL").unwrap_or(DEFAULT_EMAIL),
                )
            }
        }
    }

    /// Destinations normalised as in [`from_values`](Self::from_values), with
    /// the default channel order
    pub fn with_default_precedence(whatsapp: &str, email: &str) -> Self {
        Self {
            destinations: ContactDestinations::new(whatsapp.trim(), email.trim()),
            precedence: ChannelPrecedence::default(),
        }
    }

    /// Whether a form submission reaches any channel in precedence order
    pub fn accepts_submissions(&self) -> bool {
        self.precedence
            .channels()
            .iter()
            .any(|&channel| self.destinations.has_channel(channel))
    }

    /// Pre-built WhatsApp link for call-to-action buttons (`""` when disabled)
    pub fn cta_messaging_link(&self) -> String {
        build_messaging_link(&self.destinations.messaging_number, CTA_MESSAGING_TEXT)
    }

    /// Pre-built mail link for call-to-action buttons (`""` when disabled)
    pub fn cta_mail_link(&self) -> String {
        build_mail_link(&self.destinations.email, CTA_MAIL_SUBJECT, CTA_MAIL_BODY)
    }

    /// Published email, `None` when the channel is disabled
    pub fn public_email(&self) -> Option<&str> {
        self.destinations
            .has_email()
            .then_some(self.destinations.email.as_str())
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            destinations: ContactDestinations::new(DEFAULT_WHATSAPP, DEFAULT_EMAIL),
            precedence: ChannelPrecedence::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::contact::{Channel, ContactPayload, resolve_submission};

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert!(config.destinations.has_email());
        assert!(config.destinations.has_messaging());
        assert_eq!(
            config.precedence.channels(),
            &[Channel::Email, Channel::Messaging]
        );
        assert_eq!(config.public_email(), Some(DEFAULT_EMAIL));
    }

    #[test]
    fn test_from_values_trims_and_parses() {
        let config = SiteConfig::from_values(" 5541 ", "  ", "whatsapp").unwrap();
        assert_eq!(config.destinations.messaging_number, "5541");
        assert!(!config.destinations.has_email());
        assert_eq!(config.public_email(), None);
        assert_eq!(config.precedence.channels(), &[Channel::Messaging]);
    }

    #[test]
    fn test_from_values_rejects_bad_precedence() {
        assert!(matches!(
            SiteConfig::from_values("1", "a@b.com", "fax"),
            Err(ChannelParseError::UnknownChannel(_))
        ));
    }

    #[test]
    fn test_cta_links() {
        let config = SiteConfig::default();
        assert!(
            config
                .cta_messaging_link()
                .starts_with("https://wa.me/554184891365?text=Ol%C3%A1%21%20Quero")
        );
        let mail = config.cta_mail_link();
        assert!(mail.starts_with(
            "mailto:contato.rvlandd@gmail.com?subject=Projeto%20de%20software%20sob%20medida&body="
        ));
        assert!(mail.contains("Resumo%3A%0A-%20%0A"));
    }

    #[test]
    fn test_disabled_channels_have_empty_cta_links() {
        let config = SiteConfig::from_values("", "", DEFAULT_PRECEDENCE).unwrap();
        assert_eq!(config.cta_messaging_link(), "");
        assert_eq!(config.cta_mail_link(), "");
    }

    #[test]
    fn test_submissions_follow_precedence() {
        assert!(SiteConfig::default().accepts_submissions());

        // messaging is configured but not listed, so the form has nowhere to go
        let config = SiteConfig::from_values("5541", "", "email").unwrap();
        assert!(!config.accepts_submissions());
        assert_eq!(
            resolve_submission(
                &ContactPayload::new("Ana", "", "Oi"),
                &config.destinations,
                &config.precedence
            ),
            None
        );

        let config = SiteConfig::from_values("5541", "", "email,whatsapp").unwrap();
        assert!(config.accepts_submissions());
    }

    #[test]
    fn test_default_precedence_fallback_trims_destinations() {
        let config = SiteConfig::with_default_precedence(" 5541 ", "  a@b.co \n");
        assert_eq!(config.destinations.messaging_number, "5541");
        assert_eq!(config.destinations.email, "a@b.co");
        assert_eq!(config.precedence, ChannelPrecedence::default());
        assert_eq!(
            config,
            SiteConfig::from_values(" 5541 ", "  a@b.co \n", DEFAULT_PRECEDENCE).unwrap()
        );
        assert!(config.cta_mail_link().starts_with("mailto:a@b.co?"));
    }

    #[test]
    fn test_build_env_defaults_load() {
        // Build-time values may override the defaults; loading must still succeed
        let config = SiteConfig::load();
        assert!(!config.precedence.channels().is_empty());
    }
}
