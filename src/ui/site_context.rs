//! Site configuration context
//!
//! The build-time [`SiteConfig`] is loaded once at the root of the app and
//! shared by every section that renders a contact link.

use leptos::prelude::*;

use crate::core::contact::{ContactDestinations, ContactPayload, Handoff, resolve_direct_messaging, resolve_submission};
use crate::core::site::SiteConfig;

#[derive(Clone, Copy)]
pub struct SiteContext {
    config: StoredValue<SiteConfig>,
}

impl SiteContext {
    pub fn config(&self) -> SiteConfig {
        self.config.get_value()
    }

    pub fn destinations(&self) -> ContactDestinations {
        self.config.with_value(|c| c.destinations.clone())
    }

    pub fn cta_messaging_link(&self) -> String {
        self.config.with_value(SiteConfig::cta_messaging_link)
    }

    pub fn cta_mail_link(&self) -> String {
        self.config.with_value(SiteConfig::cta_mail_link)
    }

    pub fn public_email(&self) -> Option<String> {
        self.config.with_value(|c| c.public_email().map(str::to_owned))
    }

    pub fn has_messaging(&self) -> bool {
        self.config.with_value(|c| c.destinations.has_messaging())
    }

    /// Whether a form submission can reach anyone under the configured precedence
    pub fn accepts_submissions(&self) -> bool {
        self.config.with_value(SiteConfig::accepts_submissions)
    }

    /// Handoff for an explicit form submission
    pub fn submission(&self, payload: &ContactPayload) -> Option<Handoff> {
        self.config
            .with_value(|c| resolve_submission(payload, &c.destinations, &c.precedence))
    }

    /// Handoff for the form's dedicated WhatsApp button
    pub fn direct_messaging(&self, payload: &ContactPayload) -> Option<Handoff> {
        self.config
            .with_value(|c| resolve_direct_messaging(payload, &c.destinations))
    }
}

/// Provide the site context to the application
pub fn provide_site_context(config: SiteConfig) -> SiteContext {
    let ctx = SiteContext {
        config: StoredValue::new(config),
    };
    provide_context(ctx);
    ctx
}

/// Use site context from anywhere in the component tree.
///
/// Components rendered outside [`App`](crate::app::App) get the build-time
/// configuration.
pub fn use_site_context() -> SiteContext {
    use_context::<SiteContext>().unwrap_or_else(|| provide_site_context(SiteConfig::load()))
}
