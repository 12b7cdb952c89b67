//! Target-independent interaction logic and site configuration

#[cfg(feature = "ssr")]
pub mod config;
pub mod contact;
pub mod geometry;
pub mod lifecycle;
pub mod pointer;
pub mod reveal;
pub mod seo;
pub mod site;
#[cfg(test)]
mod tests;

pub use contact::{
    Channel, ChannelParseError, ChannelPrecedence, ContactDestinations, ContactPayload, Handoff,
    build_mail_link, build_messaging_link,
};
pub use geometry::{Fraction, GeometryProvider, Rect};
pub use lifecycle::{Subscription, Subscriptions};
pub use pointer::{PointerSample, PointerState, PointerTracker, TrackerVariant};
pub use reveal::{RevealController, RevealState, Visibility};
pub use site::SiteConfig;
