pub mod common;
pub mod contact_form;
#[cfg(not(feature = "ssr"))]
pub mod dom;
pub mod hero_glow;
pub mod icon;
pub mod magnetic;
pub mod pages;
pub mod pointer;
pub mod reveal;
pub mod site_context;
pub mod tilt_card;

pub use icon::{Glyph, Icon};
pub use reveal::{REVEAL_MARKER_CLASS, Reveal};
pub use site_context::{SiteContext, provide_site_context, use_site_context};
