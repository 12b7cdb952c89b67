//! Common reusable UI components shared by the page sections

pub mod badge;
pub mod button;
pub mod card;
pub mod section_header;

pub use badge::{Badge, BadgeVariant};
pub use button::{AnchorTarget, Button, ButtonSize, ButtonVariant, LinkButton};
pub use card::{Card, CardContent, CardDescription, CardHeader, CardTitle};
pub use section_header::SectionHeader;
