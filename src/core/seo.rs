//! Page metadata and structured data

use serde::Serialize;

use super::contact::digits_only;
use super::site::SITE_NAME;

pub const PAGE_TITLE: &str = "RVLand Devs | Software sob medida, do zero";
pub const PAGE_DESCRIPTION: &str = "Apps, sites, plataformas e sistemas sob medida — do zero e no seu fluxo. Nada de software pronto adaptado.";
pub const THEME_COLOR: &str = "#05070B";
pub const ROBOTS: &str = "index, follow";
pub const LOCALE: &str = "pt_BR";

pub const KEYWORDS: &[&str] = &[
    "desenvolvimento de software",
    "software sob medida",
    "criar aplicativo",
    "criar site",
    "plataforma web",
    "sistemas personalizados",
    "next.js",
    "react",
    "rvland devs",
];

pub fn keywords() -> String {
    KEYWORDS.join(", ")
}

/// schema.org `Organization` document embedded as JSON-LD
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Organization {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Organization {
    pub fn new(url: Option<&str>, email: Option<&str>) -> Self {
        Self {
            context: "https://schema.org",
            kind: "Organization",
            name: SITE_NAME.to_string(),
            url: non_empty(url),
            description: PAGE_DESCRIPTION.to_string(),
            email: non_empty(email),
        }
    }

    /// Serialise for a `<script type="application/ld+json">` body.
    ///
    /// `<` is escaped so user-configured values cannot close the script element.
    pub fn to_json_ld(&self) -> Result<String, serde_json::Error> {
        Ok(serde_json::to_string(self)?.replace('<', "\\u003c"))
    }
}

/// Analytics pixel bootstrap for a numeric pixel id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaPixel {
    id: String,
}

impl MetaPixel {
    /// `None` unless `id` is made of digits only
    pub fn new(id: &str) -> Option<Self> {
        let id = id.trim();
        (!id.is_empty() && digits_only(id) == id).then(|| Self { id: id.to_string() })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Inline loader that queues `init` and a `PageView`
    pub fn script(&self) -> String {
        format!(
            "!function(f,b,e,v,n,t,s){{if(f.fbq)return;n=f.fbq=function(){{n.callMethod?\
n.callMethod.apply(n,arguments):n.queue.push(arguments)}};\
if(!f._fbq)f._fbq=n;n.push=n;n.loaded=!0;n.version='2.0';\
n.queue=[];t=b.createElement(e);t.async=!0;\
t.src=v;s=b.getElementsByTagName(e)[0];\
s.parentNode.insertBefore(t,s)}}(window,document,'script',\
'https://connect.facebook.net/en_US/fbevents.js');\
fbq('init','{id}');fbq('track','PageView');",
            id = self.id
        )
    }

    /// Image beacon for visitors without scripts
    pub fn noscript_src(&self) -> String {
        format!(
            "https://www.facebook.com/tr?id={}&ev=PageView&noscript=1",
            self.id
        )
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_joined() {
        let all = keywords();
        assert!(all.starts_with("desenvolvimento de software, software sob medida"));
        assert!(all.ends_with("rvland devs"));
    }

    #[test]
    fn test_organization_omits_absent_fields() {
        let json = Organization::new(None, Some("")).to_json_ld().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "Organization");
        assert_eq!(value["name"], "RVLand Devs");
        assert!(value.get("url").is_none());
        assert!(value.get("email").is_none());
    }

    #[test]
    fn test_organization_includes_configured_fields() {
        let org = Organization::new(Some("https://rvland.dev"), Some("a@b.com"));
        let value: serde_json::Value = serde_json::from_str(&org.to_json_ld().unwrap()).unwrap();
        assert_eq!(value["url"], "https://rvland.dev");
        assert_eq!(value["email"], "a@b.com");
        assert_eq!(value["description"], PAGE_DESCRIPTION);
    }

    #[test]
    fn test_pixel_requires_numeric_id() {
        assert!(MetaPixel::new("").is_none());
        assert!(MetaPixel::new("12ab").is_none());
        assert!(MetaPixel::new("1');alert(1);//").is_none());
        assert_eq!(MetaPixel::new(" 1234 ").map(|p| p.id().to_string()), Some("1234".into()));
    }

    #[test]
    fn test_pixel_snippets_embed_id() {
        let pixel = MetaPixel::new("987654321").unwrap();
        let script = pixel.script();
        assert!(script.contains("fbq('init','987654321');fbq('track','PageView');"));
        assert!(script.starts_with("!function(f,b,e,v,n,t,s){if(f.fbq)return;"));
        assert_eq!(
            pixel.noscript_src(),
            "https://www.facebook.com/tr?id=987654321&ev=PageView&noscript=1"
        );
    }

    #[test]
    fn test_json_ld_escapes_script_close() {
        let org = Organization::new(Some("https://x.dev/</script>"), None);
        let json = org.to_json_ld().unwrap();
        assert!(!json.contains("</script>"));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["url"], "https://x.dev/</script>");
    }
}
