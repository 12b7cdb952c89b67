//! Axum server rendering the site

use std::net::SocketAddr;

use axum::Router;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::{CompressionLayer, CompressionLevel};
use tower_http::services::ServeDir;

use crate::app::{App, HeadExtras, shell};
use crate::core::config::Config;
use crate::core::seo::{MetaPixel, Organization};
use crate::core::site::SiteConfig;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to load leptos configuration: {0}")]
    Configuration(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(std::io::Error),
}

/// Head additions computed once at start-up
pub fn head_extras(config: &Config, site: &SiteConfig) -> HeadExtras {
    let pixel = config.meta_pixel_id.as_deref().and_then(|id| {
        let pixel = MetaPixel::new(id);
        if pixel.is_none() {
            tracing::warn!("META_PIXEL_ID is not numeric, analytics pixel disabled");
        }
        pixel
    });

    let json_ld = match Organization::new(config.site_url.as_deref(), site.public_email()).to_json_ld() {
        Ok(json) => Some(json),
        Err(err) => {
            tracing::warn!("failed to serialise structured data: {err}");
            None
        }
    };

    HeadExtras {
        canonical_url: config.canonical_url(),
        json_ld,
        pixel,
    }
}

/// Build the router and serve until the process is stopped
pub async fn run(config: Config) -> Result<(), ServerError> {
    let site = SiteConfig::load();

    // Log config status (without revealing values)
    tracing::info!(
        meta_pixel = config.has_meta_pixel(),
        site_url = config.has_site_url(),
        whatsapp = site.destinations.has_messaging(),
        email = site.destinations.has_email(),
        precedence = ?site.precedence.channels(),
        "config loaded"
    );

    let extras = head_extras(&config, &site);

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = get_configuration(None).map_err(|err| ServerError::Configuration(err.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let routes = generate_route_list(App);

    // Serves .br and .gz siblings when the client accepts them
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    let provide_extras = {
        let extras = extras.clone();
        move || provide_context(extras.clone())
    };

    let app = Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes_with_context(&leptos_options, routes, provide_extras.clone(), {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler_with_context(
            provide_extras,
            shell,
        ))
        .with_state(leptos_options)
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    tracing::info!("listening on http://{}", &addr);

    axum::serve(listener, app.into_make_service())
        .await
        .map_err(ServerError::Serve)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_extras_from_full_config() {
        let config = Config {
            meta_pixel_id: Some("123".into()),
            site_url: Some("https://rvland.dev".into()),
        };
        let extras = head_extras(&config, &SiteConfig::default());

        assert_eq!(extras.canonical_url.as_deref(), Some("https://rvland.dev/"));
        assert_eq!(extras.pixel.as_ref().map(MetaPixel::id), Some("123"));
        let json = extras.json_ld.unwrap();
        assert!(json.contains(r#""url":"https://rvland.dev""#));
        assert!(json.contains(r#""email":"contato.rvlandd@gmail.com""#));
    }

    #[test]
    fn test_head_extras_drop_invalid_pixel() {
        let config = Config {
            meta_pixel_id: Some("abc".into()),
            site_url: None,
        };
        let site = SiteConfig::from_values("", "", "email").unwrap();
        let extras = head_extras(&config, &site);

        assert!(extras.pixel.is_none());
        assert!(extras.canonical_url.is_none());
        let json = extras.json_ld.unwrap();
        assert!(!json.contains("\"url\""));
        assert!(!json.contains("\"email\""));
    }
}
