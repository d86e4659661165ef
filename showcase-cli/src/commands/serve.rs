//! Static file server for the exported showcase
//!
//! - `showcase serve`            development instance (default port 5173)
//! - `showcase serve --preview`  production preview (default port 4173)
//!
//! Both bind to 0.0.0.0 by default so other hosts on the LAN can reach them.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use axum::Router;
use clap::Parser;
use showcase_core::export::{export_to, INDEX_PAGE};
use showcase_core::ShowcaseConfig;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Serve the production preview port instead of the dev port
    #[arg(long)]
    pub preview: bool,

    /// Directory to serve (default: build.out_dir from config)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

/// Which instance to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeMode {
    Dev,
    Preview,
}

/// Resolve bind address for a mode
pub fn bind_addr(config: &ShowcaseConfig, mode: ServeMode) -> SocketAddr {
    match mode {
        ServeMode::Dev => config.serve.dev_addr(),
        ServeMode::Preview => config.serve.preview_addr(),
    }
}

/// Router serving `root`, with `index.md` as the fallback page
pub fn router(root: &Path) -> Router {
    let index = ServeFile::new(root.join(INDEX_PAGE));
    Router::new()
        .fallback_service(ServeDir::new(root).fallback(index))
        .layer(TraceLayer::new_for_http())
}

/// Run the static server
pub async fn run_serve(args: ServeArgs, config: &ShowcaseConfig) -> Result<()> {
    let mode = if args.preview {
        ServeMode::Preview
    } else {
        ServeMode::Dev
    };
    let root = args.dir.unwrap_or_else(|| config.build.out_dir.clone());

    match mode {
        // Dev always serves fresh content
        ServeMode::Dev => {
            export_to(&root, config.build.json_indent)
                .with_context(|| format!("Failed to export showcase to {}", root.display()))?;
        }
        // Preview serves whatever was built
        ServeMode::Preview => {
            if !root.join(INDEX_PAGE).is_file() {
                bail!(
                    "No build found in {}\n\nRun: showcase export",
                    root.display()
                );
            }
        }
    }

    let addr = bind_addr(config, mode);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(?mode, %addr, root = %root.display(), "Serving showcase");
    println!("🚀 Serving {} on http://{}", root.display(), addr);

    axum::serve(listener, router(&root))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for Ctrl+C
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received Ctrl+C, starting shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tempfile::TempDir;
    use tower::ServiceExt;

    async fn get(root: &Path, uri: &str) -> (StatusCode, String) {
        let response = router(root)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn serves_exported_bundles() {
        let dir = TempDir::new().unwrap();
        export_to(dir.path(), 2).unwrap();

        let (status, body) = get(dir.path(), "/features.json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("\"id\": \"ai-chat\""), "{}", body);
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_index_page() {
        let dir = TempDir::new().unwrap();
        export_to(dir.path(), 2).unwrap();

        let (status, body) = get(dir.path(), "/pipelines/q3").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("# Magic Pipeline"));
    }

    #[test]
    fn default_ports_are_fixed_and_lan_visible() {
        let config = ShowcaseConfig::default();
        let dev = bind_addr(&config, ServeMode::Dev);
        let preview = bind_addr(&config, ServeMode::Preview);
        assert_eq!(dev.port(), 5173);
        assert_eq!(preview.port(), 4173);
        assert!(dev.ip().is_unspecified());
        assert!(preview.ip().is_unspecified());
    }
}
