#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::sync::Arc;

    use anyhow::Context;
    use axum::Router;
    use clap::Parser;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use repo_showcase::app::*;
    use repo_showcase::server::{AppState, GlobalAppState, ServerConfig};
    use tower_http::compression::CompressionLayer;

    dotenvy::dotenv().ok();
    let config = ServerConfig::parse();
    repo_showcase::logging::init_logging(config.log_json)?;

    let executor = config
        .build_executor()
        .context("failed to build GraphQL client")?;
    let state: GlobalAppState = Arc::new(AppState {
        executor: Arc::new(executor),
    });

    let conf = get_configuration(None).context("failed to read Leptos configuration")?;
    let addr = config.bind.unwrap_or(conf.leptos_options.site_addr);
    let leptos_options = conf.leptos_options;
    let shell_options = leptos_options.clone();
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let state = state.clone();
                move || provide_context(state.clone())
            },
            move || shell(shell_options.clone()),
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CompressionLayer::new())
        .with_state(leptos_options);

    tracing::info!(%addr, endpoint = %config.graphql_endpoint, "listening");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("server terminated")?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
