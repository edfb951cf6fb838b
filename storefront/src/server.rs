//! Server-side rendering for Spin/WASI.

use anyhow::anyhow;
use leptos::{config::get_configuration, task::Executor as LeptosExecutor};
use leptos_wasi::prelude::{IncomingRequest, ResponseOutparam, WasiExecutor};
use wasi::exports::http::incoming_handler::Guest;
use wasi::http::proxy::export;

use crate::app::{shell, App};
use crate::telemetry;

struct StorefrontServer;

impl Guest for StorefrontServer {
    fn handle(request: IncomingRequest, response_out: ResponseOutparam) {
        telemetry::init();

        let executor = WasiExecutor::new(leptos_wasi::executor::Mode::Stalled);
        if let Err(e) = LeptosExecutor::init_local_custom_executor(executor.clone()) {
            tracing::error!("executor init error: {e:?}");
            return;
        }
        executor.run_until(async {
            if let Err(e) = handle_request(request, response_out).await {
                tracing::error!(error = %e, "request failed");
            }
        })
    }
}

async fn handle_request(
    request: IncomingRequest,
    response_out: ResponseOutparam,
) -> anyhow::Result<()> {
    use leptos_wasi::prelude::Handler;

    let conf = get_configuration(None).map_err(|e| anyhow!("leptos configuration: {e:?}"))?;
    let leptos_options = conf.leptos_options;

    // Both pages are fully client-side after hydration; no server functions.
    Handler::build(request, response_out)
        .map_err(|e| anyhow!("handler build: {e:?}"))?
        .generate_routes(App)
        .handle_with_context(move || shell(leptos_options.clone()), || {})
        .await
        .map_err(|e| anyhow!("handler: {e:?}"))?;

    Ok(())
}

export!(StorefrontServer with_types_in wasi);
