use crate::{
    app_state::AppState,
    configuration::Settings,
    repository::DealRepository,
    request_id::{request_span, MakeRequestUuid},
    routes::{deals, emails, health_check, stats},
};
use axum::Router;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

pub struct Application {
    listener: TcpListener,
    local_addr: SocketAddr,
    router: Router,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, std::io::Error> {
        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address).await?;
        let local_addr = listener.local_addr()?;

        let app_state = AppState {
            repository: Arc::new(DealRepository::new(
                configuration.storage.document_store(),
            )),
            admin: Arc::new(configuration.admin),
        };

        Ok(Self {
            listener,
            local_addr,
            router: app(app_state),
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        tracing::info!("Listening on {}", self.local_addr);
        axum::serve(self.listener, self.router).await
    }
}

pub fn app(app_state: AppState) -> Router {
    Router::new()
        .merge(health_check::router())
        .merge(deals::router())
        .merge(emails::router())
        .merge(stats::router())
        .with_state(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http().make_span_with(request_span))
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}
