use std::sync::Arc;

use tonic::{Request, Response, Status};

use crate::proto::health::{
    health_server::Health, health_check_response::ServingStatus, HealthCheckRequest,
    HealthCheckResponse,
};
use crate::store::ShareStore;

pub struct HealthServiceImpl {
    store: Arc<dyn ShareStore>,
}

impl HealthServiceImpl {
    pub fn new(store: Arc<dyn ShareStore>) -> Self {
        Self { store }
    }

    /// A cheap store probe: the service is only serving if the metadata
    /// backend answers.
    async fn serving_status(&self) -> ServingStatus {
        match self.store.find_by_id("00000000-0000-0000-0000-000000000000").await {
            Ok(_) => ServingStatus::Serving,
            Err(e) => {
                tracing::warn!("health probe failed: {}", e);
                ServingStatus::NotServing
            }
        }
    }
}

#[tonic::async_trait]
impl Health for HealthServiceImpl {
    async fn check(
        &self,
        _request: Request<HealthCheckRequest>,
    ) -> Result<Response<HealthCheckResponse>, Status> {
        Ok(Response::new(HealthCheckResponse {
            status: self.serving_status().await.into(),
        }))
    }

    type WatchStream = tokio_stream::wrappers::ReceiverStream<Result<HealthCheckResponse, Status>>;

    async fn watch(
        &self,
        _request: Request<HealthCheckRequest>,
    ) -> Result<Response<Self::WatchStream>, Status> {
        let status = self.serving_status().await;
        let (tx, rx) = tokio::sync::mpsc::channel(1);

        tokio::spawn(async move {
            let _ = tx
                .send(Ok(HealthCheckResponse {
                    status: status.into(),
                }))
                .await;
        });

        Ok(Response::new(tokio_stream::wrappers::ReceiverStream::new(rx)))
    }
}
