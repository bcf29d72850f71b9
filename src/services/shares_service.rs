use std::sync::{Arc, LazyLock};

use regex::Regex;
use tonic::{Request, Response, Status};

use crate::error::AppError;
use crate::models::{ShareKind, ShareModel};
use crate::proto::shares::shares_service_server::SharesService;
use crate::proto::shares::{
    ClaimSharesRequest, ClaimSharesResponse, CreateShareRequest, CreateShareResponse,
    DownloadShareRequest, Share, ShareChunk,
};
use crate::rate_limit::RateLimiter;
use crate::sharing::{self, NewShare};
use crate::store::ShareStore;

/// Callers must present exactly four decimal digits; anything else is a
/// format error, not a failed claim.
static RE_PASSCODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}$").unwrap());

const DOWNLOAD_CHUNK_SIZE: usize = 64 * 1024;

pub struct SharesServiceImpl {
    store: Arc<dyn ShareStore>,
    limiter: RateLimiter,
    passcode_time_cost: u32,
}

impl SharesServiceImpl {
    pub fn new(store: Arc<dyn ShareStore>, limiter: RateLimiter, passcode_time_cost: u32) -> Self {
        Self {
            store,
            limiter,
            passcode_time_cost,
        }
    }

    fn model_to_proto(model: &ShareModel) -> Share {
        Share {
            id: model.id.clone(),
            title: model.title.clone(),
            kind: model.kind.as_str().to_string(),
            text: model.text.clone().unwrap_or_default(),
            filename: model.filename.clone().unwrap_or_default(),
            mime_type: model.mime_type.clone().unwrap_or_default(),
            keyphrase: model.keyphrase.clone(),
            created: model.created.clone(),
        }
    }

    fn peer_key<T>(request: &Request<T>) -> String {
        request
            .remote_addr()
            .map(|addr| addr.ip().to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }

    /// Shared gate for credential-bearing requests: rate limit first, then
    /// reject malformed input before any store work.
    fn check_claim(&self, peer: &str, keyphrase: &str, passcode: &str) -> Result<(), Status> {
        if !self.limiter.check(peer) {
            tracing::warn!("rate limit exceeded: peer={}", peer);
            return Err(AppError::RateLimited.into());
        }
        if keyphrase.trim().is_empty() {
            return Err(Status::invalid_argument("keyphrase is required"));
        }
        if !RE_PASSCODE.is_match(passcode) {
            return Err(Status::invalid_argument(
                "passcode must be exactly four digits",
            ));
        }
        Ok(())
    }
}

fn none_if_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

#[tonic::async_trait]
impl SharesService for SharesServiceImpl {
    async fn create_share(
        &self,
        request: Request<CreateShareRequest>,
    ) -> Result<Response<CreateShareResponse>, Status> {
        let req = request.into_inner();

        let kind = ShareKind::parse(&req.kind)
            .ok_or_else(|| Status::invalid_argument("kind must be \"text\" or \"file\""))?;

        let blob = match kind {
            ShareKind::Text => None,
            ShareKind::File => {
                if req.content.is_empty() {
                    return Err(Status::invalid_argument("file share requires content"));
                }
                Some(base64::Engine::encode(
                    &base64::engine::general_purpose::STANDARD,
                    &req.content,
                ))
            }
        };

        let new = NewShare {
            kind: Some(kind),
            title: none_if_empty(req.title),
            text: none_if_empty(req.text),
            filename: none_if_empty(req.filename),
            mime_type: none_if_empty(req.mime_type),
            blob,
            keyphrase: req.keyphrase,
        };

        let created = sharing::create_share(self.store.as_ref(), new, self.passcode_time_cost)
            .await
            .map_err(Status::from)?;

        // The passcode itself is never logged.
        tracing::info!(
            "Created {} share: id={}, keyphrase={}",
            kind.as_str(),
            created.id,
            created.keyphrase
        );

        Ok(Response::new(CreateShareResponse {
            id: created.id,
            keyphrase: created.keyphrase,
            passcode: created.passcode,
            created: created.created,
        }))
    }

    async fn claim_shares(
        &self,
        request: Request<ClaimSharesRequest>,
    ) -> Result<Response<ClaimSharesResponse>, Status> {
        let peer = Self::peer_key(&request);
        let req = request.into_inner();
        self.check_claim(&peer, &req.keyphrase, &req.passcode)?;

        let matched = sharing::authorize(self.store.as_ref(), &req.keyphrase, &req.passcode)
            .await
            .map_err(Status::from)?;

        if matched.is_empty() {
            // Deliberately the same outcome for an unknown keyphrase and a
            // wrong passcode.
            return Err(AppError::NotFoundOrUnauthorized.into());
        }

        tracing::debug!("Claim matched {} share(s): keyphrase={}", matched.len(), req.keyphrase);

        Ok(Response::new(ClaimSharesResponse {
            shares: matched.iter().map(Self::model_to_proto).collect(),
        }))
    }

    type DownloadShareStream = tokio_stream::wrappers::ReceiverStream<Result<ShareChunk, Status>>;

    async fn download_share(
        &self,
        request: Request<DownloadShareRequest>,
    ) -> Result<Response<Self::DownloadShareStream>, Status> {
        let peer = Self::peer_key(&request);
        let req = request.into_inner();
        self.check_claim(&peer, &req.keyphrase, &req.passcode)?;

        // The id is looked up inside the authorized subset only, so an
        // unknown id and a failed credential are indistinguishable.
        let matched = sharing::authorize(self.store.as_ref(), &req.keyphrase, &req.passcode)
            .await
            .map_err(Status::from)?;
        let share = matched
            .into_iter()
            .find(|s| s.id == req.id)
            .ok_or_else(|| Status::from(AppError::NotFoundOrUnauthorized))?;

        if share.kind != ShareKind::File {
            return Err(Status::failed_precondition(
                "share has no file content; claim it as text",
            ));
        }
        let blob = share
            .blob
            .ok_or_else(|| Status::internal("file share has no stored bytes"))?;
        let data = base64::Engine::decode(&base64::engine::general_purpose::STANDARD, &blob)
            .map_err(|e| Status::internal(format!("Failed to decode blob: {}", e)))?;

        let total_size = data.len() as i64;
        let (tx, rx) = tokio::sync::mpsc::channel(4);

        tokio::spawn(async move {
            let mut offset = 0i64;
            for chunk in data.chunks(DOWNLOAD_CHUNK_SIZE) {
                let share_chunk = ShareChunk {
                    data: chunk.to_vec(),
                    offset,
                    total_size,
                };
                if tx.send(Ok(share_chunk)).await.is_err() {
                    break;
                }
                offset += chunk.len() as i64;
            }
        });

        Ok(Response::new(tokio_stream::wrappers::ReceiverStream::new(
            rx,
        )))
    }
}
