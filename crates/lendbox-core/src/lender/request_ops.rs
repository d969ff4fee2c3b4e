//! Item request operations for the Lender.

use log::{debug, info};

use super::Lender;
use crate::{
    engine::require_text,
    error::{LendError, Result},
    models::{ItemRequest, NewItemRequest, PageRequest},
    params::{CreateRequest, Id, ListRequests},
};

impl Lender {
    /// Posts a request for an item, stamped with the current instant.
    pub async fn create_request(
        &self,
        requester_id: u64,
        params: &CreateRequest,
    ) -> Result<ItemRequest> {
        require_text("description", &params.description)?;

        let new_request = NewItemRequest {
            requester_id,
            description: params.description.trim().to_string(),
            created_at: self.now(),
        };

        let request = self
            .with_database(move |db| {
                if db.get_user(requester_id)?.is_none() {
                    return Err(LendError::UserNotFound { id: requester_id });
                }
                db.create_request(&new_request)
            })
            .await?;
        info!("request {} posted by user {requester_id}", request.id);
        Ok(request)
    }

    /// Fetches a request with the items answering it. Any registered user may
    /// look at any request.
    pub async fn get_request(&self, requester_id: u64, params: &Id) -> Result<ItemRequest> {
        let request_id = params.id;
        self.with_database(move |db| {
            if db.get_user(requester_id)?.is_none() {
                return Err(LendError::UserNotFound { id: requester_id });
            }
            db.get_request(request_id)?
                .ok_or(LendError::RequestNotFound { id: request_id })
        })
        .await
    }

    /// One page of the caller's own requests, or with `params.others` the
    /// requests of everybody else. Newest first.
    pub async fn list_requests(
        &self,
        requester_id: u64,
        params: &ListRequests,
    ) -> Result<Vec<ItemRequest>> {
        let page = PageRequest::new(params.from, params.size)?;
        let others = params.others;

        debug!(
            "listing {} requests for user {requester_id} from {} size {}",
            if others { "other" } else { "own" },
            page.from,
            page.size
        );
        self.with_database(move |db| {
            if db.get_user(requester_id)?.is_none() {
                return Err(LendError::UserNotFound { id: requester_id });
            }
            if others {
                db.get_requests_by_others(requester_id, page)
            } else {
                db.get_requests_by_requester(requester_id, page)
            }
        })
        .await
    }
}
