//! User and item operations for the Lender.

use log::{debug, info};

use super::Lender;
use crate::{
    engine::require_text,
    error::{LendError, Result},
    models::{Item, NewItem, PageRequest, User},
    params::{CreateItem, CreateUser, Id, SearchItems, UpdateItem},
};

impl Lender {
    /// Registers a user. Emails are unique.
    pub async fn create_user(&self, params: &CreateUser) -> Result<User> {
        require_text("name", &params.name)?;
        require_text("email", &params.email)?;

        let name = params.name.trim().to_string();
        let email = params.email.trim().to_string();

        let user = self
            .with_database(move |db| db.create_user(&name, &email))
            .await?;
        info!("user {} registered", user.id);
        Ok(user)
    }

    /// Retrieves a user by ID.
    pub async fn get_user(&self, params: &Id) -> Result<Option<User>> {
        let user_id = params.id;
        self.with_database(move |db| db.get_user(user_id)).await
    }

    /// Lists an item owned by `owner_id`, optionally in answer to an item
    /// request.
    pub async fn create_item(&self, owner_id: u64, params: &CreateItem) -> Result<Item> {
        require_text("name", &params.name)?;

        let new_item = NewItem {
            owner_id,
            name: params.name.trim().to_string(),
            description: params.description.clone(),
            available: params.available,
            request_id: params.request_id,
        };

        let item = self
            .with_database(move |db| {
                if db.get_user(owner_id)?.is_none() {
                    return Err(LendError::UserNotFound { id: owner_id });
                }
                if let Some(request_id) = new_item.request_id {
                    if db.get_request(request_id)?.is_none() {
                        return Err(LendError::RequestNotFound { id: request_id });
                    }
                }
                db.create_item(&new_item)
            })
            .await?;
        info!("item {} listed by user {owner_id}", item.id);
        Ok(item)
    }

    /// Retrieves an item by ID.
    pub async fn get_item(&self, params: &Id) -> Result<Option<Item>> {
        let item_id = params.id;
        self.with_database(move |db| db.get_item(item_id)).await
    }

    /// Edits an item's name, description or availability. Only the owner may
    /// do this. Existing bookings are unaffected.
    pub async fn update_item(&self, requester_id: u64, params: &UpdateItem) -> Result<Item> {
        if let Some(name) = &params.name {
            require_text("name", name)?;
        }

        let params = params.clone();
        let item_id = params.item_id;
        let policy = self.policy;

        let item = self
            .with_database(move |db| {
                let mut item = db
                    .get_item(item_id)?
                    .ok_or(LendError::ItemNotFound { id: item_id })?;
                if !item.is_owned_by(requester_id) {
                    debug!("user {requester_id} may not manage item {item_id}");
                    return Err(policy.deny_item(requester_id, item_id));
                }
                if !params.has_changes() {
                    return Ok(item);
                }

                if let Some(name) = params.name {
                    item.name = name.trim().to_string();
                }
                if let Some(description) = params.description {
                    let description = description.trim();
                    item.description =
                        (!description.is_empty()).then(|| description.to_string());
                }
                if let Some(available) = params.available {
                    item.available = available;
                }

                db.update_item(&item)?;
                Ok(item)
            })
            .await?;
        info!("item {item_id} updated by user {requester_id}");
        Ok(item)
    }

    /// Available items whose name or description contains the text, ordered
    /// by id. Blank text matches nothing.
    pub async fn search_items(&self, params: &SearchItems) -> Result<Vec<Item>> {
        let page = PageRequest::new(params.from, params.size)?;
        let text = params.text.trim().to_string();
        if text.is_empty() {
            return Ok(Vec::new());
        }

        debug!("searching items for {text:?} from {} size {}", page.from, page.size);
        self.with_database(move |db| db.search_items(&text, page))
            .await
    }
}
