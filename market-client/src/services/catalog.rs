//! Item lookup and listing creation

use super::validation_error;
use crate::api::CatalogGateway;
use crate::session::{Identity, Session};
use market_core::{MarketError, MarketResult};
use rust_decimal::Decimal;
use shared::ItemId;
use shared::models::{Item, NewItem};
use std::sync::Arc;
use validator::Validate;

pub struct CatalogService<G, I = Session> {
    gateway: G,
    identity: Arc<I>,
}

impl<G, I> CatalogService<G, I>
where
    G: CatalogGateway,
    I: Identity,
{
    pub fn new(gateway: G, identity: Arc<I>) -> Self {
        Self { gateway, identity }
    }

    pub async fn fetch_item(&self, item_id: &ItemId) -> MarketResult<Item> {
        Ok(self.gateway.fetch_item(item_id).await?)
    }

    /// Publish a new listing for the signed-in user
    pub async fn create_item(&self, draft: &NewItem) -> MarketResult<Item> {
        let user = self
            .identity
            .current_user()
            .ok_or(MarketError::AuthenticationRequired)?;

        draft.validate().map_err(validation_error)?;
        if draft.price < Decimal::ZERO {
            return Err(MarketError::InvalidPrice(draft.price));
        }

        let item = self.gateway.create_item(draft).await.map_err(|e| {
            tracing::warn!(title = %draft.title, error = %e, "Failed to create item");
            MarketError::from(e)
        })?;
        tracing::info!(user_id = %user.id, item_id = %item.id, "Item created");
        Ok(item)
    }
}
