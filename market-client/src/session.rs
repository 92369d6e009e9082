//! Session-scoped context
//!
//! Holds the signed-in user and the client-side projection of the cart.
//! The projection only ever grows while signed in; the backend remains the
//! source of truth and a fresh sign-in reseeds it. Items being persisted are
//! held as reservations so overlapping adds of the same item cannot both
//! reach the backend.

use shared::ItemId;
use shared::client::UserInfo;
use std::collections::HashSet;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Source of the current user
pub trait Identity: Send + Sync {
    fn current_user(&self) -> Option<UserInfo>;
}

#[derive(Debug, Default)]
struct SessionState {
    user: Option<UserInfo>,
    cart: HashSet<ItemId>,
    reserved: HashSet<ItemId>,
}

/// Per-session user and cart projection
#[derive(Debug, Default)]
pub struct Session {
    state: RwLock<SessionState>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session already signed in as `user`
    pub fn signed_in(user: UserInfo) -> Self {
        let session = Self::new();
        session.sign_in(user);
        session
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the current user and seed the cart from their stored items
    pub fn sign_in(&self, user: UserInfo) {
        let mut state = self.write();
        state.cart = user.cart.iter().cloned().collect();
        state.reserved.clear();
        tracing::info!(user_id = %user.id, cart_items = state.cart.len(), "Signed in");
        state.user = Some(user);
    }

    pub fn sign_out(&self) {
        let mut state = self.write();
        if let Some(user) = state.user.take() {
            tracing::info!(user_id = %user.id, "Signed out");
        }
        state.cart.clear();
        state.reserved.clear();
    }

    pub fn is_signed_in(&self) -> bool {
        self.read().user.is_some()
    }

    /// Copy of the cart projection for the membership guard
    pub fn cart_snapshot(&self) -> HashSet<ItemId> {
        self.read().cart.clone()
    }

    pub fn in_cart(&self, item_id: &ItemId) -> bool {
        self.read().cart.contains(item_id)
    }

    /// Claim `item_id` while its cart entry is being persisted
    ///
    /// `None` when the item is already in the cart or reserved. Dropping the
    /// reservation without [`commit`](CartReservation::commit) releases it.
    pub fn reserve_cart_item(&self, item_id: ItemId) -> Option<CartReservation<'_>> {
        let mut state = self.write();
        if state.cart.contains(&item_id) || !state.reserved.insert(item_id.clone()) {
            return None;
        }
        Some(CartReservation {
            session: self,
            item_id,
            committed: false,
        })
    }

    pub fn is_reserved(&self, item_id: &ItemId) -> bool {
        self.read().reserved.contains(item_id)
    }

    /// Merge a persisted item into the projection
    pub fn record_cart_item(&self, item_id: ItemId) -> bool {
        let mut state = self.write();
        state.reserved.remove(&item_id);
        let inserted = state.cart.insert(item_id.clone());
        if let Some(user) = state.user.as_mut()
            && inserted
        {
            user.cart.push(item_id);
        }
        inserted
    }
}

/// Pending claim on a cart item, released on drop unless committed
#[must_use]
#[derive(Debug)]
pub struct CartReservation<'a> {
    session: &'a Session,
    item_id: ItemId,
    committed: bool,
}

impl CartReservation<'_> {
    pub fn item_id(&self) -> &ItemId {
        &self.item_id
    }

    /// Record the item as persisted
    pub fn commit(mut self) {
        self.committed = true;
        self.session.record_cart_item(self.item_id.clone());
    }
}

impl Drop for CartReservation<'_> {
    fn drop(&mut self) {
        if !self.committed {
            self.session.write().reserved.remove(&self.item_id);
        }
    }
}

impl Identity for Session {
    fn current_user(&self) -> Option<UserInfo> {
        self.read().user.clone()
    }
}
