//! Authorization policy.
//!
//! Pure decision functions over an [`Identity`] and a target resource's
//! owner. No side effects, no I/O, so every rule is testable without a
//! database.

use crate::Identity;

use uuid::Uuid;

/// A user may act on their own account; admins may act on any account.
pub fn is_self_or_admin(identity: &Identity, target_user_id: Uuid) -> bool {
    identity.is_admin || identity.user_id == target_user_id
}

/// A card's owner may act on it; admins may act on any card.
pub fn is_owner_or_admin(identity: &Identity, owner_id: Uuid) -> bool {
    identity.is_admin || identity.user_id == owner_id
}

/// Only business accounts (or admins) may create cards.
pub fn can_create_card(identity: &Identity) -> bool {
    identity.is_business || identity.is_admin
}

/// Only admins may list all users.
pub fn can_list_all_users(identity: &Identity) -> bool {
    identity.is_admin
}
