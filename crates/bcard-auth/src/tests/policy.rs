use crate::Identity;
use crate::policy::{can_create_card, can_list_all_users, is_owner_or_admin, is_self_or_admin};

use uuid::Uuid;

fn identity(is_business: bool, is_admin: bool) -> Identity {
    Identity {
        user_id: Uuid::new_v4(),
        is_business,
        is_admin,
    }
}

#[test]
fn given_own_id_when_self_or_admin_checked_then_allowed() {
    let me = identity(false, false);

    assert!(is_self_or_admin(&me, me.user_id));
}

#[test]
fn given_other_id_and_no_admin_when_self_or_admin_checked_then_denied() {
    let me = identity(true, false);

    assert!(!is_self_or_admin(&me, Uuid::new_v4()));
}

#[test]
fn given_admin_when_self_or_admin_checked_then_any_target_allowed() {
    let admin = identity(false, true);

    assert!(is_self_or_admin(&admin, Uuid::new_v4()));
}

#[test]
fn given_owner_when_owner_or_admin_checked_then_allowed() {
    let owner = identity(true, false);

    assert!(is_owner_or_admin(&owner, owner.user_id));
    assert!(!is_owner_or_admin(&owner, Uuid::new_v4()));
}

#[test]
fn given_roles_when_card_creation_checked_then_business_or_admin_required() {
    assert!(!can_create_card(&identity(false, false)));
    assert!(can_create_card(&identity(true, false)));
    assert!(can_create_card(&identity(false, true)));
}

#[test]
fn given_roles_when_user_listing_checked_then_admin_only() {
    assert!(!can_list_all_users(&identity(true, false)));
    assert!(can_list_all_users(&identity(false, true)));
}
