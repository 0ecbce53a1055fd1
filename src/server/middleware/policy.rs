//! Authorization policies.
//!
//! A policy is a predicate over the requesting principal, the action and, for owned
//! resources, the owner's user id. Controllers pick the policy for their resource and
//! let `AuthGuard::authorize` turn a denial into 401 or 403.

use crate::server::middleware::auth::Principal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Read,
    Create,
    Update,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

pub trait AccessPolicy {
    /// Short name used in denial logs.
    fn name(&self) -> &'static str;

    fn check(&self, principal: &Principal, action: Action, owner_id: Option<i32>) -> Decision;
}

/// Staff may do anything; any other authenticated user may only read.
///
/// Guards every reference data and catalog resource.
pub struct AdminOrAuthenticatedReadOnly;

impl AccessPolicy for AdminOrAuthenticatedReadOnly {
    fn name(&self) -> &'static str {
        "admin or authenticated read-only"
    }

    fn check(&self, principal: &Principal, action: Action, _owner_id: Option<i32>) -> Decision {
        match principal {
            Principal::Anonymous => Decision::Deny,
            Principal::User(user) if user.is_staff => Decision::Allow,
            Principal::User(_) if action == Action::Read => Decision::Allow,
            Principal::User(_) => Decision::Deny,
        }
    }
}

/// Staff may do anything; users may read and create orders and delete their own.
pub struct OrderAccess;

impl AccessPolicy for OrderAccess {
    fn name(&self) -> &'static str {
        "order access"
    }

    fn check(&self, principal: &Principal, action: Action, owner_id: Option<i32>) -> Decision {
        let Principal::User(user) = principal else {
            return Decision::Deny;
        };
        if user.is_staff {
            return Decision::Allow;
        }

        match action {
            Action::Read | Action::Create => Decision::Allow,
            Action::Delete if owner_id == Some(user.id) => Decision::Allow,
            Action::Delete | Action::Update => Decision::Deny,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn user(id: i32, is_staff: bool) -> Principal {
        Principal::User(entity::user::Model {
            id,
            username: format!("user_{}", id),
            email: String::new(),
            password_hash: "!".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            is_staff,
            is_active: true,
            date_joined: Utc::now(),
        })
    }

    #[test]
    fn read_only_policy_matrix() {
        let policy = AdminOrAuthenticatedReadOnly;
        let admin = user(1, true);
        let member = user(2, false);

        for action in [Action::Read, Action::Create, Action::Update, Action::Delete] {
            assert_eq!(policy.check(&admin, action, None), Decision::Allow);
            assert_eq!(policy.check(&Principal::Anonymous, action, None), Decision::Deny);
        }
        assert_eq!(policy.check(&member, Action::Read, None), Decision::Allow);
        assert_eq!(policy.check(&member, Action::Create, None), Decision::Deny);
        assert_eq!(policy.check(&member, Action::Update, None), Decision::Deny);
        assert_eq!(policy.check(&member, Action::Delete, None), Decision::Deny);
    }

    #[test]
    fn order_delete_requires_ownership_for_non_staff() {
        let policy = OrderAccess;
        let member = user(2, false);

        assert_eq!(policy.check(&member, Action::Delete, Some(2)), Decision::Allow);
        assert_eq!(policy.check(&member, Action::Delete, Some(3)), Decision::Deny);
        assert_eq!(policy.check(&member, Action::Create, None), Decision::Allow);
        assert_eq!(
            policy.check(&user(1, true), Action::Delete, Some(3)),
            Decision::Allow
        );
        assert_eq!(
            policy.check(&Principal::Anonymous, Action::Read, None),
            Decision::Deny
        );
    }
}
