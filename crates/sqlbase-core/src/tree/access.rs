//! Roles, principals and privileges.

use serde::Serialize;

use super::Identifier;
use crate::lexer::Span;

/// A privilege in `GRANT`/`REVOKE`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Privilege {
    Select { span: Span },
    Delete { span: Span },
    Insert { span: Span },
    Named(Identifier),
}

/// `privilege, ...` or `ALL PRIVILEGES`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Privileges {
    List(Vec<Privilege>),
    All { span: Span },
}

/// A user, a role, or a name of unspecified kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Principal {
    User { name: Identifier, span: Span },
    Role { name: Identifier, span: Span },
    Unspecified(Identifier),
}

/// The grantor of a role or privilege.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Grantor {
    CurrentUser { span: Span },
    CurrentRole { span: Span },
    Specified(Principal),
}

/// Target of `SET ROLE`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RoleSelection {
    All { span: Span },
    None { span: Span },
    Role(Identifier),
}
