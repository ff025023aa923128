//! Roles, grants and revocations.

use super::classify::is_identifier_token;
use super::error::ParseError;
use super::parser::Parser;
use crate::lexer::{Keyword, TokenKind};
use crate::tree::{
    Grantor, Principal, Privilege, Privileges, QualifiedName, RoleSelection, Statement,
};

impl Parser {
    pub(crate) fn create_role(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Create, Keyword::Role])?;
        let name = self.identifier()?;
        let admin = if self.eat_keywords(&[Keyword::With, Keyword::Admin]) {
            Some(self.grantor()?)
        } else {
            None
        };
        self.complete(Statement::CreateRole {
            name,
            admin,
            span: self.span_from(start),
        })
    }

    pub(crate) fn drop_role(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Drop, Keyword::Role])?;
        let name = self.identifier()?;
        self.complete(Statement::DropRole {
            name,
            span: self.span_from(start),
        })
    }

    /// Parses `GRANT roles TO principal, ... (WITH ADMIN OPTION)? (GRANTED BY grantor)?`.
    pub(crate) fn grant_roles(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keyword(Keyword::Grant)?;
        let roles = self.comma_separated(Self::identifier)?;
        self.expect_keyword(Keyword::To)?;
        let grantees = self.comma_separated(Self::principal)?;
        let with_admin_option = self.eat_keywords(&[Keyword::With, Keyword::Admin, Keyword::Option]);
        let grantor = self.granted_by()?;
        self.complete(Statement::GrantRoles {
            roles,
            grantees,
            with_admin_option,
            grantor,
            span: self.span_from(start),
        })
    }

    /// Parses `REVOKE (ADMIN OPTION FOR)? roles FROM principal, ... (GRANTED BY grantor)?`.
    pub(crate) fn revoke_roles(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keyword(Keyword::Revoke)?;
        let admin_option_for = self.eat_keywords(&[Keyword::Admin, Keyword::Option, Keyword::For]);
        let roles = self.comma_separated(Self::identifier)?;
        self.expect_keyword(Keyword::From)?;
        let grantees = self.comma_separated(Self::principal)?;
        let grantor = self.granted_by()?;
        self.complete(Statement::RevokeRoles {
            admin_option_for,
            roles,
            grantees,
            grantor,
            span: self.span_from(start),
        })
    }

    /// Parses `GRANT privileges ON TABLE? name TO principal (WITH GRANT OPTION)?`.
    pub(crate) fn grant(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keyword(Keyword::Grant)?;
        let privileges = self.privileges()?;
        let table = self.privilege_target()?;
        self.expect_keyword(Keyword::To)?;
        let grantee = self.principal()?;
        let with_grant_option = self.eat_keywords(&[Keyword::With, Keyword::Grant, Keyword::Option]);
        self.complete(Statement::Grant {
            privileges,
            table,
            grantee,
            with_grant_option,
            span: self.span_from(start),
        })
    }

    /// Parses `REVOKE (GRANT OPTION FOR)? privileges ON TABLE? name FROM principal`.
    pub(crate) fn revoke(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keyword(Keyword::Revoke)?;
        let grant_option_for = self.eat_keywords(&[Keyword::Grant, Keyword::Option, Keyword::For]);
        let privileges = self.privileges()?;
        let table = self.privilege_target()?;
        self.expect_keyword(Keyword::From)?;
        let grantee = self.principal()?;
        self.complete(Statement::Revoke {
            grant_option_for,
            privileges,
            table,
            grantee,
            span: self.span_from(start),
        })
    }

    /// Parses `SET ROLE (ALL | NONE | identifier) (IN identifier)?`.
    pub(crate) fn set_role(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Set, Keyword::Role])?;
        let role = if self.check_keyword(Keyword::All) {
            RoleSelection::All {
                span: self.advance().span,
            }
        } else if self.check_keyword(Keyword::None) {
            RoleSelection::None {
                span: self.advance().span,
            }
        } else {
            RoleSelection::Role(self.identifier()?)
        };
        let catalog = if self.eat_keyword(Keyword::In) {
            Some(self.identifier()?)
        } else {
            None
        };
        self.complete(Statement::SetRole {
            role,
            catalog,
            span: self.span_from(start),
        })
    }

    /// Parses `privilege (',' privilege)*` or `ALL PRIVILEGES`.
    ///
    /// `ALL` is non-reserved, so a privilege list is tried first.
    fn privileges(&mut self) -> Result<Privileges, ParseError> {
        self.either(
            "privileges",
            |p| {
                let privileges = p.comma_separated(Self::privilege)?;
                if p.check_keyword(Keyword::On) {
                    Ok(Privileges::List(privileges))
                } else {
                    Err(p.mismatch([TokenKind::Comma, TokenKind::Keyword(Keyword::On)]))
                }
            },
            |p| {
                let start = p.start();
                p.expect_keywords(&[Keyword::All, Keyword::Privileges])?;
                Ok(Privileges::All {
                    span: p.span_from(start),
                })
            },
        )
    }

    fn privilege(&mut self) -> Result<Privilege, ParseError> {
        match self.peek_kind() {
            TokenKind::Keyword(Keyword::Select) => Ok(Privilege::Select {
                span: self.advance().span,
            }),
            TokenKind::Keyword(Keyword::Delete) => Ok(Privilege::Delete {
                span: self.advance().span,
            }),
            TokenKind::Keyword(Keyword::Insert) => Ok(Privilege::Insert {
                span: self.advance().span,
            }),
            _ => self.identifier().map(Privilege::Named),
        }
    }

    /// Parses `ON TABLE? qualifiedName`.
    fn privilege_target(&mut self) -> Result<QualifiedName, ParseError> {
        self.expect_keyword(Keyword::On)?;
        self.eat_keyword(Keyword::Table);
        self.qualified_name()
    }

    /// Parses `USER identifier`, `ROLE identifier` or a bare identifier.
    pub(crate) fn principal(&mut self) -> Result<Principal, ParseError> {
        let start = self.start();
        let user = self.check_keyword(Keyword::User);
        if (user || self.check_keyword(Keyword::Role)) && is_identifier_token(self.peek_nth_kind(1))
        {
            self.advance();
            let name = self.identifier()?;
            let span = self.span_from(start);
            return Ok(if user {
                Principal::User { name, span }
            } else {
                Principal::Role { name, span }
            });
        }
        self.identifier().map(Principal::Unspecified)
    }

    /// Parses `CURRENT_USER`, `CURRENT_ROLE` or a principal.
    fn grantor(&mut self) -> Result<Grantor, ParseError> {
        match self.peek_kind() {
            TokenKind::Keyword(Keyword::CurrentUser) => Ok(Grantor::CurrentUser {
                span: self.advance().span,
            }),
            TokenKind::Keyword(Keyword::CurrentRole) => Ok(Grantor::CurrentRole {
                span: self.advance().span,
            }),
            _ => self.principal().map(Grantor::Specified),
        }
    }

    fn granted_by(&mut self) -> Result<Option<Grantor>, ParseError> {
        if self.eat_keywords(&[Keyword::Granted, Keyword::By]) {
            self.grantor().map(Some)
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(sql: &str) -> Statement {
        Parser::new(sql).parse_statement().unwrap().statement
    }

    #[test]
    fn test_role_statements() {
        assert!(matches!(
            parse("CREATE ROLE admin WITH ADMIN CURRENT_USER"),
            Statement::CreateRole {
                admin: Some(Grantor::CurrentUser { .. }),
                ..
            }
        ));
        assert_eq!(parse("DROP ROLE admin").label(), "DropRole");
        assert!(matches!(
            parse("SET ROLE ALL"),
            Statement::SetRole {
                role: RoleSelection::All { .. },
                ..
            }
        ));
        assert!(matches!(
            parse("SET ROLE analyst IN hive"),
            Statement::SetRole {
                role: RoleSelection::Role(_),
                catalog: Some(_),
                ..
            }
        ));
    }

    #[test]
    fn test_grant_roles() {
        let Statement::GrantRoles {
            roles,
            grantees,
            with_admin_option,
            grantor,
            ..
        } = parse("GRANT r1, r2 TO USER alice, ROLE ops, bob WITH ADMIN OPTION GRANTED BY CURRENT_ROLE")
        else {
            panic!("expected grant roles");
        };
        assert_eq!(roles.len(), 2);
        assert!(matches!(grantees[0], Principal::User { .. }));
        assert!(matches!(grantees[1], Principal::Role { .. }));
        assert!(matches!(grantees[2], Principal::Unspecified(_)));
        assert!(with_admin_option);
        assert!(matches!(grantor, Some(Grantor::CurrentRole { .. })));
    }

    #[test]
    fn test_grant_privileges() {
        let Statement::Grant {
            privileges,
            with_grant_option,
            ..
        } = parse("GRANT SELECT, INSERT, update ON TABLE t TO user WITH GRANT OPTION")
        else {
            panic!("expected grant");
        };
        let Privileges::List(list) = privileges else {
            panic!("expected privilege list");
        };
        assert!(matches!(list[0], Privilege::Select { .. }));
        assert!(matches!(list[2], Privilege::Named(_)));
        assert!(with_grant_option);
    }

    #[test]
    fn test_all_privileges() {
        assert!(matches!(
            parse("GRANT ALL PRIVILEGES ON t TO ROLE r"),
            Statement::Grant {
                privileges: Privileges::All { .. },
                ..
            }
        ));
        assert!(matches!(
            parse("REVOKE GRANT OPTION FOR ALL PRIVILEGES ON t FROM u"),
            Statement::Revoke {
                grant_option_for: true,
                privileges: Privileges::All { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_revoke_roles() {
        assert!(matches!(
            parse("REVOKE ADMIN OPTION FOR r FROM u GRANTED BY USER root"),
            Statement::RevokeRoles {
                admin_option_for: true,
                grantor: Some(Grantor::Specified(Principal::User { .. })),
                ..
            }
        ));
    }
}
