// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::UserId;
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedUser> {
    let ctx = ClaimsContext::from_facts(facts);
    build_authenticated_user(ctx)
}

fn build_authenticated_user(ctx: ClaimsContext) -> ApplicationResult<AuthenticatedUser> {
    let rejected = |what: &str| {
        tracing::debug!(claim = what, "token claim missing or malformed");
        ApplicationError::Unauthenticated
    };

    let user_id = ctx
        .user_id
        .as_deref()
        .and_then(|raw| raw.parse::<UserId>().ok())
        .ok_or_else(|| rejected("user"))?;
    let email = ctx.email.ok_or_else(|| rejected("email"))?;
    let issued_at = ctx.issued_at.ok_or_else(|| rejected("issued_at"))?;
    let expires_at = ctx.expires_at.ok_or_else(|| rejected("expires_at"))?;

    Ok(AuthenticatedUser {
        id: user_id,
        email,
        issued_at: DateTime::<Utc>::from(issued_at),
        expires_at: DateTime::<Utc>::from(expires_at),
        session_id: ctx.session_id,
    })
}

#[derive(Default)]
struct ClaimsContext {
    user_id: Option<String>,
    email: Option<String>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
    session_id: Option<String>,
}

impl ClaimsContext {
    fn from_facts(facts: Vec<Fact>) -> Self {
        let mut ctx = ClaimsContext::default();
        for fact in facts {
            ctx.apply_predicate(fact.predicate);
        }
        ctx
    }

    fn apply_predicate(&mut self, predicate: Predicate) {
        let mut terms = predicate.terms.into_iter();
        match (predicate.name.as_str(), terms.next(), terms.next()) {
            ("user", Some(Term::Str(id)), Some(Term::Str(email))) => {
                self.user_id = Some(id);
                self.email = Some(email);
            }
            ("issued_at", Some(Term::Date(seconds)), _) => {
                self.issued_at = Some(UNIX_EPOCH + Duration::from_secs(seconds));
            }
            ("expires_at", Some(Term::Date(seconds)), _) => {
                self.expires_at = Some(UNIX_EPOCH + Duration::from_secs(seconds));
            }
            ("session", Some(Term::Str(sid)), _) => {
                self.session_id = Some(sid);
            }
            _ => {}
        }
    }
}
