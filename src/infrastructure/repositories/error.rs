use crate::domain::errors::DomainError;

const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_TRANSACTION_SIGN: &str = "transactions_amount_sign_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                match constraint {
                    CNT_USER_EMAIL => {
                        return DomainError::Conflict("email already registered".into());
                    }
                    CNT_TRANSACTION_SIGN => {
                        return DomainError::Validation(
                            "amount sign does not match transaction type".into(),
                        );
                    }
                    _ => {}
                }
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    "42501" => {
                        return DomainError::PermissionDenied(db_err.message().to_string());
                    }
                    _ => {}
                }
            }

            let message = db_err.message();
            if message.contains("row-level security") {
                return DomainError::PermissionDenied(message.to_string());
            }
            DomainError::Persistence(message.to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
