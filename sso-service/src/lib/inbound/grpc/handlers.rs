use tonic::Status;

use crate::domain::auth::errors::AuthError;

pub mod is_admin;
pub mod login;
pub mod register;

const EMPTY_VALUE: i64 = 0;

impl From<AuthError> for Status {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => Status::invalid_argument("invalid email or password"),
            AuthError::InvalidAppId => Status::invalid_argument("invalid app id"),
            AuthError::UserAlreadyExists => Status::already_exists("user already exists"),
            AuthError::InvalidUserId => Status::not_found("user not found"),
            // Details stay in the service logs
            AuthError::Internal { .. } => Status::internal("internal error"),
        }
    }
}

fn require_non_empty(value: &str, field: &str) -> Result<(), Status> {
    if value.is_empty() {
        return Err(Status::invalid_argument(format!("{} is required", field)));
    }
    Ok(())
}

fn require_non_zero(value: i64, field: &str) -> Result<(), Status> {
    if value == EMPTY_VALUE {
        return Err(Status::invalid_argument(format!("{} is required", field)));
    }
    Ok(())
}
