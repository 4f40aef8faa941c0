use tonic::Status;

use super::require_non_empty;
use super::require_non_zero;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::proto::LoginRequest;
use crate::proto::LoginResponse;

pub async fn login<S: AuthServicePort>(
    service: &S,
    request: LoginRequest,
) -> Result<LoginResponse, Status> {
    require_non_empty(&request.email, "email")?;
    require_non_empty(&request.password, "password")?;
    require_non_zero(i64::from(request.app_id), "app_id")?;

    let command = LoginCommand::new(request.email, request.password, AppId(request.app_id));
    let token = service.login(command).await?;

    Ok(LoginResponse { token })
}
