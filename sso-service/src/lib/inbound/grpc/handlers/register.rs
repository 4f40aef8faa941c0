use tonic::Status;

use super::require_non_empty;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::proto::RegisterRequest;
use crate::proto::RegisterResponse;

pub async fn register<S: AuthServicePort>(
    service: &S,
    request: RegisterRequest,
) -> Result<RegisterResponse, Status> {
    require_non_empty(&request.email, "email")?;
    require_non_empty(&request.password, "password")?;

    let command = RegisterCommand::new(request.email, request.password);
    let user_id = service.register_new_user(command).await?;

    Ok(RegisterResponse { user_id: user_id.0 })
}
