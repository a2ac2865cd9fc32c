use crate::application::user_service::UserService;
use crate::data::user_repository::UserRepository;
use crate::domain::error::DomainError;
use crate::presentation::dto::{RegisterUserRequest, UserResponse};
use crate::presentation::handlers::request_id;
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::{info, warn};

pub async fn list_users<R: UserRepository + 'static>(
    service: web::Data<UserService<R>>,
) -> Result<HttpResponse, DomainError> {
    let users: Vec<UserResponse> = service
        .get_users()
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();
    Ok(HttpResponse::Ok().json(users))
}

pub async fn register_user<R: UserRepository + 'static>(
    req: HttpRequest,
    service: web::Data<UserService<R>>,
    payload: web::Json<RegisterUserRequest>,
) -> Result<HttpResponse, DomainError> {
    let registration = payload.into_inner().validate().inspect_err(|err| {
        warn!(request_id = %request_id(&req), error = %err, "rejected registration");
    })?;
    let user = service.register(registration).await?;

    info!(
        request_id = %request_id(&req),
        user_id = %user.id,
        username = %user.username,
        "user registered"
    );

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
