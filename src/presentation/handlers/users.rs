use crate::application::users::create::{CreateUserRequest, CreateUserUseCase};
use crate::application::users::delete::DeleteUserUseCase;
use crate::application::users::get::GetUserUseCase;
use crate::application::users::list::ListUsersUseCase;
use crate::application::users::update::{UpdateUserRequest, UpdateUserUseCase};
use crate::infrastructure::state::AppState;
use crate::presentation::views::{UserForm, UsersPage};
use crate::shared::error::AppError;
use crate::shared::validation::ValidatedForm;
use askama::Template;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};

/// Collection root; every mutating operation redirects back here.
const USERS_PATH: &str = "/users";

/// Kept from the original route layout where the list also lived at `/`.
pub async fn collection_redirect() -> Redirect {
    Redirect::to(USERS_PATH)
}

/// Renders the user table together with a blank create form.
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let use_case = ListUsersUseCase::new(state.users.clone());
    let users = use_case.execute().await?;

    let page = UsersPage {
        users,
        user: UserForm::default(),
    };

    Ok(Html(page.render()?))
}

pub async fn create_user(
    State(state): State<AppState>,
    ValidatedForm(req): ValidatedForm<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = CreateUserUseCase::new(state.users.clone());
    use_case.execute(req).await?;

    Ok(Redirect::to(USERS_PATH))
}

/// Renders the user table with the form prefilled for the requested user.
/// An unknown id falls back to the list instead of a 404 page.
pub async fn edit_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let get_user = GetUserUseCase::new(state.users.clone());
    let Some(user) = get_user.execute(id).await? else {
        return Ok(Redirect::to(USERS_PATH).into_response());
    };

    let list = ListUsersUseCase::new(state.users.clone());
    let users = list.execute().await?;

    let page = UsersPage {
        users,
        user: UserForm::from(user),
    };

    Ok(Html(page.render()?).into_response())
}

/// The path id identifies the user; any id in the form body is ignored.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedForm(req): ValidatedForm<UpdateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = UpdateUserUseCase::new(state.users.clone());
    use_case.execute(id, req).await?;

    Ok(Redirect::to(USERS_PATH))
}

/// Deleting an id that is already gone is not an error.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = DeleteUserUseCase::new(state.users.clone());
    use_case.execute(id).await?;

    Ok(Redirect::to(USERS_PATH))
}
