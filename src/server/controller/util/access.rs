use tower_sessions::Session;

use crate::{
    model::user::{Role, UserDto},
    server::{
        controller::util::get_user::get_user_from_session,
        error::{auth::AuthError, Error},
        model::app::AppState,
    },
};

/// Caller of an admin route and the institution every query is scoped to.
pub struct AdminContext {
    pub user: UserDto,
    pub institution_id: i32,
}

/// Resolves the session user and requires the `admin` role and an institution.
///
/// # Returns
/// - `Err(AuthError::UserNotInSession | UserNotInDatabase)` - 401
/// - `Err(AuthError::RoleRequired)` - 403, the user is not an admin
/// - `Err(AuthError::NoInstitution)` - 404, the admin has not been assigned an institution
pub async fn require_admin(state: &AppState, session: &Session) -> Result<AdminContext, Error> {
    let user = get_user_from_session(state, session).await?;
    require_role(&user, Role::Admin)?;

    let institution_id = user
        .institution_id
        .ok_or(AuthError::NoInstitution(user.id))?;

    Ok(AdminContext {
        user,
        institution_id,
    })
}

/// Resolves the session user and requires the `student` role.
pub async fn require_student(state: &AppState, session: &Session) -> Result<UserDto, Error> {
    let user = get_user_from_session(state, session).await?;
    require_role(&user, Role::Student)?;

    Ok(user)
}

fn require_role(user: &UserDto, required: Role) -> Result<(), AuthError> {
    if user.role != required {
        return Err(AuthError::RoleRequired {
            user_id: user.id,
            role: user.role,
            required,
        });
    }

    Ok(())
}
