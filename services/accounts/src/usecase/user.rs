use uuid::Uuid;

use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::AccountsServiceError;

pub struct GetUserUseCase<R>
where
    R: UserRepository,
{
    pub users: R,
}

impl<R> GetUserUseCase<R>
where
    R: UserRepository,
{
    pub async fn execute(&self, user_id: Uuid) -> Result<User, AccountsServiceError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(AccountsServiceError::UserNotFound)
    }
}
