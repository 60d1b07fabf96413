use crate::error::{ServiceError, ServiceResult};
use crate::ids::{IdGenerator, UuidGenerator};
use crate::models::{User, MISSING_FIELDS_MESSAGE};

/// Insertion-ordered in-memory user store.
pub struct UserService {
    users: Vec<User>,
    ids: Box<dyn IdGenerator>,
}

impl UserService {
    pub fn new(ids: impl IdGenerator + 'static) -> Self {
        Self {
            users: Vec::new(),
            ids: Box::new(ids),
        }
    }

    pub fn create_user(&mut self, name: String, email: String) -> ServiceResult<User> {
        if name.is_empty() || email.is_empty() {
            return Err(ServiceError::invalid_input(MISSING_FIELDS_MESSAGE));
        }

        let user = User::new(self.ids.generate(), name, email);
        self.users.push(user.clone());
        Ok(user)
    }

    pub fn list_users(&self) -> &[User] {
        &self.users
    }

    pub fn count(&self) -> usize {
        self.users.len()
    }
}

impl Default for UserService {
    fn default() -> Self {
        Self::new(UuidGenerator)
    }
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService")
            .field("users", &self.users)
            .finish_non_exhaustive()
    }
}
