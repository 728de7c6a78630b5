//! Login form (`/` and `/login` while anonymous).

use crate::widgets::InputBox;

/// Alert text for a rejected login.
pub const INVALID_CREDENTIALS: &str = "Credenciais inválidas. Tente novamente.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

#[derive(Debug, Clone)]
pub struct LoginForm {
    pub username: InputBox,
    pub password: InputBox,
    field: LoginField,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            username: InputBox::new().with_placeholder("Username"),
            password: InputBox::new().with_placeholder("Password").masked(),
            field: LoginField::Username,
        }
    }

    pub fn field(&self) -> LoginField {
        self.field
    }

    pub fn toggle_field(&mut self) {
        self.field = match self.field {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }

    pub fn active_input(&mut self) -> &mut InputBox {
        match self.field {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    /// Current `(username, password)` pair.
    pub fn values(&self) -> (&str, &str) {
        (self.username.content(), self.password.content())
    }
}
