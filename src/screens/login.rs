//! Login screen state.
//!
//! Sign-in is a stub: any non-empty email and password are accepted and no
//! backend is contacted.

/// Which field receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

/// Outcome of pressing "Sign in"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Both fields were filled; carries the trimmed email.
    SignedIn { email: String },
    /// A field was empty; the inline error is set.
    Rejected,
}

pub const MISSING_FIELDS_ERROR: &str = "Please enter both email and password.";
pub const MISSING_FIELDS_TOAST: &str = "Please fill in all fields.";
pub const FORGOT_PASSWORD_TOAST: &str = "Password reset flow coming soon.";

#[derive(Debug, Clone)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub focus: LoginField,
    pub remember_me: bool,
    /// Inline validation message under the form
    pub error: Option<String>,
}

impl Default for LoginState {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            focus: LoginField::Email,
            remember_me: true,
            error: None,
        }
    }
}

impl LoginState {
    pub fn new() -> Self {
        Self::default()
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn pop_char(&mut self) {
        self.focused_mut().pop();
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        };
    }

    pub fn toggle_remember_me(&mut self) {
        self.remember_me = !self.remember_me;
    }

    /// Password rendered as bullets.
    pub fn masked_password(&self) -> String {
        "•".repeat(self.password.chars().count())
    }

    /// Validate the form.
    pub fn submit(&mut self) -> LoginOutcome {
        let email = self.email.trim();
        let password = self.password.trim();

        if email.is_empty() || password.is_empty() {
            self.error = Some(MISSING_FIELDS_ERROR.to_string());
            return LoginOutcome::Rejected;
        }

        self.error = None;
        LoginOutcome::SignedIn {
            email: email.to_string(),
        }
    }

    /// Toast text for a social sign-in provider.
    pub fn social_login_message(provider: &str) -> String {
        let mut chars = provider.chars();
        let title = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
            None => String::new(),
        };
        format!("Sign in with {} coming soon.", title)
    }
}
