use crate::api::LoginError;
use crate::session_store::Session;

use super::feedback::MessagePresenter;
use super::state::TextInput;

pub const FILL_ALL_FIELDS: &str = "Por favor, preencha todos os campos.";
pub const LOGGING_IN: &str = "Tentando fazer login...";
pub const LOGIN_OK: &str = "Login realizado com sucesso!";
pub const NO_TOKEN_RECEIVED: &str = "Token de acesso não recebido da API.";
pub const INVALID_CREDENTIALS: &str = "Credenciais inválidas. Tente novamente.";
pub const CONNECTION_ERROR: &str = "Erro ao conectar ao servidor. Verifique sua conexão.";
pub const SESSION_SAVE_FAILED: &str = "Não foi possível salvar a sessão neste computador.";

/// Emitted by the login screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginEvent {
    Succeeded,
    BackToHome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Login,
    Password,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

pub struct LoginController {
    session: Session,
    pub login_input: TextInput,
    pub password_input: TextInput,
    pub focused: LoginField,
    /// True while a request is in flight; the submit control is disabled.
    pub submitting: bool,
    pub message: MessagePresenter,
}

impl LoginController {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            login_input: TextInput::new(),
            password_input: TextInput::new(),
            focused: LoginField::Login,
            submitting: false,
            message: MessagePresenter::default(),
        }
    }

    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused {
            LoginField::Login => &mut self.login_input,
            LoginField::Password => &mut self.password_input,
        }
    }

    pub fn next_field(&mut self) {
        self.focused = match self.focused {
            LoginField::Login => LoginField::Password,
            LoginField::Password => LoginField::Login,
        };
    }

    pub fn clear_inputs(&mut self) {
        self.login_input.clear();
        self.password_input.clear();
        self.focused = LoginField::Login;
    }

    /// Fresh form: empty inputs, no message.
    pub fn reset(&mut self) {
        self.clear_inputs();
        self.message.hide();
    }

    pub fn back(&mut self) -> LoginEvent {
        LoginEvent::BackToHome
    }

    /// Validate the form and mark the submit control as busy.
    ///
    /// Returns `None` when nothing should be sent: a submit is already in flight or a
    /// field is empty after trimming.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.submitting {
            return None;
        }

        let login = self.login_input.value.trim().to_string();
        let password = self.password_input.value.trim().to_string();
        if login.is_empty() || password.is_empty() {
            self.message.error(FILL_ALL_FIELDS);
            return None;
        }

        self.submitting = true;
        self.message.success(LOGGING_IN);
        Some(Credentials { login, password })
    }

    /// Apply the outcome of `POST /auth/login`. Always re-enables the submit control.
    pub fn finish_submit(&mut self, result: Result<String, LoginError>) -> Option<LoginEvent> {
        self.submitting = false;

        match result {
            Ok(token) => {
                if let Err(e) = self.session.store_token(&token) {
                    tracing::error!("Failed to persist session token: {:#}", e);
                    self.message.error(SESSION_SAVE_FAILED);
                    return None;
                }
                tracing::info!("login succeeded");
                self.message.success(LOGIN_OK);
                Some(LoginEvent::Succeeded)
            }
            Err(LoginError::MissingToken) => {
                tracing::warn!("login response had no access token");
                self.message.error(NO_TOKEN_RECEIVED);
                None
            }
            Err(LoginError::Rejected(message)) => {
                self.message
                    .error(message.unwrap_or_else(|| INVALID_CREDENTIALS.to_string()));
                None
            }
            Err(LoginError::Network(e)) => {
                tracing::warn!("login request failed: {}", e);
                self.message.error(CONNECTION_ERROR);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::feedback::MessageKind;

    fn filled(login: &str, password: &str) -> LoginController {
        let mut controller = LoginController::new(Session::in_memory());
        controller.login_input = TextInput::from_str(login);
        controller.password_input = TextInput::from_str(password);
        controller
    }

    #[test]
    fn blank_fields_block_submit() {
        let mut controller = filled("  ", "secret");

        assert_eq!(controller.begin_submit(), None);
        assert!(!controller.submitting);
        assert_eq!(controller.message.visible().unwrap().text, FILL_ALL_FIELDS);
        assert_eq!(controller.message.kind(), Some(MessageKind::Error));
    }

    #[test]
    fn submit_trims_and_disables_control() {
        let mut controller = filled(" a ", " b");

        let credentials = controller.begin_submit().expect("should submit");
        assert_eq!(credentials.login, "a");
        assert_eq!(credentials.password, "b");
        assert!(controller.submitting);
        assert_eq!(controller.message.visible().unwrap().text, LOGGING_IN);

        assert_eq!(controller.begin_submit(), None, "second submit while in flight");
    }

    #[test]
    fn token_is_persisted_on_success() {
        let session = Session::in_memory();
        let mut controller = LoginController::new(session.clone());
        controller.submitting = true;

        let event = controller.finish_submit(Ok("tok123".to_string()));

        assert_eq!(event, Some(LoginEvent::Succeeded));
        assert_eq!(session.token().as_deref(), Some("tok123"));
        assert!(!controller.submitting);
    }

    #[test]
    fn failures_keep_session_empty_and_reenable_submit() {
        let cases = [
            (LoginError::MissingToken, NO_TOKEN_RECEIVED.to_string()),
            (LoginError::Rejected(None), INVALID_CREDENTIALS.to_string()),
            (
                LoginError::Rejected(Some("Usuário bloqueado".to_string())),
                "Usuário bloqueado".to_string(),
            ),
            (
                LoginError::Network("connection refused".to_string()),
                CONNECTION_ERROR.to_string(),
            ),
        ];

        for (error, expected) in cases {
            let session = Session::in_memory();
            let mut controller = LoginController::new(session.clone());
            controller.submitting = true;

            assert_eq!(controller.finish_submit(Err(error)), None);
            assert!(!controller.submitting);
            assert_eq!(controller.message.visible().unwrap().text, expected);
            assert_eq!(session.token(), None);
        }
    }

    #[test]
    fn reset_clears_inputs_and_message() {
        let mut controller = filled("a", "b");
        controller.focused = LoginField::Password;
        controller.message.error("old");

        controller.reset();

        assert!(controller.login_input.value.is_empty());
        assert!(controller.password_input.value.is_empty());
        assert_eq!(controller.focused, LoginField::Login);
        assert!(controller.message.visible().is_none());
    }
}
