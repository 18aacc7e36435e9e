use anyhow::{bail, Context, Result};
use std::io::{self, BufRead, Write};

use crate::api::{EventsApi, LoginError};
use crate::session_store::Session;

/// Run the terminal login flow:
/// 1. Prompt for login and password (password without echo)
/// 2. POST them to the API
/// 3. Save the returned token as the session
pub async fn run_login(api: &dyn EventsApi, session: &Session) -> Result<()> {
    let (login, password) = prompt_credentials()?;
    login_with(api, session, &login, &password).await?;
    println!("Login realizado com sucesso! Sessão salva.");
    Ok(())
}

fn prompt_credentials() -> Result<(String, String)> {
    print!("Login: ");
    io::stdout().flush()?;
    let mut login = String::new();
    io::stdin()
        .lock()
        .read_line(&mut login)
        .context("Failed to read login")?;

    let password = rpassword::prompt_password("Senha: ").context("Failed to read password")?;
    Ok((login, password))
}

pub async fn login_with(
    api: &dyn EventsApi,
    session: &Session,
    login: &str,
    password: &str,
) -> Result<()> {
    let (login, password) = (login.trim(), password.trim());
    if login.is_empty() || password.is_empty() {
        bail!("Por favor, preencha todos os campos.");
    }

    let token = match api.login(login, password).await {
        Ok(token) => token,
        Err(LoginError::Rejected(message)) => {
            bail!(message.unwrap_or_else(|| "Credenciais inválidas. Tente novamente.".to_string()))
        }
        Err(e) => return Err(e.into()),
    };

    session
        .store_token(&token)
        .context("Failed to save session")?;
    tracing::info!("terminal login succeeded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::DevBackend;

    #[tokio::test]
    async fn stores_token_on_success() {
        let session = Session::in_memory();

        login_with(&DevBackend::new(), &session, " a ", "b").await.unwrap();

        assert_eq!(session.token().as_deref(), Some("dev-token"));
    }

    #[tokio::test]
    async fn rejection_leaves_session_empty() {
        let session = Session::in_memory();

        let err = login_with(&DevBackend::new(), &session, "a", "wrong")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Usuário ou senha inválidos.");
        assert!(!session.is_logged_in());
    }

    #[tokio::test]
    async fn blank_fields_are_rejected_before_calling_api() {
        let session = Session::in_memory();
        assert!(login_with(&DevBackend::new(), &session, "  ", "b").await.is_err());
        assert!(!session.is_logged_in());
    }
}
