//! Runtime application configuration loaded from the environment.

/// Runtime configuration populated from environment variables
/// (after dotenvy has loaded any .env file).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_port: u16,
    /// SMTP relay host for OTP mail.
    pub smtp_host: String,
    pub smtp_user: String,
    pub smtp_password: String,
    /// From address for OTP mail; falls back to the SMTP user.
    pub smtp_from: String,
    /// Telegram login bot token; empty disables the Telegram channel.
    pub telegram_bot_token: String,
    /// Raw contact string of the administrator account.
    pub admin_contact: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_port: 8080,
            smtp_host: "smtp.gmail.com".into(),
            smtp_user: String::new(),
            smtp_password: String::new(),
            smtp_from: String::new(),
            telegram_bot_token: String::new(),
            admin_contact: String::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let g = |key: &str| -> String { std::env::var(key).unwrap_or_default() };

        let server_port = parse_u16(&g("SERVER_PORT"), defaults.server_port);
        let smtp_host = {
            let h = g("SMTP_HOST");
            if h.is_empty() { defaults.smtp_host } else { h }
        };
        let smtp_user = g("SMTP_USER");
        let smtp_from = {
            let f = g("SMTP_FROM");
            if f.is_empty() { smtp_user.clone() } else { f }
        };

        Self {
            server_port,
            smtp_host,
            smtp_password: g("SMTP_PASSWORD"),
            smtp_from,
            smtp_user,
            telegram_bot_token: g("TELEGRAM_BOT_TOKEN"),
            admin_contact: g("ADMIN_CONTACT"),
        }
    }

    pub fn mail_configured(&self) -> bool {
        !self.smtp_user.is_empty() && !self.smtp_password.is_empty()
    }
}

fn parse_u16(s: &str, default: u16) -> u16 {
    s.parse().unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_u16_falls_back_on_garbage() {
        assert_eq!(parse_u16("", 8080), 8080);
        assert_eq!(parse_u16("abc", 8080), 8080);
        assert_eq!(parse_u16("9000", 8080), 9000);
    }

    #[test]
    fn defaults_are_sane() {
        let c = AppConfig::default();
        assert_eq!(c.server_port, 8080);
        assert!(!c.mail_configured());
    }
}
