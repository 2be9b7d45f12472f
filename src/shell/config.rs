const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 4000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

impl HttpConfig {
    pub fn from_env() -> Self {
        let host = std::env::var("HORAS_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = std::env::var("HORAS_PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        Self { host, port }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_format_the_bind_address() {
        let config = HttpConfig {
            host: "127.0.0.1".into(),
            port: 4433,
        };
        assert_eq!(config.bind_address(), "127.0.0.1:4433");
    }
}
