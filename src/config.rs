use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// JSON array of dictionary entries
    pub dictionary_path: PathBuf,
    /// JSON array of cultural records
    pub culture_path: PathBuf,
}

impl AppConfig {
    /// Reads the process environment. Call after `dotenv::dotenv()`.
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000);

        let dictionary_path = env::var("DICTIONARY_DATA_PATH")
            .unwrap_or_else(|_| "data/diccionario-triqui.json".to_string())
            .into();

        let culture_path = env::var("CULTURE_DATA_PATH")
            .unwrap_or_else(|_| "data/cultura-triqui.json".to_string())
            .into();

        AppConfig {
            host,
            port,
            dictionary_path,
            culture_path,
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}
