use std::fmt;

#[derive(Debug, Clone)]
pub enum ChancesError {
    Http(String),
    Api(String),
    Auth(String),
    Validation(String),
    NotFound(String),
    Serialization(String),
    DateParse(String),
    FileOperation(String),
    Config(String),
    Session(String),
}

impl ChancesError {
    /// Stable error code, printed in colored output
    pub fn code(&self) -> &'static str {
        match self {
            ChancesError::Http(_) => "E001",
            ChancesError::Api(_) => "E002",
            ChancesError::Auth(_) => "E003",
            ChancesError::Validation(_) => "E004",
            ChancesError::NotFound(_) => "E005",
            ChancesError::Serialization(_) => "E006",
            ChancesError::DateParse(_) => "E007",
            ChancesError::FileOperation(_) => "E008",
            ChancesError::Config(_) => "E009",
            ChancesError::Session(_) => "E010",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            ChancesError::Http(_) => "HTTP Transport Error",
            ChancesError::Api(_) => "API Error",
            ChancesError::Auth(_) => "Authentication Error",
            ChancesError::Validation(_) => "Validation Error",
            ChancesError::NotFound(_) => "Resource Not Found",
            ChancesError::Serialization(_) => "Serialization Error",
            ChancesError::DateParse(_) => "Date Parse Error",
            ChancesError::FileOperation(_) => "File Operation Error",
            ChancesError::Config(_) => "Configuration Error",
            ChancesError::Session(_) => "Session Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ChancesError::Http(msg) => msg,
            ChancesError::Api(msg) => msg,
            ChancesError::Auth(msg) => msg,
            ChancesError::Validation(msg) => msg,
            ChancesError::NotFound(msg) => msg,
            ChancesError::Serialization(msg) => msg,
            ChancesError::DateParse(msg) => msg,
            ChancesError::FileOperation(msg) => msg,
            ChancesError::Config(msg) => msg,
            ChancesError::Session(msg) => msg,
        }
    }

    /// Colored multi-line format for CLI output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// One-line format for the TUI status bar
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ChancesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ChancesError {}

// Convenience constructors
impl ChancesError {
    pub fn http<T: Into<String>>(msg: T) -> Self {
        ChancesError::Http(msg.into())
    }

    pub fn api<T: Into<String>>(msg: T) -> Self {
        ChancesError::Api(msg.into())
    }

    pub fn auth<T: Into<String>>(msg: T) -> Self {
        ChancesError::Auth(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        ChancesError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        ChancesError::NotFound(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        ChancesError::Serialization(msg.into())
    }

    pub fn date_parse<T: Into<String>>(msg: T) -> Self {
        ChancesError::DateParse(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        ChancesError::FileOperation(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        ChancesError::Config(msg.into())
    }

    pub fn session<T: Into<String>>(msg: T) -> Self {
        ChancesError::Session(msg.into())
    }
}

impl From<reqwest::Error> for ChancesError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ChancesError::Serialization(err.to_string())
        } else {
            ChancesError::Http(err.to_string())
        }
    }
}

impl From<std::io::Error> for ChancesError {
    fn from(err: std::io::Error) -> Self {
        ChancesError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ChancesError {
    fn from(err: serde_json::Error) -> Self {
        ChancesError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for ChancesError {
    fn from(err: chrono::ParseError) -> Self {
        ChancesError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ChancesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_unique() {
        let errors = [
            ChancesError::http("x"),
            ChancesError::api("x"),
            ChancesError::auth("x"),
            ChancesError::validation("x"),
            ChancesError::not_found("x"),
            ChancesError::serialization("x"),
            ChancesError::date_parse("x"),
            ChancesError::file_operation("x"),
            ChancesError::config("x"),
            ChancesError::session("x"),
        ];
        let mut codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_format_simple() {
        let err = ChancesError::validation("sign is required for Astro tickets");
        assert_eq!(
            err.format_simple(),
            "Validation Error: sign is required for Astro tickets"
        );
    }

    #[test]
    fn test_display_uses_simple_format() {
        let err = ChancesError::api("500: internal error");
        assert_eq!(format!("{}", err), err.format_simple());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
        let err: ChancesError = io_err.into();
        assert!(matches!(err, ChancesError::FileOperation(_)));
        assert!(err.message().contains("missing file"));
    }

    #[test]
    fn test_from_chrono_parse_error() {
        let parse_err = chrono::NaiveDate::parse_from_str("not-a-date", "%Y-%m-%d").unwrap_err();
        let err: ChancesError = parse_err.into();
        assert!(matches!(err, ChancesError::DateParse(_)));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{bad").unwrap_err();
        let err: ChancesError = json_err.into();
        assert!(matches!(err, ChancesError::Serialization(_)));
    }
}
