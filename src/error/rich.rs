use std::collections::BTreeMap;
use std::path::PathBuf;

use super::code::ErrorCode;

/// Structured context for error display
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    pub file_path: Option<PathBuf>,
    pub room_id: Option<String>,
    /// Additional key-value pairs (BTreeMap for deterministic ordering)
    pub additional: BTreeMap<String, String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    pub fn with_room_id(mut self, id: impl Into<String>) -> Self {
        self.room_id = Some(id.into());
        self
    }

    pub fn with_additional(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional.insert(key.into(), value.into());
        self
    }

    /// Returns true if the context has any data
    pub fn is_empty(&self) -> bool {
        self.file_path.is_none() && self.room_id.is_none() && self.additional.is_empty()
    }
}

/// Rich error with code, message, and context
pub struct RichError {
    code: ErrorCode,
    message: String,
    context: ErrorContext,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl std::fmt::Debug for RichError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RichError")
            .field("code", &self.code)
            .field("message", &self.message)
            .field("context", &self.context)
            .field("source", &self.source.as_ref().map(|e| e.to_string()))
            .finish()
    }
}

impl RichError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = context;
        self
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn context(&self) -> &ErrorContext {
        &self.context
    }
}

impl std::fmt::Display for RichError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "error[{}]: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for RichError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rich_error_display() {
        let error = RichError::new(ErrorCode::Dat001, "Bad room file");
        assert_eq!(format!("{}", error), "error[DAT001]: Bad room file");
        assert!(error.context().is_empty());
    }

    #[test]
    fn error_context_builder() {
        let context = ErrorContext::new()
            .with_file_path("/path/to/rooms.json")
            .with_room_id("!abc:example.org")
            .with_additional("line", "3");

        assert!(!context.is_empty());
        assert_eq!(context.file_path, Some(PathBuf::from("/path/to/rooms.json")));
        assert_eq!(context.room_id.as_deref(), Some("!abc:example.org"));
        assert_eq!(context.additional.get("line"), Some(&"3".to_string()));
    }
}
