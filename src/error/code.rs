/// Error codes with category prefix
///
/// Categories:
/// - IO: File system operations
/// - DAT: Room file contents
/// - CFG: Configuration parsing/validation
/// - TUI: Terminal UI errors
/// - VAL: Input validation errors
/// - INT: Unexpected internal errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // I/O errors (IO001-IO099)
    /// File not found
    Io001,
    /// File could not be read
    Io002,

    // Room data errors (DAT001-DAT099)
    /// Malformed room file
    Dat001,
    /// Unsupported room file format
    Dat002,

    // Config errors (CFG001-CFG099)
    /// Invalid config format
    Cfg001,
    /// Invalid key binding
    Cfg002,

    // TUI errors (TUI001-TUI099)
    /// Terminal initialization failed
    Tui001,

    // Validation errors (VAL001-VAL099)
    /// Missing room file argument
    Val001,

    // Internal errors (INT001-INT099)
    /// Unexpected internal error
    Int001,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "IO001")
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Io001 => "IO001",
            ErrorCode::Io002 => "IO002",
            ErrorCode::Dat001 => "DAT001",
            ErrorCode::Dat002 => "DAT002",
            ErrorCode::Cfg001 => "CFG001",
            ErrorCode::Cfg002 => "CFG002",
            ErrorCode::Tui001 => "TUI001",
            ErrorCode::Val001 => "VAL001",
            ErrorCode::Int001 => "INT001",
        }
    }

    /// Returns the general cause description
    pub fn cause(&self) -> &'static str {
        match self {
            ErrorCode::Io001 => "The specified file was not found",
            ErrorCode::Io002 => "The file exists but could not be read",
            ErrorCode::Dat001 => "The room file does not match the expected structure",
            ErrorCode::Dat002 => "The room file extension is not a supported format",
            ErrorCode::Cfg001 => "The configuration file has an invalid format",
            ErrorCode::Cfg002 => "The key bindings in the configuration are not usable",
            ErrorCode::Tui001 => "Failed to initialize the terminal interface",
            ErrorCode::Val001 => "No room file was provided",
            ErrorCode::Int001 => "An unexpected internal error occurred",
        }
    }

    /// Returns remediation steps
    pub fn remediation(&self) -> &'static str {
        match self {
            ErrorCode::Io001 => "1. Verify the file path is correct\n2. Check if the file was moved or deleted",
            ErrorCode::Io002 => "1. Check file permissions\n2. Make sure the path is a regular file",
            ErrorCode::Dat001 => "1. Each room needs at least `id` and `name`\n2. Use a top-level list or a `rooms` list\n3. Tags must be booleans, unread_count a number",
            ErrorCode::Dat002 => "1. Rename the file to .json, .toml, .yaml or .yml\n2. Convert the file to one of those formats",
            ErrorCode::Cfg001 => "1. Check the configuration file syntax\n2. Remove unknown keys\n3. Set ROOMLIST_CONFIG to use another file",
            ErrorCode::Cfg002 => "1. Use three different single characters\n2. Do not bind q, j or k",
            ErrorCode::Tui001 => "1. Run the command in an interactive terminal\n2. Use `roomlist list` for non-interactive output",
            ErrorCode::Val001 => "1. Pass --rooms <FILE>\n2. Or set `rooms` in the config file",
            ErrorCode::Int001 => "1. Try the operation again\n2. Report the issue with debug logs (-v)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CODES: [ErrorCode; 9] = [
        ErrorCode::Io001,
        ErrorCode::Io002,
        ErrorCode::Dat001,
        ErrorCode::Dat002,
        ErrorCode::Cfg001,
        ErrorCode::Cfg002,
        ErrorCode::Tui001,
        ErrorCode::Val001,
        ErrorCode::Int001,
    ];

    #[test]
    fn all_error_codes_have_valid_string() {
        for code in ALL_CODES {
            let s = code.as_str();
            assert!(
                s.len() >= 5 && s.len() <= 6,
                "Error code string should be 5-6 characters: {}",
                s
            );
        }
    }

    #[test]
    fn all_error_codes_have_cause_and_remediation() {
        for code in ALL_CODES {
            assert!(!code.cause().is_empty(), "Cause should not be empty for {:?}", code);
            assert!(
                !code.remediation().is_empty(),
                "Remediation should not be empty for {:?}",
                code
            );
        }
    }

    #[test]
    fn error_code_format_matches_pattern() {
        let codes = [
            (ErrorCode::Io001, "IO0"),
            (ErrorCode::Io002, "IO0"),
            (ErrorCode::Dat001, "DAT"),
            (ErrorCode::Dat002, "DAT"),
            (ErrorCode::Cfg001, "CFG"),
            (ErrorCode::Cfg002, "CFG"),
            (ErrorCode::Tui001, "TUI"),
            (ErrorCode::Val001, "VAL"),
            (ErrorCode::Int001, "INT"),
        ];

        for (code, expected_prefix) in codes {
            assert!(
                code.as_str().starts_with(expected_prefix),
                "Error code {} should start with {}",
                code.as_str(),
                expected_prefix
            );
        }
    }
}
