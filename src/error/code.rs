/// Error codes with category prefix
///
/// Categories:
/// - IO: File system and terminal operations
/// - CFG: Catalog and configuration parsing
/// - VAL: Input validation errors
/// - INT: Unexpected internal errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // I/O errors (IO001-IO099)
    /// File not found
    Io001,
    /// Permission denied
    Io002,

    // Config errors (CFG001-CFG099)
    /// Invalid catalog format
    Cfg001,
    /// Unsupported catalog file extension
    Cfg002,
    /// Catalog path not configured
    Cfg003,

    // Validation errors (VAL001-VAL099)
    /// Missing country code
    Val001,
    /// Duplicate country code
    Val002,
    /// Unknown country code
    Val003,

    // Internal errors (INT001-INT099)
    Int001,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Io001 => "IO001",
            ErrorCode::Io002 => "IO002",
            ErrorCode::Cfg001 => "CFG001",
            ErrorCode::Cfg002 => "CFG002",
            ErrorCode::Cfg003 => "CFG003",
            ErrorCode::Val001 => "VAL001",
            ErrorCode::Val002 => "VAL002",
            ErrorCode::Val003 => "VAL003",
            ErrorCode::Int001 => "INT001",
        }
    }

    pub fn cause(&self) -> &'static str {
        match self {
            ErrorCode::Io001 => "The specified file was not found",
            ErrorCode::Io002 => "Permission denied when accessing the file",
            ErrorCode::Cfg001 => "The country catalog could not be parsed",
            ErrorCode::Cfg002 => "The country catalog has an unsupported file extension",
            ErrorCode::Cfg003 => "No country catalog path was given",
            ErrorCode::Val001 => "A country entry is missing its code",
            ErrorCode::Val002 => "Two country entries share the same code",
            ErrorCode::Val003 => "A requested country code is not in the catalog",
            ErrorCode::Int001 => "An unexpected internal error occurred",
        }
    }

    pub fn remediation(&self) -> &'static str {
        match self {
            ErrorCode::Io001 => "1. Verify the file path is correct\n2. Check if the file was moved or deleted",
            ErrorCode::Io002 => "1. Check file permissions\n2. Verify ownership of the file",
            ErrorCode::Cfg001 => "1. Check the catalog syntax\n2. Each entry needs `code` and `country` fields",
            ErrorCode::Cfg002 => "1. Rename the catalog to .json, .yaml, .yml or .toml",
            ErrorCode::Cfg003 => "1. Pass --countries <FILE>\n2. Or set the TCD_COUNTRIES environment variable",
            ErrorCode::Val001 => "1. Add a non-empty `code` to every entry",
            ErrorCode::Val002 => "1. Remove or rename the duplicated entry",
            ErrorCode::Val003 => "1. Use 'tcd search' to find valid codes\n2. Check the --preselect list for typos",
            ErrorCode::Int001 => "1. Try the operation again\n2. Re-run with TCD_LOG=debug and report the issue",
        }
    }
}
