// Code generated by apierr-gen. DO NOT EDIT.

use crate::CustomError;

// Error names
/// The request is invalid or malformed.
pub const ERROR_BAD_REQUEST: &str = "BadRequest";
/// The user is not authorized to perform this action.
pub const ERROR_UNAUTHORIZED: &str = "Unauthorized";
/// The user does not have permission to access this resource.
pub const ERROR_FORBIDDEN: &str = "Forbidden";
/// The requested resource could not be found.
pub const ERROR_NOT_FOUND: &str = "NotFound";
/// An unexpected server error occurred.
pub const ERROR_INTERNAL_SERVER_ERROR: &str = "InternalServerError";
/// Failed to parse API error.
pub const ERROR_PARSE_ERROR: &str = "ParseError";

// Error types
pub const ERR_TYPE_BAD_REQUEST: &str = "BAD_REQUEST";
pub const ERR_TYPE_UNAUTHORIZED: &str = "UNAUTHORIZED";
pub const ERR_TYPE_FORBIDDEN: &str = "FORBIDDEN";
pub const ERR_TYPE_NOT_FOUND: &str = "NOT_FOUND";
pub const ERR_TYPE_INTERNAL_SERVER_ERROR: &str = "INTERNAL_SERVER_ERROR";
pub const ERR_TYPE_PARSE_ERROR: &str = "PARSE_ERROR";

// Error codes
pub const ERR_CODE_BAD_REQUEST: &str = "BAD_REQUEST";
pub const ERR_CODE_UNAUTHORIZED: &str = "UNAUTHORIZED";
pub const ERR_CODE_FORBIDDEN: &str = "FORBIDDEN";
pub const ERR_CODE_NOT_FOUND: &str = "NOT_FOUND";
pub const ERR_CODE_INTERNAL_SERVER_ERROR: &str = "INTERNAL_SERVER_ERROR";
pub const ERR_CODE_PARSE_ERROR: &str = "PARSE_ERROR";

/// The request is invalid or malformed.
#[derive(Debug)]
pub struct BadRequestError {
    base: CustomError,
    details: String,
}

impl BadRequestError {
    /// Creates a new `BadRequestError`.
    pub fn new(details: String) -> Self {
        let base = CustomError::new(
            400,
            format!("Invalid request: {}", details),
            "The request is invalid.",
            "BAD_REQUEST",
            "BAD_REQUEST",
            false,
        );
        Self {
            base,
            details,
        }
    }

    /// Returns the `details` argument of this `BadRequestError`.
    pub fn details(&self) -> &String {
        &self.details
    }

    pub fn as_custom_error(&self) -> &CustomError {
        &self.base
    }

    pub fn into_custom_error(self) -> CustomError {
        self.base
    }
}

impl std::fmt::Display for BadRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.base, f)
    }
}

impl std::error::Error for BadRequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.base)
    }
}

impl From<BadRequestError> for CustomError {
    fn from(err: BadRequestError) -> Self {
        err.base
    }
}

/// Creates a `BadRequest` error as a [`CustomError`].
pub fn new_bad_request_error(details: String) -> CustomError {
    BadRequestError::new(details).into_custom_error()
}

/// The user is not authorized to perform this action.
#[derive(Debug)]
pub struct UnauthorizedError {
    base: CustomError,
}

impl UnauthorizedError {
    /// Creates a new `UnauthorizedError`.
    pub fn new() -> Self {
        let base = CustomError::new(
            401,
            format!("Unauthorized access"),
            "You are not authorized to access this resource.",
            "UNAUTHORIZED",
            "UNAUTHORIZED",
            false,
        );
        Self {
            base,
        }
    }

    pub fn as_custom_error(&self) -> &CustomError {
        &self.base
    }

    pub fn into_custom_error(self) -> CustomError {
        self.base
    }
}

impl std::fmt::Display for UnauthorizedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.base, f)
    }
}

impl std::error::Error for UnauthorizedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.base)
    }
}

impl From<UnauthorizedError> for CustomError {
    fn from(err: UnauthorizedError) -> Self {
        err.base
    }
}

/// Creates a `Unauthorized` error as a [`CustomError`].
pub fn new_unauthorized_error() -> CustomError {
    UnauthorizedError::new().into_custom_error()
}

/// The user does not have permission to access this resource.
#[derive(Debug)]
pub struct ForbiddenError {
    base: CustomError,
    resource: String,
}

impl ForbiddenError {
    /// Creates a new `ForbiddenError`.
    pub fn new(resource: String) -> Self {
        let base = CustomError::new(
            403,
            format!("Forbidden: you do not have permission to access {}.", resource),
            "You do not have permission to access this resource.",
            "FORBIDDEN",
            "FORBIDDEN",
            false,
        );
        Self {
            base,
            resource,
        }
    }

    /// Returns the `resource` argument of this `ForbiddenError`.
    pub fn resource(&self) -> &String {
        &self.resource
    }

    pub fn as_custom_error(&self) -> &CustomError {
        &self.base
    }

    pub fn into_custom_error(self) -> CustomError {
        self.base
    }
}

impl std::fmt::Display for ForbiddenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.base, f)
    }
}

impl std::error::Error for ForbiddenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.base)
    }
}

impl From<ForbiddenError> for CustomError {
    fn from(err: ForbiddenError) -> Self {
        err.base
    }
}

/// Creates a `Forbidden` error as a [`CustomError`].
pub fn new_forbidden_error(resource: String) -> CustomError {
    ForbiddenError::new(resource).into_custom_error()
}

/// The requested resource could not be found.
#[derive(Debug)]
pub struct NotFoundError {
    base: CustomError,
    resource: String,
}

impl NotFoundError {
    /// Creates a new `NotFoundError`.
    pub fn new(resource: String) -> Self {
        let base = CustomError::new(
            404,
            format!("{} not found", resource),
            "The requested resource could not be found.",
            "NOT_FOUND",
            "NOT_FOUND",
            false,
        );
        Self {
            base,
            resource,
        }
    }

    /// Returns the `resource` argument of this `NotFoundError`.
    pub fn resource(&self) -> &String {
        &self.resource
    }

    pub fn as_custom_error(&self) -> &CustomError {
        &self.base
    }

    pub fn into_custom_error(self) -> CustomError {
        self.base
    }
}

impl std::fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.base, f)
    }
}

impl std::error::Error for NotFoundError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.base)
    }
}

impl From<NotFoundError> for CustomError {
    fn from(err: NotFoundError) -> Self {
        err.base
    }
}

/// Creates a `NotFound` error as a [`CustomError`].
pub fn new_not_found_error(resource: String) -> CustomError {
    NotFoundError::new(resource).into_custom_error()
}

/// An unexpected server error occurred.
#[derive(Debug)]
pub struct InternalServerErrorError {
    base: CustomError,
}

impl InternalServerErrorError {
    /// Creates a new `InternalServerErrorError`.
    pub fn new() -> Self {
        let base = CustomError::new(
            500,
            format!("Internal server error"),
            "Something went wrong. Please try again later.",
            "INTERNAL_SERVER_ERROR",
            "INTERNAL_SERVER_ERROR",
            false,
        );
        Self {
            base,
        }
    }

    pub fn as_custom_error(&self) -> &CustomError {
        &self.base
    }

    pub fn into_custom_error(self) -> CustomError {
        self.base
    }
}

impl std::fmt::Display for InternalServerErrorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.base, f)
    }
}

impl std::error::Error for InternalServerErrorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.base)
    }
}

impl From<InternalServerErrorError> for CustomError {
    fn from(err: InternalServerErrorError) -> Self {
        err.base
    }
}

/// Creates a `InternalServerError` error as a [`CustomError`].
pub fn new_internal_server_error_error() -> CustomError {
    InternalServerErrorError::new().into_custom_error()
}

/// Failed to parse API error.
#[derive(Debug)]
pub struct ParseErrorError {
    base: CustomError,
    api_error: String,
    error: String,
}

impl ParseErrorError {
    /// Creates a new `ParseErrorError`.
    pub fn new(api_error: String, error: String) -> Self {
        let base = CustomError::new(
            500,
            format!("failed to parse api error {}: {}", api_error, error),
            "Something went wrong. Please try again later.",
            "PARSE_ERROR",
            "PARSE_ERROR",
            false,
        );
        Self {
            base,
            api_error,
            error,
        }
    }

    /// Returns the `api_error` argument of this `ParseErrorError`.
    pub fn api_error(&self) -> &String {
        &self.api_error
    }

    /// Returns the `error` argument of this `ParseErrorError`.
    pub fn error(&self) -> &String {
        &self.error
    }

    pub fn as_custom_error(&self) -> &CustomError {
        &self.base
    }

    pub fn into_custom_error(self) -> CustomError {
        self.base
    }
}

impl std::fmt::Display for ParseErrorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.base, f)
    }
}

impl std::error::Error for ParseErrorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.base)
    }
}

impl From<ParseErrorError> for CustomError {
    fn from(err: ParseErrorError) -> Self {
        err.base
    }
}

/// Creates a `ParseError` error as a [`CustomError`].
pub fn new_parse_error_error(api_error: String, error: String) -> CustomError {
    ParseErrorError::new(api_error, error).into_custom_error()
}
