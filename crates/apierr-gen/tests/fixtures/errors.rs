// Code generated by apierr-gen. DO NOT EDIT.

use apierr::CustomError;

// Error names
/// No user exists with the given id.
pub const ERROR_USER_NOT_FOUND: &str = "UserNotFound";
/// The account used up its request quota. Retry after the window resets.
pub const ERROR_QUOTA_EXCEEDED: &str = "QuotaExceeded";
/// No order exists with the given reference.
pub const ERROR_ORDER_NOT_FOUND: &str = "OrderNotFound";
/// The service is in maintenance mode.
pub const ERROR_MAINTENANCE: &str = "Maintenance";

// Error types
pub const ERR_TYPE_NOT_FOUND: &str = "NOT_FOUND";
pub const ERR_TYPE_RATE_LIMITED: &str = "RATE_LIMITED";
pub const ERR_TYPE_UNAVAILABLE: &str = "UNAVAILABLE";

// Error codes
pub const ERR_CODE_USR_404: &str = "USR_404";
pub const ERR_CODE_QTA_429: &str = "QTA_429";
pub const ERR_CODE_ORD_404: &str = "ORD_404";
pub const ERR_CODE_SVC_503: &str = "SVC_503";

/// No user exists with the given id.
#[derive(Debug)]
pub struct UserNotFoundError {
    base: CustomError,
    user_id: u64,
}

impl UserNotFoundError {
    /// Creates a new `UserNotFoundError`.
    pub fn new(user_id: u64) -> Self {
        let base = CustomError::new(
            404,
            format!("user {} not found", user_id),
            "The requested user could not be found.",
            "NOT_FOUND",
            "USR_404",
            false,
        );
        Self {
            base,
            user_id,
        }
    }

    /// Returns the `user_id` argument of this `UserNotFoundError`.
    pub fn user_id(&self) -> &u64 {
        &self.user_id
    }

    pub fn as_custom_error(&self) -> &CustomError {
        &self.base
    }

    pub fn into_custom_error(self) -> CustomError {
        self.base
    }
}

impl std::fmt::Display for UserNotFoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.base, f)
    }
}

impl std::error::Error for UserNotFoundError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.base)
    }
}

impl From<UserNotFoundError> for CustomError {
    fn from(err: UserNotFoundError) -> Self {
        err.base
    }
}

/// Creates a `UserNotFound` error as a [`CustomError`].
pub fn new_user_not_found_error(user_id: u64) -> CustomError {
    UserNotFoundError::new(user_id).into_custom_error()
}

/// The account used up its request quota. Retry after the window resets.
#[derive(Debug)]
pub struct QuotaExceededError {
    base: CustomError,
    limit: u32,
    account: String,
}

impl QuotaExceededError {
    /// Creates a new `QuotaExceededError`.
    pub fn new(limit: u32, account: String) -> Self {
        let base = CustomError::new(
            429,
            format!("quota of {} requests exceeded for {:?}", limit, account),
            "Too many requests, slow down.",
            "RATE_LIMITED",
            "QTA_429",
            true,
        );
        Self {
            base,
            limit,
            account,
        }
    }

    /// Returns the `limit` argument of this `QuotaExceededError`.
    pub fn limit(&self) -> &u32 {
        &self.limit
    }

    /// Returns the `account` argument of this `QuotaExceededError`.
    pub fn account(&self) -> &String {
        &self.account
    }

    pub fn as_custom_error(&self) -> &CustomError {
        &self.base
    }

    pub fn into_custom_error(self) -> CustomError {
        self.base
    }
}

impl std::fmt::Display for QuotaExceededError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.base, f)
    }
}

impl std::error::Error for QuotaExceededError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.base)
    }
}

impl From<QuotaExceededError> for CustomError {
    fn from(err: QuotaExceededError) -> Self {
        err.base
    }
}

/// Creates a `QuotaExceeded` error as a [`CustomError`].
pub fn new_quota_exceeded_error(limit: u32, account: String) -> CustomError {
    QuotaExceededError::new(limit, account).into_custom_error()
}

/// No order exists with the given reference.
#[derive(Debug)]
pub struct OrderNotFoundError {
    base: CustomError,
    reference: String,
}

impl OrderNotFoundError {
    /// Creates a new `OrderNotFoundError`.
    pub fn new(reference: String) -> Self {
        let base = CustomError::new(
            404,
            format!("order {} not found", reference),
            "The requested order could not be found.",
            "NOT_FOUND",
            "ORD_404",
            false,
        );
        Self {
            base,
            reference,
        }
    }

    /// Returns the `reference` argument of this `OrderNotFoundError`.
    pub fn reference(&self) -> &String {
        &self.reference
    }

    pub fn as_custom_error(&self) -> &CustomError {
        &self.base
    }

    pub fn into_custom_error(self) -> CustomError {
        self.base
    }
}

impl std::fmt::Display for OrderNotFoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.base, f)
    }
}

impl std::error::Error for OrderNotFoundError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.base)
    }
}

impl From<OrderNotFoundError> for CustomError {
    fn from(err: OrderNotFoundError) -> Self {
        err.base
    }
}

/// Creates a `OrderNotFound` error as a [`CustomError`].
pub fn new_order_not_found_error(reference: String) -> CustomError {
    OrderNotFoundError::new(reference).into_custom_error()
}

/// The service is in maintenance mode.
#[derive(Debug)]
pub struct MaintenanceError {
    base: CustomError,
}

impl MaintenanceError {
    /// Creates a new `MaintenanceError`.
    pub fn new() -> Self {
        let base = CustomError::new(
            503,
            format!("maintenance window active, literal {{braces}} kept"),
            "We'll be back shortly.",
            "UNAVAILABLE",
            "SVC_503",
            true,
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

impl std::fmt::Display for MaintenanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.base, f)
    }
}

impl std::error::Error for MaintenanceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.base)
    }
}

impl From<MaintenanceError> for CustomError {
    fn from(err: MaintenanceError) -> Self {
        err.base
    }
}

/// Creates a `Maintenance` error as a [`CustomError`].
pub fn new_maintenance_error() -> CustomError {
    MaintenanceError::new().into_custom_error()
}
