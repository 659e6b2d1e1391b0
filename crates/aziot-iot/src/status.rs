/// Status codes reported by the provisioning and hub services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum Status {
    /// The request succeeded.
    Ok = 200,
    /// The request has been accepted for processing.
    Accepted = 202,
    /// The request succeeded without a response body.
    NoContent = 204,
    /// The request was malformed.
    BadRequest = 400,
    /// The device credentials were refused.
    Unauthorized = 401,
    /// The device is not allowed to perform the request.
    Forbidden = 403,
    /// The requested resource does not exist.
    NotFound = 404,
    /// The method is not allowed for the requested resource.
    NotAllowed = 405,
    /// The request conflicts with the state of the resource.
    NotConflict = 409,
    /// A precondition of the request failed.
    PreconditionFailed = 412,
    /// The request body is too large.
    RequestTooLarge = 413,
    /// The request content type is not supported.
    UnsupportedType = 415,
    /// Too many requests.
    Throttled = 429,
    /// The client closed the request.
    ClientClosed = 499,
    /// The service encountered an internal error.
    ServerError = 500,
    /// An upstream gateway failed.
    BadGateway = 502,
    /// The service is temporarily unavailable.
    ServiceUnavailable = 503,
    /// The service timed out.
    Timeout = 504,
}

impl Status {
    /// All known statuses.
    pub const ALL: [Self; 18] = [
        Self::Ok,
        Self::Accepted,
        Self::NoContent,
        Self::BadRequest,
        Self::Unauthorized,
        Self::Forbidden,
        Self::NotFound,
        Self::NotAllowed,
        Self::NotConflict,
        Self::PreconditionFailed,
        Self::RequestTooLarge,
        Self::UnsupportedType,
        Self::Throttled,
        Self::ClientClosed,
        Self::ServerError,
        Self::BadGateway,
        Self::ServiceUnavailable,
        Self::Timeout,
    ];

    /// Converts a raw service code into a [`Status`].
    #[must_use]
    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.code() == code)
    }

    /// Returns the raw service code.
    #[must_use]
    #[inline]
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Whether a failure with this status is transient, hence worth
    /// retrying with the same credentials.
    ///
    /// Throttling and server-side failures are retriable.
    #[must_use]
    pub const fn is_retriable(self) -> bool {
        matches!(
            self,
            Self::Throttled
                | Self::ServerError
                | Self::BadGateway
                | Self::ServiceUnavailable
                | Self::Timeout
        )
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?} ({})", self.code())
    }
}

/// A classified failure of a provisioning or hub operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IotError {
    /// The transport failed.
    Network,
    /// A credential or a TLS handshake was refused.
    Security,
    /// The service answered with a failure status.
    Service(Status),
    /// An operation could not even be started.
    Unknown,
}

impl IotError {
    /// Whether the operation should be retried with the same credentials.
    ///
    /// Network failures are always retriable, security failures never are,
    /// and service failures depend on their [`Status`].
    #[must_use]
    pub const fn is_retriable(self) -> bool {
        match self {
            Self::Network => true,
            Self::Service(status) => status.is_retriable(),
            Self::Security | Self::Unknown => false,
        }
    }
}

impl core::fmt::Display for IotError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Network => f.write_str("Network"),
            Self::Security => f.write_str("Security"),
            Self::Service(status) => write!(f, "Service: {status}"),
            Self::Unknown => f.write_str("Unknown"),
        }
    }
}

impl core::error::Error for IotError {}

/// The result of a provisioning or hub operation.
pub type OperationResult = core::result::Result<(), IotError>;
