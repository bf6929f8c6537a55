/// The kind of error that occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request could not be delivered, or the backend answered with
    /// a non-successful status.
    Request,
    /// The backend returned a payload that cannot be interpreted.
    Parse,
    /// The backend is rate limited.
    RateLimitExceeded,
    /// Any other errors.
    Other,
}
