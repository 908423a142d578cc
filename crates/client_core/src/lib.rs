pub mod controller;
pub mod debounce;
pub mod input;
pub mod notify;
pub mod service;
pub mod validation;

pub use controller::{ActionError, DrawInput, SessionController, SessionState};
pub use debounce::DebouncedValidator;
pub use input::RawInput;
pub use notify::{NotificationSink, TracingNotificationSink};
pub use service::{HttpPosetService, MissingPosetService, PosetService, ServiceError};
pub use validation::{validate, ValidationOutcome};
