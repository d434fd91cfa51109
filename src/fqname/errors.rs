//! Descriptor parse errors.

use miette::Diagnostic;
use thiserror::Error;

/// A line that looked like a fully-qualified name but does not parse as one.
///
/// These are recoverable: the generator reports the line and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ParseError {
    #[error("missing `::` between package and interface")]
    #[diagnostic(code(fcm::parse::missing_interface_separator))]
    MissingInterfaceSeparator,

    #[error("missing `@` between package and version")]
    #[diagnostic(code(fcm::parse::missing_version_separator))]
    MissingVersionSeparator,

    #[error("invalid version `{version}`")]
    #[diagnostic(
        code(fcm::parse::invalid_version),
        help("HIDL versions are written `<major>.<minor>`, e.g. `1.0`")
    )]
    InvalidVersion { version: String },

    #[error("missing `.` between package and interface")]
    #[diagnostic(code(fcm::parse::missing_package_separator))]
    MissingPackageSeparator,

    #[error("too many `/` in `{tail}`")]
    #[diagnostic(
        code(fcm::parse::too_many_instance_separators),
        help("AIDL names take at most one instance: `package.IFoo/instance`")
    )]
    TooManyInstanceSeparators { tail: String },

    #[error("empty {component}")]
    #[diagnostic(code(fcm::parse::empty_component))]
    EmptyComponent { component: &'static str },
}
