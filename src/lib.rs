/// Generate Go interface declarations from the method set of a named type
pub mod config;
pub mod error;
pub mod extract;
pub mod io;
pub mod loader;
pub mod locator;
pub mod parsing;
pub mod pipeline;
pub mod render;

// Explicit exports for better API clarity
pub use config::Settings;
pub use error::{GenError, GenResult};
pub use extract::{MethodSet, MethodSignature, ReceiverBinding, SignatureExtractor};
pub use loader::{SourceLoader, SourceUnit, Span};
pub use locator::{LocationOrigin, PackageLocation, PackageLocator};
pub use pipeline::{Diagnostic, Generator, Report};
pub use render::{GeneratedInterface, InterfaceRenderer};
