//! Bridge layer
//! - types.rs: Request, parameter and capability types
//! - capability.rs: Exact-match protocol version negotiation
//! - translate.rs: Resolve-request to backend-parameter translation
//! - resolver.rs: Resolver callback forwarding to the backend
//! - registrar.rs: One-time registration state machine
//! - error.rs: Error taxonomy

pub mod capability;
pub mod error;
pub mod registrar;
pub mod resolver;
pub mod translate;
pub mod types;

pub use error::{HostError, RegistrationError, ResolveError};
pub use registrar::{BridgeRegistrar, RegistrarState};
pub use resolver::BridgeResolver;
pub use translate::translate;
pub use types::{
    BridgeParam, BridgeRegistration, CapabilityTable, ContextItem, DocumentIdentifier,
    DocumentReference, ResolveRequest,
};
