pub mod fixture;
pub mod model;
pub mod node;
pub mod serializer;

pub use model::{ApiError, GraphId, GraphRequest, GraphResponse, NetworkGraph};
pub use node::NetworkNode;
