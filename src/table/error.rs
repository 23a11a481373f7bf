use crate::node::Node;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LookupError {
    #[error("unknown node '{0}'")]
    UnknownNode(String),

    #[error("node size {0} not found in area table")]
    AreaNodeNotFound(u32),

    #[error("node '{0}' not found in device coefficient table")]
    CoefficientNodeNotFound(Node),
}
