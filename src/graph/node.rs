use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

/// Decodes an explicit `null` the same way as an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A graph vertex: `parameters[i]` is the weight of the edge to `connected_nodes[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkNode {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parameters: Vec<Number>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub connected_nodes: Vec<String>,
}

impl NetworkNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            connected_nodes: Vec::new(),
        }
    }

    pub fn connect(mut self, target: impl Into<String>, weight: impl Into<Number>) -> Self {
        self.connected_nodes.push(target.into());
        self.parameters.push(weight.into());
        self
    }

    pub fn has_matching_lengths(&self) -> bool {
        self.parameters.len() == self.connected_nodes.len()
    }
}
