use serde::{Deserialize, Serialize};

/// Capacity representation used by the Edmonds-Karp solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowBackend {
    /// Adjacency maps; grows with the number of edges.
    #[default]
    Sparse,
    /// Full capacity matrix; grows with the square of the vertex count.
    Dense,
}

/// Knobs for elimination queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EliminationConfig {
    pub backend: FlowBackend,
    /// Re-check every flow-derived certificate with the counting argument
    /// before handing it out.
    pub verify_certificates: bool,
}

impl Default for EliminationConfig {
    fn default() -> Self {
        Self {
            backend: FlowBackend::default(),
            verify_certificates: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = EliminationConfig::default();
        assert_eq!(cfg.backend, FlowBackend::Sparse);
        assert!(cfg.verify_certificates);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let cfg = EliminationConfig {
            backend: FlowBackend::Dense,
            verify_certificates: false,
        };
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains("\"dense\""));
        let restored: EliminationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cfg);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let cfg: EliminationConfig = serde_json::from_str(r#"{"backend": "dense"}"#).unwrap();
        assert_eq!(cfg.backend, FlowBackend::Dense);
        assert!(cfg.verify_certificates);
    }
}
