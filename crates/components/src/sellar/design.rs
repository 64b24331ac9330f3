use serde::{Deserialize, Serialize};

/// Design variables of the two-discipline system.
///
/// These are exogenous inputs controlled by an outer driver. They are set
/// once per evaluation and held fixed while the coupling iteration runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignVariables {
    pub x: f64,
    pub z1: f64,
    pub z2: f64,
}
