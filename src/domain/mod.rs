// Domain layer: the speaking capability, the animal family, and the
// vector value type. No dependencies beyond std/serde.

pub mod model;
pub mod ports;
