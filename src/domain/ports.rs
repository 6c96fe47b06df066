use crate::utils::error::{DemoError, Result};

/// Capability exposed by anything that can produce a greeting or sound.
///
/// A value qualifies for the duck-typed dispatch path purely by
/// implementing this trait; no relationship to the animal family is
/// required.
pub trait Speaker {
    /// Runtime name of the concrete variant, used in announcements.
    fn kind(&self) -> &'static str;

    /// The sound or greeting this speaker produces.
    ///
    /// The default body fails: a concrete variant that does not supply
    /// its own sound surfaces `UnimplementedOperation` instead of
    /// staying silent.
    fn speak(&self) -> Result<&'static str> {
        Err(DemoError::UnimplementedOperation { kind: self.kind() })
    }
}

/// Marker for the nominal animal family.
///
/// `Human` speaks too but is deliberately left outside this family, so
/// it is only reachable through the capability-constrained dispatch.
pub trait Animal: Speaker {}
