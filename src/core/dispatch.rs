use crate::domain::ports::{Animal, Speaker};
use crate::utils::error::Result;

/// Announce a member of the animal family. The parameter is constrained
/// to the nominal hierarchy; the printed name and sound still come from
/// the concrete variant behind the reference.
pub fn announce_typed(animal: &dyn Animal) -> Result<String> {
    let line = format!("{} says: {}", animal.kind(), animal.speak()?);
    tracing::debug!(kind = animal.kind(), "typed announcement");
    println!("{line}");
    Ok(line)
}

/// Announce anything that can speak. The bound is the capability alone,
/// so `Human` qualifies without being an `Animal`.
pub fn announce_any<S: Speaker + ?Sized>(speaker: &S) -> Result<String> {
    let line = format!("{} says: {}", speaker.kind(), speaker.speak()?);
    tracing::debug!(kind = speaker.kind(), "capability announcement");
    println!("{line}");
    Ok(line)
}
