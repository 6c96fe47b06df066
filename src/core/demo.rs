use crate::core::dispatch::{announce_any, announce_typed};
use crate::core::speakers::{Cat, Cow, Dog, Human};
use crate::domain::model::Vector2D;
use crate::domain::ports::Animal;
use crate::utils::error::Result;

/// Drives the whole demo in order: typed dispatch over the animal
/// family, capability dispatch including `Human`, then the vector
/// operator overload. Every line is printed to stdout as it is
/// produced; the transcript is returned for assertions.
pub struct DemoEngine;

impl DemoEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self) -> Result<Vec<String>> {
        let mut transcript = Vec::new();

        tracing::info!("running typed dispatch");
        let animals: [&dyn Animal; 3] = [&Dog, &Cat, &Cow];
        for animal in animals {
            transcript.push(announce_typed(animal)?);
        }

        self.section(&mut transcript, "Duck Typing Example:");
        transcript.push(announce_any(&Human)?);
        transcript.push(announce_any(&Dog)?);
        transcript.push(announce_any(&Cat)?);

        self.section(&mut transcript, "Operator Overloading Example:");
        let sum = Vector2D::new(2.0, 3.0) + Vector2D::new(4.0, 5.0);
        let line = sum.to_string();
        println!("{line}");
        transcript.push(line);

        Ok(transcript)
    }

    fn section(&self, transcript: &mut Vec<String>, header: &str) {
        println!();
        transcript.push(String::new());
        println!("{header}");
        transcript.push(header.to_string());
    }
}

impl Default for DemoEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_matches_expected_output() {
        let transcript = DemoEngine::new().run().unwrap();
        let expected = [
            "Dog says: Woof!",
            "Cat says: Meow!",
            "Cow says: Moo!",
            "",
            "Duck Typing Example:",
            "Human says: Hello!",
            "Dog says: Woof!",
            "Cat says: Meow!",
            "",
            "Operator Overloading Example:",
            "Vector(6, 8)",
        ];
        assert_eq!(transcript, expected);
    }
}
