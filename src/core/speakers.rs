use crate::domain::ports::{Animal, Speaker};
use crate::utils::error::Result;

/// The unoverridden base of the animal family. It supplies only its
/// name and inherits the erroring default `speak`.
#[derive(Debug, Clone, Copy)]
pub struct BaseAnimal;

impl Speaker for BaseAnimal {
    fn kind(&self) -> &'static str {
        "BaseAnimal"
    }
}

impl Animal for BaseAnimal {}

#[derive(Debug, Clone, Copy)]
pub struct Dog;

impl Speaker for Dog {
    fn kind(&self) -> &'static str {
        "Dog"
    }

    fn speak(&self) -> Result<&'static str> {
        Ok("Woof!")
    }
}

impl Animal for Dog {}

#[derive(Debug, Clone, Copy)]
pub struct Cat;

impl Speaker for Cat {
    fn kind(&self) -> &'static str {
        "Cat"
    }

    fn speak(&self) -> Result<&'static str> {
        Ok("Meow!")
    }
}

impl Animal for Cat {}

#[derive(Debug, Clone, Copy)]
pub struct Cow;

impl Speaker for Cow {
    fn kind(&self) -> &'static str {
        "Cow"
    }

    fn speak(&self) -> Result<&'static str> {
        Ok("Moo!")
    }
}

impl Animal for Cow {}

/// Speaks, but is not an `Animal`. Reaches the dispatch layer through
/// the capability bound alone.
#[derive(Debug, Clone, Copy)]
pub struct Human;

impl Speaker for Human {
    fn kind(&self) -> &'static str {
        "Human"
    }

    fn speak(&self) -> Result<&'static str> {
        Ok("Hello!")
    }
}
