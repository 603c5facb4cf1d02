//! An [`Animal`] that delegates its sound to a pluggable [`SoundStrategy`].

use crate::{Error, Result};

/// How an animal makes its sound.
pub trait SoundStrategy: Send + Sync {
    fn make_sound(&self) -> &str;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Bark;

impl SoundStrategy for Bark {
    fn make_sound(&self) -> &str {
        "woof"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Meow;

impl SoundStrategy for Meow {
    fn make_sound(&self) -> &str {
        "meow"
    }
}

/// The built-in strategies, selectable by name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Sound {
    Bark,
    Meow,
}

impl Sound {
    pub fn strategy(self) -> Box<dyn SoundStrategy> {
        match self {
            Sound::Bark => Box::new(Bark),
            Sound::Meow => Box::new(Meow),
        }
    }
}

/// Looks up a built-in strategy by name (`"bark"` or `"meow"`).
pub fn sound_strategy(name: &str) -> Result<Box<dyn SoundStrategy>> {
    name.parse::<Sound>()
        .map(Sound::strategy)
        .map_err(|_| Error::UnknownSound(name.to_string()))
}

/// An animal whose sound is decided by its strategy.
pub struct Animal {
    sound: Box<dyn SoundStrategy>,
}

impl Animal {
    pub fn new(sound: impl SoundStrategy + 'static) -> Self {
        Self {
            sound: Box::new(sound),
        }
    }

    pub fn from_boxed(sound: Box<dyn SoundStrategy>) -> Self {
        Self { sound }
    }

    pub fn make_sound(&self) -> &str {
        self.sound.make_sound()
    }
}
