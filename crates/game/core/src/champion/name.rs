use core::fmt;
use core::str::FromStr;

use super::error::ChampionError;
use crate::config::GameConfig;

/// A validated champion name: 1 to [`GameConfig::MAX_NAME_LEN`] characters.
///
/// Length counts characters, not bytes. The name is also the key under which
/// a champion is saved, so it is stored exactly as given.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ChampionName(String);

impl ChampionName {
    pub fn parse(name: &str) -> Result<Self, ChampionError> {
        let length = name.chars().count();
        if length == 0 {
            return Err(ChampionError::EmptyName);
        }
        if length > GameConfig::MAX_NAME_LEN {
            return Err(ChampionError::name_too_long(length));
        }
        Ok(Self(name.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ChampionName {
    type Err = ChampionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ChampionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChampionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
