/// What to do with an empty string handed to
/// [`AvlTree::insert`](crate::AvlTree::insert).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EmptyValues {
    /// Refuse with [`Error::InvalidInput`](crate::Error::InvalidInput).
    #[default]
    Reject,
    /// Store it like any other value.
    Accept,
}

/// Tree-wide settings, fixed at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    pub empty_values: EmptyValues,
}

impl Config {
    pub const fn new() -> Self {
        Config {
            empty_values: EmptyValues::Reject,
        }
    }

    pub const fn empty_values(mut self, policy: EmptyValues) -> Self {
        self.empty_values = policy;
        self
    }

    pub(crate) fn check_value(&self, value: &str) -> crate::Result<()> {
        match self.empty_values {
            EmptyValues::Reject if value.is_empty() => Err(crate::Error::InvalidInput(
                "value must not be empty",
            )),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_rejects_empty_values() {
        let config = Config::default();
        assert_eq!(Config::new(), config);
        assert_eq!(
            Err(Error::InvalidInput("value must not be empty")),
            config.check_value("")
        );
        assert_eq!(Ok(()), config.check_value("x"));
    }

    #[test]
    fn accept_lets_empty_values_through() {
        let config = Config::new().empty_values(EmptyValues::Accept);
        assert_eq!(Ok(()), config.check_value(""));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let config = Config::new().empty_values(EmptyValues::Accept);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(r#"{"empty_values":"accept"}"#, json);
        assert_eq!(config, serde_json::from_str(&json).unwrap());
        assert_eq!(Config::default(), serde_json::from_str("{}").unwrap());
    }
}
