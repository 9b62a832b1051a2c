//! Form steps

use std::fmt;

use crate::models::{AddressDetails, ClientType, Field};

/// One screen of the signup form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Step {
    /// Email and password
    #[default]
    Credentials,
    /// Individual or company identity
    ClientDetails,
    /// Postal address, then submit
    Address,
}

impl Step {
    /// Number of steps in the flow
    pub const COUNT: usize = 3;

    /// 1-based position of the step
    pub fn index(self) -> usize {
        match self {
            Self::Credentials => 1,
            Self::ClientDetails => 2,
            Self::Address => 3,
        }
    }

    /// The following step, if any
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Credentials => Some(Self::ClientDetails),
            Self::ClientDetails => Some(Self::Address),
            Self::Address => None,
        }
    }

    /// The preceding step, if any
    pub fn prev(self) -> Option<Self> {
        match self {
            Self::Credentials => None,
            Self::ClientDetails => Some(Self::Credentials),
            Self::Address => Some(Self::ClientDetails),
        }
    }

    pub fn is_first(self) -> bool {
        self.prev().is_none()
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    /// Screen title
    pub fn title(self) -> &'static str {
        match self {
            Self::Credentials => "Dados de Acesso",
            Self::ClientDetails => "Dados do Cliente",
            Self::Address => "Endereço",
        }
    }

    /// Text fields shown on this step for the given client type
    pub fn fields(self, client_type: ClientType) -> &'static [Field] {
        match self {
            Self::Credentials => &[Field::Email, Field::Password],
            Self::ClientDetails => client_type.fields(),
            Self::Address => &AddressDetails::FIELDS,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Etapa {} de {}: {}", self.index(), Self::COUNT, self.title())
    }
}
