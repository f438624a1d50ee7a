use std::{borrow::Cow, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

macro_rules! roles {
    ($($variant:ident => $name:literal,)+) => {
        /// Well-known color roles, named the way scheme files spell them.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Role {
            $($variant,)+
        }

        impl Role {
            pub const ALL: &'static [Role] = &[$(Role::$variant,)+];

            /// Token name as it appears in scheme files.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Role::$variant => $name,)+
                }
            }
        }

        impl FromStr for Role {
            type Err = UnknownRole;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Role::$variant),)+
                    _ => Err(UnknownRole(s.to_owned())),
                }
            }
        }
    };
}

roles! {
    Primary => "primary",
    OnPrimary => "onPrimary",
    PrimaryContainer => "primaryContainer",
    OnPrimaryContainer => "onPrimaryContainer",
    Secondary => "secondary",
    OnSecondary => "onSecondary",
    SecondaryContainer => "secondaryContainer",
    OnSecondaryContainer => "onSecondaryContainer",
    Tertiary => "tertiary",
    OnTertiary => "onTertiary",
    TertiaryContainer => "tertiaryContainer",
    OnTertiaryContainer => "onTertiaryContainer",
    Error => "error",
    OnError => "onError",
    ErrorContainer => "errorContainer",
    OnErrorContainer => "onErrorContainer",
    Background => "background",
    OnBackground => "onBackground",
    Surface => "surface",
    OnSurface => "onSurface",
    SurfaceVariant => "surfaceVariant",
    OnSurfaceVariant => "onSurfaceVariant",
    SurfaceDim => "surfaceDim",
    SurfaceBright => "surfaceBright",
    SurfaceContainerLowest => "surfaceContainerLowest",
    SurfaceContainerLow => "surfaceContainerLow",
    SurfaceContainer => "surfaceContainer",
    SurfaceContainerHigh => "surfaceContainerHigh",
    SurfaceContainerHighest => "surfaceContainerHighest",
    Outline => "outline",
    OutlineVariant => "outlineVariant",
    Shadow => "shadow",
    Scrim => "scrim",
    InverseSurface => "inverseSurface",
    InverseOnSurface => "inverseOnSurface",
    InversePrimary => "inversePrimary",
}

impl Role {
    /// Typed `<role>Container` / `on<Role>Container` pair for the accent and error families.
    pub fn container_pair(self) -> Option<(Role, Role)> {
        match self {
            Role::Primary => Some((Role::PrimaryContainer, Role::OnPrimaryContainer)),
            Role::Secondary => Some((Role::SecondaryContainer, Role::OnSecondaryContainer)),
            Role::Tertiary => Some((Role::TertiaryContainer, Role::OnTertiaryContainer)),
            Role::Error => Some((Role::ErrorContainer, Role::OnErrorContainer)),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown color role '{0}'")]
pub struct UnknownRole(pub String);

/// Name of a token to look up: a typed [`Role`] or any free-form key.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenKey(Cow<'static, str>);

impl TokenKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Role> for TokenKey {
    fn from(role: Role) -> Self {
        Self(Cow::Borrowed(role.as_str()))
    }
}

impl From<String> for TokenKey {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl From<&str> for TokenKey {
    fn from(name: &str) -> Self {
        Self(Cow::Owned(name.to_owned()))
    }
}

impl fmt::Display for TokenKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Background/foreground pair for a selected or active affordance.
///
/// Any base name `x` pairs `xContainer` (background) with `onXContainer` (foreground), whether or
/// not `x` is a known [`Role`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContainerPair {
    pub container: TokenKey,
    pub on_container: TokenKey,
}

impl ContainerPair {
    pub fn of(base: impl Into<TokenKey>) -> Self {
        let base = base.into();
        let name = base.as_str();
        if let Ok(role) = name.parse::<Role>()
            && let Some((container, on_container)) = role.container_pair()
        {
            return Self {
                container: container.into(),
                on_container: on_container.into(),
            };
        }

        let mut chars = name.chars();
        let capitalized: String = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        Self {
            container: format!("{name}Container").into(),
            on_container: format!("on{capitalized}Container").into(),
        }
    }
}
