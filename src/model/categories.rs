use serde::{Serialize, Serializer};
use std::fmt;

/// A categorical observation stored as a short text code.
///
/// Decoding is lenient: unknown codes decode to `None` so that a bad value
/// reads as a missing observation instead of an error.
pub trait Categorical: Sized + Copy {
    fn from_code(code: &str) -> Option<Self>;
    fn code(self) -> &'static str;
}

macro_rules! categorical {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => $code:literal $( | $alias:literal )* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];
        }

        impl Categorical for $name {
            fn from_code(code: &str) -> Option<Self> {
                match code.trim() {
                    $( $code $( | $alias )* => Some(Self::$variant), )+
                    _ => None,
                }
            }

            fn code(self) -> &'static str {
                match self {
                    $( Self::$variant => $code ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.code())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.code())
            }
        }
    };
}

categorical! {
    /// Where the tee shot finished on a par 4 or par 5.
    TeeResult {
        Fairway => "fairway" | "calle",
        Left => "left" | "izquierda",
        Right => "right" | "derecha",
        Penalty => "penalty" | "penalidad",
    }
}

categorical! {
    /// Distance to the green before the approach, in meters.
    ApproachZone {
        Under60 => "<60",
        From60To90 => "60-90",
        From90To135 => "90-135",
        From135To180 => "135-180",
        Over180 => ">180",
    }
}

impl ApproachZone {
    /// Zones under 135m, where a bogey counts as a critical error.
    #[must_use]
    pub fn is_short(self) -> bool {
        matches!(self, Self::Under60 | Self::From60To90 | Self::From90To135)
    }
}

categorical! {
    ApproachLie {
        Fairway => "fairway",
        Rough => "rough",
        Bunker => "bunker",
        Recovery => "recovery",
    }
}

categorical! {
    ApproachTarget {
        CenterGreen => "centerGreen" | "centro_green",
        Flag => "flag" | "bandera",
    }
}

categorical! {
    /// Side a missed approach finished on, relative to the pin.
    ErrorSide {
        GoodSide => "goodSide" | "lado_bueno",
        BadSide => "badSide" | "lado_malo",
    }
}

categorical! {
    /// Distance bucket shared by GIR proximity and the first putt.
    ProximityBucket {
        Under3m => "<3m",
        From3To5m => "3-5m",
        From5To10m => "5-10m",
        Over10m => ">10m",
    }
}

categorical! {
    MentalCommitment {
        RoutinePerfect => "routinePerfect" | "perfecto",
        Hesitated => "hesitated" | "dude_en_1",
        LostFocus => "lostFocus" | "perdi_el_foco",
    }
}

/// Serde adapter for `Option<T: Categorical>` fields.
///
/// Use with `#[serde(default, with = "lenient")]`.
pub mod lenient {
    use super::Categorical;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    /// # Errors
    ///
    /// Only fails if the underlying serializer fails.
    pub fn serialize<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Categorical,
    {
        match value {
            Some(v) => serializer.serialize_some(v.code()),
            None => serializer.serialize_none(),
        }
    }

    /// Anything that is not a known code, strings or otherwise, reads as
    /// absent.
    ///
    /// # Errors
    ///
    /// Only fails if the input itself is malformed.
    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Categorical,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(raw.as_str().and_then(T::from_code))
    }
}

/// Decode an optional stored code, treating unknown codes as absent.
#[must_use]
pub fn decode<T: Categorical>(code: Option<&str>) -> Option<T> {
    code.and_then(T::from_code)
}
