//! Pictograph letters and their structural types.
//!
//! Every pictograph is labelled with one symbolic letter describing the
//! pattern formed by its two motions. Letters are grouped into six types by
//! which motion families they combine:
//!
//! | Type | Motions | Letters |
//! |------|---------|---------|
//! | 1 | shift + shift | A-V |
//! | 2 | shift + static | W X Y Z Σ Δ θ Ω |
//! | 3 | shift + dash | W- X- Y- Z- Σ- Δ- θ- Ω- |
//! | 4 | dash + static | Φ Ψ Λ |
//! | 5 | dash + dash | Φ- Ψ- Λ- |
//! | 6 | static + static | α β Γ |

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// Structural grouping of letters by motion family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterType {
    /// Both tracks shift.
    Type1,
    /// One shift, one static.
    Type2,
    /// One shift, one dash.
    Type3,
    /// One dash, one static.
    Type4,
    /// Both tracks dash.
    Type5,
    /// Both tracks static.
    Type6,
}

macro_rules! letters {
    ($($variant:ident => $text:literal, $kind:ident;)*) => {
        /// A pictograph letter.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum Letter {
            $($variant,)*
        }

        impl Letter {
            /// All letters in alphabet order.
            pub const ALL: &'static [Letter] = &[$(Letter::$variant,)*];

            /// Returns the letter as written in notation.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Letter::$variant => $text,)*
                }
            }

            /// Returns the structural type of this letter.
            pub fn letter_type(self) -> LetterType {
                match self {
                    $(Letter::$variant => LetterType::$kind,)*
                }
            }
        }

        impl FromStr for Letter {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Letter::$variant),)*
                    _ => Err(format!("unknown letter `{s}`")),
                }
            }
        }
    };
}

letters! {
    A => "A", Type1;
    B => "B", Type1;
    C => "C", Type1;
    D => "D", Type1;
    E => "E", Type1;
    F => "F", Type1;
    G => "G", Type1;
    H => "H", Type1;
    I => "I", Type1;
    J => "J", Type1;
    K => "K", Type1;
    L => "L", Type1;
    M => "M", Type1;
    N => "N", Type1;
    O => "O", Type1;
    P => "P", Type1;
    Q => "Q", Type1;
    R => "R", Type1;
    S => "S", Type1;
    T => "T", Type1;
    U => "U", Type1;
    V => "V", Type1;
    W => "W", Type2;
    X => "X", Type2;
    Y => "Y", Type2;
    Z => "Z", Type2;
    Sigma => "Σ", Type2;
    Delta => "Δ", Type2;
    Theta => "θ", Type2;
    Omega => "Ω", Type2;
    WDash => "W-", Type3;
    XDash => "X-", Type3;
    YDash => "Y-", Type3;
    ZDash => "Z-", Type3;
    SigmaDash => "Σ-", Type3;
    DeltaDash => "Δ-", Type3;
    ThetaDash => "θ-", Type3;
    OmegaDash => "Ω-", Type3;
    Phi => "Φ", Type4;
    Psi => "Ψ", Type4;
    Lambda => "Λ", Type4;
    PhiDash => "Φ-", Type5;
    PsiDash => "Ψ-", Type5;
    LambdaDash => "Λ-", Type5;
    Alpha => "α", Type6;
    Beta => "β", Type6;
    Gamma => "Γ", Type6;
}

impl TryFrom<String> for Letter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Letter> for String {
    fn from(letter: Letter) -> Self {
        letter.as_str().to_string()
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
