//! Closed enumerations backed by fixed text labels.
//!
//! Profile fields such as learning style and time commitment are stored as
//! TEXT and exchanged over JSON using their human-readable label. The
//! [`define_label_enum!`] macro generates the enum together with its label
//! table so the two can never drift apart.

/// Define a `Copy` enum whose variants map one-to-one onto string labels.
///
/// Generates `ALL`, `label()`, `from_label()`, `Display`, `FromStr`
/// (failing with [`CoreError::Validation`](crate::error::CoreError)) and
/// serde impls that use the label as the wire value.
macro_rules! define_label_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($what:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
        )]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $label)] $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// The stored / wire label for this variant.
            pub fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }

            /// Look up a variant by its exact label.
            pub fn from_label(value: &str) -> Option<Self> {
                match value {
                    $( $label => Some($name::$variant), )+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::CoreError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::from_label(value.trim()).ok_or_else(|| {
                    let valid: Vec<&str> = Self::ALL.iter().map(|v| v.label()).collect();
                    $crate::error::CoreError::Validation(format!(
                        "Invalid {} '{value}'. Must be one of: {valid:?}",
                        $what
                    ))
                })
            }
        }
    };
}
