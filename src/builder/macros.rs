//! Macros for declaring cyclic state enums.

/// Generate a `CyclicState` enum from variants listed in cycle order.
///
/// Each variant carries the label it is displayed and serialized as. The
/// first variant is the initial state and the last wraps back to it.
///
/// # Example
///
/// ```
/// use stoplight::core::CyclicState;
/// use stoplight::cycle_enum;
///
/// cycle_enum! {
///     pub enum Crossing {
///         Walk => "WALK",
///         Flashing => "FLASHING",
///         DontWalk => "DONT_WALK",
///     }
/// }
///
/// assert_eq!(Crossing::initial(), Crossing::Walk);
/// assert_eq!(Crossing::DontWalk.next(), Crossing::Walk);
/// assert_eq!(Crossing::Flashing.to_string(), "FLASHING");
/// ```
#[macro_export]
macro_rules! cycle_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $label)]
                $variant
            ),+
        }

        impl $crate::core::CyclicState for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            fn next(&self) -> Self {
                let all = <Self as $crate::core::CyclicState>::all();
                let index = all.iter().position(|s| s == self).unwrap_or(0);
                all[(index + 1) % all.len()]
            }

            fn all() -> &'static [Self] {
                &[$(Self::$variant),+]
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::CyclicState::name(self))
            }
        }
    };
}
