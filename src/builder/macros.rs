//! Macros for ergonomic state machine construction.

/// Resolve a variant's display label: explicit literal if given, the
/// variant identifier otherwise. Implementation detail of [`state_enum!`]
/// and [`action_enum!`].
#[doc(hidden)]
#[macro_export]
macro_rules! __variant_label {
    ($variant:ident) => {
        stringify!($variant)
    };
    ($variant:ident $label:literal) => {
        $label
    };
}

/// Generate a state enum and its `State` trait implementation.
///
/// Variant names double as state names by default; a `=> "label"` form
/// overrides them for states whose observable name is not a valid
/// identifier (e.g. `"Logged Out"`).
///
/// # Example
///
/// ```
/// use lockstep::core::State;
/// use lockstep::state_enum;
///
/// state_enum! {
///     pub enum JobState {
///         Queued,
///         Running,
///         Done,
///     }
///     final: [Done]
/// }
///
/// assert_eq!(JobState::Queued.name(), "Queued");
/// assert!(JobState::Done.is_final());
///
/// state_enum! {
///     pub enum LampState {
///         On => "Switched On",
///         Off => "Switched Off",
///     }
/// }
///
/// assert_eq!(LampState::On.name(), "Switched On");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(=> $label:literal)?
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::__variant_label!($variant $($label)?)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }
        }
    };
}

/// Generate an action enum and its `Action` trait implementation.
///
/// Same shape as [`state_enum!`], minus the `final:` list (actions have no
/// terminal notion).
///
/// # Example
///
/// ```
/// use lockstep::action_enum;
/// use lockstep::core::Action;
///
/// action_enum! {
///     pub enum CraneAction {
///         Raise => "raise load",
///         Lower => "lower load",
///         Hold,
///     }
/// }
///
/// assert_eq!(CraneAction::Raise.name(), "raise load");
/// assert_eq!(CraneAction::Hold.name(), "Hold");
/// ```
#[macro_export]
macro_rules! action_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(=> $label:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Action for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::__variant_label!($variant $($label)?)),*
                }
            }
        }
    };
}
