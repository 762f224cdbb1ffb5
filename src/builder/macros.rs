//! Macros for declaring state and event enums.

/// Generate a fieldless enum with a `State` implementation.
///
/// # Example
///
/// ```
/// use keystone::state_enum;
/// use keystone::core::State;
///
/// state_enum! {
///     pub enum OrderState {
///         Placed,
///         Shipped,
///         Delivered,
///     }
///     final: [Delivered]
/// }
///
/// assert_eq!(OrderState::Shipped.name(), "Shipped");
/// assert!(OrderState::Delivered.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            pub const ALL: &'static [$name] = &[$($name::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}

/// Generate a fieldless enum with an `Event` implementation.
///
/// # Example
///
/// ```
/// use keystone::event_enum;
/// use keystone::core::Event;
///
/// event_enum! {
///     pub enum OrderEvent {
///         Ship,
///         Deliver,
///     }
/// }
///
/// assert_eq!(OrderEvent::Ship.name(), "Ship");
/// assert_eq!(OrderEvent::ALL.len(), 2);
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            pub const ALL: &'static [$name] = &[$($name::$variant),*];
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
