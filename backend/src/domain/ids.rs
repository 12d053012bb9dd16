//! Integer identifiers assigned by the store.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
        )]
        #[serde(transparent)]
        #[schema(value_type = i32, example = 1)]
        pub struct $name(i32);

        impl $name {
            /// Wrap a raw database identifier.
            pub const fn new(raw: i32) -> Self {
                Self(raw)
            }

            /// Raw database identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl From<i32> for $name {
            fn from(raw: i32) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

define_id!(
    /// Identifier of a [`crate::domain::City`].
    CityId
);
define_id!(
    /// Identifier of a [`crate::domain::User`].
    UserId
);
define_id!(
    /// Identifier of a [`crate::domain::Picnic`].
    PicnicId
);
define_id!(
    /// Identifier of a [`crate::domain::PicnicRegistration`].
    RegistrationId
);
