//! Helper macro for port error enums.
//!
//! Every variant carries a single `message` field; the macro derives
//! `thiserror::Error` and adds a snake-case constructor per variant accepting
//! `impl Into<String>`.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { message: String },
            )*
        }

        impl $name {
            $(
                ::paste::paste! {
                    pub fn [<$variant:snake>](message: impl Into<String>) -> Self {
                        Self::$variant {
                            message: message.into(),
                        }
                    }
                }
            )*

            /// Adapter-supplied detail carried by the error.
            pub fn message(&self) -> &str {
                match self {
                    $( Self::$variant { message } => message.as_str(), )*
                }
            }
        }
    };
}

pub(crate) use define_port_error;
