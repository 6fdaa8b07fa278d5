/// Declares a string newtype that is trimmed on construction and rejects
/// empty values.
macro_rules! required_string {
    ($ident:ident) => {
        #[::nutype::nutype(
            sanitize(trim),
            validate(not_empty),
            derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, AsRef, Display, Serialize)
        )]
        pub struct $ident(String);
    };
}

pub(crate) use required_string;
