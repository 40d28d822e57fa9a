use std::{
    borrow::Cow,
    fmt,
    ops::{Deref, DerefMut},
};

use serde::{Deserialize, Serialize};

/// Unique identifier for any entity in the graph, `Cow<'static, str>` newtype.
///
/// Must begin with a letter or underscore, and contain only letters, numbers,
/// and underscores. This mirrors the identifier grammar used throughout the
/// state API so that node, edge, container, and hyper-edge ids can be
/// round-tripped through serialization without re-validation surprises.
///
/// # Examples
///
/// ```rust
/// use vizcore_model_common::Id;
///
/// let id = Id::new("n1").unwrap();
/// assert_eq!(id.as_str(), "n1");
///
/// assert!(Id::new("1n").is_err());
/// assert!(Id::new("").is_err());
/// ```
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Id(Cow<'static, str>);

impl Id {
    /// Creates a new [`Id`], validating the identifier grammar.
    pub fn new(id: impl Into<Cow<'static, str>>) -> Result<Self, IdInvalidFmt> {
        let id = id.into();
        Self::validate(&id)?;
        Ok(Self(id))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the underlying `Cow<'static, str>`.
    pub fn into_inner(self) -> Cow<'static, str> {
        self.0
    }

    fn validate(id: &str) -> Result<(), IdInvalidFmt> {
        let mut chars = id.chars();
        let first = chars.next().ok_or(IdInvalidFmt::Empty)?;
        if !(first.is_ascii_alphabetic() || first == '_') {
            return Err(IdInvalidFmt::BadFirstChar {
                id: id.to_string(),
                first,
            });
        }
        if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
            return Err(IdInvalidFmt::BadChar {
                id: id.to_string(),
                bad,
            });
        }
        Ok(())
    }
}

impl TryFrom<String> for Id {
    type Error = IdInvalidFmt;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Id::new(value)
    }
}

impl From<Id> for String {
    fn from(id: Id) -> Self {
        id.0.into_owned()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Deref for Id {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Error returned when an identifier does not match the required grammar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IdInvalidFmt {
    /// The identifier was empty.
    Empty,
    /// The first character was not a letter or underscore.
    BadFirstChar { id: String, first: char },
    /// A character after the first was not alphanumeric or an underscore.
    BadChar { id: String, bad: char },
}

impl fmt::Display for IdInvalidFmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdInvalidFmt::Empty => write!(f, "id must not be empty"),
            IdInvalidFmt::BadFirstChar { id, first } => write!(
                f,
                "id `{id}` must begin with a letter or underscore, found `{first}`"
            ),
            IdInvalidFmt::BadChar { id, bad } => write!(
                f,
                "id `{id}` contains `{bad}`, only letters, numbers, and underscores are allowed"
            ),
        }
    }
}

impl std::error::Error for IdInvalidFmt {}

macro_rules! id_newtype {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
        pub struct $name(Id);

        impl $name {
            /// Creates a new identifier from a string, validating the
            /// identifier grammar.
            pub fn new(id: impl Into<Cow<'static, str>>) -> Result<Self, IdInvalidFmt> {
                Id::new(id).map($name)
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }

            /// Returns the underlying [`Id`].
            pub fn into_inner(self) -> Id {
                self.0
            }
        }

        impl From<Id> for $name {
            fn from(id: Id) -> Self {
                $name(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl Deref for $name {
            type Target = Id;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl AsRef<Id> for $name {
            fn as_ref(&self) -> &Id {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }
    };
}

id_newtype!(NodeId, "Stable identifier for a [`Node`](crate) in the graph.");
id_newtype!(EdgeId, "Stable identifier for a regular [`Edge`](crate).");
id_newtype!(
    ContainerId,
    "Stable identifier for a [`Container`](crate) that may be collapsed or expanded."
);
id_newtype!(
    HyperEdgeId,
    "Canonical identifier for a [`HyperEdge`](crate), derived from its endpoints as \
     `hyper_<source>__to__<target>`."
);

impl HyperEdgeId {
    /// Builds the canonical hyper-edge id for a `(source, target)` pair.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vizcore_model_common::{ContainerId, HyperEdgeId, NodeId};
    ///
    /// let c1 = ContainerId::new("c1").unwrap();
    /// let n3 = NodeId::new("n3").unwrap();
    /// let hid = HyperEdgeId::canonical(c1.as_str(), n3.as_str());
    /// assert_eq!(hid.as_str(), "hyper_c1__to__n3");
    /// ```
    pub fn canonical(source: &str, target: &str) -> Self {
        let id = Id::new(format!("hyper_{source}__to__{target}"))
            .expect("source and target ids are already validated identifiers");
        HyperEdgeId(id)
    }
}
