use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

macro_rules! id_newtype {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(
            Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Eq, PartialEq, Ord, PartialOrd, Hash,
        )]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

id_newtype!(CourseCode, "Stable identifier of a course offering, e.g. `CS-201`.");
id_newtype!(TeacherName, "A teacher/lecturer identifier, as it appears in course metadata.");
id_newtype!(RoomId, "A room number/identifier.");
id_newtype!(GroupId, "A student group identifier, derived as `\"<field>-<degree>\"`.");
