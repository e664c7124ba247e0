use crate::kind::AttributeKind;
use crate::numeric::Numeric;

/// Default value marker meaning "no explicit default".
pub const DEFAULT_NOT_APPLICABLE: &str = "NA";

/// One symbolic member of an enumeration, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    pub key: String,
    pub value: i64,
}

impl EnumMember {
    pub fn new(key: impl Into<String>, value: i64) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Uniform view over anything that declares a named enumeration.
///
/// Project attributes and method parameters both produce this view so the
/// enum generators only deal with one shape.
#[derive(Debug, Clone, Copy)]
pub struct EnumView<'a> {
    pub name: &'a str,
    pub members: &'a [EnumMember],
    pub include_errno: bool,
}

/// An attribute selected for the target project, with optional schema
/// fields resolved to their defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectAttribute {
    pub id: u32,
    pub name: String,
    /// C type token as declared (`uint8_t`, `string`, ...).
    pub ctype: String,
    /// Declared default rendered as text (`NA` when not applicable).
    pub default: String,
    pub array_size: usize,
    /// Lower bound; a minimum length for strings.
    pub minimum: Numeric,
    /// Upper bound; a maximum length for strings.
    pub maximum: Numeric,
    pub lockable: bool,
    pub broadcast: bool,
    pub readable: bool,
    pub writable: bool,
    pub savable: bool,
    pub deprecated: bool,
    /// Custom validator name, empty when the type default applies.
    pub validator: String,
    pub prepare: bool,
    pub enumeration: Vec<EnumMember>,
    pub enum_include_errno: bool,
}

impl ProjectAttribute {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        ctype: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            ctype: ctype.into(),
            default: default.into(),
            ..Self::default()
        }
    }

    pub fn kind(&self) -> AttributeKind {
        AttributeKind::classify(&self.ctype, self.array_size)
    }

    pub fn is_string(&self) -> bool {
        self.ctype == "string"
    }

    pub fn has_enum(&self) -> bool {
        !self.enumeration.is_empty()
    }

    /// Maximum string length (excluding the terminator); zero for non-strings.
    pub fn string_max(&self) -> usize {
        if self.is_string() {
            self.maximum.as_count()
        } else {
            0
        }
    }

    pub fn enum_view(&self) -> Option<EnumView<'_>> {
        self.has_enum().then(|| EnumView {
            name: &self.name,
            members: &self.enumeration,
            include_errno: self.enum_include_errno,
        })
    }
}

/// Enumeration declared on the first parameter of an RPC method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodEnum {
    pub name: String,
    pub members: Vec<EnumMember>,
    pub include_errno: bool,
}

impl MethodEnum {
    pub fn view(&self) -> EnumView<'_> {
        EnumView {
            name: &self.name,
            members: &self.members,
            include_errno: self.include_errno,
        }
    }
}
