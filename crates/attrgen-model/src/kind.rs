use std::fmt;

/// Coarse attribute type, derived from the declared C type and array length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    String,
    ByteArray,
    Float,
    S8,
    S16,
    S32,
    S64,
    U8,
    U16,
    U32,
    U64,
    Bool,
    Unknown,
}

impl AttributeKind {
    /// Classify a C type token.
    ///
    /// Total over all inputs: `string` always wins, then any non-zero array
    /// length makes a byte array (only u8 arrays are supported by the
    /// firmware), then the primitive token. Unrecognized tokens are
    /// [`AttributeKind::Unknown`].
    pub fn classify(ctype: &str, array_size: usize) -> Self {
        if ctype == "string" {
            return Self::String;
        }
        if array_size != 0 {
            return Self::ByteArray;
        }
        match ctype {
            "float" => Self::Float,
            "int8_t" => Self::S8,
            "int16_t" => Self::S16,
            "int32_t" => Self::S32,
            "int64_t" => Self::S64,
            "bool" => Self::Bool,
            "uint8_t" => Self::U8,
            "uint16_t" => Self::U16,
            "uint32_t" => Self::U32,
            "uint64_t" => Self::U64,
            _ => Self::Unknown,
        }
    }

    /// Suffix shared by the `ATTR_TYPE_*` and `ATTR_SIZE_*` firmware macros.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "STRING",
            Self::ByteArray => "BYTE_ARRAY",
            Self::Float => "FLOAT",
            Self::S8 => "S8",
            Self::S16 => "S16",
            Self::S32 => "S32",
            Self::S64 => "S64",
            Self::U8 => "U8",
            Self::U16 => "U16",
            Self::U32 => "U32",
            Self::U64 => "U64",
            Self::Bool => "BOOL",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// `ATTR_TYPE_*` tag used in the attribute table.
    pub fn type_tag(&self) -> String {
        format!("ATTR_TYPE_{}", self.as_str())
    }

    /// `ATTR_SIZE_*` tag used by the enum size assertions.
    pub fn size_tag(&self) -> String {
        format!("ATTR_SIZE_{}", self.as_str())
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_tag())
    }
}
